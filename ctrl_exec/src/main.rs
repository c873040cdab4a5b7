//! Main controller executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logging and modules
//!     - Main loop:
//!         - Proximity reading acquisition
//!         - Obstacle avoidance processing
//!         - Wheel command dispatch
//!         - Archiving
//!
//! Readings are replayed from a CSV log given on the command line and the
//! wheel commands are archived into the session directory.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{info, warn};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use structopt::StructOpt;

// Internal
use ctrl_lib::{
    cycle::run_cycle,
    obst_avoid::ObstAvoid,
    prox_source::{Layout, ReplaySource, SourceError},
    wheel_sink::ArchSink,
};
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    module::State,
    params,
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Archive path of the ObstAvoid status reports.
const STATUS_REPORT_ARCH_PATH: &str = "obst_avoid/status_report.csv";

// ---------------------------------------------------------------------------
// STRUCTURES
// ---------------------------------------------------------------------------

/// Reactive obstacle avoidance controller.
///
/// Replays a proximity log through the obstacle avoidance controller at a
/// fixed cycle period, archiving the resulting wheel commands.
#[derive(Debug, StructOpt)]
#[structopt(name = "ctrl_exec")]
struct Opt {
    /// Path to the CSV proximity log to replay.
    #[structopt(parse(from_os_str))]
    replay: PathBuf,

    /// ObstAvoid parameter file, relative to the params directory.
    #[structopt(long, default_value = "obst_avoid.toml")]
    params: String,

    /// Proximity sensor layout parameter file, relative to the params
    /// directory.
    #[structopt(long, default_value = "prox.toml")]
    prox_params: String,

    /// Stop after this many cycles, even if the log has more rows.
    #[structopt(long)]
    cycles: Option<u64>,

    /// Target period of one cycle.
    ///
    /// Units: seconds
    #[structopt(long, default_value = "0.1")]
    period: f64,

    /// Minimum level of log messages.
    #[structopt(long, default_value = "debug")]
    log_level: LevelFilter,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opt = Opt::from_args();

    // ---- EARLY INITIALISATION ----

    let session = Session::new("ctrl_exec", "sessions").wrap_err("Failed to create the session")?;

    logger_init(opt.log_level, &session).wrap_err("Failed to initialise logging")?;

    info!("Reactive Controller Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    let cycle_period = cycle_period(opt.period)?;

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let mut obst_avoid = ObstAvoid::default();
    obst_avoid
        .init(opt.params.clone(), &session)
        .wrap_err("Failed to initialise ObstAvoid")?;
    info!("ObstAvoid init complete");

    let layout: Layout =
        params::load(&opt.prox_params).wrap_err("Could not load the proximity layout")?;
    info!("Proximity layout has {} sensors", layout.num_sensors());

    let mut source = ReplaySource::from_path(&opt.replay, layout)
        .wrap_err_with(|| format!("Failed to open the replay log {:?}", opt.replay))?;
    info!("Replaying proximity log {:?}", opt.replay);

    let mut sink = ArchSink::new(&session).wrap_err("Failed to initialise the wheel sink")?;
    let mut status_arch = Archiver::from_path(&session, STATUS_REPORT_ARCH_PATH)
        .wrap_err("Failed to initialise the status report archive")?;

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let mut num_cycles: u64 = 0;
    let mut num_degraded: u64 = 0;

    loop {
        if let Some(max_cycles) = opt.cycles {
            if num_cycles >= max_cycles {
                info!("Cycle limit of {} reached", max_cycles);
                break;
            }
        }

        let cycle_start_instant = Instant::now();

        let report = match run_cycle(&mut source, &obst_avoid, &mut sink) {
            Ok(r) => r,
            Err(SourceError::Exhausted) => {
                info!("End of the proximity log");
                break;
            }
            Err(e) => return Err(e).wrap_err("Unexpected cycle failure"),
        };

        if report.degraded {
            num_degraded += 1;
        }

        if let Err(e) = status_arch.serialise(report.status) {
            warn!("Could not archive the ObstAvoid status report: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => thread::sleep(d),
            None => warn!(
                "Cycle overran by {:.06} s",
                cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
            ),
        }

        num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    info!(
        "Executed {} cycles ({} degraded), {} wheel commands sent",
        num_cycles,
        num_degraded,
        sink.num_cmds()
    );
    info!("End of execution");

    Ok(())
}

/// Convert the requested cycle period into a `Duration`.
///
/// Rejects non-positive periods and those which cannot be represented, such
/// as NaN or `1e30`.
fn cycle_period(period_s: f64) -> Result<Duration, Report> {
    if period_s <= 0.0 {
        return Err(eyre!("The cycle period must be positive, found {}", period_s));
    }
    Duration::try_from_secs_f64(period_s)
        .map_err(|e| eyre!("Invalid cycle period {}: {}", period_s, e))
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

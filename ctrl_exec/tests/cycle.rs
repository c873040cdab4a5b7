use std::collections::VecDeque;

use approx::assert_relative_eq;
use ctrl_lib::{
    cycle::run_cycle,
    obst_avoid::{ObstAvoid, Params, ReadingSet, SensorReading, WheelCommand},
    prox_source::{FixedSource, Layout, ReadingSource, ReplaySource, SourceError},
    wheel_sink::WheelActuator,
};

/// Source handing out a scripted sequence of results, then exhausted.
struct ScriptedSource {
    script: VecDeque<Result<ReadingSet, SourceError>>,
    num_calls: usize,
}

impl ScriptedSource {
    fn new(script: Vec<Result<ReadingSet, SourceError>>) -> Self {
        Self {
            script: script.into(),
            num_calls: 0,
        }
    }
}

impl ReadingSource for ScriptedSource {
    fn get_readings(&mut self) -> Result<ReadingSet, SourceError> {
        self.num_calls += 1;
        self.script.pop_front().unwrap_or(Err(SourceError::Exhausted))
    }
}

/// Sink recording every command it receives.
#[derive(Default)]
struct RecordingSink {
    cmds: Vec<WheelCommand>,
}

impl WheelActuator for RecordingSink {
    fn set_wheel_velocities(&mut self, left: f64, right: f64) {
        self.cmds.push(WheelCommand { left, right });
    }
}

fn obst_avoid() -> ObstAvoid {
    ObstAvoid::new(Params::default()).unwrap()
}

#[test]
fn test_one_read_one_dispatch_per_cycle() {
    let obst_avoid = obst_avoid();
    let mut source = ScriptedSource::new(vec![
        Ok(vec![SensorReading::from_deg(0.05, 90.0)]),
        Ok(vec![]),
    ]);
    let mut sink = RecordingSink::default();

    let first = run_cycle(&mut source, &obst_avoid, &mut sink).unwrap();
    assert_eq!(source.num_calls, 1);
    assert_eq!(sink.cmds.len(), 1);
    assert!(!first.degraded);
    assert_relative_eq!(first.cmd.left, 3.5, epsilon = 1e-12);
    assert_relative_eq!(first.cmd.right, 1.5, epsilon = 1e-12);

    // The previous cycle's obstacle has no influence on this one
    let second = run_cycle(&mut source, &obst_avoid, &mut sink).unwrap();
    assert_eq!(source.num_calls, 2);
    assert_eq!(second.cmd, WheelCommand::straight(2.5));
    assert_eq!(sink.cmds, vec![first.cmd, second.cmd]);
}

#[test]
fn test_source_fault_cruises() {
    let obst_avoid = obst_avoid();
    let mut source = ScriptedSource::new(vec![Err(SourceError::InvalidIntensity {
        sensor: 3,
        value: -1.0,
    })]);
    let mut sink = RecordingSink::default();

    let report = run_cycle(&mut source, &obst_avoid, &mut sink).unwrap();

    assert!(report.degraded);
    assert_eq!(report.status.num_readings, 0);
    assert_eq!(sink.cmds, vec![WheelCommand::straight(2.5)]);
}

#[test]
fn test_exhausted_source_dispatches_nothing() {
    let obst_avoid = obst_avoid();
    let mut source = ScriptedSource::new(vec![]);
    let mut sink = RecordingSink::default();

    let res = run_cycle(&mut source, &obst_avoid, &mut sink);

    assert!(matches!(res, Err(SourceError::Exhausted)));
    assert!(sink.cmds.is_empty());
}

#[test]
fn test_fixed_source_repeats() {
    let obst_avoid = obst_avoid();
    let mut source = FixedSource::new(vec![
        SensorReading::from_deg(0.5, 5.0),
        SensorReading::from_deg(0.5, -5.0),
    ]);
    let mut sink = RecordingSink::default();

    let first = run_cycle(&mut source, &obst_avoid, &mut sink).unwrap();
    let second = run_cycle(&mut source, &obst_avoid, &mut sink).unwrap();

    assert_eq!(first, second);
    assert_ne!(first.cmd.left, first.cmd.right);
    assert!(first.cmd.left >= 0.5 && first.cmd.right >= 0.5);
}

#[test]
fn test_replay_through_dyn_ports() {
    let log = "\
s0,s1,s2,s3
0.0,0.0,0.0,0.0
0.0,0.0,0.0,0.8
0.0,bad,0.0,0.0
";
    let layout = Layout {
        bearings_deg: vec![45.0, 135.0, 225.0, 315.0],
    };
    let obst_avoid = obst_avoid();
    let mut source = ReplaySource::from_reader(log.as_bytes(), layout);
    let mut sink = RecordingSink::default();

    let mut reports = Vec::new();
    {
        let source: &mut dyn ReadingSource = &mut source;
        let sink: &mut dyn WheelActuator = &mut sink;

        while let Ok(report) = run_cycle(source, &obst_avoid, sink) {
            reports.push(report);
        }
    }

    assert_eq!(reports.len(), 3);
    assert_eq!(sink.cmds.len(), 3);

    // Clear log row
    assert_eq!(reports[0].cmd, WheelCommand::straight(2.5));

    // Obstacle front right at -45 deg: brake and turn left, right wheel faster
    assert!(!reports[1].degraded);
    assert!(reports[1].status.brake > 0.0);
    assert!(!reports[1].status.bias_applied);
    assert!(reports[1].cmd.right > reports[1].cmd.left);

    // Unparsable row
    assert!(reports[2].degraded);
    assert_eq!(reports[2].cmd, WheelCommand::straight(2.5));
}

#[test]
fn test_demo_log() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/replay_demo.csv");
    let obst_avoid = obst_avoid();
    let mut source = ReplaySource::from_path(path, Layout::default()).unwrap();
    let mut sink = RecordingSink::default();

    let mut reports = Vec::new();
    while let Ok(report) = run_cycle(&mut source, &obst_avoid, &mut sink) {
        reports.push(report);
    }

    assert_eq!(reports.len(), 50);
    assert!(reports.iter().all(|r| !r.degraded));
    assert!(reports
        .iter()
        .all(|r| r.cmd.left >= 0.5 && r.cmd.right >= 0.5));
    assert_eq!(reports[0].cmd, WheelCommand::straight(2.5));
    assert_eq!(reports[49].cmd, WheelCommand::straight(2.5));

    // Clear rows never report a bias
    assert!(!reports[0].status.bias_applied);
    assert!(!reports[49].status.bias_applied);

    // Closest approach to the wall ahead commits to a turn
    assert!(reports[24].status.bias_applied);
    assert!(reports[24].status.bias.abs() > 0.0);
    assert_ne!(reports[24].cmd.left, reports[24].cmd.right);
}

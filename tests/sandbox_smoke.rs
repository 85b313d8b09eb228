use reality_sandbox_engine::{BodyConfig, Sandbox, SandboxCore, SimulatorConfig, WorldEvent};

#[test]
fn perf_smoke_step() {
    let mut core = SandboxCore::new(SimulatorConfig::default()).unwrap();
    core.enable_perf_metrics(true);
    for i in 0..64 {
        let x = (i % 8) as f64 * 18.0;
        let y = (i / 8) as f64 * 18.0;
        core.add_body(BodyConfig::default().at(x, y, 0.0).moving(1.0, -1.0, 0.0)).unwrap();
    }
    core.step();
    let stats = core.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 64);
    assert_eq!(stats.pairs_checked(), 10 * 64 * 63 / 2);
}

#[test]
fn facade_accepts_json_bodies() {
    let mut sandbox = Sandbox::new().unwrap();
    let id = sandbox
        .add_body(r#"{"id":"ball","mass":2,"position":{"x":0,"y":0,"z":0},"velocity":{"x":1,"y":0,"z":0}}"#.to_string())
        .unwrap();
    assert_eq!(id, "ball");
    let auto = sandbox.add_body(r#"{"position":{"x":50,"y":0,"z":0}}"#.to_string()).unwrap();
    assert_eq!(auto, "obj_1");

    sandbox.run(3);
    assert_eq!(sandbox.frame(), 3);
    assert_eq!(sandbox.body_count(), 2);

    let status: serde_json::Value = serde_json::from_str(&sandbox.status_json().unwrap()).unwrap();
    assert_eq!(status["frame"], 3);
    assert_eq!(status["bodies"][0]["id"], "ball");
    assert_eq!(status["summary"]["bodyCount"], 2);

    assert!(sandbox.remove_body("ball".to_string()));
    assert!(!sandbox.remove_body("ball".to_string()));
}

#[test]
fn facade_exports_and_restores_snapshots() {
    let mut sandbox = Sandbox::new().unwrap();
    sandbox.add_body(r#"{"id":"a","radius":1}"#.to_string()).unwrap();
    sandbox.add_body(r#"{"id":"b","radius":1,"position":{"x":1.5,"y":0,"z":0}}"#.to_string()).unwrap();
    sandbox.step();

    let snapshot = sandbox.export_json(true).unwrap();
    let restored = Sandbox::from_snapshot("{}".to_string(), snapshot).unwrap();
    assert_eq!(restored.frame(), 1);
    assert_eq!(restored.body_count(), 2);

    let suggestions: serde_json::Value = serde_json::from_str(&sandbox.suggestions_json().unwrap()).unwrap();
    assert!(suggestions.as_array().is_some());
}

#[test]
fn rejected_dt_still_counts_a_frame() {
    let mut core = SandboxCore::new(SimulatorConfig::default()).unwrap();
    core.add_body(BodyConfig::default()).unwrap();
    core.step_by(0.0);
    assert_eq!(core.frame(), 1);
    assert_eq!(core.time(), 0.0);
    assert!(matches!(core.world().events().last(), Some(WorldEvent::StepRejected { .. })));
}

#[test]
fn rejected_dt_leaves_collision_log_alone() {
    let mut core = SandboxCore::new(SimulatorConfig::default()).unwrap();
    core.add_body(BodyConfig::default().with_id("l").radius(1.0).at(-0.95, 0.0, 0.0).moving(1.0, 0.0, 0.0)).unwrap();
    core.add_body(BodyConfig::default().with_id("r").radius(1.0).at(0.95, 0.0, 0.0).moving(-1.0, 0.0, 0.0)).unwrap();
    core.step();
    let frames: Vec<u64> = core.collision_log().iter().map(|r| r.frame).collect();
    assert_eq!(frames, vec![1, 1]);

    core.step_by(0.0);
    core.step_by(f64::NAN);
    let after: Vec<u64> = core.collision_log().iter().map(|r| r.frame).collect();
    assert_eq!(after, frames);
}

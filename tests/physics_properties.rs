use reality_sandbox_engine::{BodyConfig, BodyId, Vec3, World, WorldConfig, WorldEvent};

fn isolated_world() -> World {
    World::new(WorldConfig::frictionless()).unwrap()
}

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn collisions_conserve_momentum() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().undamped().mass(3.0).radius(1.0).at(-0.95, 0.0, 0.0).moving(2.0, 0.5, 0.0))
        .unwrap();
    world.add_body(BodyConfig::default().undamped().mass(1.5).radius(1.0).at(0.95, 0.2, 0.0).moving(-1.0, 0.0, 0.3))
        .unwrap();
    world.add_body(BodyConfig::default().undamped().mass(0.5).radius(1.0).at(0.0, 1.7, 0.0).moving(0.0, -3.0, 0.0))
        .unwrap();

    let before = world.total_momentum();
    for _ in 0..20 {
        world.step(1.0 / 60.0);
    }
    let after = world.total_momentum();
    assert!(approx(before.x, after.x, 1e-9));
    assert!(approx(before.y, after.y, 1e-9));
    assert!(approx(before.z, after.z, 1e-9));
}

#[test]
fn inelastic_contact_loses_energy() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().undamped().elasticity(0.5).radius(1.0).at(-0.95, 0.0, 0.0).moving(1.0, 0.0, 0.0))
        .unwrap();
    world.add_body(BodyConfig::default().undamped().elasticity(0.9).radius(1.0).at(0.95, 0.0, 0.0).moving(-1.0, 0.0, 0.0))
        .unwrap();

    let before = world.total_kinetic_energy();
    let report = world.step(1.0 / 60.0);
    assert!(report.impulses >= 1);
    assert!(world.total_kinetic_energy() < before);
}

#[test]
fn elastic_contact_keeps_energy() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().undamped().elasticity(1.0).mass(2.0).radius(1.0).at(-0.95, 0.0, 0.0).moving(1.0, 0.0, 0.0))
        .unwrap();
    world.add_body(BodyConfig::default().undamped().elasticity(1.0).radius(1.0).at(0.95, 0.0, 0.0).moving(-2.0, 0.0, 0.0))
        .unwrap();

    let before = world.total_kinetic_energy();
    world.step(1.0 / 60.0);
    assert!(approx(world.total_kinetic_energy(), before, 1e-9));
}

#[test]
fn separating_overlap_is_left_alone() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().undamped().with_id("a").radius(1.0).moving(-1.0, 0.0, 0.0)).unwrap();
    world.add_body(BodyConfig::default().undamped().with_id("b").radius(1.0).at(1.0, 0.0, 0.0).moving(1.0, 0.0, 0.0))
        .unwrap();

    let report = world.step(1.0 / 60.0);
    assert_eq!(report.impulses, 0);
    assert!(report.contacts >= 1);
    assert_eq!(world.body(&BodyId::from("a")).unwrap().velocity, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(world.body(&BodyId::from("b")).unwrap().velocity, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn equal_mass_elastic_head_on_swaps_velocities() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().undamped().elasticity(1.0).with_id("a").moving(1.0, 0.0, 0.0)).unwrap();
    world.add_body(BodyConfig::default().undamped().elasticity(1.0).with_id("b").at(19.99, 0.0, 0.0).moving(-1.0, 0.0, 0.0))
        .unwrap();

    world.step(1.0 / 60.0);
    let a = world.body(&BodyId::from("a")).unwrap();
    let b = world.body(&BodyId::from("b")).unwrap();
    assert!(approx(a.velocity.x, -1.0, 1e-12));
    assert!(approx(b.velocity.x, 1.0, 1e-12));
}

#[test]
fn free_fall_follows_semi_implicit_euler() {
    let config = WorldConfig { gravity: Vec3::new(0.0, 9.81, 0.0), ..WorldConfig::frictionless() };
    let mut world = World::new(config).unwrap();
    let id = world.add_body(BodyConfig::default().undamped()).unwrap();

    for _ in 0..60 {
        world.step(1.0 / 60.0);
    }

    // 600 substeps of h = 1/600: y = g h² N(N+1)/2
    let expected = 4.905 * (1.0 + 1.0 / 600.0);
    let body = world.body(&id).unwrap();
    assert!(approx(body.position.y, expected, 1e-6));
    assert!(approx(body.velocity.y, 9.81, 1e-9));
    assert!(approx(world.time(), 1.0, 1e-9));
}

#[test]
fn identical_runs_are_bit_identical() {
    let build = || {
        let mut world = World::default();
        for i in 0..8 {
            let x = (i % 4) as f64 * 15.0;
            let y = (i / 4) as f64 * 15.0;
            world.add_body(BodyConfig::default().at(x, y, 0.0).moving(1.0 - i as f64 * 0.3, 0.5, 0.0)).unwrap();
        }
        world
    };

    let (mut first, mut second) = (build(), build());
    for _ in 0..30 {
        first.step_default();
        second.step_default();
    }
    assert_eq!(first.status(), second.status());
    assert_eq!(
        serde_json::to_string(&first.status()).unwrap(),
        serde_json::to_string(&second.status()).unwrap()
    );
}

#[test]
fn removing_unknown_body_changes_nothing() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().with_id("only")).unwrap();
    let events = world.events().to_vec();

    assert!(!world.remove_body(&BodyId::from("missing")));
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.events().to_vec(), events);
}

#[test]
fn rejected_step_is_recorded_and_inert() {
    let mut world = isolated_world();
    world.add_body(BodyConfig::default().moving(1.0, 0.0, 0.0)).unwrap();
    world.step(-0.5);
    assert_eq!(world.time(), 0.0);
    assert_eq!(world.events().last(), Some(&WorldEvent::StepRejected { dt: -0.5 }));
}

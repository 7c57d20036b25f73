//! End-to-end session flow through the public API.

use goldberg::{Param, Phase, SceneConfig, Session, SimulationParameters, PHYSICS_DT};

#[test]
fn full_run_start_pause_edit_reset() {
    let mut session = Session::new(SceneConfig::default());
    assert_eq!(session.phase(), Phase::WaitingToStart);

    // Tune the machine before launch.
    assert!(session.set_param(Param::Stiffness, 10.0));
    assert!(session.set_param(Param::Displacement, 12.0));
    assert!(session.set_param(Param::Mass, 2.0));

    // Launch: impulse = 0.5 * 10 * 12^2 = 720, on a 2-unit mass.
    session.toggle_run();
    assert_eq!(session.phase(), Phase::Running);
    let velocity = session.ball_velocity().expect("ball exists");
    assert!((velocity.x - 360.0).abs() < 1e-2);

    // Let it roll for a second of simulated time.
    for _ in 0..60 {
        session.advance(PHYSICS_DT);
    }
    assert_eq!(session.history().len(), 60);
    let pos = session.ball_position().unwrap();
    let spawn = goldberg::Vec2::new(50.0, 202.0 - 20.0);
    assert!(
        (pos - spawn).length() > 5.0,
        "ball should have left the launcher"
    );

    // Pause, then edit while paused: accepted, and the ball respawns.
    session.toggle_run();
    assert_eq!(session.phase(), Phase::Paused);
    assert!(session.set_param(Param::Radius, 25.0));
    let respawned = session.ball_position().unwrap();
    assert!((respawned.x - 50.0).abs() < 1e-4);

    // While paused, time does not advance.
    session.advance(1.0);
    assert_eq!(session.history().len(), 60);

    // Reset hands back the recorded run and restores every default.
    let record = session.reset();
    assert_eq!(record.len(), 60);
    assert_eq!(session.phase(), Phase::WaitingToStart);
    assert_eq!(*session.params(), SimulationParameters::default());
    assert!(session.history().is_empty());
}

#[test]
fn repeated_starts_never_relaunch() {
    let mut session = Session::new(SceneConfig::default());
    session.toggle_run();
    let launch_velocity = session.ball_velocity().unwrap();

    for _ in 0..6 {
        session.toggle_run();
    }
    // Three pause/resume cycles later the launch velocity is untouched.
    assert_eq!(session.phase(), Phase::Running);
    let velocity = session.ball_velocity().unwrap();
    assert!((velocity.x - launch_velocity.x).abs() < 1e-6);
}

#[test]
fn dead_spring_keeps_ball_on_platform() {
    let mut session = Session::new(SceneConfig::default());
    session.set_param(Param::Stiffness, 0.0);
    session.set_param(Param::Displacement, 0.0);
    session.toggle_run();

    assert!(session.ball_speed() < 1e-6);

    // Even after settling on the platform the ball stays near its spawn.
    for _ in 0..120 {
        session.advance(PHYSICS_DT);
    }
    let pos = session.ball_position().unwrap();
    assert!(
        (pos.x - 50.0).abs() < 10.0,
        "ball drifted to x = {}",
        pos.x
    );
}

#[test]
fn scene_file_round_trip_drives_session() {
    let dir = std::env::temp_dir().join("goldberg_scene_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("layout.json");

    let mut config = SceneConfig::default();
    config.dominoes.count = 3;
    config.origin_frame = false;
    config.save(&path).unwrap();

    let loaded = SceneConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let session = Session::new(loaded);
    assert_eq!(session.dominoes().len(), 3);

    std::fs::remove_file(&path).ok();
}

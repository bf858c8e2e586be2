//! Full pipeline tests: spin estimation, arm stepping, output push and
//! the not-ready / transient-failure paths, all through
//! `RoverController::tick` with the mock body and scene adapter.
//!
//! Run with: `cargo test --test rover_pipeline`

use approx::assert_relative_eq;
use mangala_rover::{
    ArmJoint, InputSnapshot, Key, MockBody, MockVisuals, PhysicsBody, RoverConfig, RoverController,
    WheelId,
};
use nalgebra::Vector3;

const DT: f32 = 1.0 / 60.0;

fn unthrottled_config() -> RoverConfig {
    let mut config = RoverConfig::default();
    config.wheels.spin_update_stride = 1;
    config
}

fn synced_tick(
    controller: &mut RoverController,
    body: &mut MockBody,
    visuals: &mut MockVisuals,
    keys: &[Key],
) {
    let input = InputSnapshot::holding(keys);
    visuals.track(&body.sample());
    controller.tick(&input, Some(body), visuals, DT);
    body.step(DT);
}

#[test]
fn stationary_body_accumulates_no_spin() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    for _ in 0..120 {
        synced_tick(&mut controller, &mut body, &mut visuals, &[]);
    }

    assert_eq!(controller.state().spin, [0.0; 6]);
}

#[test]
fn pure_forward_velocity_spins_every_wheel_by_dt_over_radius() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    body.linvel = Vector3::new(0.0, 0.0, 1.0);
    let mut visuals = MockVisuals::default();

    synced_tick(&mut controller, &mut body, &mut visuals, &[]);

    let expected = DT / 0.2625;
    for wheel in WheelId::ALL {
        assert_relative_eq!(
            controller.state().spin_of(wheel),
            expected,
            epsilon = 1e-6
        );
    }
}

#[test]
fn spin_updates_only_on_stride_ticks() {
    let mut config = RoverConfig::default();
    config.wheels.spin_update_stride = 4;
    let mut controller = RoverController::new(config).unwrap();
    let mut body = MockBody::new();
    body.linvel = Vector3::new(0.0, 0.0, 1.0);
    let mut visuals = MockVisuals::default();

    let mut spin_history = Vec::new();
    for _ in 0..8 {
        let input = InputSnapshot::new();
        visuals.track(&body.sample());
        controller.tick(&input, Some(&mut body), &mut visuals, DT);
        spin_history.push(controller.state().spin_of(WheelId::FrontLeft));
    }

    // ticks 0 and 4 update; 1-3 and 5-7 hold the previous value
    assert!(spin_history[0] > 0.0);
    assert_eq!(spin_history[0], spin_history[1]);
    assert_eq!(spin_history[1], spin_history[3]);
    assert!(spin_history[4] > spin_history[3]);
    assert_eq!(spin_history[4], spin_history[7]);
}

#[test]
fn driving_forward_moves_the_body_and_spins_wheels_forward() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    body.mass = 50.0;
    let mut visuals = MockVisuals::default();

    for _ in 0..180 {
        synced_tick(&mut controller, &mut body, &mut visuals, &[Key::ArrowUp]);
    }

    assert!(body.translation.z > 0.5, "rover did not move forward");
    for wheel in WheelId::ALL {
        assert!(controller.state().spin_of(wheel) > 0.0);
    }
}

#[test]
fn missing_body_skips_the_whole_tick() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut visuals = MockVisuals::default();
    let input = InputSnapshot::holding(&[Key::ArrowUp, Key::W]);

    for _ in 0..10 {
        controller.tick(&input, None, &mut visuals, DT);
    }

    let state = controller.state();
    assert_eq!(state.tick, 0);
    assert_eq!(state.joints, [0.0; 5]);
    assert!(visuals.orbit_target.is_none());
}

#[test]
fn failed_wheel_reads_skip_spin_but_not_the_rest_of_the_tick() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    body.linvel = Vector3::new(0.0, 0.0, 1.0);
    let mut visuals = MockVisuals::default();
    visuals.fail_reads = true;

    synced_tick(&mut controller, &mut body, &mut visuals, &[Key::W]);

    let state = controller.state();
    // spin skipped for the frame
    assert_eq!(state.spin, [0.0; 6]);
    // but the arm stepped and the tick completed
    assert_relative_eq!(state.joint_of(ArmJoint::Shoulder), 0.02);
    assert_eq!(state.tick, 1);
    assert!(visuals.orbit_target.is_some());
}

#[test]
fn arm_round_trip_returns_to_start() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    for _ in 0..30 {
        synced_tick(&mut controller, &mut body, &mut visuals, &[Key::W]);
    }
    assert_relative_eq!(
        controller.state().joint_of(ArmJoint::Shoulder),
        0.6,
        epsilon = 1e-5
    );
    for _ in 0..30 {
        synced_tick(&mut controller, &mut body, &mut visuals, &[Key::S]);
    }
    assert_relative_eq!(
        controller.state().joint_of(ArmJoint::Shoulder),
        0.0,
        epsilon = 1e-5
    );
}

#[test]
fn joint_pinned_at_bound_stays_exactly_there() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    // azimuth's upper bound is 0 and it starts there; A = increase
    for _ in 0..500 {
        synced_tick(&mut controller, &mut body, &mut visuals, &[Key::A]);
    }

    assert_eq!(controller.state().joint_of(ArmJoint::Azimuth), 0.0);
}

#[test]
fn orbit_target_follows_the_body_with_height_offset() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    body.translation = Vector3::new(2.0, 0.7, -4.0);
    let mut visuals = MockVisuals::default();

    let input = InputSnapshot::new();
    visuals.track(&body.sample());
    controller.tick(&input, Some(&mut body), &mut visuals, DT);

    assert_relative_eq!(
        visuals.orbit_target.unwrap(),
        Vector3::new(2.0, 1.7, -4.0),
        epsilon = 1e-6
    );
}

#[test]
fn visuals_receive_the_state_aggregate_every_tick() {
    let mut controller = RoverController::new(unthrottled_config()).unwrap();
    let mut body = MockBody::new();
    body.linvel = Vector3::new(0.0, 0.0, 1.0);
    let mut visuals = MockVisuals::default();

    for _ in 0..50 {
        synced_tick(
            &mut controller,
            &mut body,
            &mut visuals,
            &[Key::ArrowUp, Key::ArrowRight, Key::W],
        );
    }

    let state = controller.state();
    for wheel in WheelId::ALL {
        assert_eq!(visuals.wheel_spin[wheel.spin_index()], state.spin_of(wheel));
    }
    assert_eq!(visuals.wheel_steer, state.steer);
    assert_eq!(visuals.joint_angles, state.joints);
}

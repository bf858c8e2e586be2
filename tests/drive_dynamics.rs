//! Drive and steering dynamics tests.
//!
//! Scenario tests for the impulse/torque contract and the steering state
//! machine, run through the full controller pipeline with the mock body
//! and scene adapter:
//!
//! | Scenario | Expectation |
//! |----------|-------------|
//! | throttle=+1, move_speed=900, 1 tick | impulse exactly (0,0,900) |
//! | pivot right from center | torque starts the tick mean steer passes 0.8·π/4 |
//! | any input sequence | steer stays within ±π/4 |
//! | steer released | angles decay monotonically to 0, no overshoot |
//!
//! Run with: `cargo test --test drive_dynamics`

use approx::assert_relative_eq;
use mangala_rover::{
    InputSnapshot, Key, MockBody, MockVisuals, RoverConfig, RoverController, MAX_STEER_ANGLE,
};
use nalgebra::Vector3;

const DT: f32 = 1.0 / 60.0;

fn controller_with(config: RoverConfig) -> RoverController {
    RoverController::new(config).unwrap()
}

fn tick(
    controller: &mut RoverController,
    body: &mut MockBody,
    visuals: &mut MockVisuals,
    keys: &[Key],
) {
    let input = InputSnapshot::holding(keys);
    visuals.body_translation = body.translation;
    visuals.body_rotation = body.rotation;
    controller.tick(&input, Some(body), visuals, DT);
}

#[test]
fn forward_impulse_equals_move_speed_along_forward() {
    let mut config = RoverConfig::default();
    config.drive.move_speed = 900.0;
    let mut controller = controller_with(config);
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    tick(&mut controller, &mut body, &mut visuals, &[Key::ArrowUp]);

    assert_eq!(body.applied_impulses.len(), 1);
    assert_relative_eq!(
        body.total_impulse(),
        Vector3::new(0.0, 0.0, 900.0),
        epsilon = 1e-4
    );
}

#[test]
fn reverse_impulse_is_negated() {
    let mut controller = controller_with(RoverConfig::default());
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    tick(&mut controller, &mut body, &mut visuals, &[Key::ArrowDown]);

    assert_relative_eq!(
        body.total_impulse(),
        Vector3::new(0.0, 0.0, -0.5),
        epsilon = 1e-6
    );
}

#[test]
fn coasting_applies_nothing() {
    let mut controller = controller_with(RoverConfig::default());
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    for _ in 0..120 {
        tick(&mut controller, &mut body, &mut visuals, &[]);
    }

    assert!(body.applied_impulses.is_empty());
    assert!(body.applied_torques.is_empty());
}

#[test]
fn pivot_torque_starts_exactly_at_engage_threshold() {
    let config = RoverConfig::default();
    let drive = config.drive.clone();
    let mut controller = controller_with(config);
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    // With the default align rate of 0.01 rad/tick, the mean corner
    // deflection after n ticks is 0.01·n; the threshold 0.8·π/4 ≈ 0.6283
    // is first exceeded on the 63rd update.
    let engage_tick = 63;

    for n in 1..=200 {
        tick(&mut controller, &mut body, &mut visuals, &[Key::ArrowRight]);
        if n < engage_tick {
            assert!(
                body.applied_torques.is_empty(),
                "torque applied too early, at tick {}",
                n
            );
        } else {
            assert!(
                !body.applied_torques.is_empty(),
                "torque missing at tick {}",
                n
            );
        }
    }

    // amplified over the moving-turn torque, spinning right (negative yaw)
    let expected = -drive.rot_speed * drive.pivot_torque_gain;
    assert_relative_eq!(body.applied_torques[0].y, expected, epsilon = 1e-6);
    // pure pivot: no linear impulse ever
    assert!(body.applied_impulses.is_empty());
}

#[test]
fn pivot_crab_pose_is_symmetric_and_opposed() {
    let mut controller = controller_with(RoverConfig::default());
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    for _ in 0..200 {
        tick(&mut controller, &mut body, &mut visuals, &[Key::ArrowLeft]);
    }

    let steer = controller.state().steer;
    // front pair one sign, rear pair the other, full deflection
    assert_relative_eq!(steer[0], MAX_STEER_ANGLE, epsilon = 1e-5);
    assert_relative_eq!(steer[1], MAX_STEER_ANGLE, epsilon = 1e-5);
    assert_relative_eq!(steer[2], -MAX_STEER_ANGLE, epsilon = 1e-5);
    assert_relative_eq!(steer[3], -MAX_STEER_ANGLE, epsilon = 1e-5);
}

#[test]
fn steer_clamped_under_arbitrary_input_sequence() {
    let config = RoverConfig::default();
    let bounds = config.arm.bounds();
    let mut controller = controller_with(config);
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    // cycle through every steering/arm mode combination for a while
    let phases: [&[Key]; 8] = [
        &[Key::ArrowUp, Key::ArrowLeft],
        &[Key::ArrowLeft],
        &[Key::ArrowUp, Key::ArrowRight, Key::W, Key::A],
        &[Key::ArrowDown, Key::ArrowLeft, Key::S, Key::D],
        &[Key::ArrowRight, Key::I, Key::K],
        &[],
        &[Key::ArrowDown, Key::ArrowRight, Key::J, Key::L],
        &[Key::ArrowUp, Key::Q, Key::E],
    ];

    for n in 0..2400 {
        let keys = phases[(n / 75) % phases.len()];
        tick(&mut controller, &mut body, &mut visuals, keys);

        let state = controller.state();
        for angle in state.steer {
            assert!(
                angle.abs() <= MAX_STEER_ANGLE + 1e-6,
                "steer {} out of range at tick {}",
                angle,
                n
            );
        }
        for (i, angle) in state.joints.iter().enumerate() {
            assert!(
                *angle >= bounds[i].min && *angle <= bounds[i].max,
                "joint {} out of bounds at tick {}: {}",
                i,
                n,
                angle
            );
        }
    }
}

#[test]
fn released_steer_decays_monotonically_to_zero() {
    let mut controller = controller_with(RoverConfig::default());
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    // saturate the crab pose first
    for _ in 0..300 {
        tick(&mut controller, &mut body, &mut visuals, &[Key::ArrowRight]);
    }
    let start = controller.state().steer;
    assert!(start.iter().all(|a| a.abs() > 0.5));

    let mut prev = start;
    for _ in 0..300 {
        tick(&mut controller, &mut body, &mut visuals, &[]);
        let steer = controller.state().steer;
        for (now, before) in steer.iter().zip(prev.iter()) {
            // shrinking magnitude, never crossing zero
            assert!(now.abs() <= before.abs() + 1e-7);
            assert!(now.signum() == before.signum() || now.abs() < 1e-6);
        }
        prev = steer;
    }
    assert!(prev.iter().all(|a| a.abs() < 1e-4));
}

#[test]
fn moving_turn_reverses_with_reverse_throttle() {
    let mut controller = controller_with(RoverConfig::default());
    let mut body = MockBody::new();
    let mut visuals = MockVisuals::default();

    tick(
        &mut controller,
        &mut body,
        &mut visuals,
        &[Key::ArrowUp, Key::ArrowLeft],
    );
    let forward_left = body.applied_torques[0].y;

    let mut body2 = MockBody::new();
    let mut controller2 = controller_with(RoverConfig::default());
    tick(
        &mut controller2,
        &mut body2,
        &mut visuals,
        &[Key::ArrowDown, Key::ArrowLeft],
    );
    let reverse_left = body2.applied_torques[0].y;

    assert_relative_eq!(forward_left, -reverse_left, epsilon = 1e-6);
    assert!(forward_left > 0.0);
}

//! rover_node: headless teleop demonstration.
//!
//! Builds a rapier3d world with flat terrain and the rover chassis,
//! replays a scripted key timeline through the controller at a fixed
//! 60 Hz timestep, and logs pose/steer/arm telemetry.
//!
//! # Usage
//!
//! ```bash
//! # With default config (mangala.toml if present)
//! cargo run --bin rover_node
//!
//! # With custom config file and run length
//! cargo run --bin rover_node -- rover.toml --ticks 1200
//! ```

use log::info;
use mangala_rover::{
    overlay, InputSnapshot, Key, MockVisuals, PhysicsBody, RapierBody, Result, RoverConfig,
    RoverController, Waypoint, WheelId,
};
use rapier3d::prelude::*;
use std::path::Path;

const TICK_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Args {
    config_path: Option<String>,
    ticks: u64,
}

fn parse_args(args: &[String]) -> std::result::Result<Args, String> {
    let mut config_path = None;
    let mut ticks = 900;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" | "-t" => {
                i += 1;
                let value = args.get(i).ok_or("--ticks requires a value")?;
                ticks = value
                    .parse()
                    .map_err(|_| format!("invalid tick count: {}", value))?;
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            arg if !arg.starts_with('-') => {
                if config_path.is_some() {
                    return Err("Multiple config files specified".to_string());
                }
                config_path = Some(arg.to_string());
            }
            arg => {
                return Err(format!("Unknown argument: {}", arg));
            }
        }
        i += 1;
    }

    Ok(Args { config_path, ticks })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.toml] [--ticks N]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --ticks, -t N   Number of 60 Hz ticks to simulate (default 900)");
    eprintln!("  --help,  -h     Show this help");
}

fn load_config(args: &Args) -> Result<RoverConfig> {
    match &args.config_path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            RoverConfig::load(Path::new(path))
        }
        None if Path::new("mangala.toml").exists() => {
            info!("Loading configuration from mangala.toml");
            RoverConfig::load(Path::new("mangala.toml"))
        }
        None => {
            info!("Using default configuration");
            Ok(RoverConfig::default())
        }
    }
}

/// The rapier3d world: flat terrain plus the rover chassis with the six
/// spherical wheel colliders. Mars gravity.
struct MarsWorld {
    gravity: Vector<Real>,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    query_pipeline: QueryPipeline,
    rover: RigidBodyHandle,
}

impl MarsWorld {
    fn new(config: &RoverConfig) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        // Static ground with its top surface at y = 0
        let ground = bodies.insert(
            RigidBodyBuilder::fixed()
                .translation(vector![0.0, -1.0, 0.0])
                .build(),
        );
        colliders.insert_with_parent(
            ColliderBuilder::cuboid(500.0, 1.0, 500.0).friction(1.0).build(),
            ground,
            &mut bodies,
        );

        // Rover chassis: heavily damped so each impulse reads as a nudge
        let rover = bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![0.0, 1.0, 1.0])
                .linear_damping(10.0)
                .angular_damping(10.0)
                .build(),
        );
        colliders.insert_with_parent(
            ColliderBuilder::cuboid(0.7, 0.4, 1.1)
                .translation(vector![0.0, 1.1, -0.3])
                .density(0.5)
                .build(),
            rover,
            &mut bodies,
        );
        colliders.insert_with_parent(
            ColliderBuilder::cuboid(0.1, 0.1, 0.8)
                .translation(vector![0.3, 0.8, 1.5])
                .density(0.001)
                .build(),
            rover,
            &mut bodies,
        );
        for [x, y, z] in config.wheels.positions {
            colliders.insert_with_parent(
                ColliderBuilder::ball(0.3)
                    .translation(vector![x, y, z])
                    .density(3.0)
                    .build(),
                rover,
                &mut bodies,
            );
        }

        Self {
            gravity: vector![0.0, -3.728, 0.0],
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rover,
        }
    }

    fn step(&mut self, dt: f32) {
        self.pipeline.step(
            &self.gravity,
            &IntegrationParameters {
                dt,
                ..IntegrationParameters::default()
            },
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }
}

/// The scripted drive: forward, sweeping left turn, coast, pivot right,
/// then work the arm.
fn scripted_input(tick: u64) -> InputSnapshot {
    match tick {
        0..=179 => InputSnapshot::holding(&[Key::ArrowUp]),
        180..=419 => InputSnapshot::holding(&[Key::ArrowUp, Key::ArrowLeft]),
        420..=479 => InputSnapshot::new(),
        480..=779 => InputSnapshot::holding(&[Key::ArrowRight]),
        _ => InputSnapshot::holding(&[Key::W, Key::I, Key::Q]),
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    config.validate()?;

    info!("MangalaRover v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Simulating {} ticks at {:.0} Hz (move_speed {}, rot_speed {})",
        args.ticks,
        1.0 / TICK_DT,
        config.drive.move_speed,
        config.drive.rot_speed
    );

    let mut world = MarsWorld::new(&config);
    let mut controller = RoverController::new(config.clone())?;
    let mut visuals = MockVisuals::new(config.wheels.positions);
    let waypoint = Waypoint::new(5.0, 8.0);

    for tick in 0..args.ticks {
        let input = scripted_input(tick);

        // physics first, then the controller reads the integrated state
        world.step(TICK_DT);

        // a stale handle means "not spawned", so the controller skips the tick
        let mut body = RapierBody::new(&mut world.bodies, world.rover);
        if let Some(b) = &body {
            visuals.track(&b.sample());
        }
        controller.tick(
            &input,
            body.as_mut().map(|b| b as &mut dyn PhysicsBody),
            &mut visuals,
            TICK_DT,
        );

        if tick % 60 == 0 {
            let sample = RapierBody::new(&mut world.bodies, world.rover)
                .map(|b| b.sample())
                .unwrap_or_default();
            let state = controller.state();
            let marker = overlay::marker(&sample, &waypoint);
            info!(
                "t={:>4} pos=({:6.2},{:5.2},{:6.2}) yaw={:6.1}° steer={:5.1}° \
                 spin(FL)={:7.2} arm={:.2?} waypoint {:.1}m at {:5.1}°",
                tick,
                sample.translation.x,
                sample.translation.y,
                sample.translation.z,
                sample.yaw().to_degrees(),
                state.mean_abs_steer().to_degrees(),
                state.spin_of(WheelId::FrontLeft),
                state.joints,
                marker.distance,
                marker.relative_bearing.to_degrees(),
            );
        }
    }

    let state = controller.state();
    info!(
        "Done: {} ticks, final steer {:?}, final joints {:.2?}",
        state.tick, state.steer, state.joints
    );
    Ok(())
}

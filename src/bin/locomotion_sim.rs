//! Headless Locomotion Simulation
//!
//! Run with: `cargo run --bin locomotion-sim [config.json]`
//!
//! Drives the locomotion core through a scripted input sequence on a flat
//! world at a fixed 60 Hz tick and prints a state trace. Useful for tuning
//! config values without a renderer: pass a JSON file with any subset of
//! `LocomotionConfig` fields to override the defaults.
//!
//! Script phases:
//! - walk forward
//! - sprint until the pool runs low
//! - crouch-walk (no drain, slower)
//! - jump and land
//! - idle while stamina regenerates

use std::env;
use std::fs;
use std::process::ExitCode;

use glam::{Vec2, Vec3};

use wayfarer_engine::camera::FpsCameraRig;
use wayfarer_engine::input::InputSample;
use wayfarer_engine::physics::FlatWorldMover;
use wayfarer_engine::player::{LocomotionConfig, LocomotionCore};
use wayfarer_engine::ui::{PauseState, StaminaBarModel};

/// Fixed simulation tick (60 Hz)
const TICK: f32 = 1.0 / 60.0;

/// Trace interval in ticks (every quarter second)
const TRACE_EVERY: u32 = 15;

/// One scripted phase: a fixed input held for a duration.
struct Phase {
    name: &'static str,
    duration: f32,
    input: InputSample,
}

fn script() -> Vec<Phase> {
    let forward = Vec2::new(0.0, 1.0);
    vec![
        Phase {
            name: "walk",
            duration: 2.0,
            input: InputSample::moving(forward),
        },
        Phase {
            name: "sprint",
            duration: 4.0,
            input: InputSample {
                move_axis: forward,
                sprint_held: true,
                ..Default::default()
            },
        },
        Phase {
            name: "crouch-walk",
            duration: 2.0,
            input: InputSample {
                move_axis: forward,
                crouch_held: true,
                ..Default::default()
            },
        },
        Phase {
            name: "jump",
            duration: 1.5,
            input: InputSample {
                move_axis: forward,
                jump_held: true,
                ..Default::default()
            },
        },
        Phase {
            name: "regen",
            duration: 4.0,
            input: InputSample::idle(),
        },
    ]
}

fn load_config() -> Result<LocomotionConfig, String> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {path}: {e}"))?;
            serde_json::from_str(&text).map_err(|e| format!("cannot parse {path}: {e}"))
        }
        None => Ok(LocomotionConfig::default()),
    }
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("[LocomotionSim] {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut core = LocomotionCore::new(config);
    let mut mover = FlatWorldMover::new(Vec3::ZERO);
    let mut rig = FpsCameraRig::new();
    let mut bar = StaminaBarModel::new();
    let pause = PauseState::new();

    println!(
        "[LocomotionSim] starting: speed={} sprint x{} stamina={}",
        core.config().move_speed,
        core.config().sprint_multiplier,
        core.config().max_stamina
    );

    let mut tick_count: u32 = 0;
    for phase in script() {
        println!("[LocomotionSim] phase: {}", phase.name);
        let ticks = (phase.duration / TICK).round() as u32;
        for _ in 0..ticks {
            let dt = pause.scaled_dt(TICK);
            core.tick(&phase.input, &mut mover, &mut rig, dt);
            rig.set_position(mover.position() + Vec3::Y * core.eye_height());
            bar.update(core.stamina_normalized(), dt);

            tick_count += 1;
            if tick_count % TRACE_EVERY == 0 {
                let pos = mover.position();
                println!(
                    "[LocomotionSim] t={:6.2}s pos=({:6.2},{:5.2},{:6.2}) \
                     stamina={:5.1} bar={:4.2} height={:.2} grounded={}",
                    tick_count as f32 * TICK,
                    pos.x,
                    pos.y,
                    pos.z,
                    core.stamina(),
                    bar.fill(),
                    core.current_height(),
                    core.grounded()
                );
            }
        }
    }

    println!(
        "[LocomotionSim] done: traveled {:.1} units, stamina {:.1}/{:.1}",
        mover.position().length(),
        core.stamina(),
        core.config().max_stamina
    );
    ExitCode::SUCCESS
}

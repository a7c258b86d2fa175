//! Locomotion Tests - Full-Core Properties
//!
//! End-to-end tests for the locomotion core driven through the flat-world
//! mover: stamina bookkeeping, stance precedence, jump/gravity shaping, look
//! clamping, and the observer models.

use glam::{Vec2, Vec3};

use wayfarer_engine::camera::{FpsCameraRig, NullLookSink};
use wayfarer_engine::input::InputSample;
use wayfarer_engine::physics::{CollisionMover, FlatWorldMover, MoveOutcome};
use wayfarer_engine::player::{LocomotionConfig, LocomotionCore};
use wayfarer_engine::ui::{PauseState, StaminaBarModel};

const DT: f32 = 1.0 / 60.0;

fn grounded_core() -> (LocomotionCore, FlatWorldMover) {
    grounded_core_with(LocomotionConfig::default())
}

fn grounded_core_with(config: LocomotionConfig) -> (LocomotionCore, FlatWorldMover) {
    let mut core = LocomotionCore::new(config);
    let mut mover = FlatWorldMover::new(Vec3::ZERO);
    for _ in 0..5 {
        core.tick(&InputSample::idle(), &mut mover, &mut NullLookSink, DT);
    }
    assert!(core.grounded());
    (core, mover)
}

fn sprint_forward() -> InputSample {
    InputSample {
        move_axis: Vec2::new(0.0, 1.0),
        sprint_held: true,
        ..Default::default()
    }
}

/// Run `seconds` of simulated time in fixed ticks.
fn run_for(
    core: &mut LocomotionCore,
    mover: &mut FlatWorldMover,
    input: &InputSample,
    seconds: f32,
) {
    let ticks = (seconds / DT).round() as u32;
    for _ in 0..ticks {
        core.tick(input, mover, &mut NullLookSink, DT);
    }
}

// ============================================================================
// Stamina Drain / Regen
// ============================================================================

#[test]
fn test_sprint_drain_matches_rate_times_time() {
    let (mut core, mut mover) = grounded_core();
    let cfg = *core.config();

    // 3 seconds of sprinting from a full pool
    run_for(&mut core, &mut mover, &sprint_forward(), 3.0);

    let expected = (cfg.max_stamina - cfg.stamina_drain_rate * 3.0).max(0.0);
    assert!(
        (core.stamina() - expected).abs() < 0.5,
        "stamina {} expected {}",
        core.stamina(),
        expected
    );
}

#[test]
fn test_drain_formula_floors_at_zero() {
    // With no sprint minimum and regen pushed out of the window, the pool
    // follows stamina = max(0, max - drain * T) exactly
    let cfg = LocomotionConfig {
        min_stamina_to_sprint: 0.0,
        stamina_regen_delay: 60.0,
        ..Default::default()
    };
    let (mut core, mut mover) = grounded_core_with(cfg);
    let cfg = *core.config();

    // T = 2s: still above zero
    run_for(&mut core, &mut mover, &sprint_forward(), 2.0);
    let expected = (cfg.max_stamina - cfg.stamina_drain_rate * 2.0).max(0.0);
    assert!((core.stamina() - expected).abs() < 0.5);

    // T = 10s total: long past empty, floored at zero
    run_for(&mut core, &mut mover, &sprint_forward(), 8.0);
    assert_eq!(core.stamina(), 0.0);
}

#[test]
fn test_sprint_disengages_at_the_gate() {
    // Regen delayed far beyond the test window so the gate state is stable
    let cfg = LocomotionConfig {
        stamina_regen_delay: 60.0,
        ..Default::default()
    };
    let (mut core, mut mover) = grounded_core_with(cfg);
    let cfg = *core.config();

    // 100 -> 10 at 20/s takes 4.5s; leave plenty of settling margin
    run_for(&mut core, &mut mover, &sprint_forward(), 20.0);
    assert!(core.stamina() <= cfg.min_stamina_to_sprint + 1e-3);
    assert!(core.stamina() > cfg.min_stamina_to_sprint - 1.0);

    // With the gate closed, the same input moves at walk speed
    let out = core.tick(&sprint_forward(), &mut mover, &mut NullLookSink, DT);
    let planar = Vec2::new(out.applied_displacement.x, out.applied_displacement.z).length();
    assert!((planar - cfg.move_speed * DT).abs() < 1e-4);
}

#[test]
fn test_regen_waits_out_the_delay() {
    let (mut core, mut mover) = grounded_core();
    let cfg = *core.config();

    run_for(&mut core, &mut mover, &sprint_forward(), 1.0);
    let drained = core.stamina();
    assert!(drained < cfg.max_stamina);

    // Idle for most of the delay: no regen yet
    run_for(&mut core, &mut mover, &InputSample::idle(), cfg.stamina_regen_delay * 0.8);
    assert_eq!(core.stamina(), drained);

    // Past the delay: regen at the configured rate
    run_for(&mut core, &mut mover, &InputSample::idle(), cfg.stamina_regen_delay * 0.2 + 1.0);
    let expected = (drained + cfg.stamina_regen_rate * 1.0).min(cfg.max_stamina);
    assert!(
        (core.stamina() - expected).abs() < 0.5,
        "stamina {} expected {}",
        core.stamina(),
        expected
    );
}

#[test]
fn test_regen_tops_out_at_max() {
    let (mut core, mut mover) = grounded_core();

    run_for(&mut core, &mut mover, &sprint_forward(), 2.0);
    run_for(&mut core, &mut mover, &InputSample::idle(), 60.0);
    assert_eq!(core.stamina(), core.config().max_stamina);
}

// ============================================================================
// Stance Precedence
// ============================================================================

#[test]
fn test_crouch_overrides_sprint_entirely() {
    let (mut core, mut mover) = grounded_core();
    let cfg = *core.config();

    let crouch_sprint = InputSample {
        move_axis: Vec2::new(0.0, 1.0),
        sprint_held: true,
        crouch_held: true,
        ..Default::default()
    };

    let stamina_before = core.stamina();
    let out = core.tick(&crouch_sprint, &mut mover, &mut NullLookSink, DT);

    // Crouch multiplier applies, never the sprint one
    let planar = Vec2::new(out.applied_displacement.x, out.applied_displacement.z).length();
    assert!((planar - cfg.move_speed * cfg.crouch_multiplier * DT).abs() < 1e-4);

    // And the pool is untouched
    assert_eq!(core.stamina(), stamina_before);
}

#[test]
fn test_multipliers_never_stack() {
    // If crouch and sprint multiplied together the planar speed would be
    // 0.5 * 1.6 = 0.8x; it must be exactly 0.5x
    let (mut core, mut mover) = grounded_core();
    let cfg = *core.config();

    let crouch_sprint = InputSample {
        move_axis: Vec2::new(1.0, 0.0),
        sprint_held: true,
        crouch_held: true,
        ..Default::default()
    };
    let out = core.tick(&crouch_sprint, &mut mover, &mut NullLookSink, DT);
    let planar = Vec2::new(out.applied_displacement.x, out.applied_displacement.z).length();
    let stacked = cfg.move_speed * cfg.crouch_multiplier * cfg.sprint_multiplier * DT;
    assert!((planar - stacked).abs() > 1e-3);
}

// ============================================================================
// Jump & Gravity
// ============================================================================

#[test]
fn test_jump_launch_speed_formula() {
    let cfg = LocomotionConfig {
        jump_height: 2.0,
        base_gravity: -8.0,
        ..Default::default()
    }
    .normalized();
    let launch = cfg.jump_launch_velocity();
    assert!((launch - (2.0_f32 * 2.0 * 8.0).sqrt()).abs() < 1e-6);
}

#[test]
fn test_jump_and_full_arc() {
    let (mut core, mut mover) = grounded_core();

    let jump = InputSample {
        jump_held: true,
        ..Default::default()
    };
    core.tick(&jump, &mut mover, &mut NullLookSink, DT);
    assert!(core.vertical_velocity() > 0.0);

    let mut apex = 0.0_f32;
    let mut landed = false;
    for _ in 0..600 {
        core.tick(&InputSample::idle(), &mut mover, &mut NullLookSink, DT);
        apex = apex.max(mover.position().y);
        if core.grounded() {
            landed = true;
            break;
        }
    }
    assert!(landed, "character never came back down");
    assert!(apex > 0.2);
    assert_eq!(mover.position().y, 0.0);
}

#[test]
fn test_held_jump_refires_after_cooldown() {
    // The held-button trigger is intentional: holding jump across a landing
    // fires again once grounded with the cooldown elapsed.
    let (mut core, mut mover) = grounded_core();

    let jump = InputSample {
        jump_held: true,
        ..Default::default()
    };
    let mut launches = 0;
    let mut was_rising = false;
    for _ in 0..600 {
        core.tick(&jump, &mut mover, &mut NullLookSink, DT);
        let rising = core.vertical_velocity() > 0.0;
        if rising && !was_rising {
            launches += 1;
        }
        was_rising = rising;
    }
    assert!(launches >= 2, "held jump should re-fire, got {launches}");
}

#[test]
fn test_gravity_asymmetry_reference_values() {
    // Distinct branch scaling: gravity -8, fall 2.6, rise 2.0
    let cfg = LocomotionConfig {
        base_gravity: -8.0,
        fall_gravity_multiplier: 2.6,
        rise_gravity_multiplier: 2.0,
        jump_height: 1.0,
        ..Default::default()
    };
    let mut core = LocomotionCore::new(cfg);
    // High above a ground plane at y=0 so every tick is airborne
    let mut mover = FlatWorldMover::with_ground(Vec3::new(0.0, 100.0, 0.0), 0.0);

    core.tick(&InputSample::idle(), &mut mover, &mut NullLookSink, DT);
    let v1 = core.vertical_velocity();
    // First tick from rest integrates the rise branch (v >= 0)
    assert!((v1 - (-8.0 * 2.0 * DT)).abs() < 1e-5);

    core.tick(&InputSample::idle(), &mut mover, &mut NullLookSink, DT);
    let v2 = core.vertical_velocity();
    // Now falling: the fall branch is steeper
    assert!((v2 - (v1 - 8.0 * 2.6 * DT)).abs() < 1e-5);
}

// ============================================================================
// Planar Movement & Look
// ============================================================================

#[test]
fn test_no_diagonal_speed_boost() {
    let (mut axial, mut mover_a) = grounded_core();
    let (mut diag, mut mover_d) = grounded_core();

    run_for(&mut axial, &mut mover_a, &InputSample::moving(Vec2::new(1.0, 0.0)), 2.0);
    run_for(&mut diag, &mut mover_d, &InputSample::moving(Vec2::new(1.0, 1.0)), 2.0);

    let dist_a = Vec2::new(mover_a.position().x, mover_a.position().z).length();
    let dist_d = Vec2::new(mover_d.position().x, mover_d.position().z).length();
    assert!((dist_a - dist_d).abs() < 1e-2);
}

#[test]
fn test_pitch_bounds_hold_for_violent_input() {
    let (mut core, mut mover) = grounded_core();
    let cfg = *core.config();

    for i in 0..100 {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let wild = InputSample {
            look_axis: Vec2::new(0.0, sign * 1e5),
            ..Default::default()
        };
        core.tick(&wild, &mut mover, &mut NullLookSink, DT);
        assert!(core.pitch() >= cfg.pitch_min);
        assert!(core.pitch() <= cfg.pitch_max);
    }
}

#[test]
fn test_camera_rig_follows_core() {
    let (mut core, mut mover) = grounded_core();
    let mut rig = FpsCameraRig::new();

    let look = InputSample {
        look_axis: Vec2::new(30.0, -10.0),
        ..Default::default()
    };
    core.tick(&look, &mut mover, &mut rig, DT);

    // sensitivity 2.0: yaw 60 deg, pitch +20 deg (mouse up looks up)
    assert!((rig.yaw().to_degrees() - 60.0).abs() < 1e-3);
    assert!((rig.pitch().to_degrees() - 20.0).abs() < 1e-3);
    assert!((core.pitch() - 20.0).abs() < 1e-3);
}

// ============================================================================
// Mover Shape Authority
// ============================================================================

#[test]
fn test_mover_clamp_is_adopted() {
    let (mut core, mut mover) = grounded_core();
    let cfg = *core.config();

    // Crouch fully, then wedge under a ceiling below stand height
    run_for(
        &mut core,
        &mut mover,
        &InputSample {
            crouch_held: true,
            ..Default::default()
        },
        1.0,
    );
    assert_eq!(core.current_height(), cfg.crouch_height);

    let ceiling = cfg.crouch_height + 0.2;
    mover.set_ceiling(Some(ceiling));
    run_for(&mut core, &mut mover, &InputSample::idle(), 1.0);

    // The stand request is clamped to the clearance and the core adopts it
    assert!((core.current_height() - ceiling).abs() < 1e-3);
    assert!(core.current_height() < cfg.stand_height);

    // Clearing the ceiling lets the stand complete
    mover.set_ceiling(None);
    run_for(&mut core, &mut mover, &InputSample::idle(), 1.0);
    assert_eq!(core.current_height(), cfg.stand_height);
}

// ============================================================================
// Config Edge Cases
// ============================================================================

#[test]
fn test_zero_capacity_stamina_never_faults() {
    let cfg = LocomotionConfig {
        max_stamina: 0.0,
        ..Default::default()
    };
    let (mut core, mut mover) = grounded_core_with(cfg);

    assert_eq!(core.stamina_normalized(), 0.0);

    // Sprint input just walks; nothing divides by zero
    let out = core.tick(&sprint_forward(), &mut mover, &mut NullLookSink, DT);
    let planar = Vec2::new(out.applied_displacement.x, out.applied_displacement.z).length();
    assert!((planar - core.config().move_speed * DT).abs() < 1e-4);
    assert_eq!(core.stamina_normalized(), 0.0);
}

#[test]
fn test_negative_capacity_clamps_like_zero() {
    let cfg = LocomotionConfig {
        max_stamina: -25.0,
        ..Default::default()
    };
    let core = LocomotionCore::new(cfg);
    assert_eq!(core.stamina(), 0.0);
    assert_eq!(core.stamina_normalized(), 0.0);
}

#[test]
fn test_hostile_config_is_tamed() {
    let cfg = LocomotionConfig {
        move_speed: -3.0,
        base_gravity: 20.0,
        crouch_height: 10.0,
        pitch_min: 45.0,
        pitch_max: -45.0,
        ..Default::default()
    };
    let core = LocomotionCore::new(cfg);
    let cfg = core.config();

    assert_eq!(cfg.move_speed, 0.0);
    assert!(cfg.base_gravity < 0.0);
    assert!(cfg.crouch_height <= cfg.stand_height);
    assert!(cfg.pitch_min <= cfg.pitch_max);
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn test_stamina_bar_tracks_the_pool() {
    let (mut core, mut mover) = grounded_core();
    let mut bar = StaminaBarModel::new();

    // Full pool: bar hides
    for _ in 0..30 {
        bar.update(core.stamina_normalized(), DT);
    }
    assert!(!bar.visible());
    assert_eq!(bar.fill(), 1.0);

    // Sprint: bar fades in and tracks the drain
    run_for(&mut core, &mut mover, &sprint_forward(), 2.0);
    for _ in 0..30 {
        bar.update(core.stamina_normalized(), DT);
    }
    assert!(bar.visible());
    assert_eq!(bar.alpha(), 1.0);
    assert!((bar.fill() - core.stamina_normalized()).abs() < 1e-6);
}

#[test]
fn test_pause_freezes_the_core() {
    let (mut core, mut mover) = grounded_core();
    let mut pause = PauseState::new();
    pause.pause();

    let stamina_before = core.stamina();
    let pos_before = mover.position();

    for _ in 0..60 {
        let dt = pause.scaled_dt(DT);
        core.tick(&sprint_forward(), &mut mover, &mut NullLookSink, dt);
    }
    assert_eq!(core.stamina(), stamina_before);
    assert_eq!(mover.position(), pos_before);

    // Resume: motion comes back at the prior rate
    pause.resume();
    let out = core.tick(&sprint_forward(), &mut mover, &mut NullLookSink, pause.scaled_dt(DT));
    assert!(out.applied_displacement.length() > 0.0);
}

// ============================================================================
// Custom Mover Contract
// ============================================================================

#[test]
fn test_core_works_against_a_custom_mover() {
    // Minimal mover that halves every displacement (soft wall); the core only
    // relies on the readback contract, not on FlatWorldMover specifics
    struct HalvingMover {
        grounded: bool,
    }
    impl CollisionMover for HalvingMover {
        fn apply(
            &mut self,
            desired_displacement: Vec3,
            desired_height: f32,
            desired_center: Vec3,
        ) -> MoveOutcome {
            MoveOutcome {
                applied_displacement: desired_displacement * 0.5,
                grounded: self.grounded,
                actual_height: desired_height,
                actual_center: desired_center,
            }
        }
    }

    let mut core = LocomotionCore::new(LocomotionConfig::default());
    let mut mover = HalvingMover { grounded: true };
    core.tick(&InputSample::idle(), &mut mover, &mut NullLookSink, DT);
    assert!(core.grounded());

    let out = core.tick(
        &InputSample::moving(Vec2::new(0.0, 1.0)),
        &mut mover,
        &mut NullLookSink,
        DT,
    );
    let planar = Vec2::new(out.applied_displacement.x, out.applied_displacement.z).length();
    assert!((planar - 0.5 * core.config().move_speed * DT).abs() < 1e-4);
}

//! Property-based invariant tests for the cabinet engine.
//!
//! Arbitrary command sequences interleaved with frames must keep:
//!
//! 1. at most one folder holding the interaction token, and only the holder
//!    away from its resting state
//! 2. drawer state unchanged while the token is held
//! 3. folder progress within `[0, 1]`
//! 4. a finite camera
//! 5. opening and reverse sampling agreeing for every progress value
#![allow(missing_docs)]

use cabinet::animation::{MotionState, PhasedMotion, PhasedMotionConfig};
use cabinet::engine::command::CabinetCommand;
use cabinet::scene::{ItemId, SceneNodes};
use cabinet::CabinetEngine;
use glam::Vec3;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Step {
    Command(CabinetCommand),
    Frames(usize),
}

fn item_strategy() -> impl Strategy<Value = ItemId> {
    (0usize..4, 0usize..4).prop_map(|(d, s)| ItemId::new(d, s))
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..4).prop_map(|index| {
            Step::Command(CabinetCommand::ToggleDrawer { index })
        }),
        item_strategy()
            .prop_map(|id| Step::Command(CabinetCommand::ToggleFolder { id })),
        (item_strategy(), any::<bool>()).prop_map(|(id, hovered)| {
            Step::Command(CabinetCommand::HoverFolder { id, hovered })
        }),
        Just(Step::Command(CabinetCommand::ResetView)),
        Just(Step::Command(CabinetCommand::NextDrawer)),
        (1usize..40).prop_map(Step::Frames),
    ]
}

fn moving_folders(engine: &CabinetEngine) -> Vec<ItemId> {
    engine
        .layout()
        .folders()
        .iter()
        .map(|f| f.id)
        .filter(|&id| {
            engine
                .folder_motion(id)
                .is_some_and(|m| m.state() != MotionState::Closed)
        })
        .collect()
}

proptest! {
    #[test]
    fn engine_invariants_hold(steps in prop::collection::vec(step_strategy(), 1..60)) {
        let mut engine = CabinetEngine::new();
        let mut scene = SceneNodes::from_layout(engine.layout());

        for step in steps {
            match step {
                Step::Command(cmd) => {
                    let locked = engine.gate().is_locked();
                    let open = engine.gate().open_container();
                    let _ = engine.execute(cmd);
                    if locked {
                        prop_assert_eq!(engine.gate().open_container(), open);
                    }
                }
                Step::Frames(n) => {
                    for _ in 0..n {
                        let _ = engine.tick(1.0 / 60.0, &mut scene);
                    }
                }
            }

            let moving = moving_folders(&engine);
            prop_assert!(moving.len() <= 1, "moving folders: {:?}", moving);
            let holder = engine.gate().snapshot().token_holder();
            if let Some(id) = moving.first() {
                prop_assert_eq!(holder, Some(*id));
            }

            for folder in engine.layout().folders() {
                let p = engine.folder_motion(folder.id).map_or(0.0, PhasedMotion::progress);
                prop_assert!((0.0..=1.0).contains(&p));
            }

            let camera = engine.rig().camera();
            prop_assert!(camera.eye.is_finite() && camera.target.is_finite());
        }
    }

    #[test]
    fn reverse_sampling_retraces_opening(p in 0.0f32..=1.0) {
        let motion = PhasedMotion::new(
            Vec3::new(0.0, 0.0, -0.2),
            PhasedMotionConfig::default(),
        );
        let forward = motion.sample(p);
        let reverse = motion.sample_reverse(1.0 - p);
        prop_assert!(forward.distance(&reverse) < 1e-4);
    }
}

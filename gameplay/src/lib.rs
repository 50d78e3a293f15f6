//! Gameplay rules shared by the app and the tests.
//!
//! This crate intentionally avoids any Bevy ECS types. Everything here is a
//! plain value advanced by an explicit `dt`, so the rules can be stepped
//! deterministically without an engine.

mod error;
pub use error::ConfigError;

mod config;
pub use config::{EndingConfig, GameConfig, HudConfig, LevelLayout, MovementConfig, SentrySpec, ZoneSpec};

pub mod boost;
pub use boost::{BoostMeter, BoostPhase, BoostSnapshot, BoostTransition, BOOST_MAX};

pub mod locomotion;
pub use locomotion::{step_locomotion, LocomotionStep};

pub mod hud;
pub use hud::{hud_visual, HudStatus, HudTone, HudVisual};

pub mod ending;
pub use ending::{EndingFrame, EndingKind, EndingOutcome, EndingPhase, EndingSequencer};

//! User progress and achievements.
//!
//! `tracker` holds the raw progress state; `achievements` is a pure
//! projection over it. Nothing derived is ever stored back.

pub mod achievements;
pub mod tracker;

pub use achievements::{
    builtin_achievements, evaluate, Achievement, Criterion, EvaluatedAchievement, Rarity,
};
pub use tracker::{ModuleProgress, ProgressState};

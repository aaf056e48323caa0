//! Scoring module - metric evaluators and the weighted scorer

mod engine;
mod evaluators;

pub use engine::*;
pub use evaluators::*;

//! Skill vs. luck: repeated top-K selection over random populations.
//!
//! Each round draws a fresh population, ranks it by a fixed weighted
//! score, keeps the winners and averages their attributes. The engine
//! accumulates those per-round means across a run.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod population;
pub mod progress;
pub mod report;
pub mod rng;
pub mod round;
pub mod selection;
pub mod types;

//! Matching-pair board (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package re-exports
//! them as `memory_match::{core,types}` and hosts the headless [`autoplay`]
//! driver.

pub mod autoplay;

pub use memory_match_core as core;
pub use memory_match_types as types;

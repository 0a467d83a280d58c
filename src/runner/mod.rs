//! Headless run orchestration around the engine

pub mod params;

pub use params::{GlobalParams, RunParams};

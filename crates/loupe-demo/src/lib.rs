//! Scripted demo playback for the loupe visualizer.
//!
//! A demo is a fixed, pre-computed sequence of steps plus a cursor. The
//! orchestrators own their simulation state ([`loupe_map`] cores, or
//! [`loupe_eventloop`] lanes), apply one step per [`advance`], and rebuild
//! from scratch on [`retreat`] — scenarios are at most a few dozen steps, so
//! an O(cursor) rebuild beats carrying per-step undo deltas.
//!
//! All flow is pull-based: a driver mutates via `advance`/`retreat`/`reset`
//! and then asks for a fresh snapshot. Autoplay pacing is the driver's job;
//! `set_playing` only records the flag for the snapshot.
//!
//! [`advance`]: map_demo::MapDemo::advance
//! [`retreat`]: map_demo::MapDemo::retreat

pub mod catalog;
pub mod error;
pub mod loop_demo;
pub mod loop_scenarios;
pub mod map_demo;
pub mod map_scenarios;

pub use catalog::{Complexity, DemoInfo};
pub use error::DemoError;
pub use loop_demo::{EventLoopDemo, EventLoopDemoState, EventLoopStep, QueueAction};
pub use loop_scenarios::LoopScenario;
pub use map_demo::{MapDemo, MapDemoState, MapDemoStep, MapOp};
pub use map_scenarios::MapScenario;

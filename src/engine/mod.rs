// src/engine/mod.rs

//! Process lifetime for dirwatch.
//!
//! This module ties together:
//! - the shutdown gate (a single atomic flag tripped by OS signals)
//! - the signal listener that trips it
//! - startup / shutdown banners
//! - the poll loop that drives the synchronous reconciler in
//!   [`crate::watch`] until the gate trips.

pub mod banner;
pub mod gate;
pub mod poll_loop;
pub mod signals;

pub use gate::ShutdownGate;
pub use poll_loop::{PollLoop, PollSummary};
pub use signals::spawn_signal_listener;

//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `verify.rs` — the verification report (default command).
//! - `inspect.rs` — constant listing and Fibonacci lookup.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate computation to `services/*`.
//! - Keep the text report byte-stable; JSON goes through `services::output`.

pub mod inspect;
pub mod verify;

pub use inspect::{handle_constants, handle_fibonacci};
pub use verify::handle_verify;

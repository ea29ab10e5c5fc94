//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — criteria, measurements, result rows, JSON output structs.
//! - `constants.rs` — the fixed physical, mathematical and framework constants.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no evaluation logic and no printing.
//!
//! ## Compatibility note
//! `CheckRecord`, `VerifyReport` and `ConstantEntry` shape the `--json` output.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;

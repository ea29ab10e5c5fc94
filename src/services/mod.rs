//! Service layer containing the evaluation logic and output helpers.
//!
//! ## Service map
//! - `fibonacci.rs` — iterative Fibonacci terms.
//! - `evaluator.rs` — compute metric → classify → status for one check.
//! - `checks.rs` — the report sections and their formulas.
//! - `report.rs` — report accumulator, summary table and closing text.
//! - `format.rs` — scientific notation and digit grouping.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Services build strings and values; only `output.rs` and command handlers print.
//! - Keep command handlers thin; delegate to services.

pub mod checks;
pub mod evaluator;
pub mod fibonacci;
pub mod format;
pub mod output;
pub mod report;

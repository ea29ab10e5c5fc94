use anyhow::Context;

use crate::domain::constants::constant_set;
use crate::domain::models::FibonacciReport;
use crate::services::fibonacci::fibonacci;
use crate::services::format::compact;
use crate::services::output::{print_one, print_out};

pub fn handle_constants(json: bool) -> anyhow::Result<()> {
    let set = constant_set();
    print_out(json, &set, |c| {
        format!("{}\t{}\t{}", c.symbol, compact(c.value), c.unit)
    })
}

pub fn handle_fibonacci(json: bool, n: i64) -> anyhow::Result<()> {
    let value = fibonacci(n).with_context(|| format!("F({}) does not fit in u64", n))?;
    tracing::debug!(n, value, "fibonacci");
    print_one(json, FibonacciReport { n, value }, |r| r.value.to_string())
}

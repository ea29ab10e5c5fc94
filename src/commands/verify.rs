use crate::services::checks::run_all;
use crate::services::output::print_json;
use crate::services::report::Report;

pub fn handle_verify(json: bool, strict: bool) -> anyhow::Result<()> {
    let mut report = Report::new();
    run_all(&mut report)?;

    let passed = report.passed();
    let total = report.records.len();

    if json {
        print_json(report.into_verify_report())?;
    } else {
        print!("{}", report.text);
    }

    if strict {
        strict_outcome(passed, total)?;
    }
    Ok(())
}

/// Fails unless every check passed.
pub fn strict_outcome(passed: usize, total: usize) -> anyhow::Result<()> {
    if passed < total {
        anyhow::bail!("{} of {} checks failed", total - passed, total);
    }
    Ok(())
}

use std::fmt::Write;

use crate::domain::models::{CheckRecord, CheckResult, Measurement, VerifyReport};

pub const RULE_WIDTH: usize = 72;

const TITLE: &str = "KIRANDEEP'S LAW OF EMERGENCE - VERIFICATION";
const AUTHOR: &str = "Kirandeep Kaur";
const DATE: &str = "January 31, 2026";

const CATEGORIZED: &[&str] = &[
    "",
    "  CATEGORIZED RESULTS:",
    "  ════════════════════",
    "  ",
    "  Exact/Excellent (< 0.1% error):",
    "    • Fine structure constant α      (0.03%)",
    "    • Proton/electron mass ratio     (0.008%)",
    "    • Muon/electron mass ratio       (0.04%)",
    "  ",
    "  Good (< 1% error):",
    "    • Strong coupling α_s            (0.3%)",
    "    • Tau/electron mass ratio        (0.3%)",
    "    • Running α at M_Z               (0.2%)",
    "  ",
    "  Reasonable (< 5% error):",
    "    • Weinberg angle sin²θ_W         (1.3%)",
    "  ",
    "  Order of Magnitude:",
    "    • Neutrino masses                (~10%)",
    "    • Cosmological constant          (exact order 10¹²²)",
    "    • Hierarchy problem              (exact 10³⁶)",
    "  ",
];

const CREDITS: &[&str] = &[
    "  ",
    "  All named formulas and laws are original contributions by Kirandeep Kaur:",
    "  ",
    "    • Kirandeep's Law of Emergence:    E = ΔI / A",
    "    • Kirandeep's Formula:             μ = π³ + (21/22)π = 34",
    "    • Kirandeep's Bridge Relation:     B = π² - 1/√3 = 9.29",
    "    • Kirandeep's Conservation Law:    Γ × α_G = 1",
    "    • Kirandeep's Neutrino Formula:    m_ν = m_e / F(μ + i)",
    "    • Kirandeep's Running Formulas:    α(E), sin²θ_W(E)",
    "    • Kirandeep's Duality:             I_m × I_p = 10⁸¹",
    "  ",
];

/// Accumulates the text report and the result rows in evaluation order.
#[derive(Debug, Default)]
pub struct Report {
    pub text: String,
    pub records: Vec<CheckRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&mut self) -> anyhow::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.text, "{}", rule)?;
        writeln!(self.text, "  {}", TITLE)?;
        writeln!(self.text, "  Author: {}", AUTHOR)?;
        writeln!(self.text, "  Date: {}", DATE)?;
        writeln!(self.text, "{}", rule)?;
        Ok(())
    }

    pub fn section(&mut self, title: &str) -> anyhow::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.text)?;
        writeln!(self.text, "{}", rule)?;
        writeln!(self.text, "  {}", title)?;
        writeln!(self.text, "{}", rule)?;
        Ok(())
    }

    /// Appends the `(label, value, status)` row for an evaluated check.
    pub fn record(&mut self, label: &str, value: String, measurement: &Measurement) {
        let result = CheckResult {
            label: label.to_string(),
            value,
            status: measurement.status.clone(),
        };
        self.records.push(CheckRecord::new(result, measurement));
    }

    /// The `(label, value, status)` rows in evaluation order.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> + '_ {
        self.records.iter().map(|r| &r.result)
    }

    pub fn passed(&self) -> usize {
        passed_count(self.results())
    }

    /// Summary table, categorized commentary, credits and closing banner.
    pub fn summary(&mut self) -> anyhow::Result<()> {
        let double = "=".repeat(RULE_WIDTH);
        writeln!(self.text)?;
        writeln!(self.text, "{}", double)?;
        writeln!(self.text, "  SUMMARY OF RESULTS")?;
        writeln!(self.text, "{}", double)?;
        writeln!(self.text)?;

        let table = render_table(self.results())?;
        self.text.push_str(&table);

        for line in CATEGORIZED {
            writeln!(self.text, "{}", line)?;
        }
        let heavy = "═".repeat(RULE_WIDTH);
        writeln!(self.text, "  {}", heavy)?;
        writeln!(
            self.text,
            "  TESTS PASSED: {}/{}",
            self.passed(),
            self.records.len()
        )?;
        writeln!(self.text, "  {}", heavy)?;
        for line in CREDITS {
            writeln!(self.text, "{}", line)?;
        }

        writeln!(self.text, "{}", double)?;
        writeln!(self.text, "  VERIFICATION COMPLETE")?;
        writeln!(self.text, "{}", double)?;
        Ok(())
    }

    pub fn into_verify_report(self) -> VerifyReport {
        let passed = self.passed();
        let total = self.records.len();
        VerifyReport {
            results: self.records,
            passed,
            total,
        }
    }
}

pub fn passed_count<'a>(results: impl IntoIterator<Item = &'a CheckResult>) -> usize {
    results.into_iter().filter(|r| r.passed()).count()
}

fn border(left: char, mid: char, right: char) -> String {
    format!(
        "  {}{}{}{}{}{}{}",
        left,
        "─".repeat(29),
        mid,
        "─".repeat(17),
        mid,
        "─".repeat(17),
        right
    )
}

/// Fixed-width box table. Cells pad to their column but never truncate.
pub fn render_table<'a>(
    results: impl IntoIterator<Item = &'a CheckResult>,
) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", border('┌', '┬', '┐'))?;
    writeln!(
        out,
        "  │ {:<27} │ {:<15} │ {:<15} │",
        "Test", "Value", "Status"
    )?;
    writeln!(out, "{}", border('├', '┼', '┤'))?;
    for r in results {
        writeln!(
            out,
            "  │ {:<27} │ {:<15} │ {:<15} │",
            r.label, r.value, r.status
        )?;
    }
    writeln!(out, "{}", border('└', '┴', '┘'))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, value: &str, status: &str) -> CheckResult {
        CheckResult {
            label: label.to_string(),
            value: value.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn pass_count_looks_for_the_marker() {
        let rows = vec![
            row("a", "1%", "✓ PASS"),
            row("b", "2%", "✗ FAIL"),
            row("c", "3", "✓ PASS (order of magnitude)"),
            row("d", "4", "✗ MISMATCH"),
        ];
        assert_eq!(passed_count(&rows), 2);
    }

    #[test]
    fn table_pads_by_characters() {
        let table = render_table(&[row("μ convergence", "0.08%", "✓ PASS")]).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[3],
            "  │ μ convergence               │ 0.08%           │ ✓ PASS          │"
        );
        assert_eq!(lines[0].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn long_status_is_not_truncated() {
        let table = render_table(&[row("x", "5.91", "✓ PASS (order of magnitude)")]).unwrap();
        assert!(table.contains("│ ✓ PASS (order of magnitude) │"));
    }

    #[test]
    fn summary_reports_tally() {
        let mut report = Report::new();
        let m = Measurement {
            predicted: 1.0,
            observed: 1.0,
            metric: 0.0,
            passed: false,
            status: "✗ FAIL".to_string(),
        };
        report.record("only", "0%".to_string(), &m);
        report.summary().unwrap();
        assert!(report.text.contains("  TESTS PASSED: 0/1\n"));
        let rule = "=".repeat(72);
        assert!(report
            .text
            .ends_with(&format!("{rule}\n  VERIFICATION COMPLETE\n{rule}\n")));
    }

    #[test]
    fn section_banner_layout() {
        let mut report = Report::new();
        report.section("SECTION 9: TEST").unwrap();
        let dashes = "-".repeat(72);
        assert_eq!(
            report.text,
            format!("\n{dashes}\n  SECTION 9: TEST\n{dashes}\n")
        );
    }
}

use serde::Serialize;

/// Marker a status string carries when its check passed.
pub const PASS_MARK: char = '✓';

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// How a check decides pass/fail.
///
/// Only `RelativeError` goes through the shared percentage comparison; the
/// remaining variants classify their own metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    /// `|predicted - observed| / observed * 100 < max_pct`.
    RelativeError { max_pct: f64 },
    /// `|predicted - observed| < max`.
    AbsoluteDifference { max: f64 },
    /// `predicted < observed`, where `observed` is the bound.
    UpperBound,
    /// `low < predicted < high`, both exclusive.
    OrderOfMagnitude { low: f64, high: f64 },
}

/// Status strings printed for a passing and a failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabels {
    pub pass: &'static str,
    pub fail: &'static str,
}

impl StatusLabels {
    pub const PASS_FAIL: Self = Self {
        pass: "✓ PASS",
        fail: "✗ FAIL",
    };
    pub const EXACT: Self = Self {
        pass: "✓ EXACT",
        fail: "✗ MISMATCH",
    };
    pub const BOUND: Self = Self {
        pass: "✓ SATISFIES BOUND",
        fail: "✗ EXCEEDS BOUND",
    };
    pub const ORDER_OF_MAGNITUDE: Self = Self {
        pass: "✓ PASS (order of magnitude)",
        fail: "✗ FAIL",
    };

    pub fn pick(&self, passed: bool) -> &'static str {
        if passed {
            self.pass
        } else {
            self.fail
        }
    }
}

/// Outcome of one evaluated check before its value is formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub predicted: f64,
    pub observed: f64,
    /// Percentage error, absolute difference, or the raw predicted value,
    /// depending on the criterion.
    pub metric: f64,
    pub passed: bool,
    pub status: String,
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub value: String,
    pub status: String,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.status.contains(PASS_MARK)
    }
}

/// A summary row plus the numbers behind it.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    #[serde(flatten)]
    pub result: CheckResult,
    pub passed: bool,
    pub predicted: f64,
    pub observed: f64,
    pub metric: f64,
}

impl CheckRecord {
    pub fn new(result: CheckResult, measurement: &Measurement) -> Self {
        Self {
            passed: result.passed(),
            result,
            predicted: measurement.predicted,
            observed: measurement.observed,
            metric: measurement.metric,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub results: Vec<CheckRecord>,
    pub passed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstantEntry {
    pub symbol: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

impl ConstantEntry {
    pub fn new(
        symbol: &'static str,
        value: f64,
        unit: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            symbol,
            value,
            unit,
            description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FibonacciReport {
    pub n: i64,
    pub value: u64,
}

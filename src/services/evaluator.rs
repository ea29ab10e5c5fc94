use crate::domain::models::{Criterion, Measurement, StatusLabels};

/// `|predicted - observed| / observed * 100`.
pub fn relative_error_pct(predicted: f64, observed: f64) -> anyhow::Result<f64> {
    anyhow::ensure!(
        observed != 0.0,
        "relative error undefined for observed value 0"
    );
    Ok((predicted - observed).abs() / observed * 100.0)
}

/// Computes the metric for `criterion`, classifies it and picks the status string.
pub fn evaluate(
    label: &str,
    predicted: f64,
    observed: f64,
    criterion: Criterion,
    labels: StatusLabels,
) -> anyhow::Result<Measurement> {
    anyhow::ensure!(
        predicted.is_finite() && observed.is_finite(),
        "{}: non-finite input (predicted={}, observed={})",
        label,
        predicted,
        observed
    );

    let (metric, passed) = match criterion {
        Criterion::RelativeError { max_pct } => {
            let err = relative_error_pct(predicted, observed)?;
            (err, err < max_pct)
        }
        Criterion::AbsoluteDifference { max } => {
            let diff = (predicted - observed).abs();
            (diff, diff < max)
        }
        Criterion::UpperBound => (predicted, predicted < observed),
        Criterion::OrderOfMagnitude { low, high } => {
            (predicted, low < predicted && predicted < high)
        }
    };

    tracing::debug!(
        check = label,
        predicted,
        observed,
        metric,
        passed,
        "evaluated check"
    );

    Ok(Measurement {
        predicted,
        observed,
        metric,
        passed,
        status: labels.pick(passed).to_string(),
    })
}

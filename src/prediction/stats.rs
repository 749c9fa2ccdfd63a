//! Fallback statistics for payloads that omit `summary`.

use super::wire::PredictionSummary;

/// Mean, median, min and max of `values`, ignoring non-finite entries.
/// Returns `None` when nothing finite remains.
pub fn summarize(values: &[f64]) -> Option<PredictionSummary> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_by(f64::total_cmp);
    let len = finite.len();
    let mean = finite.iter().sum::<f64>() / len as f64;
    let median = if len % 2 == 1 {
        finite[len / 2]
    } else {
        (finite[len / 2 - 1] + finite[len / 2]) / 2.0
    };
    Some(PredictionSummary {
        mean,
        median,
        min: finite[0],
        max: finite[len - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_median_is_middle_value() {
        let summary = summarize(&[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.median, 20.0);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 30.0);
    }

    #[test]
    fn skips_non_finite_values() {
        let summary = summarize(&[f64::NAN, 2.0, f64::INFINITY, 4.0]).unwrap();
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn empty_input_has_no_summary() {
        assert!(summarize(&[]).is_none());
        assert!(summarize(&[f64::NAN]).is_none());
    }
}

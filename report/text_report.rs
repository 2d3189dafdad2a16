use verdict_metrics::{ValidationMetric, ValidationMetricsOutput};

/// Formats the scalar metric report for terminals and logs.
pub struct TextReport<'a> {
	metrics: &'a ValidationMetricsOutput,
}

impl<'a> TextReport<'a> {
	pub fn new(metrics: &'a ValidationMetricsOutput) -> Self {
		Self { metrics }
	}
}

impl<'a> std::fmt::Display for TextReport<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		writeln!(f, "## Validation Metrics")?;
		writeln!(f)?;
		for metric in ValidationMetric::ALL.iter() {
			match self.metrics.get(*metric) {
				Some(value) => writeln!(f, "{}: {:.4}", metric, value)?,
				None => writeln!(f, "{}: undefined", metric)?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
use verdict_metrics::{Metric, ValidationMetrics, ValidationMetricsInput};

#[test]
fn test_text_report() {
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[1, 0, 1, 0],
		probabilities: &[0.9, 0.6, 0.4, 0.1],
		labels: &[1, 1, 0, 0],
	})
	.unwrap();
	let report = TextReport::new(&metrics).to_string();
	assert_eq!(
		report,
		"## Validation Metrics\n\nAccuracy: 0.5000\nF1 Score: 0.5000\nPrecision: 0.5000\nSensitivity: 0.5000\nSpecificity: 0.5000\nAUC: 1.0000\n"
	);
}

#[test]
fn test_text_report_undefined_metric() {
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[0, 0, 0, 0],
		probabilities: &[0.4, 0.3, 0.2, 0.1],
		labels: &[1, 1, 0, 0],
	})
	.unwrap();
	let report = TextReport::new(&metrics).to_string();
	assert!(report.contains("Precision: undefined"));
}

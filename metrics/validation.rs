use crate::auc_roc::auc_roc;
use crate::confusion_matrix::BinaryConfusionMatrix;
use crate::error::MetricsError;
use crate::Metric;

/// Identifies one of the six metrics in the validation report. The display names are the keys consumers see in rendered reports.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMetric {
	Accuracy,
	F1Score,
	Precision,
	Sensitivity,
	Specificity,
	AucRoc,
}

impl ValidationMetric {
	pub const ALL: [ValidationMetric; 6] = [
		ValidationMetric::Accuracy,
		ValidationMetric::F1Score,
		ValidationMetric::Precision,
		ValidationMetric::Sensitivity,
		ValidationMetric::Specificity,
		ValidationMetric::AucRoc,
	];

	pub fn name(self) -> &'static str {
		match self {
			ValidationMetric::Accuracy => "Accuracy",
			ValidationMetric::F1Score => "F1 Score",
			ValidationMetric::Precision => "Precision",
			ValidationMetric::Sensitivity => "Sensitivity",
			ValidationMetric::Specificity => "Specificity",
			ValidationMetric::AucRoc => "AUC",
		}
	}
}

impl std::fmt::Display for ValidationMetric {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Computes the scalar metric report for a validation set.
pub struct ValidationMetrics;

pub struct ValidationMetricsInput<'a> {
	pub predictions: &'a [usize],
	pub probabilities: &'a [f32],
	pub labels: &'a [usize],
}

/// The scalar metric report. A ratio metric is `None` when its denominator is zero, and `auc_roc` is `None` when the labels contain a single class. An undefined value is never coerced to zero: a model that makes no positive calls has no precision, not zero precision.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct ValidationMetricsOutput {
	pub confusion_matrix: BinaryConfusionMatrix,
	pub accuracy: Option<f32>,
	pub f1_score: Option<f32>,
	pub precision: Option<f32>,
	pub sensitivity: Option<f32>,
	pub specificity: Option<f32>,
	pub auc_roc: Option<f32>,
}

impl<'a> Metric<'a> for ValidationMetrics {
	type Input = ValidationMetricsInput<'a>;
	type Output = Result<ValidationMetricsOutput, MetricsError>;

	fn compute(input: ValidationMetricsInput) -> Result<ValidationMetricsOutput, MetricsError> {
		check_aligned(input.predictions.len(), input.labels.len())?;
		check_binary(input.predictions)?;
		check_probabilities_and_labels(input.probabilities, input.labels)?;
		let confusion_matrix = BinaryConfusionMatrix::from_labels(input.predictions, input.labels);
		let auc_roc = match auc_roc(input.probabilities, input.labels) {
			Ok(value) => Some(value),
			Err(MetricsError::DegenerateLabelSet) => None,
			Err(error) => return Err(error),
		};
		Ok(ValidationMetricsOutput {
			accuracy: confusion_matrix.accuracy(),
			f1_score: confusion_matrix.f1_score(),
			precision: confusion_matrix.precision(),
			sensitivity: confusion_matrix.sensitivity(),
			specificity: confusion_matrix.specificity(),
			auc_roc,
			confusion_matrix,
		})
	}
}

impl ValidationMetricsOutput {
	/// The report viewed as a mapping from metric to value.
	pub fn get(&self, metric: ValidationMetric) -> Option<f32> {
		match metric {
			ValidationMetric::Accuracy => self.accuracy,
			ValidationMetric::F1Score => self.f1_score,
			ValidationMetric::Precision => self.precision,
			ValidationMetric::Sensitivity => self.sensitivity,
			ValidationMetric::Specificity => self.specificity,
			ValidationMetric::AucRoc => self.auc_roc,
		}
	}

	/// Like [`get`](#method.get), but an absent value is returned as the error that caused it.
	pub fn require(&self, metric: ValidationMetric) -> Result<f32, MetricsError> {
		self.get(metric).ok_or(match metric {
			ValidationMetric::AucRoc => MetricsError::DegenerateLabelSet,
			metric => MetricsError::UndefinedMetric { metric },
		})
	}
}

pub(crate) fn check_aligned(left: usize, right: usize) -> Result<(), MetricsError> {
	if left != right {
		return Err(MetricsError::LengthMismatch { left, right });
	}
	if left == 0 {
		return Err(MetricsError::EmptyInput);
	}
	Ok(())
}

pub(crate) fn check_binary(values: &[usize]) -> Result<(), MetricsError> {
	for value in values.iter() {
		if *value > 1 {
			return Err(MetricsError::InvalidLabel { value: *value });
		}
	}
	Ok(())
}

pub(crate) fn check_probabilities_and_labels(
	probabilities: &[f32],
	labels: &[usize],
) -> Result<(), MetricsError> {
	check_aligned(probabilities.len(), labels.len())?;
	check_binary(labels)?;
	for probability in probabilities.iter() {
		if !probability.is_finite() || *probability < 0.0 || *probability > 1.0 {
			return Err(MetricsError::InvalidProbability {
				value: *probability,
			});
		}
	}
	Ok(())
}

#[test]
fn test_perfect_predictions() {
	let predictions = vec![1, 0, 1, 0];
	let probabilities = vec![0.9, 0.1, 0.8, 0.2];
	let labels = vec![1, 0, 1, 0];
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &predictions,
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	insta::assert_debug_snapshot!(metrics, @r###"
 ValidationMetricsOutput {
     confusion_matrix: BinaryConfusionMatrix {
         true_positives: 2,
         false_positives: 0,
         true_negatives: 2,
         false_negatives: 0,
     },
     accuracy: Some(
         1.0,
     ),
     f1_score: Some(
         1.0,
     ),
     precision: Some(
         1.0,
     ),
     sensitivity: Some(
         1.0,
     ),
     specificity: Some(
         1.0,
     ),
     auc_roc: Some(
         1.0,
     ),
 }
 "###);
}

#[test]
fn test_complemented_predictions() {
	// every prediction is the opposite of its label
	let predictions = vec![0, 1, 0, 1];
	let probabilities = vec![0.1, 0.9, 0.2, 0.8];
	let labels = vec![1, 0, 1, 0];
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &predictions,
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	assert_eq!(metrics.accuracy, Some(0.0));
	assert_eq!(metrics.f1_score, Some(0.0));
	assert_eq!(metrics.auc_roc, Some(0.0));
}

#[test]
fn test_no_positive_calls() {
	let predictions = vec![0, 0, 0, 0];
	let probabilities = vec![0.4, 0.3, 0.2, 0.1];
	let labels = vec![1, 1, 0, 0];
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &predictions,
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	assert_eq!(metrics.precision, None);
	assert_eq!(
		metrics.require(ValidationMetric::Precision),
		Err(MetricsError::UndefinedMetric {
			metric: ValidationMetric::Precision
		})
	);
	assert_eq!(metrics.accuracy, Some(0.5));
}

#[test]
fn test_single_class_labels() {
	let predictions = vec![1, 1, 0];
	let probabilities = vec![0.9, 0.8, 0.4];
	let labels = vec![1, 1, 1];
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &predictions,
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	assert_eq!(metrics.auc_roc, None);
	assert_eq!(
		metrics.require(ValidationMetric::AucRoc),
		Err(MetricsError::DegenerateLabelSet)
	);
	assert_eq!(metrics.specificity, None);
	assert_eq!(metrics.sensitivity, Some(2.0 / 3.0));
}

#[test]
fn test_invalid_inputs() {
	let result = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[1, 0],
		probabilities: &[0.9, 0.1, 0.5],
		labels: &[1, 0, 1],
	});
	assert_eq!(
		result,
		Err(MetricsError::LengthMismatch { left: 2, right: 3 })
	);
	let result = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[],
		probabilities: &[],
		labels: &[],
	});
	assert_eq!(result, Err(MetricsError::EmptyInput));
	let result = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[1, 2],
		probabilities: &[0.9, 0.1],
		labels: &[1, 0],
	});
	assert_eq!(result, Err(MetricsError::InvalidLabel { value: 2 }));
	let result = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[1, 0],
		probabilities: &[0.9, f32::NAN],
		labels: &[1, 0],
	});
	assert!(matches!(
		result,
		Err(MetricsError::InvalidProbability { .. })
	));
}

#[test]
fn test_report_as_json() {
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[1, 0, 1, 0],
		probabilities: &[0.9, 0.1, 0.8, 0.2],
		labels: &[1, 0, 1, 0],
	})
	.unwrap();
	let json = serde_json::to_value(&metrics).unwrap();
	assert_eq!(json["accuracy"], serde_json::json!(1.0));
	assert_eq!(
		json["confusion_matrix"]["true_positives"],
		serde_json::json!(2)
	);
}

#[test]
fn test_get_matches_fields() {
	let metrics = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &[1, 0, 1, 0],
		probabilities: &[0.9, 0.6, 0.4, 0.1],
		labels: &[1, 1, 0, 0],
	})
	.unwrap();
	for metric in ValidationMetric::ALL.iter() {
		assert!(metrics.get(*metric).is_some());
	}
	assert_eq!(metrics.get(ValidationMetric::AucRoc), metrics.auc_roc);
}

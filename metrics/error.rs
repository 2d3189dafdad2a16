use crate::validation::ValidationMetric;
use thiserror::Error;

/// An error produced while computing validation metrics.
///
/// Input errors are detected up front and fail the whole call before any computation. `UndefinedMetric` and `DegenerateLabelSet` describe conditions of a single metric: a zero denominator is an arithmetic property of the predictions, while a single-class label set is a property of the data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
	#[error("input slices have mismatched lengths: {left} != {right}")]
	LengthMismatch { left: usize, right: usize },
	#[error("input slices are empty")]
	EmptyInput,
	#[error("label {value} is not a binary class index")]
	InvalidLabel { value: usize },
	#[error("probability {value} is not a finite number in [0, 1]")]
	InvalidProbability { value: f32 },
	#[error("{metric} is undefined because its denominator is zero")]
	UndefinedMetric { metric: ValidationMetric },
	#[error("the labels contain a single class, so ranking metrics are undefined")]
	DegenerateLabelSet,
}

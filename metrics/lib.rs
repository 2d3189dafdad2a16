/*!
This crate computes validation metrics for binary classifiers. Given the predicted labels, predicted positive class probabilities, and true labels for a validation set, it produces a scalar metric report ([`ValidationMetrics`](struct.ValidationMetrics.html)), a decision threshold sweep ([`ThresholdSweep`](struct.ThresholdSweep.html)), and the ROC and precision-recall curve series consumed by plotting layers.
*/

#![allow(clippy::tabs_in_doc_comments)]

mod auc_roc;
mod confusion_matrix;
mod error;
mod precision_recall;
mod threshold_sweep;
mod validation;

pub use self::auc_roc::{auc_roc, roc_curve, RocCurvePoint};
pub use self::confusion_matrix::BinaryConfusionMatrix;
pub use self::error::MetricsError;
pub use self::precision_recall::{average_precision, precision_recall_curve, PrCurvePoint};
pub use self::threshold_sweep::{
	SweptMetric, SweptMetricSeries, ThresholdPoint, ThresholdSweep, ThresholdSweepInput,
	ThresholdSweepOutput, N_THRESHOLDS,
};
pub use self::validation::{
	ValidationMetric, ValidationMetrics, ValidationMetricsInput, ValidationMetricsOutput,
};

/**
The `Metric` trait defines a common interface to metrics that can be computed when the entire input is available at once.

The seemingly unused generic lifetime `'a` exists here to allow `Input`s and `Output`s to borrow from their enclosing scope. When Rust stabilizes Generic Associated Types (GATs), the generic lifetime will move to the associated types.
*/
pub trait Metric<'a> {
	type Input;
	type Output;
	fn compute(input: Self::Input) -> Self::Output;
}

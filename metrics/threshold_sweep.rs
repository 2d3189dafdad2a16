use crate::confusion_matrix::BinaryConfusionMatrix;
use crate::error::MetricsError;
use crate::validation::check_probabilities_and_labels;
use crate::Metric;
use itertools::izip;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/// The number of thresholds in the sweep: 0.01 through 0.99, step 0.01.
pub const N_THRESHOLDS: usize = 99;

// the index whose threshold is exactly 0.50
const HALF_THRESHOLD_INDEX: usize = 49;

/// Identifies one of the five quantities tracked across the threshold sweep.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweptMetric {
	SampleFraction,
	Accuracy,
	Precision,
	Recall,
	F1Score,
}

impl SweptMetric {
	pub const ALL: [SweptMetric; 5] = [
		SweptMetric::SampleFraction,
		SweptMetric::Accuracy,
		SweptMetric::Precision,
		SweptMetric::Recall,
		SweptMetric::F1Score,
	];

	pub fn name(self) -> &'static str {
		match self {
			SweptMetric::SampleFraction => "Percentage of Samples",
			SweptMetric::Accuracy => "Accuracy",
			SweptMetric::Precision => "Precision",
			SweptMetric::Recall => "Recall",
			SweptMetric::F1Score => "F1 Score",
		}
	}
}

impl std::fmt::Display for SweptMetric {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct ThresholdPoint {
	pub threshold: f32,
	pub value: f32,
}

/// One metric's values across the sweep.
///
/// `points` excludes thresholds where the computed value is exactly zero, so plotted curves skip their dead segments. `value_at_half` is the raw value at threshold 0.50, recorded whether or not it survives the filter.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct SweptMetricSeries {
	pub metric: SweptMetric,
	pub points: Vec<ThresholdPoint>,
	pub value_at_half: f32,
}

/**
Recomputes accuracy, precision, recall, f1, and the fraction of positive calls at each of the 99 decision thresholds, to support choosing an operating point.

Unlike the single-point report, the sweep coerces a zero-denominator ratio to zero instead of reporting it as undefined: the sweep must stay total across all thresholds to produce a plottable curve.
*/
pub struct ThresholdSweep;

pub struct ThresholdSweepInput<'a> {
	pub probabilities: &'a [f32],
	pub labels: &'a [usize],
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct ThresholdSweepOutput {
	pub series: Vec<SweptMetricSeries>,
}

impl ThresholdSweepOutput {
	pub fn get(&self, metric: SweptMetric) -> &SweptMetricSeries {
		self.series
			.iter()
			.find(|series| series.metric == metric)
			.unwrap()
	}
}

impl<'a> Metric<'a> for ThresholdSweep {
	type Input = ThresholdSweepInput<'a>;
	type Output = Result<ThresholdSweepOutput, MetricsError>;

	fn compute(input: ThresholdSweepInput) -> Result<ThresholdSweepOutput, MetricsError> {
		check_probabilities_and_labels(input.probabilities, input.labels)?;
		//            threshold_index  prediction  label
		//                  |           |          /
		//                  v           v         v
		let shape = (N_THRESHOLDS, 2, 2);
		let mut confusion_matrices = Array3::<u64>::zeros(shape);
		for threshold_index in 0..N_THRESHOLDS {
			let threshold = threshold_value(threshold_index);
			for (probability, label) in izip!(input.probabilities, input.labels) {
				let prediction = if *probability > threshold { 1 } else { 0 };
				confusion_matrices[(threshold_index, prediction, *label)] += 1;
			}
		}
		let series = SweptMetric::ALL
			.iter()
			.map(|metric| {
				let mut points = Vec::with_capacity(N_THRESHOLDS);
				let mut value_at_half = 0.0;
				for threshold_index in 0..N_THRESHOLDS {
					let confusion_matrix = confusion_matrix_at(&confusion_matrices, threshold_index);
					let value = swept_value(*metric, &confusion_matrix);
					if threshold_index == HALF_THRESHOLD_INDEX {
						value_at_half = value;
					}
					if value != 0.0 {
						points.push(ThresholdPoint {
							threshold: threshold_value(threshold_index),
							value,
						});
					}
				}
				SweptMetricSeries {
					metric: *metric,
					points,
					value_at_half,
				}
			})
			.collect();
		Ok(ThresholdSweepOutput { series })
	}
}

// thresholds come from integer division so the 0.50 midpoint is exact, never from accumulating 0.01 steps
fn threshold_value(threshold_index: usize) -> f32 {
	(threshold_index + 1).to_f32().unwrap() / 100.0
}

fn confusion_matrix_at(
	confusion_matrices: &Array3<u64>,
	threshold_index: usize,
) -> BinaryConfusionMatrix {
	BinaryConfusionMatrix {
		true_positives: confusion_matrices[(threshold_index, 1, 1)],
		false_positives: confusion_matrices[(threshold_index, 1, 0)],
		true_negatives: confusion_matrices[(threshold_index, 0, 0)],
		false_negatives: confusion_matrices[(threshold_index, 0, 1)],
	}
}

fn swept_value(metric: SweptMetric, confusion_matrix: &BinaryConfusionMatrix) -> f32 {
	match metric {
		SweptMetric::SampleFraction => {
			let calls = confusion_matrix.true_positives + confusion_matrix.false_positives;
			calls.to_f32().unwrap() / confusion_matrix.n_examples().to_f32().unwrap()
		}
		SweptMetric::Accuracy => confusion_matrix.accuracy().unwrap_or(0.0),
		SweptMetric::Precision => confusion_matrix.precision().unwrap_or(0.0),
		SweptMetric::Recall => confusion_matrix.sensitivity().unwrap_or(0.0),
		SweptMetric::F1Score => confusion_matrix.f1_score().unwrap_or(0.0),
	}
}

#[cfg(test)]
use crate::validation::{ValidationMetrics, ValidationMetricsInput};

#[test]
fn test_sample_fraction_is_non_increasing() {
	use itertools::Itertools;
	let probabilities = vec![0.95, 0.82, 0.75, 0.61, 0.5, 0.33, 0.25, 0.11];
	let labels = vec![1, 1, 0, 1, 0, 1, 0, 0];
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	let series = sweep.get(SweptMetric::SampleFraction);
	assert!(series
		.points
		.iter()
		.tuple_windows()
		.all(|(left, right)| left.value >= right.value));
}

#[test]
fn test_value_at_half_matches_single_point_report() {
	let probabilities = vec![0.9, 0.7, 0.55, 0.45, 0.3, 0.1];
	let labels = vec![1, 0, 1, 1, 0, 0];
	let predictions: Vec<usize> = probabilities
		.iter()
		.map(|probability| if *probability > 0.5 { 1 } else { 0 })
		.collect();
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	let report = ValidationMetrics::compute(ValidationMetricsInput {
		predictions: &predictions,
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	assert_eq!(
		sweep.get(SweptMetric::Accuracy).value_at_half,
		report.accuracy.unwrap()
	);
	assert_eq!(
		sweep.get(SweptMetric::Precision).value_at_half,
		report.precision.unwrap()
	);
	assert_eq!(
		sweep.get(SweptMetric::Recall).value_at_half,
		report.sensitivity.unwrap()
	);
	assert_eq!(
		sweep.get(SweptMetric::F1Score).value_at_half,
		report.f1_score.unwrap()
	);
}

#[test]
fn test_zero_values_are_filtered() {
	// the only positive sample sits at probability 0.6, so every threshold from 0.60 up has zero recall
	let probabilities = vec![0.6, 0.4];
	let labels = vec![1, 0];
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	let recall = sweep.get(SweptMetric::Recall);
	assert_eq!(recall.points.len(), 59);
	assert!(recall.points.iter().all(|point| point.value == 1.0));
	assert!(recall
		.points
		.iter()
		.all(|point| point.threshold < 0.6));
}

#[test]
fn test_value_at_half_survives_the_filter() {
	// no probability clears 0.5, so recall at the half threshold is a filtered zero
	let probabilities = vec![0.4, 0.3];
	let labels = vec![1, 0];
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	let recall = sweep.get(SweptMetric::Recall);
	assert_eq!(recall.value_at_half, 0.0);
	assert!(recall
		.points
		.iter()
		.all(|point| point.threshold < 0.4));
}

#[test]
fn test_sample_fraction_levels() {
	let probabilities = vec![0.75, 0.25];
	let labels = vec![1, 0];
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	let series = sweep.get(SweptMetric::SampleFraction);
	// both samples called below 0.25, one sample through 0.74, none after
	assert_eq!(series.points.len(), 74);
	assert_eq!(series.points[0].value, 1.0);
	assert_eq!(series.points[23].value, 1.0);
	assert_eq!(series.points[24].value, 0.5);
	assert_eq!(series.points[73].value, 0.5);
	assert_eq!(series.value_at_half, 0.5);
}

#[test]
fn test_strict_inequality_at_the_threshold() {
	// a probability exactly equal to the threshold is classified negative
	let probabilities = vec![0.5, 0.5];
	let labels = vec![1, 0];
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities: &probabilities,
		labels: &labels,
	})
	.unwrap();
	let series = sweep.get(SweptMetric::SampleFraction);
	assert_eq!(series.value_at_half, 0.0);
}

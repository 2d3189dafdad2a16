use crate::auc_roc::tps_fps_by_threshold;
use crate::error::MetricsError;
use crate::validation::check_probabilities_and_labels;
use itertools::Itertools;
use num_traits::ToPrimitive;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct PrCurvePoint {
	/// The classification threshold.
	pub threshold: f32,
	/// The precision for all predictions with probability > threshold.
	pub precision: f32,
	/// The recall for all predictions with probability > threshold.
	pub recall: f32,
}

/// This function computes the precision-recall curve: one point per distinct probability value, walked from the highest threshold down, anchored at the zero-recall point.
pub fn precision_recall_curve(
	probabilities: &[f32],
	labels: &[usize],
) -> Result<Vec<PrCurvePoint>, MetricsError> {
	check_probabilities_and_labels(probabilities, labels)?;
	let count_positives = labels.iter().filter(|label| **label == 1).count();
	if count_positives == 0 || count_positives == labels.len() {
		return Err(MetricsError::DegenerateLabelSet);
	}
	let mut tps_fps = tps_fps_by_threshold(probabilities, labels);
	for i in 1..tps_fps.len() {
		tps_fps[i].true_positives += tps_fps[i - 1].true_positives;
		tps_fps[i].false_positives += tps_fps[i - 1].false_positives;
	}
	// anchor at recall zero with a dummy threshold above any probability
	let mut curve = vec![PrCurvePoint {
		threshold: 1.1,
		precision: 1.0,
		recall: 0.0,
	}];
	tps_fps.iter().for_each(|tps_fps_point| {
		let calls = tps_fps_point.true_positives + tps_fps_point.false_positives;
		curve.push(PrCurvePoint {
			threshold: tps_fps_point.threshold,
			precision: tps_fps_point.true_positives.to_f32().unwrap() / calls.to_f32().unwrap(),
			recall: tps_fps_point.true_positives.to_f32().unwrap()
				/ count_positives.to_f32().unwrap(),
		})
	});
	Ok(curve)
}

/// This function computes the average precision: the precision-recall curve summarized as sum((recall_i - recall_i-1) * precision_i).
pub fn average_precision(probabilities: &[f32], labels: &[usize]) -> Result<f32, MetricsError> {
	let curve = precision_recall_curve(probabilities, labels)?;
	let average_precision = curve
		.iter()
		.tuple_windows()
		.map(|(previous, point)| (point.recall - previous.recall) * point.precision)
		.sum();
	Ok(average_precision)
}

#[test]
fn test_precision_recall_curve() {
	let probabilities = vec![0.9, 0.4, 0.4, 0.2];
	let labels = vec![1, 1, 0, 0];
	let left = precision_recall_curve(&probabilities, &labels).unwrap();
	let right = vec![
		PrCurvePoint {
			threshold: 1.1,
			precision: 1.0,
			recall: 0.0,
		},
		PrCurvePoint {
			threshold: 0.9,
			precision: 1.0,
			recall: 0.5,
		},
		PrCurvePoint {
			threshold: 0.4,
			precision: 2.0 / 3.0,
			recall: 1.0,
		},
		PrCurvePoint {
			threshold: 0.2,
			precision: 0.5,
			recall: 1.0,
		},
	];
	assert_eq!(left, right);
}

#[test]
fn test_average_precision() {
	let probabilities = vec![0.9, 0.4, 0.4, 0.2];
	let labels = vec![1, 1, 0, 0];
	let average_precision = average_precision(&probabilities, &labels).unwrap();
	assert!(f32::abs(average_precision - 5.0 / 6.0) < 1e-6);
}

#[test]
fn test_average_precision_perfect_ranking() {
	let probabilities = vec![0.9, 0.8, 0.2, 0.1];
	let labels = vec![1, 1, 0, 0];
	let average_precision = average_precision(&probabilities, &labels).unwrap();
	assert!(f32::abs(average_precision - 1.0) < f32::EPSILON);
}

#[test]
fn test_degenerate_labels() {
	let probabilities = vec![0.9, 0.8];
	let labels = vec![0, 0];
	assert_eq!(
		precision_recall_curve(&probabilities, &labels),
		Err(MetricsError::DegenerateLabelSet)
	);
}

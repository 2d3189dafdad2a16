use crate::error::MetricsError;
use crate::validation::check_probabilities_and_labels;
use num_traits::ToPrimitive;

/// This function computes the area under the receiver operating characteristic curve as the Mann-Whitney rank statistic: the probability that a randomly chosen positive example is ranked above a randomly chosen negative one, with tied probabilities resolved by midrank averaging.
pub fn auc_roc(probabilities: &[f32], labels: &[usize]) -> Result<f32, MetricsError> {
	check_probabilities_and_labels(probabilities, labels)?;
	let count_positives = labels.iter().filter(|label| **label == 1).count();
	let count_negatives = labels.len() - count_positives;
	if count_positives == 0 || count_negatives == 0 {
		return Err(MetricsError::DegenerateLabelSet);
	}
	let ranks = midranks(probabilities);
	let positive_rank_sum: f64 = labels
		.iter()
		.zip(ranks.iter())
		.filter(|(label, _)| **label == 1)
		.map(|(_, rank)| rank)
		.sum();
	let count_positives = count_positives.to_f64().unwrap();
	let count_negatives = count_negatives.to_f64().unwrap();
	let auc = (positive_rank_sum - count_positives * (count_positives + 1.0) / 2.0)
		/ (count_positives * count_negatives);
	Ok(auc.to_f32().unwrap())
}

// assigns 1-based ranks by ascending probability, with each group of tied values sharing the mean rank of the group
fn midranks(probabilities: &[f32]) -> Vec<f64> {
	let mut indexed: Vec<(f32, usize)> = probabilities
		.iter()
		.copied()
		.enumerate()
		.map(|(index, probability)| (probability, index))
		.collect();
	indexed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
	let mut ranks = vec![0.0; indexed.len()];
	let mut i = 0;
	while i < indexed.len() {
		let mut j = i + 1;
		while j < indexed.len() && indexed[j].0 == indexed[i].0 {
			j += 1;
		}
		let group_rank = (i + 1..=j).map(|rank| rank.to_f64().unwrap()).sum::<f64>()
			/ (j - i).to_f64().unwrap();
		for k in i..j {
			ranks[indexed[k].1] = group_rank;
		}
		i = j;
	}
	ranks
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct RocCurvePoint {
	/// The classification threshold.
	pub threshold: f32,
	/// The true positive rate for all predictions with probability > threshold.
	pub true_positive_rate: f32,
	/// The false positive rate for all predictions with probability > threshold.
	pub false_positive_rate: f32,
}

/// This function computes the ROC curve. The ROC curve plots the false positive rate on the x axis and the true positive rate on the y axis for various classification thresholds.
pub fn roc_curve(
	probabilities: &[f32],
	labels: &[usize],
) -> Result<Vec<RocCurvePoint>, MetricsError> {
	check_probabilities_and_labels(probabilities, labels)?;
	let count_positives = labels.iter().filter(|label| **label == 1).count();
	let count_negatives = labels.len() - count_positives;
	if count_positives == 0 || count_negatives == 0 {
		return Err(MetricsError::DegenerateLabelSet);
	}
	let mut tps_fps = tps_fps_by_threshold(probabilities, labels);
	for i in 1..tps_fps.len() {
		tps_fps[i].true_positives += tps_fps[i - 1].true_positives;
		tps_fps[i].false_positives += tps_fps[i - 1].false_positives;
	}
	// add a point at (0,0) on the roc curve with a dummy threshold above any probability
	let mut roc_curve = vec![RocCurvePoint {
		threshold: 1.1,
		true_positive_rate: 0.0,
		false_positive_rate: 0.0,
	}];
	tps_fps.iter().for_each(|tps_fps_point| {
		roc_curve.push(RocCurvePoint {
			threshold: tps_fps_point.threshold,
			true_positive_rate: tps_fps_point.true_positives.to_f32().unwrap()
				/ count_positives.to_f32().unwrap(),
			false_positive_rate: tps_fps_point.false_positives.to_f32().unwrap()
				/ count_negatives.to_f32().unwrap(),
		})
	});
	Ok(roc_curve)
}

#[derive(Debug)]
pub(crate) struct TpsFpsPoint {
	/// The classification threshold.
	pub(crate) threshold: f32,
	/// The true positives for this threshold.
	pub(crate) true_positives: usize,
	/// The false positives for this threshold.
	pub(crate) false_positives: usize,
}

/**
This function computes the counts of true positives and false positives at each classification threshold. Unlike the roc curve, each point contains just the count of true positives and false positives at this threshold instead of all values greater than this threshold.
*/
pub(crate) fn tps_fps_by_threshold(probabilities: &[f32], labels: &[usize]) -> Vec<TpsFpsPoint> {
	let mut probabilities_labels: Vec<(f32, usize)> = probabilities
		.iter()
		.zip(labels.iter())
		.map(|(a, b)| (a.to_owned(), b.to_owned()))
		.collect();
	probabilities_labels.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
	probabilities_labels.reverse();
	let mut tps_fps: Vec<TpsFpsPoint> = Vec::new();
	probabilities_labels
		.iter()
		.for_each(|(probability, label)| {
			// if probability is same as the last one, add to the previous bucket
			let tp = *label;
			match tps_fps.last() {
				Some(last_point)
					if probability.partial_cmp(&last_point.threshold).unwrap()
						== std::cmp::Ordering::Equal =>
				{
					let last = tps_fps.last_mut().unwrap();
					last.true_positives += tp;
					last.false_positives += 1 - tp;
				}
				_ => {
					tps_fps.push(TpsFpsPoint {
						threshold: *probability,
						true_positives: tp,
						false_positives: 1 - tp,
					});
				}
			}
		});
	tps_fps
}

#[test]
fn test_auc_perfect_ranking() {
	let probabilities = vec![0.9, 0.8, 0.2, 0.1];
	let labels = vec![1, 1, 0, 0];
	let auc = auc_roc(&probabilities, &labels).unwrap();
	assert!(f32::abs(auc - 1.0) < f32::EPSILON);
}

#[test]
fn test_auc_with_ties() {
	// the tied pair across the two classes at 0.4 contributes half a win
	let probabilities = vec![0.9, 0.4, 0.4, 0.2];
	let labels = vec![1, 1, 0, 0];
	let auc = auc_roc(&probabilities, &labels).unwrap();
	assert!(f32::abs(auc - 0.875) < f32::EPSILON);
}

#[test]
fn test_auc_rank_invariance() {
	// auc is a rank statistic, so a strictly monotonic transform of the probabilities leaves it unchanged
	let probabilities = vec![0.9, 0.4, 0.6, 0.2, 0.5, 0.1];
	let labels = vec![1, 0, 1, 0, 1, 0];
	let squashed: Vec<f32> = probabilities.iter().map(|p| p * p).collect();
	let auc = auc_roc(&probabilities, &labels).unwrap();
	let auc_squashed = auc_roc(&squashed, &labels).unwrap();
	assert!(f32::abs(auc - auc_squashed) < f32::EPSILON);
}

#[test]
fn test_auc_uncorrelated_labels() {
	// alternating labels over a strictly decreasing ranking: the exact statistic is 0.4995 at this sample size
	let n = 2000usize;
	let probabilities: Vec<f32> = (0..n).map(|i| 1.0 - i as f32 / n as f32).collect();
	let labels: Vec<usize> = (0..n).map(|i| i % 2).collect();
	let auc = auc_roc(&probabilities, &labels).unwrap();
	assert!(f32::abs(auc - 0.5) < 0.01);
}

#[test]
fn test_auc_degenerate_labels() {
	let probabilities = vec![0.9, 0.8, 0.7];
	let labels = vec![1, 1, 1];
	assert_eq!(
		auc_roc(&probabilities, &labels),
		Err(MetricsError::DegenerateLabelSet)
	);
}

#[test]
fn test_roc_curve() {
	let probabilities = vec![0.9, 0.4, 0.4, 0.2];
	let labels = vec![1, 1, 0, 0];
	let left = roc_curve(&probabilities, &labels).unwrap();
	let right = vec![
		RocCurvePoint {
			threshold: 1.1,
			true_positive_rate: 0.0,
			false_positive_rate: 0.0,
		},
		RocCurvePoint {
			threshold: 0.9,
			true_positive_rate: 0.5,
			false_positive_rate: 0.0,
		},
		RocCurvePoint {
			threshold: 0.4,
			true_positive_rate: 1.0,
			false_positive_rate: 0.5,
		},
		RocCurvePoint {
			threshold: 0.2,
			true_positive_rate: 1.0,
			false_positive_rate: 1.0,
		},
	];
	assert_eq!(left, right);
}

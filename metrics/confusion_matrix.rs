use num_traits::ToPrimitive;

/// The 2x2 cross tabulation of predicted labels against true labels.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct BinaryConfusionMatrix {
	pub true_positives: u64,
	pub false_positives: u64,
	pub true_negatives: u64,
	pub false_negatives: u64,
}

impl BinaryConfusionMatrix {
	/// Count each (prediction, label) pair. Any nonzero value counts as the positive class.
	pub fn from_labels(predictions: &[usize], labels: &[usize]) -> Self {
		let mut matrix = Self {
			true_positives: 0,
			false_positives: 0,
			true_negatives: 0,
			false_negatives: 0,
		};
		for (prediction, label) in predictions.iter().zip(labels.iter()) {
			match (*prediction == 1, *label == 1) {
				(true, true) => matrix.true_positives += 1,
				(true, false) => matrix.false_positives += 1,
				(false, false) => matrix.true_negatives += 1,
				(false, true) => matrix.false_negatives += 1,
			}
		}
		matrix
	}

	pub fn n_examples(&self) -> u64 {
		self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
	}

	/// The fraction of predictions that are correct.
	pub fn accuracy(&self) -> Option<f32> {
		ratio(self.true_positives + self.true_negatives, self.n_examples())
	}

	/// The fraction of positive calls that are actually positive.
	pub fn precision(&self) -> Option<f32> {
		ratio(self.true_positives, self.true_positives + self.false_positives)
	}

	/// The true positive rate, also called recall.
	pub fn sensitivity(&self) -> Option<f32> {
		ratio(self.true_positives, self.true_positives + self.false_negatives)
	}

	/// The true negative rate.
	pub fn specificity(&self) -> Option<f32> {
		ratio(self.true_negatives, self.false_positives + self.true_negatives)
	}

	/// The harmonic mean of precision and sensitivity, in the 2tp form.
	pub fn f1_score(&self) -> Option<f32> {
		ratio(
			2 * self.true_positives,
			2 * self.true_positives + self.false_positives + self.false_negatives,
		)
	}
}

// a ratio with a zero denominator is undefined, not zero
fn ratio(numerator: u64, denominator: u64) -> Option<f32> {
	if denominator == 0 {
		None
	} else {
		Some(numerator.to_f32().unwrap() / denominator.to_f32().unwrap())
	}
}

#[test]
fn test_from_labels() {
	let predictions = vec![1, 0, 1, 0];
	let labels = vec![1, 1, 0, 0];
	let matrix = BinaryConfusionMatrix::from_labels(&predictions, &labels);
	insta::assert_debug_snapshot!(matrix, @r###"
 BinaryConfusionMatrix {
     true_positives: 1,
     false_positives: 1,
     true_negatives: 1,
     false_negatives: 1,
 }
 "###);
	assert_eq!(matrix.n_examples(), 4);
	assert_eq!(matrix.accuracy(), Some(0.5));
	assert_eq!(matrix.precision(), Some(0.5));
	assert_eq!(matrix.sensitivity(), Some(0.5));
	assert_eq!(matrix.specificity(), Some(0.5));
	assert_eq!(matrix.f1_score(), Some(0.5));
}

#[test]
fn test_counts_sum_to_n() {
	let predictions = vec![1, 1, 0, 0, 1, 0, 1];
	let labels = vec![0, 1, 1, 0, 1, 0, 0];
	let matrix = BinaryConfusionMatrix::from_labels(&predictions, &labels);
	assert_eq!(matrix.n_examples(), predictions.len() as u64);
}

#[test]
fn test_zero_denominators_are_undefined() {
	// no positive calls, so precision has a zero denominator
	let matrix = BinaryConfusionMatrix::from_labels(&[0, 0, 0], &[1, 1, 0]);
	assert_eq!(matrix.precision(), None);
	assert_eq!(matrix.sensitivity(), Some(0.0));
	// no negative labels, so specificity has a zero denominator
	let matrix = BinaryConfusionMatrix::from_labels(&[1, 1], &[1, 1]);
	assert_eq!(matrix.specificity(), None);
}

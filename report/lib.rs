/*!
This crate is the presentation layer for [`verdict_metrics`]: it renders the confusion matrix heatmap, the ROC and precision-recall curves, and one line chart per swept metric as png files, and formats the scalar report as text.

Rendering is behind the default `plots` feature so the metrics stack can be built without font and image dependencies on headless machines.
*/

use anyhow::Result;
use std::path::Path;

#[cfg(feature = "plots")]
mod chart;
#[cfg(feature = "plots")]
mod confusion_matrix;
#[cfg(feature = "plots")]
mod precision_recall_curve;
#[cfg(feature = "plots")]
mod roc_curve;
mod text_report;
#[cfg(feature = "plots")]
mod threshold_curves;

#[cfg(feature = "plots")]
pub use self::confusion_matrix::plot_confusion_matrix;
#[cfg(feature = "plots")]
pub use self::precision_recall_curve::plot_precision_recall_curve;
#[cfg(feature = "plots")]
pub use self::roc_curve::plot_roc_curve;
pub use self::text_report::TextReport;
#[cfg(feature = "plots")]
pub use self::threshold_curves::plot_threshold_curves;

/// Renders all the available validation plots into `output_dir`.
///
/// `class_names` are the display names for the negative and positive class, in that order, used by the confusion matrix axes.
#[cfg(feature = "plots")]
pub fn render_validation_plots(
	predictions: &[usize],
	probabilities: &[f32],
	labels: &[usize],
	class_names: [&str; 2],
	output_dir: &Path,
) -> Result<()> {
	plot_confusion_matrix(predictions, labels, class_names, output_dir)?;
	plot_roc_curve(probabilities, labels, output_dir)?;
	plot_precision_recall_curve(probabilities, labels, output_dir)?;
	plot_threshold_curves(probabilities, labels, output_dir)?;
	Ok(())
}

#[cfg(not(feature = "plots"))]
pub fn render_validation_plots(
	_predictions: &[usize],
	_probabilities: &[f32],
	_labels: &[usize],
	_class_names: [&str; 2],
	_output_dir: &Path,
) -> Result<()> {
	Err(anyhow::format_err!("the plots feature is not enabled"))
}

#[cfg(feature = "plots")]
#[test]
fn test_render_validation_plots() {
	let dir = tempfile::tempdir().unwrap();
	let predictions = vec![1, 0, 1, 0];
	let probabilities = vec![0.9, 0.6, 0.4, 0.1];
	let labels = vec![1, 1, 0, 0];
	render_validation_plots(
		&predictions,
		&probabilities,
		&labels,
		["negative", "positive"],
		dir.path(),
	)
	.unwrap();
	assert!(dir.path().join("confusion_matrix.png").exists());
	assert!(dir.path().join("roc_curve.png").exists());
	assert!(dir.path().join("precision_recall_curve.png").exists());
	assert!(dir.path().join("Accuracy.png").exists());
	assert!(dir.path().join("Percentage of Samples.png").exists());
}

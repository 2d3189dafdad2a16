use crate::chart::{draw_line_chart, LineChart};
use anyhow::{format_err, Result};
use std::path::Path;

/// Plots the receiver operating characteristic curve, with the area under it in the legend.
pub fn plot_roc_curve(probabilities: &[f32], labels: &[usize], output_dir: &Path) -> Result<()> {
	let curve = verdict_metrics::roc_curve(probabilities, labels)?;
	let auc = verdict_metrics::auc_roc(probabilities, labels)?;
	let points: Vec<(f32, f32)> = curve
		.iter()
		.map(|point| (point.false_positive_rate, point.true_positive_rate))
		.collect();
	let path = output_dir.join("roc_curve.png");
	let legend = format!("AUC = {:.4}", auc);
	draw_line_chart(LineChart {
		path: &path,
		caption: "ROC Curve",
		x_desc: "False Positive Rate",
		y_desc: "True Positive Rate",
		points: &points,
		legend: &legend,
	})
	.map_err(|error| format_err!("failed to render {}: {}", path.display(), error))
}

use crate::chart::{draw_line_chart, LineChart};
use anyhow::{format_err, Result};
use std::path::Path;
use verdict_metrics::{Metric, ThresholdSweep, ThresholdSweepInput};

/// Plots one chart per swept metric: the metric's value across the 99 decision thresholds, with the value at threshold 0.5 in the legend.
pub fn plot_threshold_curves(
	probabilities: &[f32],
	labels: &[usize],
	output_dir: &Path,
) -> Result<()> {
	let sweep = ThresholdSweep::compute(ThresholdSweepInput {
		probabilities,
		labels,
	})?;
	for series in sweep.series.iter() {
		let points: Vec<(f32, f32)> = series
			.points
			.iter()
			.map(|point| (point.threshold, point.value))
			.collect();
		let path = output_dir.join(format!("{}.png", series.metric.name()));
		let legend = format!("{} at 0.5 = {:.4}", series.metric.name(), series.value_at_half);
		draw_line_chart(LineChart {
			path: &path,
			caption: series.metric.name(),
			x_desc: "Probability Threshold",
			y_desc: series.metric.name(),
			points: &points,
			legend: &legend,
		})
		.map_err(|error| format_err!("failed to render {}: {}", path.display(), error))?;
	}
	Ok(())
}

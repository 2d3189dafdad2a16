use plotters::prelude::*;
use std::path::Path;

pub(crate) const CHART_WIDTH: u32 = 640;
pub(crate) const CHART_HEIGHT: u32 = 480;
pub(crate) const CHART_MARGIN: u32 = 20;
pub(crate) const LABEL_AREA_SIZE: u32 = 45;
pub(crate) const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);

pub(crate) struct LineChart<'a> {
	pub path: &'a Path,
	pub caption: &'a str,
	pub x_desc: &'a str,
	pub y_desc: &'a str,
	pub points: &'a [(f32, f32)],
	pub legend: &'a str,
}

/// Draws a single data series to a png with its legend in the corner. All the line charts in this crate plot values in the unit square.
pub(crate) fn draw_line_chart(options: LineChart) -> Result<(), Box<dyn std::error::Error>> {
	let root = BitMapBackend::new(options.path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
	root.fill(&WHITE)?;
	let mut chart = ChartBuilder::on(&root)
		.margin(CHART_MARGIN)
		.caption(options.caption, CAPTION_FONT)
		.x_label_area_size(LABEL_AREA_SIZE)
		.y_label_area_size(LABEL_AREA_SIZE)
		.build_cartesian_2d(0.0f32..1.0f32, 0.0f32..1.0f32)?;
	chart
		.configure_mesh()
		.x_desc(options.x_desc)
		.y_desc(options.y_desc)
		.draw()?;
	chart
		.draw_series(LineSeries::new(options.points.iter().copied(), &BLUE))?
		.label(options.legend)
		.legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));
	chart
		.configure_series_labels()
		.background_style(&WHITE.mix(0.8))
		.border_style(&BLACK)
		.draw()?;
	root.present()?;
	Ok(())
}

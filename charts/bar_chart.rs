use crate::{
	common::{
		compute_grid_line_interval, compute_grid_lines, format_tick, normalize_range, px, Rect,
	},
	config::CHART_CONFIG,
	line_chart::chart_box,
};
use html::html;

#[derive(Clone, Default)]
pub struct BarChartOptions {
	pub group_gap: Option<f64>,
	pub series: Vec<BarChartSeries>,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
	pub y_max: Option<f64>,
	pub y_min: Option<f64>,
}

#[derive(Clone, serde::Serialize)]
pub struct BarChartSeries {
	pub color: String,
	pub data: Vec<BarChartPoint>,
	pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarChartPoint {
	pub label: String,
	pub x: f64,
	pub y: Option<f64>,
}

/// The rectangle for every bar with a value, in series order within each group.
pub fn compute_bars(options: &BarChartOptions, chart_box: Rect) -> Vec<(usize, usize, Rect)> {
	let (y_min, y_max) = y_range(options);
	let group_count = options
		.series
		.iter()
		.map(|series| series.data.len())
		.max()
		.unwrap_or(0);
	let series_count = options.series.len();
	if group_count == 0 || series_count == 0 {
		return Vec::new();
	}
	let group_gap = options.group_gap.unwrap_or(CHART_CONFIG.bar_group_gap);
	let group_width =
		(chart_box.w - group_gap * (group_count + 1) as f64) / group_count as f64;
	let bar_width = group_width / series_count as f64;
	let value_to_pixels =
		|value: f64| chart_box.y + chart_box.h - (value - y_min) / (y_max - y_min) * chart_box.h;
	let zero = value_to_pixels(0.0f64.max(y_min).min(y_max));
	let mut bars = Vec::new();
	for (series_index, series) in options.series.iter().enumerate() {
		for (group_index, point) in series.data.iter().enumerate() {
			let y = match point.y {
				Some(y) => y,
				None => continue,
			};
			let top = value_to_pixels(y).min(zero);
			let bottom = value_to_pixels(y).max(zero);
			bars.push((
				series_index,
				group_index,
				Rect {
					x: chart_box.x
						+ group_gap * (group_index + 1) as f64
						+ group_width * group_index as f64
						+ bar_width * series_index as f64,
					y: top,
					w: bar_width,
					h: bottom - top,
				},
			));
		}
	}
	bars
}

fn y_range(options: &BarChartOptions) -> (f64, f64) {
	let values: Vec<f64> = options
		.series
		.iter()
		.flat_map(|series| series.data.iter().filter_map(|point| point.y))
		.collect();
	let y_min = options
		.y_min
		.unwrap_or_else(|| values.iter().cloned().fold(0.0, f64::min));
	let y_max = options
		.y_max
		.unwrap_or_else(|| values.iter().cloned().fold(0.0, f64::max));
	normalize_range(y_min, y_max)
}

pub fn draw_bar_chart(options: &BarChartOptions) -> html::Node {
	let chart_box = chart_box();
	let (y_min, y_max) = y_range(options);
	let y_interval = compute_grid_line_interval(y_min, y_max, CHART_CONFIG.max_grid_lines);
	let value_to_pixels =
		|value: f64| chart_box.y + chart_box.h - (value - y_min) / (y_max - y_min) * chart_box.h;
	let grid_lines = compute_grid_lines(y_min, y_max, y_interval)
		.into_iter()
		.map(|y| {
			html! {
				<g>
					<line
						class="chart-grid-line"
						x1={px(chart_box.x)}
						x2={px(chart_box.x + chart_box.w)}
						y1={px(value_to_pixels(y))}
						y2={px(value_to_pixels(y))}
					/>
					<text
						class="chart-axis-label"
						dominant-baseline="middle"
						text-anchor="end"
						x={px(chart_box.x - CHART_CONFIG.label_padding)}
						y={px(value_to_pixels(y))}
					>
						{format_tick(y, y_interval)}
					</text>
				</g>
			}
		})
		.collect::<Vec<_>>();
	let bars = compute_bars(options, chart_box);
	let x_labels = options
		.series
		.first()
		.map(|series| {
			series
				.data
				.iter()
				.enumerate()
				.map(|(group_index, point)| {
					let group_center = bars
						.iter()
						.filter(|(_, index, _)| *index == group_index)
						.map(|(_, _, rect)| rect.x + rect.w / 2.0)
						.fold((0.0, 0), |(sum, count), x| (sum + x, count + 1));
					let x = if group_center.1 > 0 {
						group_center.0 / group_center.1 as f64
					} else {
						chart_box.x
					};
					html! {
						<text
							class="chart-axis-label"
							text-anchor="middle"
							x={px(x)}
							y={px(chart_box.y + chart_box.h + CHART_CONFIG.label_padding + CHART_CONFIG.font_size)}
						>
							{point.label.clone()}
						</text>
					}
				})
				.collect::<Vec<_>>()
		})
		.unwrap_or_default();
	let rects = bars
		.iter()
		.map(|(series_index, group_index, rect)| {
			let series = &options.series[*series_index];
			let point = &series.data[*group_index];
			let value = point.y.unwrap_or(0.0);
			html! {
				<rect
					class="chart-bar"
					fill={series.color.clone()}
					height={px(rect.h)}
					width={px(rect.w)}
					x={px(rect.x)}
					y={px(rect.y)}
				>
					<title>{format!("{}: {}", point.label, value)}</title>
				</rect>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<svg
			class="chart"
			preserveAspectRatio="xMidYMid meet"
			role="img"
			viewBox={format!("0 0 {} {}", CHART_CONFIG.width, CHART_CONFIG.height)}
			xmlns="http://www.w3.org/2000/svg"
		>
			{grid_lines}
			{rects}
			{x_labels}
			{options.y_axis_title.clone().map(|title| html! {
				<text
					class="chart-axis-title"
					text-anchor="middle"
					transform={format!(
						"translate({} {}) rotate(-90)",
						px(CHART_CONFIG.font_size + CHART_CONFIG.axis_title_padding),
						px(chart_box.y + chart_box.h / 2.0),
					)}
				>
					{title}
				</text>
			})}
			{options.x_axis_title.clone().map(|title| html! {
				<text
					class="chart-axis-title"
					text-anchor="middle"
					x={px(chart_box.x + chart_box.w / 2.0)}
					y={px(CHART_CONFIG.height - CHART_CONFIG.axis_title_padding)}
				>
					{title}
				</text>
			})}
		</svg>
	}
}

#[cfg(test)]
fn test_series(values: &[f64]) -> BarChartSeries {
	BarChartSeries {
		color: "#22d3ee".to_owned(),
		data: values
			.iter()
			.enumerate()
			.map(|(i, value)| BarChartPoint {
				label: format!("{}", 2014 + 2 * i),
				x: i as f64,
				y: Some(*value),
			})
			.collect(),
		title: None,
	}
}

#[test]
fn test_compute_bars() {
	let chart_box = Rect {
		x: 0.0,
		y: 0.0,
		w: 100.0,
		h: 100.0,
	};
	let options = BarChartOptions {
		group_gap: Some(10.0),
		series: vec![test_series(&[50.0, 100.0])],
		..Default::default()
	};
	let bars = compute_bars(&options, chart_box);
	assert_eq!(
		bars,
		vec![
			(
				0,
				0,
				Rect {
					x: 10.0,
					y: 50.0,
					w: 35.0,
					h: 50.0
				}
			),
			(
				0,
				1,
				Rect {
					x: 55.0,
					y: 0.0,
					w: 35.0,
					h: 100.0
				}
			),
		]
	);
}

#[test]
fn test_draw_bar_chart() {
	let options = BarChartOptions {
		series: vec![test_series(&[715.0, 1284.0, 95.0])],
		y_axis_title: Some("Discoveries".to_owned()),
		..Default::default()
	};
	let svg = draw_bar_chart(&options).render_to_string();
	assert_eq!(svg.matches("<rect").count(), 3);
	assert!(svg.contains("<title>2016: 1284</title>"));
	assert!(svg.contains(">2018</text>"));
	assert!(svg.contains(">1000</text>"));
	assert!(svg.contains(">Discoveries</text>"));
}

use crate::{
	common::{
		compute_grid_line_interval, compute_grid_lines, format_tick, normalize_range,
		point_to_pixels, px, Point, PointToPixelsOptions, Rect,
	},
	config::CHART_CONFIG,
};
use html::html;
use itertools::Itertools;

#[derive(Clone, Default)]
pub struct LineChartOptions {
	pub series: Vec<LineChartSeries>,
	pub x_axis_title: Option<String>,
	pub x_max: Option<f64>,
	pub x_min: Option<f64>,
	pub y_axis_title: Option<String>,
	pub y_max: Option<f64>,
	pub y_min: Option<f64>,
}

#[derive(Clone, serde::Serialize)]
pub struct LineChartSeries {
	pub color: String,
	pub data: Vec<LineChartPoint>,
	pub line_style: Option<LineStyle>,
	pub point_style: Option<PointStyle>,
	pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LineChartPoint {
	pub x: f64,
	pub y: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, serde::Serialize)]
pub enum LineStyle {
	#[serde(rename = "hidden")]
	Hidden,
	#[serde(rename = "solid")]
	Solid,
	#[serde(rename = "dashed")]
	Dashed,
}

#[derive(Clone, Copy, PartialEq, serde::Serialize)]
pub enum PointStyle {
	#[serde(rename = "hidden")]
	Hidden,
	#[serde(rename = "circle")]
	Circle,
}

pub(crate) fn chart_box() -> Rect {
	Rect {
		x: CHART_CONFIG.left_padding,
		y: CHART_CONFIG.top_padding,
		w: CHART_CONFIG.width - CHART_CONFIG.left_padding - CHART_CONFIG.right_padding,
		h: CHART_CONFIG.height - CHART_CONFIG.top_padding - CHART_CONFIG.bottom_padding,
	}
}

fn bounds(
	options: &LineChartOptions,
	option_min: Option<f64>,
	option_max: Option<f64>,
	f: impl Fn(&LineChartPoint) -> Option<f64>,
) -> (f64, f64) {
	let values: Vec<f64> = options
		.series
		.iter()
		.flat_map(|series| series.data.iter())
		.filter_map(f)
		.collect();
	let min = option_min.unwrap_or_else(|| values.iter().cloned().fold(f64::INFINITY, f64::min));
	let max = option_max.unwrap_or_else(|| values.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
	if !min.is_finite() || !max.is_finite() {
		return (0.0, 1.0);
	}
	normalize_range(min, max)
}

/// Build the svg path for a series. A missing value breaks the line.
pub fn line_path(points: &[Option<Point>]) -> String {
	let mut path = String::new();
	let mut pen_down = false;
	for point in points {
		match point {
			Some(point) => {
				let command = if pen_down { 'L' } else { 'M' };
				if !path.is_empty() {
					path.push(' ');
				}
				path.push_str(&format!("{}{} {}", command, px(point.x), px(point.y)));
				pen_down = true;
			}
			None => pen_down = false,
		}
	}
	path
}

pub fn draw_line_chart(options: &LineChartOptions) -> html::Node {
	let chart_box = chart_box();
	let (x_min, x_max) = bounds(options, options.x_min, options.x_max, |point| Some(point.x));
	let (y_min, y_max) = bounds(options, options.y_min, options.y_max, |point| point.y);
	let to_pixels = |point: Point| {
		point_to_pixels(PointToPixelsOptions {
			chart_box,
			point,
			x_max,
			x_min,
			y_max,
			y_min,
		})
	};
	let y_interval = compute_grid_line_interval(y_min, y_max, CHART_CONFIG.max_grid_lines);
	let x_interval = compute_grid_line_interval(x_min, x_max, CHART_CONFIG.max_grid_lines * 2);
	let y_grid_lines = compute_grid_lines(y_min, y_max, y_interval)
		.into_iter()
		.map(|y| {
			let pixels = to_pixels(Point { x: x_min, y });
			html! {
				<g>
					<line
						class="chart-grid-line"
						x1={px(chart_box.x)}
						x2={px(chart_box.x + chart_box.w)}
						y1={px(pixels.y)}
						y2={px(pixels.y)}
					/>
					<text
						class="chart-axis-label"
						dominant-baseline="middle"
						text-anchor="end"
						x={px(chart_box.x - CHART_CONFIG.label_padding)}
						y={px(pixels.y)}
					>
						{format_tick(y, y_interval)}
					</text>
				</g>
			}
		})
		.collect::<Vec<_>>();
	let x_labels = compute_grid_lines(x_min, x_max, x_interval)
		.into_iter()
		.map(|x| {
			let pixels = to_pixels(Point { x, y: y_min });
			html! {
				<text
					class="chart-axis-label"
					text-anchor="middle"
					x={px(pixels.x)}
					y={px(pixels.y + CHART_CONFIG.label_padding + CHART_CONFIG.font_size)}
				>
					{format_tick(x, x_interval)}
				</text>
			}
		})
		.collect::<Vec<_>>();
	let series = options
		.series
		.iter()
		.map(|series| {
			let points = series
				.data
				.iter()
				.map(|point| point.y.map(|y| to_pixels(Point { x: point.x, y })))
				.collect::<Vec<_>>();
			let line_style = series.line_style.unwrap_or(LineStyle::Solid);
			let line = if line_style == LineStyle::Hidden {
				None
			} else {
				let dasharray = if line_style == LineStyle::Dashed {
					Some("6 4")
				} else {
					None
				};
				Some(html! {
					<path
						class="chart-line"
						d={line_path(&points)}
						fill="none"
						stroke={series.color.clone()}
						stroke-dasharray={dasharray}
						stroke-width="2"
					/>
				})
			};
			let circles = if series.point_style == Some(PointStyle::Circle) {
				points
					.iter()
					.flatten()
					.map(|point| html! {
						<circle
							class="chart-point"
							cx={px(point.x)}
							cy={px(point.y)}
							fill={series.color.clone()}
							r={CHART_CONFIG.point_radius.to_string()}
						/>
					})
					.collect::<Vec<_>>()
			} else {
				Vec::new()
			};
			let title = series.title.clone().map(|title| {
				let values = series
					.data
					.iter()
					.filter_map(|point| point.y.map(|y| format!("({}, {:.2})", point.x, y)))
					.join(" ");
				html! { <title>{format!("{}: {}", title, values)}</title> }
			});
			html! {
				<g class="chart-series">
					{title}
					{line}
					{circles}
				</g>
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
			{y_grid_lines}
			{x_labels}
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
			{series}
		</svg>
	}
}

#[test]
fn test_line_path() {
	let points = vec![
		Some(Point { x: 0.0, y: 10.0 }),
		Some(Point { x: 5.0, y: 5.3 }),
		None,
		Some(Point { x: 15.0, y: 0.0 }),
	];
	assert_eq!(line_path(&points), "M0.0 10.0 L5.0 5.3 M15.0 0.0");
	assert_eq!(line_path(&[]), "");
}

#[test]
fn test_draw_line_chart() {
	let options = LineChartOptions {
		series: vec![LineChartSeries {
			color: "#22d3ee".to_owned(),
			data: vec![
				LineChartPoint { x: 0.0, y: Some(0.0) },
				LineChartPoint { x: 1.0, y: Some(1.0) },
			],
			line_style: None,
			point_style: Some(PointStyle::Circle),
			title: Some("ROC".to_owned()),
		}],
		x_axis_title: Some("FPR".to_owned()),
		y_axis_title: Some("TPR".to_owned()),
		..Default::default()
	};
	let svg = draw_line_chart(&options).render_to_string();
	let chart_box = chart_box();
	let expected_path = format!(
		"M{} {} L{} {}",
		px(chart_box.x),
		px(chart_box.y + chart_box.h),
		px(chart_box.x + chart_box.w),
		px(chart_box.y)
	);
	assert!(svg.contains(&format!(r#"d="{}""#, expected_path)));
	assert_eq!(svg.matches("<circle").count(), 2);
	assert!(svg.contains(">FPR</text>"));
	assert!(svg.contains(">0.4</text>"));
	assert!(svg.contains("<title>ROC: (0, 0.00) (1, 1.00)</title>"));
}

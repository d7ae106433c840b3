use crate::{
	common::{px, Point},
	config::CHART_CONFIG,
};
use html::html;
use std::f64::consts::PI;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PieChartSlice {
	pub color: String,
	pub label: String,
	pub value: f64,
}

/// Start and end angles in radians for each slice, clockwise from twelve o'clock. Slices with no value get an empty range.
pub fn compute_slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
	let total: f64 = values.iter().filter(|value| **value > 0.0).sum();
	let mut angle = -PI / 2.0;
	values
		.iter()
		.map(|value| {
			let sweep = if total > 0.0 && *value > 0.0 {
				value / total * 2.0 * PI
			} else {
				0.0
			};
			let start = angle;
			angle += sweep;
			(start, angle)
		})
		.collect()
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
	Point {
		x: center.x + radius * angle.cos(),
		y: center.y + radius * angle.sin(),
	}
}

/// The svg path of a wedge. A full circle is drawn as two half arcs.
pub fn slice_path(center: Point, radius: f64, start: f64, end: f64) -> String {
	let sweep = end - start;
	if sweep >= 2.0 * PI - 1e-9 {
		let top = point_on_circle(center, radius, start);
		let bottom = point_on_circle(center, radius, start + PI);
		return format!(
			"M{} {} A{} {} 0 1 1 {} {} A{} {} 0 1 1 {} {} Z",
			px(top.x),
			px(top.y),
			px(radius),
			px(radius),
			px(bottom.x),
			px(bottom.y),
			px(radius),
			px(radius),
			px(top.x),
			px(top.y),
		);
	}
	let from = point_on_circle(center, radius, start);
	let to = point_on_circle(center, radius, end);
	let large_arc = if sweep > PI { 1 } else { 0 };
	format!(
		"M{} {} L{} {} A{} {} 0 {} 1 {} {} Z",
		px(center.x),
		px(center.y),
		px(from.x),
		px(from.y),
		px(radius),
		px(radius),
		large_arc,
		px(to.x),
		px(to.y),
	)
}

pub fn draw_pie_chart(slices: &[PieChartSlice]) -> html::Node {
	let size = CHART_CONFIG.pie_radius * 2.0 + CHART_CONFIG.top_padding * 2.0;
	let center = Point {
		x: size / 2.0,
		y: size / 2.0,
	};
	let values: Vec<f64> = slices.iter().map(|slice| slice.value).collect();
	let total: f64 = values.iter().filter(|value| **value > 0.0).sum();
	let wedges = slices
		.iter()
		.zip(compute_slice_angles(&values))
		.filter(|(_, (start, end))| end > start)
		.map(|(slice, (start, end))| {
			let percent = slice.value / total * 100.0;
			html! {
				<path
					class="chart-pie-slice"
					d={slice_path(center, CHART_CONFIG.pie_radius, start, end)}
					fill={slice.color.clone()}
				>
					<title>{format!("{}: {} ({:.1}%)", slice.label, slice.value, percent)}</title>
				</path>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<svg
			class="chart chart-pie"
			preserveAspectRatio="xMidYMid meet"
			role="img"
			viewBox={format!("0 0 {} {}", size, size)}
			xmlns="http://www.w3.org/2000/svg"
		>
			{wedges}
		</svg>
	}
}

#[test]
fn test_compute_slice_angles() {
	let angles = compute_slice_angles(&[2.0, 2.0, 1.0, 0.0]);
	let sweeps: Vec<f64> = angles.iter().map(|(start, end)| end - start).collect();
	assert!((sweeps[0] - 0.8 * PI).abs() < 1e-9);
	assert!((sweeps[1] - 0.8 * PI).abs() < 1e-9);
	assert!((sweeps[2] - 0.4 * PI).abs() < 1e-9);
	assert_eq!(sweeps[3], 0.0);
	assert!((angles[0].0 + PI / 2.0).abs() < 1e-9);
	assert!((angles[2].1 - 1.5 * PI).abs() < 1e-9);
	assert!(compute_slice_angles(&[0.0])
		.iter()
		.all(|(start, end)| start == end));
}

#[test]
fn test_slice_path() {
	let center = Point { x: 100.0, y: 100.0 };
	assert_eq!(
		slice_path(center, 50.0, -PI / 2.0, 0.0),
		"M100.0 100.0 L100.0 50.0 A50.0 50.0 0 0 1 150.0 100.0 Z"
	);
	let full = slice_path(center, 50.0, -PI / 2.0, 1.5 * PI);
	assert!(full.starts_with("M100.0 50.0 A50.0 50.0 0 1 1 100.0 150.0"));
}

#[test]
fn test_draw_pie_chart() {
	let slices = vec![
		PieChartSlice {
			color: "#10b981".to_owned(),
			label: "CONFIRMED".to_owned(),
			value: 2.0,
		},
		PieChartSlice {
			color: "#f43f5e".to_owned(),
			label: "FALSE POSITIVE".to_owned(),
			value: 1.0,
		},
	];
	let svg = draw_pie_chart(&slices).render_to_string();
	assert_eq!(svg.matches("<path").count(), 2);
	assert!(svg.contains("<title>FALSE POSITIVE: 1 (33.3%)</title>"));
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
	pub h: f64,
	pub w: f64,
	pub x: f64,
	pub y: f64,
}

// The interval is k * 10 ** p. k will always be 1, 2, or 5.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GridLineInterval {
	pub k: u8,
	pub p: i32,
}

impl GridLineInterval {
	pub fn value(&self) -> f64 {
		f64::from(self.k) * 10f64.powi(self.p)
	}

	/// The number of decimals needed to print values on this interval.
	pub fn decimals(&self) -> usize {
		if self.p < 0 {
			(-self.p) as usize
		} else {
			0
		}
	}
}

/// The smallest 1, 2, 5 interval that splits the range into at most `max_count` parts.
pub fn compute_grid_line_interval(min: f64, max: f64, max_count: usize) -> GridLineInterval {
	let range = max - min;
	if !range.is_finite() || range <= 0.0 || max_count == 0 {
		return GridLineInterval { k: 1, p: 0 };
	}
	let ideal = range / max_count as f64;
	let p = ideal.log10().floor() as i32;
	let base = 10f64.powi(p);
	for k in [1u8, 2, 5].iter() {
		if f64::from(*k) * base >= ideal * (1.0 - 1e-9) {
			return GridLineInterval { k: *k, p };
		}
	}
	GridLineInterval { k: 1, p: p + 1 }
}

/// The multiples of the interval within [min, max].
pub fn compute_grid_lines(min: f64, max: f64, interval: GridLineInterval) -> Vec<f64> {
	let step = interval.value();
	let start = (min / step - 1e-9).ceil() as i64;
	let end = (max / step + 1e-9).floor() as i64;
	(start..=end).map(|i| i as f64 * step).collect()
}

pub struct PointToPixelsOptions {
	pub chart_box: Rect,
	pub point: Point,
	pub x_max: f64,
	pub x_min: f64,
	pub y_max: f64,
	pub y_min: f64,
}

pub fn point_to_pixels(options: PointToPixelsOptions) -> Point {
	let PointToPixelsOptions {
		chart_box,
		point,
		x_max,
		x_min,
		y_max,
		y_min,
	} = options;
	Point {
		x: chart_box.x + (point.x - x_min) / (x_max - x_min) * chart_box.w,
		y: chart_box.y + chart_box.h - (point.y - y_min) / (y_max - y_min) * chart_box.h,
	}
}

/// Expand an empty range so that scaling does not divide by zero.
pub fn normalize_range(min: f64, max: f64) -> (f64, f64) {
	if (max - min).abs() < std::f64::EPSILON {
		(min, min + 1.0)
	} else {
		(min, max)
	}
}

/// Format a pixel coordinate for an svg attribute.
pub fn px(value: f64) -> String {
	format!("{:.1}", value)
}

pub fn format_tick(value: f64, interval: GridLineInterval) -> String {
	format!("{:.*}", interval.decimals(), value)
}

#[test]
fn test_compute_grid_line_interval() {
	assert_eq!(
		compute_grid_line_interval(0.0, 1.0, 5),
		GridLineInterval { k: 2, p: -1 }
	);
	assert_eq!(
		compute_grid_line_interval(0.0, 1284.0, 5),
		GridLineInterval { k: 5, p: 2 }
	);
	assert_eq!(
		compute_grid_line_interval(1.0, 10.0, 5),
		GridLineInterval { k: 2, p: 0 }
	);
	assert_eq!(
		compute_grid_line_interval(0.0, 9.0, 1),
		GridLineInterval { k: 1, p: 1 }
	);
}

#[test]
fn test_compute_grid_lines() {
	let interval = GridLineInterval { k: 2, p: -1 };
	let ticks: Vec<String> = compute_grid_lines(0.0, 1.0, interval)
		.into_iter()
		.map(|value| format_tick(value, interval))
		.collect();
	assert_eq!(ticks, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
	let interval = GridLineInterval { k: 2, p: 0 };
	assert_eq!(
		compute_grid_lines(1.0, 10.0, interval),
		vec![2.0, 4.0, 6.0, 8.0, 10.0]
	);
}

#[test]
fn test_point_to_pixels() {
	let chart_box = Rect {
		x: 10.0,
		y: 20.0,
		w: 100.0,
		h: 50.0,
	};
	let point = point_to_pixels(PointToPixelsOptions {
		chart_box,
		point: Point { x: 0.5, y: 0.0 },
		x_max: 1.0,
		x_min: 0.0,
		y_max: 1.0,
		y_min: 0.0,
	});
	assert_eq!(point, Point { x: 60.0, y: 70.0 });
}

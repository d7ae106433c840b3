pub struct ChartConfig {
	pub width: f64,
	pub height: f64,
	pub top_padding: f64,
	pub right_padding: f64,
	pub bottom_padding: f64,
	pub left_padding: f64,
	pub axis_title_padding: f64,
	pub label_padding: f64,
	pub font_size: f64,
	pub max_grid_lines: usize,
	pub point_radius: f64,
	pub bar_group_gap: f64,
	pub pie_radius: f64,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
	width: 640.0,
	height: 320.0,
	top_padding: 16.0,
	right_padding: 16.0,
	bottom_padding: 40.0,
	left_padding: 56.0,
	axis_title_padding: 4.0,
	label_padding: 8.0,
	font_size: 12.0,
	max_grid_lines: 5,
	point_radius: 3.0,
	bar_group_gap: 8.0,
	pie_radius: 120.0,
};

/// Series colors, assigned in order.
pub const CHART_COLORS: [&str; 6] = [
	"#22d3ee", "#a855f7", "#f43f5e", "#10b981", "#f59e0b", "#6366f1",
];

use crate::{
	bar_chart::{draw_bar_chart, BarChartOptions, BarChartSeries},
	line_chart::{draw_line_chart, LineChartOptions, LineChartSeries},
	pie_chart::{draw_pie_chart, PieChartSlice},
};
use html::{component, html, style};

#[component]
pub fn LineChart(
	hide_legend: Option<bool>,
	series: Vec<LineChartSeries>,
	title: Option<String>,
	x_axis_title: Option<String>,
	x_max: Option<f64>,
	x_min: Option<f64>,
	y_axis_title: Option<String>,
	y_max: Option<f64>,
	y_min: Option<f64>,
) {
	let legend_items: Vec<LegendItem> = series
		.iter()
		.filter_map(|series| {
			series.title.as_ref().map(|title| LegendItem {
				color: series.color.clone(),
				title: title.clone(),
			})
		})
		.collect();
	let options = LineChartOptions {
		series,
		x_axis_title,
		x_max,
		x_min,
		y_axis_title,
		y_max,
		y_min,
	};
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			{if !hide_legend.unwrap_or(false) {
				Some(html! { <ChartLegend items={legend_items} /> })
			} else {
				None
			}}
			<div class="chart-container" data-chart-type="line">
				{draw_line_chart(&options)}
			</div>
		</div>
	}
}

#[component]
pub fn BarChart(
	hide_legend: Option<bool>,
	series: Vec<BarChartSeries>,
	title: Option<String>,
	x_axis_title: Option<String>,
	y_axis_title: Option<String>,
) {
	let legend_items: Vec<LegendItem> = series
		.iter()
		.filter_map(|series| {
			series.title.as_ref().map(|title| LegendItem {
				color: series.color.clone(),
				title: title.clone(),
			})
		})
		.collect();
	let options = BarChartOptions {
		series,
		x_axis_title,
		y_axis_title,
		..Default::default()
	};
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			{if !hide_legend.unwrap_or(false) {
				Some(html! { <ChartLegend items={legend_items} /> })
			} else {
				None
			}}
			<div class="chart-container" data-chart-type="bar">
				{draw_bar_chart(&options)}
			</div>
		</div>
	}
}

/// A pie chart whose legend lists each slice's label.
#[component]
pub fn PieChart(slices: Vec<PieChartSlice>, title: Option<String>) {
	let legend_items: Vec<LegendItem> = slices
		.iter()
		.map(|slice| LegendItem {
			color: slice.color.clone(),
			title: slice.label.clone(),
		})
		.collect();
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			<div class="chart-pie-layout">
				<div class="chart-container chart-container-pie" data-chart-type="pie">
					{draw_pie_chart(&slices)}
				</div>
				<ChartLegend items={legend_items} />
			</div>
		</div>
	}
}

#[component]
pub fn ChartTitle() {
	html! {
		<div class="chart-title">{children}</div>
	}
}

pub struct LegendItem {
	pub color: String,
	pub title: String,
}

#[component]
pub fn ChartLegend(items: Vec<LegendItem>) {
	html! {
		<div class="chart-legend-wrapper">
			{items.into_iter().map(|item| html! {
				<ChartLegendItem
					color={item.color}
					title={item.title}
				/>
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[component]
fn ChartLegendItem(color: String, title: String) {
	let style = style! {
		"background-color" => color,
	};
	html! {
		<div class="chart-legend-item">
			<div class="chart-legend-indicator" style={style}></div>
			<div class="chart-legend-title">{title}</div>
		</div>
	}
}

#[test]
fn test_pie_chart_legend() {
	let slices = vec![PieChartSlice {
		color: "#10b981".to_owned(),
		label: "CONFIRMED: 2 (40.0%)".to_owned(),
		value: 2.0,
	}];
	let html = html!(<PieChart slices={slices} title={None} />).render_to_string();
	assert!(html.contains(
		r##"<div class="chart-legend-item"><div class="chart-legend-indicator" style="background-color: #10b981;"></div><div class="chart-legend-title">CONFIRMED: 2 (40.0%)</div></div>"##
	));
}

#[test]
fn test_line_chart_hides_legend() {
	let html = html! {
		<LineChart
			hide_legend={Some(true)}
			series={Vec::new()}
			title={Some("ROC Curve".to_owned())}
			x_axis_title={None}
			x_max={None}
			x_min={None}
			y_axis_title={None}
			y_max={None}
			y_min={None}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"<div class="chart-title">ROC Curve</div>"#));
	assert!(!html.contains("chart-legend-wrapper"));
}

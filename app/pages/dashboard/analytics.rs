use super::{dashboard_response, model_options};
use crate::{common::error::bad_request, layouts::DashboardLayout, Context};
use anyhow::Result;
use exo_charts::{
	line_chart::{LineChartPoint, LineChartSeries, LineStyle, PointStyle},
	LineChart, CHART_COLORS,
};
use exo_core::{
	analytics::{percent_label, roc_series, ModelStats, DEFAULT_MODEL},
	model::ModelKey,
};
use exo_ui as ui;
use html::{component, html};
use hyper::{Body, Request, Response};
use std::collections::BTreeMap;

pub async fn get(
	context: &Context,
	request: Request<Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Response<Body>> {
	let model = match search_params.as_ref().and_then(|s| s.get("model")) {
		Some(model) => model.parse::<ModelKey>().map_err(|_| bad_request())?,
		None => DEFAULT_MODEL,
	};
	let session = context.sessions.resolve(&request).await;
	let (user, chat) = context
		.sessions
		.with(session.id, |session| (session.user.clone(), session.chat.clone()))
		.await;
	dashboard_response(
		session,
		html! {
			<DashboardLayout
				active_href="/dashboard/analytics"
				chat={chat}
				refresh={None}
				title="Analytics"
				user={user}
			>
				<AnalyticsPage model={model} />
			</DashboardLayout>
		},
	)
}

#[component]
fn AnalyticsPage(model: ModelKey) {
	let stats = ModelStats::for_model(model);
	let gauges = stats
		.gauges()
		.iter()
		.map(|(label, value)| {
			html!(<ui::Gauge label={(*label).to_owned()} value={*value} color={None} />)
		})
		.collect::<Vec<_>>();
	let roc = vec![
		LineChartSeries {
			color: CHART_COLORS[0].to_owned(),
			data: roc_series(stats.roc_auc)
				.into_iter()
				.map(|point| LineChartPoint {
					x: point.x,
					y: Some(point.y),
				})
				.collect(),
			line_style: Some(LineStyle::Solid),
			point_style: Some(PointStyle::Hidden),
			title: Some(format!("{} (AUC {})", model.title(), percent_label(stats.roc_auc))),
		},
	];
	html! {
		<ui::S1>
			<ui::Overline>"AI EXOPLANET CLASSIFIER"</ui::Overline>
			<ui::H1 center={None}>"Model Analytics"</ui::H1>
			<ui::Form
				action={Some("/dashboard/analytics".to_owned())}
				autocomplete={None}
				enc_type={None}
				post={None}
			>
				<ui::SelectField
					disabled={None}
					label={Some("Model".to_owned())}
					name={Some("model".to_owned())}
					options={model_options()}
					placeholder={None}
					value={Some(model.as_str().to_owned())}
				/>
				<ui::Button
					button_type={ui::ButtonType::Submit}
					color={None}
					disabled={None}
					download={None}
					href={None}
				>
					"Show"
				</ui::Button>
			</ui::Form>
			<ui::Grid columns={3}>{gauges}</ui::Grid>
			<ui::Grid columns={2}>
				<ui::StatCard label="F1 Score" value={percent_label(stats.f1)} />
				<ui::StatCard label="ROC AUC" value={percent_label(stats.roc_auc)} />
			</ui::Grid>
			<ui::Card title={None} accent_color={None}>
				<LineChart
					hide_legend={None}
					series={roc}
					title={Some("ROC Curve".to_owned())}
					x_axis_title={Some("FPR".to_owned())}
					x_max={Some(1.0)}
					x_min={Some(0.0)}
					y_axis_title={Some("TPR".to_owned())}
					y_max={Some(1.0)}
					y_min={Some(0.0)}
				/>
			</ui::Card>
			<ModelComparison selected={model} />
		</ui::S1>
	}
}

#[component]
fn ModelComparison(selected: ModelKey) {
	let rows = ModelKey::ALL
		.iter()
		.map(|model| {
			let stats = ModelStats::for_model(*model);
			let title = if *model == selected {
				format!("{} (selected)", model.title())
			} else {
				model.title().to_owned()
			};
			let cells = [
				stats.accuracy,
				stats.precision,
				stats.recall,
				stats.f1,
				stats.roc_auc,
			]
			.iter()
			.map(|value| {
				html! {
					<ui::TableCell text_align={Some(ui::TextAlign::Right)}>
						{percent_label(*value)}
					</ui::TableCell>
				}
			})
			.collect::<Vec<_>>();
			html! {
				<ui::TableRow>
					<ui::TableCell text_align={None}>{title}</ui::TableCell>
					{cells}
				</ui::TableRow>
			}
		})
		.collect::<Vec<_>>();
	let headers = ["Accuracy", "Precision", "Recall", "F1", "ROC AUC"]
		.iter()
		.map(|header| {
			html! {
				<ui::TableHeaderCell text_align={Some(ui::TextAlign::Right)}>
					{*header}
				</ui::TableHeaderCell>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ui::Card title={Some("Model Comparison".to_owned())} accent_color={None}>
			<ui::Table>
				<ui::TableHeader>
					<ui::TableRow>
						<ui::TableHeaderCell text_align={None}>"Model"</ui::TableHeaderCell>
						{headers}
					</ui::TableRow>
				</ui::TableHeader>
				<ui::TableBody>{rows}</ui::TableBody>
			</ui::Table>
		</ui::Card>
	}
}

#[test]
fn test_analytics_page() {
	let html = html!(<AnalyticsPage model={ModelKey::Tess} />).render_to_string();
	assert!(html.contains(r#"<div class="gauge-text">89.0%</div>"#));
	assert!(html.contains("TESS (AUC 90.0%)"));
	assert!(html.contains("TESS (selected)"));
	assert!(html.contains(r#"<option selected value="tess">"#));
}

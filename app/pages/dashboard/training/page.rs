use crate::{
	common::session::ChatMessage, layouts::DashboardLayout, pages::dashboard::model_options,
};
use exo_charts::{
	line_chart::{LineChartPoint, LineChartSeries, LineStyle, PointStyle},
	LineChart, CHART_COLORS,
};
use exo_client::User;
use exo_core::{
	simulation::{Selection, TaskState},
	train::{Hyperparameters, TrainingReport},
};
use exo_ui as ui;
use html::{component, html};

#[component]
pub fn TrainingPage(
	chat: Vec<ChatMessage>,
	error: Option<String>,
	hyperparameters: Hyperparameters,
	selection: Selection,
	state: TaskState<TrainingReport>,
	user: Option<User>,
) {
	let loading = state == TaskState::Loading;
	let refresh = if loading { Some(1) } else { None };
	let results = match state {
		TaskState::Idle => html! {
			<div class="dashboard-placeholder">
				"Training metrics will appear here once the run has finished."
			</div>
		},
		TaskState::Loading => html! {
			<ui::Spinner label={Some("Training model...".to_owned())} />
		},
		TaskState::Done(report) => html!(<TrainingResults report={report} />),
	};
	html! {
		<DashboardLayout
			active_href="/dashboard/training"
			chat={chat}
			refresh={refresh}
			title="Model Training"
			user={user}
		>
			<ui::S1>
				<ui::Overline>"AI EXOPLANET CLASSIFIER"</ui::Overline>
				<ui::H1 center={None}>"Model Training"</ui::H1>
				<ui::P>
					"Pick a base model, upload your labeled dataset (.csv) and tune the hyperparameters of the run."
				</ui::P>
				<div class="dashboard-columns">
					<ui::Card title={Some("Training Settings".to_owned())} accent_color={None}>
						<SettingsForm
							error={error}
							hyperparameters={hyperparameters}
							loading={loading}
							selection={selection}
						/>
					</ui::Card>
					<div class="dashboard-results">{results}</div>
				</div>
			</ui::S1>
		</DashboardLayout>
	}
}

#[component]
fn SettingsForm(
	error: Option<String>,
	hyperparameters: Hyperparameters,
	loading: bool,
	selection: Selection,
) {
	let fields = vec![
		("learning_rate", "Learning Rate", hyperparameters.learning_rate.to_string()),
		("batch_size", "Batch Size", hyperparameters.batch_size.to_string()),
		("epochs", "Epochs", hyperparameters.epochs.to_string()),
		(
			"validation_split",
			"Validation Split (%)",
			hyperparameters.validation_split.to_string(),
		),
	];
	let fields = fields
		.into_iter()
		.map(|(name, label, value)| {
			html! {
				<ui::TextField
					autocomplete={None}
					field_type={Some(ui::TextFieldType::Number)}
					helper={None}
					label={Some(label.to_owned())}
					name={Some(name.to_owned())}
					placeholder={None}
					required={None}
					value={Some(value)}
				/>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ui::Form
			action={Some("/dashboard/training".to_owned())}
			autocomplete={None}
			enc_type={Some(ui::FormEncoding::Multipart)}
			post={Some(true)}
		>
			{error.map(|error| html! {
				<ui::Alert level={ui::Level::Danger} title={None}>{error}</ui::Alert>
			})}
			<ui::SelectField
				disabled={Some(loading)}
				label={Some("Base Model".to_owned())}
				name={Some("model".to_owned())}
				options={model_options()}
				placeholder={Some("Select a model".to_owned())}
				value={selection.model.map(|model| model.as_str().to_owned())}
			/>
			<ui::FileField
				accept={Some(".csv".to_owned())}
				disabled={Some(loading)}
				file_name={selection.file.map(|file| file.file_name)}
				label={Some("Training Dataset".to_owned())}
				name={Some("file".to_owned())}
			/>
			<ui::Grid columns={2}>{fields}</ui::Grid>
			<ui::Button
				button_type={ui::ButtonType::Submit}
				color={None}
				disabled={Some(loading)}
				download={None}
				href={None}
			>
				{if loading { "Training..." } else { "Start Training" }}
			</ui::Button>
		</ui::Form>
	}
}

fn epoch_series(
	epochs: &[u32],
	values: &[f64],
	color: &str,
	line_style: LineStyle,
	title: &str,
) -> LineChartSeries {
	LineChartSeries {
		color: color.to_owned(),
		data: epochs
			.iter()
			.zip(values.iter())
			.map(|(epoch, value)| LineChartPoint {
				x: f64::from(*epoch),
				y: Some(*value),
			})
			.collect(),
		line_style: Some(line_style),
		point_style: Some(PointStyle::Circle),
		title: Some(title.to_owned()),
	}
}

#[component]
fn TrainingResults(report: TrainingReport) {
	let epochs = report.epochs();
	let history = vec![
		epoch_series(&epochs, &report.loss, CHART_COLORS[0], LineStyle::Solid, "Loss"),
		epoch_series(
			&epochs,
			&report.val_loss,
			CHART_COLORS[0],
			LineStyle::Dashed,
			"Validation Loss",
		),
		epoch_series(&epochs, &report.accuracy, CHART_COLORS[1], LineStyle::Solid, "Accuracy"),
		epoch_series(
			&epochs,
			&report.val_accuracy,
			CHART_COLORS[1],
			LineStyle::Dashed,
			"Validation Accuracy",
		),
	];
	let roc = vec![
		LineChartSeries {
			color: CHART_COLORS[2].to_owned(),
			data: report
				.roc_points
				.iter()
				.map(|point| LineChartPoint {
					x: point.false_positive_rate,
					y: Some(point.true_positive_rate),
				})
				.collect(),
			line_style: Some(LineStyle::Solid),
			point_style: Some(PointStyle::Circle),
			title: Some("ROC".to_owned()),
		},
		LineChartSeries {
			color: "var(--muted-color)".to_owned(),
			data: vec![
				LineChartPoint { x: 0.0, y: Some(0.0) },
				LineChartPoint { x: 1.0, y: Some(1.0) },
			],
			line_style: Some(LineStyle::Dashed),
			point_style: Some(PointStyle::Hidden),
			title: Some("Random".to_owned()),
		},
	];
	let gauges = report
		.metrics
		.entries()
		.iter()
		.map(|(label, value)| {
			html!(<ui::Gauge label={(*label).to_owned()} value={*value} color={None} />)
		})
		.collect::<Vec<_>>();
	let request = &report.request;
	let summary = format!(
		"{} model on {} with learning rate {}, batch size {}, {} epochs and a {}% validation split.",
		request.model,
		request.file_name,
		request.hyperparameters.learning_rate,
		request.hyperparameters.batch_size,
		request.hyperparameters.epochs,
		request.hyperparameters.validation_split,
	);
	html! {
		<ui::S2>
			<ui::Alert level={ui::Level::Success} title={Some("Training complete".to_owned())}>
				{summary}
			</ui::Alert>
			<ui::Grid columns={3}>{gauges}</ui::Grid>
			<ui::Card title={None} accent_color={None}>
				<LineChart
					hide_legend={None}
					series={history}
					title={Some("Loss and Accuracy".to_owned())}
					x_axis_title={Some("Epoch".to_owned())}
					x_max={None}
					x_min={None}
					y_axis_title={None}
					y_max={Some(1.0)}
					y_min={Some(0.0)}
				/>
			</ui::Card>
			<ui::Card title={None} accent_color={None}>
				<LineChart
					hide_legend={None}
					series={roc}
					title={Some("ROC Curve".to_owned())}
					x_axis_title={Some("False Positive Rate".to_owned())}
					x_max={Some(1.0)}
					x_min={Some(0.0)}
					y_axis_title={Some("True Positive Rate".to_owned())}
					y_max={Some(1.0)}
					y_min={Some(0.0)}
				/>
			</ui::Card>
		</ui::S2>
	}
}

#[test]
fn test_training_results_show_the_submitted_run() {
	use exo_core::{model::ModelKey, train::{simulated_report, TrainingRequest}};
	let mut hyperparameters = Hyperparameters::default();
	hyperparameters.epochs = 25;
	let report = simulated_report(&TrainingRequest {
		model: ModelKey::Tess,
		file_name: "toi.csv".to_owned(),
		hyperparameters,
	});
	let html = html!(<TrainingResults report={report} />).render_to_string();
	assert!(html.contains("TESS model on toi.csv"));
	assert!(html.contains("25 epochs"));
	assert!(html.contains(r#"<div class="gauge-text">92.0%</div>"#));
	assert!(html.contains("Validation Accuracy"));
	assert!(html.contains("ROC Curve"));
}

use crate::{
	common::session::ChatMessage, layouts::DashboardLayout, pages::dashboard::model_options,
};
use exo_charts::{pie_chart::PieChartSlice, PieChart};
use exo_client::User;
use exo_core::{
	batch::{BatchReport, CSV_FILE_NAME},
	simulation::{Selection, TaskState},
};
use exo_ui as ui;
use html::{component, html};

const SLICE_COLORS: [&str; 4] = ["#ffffff", "#5a88d3ff", "#22d3ee", "#6b7280"];

#[component]
pub fn BatchPage(
	chat: Vec<ChatMessage>,
	error: Option<String>,
	selection: Selection,
	state: TaskState<BatchReport>,
	user: Option<User>,
) {
	let loading = state == TaskState::Loading;
	let refresh = if loading { Some(1) } else { None };
	let results = match state {
		TaskState::Idle => html! {
			<div class="dashboard-placeholder">
				"Results will appear here once the prediction has run."
			</div>
		},
		TaskState::Loading => html! {
			<ui::Spinner label={Some("Classifying objects of interest...".to_owned())} />
		},
		TaskState::Done(report) => html!(<BatchResults report={report} />),
	};
	html! {
		<DashboardLayout
			active_href="/dashboard/batch"
			chat={chat}
			refresh={refresh}
			title="Batch Prediction"
			user={user}
		>
			<ui::S1>
				<ui::Overline>"AI EXOPLANET CLASSIFIER"</ui::Overline>
				<ui::H1 center={None}>"Batch Prediction Dashboard"</ui::H1>
				<ui::P>
					"Select a trained model, upload your exoplanet dataset (.csv) and visualize predictions instantly."
				</ui::P>
				<div class="dashboard-columns">
					<ui::Card title={Some("Prediction Settings".to_owned())} accent_color={None}>
						<SettingsForm error={error} loading={loading} selection={selection} />
					</ui::Card>
					<div class="dashboard-results">{results}</div>
				</div>
			</ui::S1>
		</DashboardLayout>
	}
}

#[component]
fn SettingsForm(error: Option<String>, loading: bool, selection: Selection) {
	html! {
		<ui::Form
			action={Some("/dashboard/batch".to_owned())}
			autocomplete={None}
			enc_type={Some(ui::FormEncoding::Multipart)}
			post={Some(true)}
		>
			{error.map(|error| html! {
				<ui::Alert level={ui::Level::Danger} title={None}>{error}</ui::Alert>
			})}
			<ui::SelectField
				disabled={Some(loading)}
				label={Some("Model".to_owned())}
				name={Some("model".to_owned())}
				options={model_options()}
				placeholder={Some("Select a model".to_owned())}
				value={selection.model.map(|model| model.as_str().to_owned())}
			/>
			<ui::FileField
				accept={Some(".csv".to_owned())}
				disabled={Some(loading)}
				file_name={selection.file.map(|file| file.file_name)}
				label={Some("Dataset".to_owned())}
				name={Some("file".to_owned())}
			/>
			<ui::Button
				button_type={ui::ButtonType::Submit}
				color={None}
				disabled={Some(loading)}
				download={None}
				href={None}
			>
				{if loading { "Predicting..." } else { "Run Prediction" }}
			</ui::Button>
		</ui::Form>
	}
}

#[component]
fn BatchResults(report: BatchReport) {
	let slices = report
		.proportions
		.iter()
		.zip(SLICE_COLORS.iter().cycle())
		.map(|(proportion, color)| PieChartSlice {
			color: (*color).to_owned(),
			label: format!(
				"{}: {} ({})",
				proportion.disposition,
				proportion.count,
				proportion.percent_label()
			),
			value: proportion.count as f64,
		})
		.collect();
	let rows = report
		.records
		.iter()
		.take(5)
		.map(|record| {
			html! {
				<ui::TableRow>
					<ui::TableCell text_align={None}>{record.koi_name.clone()}</ui::TableCell>
					<ui::TableCell text_align={None}>{record.prediction.to_string()}</ui::TableCell>
					<ui::TableCell text_align={Some(ui::TextAlign::Right)}>
						{record.probability_label()}
					</ui::TableCell>
				</ui::TableRow>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ui::S2>
			<ui::Card title={None} accent_color={None}>
				<PieChart slices={slices} title={Some("Class Distribution".to_owned())} />
			</ui::Card>
			<ui::Card title={Some("Summary".to_owned())} accent_color={None}>
				<ui::Table>
					<ui::TableHeader>
						<ui::TableRow>
							<ui::TableHeaderCell text_align={None}>"KOI Name"</ui::TableHeaderCell>
							<ui::TableHeaderCell text_align={None}>"Prediction"</ui::TableHeaderCell>
							<ui::TableHeaderCell text_align={Some(ui::TextAlign::Right)}>
								"Probability"
							</ui::TableHeaderCell>
						</ui::TableRow>
					</ui::TableHeader>
					<ui::TableBody>{rows}</ui::TableBody>
				</ui::Table>
			</ui::Card>
			<ui::Button
				button_type={ui::ButtonType::Button}
				color={None}
				disabled={None}
				download={Some(CSV_FILE_NAME.to_owned())}
				href={Some("/dashboard/batch/predictions.csv".to_owned())}
			>
				"Download CSV"
			</ui::Button>
		</ui::S2>
	}
}

#[test]
fn test_batch_results() {
	use exo_core::batch::simulated_records;
	let report = BatchReport::new(simulated_records());
	let html = html!(<BatchResults report={report} />).render_to_string();
	assert!(html.contains("CONFIRMED: 2 (40.0%)"));
	assert!(html.contains("CANDIDATE: 2 (40.0%)"));
	assert!(html.contains("FALSE POSITIVE: 1 (20.0%)"));
	assert!(html.contains("Kepler-452b"));
	assert!(html.contains("32.0%"));
	assert!(html.contains(r#"download="predictions.csv""#));
}

#[test]
fn test_settings_form_disables_inputs_while_loading() {
	let html = html! {
		<SettingsForm error={None} loading={true} selection={Selection::default()} />
	}
	.render_to_string();
	assert!(html.contains(r#"<button class="button" disabled type="submit">Predicting...</button>"#));
	let html = html! {
		<SettingsForm
			error={Some("Upload a CSV file before starting.".to_owned())}
			loading={false}
			selection={Selection::default()}
		/>
	}
	.render_to_string();
	assert!(html.contains("Upload a CSV file before starting."));
	assert!(html.contains(r#"<button class="button" type="submit">Run Prediction</button>"#));
}

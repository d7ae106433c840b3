use crate::layouts::PageLayout;
use exo_client::User;
use exo_core::{
	content::{EXOPLANET_INFO, EXOPLANET_SUMMARY, VISUALIZATION_STATS},
	predict::{Confidence, PredictionInput, PredictionResult, PREDICTION_FIELDS},
};
use exo_ui as ui;
use html::{component, html};

#[component]
pub fn InfoPage(input: PredictionInput, result: PredictionResult, user: Option<User>) {
	html! {
		<PageLayout
			active_href={Some("/info".to_owned())}
			refresh={None}
			title="Explore"
			user={user}
		>
			<section class="section">
				<ui::S1>
					<ui::H1 center={None}>"What Are Exoplanets?"</ui::H1>
					<ui::P>{EXOPLANET_SUMMARY}</ui::P>
					<ui::Grid columns={3}>
						{EXOPLANET_INFO.iter().map(|topic| html! {
							<ui::Card title={Some(topic.title.to_owned())} accent_color={None}>
								<ui::P>{topic.description}</ui::P>
							</ui::Card>
						}).collect::<Vec<_>>()}
					</ui::Grid>
					<ui::Grid columns={4}>
						{VISUALIZATION_STATS.iter().map(|(label, value)| html! {
							<ui::StatCard label={(*label).to_owned()} value={(*value).to_owned()} />
						}).collect::<Vec<_>>()}
					</ui::Grid>
				</ui::S1>
			</section>
			<section class="section">
				<ui::S2>
					<ui::H2 center={None}>"Try a Prediction"</ui::H2>
					<ui::P>
						"Enter the characteristics of a candidate and our model will estimate how likely it is to be an exoplanet."
					</ui::P>
					<div class="prediction-demo">
						<PredictionForm input={input} />
						<PredictionPanel result={result} />
					</div>
				</ui::S2>
			</section>
		</PageLayout>
	}
}

#[component]
fn PredictionForm(input: PredictionInput) {
	let fields = PREDICTION_FIELDS
		.iter()
		.map(|field| {
			html! {
				<ui::TextField
					autocomplete={None}
					field_type={Some(ui::TextFieldType::Number)}
					helper={Some(field.helper.to_owned())}
					label={Some(field.label.to_owned())}
					name={Some(field.name.to_owned())}
					placeholder={Some(field.placeholder.to_owned())}
					required={None}
					value={input.get(field.name).map(|value| value.to_owned())}
				/>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ui::Form action={Some("/info".to_owned())} autocomplete={None} enc_type={None} post={None}>
			{fields}
			<ui::Button
				button_type={ui::ButtonType::Submit}
				color={None}
				disabled={None}
				download={None}
				href={None}
			>
				"Predict"
			</ui::Button>
		</ui::Form>
	}
}

#[component]
fn PredictionPanel(result: PredictionResult) {
	let confidence_color = match result.confidence {
		Confidence::High => "var(--green)",
		Confidence::Medium => "var(--yellow)",
	};
	let rows = vec![
		("Classification", result.classification.to_string()),
		("Planet Type", result.planet_type.to_string()),
		("Zone", result.zone.to_string()),
	];
	html! {
		<ui::Card title={Some("Prediction Result".to_owned())} accent_color={None}>
			<div class="prediction-probability">{format!("{:.1}%", result.probability)}</div>
			<div class="prediction-probability-label">"Exoplanet probability"</div>
			<div class="prediction-details">
				{rows.into_iter().map(|(label, value)| html! {
					<div class="prediction-detail">
						<span class="prediction-detail-label">{label}</span>
						<span class="prediction-detail-value">{value}</span>
					</div>
				}).collect::<Vec<_>>()}
				<div class="prediction-detail">
					<span class="prediction-detail-label">"Confidence"</span>
					<ui::Chip color={Some(confidence_color.to_owned())}>
						{result.confidence.to_string()}
					</ui::Chip>
				</div>
			</div>
		</ui::Card>
	}
}

#[test]
fn test_prediction_panel() {
	let html = html!(<PredictionPanel result={PredictionResult::default()} />).render_to_string();
	assert!(html.contains(r#"<div class="prediction-probability">87.3%</div>"#));
	assert!(html.contains("PROBABLE"));
	assert!(html.contains("Super-Earth"));
	assert!(html.contains("Habitable"));
	assert!(html.contains("High"));
}

#[test]
fn test_prediction_form_keeps_values() {
	let mut input = PredictionInput::default();
	input.set("transit_depth", "0.01");
	let html = html!(<PredictionForm input={input} />).render_to_string();
	assert!(html.contains(r#"name="transit_depth" placeholder="e.g. 0.01" step="any" type="number" value="0.01""#));
	assert!(html.contains(r#"action="/info""#));
	assert!(!html.contains(r#"method="#));
}

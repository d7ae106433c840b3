use crate::layouts::PageLayout;
use exo_charts::{
	bar_chart::{BarChartPoint, BarChartSeries},
	BarChart, CHART_COLORS,
};
use exo_client::User;
use exo_core::content::{
	format_count, CountPoint, ACCOUNT_BENEFITS, CTA_DESCRIPTION, CTA_TITLE, DISCOVERIES_PER_MISSION,
	DISCOVERIES_PER_YEAR, HERO, INTRO, MAIN_STATS, NASA_DATASETS, PREDICTION_STEPS,
};
use exo_ui as ui;
use html::{component, html};

#[component]
pub fn HomePage(user: Option<User>) {
	let logged_in = user.is_some();
	html! {
		<PageLayout
			active_href={Some("/".to_owned())}
			refresh={None}
			title="Home"
			user={user}
		>
			<Hero />
			<Intro />
			<Statistics />
			<HowItWorks />
			<Datasets />
			{if logged_in { None } else { Some(html!(<CallToAction />)) }}
		</PageLayout>
	}
}

#[component]
fn Hero() {
	html! {
		<section class="hero">
			<ui::Chip color={None}>{HERO.badge}</ui::Chip>
			<ui::H1 center={Some(true)}>{HERO.title}</ui::H1>
			<ui::P>{HERO.subtitle}</ui::P>
			<div class="hero-actions">
				<ui::Button
					button_type={ui::ButtonType::Button}
					color={None}
					disabled={None}
					download={None}
					href={Some("/info".to_owned())}
				>
					"Start Exploring"
				</ui::Button>
				<ui::Button
					button_type={ui::ButtonType::Button}
					color={Some("var(--surface-color)".to_owned())}
					disabled={None}
					download={None}
					href={Some("/dashboard".to_owned())}
				>
					"Open Dashboard"
				</ui::Button>
			</div>
		</section>
	}
}

#[component]
fn Intro() {
	html! {
		<section class="section">
			<ui::S1>
				<ui::Overline>{INTRO.overline}</ui::Overline>
				<ui::H2 center={None}>{INTRO.title}</ui::H2>
				{INTRO.paragraphs.iter().map(|paragraph| html! {
					<ui::P>{*paragraph}</ui::P>
				}).collect::<Vec<_>>()}
				<div class="feature-list">
					{INTRO.features.iter().map(|feature| html! {
						<ui::Chip color={None}>{*feature}</ui::Chip>
					}).collect::<Vec<_>>()}
				</div>
			</ui::S1>
		</section>
	}
}

fn count_series(points: &[CountPoint], color: &str, title: &str) -> Vec<BarChartSeries> {
	let data = points
		.iter()
		.enumerate()
		.map(|(i, point)| BarChartPoint {
			label: point.label.to_owned(),
			x: i as f64,
			y: Some(f64::from(point.count)),
		})
		.collect();
	vec![BarChartSeries {
		color: color.to_owned(),
		data,
		title: Some(title.to_owned()),
	}]
}

#[component]
fn Statistics() {
	let per_year = count_series(&DISCOVERIES_PER_YEAR, CHART_COLORS[0], "Discoveries");
	let per_mission = count_series(&DISCOVERIES_PER_MISSION, CHART_COLORS[1], "Exoplanets");
	html! {
		<section class="section">
			<ui::S1>
				<ui::H2 center={Some(true)}>"Exoplanets in Numbers"</ui::H2>
				<ui::Grid columns={3}>
					<ui::StatCard
						label="Confirmed Exoplanets"
						value={format_count(MAIN_STATS.exoplanets)}
					/>
					<ui::StatCard
						label="Predictions Made"
						value={format_count(MAIN_STATS.predictions)}
					/>
					<ui::StatCard
						label="Model Accuracy"
						value={format!("{}%", MAIN_STATS.accuracy)}
					/>
				</ui::Grid>
				<ui::Grid columns={2}>
					<ui::Card title={None} accent_color={None}>
						<BarChart
							hide_legend={Some(true)}
							series={per_year}
							title={Some("Discoveries per Year".to_owned())}
							x_axis_title={Some("Year".to_owned())}
							y_axis_title={Some("Exoplanets".to_owned())}
						/>
					</ui::Card>
					<ui::Card title={None} accent_color={None}>
						<BarChart
							hide_legend={Some(true)}
							series={per_mission}
							title={Some("Discoveries per Mission".to_owned())}
							x_axis_title={Some("Mission".to_owned())}
							y_axis_title={Some("Exoplanets".to_owned())}
						/>
					</ui::Card>
				</ui::Grid>
			</ui::S1>
		</section>
	}
}

#[component]
fn HowItWorks() {
	html! {
		<section class="section">
			<ui::S1>
				<ui::H2 center={Some(true)}>"How Does Prediction Work?"</ui::H2>
				<ui::Grid columns={4}>
					{PREDICTION_STEPS.iter().enumerate().map(|(i, step)| html! {
						<ui::Card title={Some(format!("{}. {}", i + 1, step.title))} accent_color={None}>
							<ui::P>{step.description}</ui::P>
						</ui::Card>
					}).collect::<Vec<_>>()}
				</ui::Grid>
			</ui::S1>
		</section>
	}
}

#[component]
fn Datasets() {
	html! {
		<section class="section">
			<ui::S1>
				<ui::H2 center={Some(true)}>"NASA Datasets"</ui::H2>
				<ui::Grid columns={3}>
					{NASA_DATASETS.iter().map(|dataset| html! {
						<ui::Card title={Some(dataset.name.to_owned())} accent_color={None}>
							<ui::P>{dataset.description}</ui::P>
							<div class="dataset-updated">{format!("Updated {}", dataset.updated)}</div>
							<ui::Link
								class_name={None}
								href={Some(dataset.link.to_owned())}
								title={None}
							>
								"View dataset"
							</ui::Link>
						</ui::Card>
					}).collect::<Vec<_>>()}
				</ui::Grid>
			</ui::S1>
		</section>
	}
}

#[component]
fn CallToAction() {
	html! {
		<section class="section cta">
			<ui::S1>
				<ui::H2 center={Some(true)}>{CTA_TITLE}</ui::H2>
				<ui::P>{CTA_DESCRIPTION}</ui::P>
				<ui::List>
					{ACCOUNT_BENEFITS.iter().map(|benefit| html! {
						<ui::ListItem>{*benefit}</ui::ListItem>
					}).collect::<Vec<_>>()}
				</ui::List>
				<ui::Button
					button_type={ui::ButtonType::Button}
					color={None}
					disabled={None}
					download={None}
					href={Some("/login".to_owned())}
				>
					"Log in"
				</ui::Button>
			</ui::S1>
		</section>
	}
}

#[test]
fn test_home_page() {
	let html = html!(<HomePage user={None} />).render_to_string();
	assert!(html.contains("Explore the Universe of Exoplanets with AI"));
	assert!(html.contains("12,847"));
	assert!(html.contains("Discoveries per Mission"));
	assert!(html.contains("Kepler Objects of Interest (KOI)"));
	assert!(html.contains("Ready to Explore the Universe?"));
}

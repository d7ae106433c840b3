use html::{component, html, style};

#[component]
pub fn Card(title: Option<String>, accent_color: Option<String>) {
	let style = style! {
		"border-top-color" => accent_color,
	};
	let style = if style.is_empty() { None } else { Some(style) };
	html! {
		<div class="card" style={style}>
			{title.map(|title| html! {
				<div class="card-title">{title}</div>
			})}
			{children}
		</div>
	}
}

/// A large figure with a caption, used for headline statistics.
#[component]
pub fn StatCard(label: String, value: String) {
	html! {
		<div class="stat-card">
			<div class="stat-card-value">{value}</div>
			<div class="stat-card-label">{label}</div>
		</div>
	}
}

#[test]
fn test_stat_card() {
	let html = html!(<StatCard label="Exoplanets" value={"5,539".to_owned()} />).render_to_string();
	assert_eq!(
		html,
		r#"<div class="stat-card"><div class="stat-card-value">5,539</div><div class="stat-card-label">Exoplanets</div></div>"#
	);
}

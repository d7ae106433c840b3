use html::{component, html};

const RADIUS: f64 = 42.0;

/// A circular progress ring showing a fraction in [0, 1] as a percentage.
#[component]
pub fn Gauge(label: String, value: f64, color: Option<String>) {
	let value = value.max(0.0).min(1.0);
	let circumference = 2.0 * std::f64::consts::PI * RADIUS;
	let dash = format!("{:.2} {:.2}", circumference * value, circumference);
	let color = color.unwrap_or_else(|| "var(--accent-color)".to_owned());
	html! {
		<div class="gauge">
			<svg class="gauge-ring" viewBox="0 0 100 100">
				<circle class="gauge-track" cx="50" cy="50" r={RADIUS.to_string()} />
				<circle
					class="gauge-value"
					cx="50"
					cy="50"
					r={RADIUS.to_string()}
					stroke={color}
					stroke-dasharray={dash}
					transform="rotate(-90 50 50)"
				/>
			</svg>
			<div class="gauge-text">{format!("{:.1}%", value * 100.0)}</div>
			<div class="gauge-label">{label}</div>
		</div>
	}
}

#[test]
fn test_gauge() {
	let html = html!(<Gauge label="accuracy" value={0.92} color={None} />).render_to_string();
	assert!(html.contains(r#"<div class="gauge-text">92.0%</div>"#));
	assert!(html.contains(r#"stroke-dasharray="242.78 263.89""#));
	assert!(html.contains(r#"<div class="gauge-label">accuracy</div>"#));
}

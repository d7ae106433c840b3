use html::{component, html, style};

/// A small rounded label, e.g. a disposition or a classification.
#[component]
pub fn Chip(color: Option<String>) {
	let style = style! {
		"background-color" => color,
	};
	let style = if style.is_empty() { None } else { Some(style) };
	html! {
		<span class="chip" style={style}>{children}</span>
	}
}

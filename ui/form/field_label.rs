use html::{component, html};

#[component]
pub fn FieldLabel(html_for: Option<String>) {
	html! {
		<label class="field-label" html_for={html_for}>
			{children}
		</label>
	}
}

/// Muted text under a field.
#[component]
pub fn FieldHelper() {
	html! {
		<span class="field-helper">{children}</span>
	}
}

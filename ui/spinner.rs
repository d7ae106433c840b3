use html::{component, html};

#[component]
pub fn Spinner(label: Option<String>) {
	html! {
		<div class="spinner-wrapper" aria-busy="true">
			<div class="spinner"></div>
			{label.map(|label| html! {
				<div class="spinner-label">{label}</div>
			})}
		</div>
	}
}

use super::FieldLabel;
use html::{component, html};

/// A file input styled as a drop zone. `file_name` is shown in place of the prompt once a file was accepted.
#[component]
pub fn FileField(
	accept: Option<String>,
	disabled: Option<bool>,
	file_name: Option<String>,
	label: Option<String>,
	name: Option<String>,
) {
	let prompt = file_name.unwrap_or_else(|| "Choose a CSV file".to_owned());
	html! {
		<FieldLabel html_for={None}>
			{label}
			<div class="form-file-wrapper">
				{prompt}
				<input
					accept={accept}
					class="form-file-input"
					disabled={disabled}
					name={name}
					type="file"
				/>
			</div>
		</FieldLabel>
	}
}

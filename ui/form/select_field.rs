use super::FieldLabel;
use html::{component, html};

pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

#[component]
pub fn SelectField(
	disabled: Option<bool>,
	label: Option<String>,
	name: Option<String>,
	options: Vec<SelectFieldOption>,
	placeholder: Option<String>,
	value: Option<String>,
) {
	html! {
		<FieldLabel html_for={None}>
			{label}
			<select class="form-select" disabled={disabled} name={name}>
				{placeholder.map(|placeholder| html! {
					<option disabled selected={value.is_none()} value="">{placeholder}</option>
				})}
				{
					options.into_iter().map(|option| {
						let selected = value.as_deref() == Some(option.value.as_str());
						html! {
							<option selected={selected} value={option.value}>
								{option.text}
							</option>
						}
					}).collect::<Vec<_>>()
				}
			</select>
		</FieldLabel>
	}
}

#[test]
fn test_select_field() {
	let options = vec![
		SelectFieldOption {
			text: "Kepler".to_owned(),
			value: "kepler".to_owned(),
		},
		SelectFieldOption {
			text: "TESS".to_owned(),
			value: "tess".to_owned(),
		},
	];
	let html = html! {
		<SelectField
			disabled={None}
			label={Some("Model".to_owned())}
			name={Some("model".to_owned())}
			options={options}
			placeholder={None}
			value={Some("tess".to_owned())}
		/>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<label class="field-label">Model<select class="form-select" name="model"><option value="kepler">Kepler</option><option selected value="tess">TESS</option></select></label>"#
	);
}

use super::{FieldHelper, FieldLabel};
use html::{component, html};

pub enum TextFieldType {
	Text,
	Email,
	Password,
	Number,
}

#[component]
pub fn TextField(
	autocomplete: Option<String>,
	field_type: Option<TextFieldType>,
	helper: Option<String>,
	label: Option<String>,
	name: Option<String>,
	placeholder: Option<String>,
	required: Option<bool>,
	value: Option<String>,
) {
	let (field_type, step) = match field_type.unwrap_or(TextFieldType::Text) {
		TextFieldType::Text => ("text", None),
		TextFieldType::Email => ("email", None),
		TextFieldType::Password => ("password", None),
		TextFieldType::Number => ("number", Some("any")),
	};
	html! {
		<FieldLabel html_for={None}>
			{label}
			<input
				autocomplete={autocomplete}
				class="form-text-field"
				name={name}
				placeholder={placeholder}
				required={required}
				spellcheck={false}
				step={step}
				type={field_type}
				value={value}
			/>
			{helper.map(|helper| html! { <FieldHelper>{helper}</FieldHelper> })}
		</FieldLabel>
	}
}

#[test]
fn test_number_field() {
	let html = html! {
		<TextField
			autocomplete={None}
			field_type={Some(TextFieldType::Number)}
			helper={None}
			label={Some("Planet Radius (Earth radii)".to_owned())}
			name={Some("planet_radius".to_owned())}
			placeholder={Some("e.g. 1.2".to_owned())}
			required={None}
			value={Some("1.2".to_owned())}
		/>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<label class="field-label">Planet Radius (Earth radii)<input class="form-text-field" name="planet_radius" placeholder="e.g. 1.2" step="any" type="number" value="1.2" /></label>"#
	);
}

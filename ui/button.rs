use html::{component, html, style};

pub enum ButtonType {
	Submit,
	Button,
	Reset,
}

#[component]
pub fn Button(
	button_type: ButtonType,
	color: Option<String>,
	disabled: Option<bool>,
	download: Option<String>,
	href: Option<String>,
) {
	let button_type = match button_type {
		ButtonType::Submit => "submit",
		ButtonType::Button => "button",
		ButtonType::Reset => "reset",
	};
	let style = style! {
		"background-color" => color,
	};
	let style = if style.is_empty() { None } else { Some(style) };
	if let Some(href) = href {
		html! {
			<a class="button" download={download} href={href} style={style}>
				{children}
			</a>
		}
	} else {
		html! {
			<button class="button" disabled={disabled} style={style} type={button_type}>
				{children}
			</button>
		}
	}
}

#[test]
fn test_button() {
	let html = html! {
		<Button
			button_type={ButtonType::Submit}
			color={None}
			disabled={Some(true)}
			download={None}
			href={None}
		>
			"Predict"
		</Button>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<button class="button" disabled type="submit">Predict</button>"#
	);
	let html = html! {
		<Button
			button_type={ButtonType::Button}
			color={Some("#22d3ee".to_owned())}
			disabled={None}
			download={Some("predictions.csv".to_owned())}
			href={Some("/dashboard/batch/predictions.csv".to_owned())}
		>
			"Download"
		</Button>
	}
	.render_to_string();
	assert_eq!(
		html,
		r##"<a class="button" download="predictions.csv" href="/dashboard/batch/predictions.csv" style="background-color: #22d3ee;">Download</a>"##
	);
}

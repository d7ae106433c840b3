use html::{component, html};

pub enum FormEncoding {
	UrlEncoded,
	Multipart,
}

#[component]
pub fn Form(
	action: Option<String>,
	autocomplete: Option<String>,
	enc_type: Option<FormEncoding>,
	post: Option<bool>,
) {
	let enc_type = enc_type.map(|enc_type| match enc_type {
		FormEncoding::UrlEncoded => "application/x-www-form-urlencoded",
		FormEncoding::Multipart => "multipart/form-data",
	});
	let method = post.and_then(|post| if post { Some("post") } else { None });
	html! {
		<form
			action={action}
			autocomplete={autocomplete}
			class="form"
			enctype={enc_type}
			method={method}
		>
			{children}
		</form>
	}
}

#[test]
fn test_form() {
	let html = html! {
		<Form
			action={Some("/dashboard/batch".to_owned())}
			autocomplete={None}
			enc_type={Some(FormEncoding::Multipart)}
			post={Some(true)}
		>
		</Form>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<form action="/dashboard/batch" class="form" enctype="multipart/form-data" method="post"></form>"#
	);
}

use html::{classes, component, html, raw, style};

#[component]
fn Test() {
	return html!(
	  <div>{"Hello World"}</div>
	);
}

#[component]
fn Card(title: Option<String>) {
	html! {
		<section class="card">
			{title.map(|title| html! { <h2>{title}</h2> })}
			{children}
		</section>
	}
}

#[test]
fn test() {
	let html = html!(<Test />).render_to_string();
	assert_eq!(html, "<div>Hello World</div>");
}

#[test]
fn test_children_and_optional_props() {
	let html = html! {
		<Card title={Some("Kepler".to_owned())}>
			<p>"CONFIRMED"</p>
		</Card>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<section class="card"><h2>Kepler</h2><p>CONFIRMED</p></section>"#
	);
	let html = html!(<Card title={None}>{"empty"}</Card>).render_to_string();
	assert_eq!(html, r#"<section class="card">empty</section>"#);
}

#[test]
fn test_attributes() {
	let disabled: Option<bool> = None;
	let html = html! {
		<input type="number" name="orbital_period" disabled={disabled} required />
	}
	.render_to_string();
	assert_eq!(html, r#"<input type="number" name="orbital_period" required />"#);
	let html = html!(<label html_for={"radius".to_owned()} data-field="radius"></label>)
		.render_to_string();
	assert_eq!(html, r#"<label for="radius" data-field="radius"></label>"#);
}

#[test]
fn test_escaping() {
	let html = html!(<p title={"\"a\" & b".to_owned()}>{"<b>".to_owned()}</p>).render_to_string();
	assert_eq!(html, r#"<p title="&quot;a&quot; &amp; b">&lt;b&gt;</p>"#);
	let html = html!(<p>{raw!("<b>bold</b>")}</p>).render_to_string();
	assert_eq!(html, "<p><b>bold</b></p>");
}

#[test]
fn test_fragments_and_lists() {
	let items = vec!["K2", "Kepler", "TESS"];
	let html = html! {
		<>
			<ul>
				{items.iter().map(|item| html! { <li>{item.to_string()}</li> }).collect::<Vec<_>>()}
			</ul>
		</>
	}
	.render_to_string();
	assert_eq!(html, "<ul><li>K2</li><li>Kepler</li><li>TESS</li></ul>");
}

#[test]
fn test_style_and_classes() {
	let color: Option<String> = None;
	let style = style! {
		"width" => "50%",
		"background-color" => color,
	};
	assert_eq!(style, "width: 50%;");
	let active: Option<&str> = Some("active");
	let hidden: Option<&str> = None;
	assert_eq!(classes!("tab", active, hidden), "tab active");
}

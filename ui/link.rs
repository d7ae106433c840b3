use html::{classes, component, html};

#[component]
pub fn Link(class_name: Option<String>, href: Option<String>, title: Option<String>) {
	let external = href
		.as_deref()
		.map(|href| href.starts_with("http://") || href.starts_with("https://"))
		.unwrap_or(false);
	let target = if external { Some("_blank") } else { None };
	let rel = if external { Some("noopener noreferrer") } else { None };
	html! {
		<a class={classes!("link", class_name)} href={href} rel={rel} target={target} title={title}>
			{children}
		</a>
	}
}

#[test]
fn test_link() {
	let html = html! {
		<Link class_name={None} href={Some("/team".to_owned())} title={None}>"Team"</Link>
	}
	.render_to_string();
	assert_eq!(html, r#"<a class="link" href="/team">Team</a>"#);
	let html = html! {
		<Link class_name={None} href={Some("https://github.com/NXT-CRAZZY".to_owned())} title={None}>
			"GitHub"
		</Link>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<a class="link" href="https://github.com/NXT-CRAZZY" rel="noopener noreferrer" target="_blank">GitHub</a>"#
	);
}

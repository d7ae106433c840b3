use html::{classes, component, html};

#[component]
pub fn S1() {
	html! {
		<div class="s1">
			{children}
		</div>
	}
}

#[component]
pub fn S2() {
	html! {
		<div class="s2">{children}</div>
	}
}

#[component]
pub fn SpaceBetween() {
	html! {
		<div class="space-between">{children}</div>
	}
}

/// Lay children out in equal columns that wrap on narrow screens.
#[component]
pub fn Grid(columns: usize) {
	html! {
		<div class={format!("grid grid-{}", columns)}>{children}</div>
	}
}

#[component]
pub fn Overline() {
	html! {
		<div class="overline">{children}</div>
	}
}

#[component]
pub fn H1(center: Option<bool>) {
	let center = center.and_then(|center| if center { Some("center") } else { None });
	html! {
		<h1 class={classes!("h1", center)}>
			{children}
		</h1>
	}
}

#[component]
pub fn H2(center: Option<bool>) {
	let center = center.and_then(|center| if center { Some("center") } else { None });
	html! {
		<h2 class={classes!("h2", center)}>
			{children}
		</h2>
	}
}

#[component]
pub fn P() {
	html! {
		<p class="p">{children}</p>
	}
}

#[component]
pub fn List() {
	html! {
		<ul class="list">{children}</ul>
	}
}

#[component]
pub fn ListItem() {
	html! {
		<li>{children}</li>
	}
}

#[test]
fn test_headings() {
	let html = html!(<H1 center={Some(true)}>"Model Analytics"</H1>).render_to_string();
	assert_eq!(html, r#"<h1 class="h1 center">Model Analytics</h1>"#);
	let html = html!(<H2 center={None}>"ROC Curve"</H2>).render_to_string();
	assert_eq!(html, r#"<h2 class="h2">ROC Curve</h2>"#);
}

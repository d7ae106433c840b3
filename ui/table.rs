use html::{classes, component, html};

#[component]
pub fn Table() {
	html! {
		<div class="table-wrapper">
			<table class="table">
				{children}
			</table>
		</div>
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead class="table-header">
		{children}
		</thead>
	}
}

#[component]
pub fn TableBody() {
	html! { <tbody>{children}</tbody> }
}

#[component]
pub fn TableRow() {
	html! {
		<tr>
			{children}
		</tr>
	}
}

pub enum TextAlign {
	Left,
	Center,
	Right,
}

fn text_align_class(text_align: Option<TextAlign>) -> &'static str {
	text_align
		.map(|text_align| match text_align {
			TextAlign::Left => "table-align-left",
			TextAlign::Right => "table-align-right",
			TextAlign::Center => "table-align-center",
		})
		.unwrap_or("table-align-left")
}

#[component]
pub fn TableHeaderCell(text_align: Option<TextAlign>) {
	html! {
		<th class={classes!("table-header-cell", text_align_class(text_align))}>
			{children}
		</th>
	}
}

#[component]
pub fn TableCell(text_align: Option<TextAlign>) {
	html! {
		<td class={classes!("table-cell", text_align_class(text_align))}>
			{children}
		</td>
	}
}

#[test]
fn test_table() {
	let html = html! {
		<Table>
			<TableBody>
				<TableRow>
					<TableCell text_align={None}>"Kepler-22b"</TableCell>
					<TableCell text_align={Some(TextAlign::Right)}>"95.0%"</TableCell>
				</TableRow>
			</TableBody>
		</Table>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div class="table-wrapper"><table class="table"><tbody><tr><td class="table-cell table-align-left">Kepler-22b</td><td class="table-cell table-align-right">95.0%</td></tr></tbody></table></div>"#
	);
}

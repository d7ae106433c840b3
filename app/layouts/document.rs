use exo_core::content::BRAND_NAME;
use html::{component, html};

#[component]
pub fn Document(refresh: Option<u32>, title: String) {
	html! {
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta content="width=device-width, initial-scale=1" name="viewport" />
				{refresh.map(|seconds| html! {
					<meta content={seconds.to_string()} http-equiv="refresh" />
				})}
				<title>{format!("{} | {}", title, BRAND_NAME)}</title>
				<link href="/styles.css" rel="stylesheet" />
				<meta
					content="Explore, predict and classify exoplanets with artificial intelligence."
					name="description"
				/>
			</head>
			<body>
				{children}
			</body>
		</html>
	}
}

use std::collections::BTreeMap;

/// Parse a `Cookie` header value into its name/value pairs.
pub fn parse_cookies(cookies_str: &str) -> Result<BTreeMap<&str, &str>, ()> {
	cookies_str
		.split(';')
		.map(str::trim)
		.filter(|cookie| !cookie.is_empty())
		.map(|cookie| {
			let mut components = cookie.splitn(2, '=');
			let key = match components.next() {
				Some(key) => key,
				None => return Err(()),
			};
			let value = match components.next() {
				Some(value) => value,
				None => return Err(()),
			};
			Ok((key, value))
		})
		.collect()
}

#[test]
fn test_parse_cookies() {
	let cookies = parse_cookies("exo-session=abc; theme=dark").unwrap();
	assert_eq!(cookies.get("exo-session"), Some(&"abc"));
	assert_eq!(cookies.get("theme"), Some(&"dark"));
	let cookies = parse_cookies("token=a=b;").unwrap();
	assert_eq!(cookies.get("token"), Some(&"a=b"));
	assert!(parse_cookies("broken").is_err());
	assert!(parse_cookies("").unwrap().is_empty());
}

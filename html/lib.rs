use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

#[derive(From)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	#[from(ignore)]
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

pub struct RawTextNode(pub Cow<'static, str>);

pub struct EscapedTextNode(pub Cow<'static, str>);

pub struct FragmentNode {
	pub children: Vec<Node>,
}

pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub struct ComponentNode {
	pub component: Box<dyn Component>,
	pub children: Vec<Node>,
}

/// A component consumes its props and children and produces the node it renders to.
pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn render_to_string(self) -> String {
		let mut output = String::new();
		// Writing to a String cannot fail.
		self.write(&mut output).ok();
		output
	}

	fn write(self, f: &mut String) -> std::fmt::Result {
		match self {
			Node::RawText(node) => f.write_str(&node.0)?,
			Node::EscapedText(node) => write_escaped(f, &node.0)?,
			Node::Fragment(node) => {
				for child in node.children {
					child.write(f)?;
				}
			}
			Node::Host(node) => node.write(f)?,
			Node::Component(node) => {
				let rendered = node.component.render(node.children);
				rendered.write(f)?;
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.write(f)?;
				}
			}
			Node::Vec(nodes) => {
				for node in nodes {
					node.write(f)?;
				}
			}
		};
		Ok(())
	}
}

impl HostNode {
	fn write(self, f: &mut String) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						f.write_char('"')?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " /")?;
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children {
				child.write(f)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

fn write_escaped(f: &mut String, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<bool>> for AttributeValue {
	fn from(value: Option<bool>) -> AttributeValue {
		AttributeValue::Bool(value)
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

/// Values accepted on the right hand side of `style!` and `classes!`.
pub trait IntoOptionalString {
	fn into_optional_string(self) -> Option<String>;
}

impl IntoOptionalString for String {
	fn into_optional_string(self) -> Option<String> {
		Some(self)
	}
}

impl IntoOptionalString for &str {
	fn into_optional_string(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl IntoOptionalString for Option<String> {
	fn into_optional_string(self) -> Option<String> {
		self
	}
}

impl IntoOptionalString for Option<&str> {
	fn into_optional_string(self) -> Option<String> {
		self.map(|value| value.to_owned())
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::EscapedTextNode($t.into())
	};
}

/// Build an inline style string, skipping declarations whose value is `None`.
#[macro_export]
macro_rules! style {
	($($key:expr => $value:expr),* $(,)?) => {{
		let mut style = String::new();
		$(
			if let Some(value) = $crate::IntoOptionalString::into_optional_string($value) {
				style.push_str($key);
				style.push_str(": ");
				style.push_str(&value);
				style.push(';');
			}
		)*
		style
	}};
}

/// Join class names with spaces, skipping those that are `None`.
#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let mut classes: Vec<String> = Vec::new();
		$(
			if let Some(class) = $crate::IntoOptionalString::into_optional_string($class) {
				classes.push(class);
			}
		)*
		classes.join(" ")
	}};
}

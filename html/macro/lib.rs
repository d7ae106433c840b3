use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse_macro_input;

enum Node {
	String(syn::LitStr),
	Block(syn::Block),
	Fragment(Fragment),
	Element(Element),
}

struct Fragment {
	pub children: Vec<Node>,
}

struct Element {
	pub name: syn::Path,
	pub attributes: Vec<Attribute>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

enum Attribute {
	Shorthand(AttributeKey),
	Longhand(AttributeKey, AttributeValue),
}

type AttributeKey = syn::punctuated::Punctuated<syn::Ident, syn::Token![-]>;

enum AttributeValue {
	String(syn::LitStr),
	Block(syn::Block),
}

impl syn::parse::Parse for Node {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		if input.peek(syn::LitStr) {
			input.parse::<syn::LitStr>().map(Self::String)
		} else if input.peek(syn::token::Brace) {
			input.parse::<syn::Block>().map(Self::Block)
		} else if input.peek(syn::Token![<]) && input.peek2(syn::Token![>]) {
			input.parse::<Fragment>().map(Self::Fragment)
		} else if input.peek(syn::Token![<]) {
			input.parse::<Element>().map(Self::Element)
		} else {
			Err(syn::Error::new(input.span(), "failed to parse node"))
		}
	}
}

fn parse_children(input: syn::parse::ParseStream) -> syn::parse::Result<Vec<Node>> {
	let mut children = Vec::new();
	while !(input.peek(syn::Token![<]) && input.peek2(syn::Token![/])) {
		if input.is_empty() {
			return Err(syn::Error::new(input.span(), "unclosed element"));
		}
		children.push(input.parse::<Node>()?);
	}
	Ok(children)
}

impl syn::parse::Parse for Fragment {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![>]>()?;
		let children = parse_children(input)?;
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![/]>()?;
		input.parse::<syn::Token![>]>()?;
		Ok(Self { children })
	}
}

impl syn::parse::Parse for Element {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		let name = input.call(syn::Path::parse_mod_style)?;
		let mut attributes = Vec::new();
		while !(input.peek(syn::Token![>]) || input.peek(syn::Token![/])) {
			let key = AttributeKey::parse_separated_nonempty_with(input, syn::Ident::parse_any)?;
			if !input.peek(syn::Token![=]) {
				attributes.push(Attribute::Shorthand(key));
			} else {
				input.parse::<syn::Token![=]>()?;
				let value = if input.peek(syn::LitStr) {
					AttributeValue::String(input.parse::<syn::LitStr>()?)
				} else {
					AttributeValue::Block(input.parse::<syn::Block>()?)
				};
				attributes.push(Attribute::Longhand(key, value));
			}
		}
		let self_closing = input.peek(syn::Token![/]);
		if self_closing {
			input.parse::<syn::Token![/]>()?;
		}
		input.parse::<syn::Token![>]>()?;
		let mut children = Vec::new();
		if !self_closing {
			children = parse_children(input)?;
			input.parse::<syn::Token![<]>()?;
			input.parse::<syn::Token![/]>()?;
			let close_name = input.call(syn::Path::parse_mod_style)?;
			if quote!(#close_name).to_string() != quote!(#name).to_string() {
				return Err(syn::Error::new_spanned(
					close_name,
					"closing tag does not match opening tag",
				));
			}
			input.parse::<syn::Token![>]>()?;
		}
		Ok(Self {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl quote::ToTokens for Node {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		match self {
			Self::String(string) => string.to_tokens(tokens),
			Self::Block(block) => block.to_tokens(tokens),
			Self::Fragment(fragment) => fragment.to_tokens(tokens),
			Self::Element(element) => element.to_tokens(tokens),
		}
	}
}

impl quote::ToTokens for Fragment {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let children = self.children.iter();
		let code = quote! {
			::html::Node::Fragment(::html::FragmentNode {
				children: vec![#(::std::convert::Into::<::html::Node>::into(#children)),*],
			})
		};
		code.to_tokens(tokens);
	}
}

fn host_attribute_name(key: &AttributeKey) -> String {
	let name = key
		.iter()
		.map(|segment| segment.unraw().to_string())
		.collect::<Vec<_>>()
		.join("-");
	match name.as_str() {
		"html_for" => "for".to_owned(),
		_ => name,
	}
}

impl quote::ToTokens for Element {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let host_name = self.name.get_ident().filter(|ident| {
			ident
				.to_string()
				.chars()
				.next()
				.map(|c| c.is_ascii_lowercase())
				.unwrap_or(false)
		});
		let children = self.children.iter();
		let children =
			quote! { vec![#(::std::convert::Into::<::html::Node>::into(#children)),*] };
		if let Some(host_name) = host_name {
			let host_name = host_name.to_string();
			let attributes = self.attributes.iter().map(|attribute| {
				let (key, value) = match attribute {
					Attribute::Shorthand(key) => (key, quote! { ::html::AttributeValue::Bool(Some(true)) }),
					Attribute::Longhand(key, value) => match value {
						AttributeValue::String(string) => (
							key,
							quote! { ::std::convert::Into::<::html::AttributeValue>::into(#string) },
						),
						AttributeValue::Block(block) => (
							key,
							quote! { ::std::convert::Into::<::html::AttributeValue>::into(#block) },
						),
					},
				};
				let key = host_attribute_name(key);
				quote! { (#key, #value) }
			});
			let self_closing = self.self_closing;
			let code = quote! {
				::html::Node::Host(::html::HostNode {
					name: #host_name,
					attributes: vec![#(#attributes),*],
					children: #children,
					self_closing: #self_closing,
				})
			};
			code.to_tokens(tokens);
		} else {
			let name = &self.name;
			let fields = self.attributes.iter().map(|attribute| match attribute {
				Attribute::Shorthand(key) => quote! { #key: #key },
				Attribute::Longhand(key, value) => match value {
					AttributeValue::String(string) => quote! { #key: #string.into() },
					AttributeValue::Block(block) => quote! { #key: #block },
				},
			});
			let code = quote! {
				::html::Node::Component(::html::ComponentNode {
					component: Box::new(#name { #(#fields),* }),
					children: #children,
				})
			};
			code.to_tokens(tokens);
		}
	}
}

fn component_transform(ast: syn::ItemFn) -> TokenStream {
	let visibility = ast.vis;
	let struct_name = ast.sig.ident;
	let (impl_generics, ty_generics, where_clause) = ast.sig.generics.split_for_impl();
	let inputs = ast.sig.inputs.iter().collect::<Vec<_>>();
	let block = ast.block;
	let input_patterns: Vec<_> = inputs
		.iter()
		.filter_map(|argument| match argument {
			syn::FnArg::Typed(typed) => {
				let pattern = &typed.pat;
				Some(quote!(#pattern))
			}
			_ => None,
		})
		.collect();
	let ast = quote! {
		#visibility struct #struct_name #impl_generics { #(#visibility #inputs),* }
		impl #impl_generics ::html::Component for #struct_name #ty_generics #where_clause {
			#[allow(unused_variables, clippy::redundant_clone)]
			fn render(self: Box<Self>, children: Vec<::html::Node>) -> ::html::Node {
				let #struct_name { #(#input_patterns),* } = *self;
				#block
			}
		}
	};
	ast.into()
}

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let ast = parse_macro_input!(input as Node);
	let ast = quote! { #ast };
	ast.into()
}

#[proc_macro_attribute]
pub fn component(_attr: TokenStream, input: TokenStream) -> TokenStream {
	component_transform(parse_macro_input!(input as syn::ItemFn))
}

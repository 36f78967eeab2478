use std::collections::HashMap;

use axum::http::HeaderMap;

/// Case-sensitive, multi-value header collection.
///
/// Names are stored exactly as given. Use [`Headers::from_http`] to build one
/// from a parsed request, which rewrites names into canonical form
/// (`authorization` becomes `Authorization`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
	entries: HashMap<String, Vec<String>>,
}

impl Headers {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add another value under `name`, keeping existing ones.
	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries
			.entry(name.into())
			.or_default()
			.push(value.into());
	}

	/// First value stored under exactly `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.get_all(name).first().map(String::as_str)
	}

	pub fn get_all(&self, name: &str) -> &[String] {
		self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Convert an `http::HeaderMap`, canonicalizing each name.
	///
	/// Every value is kept in order. UTF-8 values are copied verbatim; other
	/// bytes are replaced with U+FFFD.
	pub fn from_http(map: &HeaderMap) -> Self {
		let mut headers = Self::new();
		for (name, value) in map {
			headers.append(
				canonical_name(name.as_str()),
				String::from_utf8_lossy(value.as_bytes()),
			);
		}
		headers
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut headers = Self::new();
		for (name, value) in iter {
			headers.append(name, value);
		}
		headers
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

/// Canonical MIME form of a header name: the first letter and every letter
/// following a hyphen are upper-cased, the rest lower-cased.
///
/// Names containing bytes outside the token charset are returned unchanged.
pub fn canonical_name(name: &str) -> String {
	if !name.bytes().all(is_token_byte) {
		return name.to_string();
	}

	let mut out = String::with_capacity(name.len());
	let mut upper = true;
	for c in name.chars() {
		if upper {
			out.push(c.to_ascii_uppercase());
		} else {
			out.push(c.to_ascii_lowercase());
		}
		upper = c == '-';
	}
	out
}

fn is_token_byte(b: u8) -> bool {
	b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

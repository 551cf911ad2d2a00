use std::cmp::Ordering;

/// An absolute IRI reference, kept exactly as it was written.
///
/// Comparisons, hashing and serialization all work on the original string, so that a round trip
/// never rewrites identifiers. The WHATWG parsed form is kept alongside when `url` accepts the
/// text; RFC 3986 references it refuses, like out of range ports, are still IRIs without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri {
	text: String,
	url: Option<url::Url>,
}

impl Iri {
	/// Accepts strings that are absolute URIs with a non-empty scheme and no whitespace.
	pub fn parse(text: &str) -> Option<Self> {
		if text.is_empty() || text.chars().any(char::is_whitespace) {
			return None;
		}
		match url::Url::parse(text) {
			Ok(url) if !url.scheme().is_empty() => Some(Iri { text: text.to_string(), url: Some(url) }),
			_ if scheme_of(text).is_some() && text.chars().all(is_iri_char) =>
				Some(Iri { text: text.to_string(), url: None }),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// WHATWG form, `None` for references `url` refuses.
	pub fn url(&self) -> Option<&url::Url> {
		self.url.as_ref()
	}

	pub fn scheme(&self) -> &str {
		match &self.url {
			Some(url) => url.scheme(),
			None => scheme_of(&self.text).unwrap_or_default(),
		}
	}
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` before the first `:`.
fn scheme_of(text: &str) -> Option<&str> {
	let (scheme, _) = text.split_once(':')?;
	let mut chars = scheme.chars();
	if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
		return None;
	}
	if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
		return None;
	}
	Some(scheme)
}

/// Unreserved, reserved and percent characters, plus non-ascii ones as IRIs allow.
fn is_iri_char(c: char) -> bool {
	c.is_ascii_alphanumeric()
		|| "-._~:/?#[]@!$&'()*+,;=%".contains(c)
		|| (!c.is_ascii() && !c.is_control())
}

impl TryFrom<&str> for Iri {
	type Error = crate::Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Iri::parse(value).ok_or_else(|| crate::Error::InvalidIri(value.to_string()))
	}
}

impl From<url::Url> for Iri {
	fn from(url: url::Url) -> Self {
		Iri { text: url.to_string(), url: Some(url) }
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.text
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

impl PartialOrd for Iri {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Iri {
	fn cmp(&self, other: &Self) -> Ordering {
		self.text.cmp(&other.text)
	}
}

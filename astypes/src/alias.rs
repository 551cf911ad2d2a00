use std::collections::HashMap;

use serde_json::Value;

/// Vocabularies this crate knows types and properties of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vocabulary {
	/// JSON-LD keywords (`id`, `type`), never prefixed
	JsonLd,
	ActivityStreams,
	Security,
}

impl Vocabulary {
	pub const ALL: [Vocabulary; 3] = [Vocabulary::JsonLd, Vocabulary::ActivityStreams, Vocabulary::Security];

	/// Document URI, the one that shows up in `@context` arrays.
	pub const fn uri(&self) -> &'static str {
		match self {
			Vocabulary::JsonLd => "http://www.w3.org/ns/json-ld",
			Vocabulary::ActivityStreams => "https://www.w3.org/ns/activitystreams",
			Vocabulary::Security => "https://w3id.org/security/v1",
		}
	}

	/// Term namespace, what a `prefix:` expands to.
	pub const fn namespace(&self) -> &'static str {
		match self {
			Vocabulary::JsonLd => "http://www.w3.org/ns/json-ld#",
			Vocabulary::ActivityStreams => "https://www.w3.org/ns/activitystreams#",
			Vocabulary::Security => "https://w3id.org/security#",
		}
	}

	/// Matches either the document URI or the term namespace, ignoring scheme and trailing `#`.
	pub fn from_uri(uri: &str) -> Option<Self> {
		let uri = normalize(uri);
		Vocabulary::ALL.into_iter()
			.find(|v| normalize(v.uri()) == uri || normalize(v.namespace()) == uri)
	}
}

fn normalize(uri: &str) -> String {
	let uri = uri.trim_end_matches('#');
	match uri.strip_prefix("http://") {
		Some(rest) => format!("https://{rest}"),
		None => uri.to_string(),
	}
}

/// Maps vocabulary URIs to the prefix their terms carry in a document.
///
/// A vocabulary with no entry, or registered with an empty prefix, uses bare names: `actor`.
/// A vocabulary registered with prefix `as` is only looked up as `as:actor`. The same table
/// drives serialization, so keys come out the way they went in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap(HashMap<String, String>);

impl AliasMap {
	pub fn new() -> Self {
		AliasMap::default()
	}

	/// Registers `prefix` for the vocabulary at `uri`, replacing any previous entry.
	pub fn with(mut self, uri: &str, prefix: impl Into<String>) -> Self {
		self.insert(uri, prefix);
		self
	}

	pub fn insert(&mut self, uri: &str, prefix: impl Into<String>) {
		self.0.insert(canonical(uri), prefix.into());
	}

	pub fn prefix(&self, vocabulary: Vocabulary) -> Option<&str> {
		if vocabulary == Vocabulary::JsonLd {
			return None;
		}
		self.0.get(vocabulary.uri())
			.map(String::as_str)
			.filter(|x| !x.is_empty())
	}

	/// Key under which property `name` of `vocabulary` is read and written.
	pub fn key(&self, vocabulary: Vocabulary, name: &str) -> String {
		match self.prefix(vocabulary) {
			Some(prefix) => format!("{prefix}:{name}"),
			None => name.to_string(),
		}
	}

	/// Drops this vocabulary's `prefix:` from a term, if present.
	pub fn strip<'a>(&self, vocabulary: Vocabulary, term: &'a str) -> &'a str {
		self.prefix(vocabulary)
			.and_then(|prefix| term.strip_prefix(prefix)?.strip_prefix(':'))
			.unwrap_or(term)
	}

	/// Entries as (uri, prefix) pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Copies every entry of `other` over this map.
	pub fn merge(&mut self, other: &AliasMap) {
		for (uri, prefix) in &other.0 {
			self.0.insert(uri.clone(), prefix.clone());
		}
	}

	/// Derives aliases from a JSON-LD `@context`.
	///
	/// Plain strings register a vocabulary with bare names and always win over prefixes: a
	/// document saying both `"https://www.w3.org/ns/activitystreams"` and `{"as": ...}` still
	/// uses `actor` rather than `as:actor`. Objects register `prefix -> namespace` entries.
	/// Entries that are not vocabularies known here are ignored.
	pub fn from_context(context: &Value) -> Self {
		let mut out = AliasMap::new();
		let mut bare = Vec::new();
		out.collect_context(context, &mut bare);
		for uri in bare {
			out.0.insert(uri, String::new());
		}
		out
	}

	fn collect_context(&mut self, context: &Value, bare: &mut Vec<String>) {
		match context {
			Value::String(uri) => match Vocabulary::from_uri(uri) {
				Some(v) => bare.push(v.uri().to_string()),
				None => tracing::trace!("ignoring unknown context {uri}"),
			},
			Value::Array(entries) => {
				for entry in entries {
					self.collect_context(entry, bare);
				}
			},
			Value::Object(terms) => {
				for (prefix, uri) in terms {
					if prefix.starts_with('@') {
						continue;
					}
					let Some(uri) = uri.as_str() else { continue };
					if let Some(v) = Vocabulary::from_uri(uri) {
						self.0.insert(v.uri().to_string(), prefix.clone());
					}
				}
			},
			_ => tracing::debug!("ignoring malformed @context entry: {context}"),
		}
	}
}

fn canonical(uri: &str) -> String {
	match Vocabulary::from_uri(uri) {
		Some(v) => v.uri().to_string(),
		None => normalize(uri),
	}
}

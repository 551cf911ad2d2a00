use crate::{AliasMap, Vocabulary};

pub trait LD {
	/// Adds a `@context` naming the known vocabularies and the prefixes in use. Values that
	/// already carry a `@context` are left untouched.
	fn ld_context(self, aliases: &AliasMap) -> Self;
}

impl LD for serde_json::Map<String, serde_json::Value> {
	fn ld_context(mut self, aliases: &AliasMap) -> Self {
		if self.contains_key("@context") {
			return self;
		}
		// a vocabulary listed bare in @context reads back unprefixed, so prefixed ones only go in the term map
		let mut context = Vec::new();
		let mut ctx = serde_json::Map::new();
		for vocabulary in [Vocabulary::ActivityStreams, Vocabulary::Security] {
			match aliases.prefix(vocabulary) {
				Some(prefix) => {
					ctx.insert(prefix.to_string(), serde_json::Value::String(vocabulary.namespace().to_string()));
				},
				None => context.push(serde_json::Value::String(vocabulary.uri().to_string())),
			}
		}
		if !ctx.is_empty() {
			context.push(serde_json::Value::Object(ctx));
		}
		self.insert("@context".to_string(), serde_json::Value::Array(context));
		self
	}
}

impl LD for serde_json::Value {
	fn ld_context(self, aliases: &AliasMap) -> Self {
		match self {
			serde_json::Value::Object(map) => serde_json::Value::Object(map.ld_context(aliases)),
			other => {
				tracing::warn!("cannot add @context to json value different than object");
				other
			},
		}
	}
}

#[cfg(test)]
mod test {
	use crate::{AliasMap, Vocabulary};

	use super::LD;

	#[test]
	fn context_lists_known_vocabularies() {
		let out = serde_json::json!({ "type": "Note" }).ld_context(&AliasMap::new());
		assert_eq!(out, serde_json::json!({
			"@context": ["https://www.w3.org/ns/activitystreams", "https://w3id.org/security/v1"],
			"type": "Note",
		}));
	}

	#[test]
	fn prefixes_in_use_are_declared() {
		let aliases = AliasMap::new().with("https://www.w3.org/ns/activitystreams", "as");
		let out = serde_json::json!({ "type": "as:Note" }).ld_context(&aliases);
		assert_eq!(out["@context"], serde_json::json!([
			"https://w3id.org/security/v1",
			{ "as": "https://www.w3.org/ns/activitystreams#" },
		]));
		let back = AliasMap::from_context(&out["@context"]);
		assert_eq!(back.prefix(Vocabulary::ActivityStreams), Some("as"));
		assert_eq!(back.prefix(Vocabulary::Security), None);
	}

	#[test]
	fn existing_contexts_are_kept() {
		let raw = serde_json::json!({ "@context": "https://www.w3.org/ns/activitystreams", "type": "Note" });
		assert_eq!(raw.clone().ld_context(&AliasMap::new()), raw);
		assert_eq!(serde_json::json!("nope").ld_context(&AliasMap::new()), serde_json::json!("nope"));
	}
}

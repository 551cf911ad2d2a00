use astypes::{AliasMap, LD};

use crate::{CliError, Config};

/// Reads `document` and writes it back, with configured prefixes and optional canonical sorting.
pub fn normalize(
	config: &Config,
	manager: &astypes::Manager,
	document: &serde_json::Value,
	sort: bool,
	no_context: bool,
) -> Result<(), CliError> {
	let out = normalized(config, manager, document, sort, no_context)?;
	println!("{}", config.render(&out)?);
	Ok(())
}

pub fn normalized(
	config: &Config,
	manager: &astypes::Manager,
	document: &serde_json::Value,
	sort: bool,
	no_context: bool,
) -> Result<serde_json::Value, CliError> {
	let mut entity = astypes::deserialize(document, manager)?;
	if sort || config.output.sort {
		entity.canonicalize();
	}

	let read_aliases = document.get("@context")
		.map(AliasMap::from_context)
		.unwrap_or_default();
	let mut write_aliases = read_aliases.clone();
	write_aliases.merge(&config.alias_map());

	let mut out = entity.serialize(&write_aliases);
	let relabeled = write_aliases != read_aliases;
	if relabeled {
		// the original @context declares the old prefixes
		out.remove("@context");
	}
	if relabeled || (config.output.context && !no_context) {
		out = out.ld_context(&write_aliases);
	}
	Ok(serde_json::Value::Object(out))
}

#[cfg(test)]
mod test {
	use crate::Config;

	use super::normalized;

	#[test]
	fn context_is_added_unless_disabled() {
		let manager = astypes::Manager::standard();
		let raw = serde_json::json!({ "type": "Note", "content": "hi" });
		let out = normalized(&Config::default(), &manager, &raw, false, false).unwrap();
		assert!(out.get("@context").is_some());
		let out = normalized(&Config::default(), &manager, &raw, false, true).unwrap();
		assert_eq!(out, raw);
	}

	#[test]
	fn sorting_orders_lists() {
		let manager = astypes::Manager::standard();
		let raw = serde_json::json!({ "type": "Note", "to": ["https://b.example/", "https://a.example/"] });
		let out = normalized(&Config::default(), &manager, &raw, true, true).unwrap();
		assert_eq!(out["to"], serde_json::json!(["https://a.example/", "https://b.example/"]));
	}

	#[test]
	fn configured_prefixes_relabel_the_document() {
		let manager = astypes::Manager::standard();
		let mut config = Config::default();
		config.aliases.insert("https://www.w3.org/ns/activitystreams".to_string(), "as".to_string());
		let raw = serde_json::json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"type": "Note",
			"content": "hi",
		});
		let out = normalized(&config, &manager, &raw, false, true).unwrap();
		assert_eq!(out["as:content"], serde_json::json!("hi"));
		assert_eq!(out["type"], serde_json::json!("as:Note"));
		assert_eq!(out["@context"][1], serde_json::json!({ "as": "https://www.w3.org/ns/activitystreams#" }));
	}
}

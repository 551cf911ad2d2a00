use std::collections::BTreeMap;

use astypes::AliasMap;

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	/// vocabulary namespace uri -> prefix used when writing documents
	pub aliases: BTreeMap<String, String>,

	#[serde(default)]
	pub output: OutputConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent produced json
	pub pretty: bool,

	#[serde_inline_default(true)]
	/// add a @context to documents which lack one
	pub context: bool,

	#[serde(default)]
	/// sort every non-functional property into canonical order
	pub sort: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}

	/// Configured prefixes, unknown namespaces are skipped with a warning.
	pub fn alias_map(&self) -> AliasMap {
		let mut out = AliasMap::new();
		for (uri, prefix) in &self.aliases {
			if astypes::Vocabulary::from_uri(uri).is_none() {
				tracing::warn!("ignoring alias '{prefix}' for unknown vocabulary {uri}");
				continue;
			}
			out.insert(uri, prefix.as_str());
		}
		out
	}

	pub(crate) fn render(&self, value: &serde_json::Value) -> Result<String, serde_json::Error> {
		if self.output.pretty {
			serde_json::to_string_pretty(value)
		} else {
			serde_json::to_string(value)
		}
	}
}

#[cfg(test)]
mod test {
	use astypes::Vocabulary;

	use super::Config;

	#[test]
	fn defaults_fill_missing_sections() {
		let cfg: Config = toml::from_str("[output]\nsort = true\n").unwrap();
		assert!(cfg.output.sort);
		assert!(cfg.output.pretty);
		assert!(cfg.output.context);
		assert!(cfg.aliases.is_empty());
	}

	#[test]
	fn aliases_for_known_vocabularies_only() {
		let cfg: Config = toml::from_str(r#"
			[aliases]
			"https://www.w3.org/ns/activitystreams" = "as"
			"http://joinmastodon.org/ns" = "toot"
		"#).unwrap();
		let aliases = cfg.alias_map();
		assert_eq!(aliases.prefix(Vocabulary::ActivityStreams), Some("as"));
		assert_eq!(aliases.iter().count(), 1);
	}

	#[test]
	fn missing_file_falls_back_to_defaults() {
		let cfg = Config::load(Some(&std::path::PathBuf::from("/nonexistent/astypes.toml")));
		assert!(!cfg.output.sort);
	}
}

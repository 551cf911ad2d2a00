use astypes::AliasMap;

use crate::CliError;

/// Fails unless `document` serializes back exactly as it was read.
pub fn check(manager: &astypes::Manager, document: &serde_json::Value) -> Result<(), CliError> {
	let entity = astypes::deserialize(document, manager)?;
	let aliases = document.get("@context")
		.map(AliasMap::from_context)
		.unwrap_or_default();
	let back = serde_json::Value::Object(entity.serialize(&aliases));
	if let Some(path) = first_difference(document, &back, "$") {
		return Err(CliError::RoundTrip(path));
	}
	let unknown = entity.unknown().keys().filter(|k| *k != "@context").count();
	tracing::info!("{} round trips unchanged, {unknown} unknown properties", entity.type_name());
	Ok(())
}

/// Json path of the first place where `a` and `b` differ.
pub fn first_difference(a: &serde_json::Value, b: &serde_json::Value, path: &str) -> Option<String> {
	match (a, b) {
		(serde_json::Value::Object(a), serde_json::Value::Object(b)) => {
			for (k, v) in a {
				let inner = format!("{path}.{k}");
				match b.get(k) {
					None => return Some(inner),
					Some(other) => if let Some(found) = first_difference(v, other, &inner) {
						return Some(found);
					},
				}
			}
			b.keys()
				.find(|k| !a.contains_key(*k))
				.map(|k| format!("{path}.{k}"))
		},
		(serde_json::Value::Array(a), serde_json::Value::Array(b)) => {
			for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
				if let Some(found) = first_difference(x, y, &format!("{path}[{i}]")) {
					return Some(found);
				}
			}
			if a.len() != b.len() {
				return Some(format!("{path}[{}]", a.len().min(b.len())));
			}
			None
		},
		(a, b) if a == b => None,
		_ => Some(path.to_string()),
	}
}

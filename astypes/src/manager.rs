use std::collections::HashMap;

use serde_json::Value;

use crate::{vocab::{registry, type_values, TYPES}, AliasMap, Entity, Error, TypeKey};

/// Turns a JSON-LD map into a value of one concrete type.
pub type Deserializer = fn(&serde_json::Map<String, Value>, &Context) -> Result<Entity, Error>;

/// Registry of deserializers, one per concrete vocabulary type.
///
/// Nested values are read through the registry, so replacing one entry changes how that type is
/// read everywhere it appears. Build one with [`Manager::standard`] or [`Manager::builder`] and
/// share it by reference: it is never mutated after construction.
#[derive(Debug, Clone)]
pub struct Manager {
	deserializers: HashMap<TypeKey, Deserializer>,
}

impl Default for Manager {
	fn default() -> Self {
		Manager::standard()
	}
}

impl Manager {
	/// Every generated type with its own deserializer.
	pub fn standard() -> Self {
		Manager::builder().build()
	}

	pub fn builder() -> ManagerBuilder {
		ManagerBuilder {
			deserializers: registry().iter()
				.map(|r| (r.key, r.deserializer))
				.collect(),
		}
	}

	pub fn deserializer(&self, key: TypeKey) -> Option<Deserializer> {
		self.deserializers.get(&key).copied()
	}

	/// `None` when nothing is registered for `key`.
	pub(crate) fn deserialize(
		&self,
		key: TypeKey,
		map: &serde_json::Map<String, Value>,
		ctx: &Context,
	) -> Option<Result<Entity, Error>> {
		self.deserializers.get(&key).map(|f| f(map, ctx))
	}

	/// Reads `map` as whichever registered type its `type` names first.
	pub fn deserialize_any(&self, map: &serde_json::Map<String, Value>, aliases: &AliasMap) -> Result<Entity, Error> {
		let ctx = Context::new(self, aliases);
		let (names, _) = type_values(map)?;
		for name in &names {
			for key in TYPES {
				if aliases.strip(key.vocabulary, name) != key.name {
					continue;
				}
				match self.deserialize(*key, map, &ctx) {
					Some(Ok(entity)) => return Ok(entity),
					Some(Err(e)) if e.is_mismatch() => continue,
					Some(Err(e)) => return Err(e),
					None => continue,
				}
			}
		}
		Err(Error::UnknownType(names.join(", ")))
	}
}

/// Collects deserializer overrides before freezing them into a [`Manager`].
#[derive(Debug, Clone)]
pub struct ManagerBuilder {
	deserializers: HashMap<TypeKey, Deserializer>,
}

impl ManagerBuilder {
	/// Replaces the deserializer of an existing type. Keys outside the vocabulary are ignored.
	pub fn deserializer(mut self, key: TypeKey, deserializer: Deserializer) -> Self {
		match self.deserializers.get_mut(&key) {
			Some(slot) => {
				tracing::warn!("overriding deserializer for {key}");
				*slot = deserializer;
			},
			None => tracing::error!("cannot register deserializer for {key}: not a known vocabulary type"),
		}
		self
	}

	pub fn build(self) -> Manager {
		Manager { deserializers: self.deserializers }
	}
}

/// Everything a deserializer needs besides the map itself.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
	manager: &'a Manager,
	aliases: &'a AliasMap,
}

impl<'a> Context<'a> {
	pub fn new(manager: &'a Manager, aliases: &'a AliasMap) -> Self {
		Context { manager, aliases }
	}

	pub fn manager(&self) -> &'a Manager {
		self.manager
	}

	pub fn aliases(&self) -> &'a AliasMap {
		self.aliases
	}
}

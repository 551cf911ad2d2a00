//! # astypes
//! > typed ActivityStreams values, read from and written to JSON-LD
//!
//! every vocabulary type is a struct with one field per property, and every property field only
//! accepts the alternatives the vocabulary declares for it. raw documents are disambiguated
//! while deserializing: strings that are absolute URIs become IRIs, maps are tried against each
//! declared type in order, scalars against each declared literal grammar, and whatever is left
//! is kept verbatim as "unknown", so nothing is lost on the way back out.
//!
//! ```rust
//! let manager = astypes::Manager::standard();
//! let raw = serde_json::json!({
//! 	"type": "Follow",
//! 	"actor": "https://example.com/users/sally",
//! 	"object": { "type": "Person", "id": "https://example.com/users/john" },
//! });
//! let entity = astypes::deserialize(&raw, &manager).unwrap();
//! let follow = entity.as_follow().unwrap();
//! assert!(follow.actor.as_ref().unwrap().at(0).is_iri());
//! assert!(follow.object.as_ref().unwrap().at(0).is::<astypes::Person>());
//! ```

mod macros;
pub(crate) use macros::{property, vocab_type, vocabulary};

mod error;
pub use error::{Error, ResolveError, StalePosition};

mod iri;
pub use iri::Iri;

mod literal;
pub use literal::{DateTime, Duration, LangMap, LanguageTag, LinkRelation, Literal, LiteralKind, LiteralType, MediaType};

mod alias;
pub use alias::{AliasMap, Vocabulary};

mod manager;
pub use manager::{Context, Deserializer, Manager, ManagerBuilder};

mod property;
pub use property::{Accepts, Alternative, Member, Position, Property, PropertyField, PropertyList, PropertyValue};

pub mod properties;

pub mod vocab;
pub use vocab::{
	Entity, JsonLdType, ObjectOrLink, TypeKey, VocabularyType, VocabularyValue,
	activity::*, actor::*, collection::*, link::*, object::*, security::*,
};

mod relations;
pub use relations::{hierarchy, Hierarchy};

mod resolver;
pub use resolver::{Callback, TypeResolver};

mod jsonld;
pub use jsonld::LD;

/// Reads a whole JSON-LD document: aliases come from its `@context`, the concrete type from its
/// `type`. Use [`AliasMap::from_context`] with the same document to write it back identically.
pub fn deserialize(value: &serde_json::Value, manager: &Manager) -> Result<Entity, Error> {
	let map = value.as_object().ok_or_else(|| Error::NotAnObject(error::json_kind(value)))?;
	let aliases = map.get("@context")
		.map(AliasMap::from_context)
		.unwrap_or_default();
	manager.deserialize_any(map, &aliases)
}

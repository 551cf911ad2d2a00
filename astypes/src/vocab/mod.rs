pub mod activity;
pub mod actor;
pub mod collection;
pub mod link;
pub mod object;
pub mod security;

use std::{any::{Any, TypeId}, cmp::Ordering};

use serde_json::Value;

use crate::{error::json_kind, AliasMap, Alternative, Context, Deserializer, Error, Iri, PropertyValue, Vocabulary};

use activity::{
	Accept, Activity, Add, Announce, Arrive, Block, Create, Delete, Dislike, Flag, Follow, Ignore,
	IntransitiveActivity, Invite, Join, Leave, Like, Listen, Move, Offer, Question, Read, Reject,
	Remove, TentativeAccept, TentativeReject, Travel, Undo, Update, View,
};
use actor::{Application, Group, Organization, Person, Service};
use collection::{Collection, CollectionPage, OrderedCollection, OrderedCollectionPage};
use link::{Link, Mention};
use object::{
	Article, Audio, Document, Event, Image, Note, Object, Page, Place, Profile, Relationship,
	Tombstone, Video,
};
use security::PublicKey;

/// Identifies a concrete type: its vocabulary and its name there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
	pub vocabulary: Vocabulary,
	pub name: &'static str,
}

impl std::fmt::Display for TypeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}#{}", self.vocabulary.uri(), self.name)
	}
}

/// Object-safe view of a vocabulary value, what the [`crate::TypeResolver`] dispatches on.
pub trait VocabularyValue: Any {
	fn vocabulary_uri(&self) -> &str;
	fn type_name(&self) -> &str;
	fn as_any(&self) -> &dyn Any;
}

/// Implemented by every concrete vocabulary type.
pub trait VocabularyType: VocabularyValue + Alternative + Clone + std::fmt::Debug + Default + PartialEq {
	const NAME: &'static str;
	const VOCABULARY: Vocabulary;
	const KEY: TypeKey = TypeKey { vocabulary: Self::VOCABULARY, name: Self::NAME };

	/// Reads this type out of `map`, failing with [`Error::TypeMismatch`] when `type` names
	/// something else.
	fn deserialize(map: &serde_json::Map<String, Value>, ctx: &Context) -> Result<Self, Error>;

	fn serialize(&self, aliases: &AliasMap) -> serde_json::Map<String, Value>;

	/// Total order: properties in declared order (absent first), then `type`, then unknown keys.
	fn canonical_cmp(&self, other: &Self) -> Ordering;

	fn less_than(&self, other: &Self) -> bool {
		self.canonical_cmp(other).is_lt()
	}

	/// (property name, member kinds) for every property present.
	fn property_kinds(&self) -> Vec<(&'static str, Vec<&'static str>)>;

	/// Sorts every list into canonical order, recursively.
	fn canonicalize(&mut self);

	/// Keys no declared property claimed, kept for serialization.
	fn unknown(&self) -> &serde_json::Map<String, Value>;

	fn into_entity(self) -> Entity;

	/// Whether this type inherits from the type named `other`.
	fn extends(other: &str) -> bool {
		crate::hierarchy().extends(Self::NAME, other)
	}

	fn is_or_extends(other: &str) -> bool {
		crate::hierarchy().is_or_extends(Self::NAME, other)
	}

	/// Whether the type named `other` inherits from this one.
	fn is_extended_by(other: &str) -> bool {
		crate::hierarchy().is_extended_by(Self::NAME, other)
	}

	fn is_disjoint_with(other: &str) -> bool {
		crate::hierarchy().is_disjoint_with(Self::NAME, other)
	}
}

/// ActivityStreams objects and links, the range of most properties.
pub trait ObjectOrLink: VocabularyType {}

/// Recorded JSON-LD `type` values of one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct JsonLdType {
	values: Vec<TypeName>,
	array: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum TypeName {
	/// A vocabulary term, prefixed again on the way out.
	Term(String),
	/// Anything else, written back verbatim.
	Raw(String),
}

impl TypeName {
	fn as_str(&self) -> &str {
		match self {
			TypeName::Term(x) | TypeName::Raw(x) => x,
		}
	}
}

/// Every `type` value of `map`, and whether it was written as an array.
pub(crate) fn type_values(map: &serde_json::Map<String, Value>) -> Result<(Vec<&str>, bool), Error> {
	match map.get("type") {
		None => Err(Error::MissingType),
		Some(Value::String(x)) => Ok((vec![x.as_str()], false)),
		Some(Value::Array(values)) => values.iter()
			.map(|x| x.as_str().ok_or_else(|| Error::InvalidType(x.to_string())))
			.collect::<Result<Vec<_>, _>>()
			.map(|values| (values, true)),
		Some(x) => Err(Error::InvalidType(json_kind(x).to_string())),
	}
}

impl JsonLdType {
	pub(crate) fn single(name: &str) -> Self {
		JsonLdType { values: vec![TypeName::Term(name.to_string())], array: false }
	}

	pub(crate) fn read(map: &serde_json::Map<String, Value>, key: TypeKey, aliases: &AliasMap) -> Result<Self, Error> {
		let (values, array) = type_values(map)?;
		if !values.iter().any(|x| aliases.strip(key.vocabulary, x) == key.name) {
			return Err(Error::TypeMismatch { expected: key.name, found: values.join(", ") });
		}
		let prefixed = aliases.prefix(key.vocabulary).is_some();
		let values = values.into_iter()
			.map(|x| {
				let name = aliases.strip(key.vocabulary, x);
				if (name != x || !prefixed) && crate::hierarchy().contains(name) {
					TypeName::Term(name.to_string())
				} else {
					TypeName::Raw(x.to_string())
				}
			})
			.collect();
		Ok(JsonLdType { values, array })
	}

	pub(crate) fn to_json(&self, key: TypeKey, aliases: &AliasMap) -> Value {
		let render = |x: &TypeName| match x {
			TypeName::Term(name) => Value::String(aliases.key(key.vocabulary, name)),
			TypeName::Raw(raw) => Value::String(raw.clone()),
		};
		match self.values.as_slice() {
			[] => Value::String(aliases.key(key.vocabulary, key.name)),
			[single] if !self.array => render(single),
			values => Value::Array(values.iter().map(render).collect()),
		}
	}

	pub(crate) fn values_or<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
		if self.values.is_empty() {
			vec![name]
		} else {
			self.values.iter().map(TypeName::as_str).collect()
		}
	}

	pub(crate) fn add(&mut self, name: &str, extra: String) {
		if self.values.is_empty() {
			self.values.push(TypeName::Term(name.to_string()));
		}
		if !self.values.iter().any(|x| x.as_str() == extra) {
			self.values.push(TypeName::Raw(extra));
			self.array = true;
		}
	}
}

pub(crate) struct Registration {
	pub(crate) key: TypeKey,
	pub(crate) type_id: TypeId,
	pub(crate) deserializer: Deserializer,
}

impl Registration {
	fn of<T: VocabularyType>() -> Self {
		Registration {
			key: T::KEY,
			type_id: TypeId::of::<T>(),
			deserializer: deserialize_entity::<T>,
		}
	}
}

fn deserialize_entity<T: VocabularyType>(map: &serde_json::Map<String, Value>, ctx: &Context) -> Result<Entity, Error> {
	T::deserialize(map, ctx).map(VocabularyType::into_entity)
}

/// Every generated type, in declaration order.
pub(crate) fn registry() -> &'static [Registration] {
	&REGISTRY
}

crate::vocabulary! {
	object_or_link: [
		Object, Link, Activity, IntransitiveActivity,
		Collection, OrderedCollection, CollectionPage, OrderedCollectionPage,
		Accept, Add, Announce, Arrive, Block, Create, Delete, Dislike, Flag, Follow, Ignore,
		Invite, Join, Leave, Like, Listen, Move, Offer, Question, Reject, Read, Remove,
		TentativeReject, TentativeAccept, Travel, Undo, Update, View,
		Application, Group, Organization, Person, Service,
		Article, Audio, Document, Event, Image, Note, Page, Place, Profile, Relationship,
		Tombstone, Video, Mention,
	];
	other: [PublicKey];
}

impl Entity {
	pub fn type_name(&self) -> &'static str {
		self.key().name
	}

	pub fn vocabulary(&self) -> Vocabulary {
		self.key().vocabulary
	}

	fn index(&self) -> usize {
		let key = self.key();
		TYPES.iter().position(|x| *x == key).unwrap_or(usize::MAX)
	}
}

impl VocabularyValue for Entity {
	fn vocabulary_uri(&self) -> &str {
		self.vocabulary().uri()
	}

	fn type_name(&self) -> &str {
		self.key().name
	}

	fn as_any(&self) -> &dyn Any {
		self.as_value().as_any()
	}
}

#[cfg(test)]
mod test {
	use crate::{AliasMap, Context, Error, Follow, Manager, Note, VocabularyType};

	fn read<T: VocabularyType>(raw: serde_json::Value) -> Result<T, Error> {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		T::deserialize(raw.as_object().unwrap(), &Context::new(&manager, &aliases))
	}

	#[test]
	fn type_may_be_an_array() {
		let note: Note = read(serde_json::json!({
			"type": ["Note", "http://schema.org/CreativeWork"],
			"content": "hello",
		})).unwrap();
		assert_eq!(note.types(), ["Note", "http://schema.org/CreativeWork"]);
		assert_eq!(note.serialize(&AliasMap::new())["type"], serde_json::json!(["Note", "http://schema.org/CreativeWork"]));
	}

	#[test]
	fn type_mismatch_names_both_sides() {
		assert_eq!(
			read::<Note>(serde_json::json!({ "type": "Follow" })),
			Err(Error::TypeMismatch { expected: "Note", found: "Follow".to_string() }),
		);
	}

	#[test]
	fn malformed_type_values_are_errors() {
		assert_eq!(read::<Note>(serde_json::json!({ "content": "hi" })), Err(Error::MissingType));
		assert_eq!(read::<Note>(serde_json::json!({ "type": 3 })), Err(Error::InvalidType("number".to_string())));
		assert!(matches!(read::<Note>(serde_json::json!({ "type": ["Note", 3] })), Err(Error::InvalidType(_))));
	}

	#[test]
	fn prefixed_types_are_recognized_through_aliases() {
		let manager = Manager::standard();
		let aliases = AliasMap::new().with("https://www.w3.org/ns/activitystreams", "as");
		let raw = serde_json::json!({ "type": "as:Follow", "as:actor": "https://example.com/users/sally" });
		let follow = Follow::deserialize(raw.as_object().unwrap(), &Context::new(&manager, &aliases)).unwrap();
		assert!(follow.actor.is_some());
		assert_eq!(serde_json::Value::Object(follow.serialize(&aliases)), raw);
	}

	#[test]
	fn new_values_serialize_their_own_type() {
		let mut note = Note::new();
		assert_eq!(note.types(), ["Note"]);
		assert_eq!(note.serialize(&AliasMap::new()), *serde_json::json!({ "type": "Note" }).as_object().unwrap());
		note.add_type("toot:Emoji");
		assert_eq!(note.types(), ["Note", "toot:Emoji"]);
	}

	#[test]
	fn unknown_keys_survive_and_never_shadow_known_ones() {
		let raw = serde_json::json!({
			"type": "Note",
			"@context": "https://www.w3.org/ns/activitystreams",
			"conversation": "tag:example.com,2024:objectId=1",
			"content": "hello",
		});
		let mut note: Note = read(raw.clone()).unwrap();
		assert_eq!(note.unknown().len(), 2);
		assert_eq!(serde_json::Value::Object(note.serialize(&AliasMap::new())), raw);
		note.unknown_mut().insert("content".to_string(), serde_json::json!("shadow"));
		assert_eq!(note.serialize(&AliasMap::new())["content"], serde_json::json!("hello"));
	}

	#[test]
	fn relations_are_available_on_types() {
		assert!(Follow::extends("Activity"));
		assert!(Follow::extends("Object"));
		assert!(!Follow::extends("Follow"));
		assert!(Follow::is_or_extends("Follow"));
		assert!(Note::is_disjoint_with("Link"));
		assert!(crate::Object::is_extended_by("Note"));
	}
}

use std::{cmp::Ordering, marker::PhantomData};

use serde_json::Value;

use crate::{AliasMap, Context, Entity, Error, Iri};

use super::{Accepts, Alternative, Member, Property, PropertyField};

/// Value of a functional property: at most one member, drawn from the alternatives of `P`.
///
/// Setting any member replaces whatever was there, so a value is never both an IRI and a
/// literal, or two types at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue<P> {
	member: Member,
	property: PhantomData<P>,
}

impl<P> Default for PropertyValue<P> {
	fn default() -> Self {
		PropertyValue { member: Member::Empty, property: PhantomData }
	}
}

impl<P: Property> PropertyValue<P> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with<T: Alternative>(value: T) -> Self where P: Accepts<T> {
		Self::from_member(value.into_member())
	}

	pub(crate) fn from_member(member: Member) -> Self {
		PropertyValue { member, property: PhantomData }
	}

	pub fn name(&self) -> &'static str {
		P::NAME
	}

	pub fn member(&self) -> &Member {
		&self.member
	}

	pub fn into_member(self) -> Member {
		self.member
	}

	pub fn is_empty(&self) -> bool {
		matches!(self.member, Member::Empty)
	}

	/// True when a declared alternative or an IRI is set.
	pub fn has_any(&self) -> bool {
		!matches!(self.member, Member::Empty | Member::Unknown(_))
	}

	pub fn is<T: Alternative>(&self) -> bool {
		T::from_member(&self.member).is_some()
	}

	pub fn get<T: Alternative>(&self) -> Option<&T> {
		T::from_member(&self.member)
	}

	pub fn get_mut<T: Alternative>(&mut self) -> Option<&mut T> {
		T::from_member_mut(&mut self.member)
	}

	pub fn set<T: Alternative>(&mut self, value: T) where P: Accepts<T> {
		self.member = value.into_member();
	}

	pub fn is_iri(&self) -> bool {
		matches!(self.member, Member::Iri(_))
	}

	pub fn iri(&self) -> Option<&Iri> {
		match &self.member {
			Member::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self.member, Member::Unknown(_))
	}

	pub fn unknown(&self) -> Option<&Value> {
		match &self.member {
			Member::Unknown(x) => Some(x),
			_ => None,
		}
	}

	/// Stores a raw value as the unknown member.
	pub fn set_unknown(&mut self, value: Value) {
		self.member = Member::Unknown(value);
	}

	/// The structured member, whatever its concrete type.
	pub fn get_type(&self) -> Option<&Entity> {
		match &self.member {
			Member::Type(x) => Some(x),
			_ => None,
		}
	}

	/// Runtime counterpart of [`PropertyValue::set`], for values whose type is only known as an
	/// [`Entity`]. Fails when the entity's type is not a declared alternative.
	pub fn set_type(&mut self, entity: Entity) -> Result<(), Error> {
		if !P::TYPES.contains(&entity.key()) {
			return Err(Error::NotAccepted { property: P::NAME, found: entity.type_name() });
		}
		self.member = Member::Type(Box::new(entity));
		Ok(())
	}

	pub fn clear(&mut self) {
		self.member = Member::Empty;
	}

	pub fn kind_index(&self) -> i32 {
		self.member.kind_index::<P>()
	}

	pub fn less_than(&self, other: &Self) -> bool {
		self.member.canonical_cmp::<P>(&other.member).is_lt()
	}

	/// Disambiguates one raw JSON value into this property's alternatives.
	pub fn deserialize_value(raw: &Value, ctx: &Context) -> Result<Self, Error> {
		Member::deserialize::<P>(raw, ctx).map(Self::from_member)
	}

	/// `None` only for an empty value.
	pub fn serialize_value(&self, aliases: &AliasMap) -> Option<Value> {
		self.member.to_json(aliases)
	}
}

impl<P: Property> PropertyField for PropertyValue<P> {
	fn name(&self) -> &'static str {
		P::NAME
	}

	fn deserialize_claiming(
		map: &serde_json::Map<String, Value>,
		ctx: &Context,
		claimed: &mut Vec<String>,
	) -> Result<Option<Self>, Error> {
		let key = P::key(ctx.aliases());
		let Some(raw) = map.get(&key) else {
			return Ok(None);
		};
		let value = Self::deserialize_value(raw, ctx)?;
		claimed.push(key);
		Ok(Some(value))
	}

	fn serialize_into(&self, out: &mut serde_json::Map<String, Value>, aliases: &AliasMap) {
		if let Some(value) = self.serialize_value(aliases) {
			out.insert(P::key(aliases), value);
		}
	}

	fn canonical_cmp(&self, other: &Self) -> Ordering {
		self.member.canonical_cmp::<P>(&other.member)
	}

	fn kinds(&self) -> Vec<&'static str> {
		vec![self.member.kind_name()]
	}

	fn canonicalize(&mut self) {
		self.member.canonicalize();
	}
}

#[cfg(test)]
mod test {
	use crate::{
		properties::{ClosedProperty, DeletedProperty, IconProperty, WidthProperty},
		AliasMap, Context, Entity, Error, Image, Iri, Link, Manager, Member, Mention, Note, PropertyValue,
	};

	fn with_context<T>(f: impl FnOnce(&Context) -> T) -> T {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		f(&Context::new(&manager, &aliases))
	}

	#[test]
	fn strings_parsing_as_uris_become_iris() {
		let value = with_context(|ctx| PropertyValue::<DeletedProperty>::deserialize_value(
			&serde_json::json!("https://example.com/deleted"), ctx
		)).unwrap();
		assert!(value.is_iri());
		assert!(!value.is::<crate::DateTime>());
		assert_eq!(value.iri().map(Iri::as_str), Some("https://example.com/deleted"));
	}

	#[test]
	fn uris_with_out_of_range_ports_are_still_iris() {
		let value = with_context(|ctx| PropertyValue::<crate::properties::NameProperty>::deserialize_value(
			&serde_json::json!("http://example.com:99999/x"), ctx
		)).unwrap();
		assert!(value.is_iri());
		assert!(!value.is::<String>());
	}

	#[test]
	fn iris_win_over_string_literals() {
		let value = with_context(|ctx| PropertyValue::<crate::properties::NameProperty>::deserialize_value(
			&serde_json::json!("urn:example:name"), ctx
		)).unwrap();
		assert!(value.is_iri());
		assert!(!value.is::<String>());
	}

	#[test]
	fn literals_are_matched_by_grammar() {
		let value = with_context(|ctx| PropertyValue::<DeletedProperty>::deserialize_value(
			&serde_json::json!("2024-06-04T17:09:20Z"), ctx
		)).unwrap();
		assert!(value.is::<crate::DateTime>());
		assert!(value.has_any());
	}

	#[test]
	fn unmatched_values_are_kept_verbatim() {
		let value = with_context(|ctx| PropertyValue::<DeletedProperty>::deserialize_value(
			&serde_json::json!("not a date"), ctx
		)).unwrap();
		assert!(value.is_unknown());
		assert!(!value.has_any());
		assert_eq!(value.unknown(), Some(&serde_json::json!("not a date")));
		assert_eq!(value.serialize_value(&AliasMap::new()), Some(serde_json::json!("not a date")));
	}

	#[test]
	fn maps_pick_the_first_alternative_naming_their_type() {
		let value = with_context(|ctx| PropertyValue::<IconProperty>::deserialize_value(
			&serde_json::json!({ "type": "Mention", "href": "https://example.com/users/sally" }), ctx
		)).unwrap();
		assert!(value.is::<Mention>());
		assert!(!value.is::<Link>());
		assert!(!value.is::<Image>());
	}

	#[test]
	fn declaration_order_decides_between_fitting_alternatives() {
		let raw = serde_json::json!({ "type": ["Mention", "Image"], "url": "https://example.com/icon.png" });
		for _ in 0..5 {
			let value = with_context(|ctx| PropertyValue::<IconProperty>::deserialize_value(&raw, ctx)).unwrap();
			assert!(value.is::<Image>());
			assert!(!value.is::<Mention>());
		}
	}

	#[test]
	fn maps_matching_no_alternative_are_unknown() {
		let raw = serde_json::json!({ "type": "Note", "content": "not an icon" });
		let value = with_context(|ctx| PropertyValue::<IconProperty>::deserialize_value(&raw, ctx)).unwrap();
		assert!(value.is_unknown());
		assert_eq!(value.unknown(), Some(&raw));
	}

	#[test]
	fn maps_without_type_are_an_error() {
		let res = with_context(|ctx| PropertyValue::<IconProperty>::deserialize_value(
			&serde_json::json!({ "url": "https://example.com/icon.png" }), ctx
		));
		assert_eq!(res, Err(Error::MissingType));
	}

	#[test]
	fn setting_a_member_clears_the_others() {
		let mut value = PropertyValue::<ClosedProperty>::new();
		assert!(value.is_empty());
		value.set(true);
		assert!(value.is::<bool>());
		value.set(Iri::parse("https://example.com/closed").unwrap());
		assert!(value.is_iri());
		assert!(!value.is::<bool>());
		value.set(Note::default());
		assert!(value.is::<Note>());
		assert!(!value.is_iri());
		value.clear();
		assert!(!value.has_any());
		assert_eq!(value.member(), &Member::Empty);
		assert_eq!(value.serialize_value(&AliasMap::new()), None);
	}

	#[test]
	fn set_type_checks_declared_alternatives() {
		let mut value = PropertyValue::<IconProperty>::new();
		assert!(value.set_type(Entity::Image(Image::default())).is_ok());
		assert!(value.get_type().is_some_and(Entity::is_image));
		assert_eq!(
			value.set_type(Entity::Note(Note::default())),
			Err(Error::NotAccepted { property: "icon", found: "Note" }),
		);
		assert!(value.is::<Image>());
	}

	#[test]
	fn kind_index_ranks_unset_then_iri_then_alternatives() {
		let empty = PropertyValue::<WidthProperty>::new();
		let iri = PropertyValue::<WidthProperty>::with(Iri::parse("https://example.com/w").unwrap());
		let number = PropertyValue::<WidthProperty>::with(100u64);
		assert!(empty.kind_index() < iri.kind_index());
		assert!(iri.kind_index() < number.kind_index());
		assert!(empty.less_than(&iri));
		assert!(iri.less_than(&number));
		assert!(!number.less_than(&number));
	}

	#[test]
	fn get_mut_edits_in_place() {
		let mut value = PropertyValue::<WidthProperty>::with(100u64);
		if let Some(width) = value.get_mut::<u64>() {
			*width += 1;
		}
		assert_eq!(value.get::<u64>(), Some(&101));
	}
}

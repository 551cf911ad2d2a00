mod value;
pub use value::PropertyValue;

mod list;
pub use list::{Position, PropertyList};

use std::cmp::Ordering;

use serde_json::Value;

use crate::{AliasMap, Context, Entity, Error, Iri, Literal, LiteralKind, TypeKey, Vocabulary};

/// Compile-time description of one vocabulary property.
///
/// Properties are zero-sized markers: [`PropertyValue`] and [`PropertyList`] take them as type
/// parameter, so that each field of a vocabulary type is a distinct Rust type knowing its own
/// name and alternatives.
pub trait Property: 'static {
	const NAME: &'static str;
	const VOCABULARY: Vocabulary;
	/// Structured alternatives, tried in this order when a map shows up.
	const TYPES: &'static [TypeKey];
	/// Literal alternatives, tried in this order after the structured ones.
	const LITERALS: &'static [LiteralKind];

	fn key(aliases: &AliasMap) -> String {
		aliases.key(Self::VOCABULARY, Self::NAME)
	}

	/// Key holding the language map variant, such as `contentMap`.
	fn map_key(aliases: &AliasMap) -> String {
		aliases.key(Self::VOCABULARY, &format!("{}Map", Self::NAME))
	}

	fn has_language_map() -> bool {
		Self::LITERALS.contains(&LiteralKind::LangString)
	}
}

/// Property `Self` may hold a `T`.
pub trait Accepts<T>: Property {}

/// Anything that can be the active member of a property value.
pub trait Alternative: Sized + 'static {
	fn into_member(self) -> Member;
	fn from_member(member: &Member) -> Option<&Self>;
	fn from_member_mut(member: &mut Member) -> Option<&mut Self>;
}

impl Alternative for Iri {
	fn into_member(self) -> Member {
		Member::Iri(self)
	}

	fn from_member(member: &Member) -> Option<&Self> {
		match member {
			Member::Iri(x) => Some(x),
			_ => None,
		}
	}

	fn from_member_mut(member: &mut Member) -> Option<&mut Self> {
		match member {
			Member::Iri(x) => Some(x),
			_ => None,
		}
	}
}

/// The single active member of a property value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Member {
	#[default]
	Empty,
	Iri(Iri),
	Type(Box<Entity>),
	Literal(Literal),
	/// Raw value that matched no alternative, kept verbatim.
	Unknown(Value),
}

impl Member {
	/// Disambiguates `raw` against the alternatives of `P`.
	pub(crate) fn deserialize<P: Property>(raw: &Value, ctx: &Context) -> Result<Self, Error> {
		if let Value::String(text) = raw {
			if let Some(iri) = Iri::parse(text) {
				return Ok(Member::Iri(iri));
			}
		}

		if let Value::Object(map) = raw {
			for key in P::TYPES {
				match ctx.manager().deserialize(*key, map, ctx) {
					Some(Ok(entity)) => return Ok(Member::Type(Box::new(entity))),
					Some(Err(e)) if e.is_mismatch() => continue,
					Some(Err(e)) => return Err(e),
					None => tracing::debug!("no deserializer registered for {key}, skipping alternative"),
				}
			}
		}

		for kind in P::LITERALS {
			// language maps are read from their own `<name>Map` key
			if *kind == LiteralKind::LangString {
				continue;
			}
			if let Some(literal) = kind.parse(raw) {
				return Ok(Member::Literal(literal));
			}
		}

		tracing::trace!("value of '{}' matched no alternative, keeping it verbatim", P::NAME);
		Ok(Member::Unknown(raw.clone()))
	}

	pub fn to_json(&self, aliases: &AliasMap) -> Option<Value> {
		match self {
			Member::Empty => None,
			Member::Iri(x) => Some(Value::String(x.as_str().to_string())),
			Member::Type(x) => Some(Value::Object(x.serialize(aliases))),
			Member::Literal(x) => Some(x.to_json()),
			Member::Unknown(x) => Some(x.clone()),
		}
	}

	pub fn kind_name(&self) -> &'static str {
		match self {
			Member::Empty => "empty",
			Member::Iri(_) => "IRI",
			Member::Type(x) => x.type_name(),
			Member::Literal(x) => x.kind().name(),
			Member::Unknown(_) => "unknown",
		}
	}

	/// Rank of the active member among the alternatives of `P`.
	///
	/// Empty and unknown values rank lowest, then IRIs, then structured alternatives and
	/// literals in declaration order. Only relative order is meaningful.
	pub(crate) fn kind_index<P: Property>(&self) -> i32 {
		let position = match self {
			Member::Empty | Member::Unknown(_) => return -2,
			Member::Iri(_) => return -1,
			Member::Type(x) => P::TYPES.iter().position(|k| *k == x.key()),
			Member::Literal(x) => P::LITERALS.iter()
				.position(|k| *k == x.kind())
				.map(|i| P::TYPES.len() + i),
		};
		position
			.and_then(|i| i32::try_from(i).ok())
			.unwrap_or(i32::MAX)
	}

	pub(crate) fn canonical_cmp<P: Property>(&self, other: &Self) -> Ordering {
		self.kind_index::<P>()
			.cmp(&other.kind_index::<P>())
			.then_with(|| match (self, other) {
				(Member::Empty, Member::Empty) => Ordering::Equal,
				(Member::Empty, _) => Ordering::Less,
				(_, Member::Empty) => Ordering::Greater,
				(Member::Unknown(a), Member::Unknown(b)) => a.to_string().cmp(&b.to_string()),
				(Member::Iri(a), Member::Iri(b)) => a.cmp(b),
				(Member::Type(a), Member::Type(b)) => a.canonical_cmp(b),
				(Member::Literal(a), Member::Literal(b)) => a.canonical_cmp(b),
				_ => Ordering::Equal,
			})
	}

	pub(crate) fn canonicalize(&mut self) {
		if let Member::Type(x) = self {
			x.canonicalize();
		}
	}
}

/// A field of a vocabulary type: either one [`PropertyValue`] or a [`PropertyList`].
pub trait PropertyField: Sized {
	fn name(&self) -> &'static str;

	/// Reads this property out of `map`, `None` when its key is absent.
	fn deserialize(map: &serde_json::Map<String, Value>, ctx: &Context) -> Result<Option<Self>, Error> {
		Self::deserialize_claiming(map, ctx, &mut Vec::new())
	}

	/// As [`PropertyField::deserialize`], recording every key that was consumed.
	fn deserialize_claiming(
		map: &serde_json::Map<String, Value>,
		ctx: &Context,
		claimed: &mut Vec<String>,
	) -> Result<Option<Self>, Error>;

	fn serialize_into(&self, out: &mut serde_json::Map<String, Value>, aliases: &AliasMap);

	fn canonical_cmp(&self, other: &Self) -> Ordering;

	/// Kind names of the active members, in order.
	fn kinds(&self) -> Vec<&'static str>;

	/// Sorts lists into canonical order, recursing into nested types.
	fn canonicalize(&mut self);
}

/// Reads the fields of one vocabulary type, tracking which keys were claimed.
pub(crate) struct Fields<'a> {
	map: &'a serde_json::Map<String, Value>,
	ctx: Context<'a>,
	claimed: Vec<String>,
}

impl<'a> Fields<'a> {
	pub(crate) fn new(map: &'a serde_json::Map<String, Value>, ctx: &Context<'a>) -> Self {
		Fields { map, ctx: *ctx, claimed: Vec::new() }
	}

	pub(crate) fn take<F: PropertyField>(&mut self) -> Result<Option<F>, Error> {
		F::deserialize_claiming(self.map, &self.ctx, &mut self.claimed)
	}

	/// Every key nobody claimed, `type` excluded.
	pub(crate) fn into_unknown(self) -> serde_json::Map<String, Value> {
		self.map.iter()
			.filter(|(k, _)| k.as_str() != "type" && !self.claimed.contains(k))
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}
}

/// Absent fields sort before present ones.
pub(crate) fn compare_fields<F: PropertyField>(a: &Option<F>, b: &Option<F>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => a.canonical_cmp(b),
	}
}

pub(crate) fn compare_unknown(a: &serde_json::Map<String, Value>, b: &serde_json::Map<String, Value>) -> Ordering {
	a.iter()
		.map(|(k, v)| (k, v.to_string()))
		.cmp(b.iter().map(|(k, v)| (k, v.to_string())))
}

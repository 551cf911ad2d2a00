use std::{cmp::Ordering, collections::BTreeMap, sync::atomic::{AtomicU64, Ordering as AtomicOrdering}};

use serde_json::Value;

use crate::{AliasMap, Context, Entity, Error, LangMap, Literal, LiteralKind, StalePosition};

use super::{Accepts, Alternative, Member, Property, PropertyField, PropertyValue};

/// Value of a non-functional property: an ordered sequence of [`PropertyValue`]s.
///
/// Positions handed out by [`PropertyList::begin`] and friends remember which mutations they
/// have seen. Appending only invalidates walking backwards; any other mutation invalidates every
/// outstanding position. Positions are only valid on the list that issued them.
#[derive(Debug)]
pub struct PropertyList<P> {
	values: Vec<PropertyValue<P>>,
	owner: u64,
	layout: u64,
	tail: u64,
}

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

fn next_owner() -> u64 {
	NEXT_OWNER.fetch_add(1, AtomicOrdering::Relaxed)
}

impl<P> Default for PropertyList<P> {
	fn default() -> Self {
		PropertyList { values: Vec::new(), owner: next_owner(), layout: 0, tail: 0 }
	}
}

// clones hand out their own positions
impl<P: Clone> Clone for PropertyList<P> {
	fn clone(&self) -> Self {
		PropertyList {
			values: self.values.clone(),
			owner: next_owner(),
			layout: self.layout,
			tail: self.tail,
		}
	}
}

impl<P: PartialEq> PartialEq for PropertyList<P> {
	fn eq(&self, other: &Self) -> bool {
		self.values == other.values
	}
}

/// A cursor into a [`PropertyList`]: the index of one value, or one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
	index: usize,
	owner: u64,
	layout: u64,
	tail: u64,
}

impl Position {
	pub fn index(&self) -> usize {
		self.index
	}
}

impl<P: Property> PropertyList<P> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(&self) -> &'static str {
		P::NAME
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// # Panics
	/// if `index` is out of range
	pub fn at(&self, index: usize) -> &PropertyValue<P> {
		&self.values[index]
	}

	pub fn get(&self, index: usize) -> Option<&PropertyValue<P>> {
		self.values.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut PropertyValue<P>> {
		self.values.get_mut(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PropertyValue<P>> {
		self.values.iter()
	}

	pub fn first(&self) -> Option<&PropertyValue<P>> {
		self.values.first()
	}

	fn position(&self, index: usize) -> Position {
		Position { index, owner: self.owner, layout: self.layout, tail: self.tail }
	}

	pub fn begin(&self) -> Position {
		self.position(0)
	}

	/// One past the last value.
	pub fn end(&self) -> Position {
		self.position(self.values.len())
	}

	pub fn is_end(&self, position: Position) -> bool {
		position.index >= self.values.len()
	}

	fn check(&self, position: Position) -> Result<(), StalePosition> {
		if position.owner != self.owner || position.layout != self.layout {
			return Err(StalePosition(position.index));
		}
		Ok(())
	}

	/// Value at `position`, `None` at the end.
	pub fn value(&self, position: Position) -> Result<Option<&PropertyValue<P>>, StalePosition> {
		self.check(position)?;
		Ok(self.values.get(position.index))
	}

	/// Moves forward, stopping at the end.
	pub fn next(&self, position: Position) -> Result<Position, StalePosition> {
		self.check(position)?;
		Ok(Position {
			index: (position.index + 1).min(self.values.len()),
			..position
		})
	}

	/// Moves backward, `None` when already at the first value.
	pub fn prev(&self, position: Position) -> Result<Option<Position>, StalePosition> {
		self.check(position)?;
		if position.tail != self.tail {
			return Err(StalePosition(position.index));
		}
		Ok(position.index.checked_sub(1).map(|index| Position { index, ..position }))
	}

	fn grown(&mut self) {
		self.tail += 1;
	}

	fn reshaped(&mut self) {
		self.layout += 1;
		self.tail += 1;
	}

	pub fn append<T: Alternative>(&mut self, value: T) where P: Accepts<T> {
		self.push(PropertyValue::with(value));
	}

	pub fn prepend<T: Alternative>(&mut self, value: T) where P: Accepts<T> {
		self.insert_value(0, PropertyValue::with(value));
	}

	/// # Panics
	/// if `index > len`
	pub fn insert<T: Alternative>(&mut self, index: usize, value: T) where P: Accepts<T> {
		self.insert_value(index, PropertyValue::with(value));
	}

	/// # Panics
	/// if `index` is out of range
	pub fn set<T: Alternative>(&mut self, index: usize, value: T) where P: Accepts<T> {
		self.set_value(index, PropertyValue::with(value));
	}

	/// Appends an entity whose type is only known at runtime.
	pub fn append_type(&mut self, entity: Entity) -> Result<(), Error> {
		let mut value = PropertyValue::new();
		value.set_type(entity)?;
		self.push(value);
		Ok(())
	}

	pub fn push(&mut self, value: PropertyValue<P>) {
		self.values.push(value);
		self.grown();
	}

	/// # Panics
	/// if `index > len`
	pub fn insert_value(&mut self, index: usize, value: PropertyValue<P>) {
		self.values.insert(index, value);
		self.reshaped();
	}

	/// # Panics
	/// if `index` is out of range
	pub fn set_value(&mut self, index: usize, value: PropertyValue<P>) {
		self.values[index] = value;
		self.reshaped();
	}

	/// # Panics
	/// if `index` is out of range
	pub fn remove(&mut self, index: usize) -> PropertyValue<P> {
		let out = self.values.remove(index);
		self.reshaped();
		out
	}

	/// # Panics
	/// if either index is out of range
	pub fn swap(&mut self, a: usize, b: usize) {
		self.values.swap(a, b);
		self.reshaped();
	}

	pub fn clear(&mut self) {
		self.values.clear();
		self.reshaped();
	}

	/// Whether the value at `a` sorts before the one at `b`.
	pub fn less(&self, a: usize, b: usize) -> bool {
		self.values[a].less_than(&self.values[b])
	}

	/// Stable sort into canonical order.
	pub fn sort(&mut self) {
		self.values.sort_by(PropertyField::canonical_cmp);
		self.reshaped();
	}

	pub fn less_than(&self, other: &Self) -> bool {
		PropertyField::canonical_cmp(self, other).is_lt()
	}
}

impl<'a, P: Property> IntoIterator for &'a PropertyList<P> {
	type Item = &'a PropertyValue<P>;
	type IntoIter = std::slice::Iter<'a, PropertyValue<P>>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

impl<P: Property> PropertyField for PropertyList<P> {
	fn name(&self) -> &'static str {
		P::NAME
	}

	fn deserialize_claiming(
		map: &serde_json::Map<String, Value>,
		ctx: &Context,
		claimed: &mut Vec<String>,
	) -> Result<Option<Self>, Error> {
		let key = P::key(ctx.aliases());
		let raw = map.get(&key);

		let mut languages = None;
		if P::has_language_map() {
			let map_key = P::map_key(ctx.aliases());
			if let Some(literal) = map.get(&map_key).and_then(|x| LiteralKind::LangString.parse(x)) {
				languages = Some(literal);
				claimed.push(map_key);
			}
		}

		if raw.is_none() && languages.is_none() {
			return Ok(None);
		}

		let mut list = Self::new();
		if let Some(raw) = raw {
			match raw {
				Value::Array(items) => {
					for item in items {
						list.values.push(PropertyValue::deserialize_value(item, ctx)?);
					}
				},
				item => list.values.push(PropertyValue::deserialize_value(item, ctx)?),
			}
			claimed.push(key);
		}
		if let Some(literal) = languages {
			list.values.push(PropertyValue::from_member(Member::Literal(literal)));
		}
		Ok(Some(list))
	}

	fn serialize_into(&self, out: &mut serde_json::Map<String, Value>, aliases: &AliasMap) {
		let mut plain = Vec::with_capacity(self.values.len());
		let mut languages: Option<BTreeMap<String, String>> = None;
		for value in &self.values {
			match value.member() {
				Member::Literal(Literal::LangString(x)) =>
					languages.get_or_insert_with(BTreeMap::new).extend(x.0.clone()),
				_ => plain.extend(value.serialize_value(aliases)),
			}
		}

		let has_languages = languages.is_some();
		if let Some(languages) = languages {
			out.insert(P::map_key(aliases), LangMap(languages).to_json());
		}
		match plain.len() {
			0 if has_languages => {},
			1 => {
				if let Some(single) = plain.pop() {
					out.insert(P::key(aliases), single);
				}
			},
			_ => {
				out.insert(P::key(aliases), Value::Array(plain));
			},
		}
	}

	fn canonical_cmp(&self, other: &Self) -> Ordering {
		self.values.iter()
			.zip(other.values.iter())
			.map(|(a, b)| a.canonical_cmp(b))
			.find(|x| x.is_ne())
			.unwrap_or_else(|| self.values.len().cmp(&other.values.len()))
	}

	fn kinds(&self) -> Vec<&'static str> {
		self.values.iter().map(|x| x.member().kind_name()).collect()
	}

	fn canonicalize(&mut self) {
		for value in self.values.iter_mut() {
			value.canonicalize();
		}
		self.sort();
	}
}

#[cfg(test)]
mod test {
	use crate::{
		properties::{ContentProperty, IconProperty, NameProperty, ToProperty},
		AliasMap, Context, Image, Iri, LangMap, Manager, PropertyField, PropertyList, StalePosition,
	};

	fn iri(text: &str) -> Iri {
		Iri::parse(text).unwrap()
	}

	fn names(list: &PropertyList<NameProperty>) -> Vec<&str> {
		list.iter().filter_map(|x| x.get::<String>()).map(String::as_str).collect()
	}

	#[test]
	fn positions_match_indexes_after_mutations() {
		let mut list = PropertyList::<NameProperty>::new();
		list.append("b".to_string());
		list.append("d".to_string());
		list.prepend("a".to_string());
		list.insert(2, "c".to_string());
		assert_eq!(names(&list), ["a", "b", "c", "d"]);
		list.swap(0, 3);
		assert_eq!(names(&list), ["d", "b", "c", "a"]);
		let removed = list.remove(1);
		assert_eq!(removed.get::<String>().map(String::as_str), Some("b"));
		list.set(0, "z".to_string());
		assert_eq!(names(&list), ["z", "c", "a"]);
		assert_eq!(list.len(), 3);

		let mut position = list.begin();
		let mut index = 0;
		while !list.is_end(position) {
			assert_eq!(position.index(), index);
			assert_eq!(list.value(position).unwrap(), Some(list.at(index)));
			position = list.next(position).unwrap();
			index += 1;
		}
		assert_eq!(position, list.end());
		assert_eq!(list.next(position).unwrap(), list.end());
	}

	#[test]
	fn walking_backwards_from_the_end() {
		let mut list = PropertyList::<NameProperty>::new();
		list.append("a".to_string());
		list.append("b".to_string());
		let mut seen = Vec::new();
		let mut position = list.end();
		while let Some(prev) = list.prev(position).unwrap() {
			seen.push(list.value(prev).unwrap().and_then(|x| x.get::<String>()).cloned());
			position = prev;
		}
		assert_eq!(seen, [Some("b".to_string()), Some("a".to_string())]);
	}

	#[test]
	fn appending_keeps_forward_positions_valid() {
		let mut list = PropertyList::<NameProperty>::new();
		list.append("a".to_string());
		let position = list.begin();
		list.append("b".to_string());
		let next = list.next(position).unwrap();
		assert_eq!(list.value(next).unwrap().and_then(|x| x.get::<String>()).map(String::as_str), Some("b"));
		assert_eq!(list.prev(next), Err(StalePosition(1)));
	}

	#[test]
	fn reshaping_invalidates_positions() {
		let mut list = PropertyList::<NameProperty>::new();
		list.append("a".to_string());
		list.append("b".to_string());
		let position = list.next(list.begin()).unwrap();
		list.prepend("z".to_string());
		assert_eq!(list.value(position), Err(StalePosition(1)));
		assert_eq!(list.next(position), Err(StalePosition(1)));
		let position = list.begin();
		list.swap(0, 1);
		assert!(list.value(position).is_err());
	}

	#[test]
	fn positions_of_other_lists_are_rejected() {
		let mut a = PropertyList::<NameProperty>::new();
		let mut b = PropertyList::<NameProperty>::new();
		a.append("a".to_string());
		b.append("b".to_string());
		let position = a.begin();
		assert_eq!(b.value(position), Err(StalePosition(0)));
		assert_eq!(b.next(position), Err(StalePosition(0)));
		assert_eq!(b.prev(a.end()), Err(StalePosition(1)));
		let c = a.clone();
		assert_eq!(c, a);
		assert!(c.value(position).is_err());
		assert!(a.value(position).is_ok());
	}

	#[test]
	#[should_panic]
	fn at_panics_out_of_range() {
		let list = PropertyList::<NameProperty>::new();
		let _ = list.at(0);
	}

	#[test]
	fn get_is_checked() {
		let mut list = PropertyList::<NameProperty>::new();
		assert!(list.get(0).is_none());
		list.append("a".to_string());
		assert!(list.get(0).is_some());
	}

	#[test]
	fn single_values_serialize_bare() {
		let aliases = AliasMap::new();
		let mut list = PropertyList::<ToProperty>::new();
		list.append(iri("https://example.com/users/sally"));
		let mut out = serde_json::Map::new();
		list.serialize_into(&mut out, &aliases);
		assert_eq!(serde_json::Value::Object(out), serde_json::json!({ "to": "https://example.com/users/sally" }));

		list.append(iri("https://example.com/users/john"));
		let mut out = serde_json::Map::new();
		list.serialize_into(&mut out, &aliases);
		assert_eq!(
			serde_json::Value::Object(out),
			serde_json::json!({ "to": ["https://example.com/users/sally", "https://example.com/users/john"] }),
		);
	}

	#[test]
	fn language_maps_have_their_own_key() {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		let ctx = Context::new(&manager, &aliases);
		let raw = serde_json::json!({
			"content": "<p>hello</p>",
			"contentMap": { "en": "<p>hello</p>", "it": "<p>ciao</p>" },
		});
		let list = PropertyList::<ContentProperty>::deserialize(raw.as_object().unwrap(), &ctx)
			.unwrap()
			.unwrap();
		assert_eq!(list.len(), 2);
		assert_eq!(list.at(0).get::<String>().map(String::as_str), Some("<p>hello</p>"));
		assert_eq!(list.at(1).get::<LangMap>().and_then(|x| x.get("it")), Some("<p>ciao</p>"));

		let mut out = serde_json::Map::new();
		list.serialize_into(&mut out, &aliases);
		assert_eq!(serde_json::Value::Object(out), raw);
	}

	#[test]
	fn lists_read_bare_values_and_arrays() {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		let ctx = Context::new(&manager, &aliases);
		let raw = serde_json::json!({
			"icon": [
				"https://example.com/icon.png",
				{ "type": "Image", "url": "https://example.com/big.png" },
			],
			"to": "https://example.com/users/sally",
		});
		let map = raw.as_object().unwrap();
		let icons = PropertyList::<IconProperty>::deserialize(map, &ctx).unwrap().unwrap();
		assert!(icons.at(0).is_iri());
		assert!(icons.at(1).is::<Image>());
		let to = PropertyList::<ToProperty>::deserialize(map, &ctx).unwrap().unwrap();
		assert_eq!(to.len(), 1);
		assert!(PropertyList::<NameProperty>::deserialize(map, &ctx).unwrap().is_none());
	}

	#[test]
	fn sorting_is_canonical_and_lists_compare_lexicographically() {
		let mut list = PropertyList::<NameProperty>::new();
		list.append("b".to_string());
		list.append(iri("https://example.com/name"));
		list.append("a".to_string());
		assert!(list.less(1, 0));
		list.sort();
		assert!(list.at(0).is_iri());
		assert_eq!(names(&list), ["a", "b"]);

		let mut shorter = list.clone();
		shorter.remove(2);
		assert!(shorter.less_than(&list));
		assert!(!list.less_than(&shorter));
		assert!(!list.less_than(&list.clone()));
	}
}

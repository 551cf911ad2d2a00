crate::vocab_type! {
	/// Root of every ActivityStreams object that is not a link.
	pub struct Object in ActivityStreams { object }

	/// Any kind of multi-paragraph written work.
	pub struct Article in ActivityStreams { object }

	pub struct Audio in ActivityStreams { object }

	/// A document of any kind.
	pub struct Document in ActivityStreams { object }

	pub struct Event in ActivityStreams { object }

	pub struct Image in ActivityStreams { object }

	/// Short written work, typically a single paragraph.
	pub struct Note in ActivityStreams { object }

	/// A web page.
	pub struct Page in ActivityStreams { object }

	/// A logical or physical location.
	pub struct Place in ActivityStreams { object, place }

	/// Content about another object, the one in `describes`.
	pub struct Profile in ActivityStreams { object, profile }

	/// Relation between `subject` and `object`, qualified by `relationship`.
	pub struct Relationship in ActivityStreams { object, relationship, transitive }

	/// Placeholder for an object that was deleted.
	pub struct Tombstone in ActivityStreams { object, tombstone }

	pub struct Video in ActivityStreams { object }
}

#[cfg(test)]
mod test {
	use crate::{AliasMap, Context, Manager, Note, Person, Place, Relationship, Tombstone, VocabularyType};

	fn ctx_read<T: VocabularyType>(raw: &serde_json::Value) -> T {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		T::deserialize(raw.as_object().unwrap(), &Context::new(&manager, &aliases)).unwrap()
	}

	#[test]
	fn notes_round_trip() {
		let raw = serde_json::json!({
			"id": "https://example.com/objects/1",
			"type": "Note",
			"attributedTo": "https://example.com/users/sally",
			"content": "hello world!",
			"published": "2024-06-04T17:09:20Z",
			"to": ["https://example.com/users/sally/followers", "https://www.w3.org/ns/activitystreams#Public"],
			"tag": [
				{ "type": "Mention", "href": "https://example.com/users/john", "name": "@john" },
				{ "type": "Hashtag", "href": "https://example.com/tags/rust", "name": "#rust" },
			],
			"sensitive": false,
		});
		let note: Note = ctx_read(&raw);
		assert!(note.published.as_ref().is_some_and(|x| x.is::<crate::DateTime>()));
		assert!(note.sensitive.as_ref().and_then(|x| x.get::<bool>()).is_some_and(|x| !x));
		let tags = note.tag.as_ref().unwrap();
		assert!(tags.at(0).is::<crate::Mention>());
		assert!(tags.at(1).is_unknown());
		assert_eq!(serde_json::Value::Object(note.serialize(&AliasMap::new())), raw);
	}

	#[test]
	fn nested_objects_are_typed() {
		let raw = serde_json::json!({
			"type": "Relationship",
			"subject": "https://example.com/users/sally",
			"relationship": "http://purl.org/vocab/relationship/acquaintanceOf",
			"object": {
				"type": "Person",
				"id": "https://example.com/users/john",
				"name": "John",
			},
		});
		let relationship: Relationship = ctx_read(&raw);
		let john = relationship.object.as_ref().unwrap().at(0).get::<Person>().unwrap();
		assert_eq!(john.name.as_ref().unwrap().at(0).get::<String>().map(String::as_str), Some("John"));
		assert_eq!(serde_json::Value::Object(relationship.serialize(&AliasMap::new())), raw);
	}

	#[test]
	fn place_coordinates_are_floats() {
		let raw = serde_json::json!({
			"type": "Place",
			"name": "Fresno Area",
			"latitude": 36.75,
			"longitude": 119.7667,
			"radius": 15,
			"units": "miles",
		});
		let place: Place = ctx_read(&raw);
		assert_eq!(place.latitude.as_ref().and_then(|x| x.get::<f64>()), Some(&36.75));
		assert_eq!(place.radius.as_ref().and_then(|x| x.get::<f64>()), Some(&15.0));
		assert_eq!(serde_json::Value::Object(place.serialize(&AliasMap::new())), raw);
	}

	#[test]
	fn tombstones_remember_former_types() {
		let raw = serde_json::json!({
			"type": "Tombstone",
			"id": "https://example.com/objects/1",
			"formerType": "Note",
			"deleted": "2016-03-17T00:00:00Z",
		});
		let tombstone: Tombstone = ctx_read(&raw);
		let former = tombstone.former_type.as_ref().unwrap();
		assert_eq!(former.at(0).get::<String>().map(String::as_str), Some("Note"));
		assert!(tombstone.deleted.as_ref().is_some_and(|x| x.is::<crate::DateTime>()));
		assert_eq!(tombstone.types(), ["Tombstone"]);
	}
}

crate::vocab_type! {
	/// Unordered set of `items`.
	pub struct Collection in ActivityStreams { object, paged, unordered }

	/// Collection whose `orderedItems` are in reverse chronological order.
	pub struct OrderedCollection in ActivityStreams { object, paged, ordered }

	pub struct CollectionPage in ActivityStreams { object, paged, unordered, page }
	pub struct OrderedCollectionPage in ActivityStreams { object, paged, ordered, page, indexed }
}

#[cfg(test)]
mod test {
	use crate::{AliasMap, Context, Manager, OrderedCollection, OrderedCollectionPage, VocabularyType};

	#[test]
	fn pages_link_back_to_their_collection() {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		let raw = serde_json::json!({
			"type": "OrderedCollection",
			"id": "https://example.com/users/sally/outbox",
			"totalItems": 2,
			"first": {
				"type": "OrderedCollectionPage",
				"id": "https://example.com/users/sally/outbox?page=1",
				"partOf": "https://example.com/users/sally/outbox",
				"startIndex": 0,
				"next": "https://example.com/users/sally/outbox?page=2",
				"orderedItems": [
					"https://example.com/activities/2",
					"https://example.com/activities/1",
				],
			},
		});
		let outbox = OrderedCollection::deserialize(raw.as_object().unwrap(), &Context::new(&manager, &aliases)).unwrap();
		let page = outbox.first.as_ref().and_then(|x| x.get::<OrderedCollectionPage>()).unwrap();
		assert_eq!(page.start_index.as_ref().and_then(|x| x.get::<u64>()), Some(&0));
		assert!(page.part_of.as_ref().is_some_and(|x| x.is_iri()));
		assert_eq!(page.ordered_items.as_ref().map(|x| x.len()), Some(2));
		assert_eq!(serde_json::Value::Object(outbox.serialize(&aliases)), raw);
	}

	#[test]
	fn first_rejects_plain_objects() {
		let manager = Manager::standard();
		let aliases = AliasMap::new();
		let raw = serde_json::json!({
			"type": "Collection",
			"first": { "type": "Note", "content": "not a page" },
		});
		let collection = crate::Collection::deserialize(raw.as_object().unwrap(), &Context::new(&manager, &aliases)).unwrap();
		assert!(collection.first.as_ref().is_some_and(|x| x.is_unknown()));
	}
}

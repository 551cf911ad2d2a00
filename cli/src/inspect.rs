use astypes::{Callback, Entity, Member, Property, PropertyList, ResolveError, TypeResolver};

use crate::CliError;

pub fn inspect(manager: &astypes::Manager, document: &serde_json::Value) -> Result<(), CliError> {
	let entity = astypes::deserialize(document, manager)?;
	let name = entity.type_name();
	let hierarchy = astypes::hierarchy();

	println!("type: {name} ({})", entity.vocabulary().uri());
	if let Some(id) = entity.id() {
		println!("id: {id}");
	}
	println!("extends: {}", hierarchy.ancestors(name).collect::<Vec<_>>().join(", "));
	println!("disjoint with: {}", hierarchy.disjoint(name).collect::<Vec<_>>().join(", "));

	println!("properties:");
	for (property, kinds) in entity.property_kinds() {
		println!("  {property}: {}", kinds.join(", "));
	}
	let unknown: Vec<&str> = entity.unknown().keys()
		.map(String::as_str)
		.filter(|k| *k != "@context")
		.collect();
	if !unknown.is_empty() {
		println!("unknown: {}", unknown.join(", "));
	}

	match summary(&entity) {
		Ok(text) => println!("summary: {text}"),
		Err(ResolveError::NoCallbackMatched(_)) => {},
		Err(e) => tracing::warn!("could not summarize document: {e}"),
	}

	Ok(())
}

/// One line describing the most common kinds of documents.
pub fn summary(entity: &Entity) -> Result<String, ResolveError> {
	let mut resolver = TypeResolver::new([
		Callback::new(|x: &astypes::Follow| format!("{} follows {}", first(&x.actor), first(&x.object))),
		Callback::new(|x: &astypes::Create| format!("{} creates {}", first(&x.actor), first(&x.object))),
		Callback::new(|x: &astypes::Announce| format!("{} announces {}", first(&x.actor), first(&x.object))),
		Callback::new(|x: &astypes::Like| format!("{} likes {}", first(&x.actor), first(&x.object))),
		Callback::new(|x: &astypes::Undo| format!("{} undoes {}", first(&x.actor), first(&x.object))),
		Callback::new(|x: &astypes::Note| format!("note by {}", first(&x.attributed_to))),
		Callback::new(|x: &astypes::Person| format!("person named {}", first(&x.name))),
		Callback::new(|x: &astypes::OrderedCollection| format!(
			"ordered collection of {} items",
			x.total_items.as_ref().and_then(|t| t.get::<u64>()).copied().unwrap_or_default(),
		)),
	])?;
	resolver.resolve(entity)
}

fn first<P: Property>(list: &Option<PropertyList<P>>) -> String {
	let Some(value) = list.as_ref().and_then(|x| x.first()) else {
		return "nothing".to_string();
	};
	match value.member() {
		Member::Iri(iri) => iri.to_string(),
		Member::Type(entity) => match entity.id() {
			Some(id) => id.to_string(),
			None => format!("a {}", entity.type_name()),
		},
		Member::Literal(literal) => literal.to_json().to_string(),
		other => other.kind_name().to_string(),
	}
}

#[cfg(test)]
mod test {
	use super::summary;

	fn read(raw: serde_json::Value) -> astypes::Entity {
		astypes::deserialize(&raw, &astypes::Manager::standard()).unwrap()
	}

	#[test]
	fn follows_are_summarized() {
		let entity = read(serde_json::json!({
			"type": "Follow",
			"actor": "https://example.com/users/sally",
			"object": { "type": "Person", "id": "https://example.com/users/john" },
		}));
		assert_eq!(
			summary(&entity).unwrap(),
			"https://example.com/users/sally follows https://example.com/users/john",
		);
	}

	#[test]
	fn named_people_and_anonymous_objects() {
		let entity = read(serde_json::json!({ "type": "Person", "name": "Sally" }));
		assert_eq!(summary(&entity).unwrap(), "person named \"Sally\"");
		let entity = read(serde_json::json!({ "type": "Like", "object": { "type": "Note" } }));
		assert_eq!(summary(&entity).unwrap(), "nothing likes a Note");
	}

	#[test]
	fn other_types_have_no_summary() {
		let entity = read(serde_json::json!({ "type": "Tombstone" }));
		assert!(matches!(summary(&entity), Err(astypes::ResolveError::NoCallbackMatched(_))));
	}
}

use std::{collections::{BTreeSet, HashMap}, sync::LazyLock};

/// Direct parents of every vocabulary type.
const PARENTS: &[(&str, &[&str])] = &[
	("Object", &[]),
	("Link", &[]),
	("Activity", &["Object"]),
	("IntransitiveActivity", &["Activity"]),
	("Collection", &["Object"]),
	("OrderedCollection", &["Collection"]),
	("CollectionPage", &["Collection"]),
	("OrderedCollectionPage", &["OrderedCollection", "CollectionPage"]),
	("Accept", &["Activity"]),
	("TentativeAccept", &["Accept"]),
	("Add", &["Activity"]),
	("Announce", &["Activity"]),
	("Arrive", &["IntransitiveActivity"]),
	("Block", &["Ignore"]),
	("Create", &["Activity"]),
	("Delete", &["Activity"]),
	("Dislike", &["Activity"]),
	("Flag", &["Activity"]),
	("Follow", &["Activity"]),
	("Ignore", &["Activity"]),
	("Invite", &["Offer"]),
	("Join", &["Activity"]),
	("Leave", &["Activity"]),
	("Like", &["Activity"]),
	("Listen", &["Activity"]),
	("Move", &["Activity"]),
	("Offer", &["Activity"]),
	("Question", &["IntransitiveActivity"]),
	("Reject", &["Activity"]),
	("TentativeReject", &["Reject"]),
	("Read", &["Activity"]),
	("Remove", &["Activity"]),
	("Travel", &["IntransitiveActivity"]),
	("Undo", &["Activity"]),
	("Update", &["Activity"]),
	("View", &["Activity"]),
	("Application", &["Object"]),
	("Group", &["Object"]),
	("Organization", &["Object"]),
	("Person", &["Object"]),
	("Service", &["Object"]),
	("Article", &["Object"]),
	("Document", &["Object"]),
	("Audio", &["Document"]),
	("Image", &["Document"]),
	("Page", &["Document"]),
	("Video", &["Document"]),
	("Event", &["Object"]),
	("Note", &["Object"]),
	("Place", &["Object"]),
	("Profile", &["Object"]),
	("Relationship", &["Object"]),
	("Tombstone", &["Object"]),
	("Mention", &["Link"]),
	("PublicKey", &[]),
];

/// Declared disjoint pairs, inherited by every descendant of either side.
const DISJOINT: &[(&str, &str)] = &[
	("Object", "Link"),
];

static HIERARCHY: LazyLock<Hierarchy> = LazyLock::new(|| Hierarchy::build(PARENTS, DISJOINT));

/// Relations between the vocabulary types, computed once.
pub fn hierarchy() -> &'static Hierarchy {
	&HIERARCHY
}

#[derive(Debug, Default)]
struct Relations {
	ancestors: BTreeSet<&'static str>,
	descendants: BTreeSet<&'static str>,
	disjoint: BTreeSet<&'static str>,
}

/// Transitive closure of a parents table.
#[derive(Debug)]
pub struct Hierarchy {
	types: HashMap<&'static str, Relations>,
}

impl Hierarchy {
	pub fn build(parents: &[(&'static str, &[&'static str])], disjoint: &[(&'static str, &'static str)]) -> Self {
		let direct: HashMap<&'static str, &[&'static str]> = parents.iter().copied().collect();
		let mut types: HashMap<&'static str, Relations> = HashMap::new();

		for &(name, _) in parents {
			let mut ancestors = BTreeSet::new();
			let mut stack: Vec<&'static str> = direct.get(name).map(|x| x.to_vec()).unwrap_or_default();
			while let Some(parent) = stack.pop() {
				if ancestors.insert(parent) {
					if let Some(grand) = direct.get(parent) {
						stack.extend_from_slice(grand);
					}
				}
			}
			types.insert(name, Relations { ancestors, ..Default::default() });
		}

		let edges: Vec<(&'static str, &'static str)> = types.iter()
			.flat_map(|(name, r)| r.ancestors.iter().map(move |a| (*a, *name)))
			.collect();
		for (ancestor, descendant) in edges {
			types.entry(ancestor).or_default().descendants.insert(descendant);
		}

		for &(a, b) in disjoint {
			let left = family(&types, a);
			let right = family(&types, b);
			for &l in &left {
				types.entry(l).or_default().disjoint.extend(right.iter().copied());
			}
			for &r in &right {
				types.entry(r).or_default().disjoint.extend(left.iter().copied());
			}
		}

		Hierarchy { types }
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Whether `name` inherits, directly or not, from `other`.
	pub fn extends(&self, name: &str, other: &str) -> bool {
		self.types.get(name).is_some_and(|r| r.ancestors.contains(other))
	}

	pub fn is_or_extends(&self, name: &str, other: &str) -> bool {
		(name == other && self.contains(name)) || self.extends(name, other)
	}

	/// Whether `other` inherits from `name`.
	pub fn is_extended_by(&self, name: &str, other: &str) -> bool {
		self.extends(other, name)
	}

	pub fn is_disjoint_with(&self, name: &str, other: &str) -> bool {
		self.types.get(name).is_some_and(|r| r.disjoint.contains(other))
	}

	pub fn ancestors(&self, name: &str) -> impl Iterator<Item = &'static str> + '_ {
		self.types.get(name).into_iter().flat_map(|r| r.ancestors.iter().copied())
	}

	pub fn descendants(&self, name: &str) -> impl Iterator<Item = &'static str> + '_ {
		self.types.get(name).into_iter().flat_map(|r| r.descendants.iter().copied())
	}

	pub fn disjoint(&self, name: &str) -> impl Iterator<Item = &'static str> + '_ {
		self.types.get(name).into_iter().flat_map(|r| r.disjoint.iter().copied())
	}
}

fn family(types: &HashMap<&'static str, Relations>, name: &'static str) -> Vec<&'static str> {
	let mut out = vec![name];
	if let Some(r) = types.get(name) {
		out.extend(r.descendants.iter().copied());
	}
	out
}

#[cfg(test)]
mod test {
	use super::{hierarchy, Hierarchy};

	#[test]
	fn every_generated_type_is_in_the_table() {
		for key in crate::vocab::TYPES {
			assert!(hierarchy().contains(key.name), "{} missing from hierarchy", key.name);
		}
	}

	#[test]
	fn extends_is_transitive() {
		let h = hierarchy();
		assert!(h.extends("TentativeAccept", "Accept"));
		assert!(h.extends("TentativeAccept", "Activity"));
		assert!(h.extends("TentativeAccept", "Object"));
		assert!(h.extends("Question", "IntransitiveActivity"));
		assert!(h.extends("OrderedCollectionPage", "CollectionPage"));
		assert!(h.extends("OrderedCollectionPage", "OrderedCollection"));
		assert!(!h.extends("Activity", "Follow"));
		assert!(!h.extends("Note", "Note"));
		assert!(!h.extends("Nonexistent", "Object"));
	}

	#[test]
	fn extended_by_is_the_converse() {
		let h = hierarchy();
		assert!(h.is_extended_by("Link", "Mention"));
		assert!(h.is_extended_by("Document", "Image"));
		assert!(!h.is_extended_by("Mention", "Link"));
		assert!(h.descendants("Ignore").any(|x| x == "Block"));
		assert_eq!(h.ancestors("Block").collect::<Vec<_>>(), ["Activity", "Ignore", "Object"]);
	}

	#[test]
	fn disjointness_is_inherited() {
		let h = hierarchy();
		assert!(h.is_disjoint_with("Object", "Link"));
		assert!(h.is_disjoint_with("Link", "Object"));
		assert!(h.is_disjoint_with("Mention", "Note"));
		assert!(h.is_disjoint_with("Follow", "Mention"));
		assert!(!h.is_disjoint_with("Note", "Article"));
		assert!(!h.is_disjoint_with("PublicKey", "Link"));
	}

	#[test]
	fn custom_tables_can_be_built() {
		let h = Hierarchy::build(&[("A", &[]), ("B", &["A"]), ("C", &["B"]), ("D", &[])], &[("B", "D")]);
		assert!(h.extends("C", "A"));
		assert!(h.is_disjoint_with("C", "D"));
		assert!(!h.is_disjoint_with("A", "D"));
		assert!(h.is_or_extends("A", "A"));
		assert!(!h.is_or_extends("Z", "Z"));
	}
}

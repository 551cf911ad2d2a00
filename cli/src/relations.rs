use crate::CliError;

pub fn relations(name: &str) -> Result<(), CliError> {
	let hierarchy = astypes::hierarchy();
	if !hierarchy.contains(name) {
		return Err(CliError::UnknownType(name.to_string()));
	}
	println!("{name}");
	println!("  extends: {}", hierarchy.ancestors(name).collect::<Vec<_>>().join(", "));
	println!("  extended by: {}", hierarchy.descendants(name).collect::<Vec<_>>().join(", "));
	println!("  disjoint with: {}", hierarchy.disjoint(name).collect::<Vec<_>>().join(", "));
	Ok(())
}

#[cfg(test)]
mod test {
	use crate::CliError;

	#[test]
	fn unknown_names_are_rejected() {
		assert!(super::relations("Note").is_ok());
		assert!(matches!(super::relations("Emoji"), Err(CliError::UnknownType(x)) if x == "Emoji"));
	}
}

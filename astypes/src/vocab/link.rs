crate::vocab_type! {
	/// Qualified reference to a resource by `href`.
	pub struct Link in ActivityStreams { link }

	/// A link to an actor, usually inside `tag`.
	pub struct Mention in ActivityStreams { link }
}

crate::vocab_type! {
	pub struct Application in ActivityStreams { object, actor }
	pub struct Group in ActivityStreams { object, actor }
	pub struct Organization in ActivityStreams { object, actor }

	/// An individual person.
	pub struct Person in ActivityStreams { object, actor }

	pub struct Service in ActivityStreams { object, actor }
}

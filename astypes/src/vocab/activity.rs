crate::vocab_type! {
	/// An action performed by `actor` on `object`.
	pub struct Activity in ActivityStreams { object, activity, transitive }

	/// An activity with no direct object.
	pub struct IntransitiveActivity in ActivityStreams { object, activity }

	pub struct Accept in ActivityStreams { object, activity, transitive }
	pub struct Add in ActivityStreams { object, activity, transitive }
	pub struct Announce in ActivityStreams { object, activity, transitive }
	pub struct Arrive in ActivityStreams { object, activity }
	pub struct Block in ActivityStreams { object, activity, transitive }
	pub struct Create in ActivityStreams { object, activity, transitive }
	pub struct Delete in ActivityStreams { object, activity, transitive }
	pub struct Dislike in ActivityStreams { object, activity, transitive }
	pub struct Flag in ActivityStreams { object, activity, transitive }
	pub struct Follow in ActivityStreams { object, activity, transitive }
	pub struct Ignore in ActivityStreams { object, activity, transitive }
	pub struct Invite in ActivityStreams { object, activity, transitive }
	pub struct Join in ActivityStreams { object, activity, transitive }
	pub struct Leave in ActivityStreams { object, activity, transitive }
	pub struct Like in ActivityStreams { object, activity, transitive }
	pub struct Listen in ActivityStreams { object, activity, transitive }
	pub struct Move in ActivityStreams { object, activity, transitive }
	pub struct Offer in ActivityStreams { object, activity, transitive }

	/// A poll: answers go either in `oneOf` or in `anyOf`, never both.
	pub struct Question in ActivityStreams { object, activity, question }

	pub struct Reject in ActivityStreams { object, activity, transitive }
	pub struct Read in ActivityStreams { object, activity, transitive }
	pub struct Remove in ActivityStreams { object, activity, transitive }
	pub struct TentativeReject in ActivityStreams { object, activity, transitive }
	pub struct TentativeAccept in ActivityStreams { object, activity, transitive }
	pub struct Travel in ActivityStreams { object, activity }
	pub struct Undo in ActivityStreams { object, activity, transitive }
	pub struct Update in ActivityStreams { object, activity, transitive }
	pub struct View in ActivityStreams { object, activity, transitive }
}

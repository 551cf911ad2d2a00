//! Marker types for every vocabulary property.
//!
//! Each marker names the property and declares its alternatives; [`crate::PropertyValue`] and
//! [`crate::PropertyList`] are parametrized over them.

use crate::{DateTime, Duration, LangMap, LanguageTag, LinkRelation, MediaType};

crate::property! {
	/// JSON-LD node identifier
	IdProperty = "id" in JsonLd,
	types: [],
	literals: [];

	/// Who performed an activity
	ActorProperty = "actor" in ActivityStreams,
	types: any,
	literals: [];

	AttachmentProperty = "attachment" in ActivityStreams,
	types: any,
	literals: [];

	AttributedToProperty = "attributedTo" in ActivityStreams,
	types: any,
	literals: [];

	AudienceProperty = "audience" in ActivityStreams,
	types: any,
	literals: [];

	BccProperty = "bcc" in ActivityStreams,
	types: any,
	literals: [];

	BtoProperty = "bto" in ActivityStreams,
	types: any,
	literals: [];

	CcProperty = "cc" in ActivityStreams,
	types: any,
	literals: [];

	/// Content of an object, usually HTML; translations go in `contentMap`
	ContentProperty = "content" in ActivityStreams,
	types: [],
	literals: [String, LangMap];

	ContextProperty = "context" in ActivityStreams,
	types: any,
	literals: [];

	DurationProperty = "duration" in ActivityStreams,
	types: [],
	literals: [Duration];

	EndTimeProperty = "endTime" in ActivityStreams,
	types: [],
	literals: [DateTime];

	GeneratorProperty = "generator" in ActivityStreams,
	types: any,
	literals: [];

	IconProperty = "icon" in ActivityStreams,
	types: [Image, Link, Mention],
	literals: [];

	ImageProperty = "image" in ActivityStreams,
	types: [Image, Link, Mention],
	literals: [];

	InReplyToProperty = "inReplyTo" in ActivityStreams,
	types: any,
	literals: [];

	LikesProperty = "likes" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	LocationProperty = "location" in ActivityStreams,
	types: any,
	literals: [];

	MediaTypeProperty = "mediaType" in ActivityStreams,
	types: [],
	literals: [MediaType];

	NameProperty = "name" in ActivityStreams,
	types: [],
	literals: [String, LangMap];

	PreviewProperty = "preview" in ActivityStreams,
	types: any,
	literals: [];

	PublishedProperty = "published" in ActivityStreams,
	types: [],
	literals: [DateTime];

	RepliesProperty = "replies" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	/// Content warning flag, from the ActivityStreams miscellaneous terms
	SensitiveProperty = "sensitive" in ActivityStreams,
	types: [],
	literals: [bool];

	SharesProperty = "shares" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	StartTimeProperty = "startTime" in ActivityStreams,
	types: [],
	literals: [DateTime];

	SummaryProperty = "summary" in ActivityStreams,
	types: [],
	literals: [String, LangMap];

	TagProperty = "tag" in ActivityStreams,
	types: any,
	literals: [];

	ToProperty = "to" in ActivityStreams,
	types: any,
	literals: [];

	UpdatedProperty = "updated" in ActivityStreams,
	types: [],
	literals: [DateTime];

	/// Where the object can be found; plain anyURI values land in the IRI member
	UrlProperty = "url" in ActivityStreams,
	types: [Link, Mention],
	literals: [];

	HeightProperty = "height" in ActivityStreams,
	types: [],
	literals: [u64];

	HrefProperty = "href" in ActivityStreams,
	types: [],
	literals: [];

	HreflangProperty = "hreflang" in ActivityStreams,
	types: [],
	literals: [LanguageTag];

	RelProperty = "rel" in ActivityStreams,
	types: [],
	literals: [LinkRelation];

	WidthProperty = "width" in ActivityStreams,
	types: [],
	literals: [u64];

	InstrumentProperty = "instrument" in ActivityStreams,
	types: any,
	literals: [];

	OriginProperty = "origin" in ActivityStreams,
	types: any,
	literals: [];

	ResultProperty = "result" in ActivityStreams,
	types: any,
	literals: [];

	TargetProperty = "target" in ActivityStreams,
	types: any,
	literals: [];

	/// Direct object of an activity, or object of a relationship
	ObjectProperty = "object" in ActivityStreams,
	types: any,
	literals: [];

	AnyOfProperty = "anyOf" in ActivityStreams,
	types: any,
	literals: [];

	/// When a question closed, or just whether it did
	ClosedProperty = "closed" in ActivityStreams,
	types: any,
	literals: [DateTime, bool];

	OneOfProperty = "oneOf" in ActivityStreams,
	types: any,
	literals: [];

	CurrentProperty = "current" in ActivityStreams,
	types: [CollectionPage, Link, Mention, OrderedCollectionPage],
	literals: [];

	FirstProperty = "first" in ActivityStreams,
	types: [CollectionPage, Link, Mention, OrderedCollectionPage],
	literals: [];

	LastProperty = "last" in ActivityStreams,
	types: [CollectionPage, Link, Mention, OrderedCollectionPage],
	literals: [];

	TotalItemsProperty = "totalItems" in ActivityStreams,
	types: [],
	literals: [u64];

	ItemsProperty = "items" in ActivityStreams,
	types: any,
	literals: [];

	OrderedItemsProperty = "orderedItems" in ActivityStreams,
	types: any,
	literals: [];

	NextProperty = "next" in ActivityStreams,
	types: [CollectionPage, Link, Mention, OrderedCollectionPage],
	literals: [];

	PartOfProperty = "partOf" in ActivityStreams,
	types: [Collection, CollectionPage, Link, Mention, OrderedCollection, OrderedCollectionPage],
	literals: [];

	PrevProperty = "prev" in ActivityStreams,
	types: [CollectionPage, Link, Mention, OrderedCollectionPage],
	literals: [];

	StartIndexProperty = "startIndex" in ActivityStreams,
	types: [],
	literals: [u64];

	FollowersProperty = "followers" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	FollowingProperty = "following" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	InboxProperty = "inbox" in ActivityStreams,
	types: [OrderedCollection, OrderedCollectionPage],
	literals: [];

	LikedProperty = "liked" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	OutboxProperty = "outbox" in ActivityStreams,
	types: [OrderedCollection, OrderedCollectionPage],
	literals: [];

	PreferredUsernameProperty = "preferredUsername" in ActivityStreams,
	types: [],
	literals: [String];

	StreamsProperty = "streams" in ActivityStreams,
	types: [Collection, CollectionPage, OrderedCollection, OrderedCollectionPage],
	literals: [];

	AccuracyProperty = "accuracy" in ActivityStreams,
	types: [],
	literals: [f64];

	AltitudeProperty = "altitude" in ActivityStreams,
	types: [],
	literals: [f64];

	LatitudeProperty = "latitude" in ActivityStreams,
	types: [],
	literals: [f64];

	LongitudeProperty = "longitude" in ActivityStreams,
	types: [],
	literals: [f64];

	RadiusProperty = "radius" in ActivityStreams,
	types: [],
	literals: [f64];

	/// `cm`, `feet`, `inches`, `km`, `m`, `miles`, or an IRI naming another unit
	UnitsProperty = "units" in ActivityStreams,
	types: [],
	literals: [String];

	DescribesProperty = "describes" in ActivityStreams,
	types: any,
	literals: [];

	SubjectProperty = "subject" in ActivityStreams,
	types: any,
	literals: [];

	RelationshipProperty = "relationship" in ActivityStreams,
	types: any,
	literals: [];

	DeletedProperty = "deleted" in ActivityStreams,
	types: [],
	literals: [DateTime];

	FormerTypeProperty = "formerType" in ActivityStreams,
	types: any,
	literals: [String];

	PublicKeyProperty = "publicKey" in Security,
	types: [PublicKey],
	literals: [];

	OwnerProperty = "owner" in Security,
	types: [],
	literals: [];

	PublicKeyPemProperty = "publicKeyPem" in Security,
	types: [],
	literals: [String];
}

#[cfg(test)]
mod test {
	use crate::{LiteralKind, Property, Vocabulary};

	use super::{ClosedProperty, IconProperty, IdProperty, PublicKeyProperty, TagProperty};

	#[test]
	fn alternatives_keep_declaration_order() {
		let names: Vec<&str> = IconProperty::TYPES.iter().map(|k| k.name).collect();
		assert_eq!(names, ["Image", "Link", "Mention"]);
		assert_eq!(ClosedProperty::LITERALS, [LiteralKind::DateTime, LiteralKind::Boolean]);
		assert_eq!(TagProperty::TYPES.len(), crate::vocab::OBJECT_OR_LINK.len());
	}

	#[test]
	fn properties_know_their_vocabulary() {
		assert_eq!(IdProperty::VOCABULARY, Vocabulary::JsonLd);
		assert_eq!(PublicKeyProperty::VOCABULARY, Vocabulary::Security);
		assert!(IdProperty::TYPES.is_empty() && IdProperty::LITERALS.is_empty());
	}
}

/// Declares property markers.
///
/// `types: any` accepts every ActivityStreams object or link; otherwise the listed types are
/// tried in order. Literals are tried after types, also in order. Every property accepts an IRI.
macro_rules! property {
	(@marker [$(#[$meta:meta])*] $marker:ident $name:literal $vocab:ident [$($lit:ty),*] ($types:expr)) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
		pub struct $marker;

		impl $crate::Property for $marker {
			const NAME: &'static str = $name;
			const VOCABULARY: $crate::Vocabulary = $crate::Vocabulary::$vocab;
			const TYPES: &'static [$crate::TypeKey] = $types;
			const LITERALS: &'static [$crate::LiteralKind] = &[$(<$lit as $crate::LiteralType>::KIND),*];
		}

		impl $crate::Accepts<$crate::Iri> for $marker {}
		$(impl $crate::Accepts<$lit> for $marker {})*
	};

	(
		$(
			$(#[$meta:meta])*
			$marker:ident = $name:literal in $vocab:ident,
			types: $types:tt,
			literals: [$($lit:ty),* $(,)?];
		)*
	) => {
		$(
			$crate::property! { @types [$(#[$meta])*] $marker $name $vocab [$($lit),*] $types }
		)*
	};

	(@types $meta:tt $marker:ident $name:literal $vocab:ident $lits:tt any) => {
		$crate::property! { @marker $meta $marker $name $vocab $lits ($crate::vocab::OBJECT_OR_LINK) }
		impl<T: $crate::ObjectOrLink> $crate::Accepts<T> for $marker {}
	};

	(@types $meta:tt $marker:ident $name:literal $vocab:ident $lits:tt [$($t:ident),* $(,)?]) => {
		$crate::property! {
			@marker $meta $marker $name $vocab $lits
			(&[$(<$crate::$t as $crate::VocabularyType>::KEY),*])
		}
		$(impl $crate::Accepts<$crate::$t> for $marker {})*
	};
}

pub(crate) use property;

/// Declares vocabulary types, one struct per type, built from named property groups.
///
/// Each group expands to a run of fields; a type gets the fields of every group it lists, in
/// order, after the JSON-LD `id`.
macro_rules! vocab_type {
	(
		$(
			$(#[$meta:meta])*
			pub struct $name:ident in $vocab:ident { $($group:ident),* $(,)? }
		)+
	) => {
		$(
			$crate::vocab_type! { @munch [$(#[$meta])*] $name $vocab [] $($group)* }
		)+
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] object $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList attachment: AttachmentProperty;
			PropertyList attributed_to: AttributedToProperty;
			PropertyList audience: AudienceProperty;
			PropertyList bcc: BccProperty;
			PropertyList bto: BtoProperty;
			PropertyList cc: CcProperty;
			PropertyList content: ContentProperty;
			PropertyList context: ContextProperty;
			PropertyValue duration: DurationProperty;
			PropertyValue end_time: EndTimeProperty;
			PropertyList generator: GeneratorProperty;
			PropertyList icon: IconProperty;
			PropertyList image: ImageProperty;
			PropertyList in_reply_to: InReplyToProperty;
			PropertyValue likes: LikesProperty;
			PropertyList location: LocationProperty;
			PropertyValue media_type: MediaTypeProperty;
			PropertyList name: NameProperty;
			PropertyList preview: PreviewProperty;
			PropertyValue published: PublishedProperty;
			PropertyValue replies: RepliesProperty;
			PropertyValue sensitive: SensitiveProperty;
			PropertyValue shares: SharesProperty;
			PropertyValue start_time: StartTimeProperty;
			PropertyList summary: SummaryProperty;
			PropertyList tag: TagProperty;
			PropertyList to: ToProperty;
			PropertyValue updated: UpdatedProperty;
			PropertyList url: UrlProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] link $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList attributed_to: AttributedToProperty;
			PropertyValue height: HeightProperty;
			PropertyValue href: HrefProperty;
			PropertyValue hreflang: HreflangProperty;
			PropertyValue media_type: MediaTypeProperty;
			PropertyList name: NameProperty;
			PropertyList preview: PreviewProperty;
			PropertyList rel: RelProperty;
			PropertyValue width: WidthProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] activity $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList actor: ActorProperty;
			PropertyList instrument: InstrumentProperty;
			PropertyList origin: OriginProperty;
			PropertyList result: ResultProperty;
			PropertyList target: TargetProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] transitive $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList object: ObjectProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] question $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList any_of: AnyOfProperty;
			PropertyList closed: ClosedProperty;
			PropertyList one_of: OneOfProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] paged $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue current: CurrentProperty;
			PropertyValue first: FirstProperty;
			PropertyValue last: LastProperty;
			PropertyValue total_items: TotalItemsProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] unordered $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList items: ItemsProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] ordered $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyList ordered_items: OrderedItemsProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] page $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue next: NextProperty;
			PropertyValue part_of: PartOfProperty;
			PropertyValue prev: PrevProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] indexed $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue start_index: StartIndexProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] actor $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue followers: FollowersProperty;
			PropertyValue following: FollowingProperty;
			PropertyValue inbox: InboxProperty;
			PropertyValue liked: LikedProperty;
			PropertyValue outbox: OutboxProperty;
			PropertyValue preferred_username: PreferredUsernameProperty;
			PropertyValue public_key: PublicKeyProperty;
			PropertyList streams: StreamsProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] place $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue accuracy: AccuracyProperty;
			PropertyValue altitude: AltitudeProperty;
			PropertyValue latitude: LatitudeProperty;
			PropertyValue longitude: LongitudeProperty;
			PropertyValue radius: RadiusProperty;
			PropertyValue units: UnitsProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] profile $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue describes: DescribesProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] relationship $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue subject: SubjectProperty;
			PropertyList relationship: RelationshipProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] tombstone $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue deleted: DeletedProperty;
			PropertyList former_type: FormerTypeProperty;
		] $($rest)* }
	};

	(@munch $meta:tt $name:ident $vocab:ident [$($acc:tt)*] key $($rest:ident)*) => {
		$crate::vocab_type! { @munch $meta $name $vocab [$($acc)*
			PropertyValue owner: OwnerProperty;
			PropertyValue public_key_pem: PublicKeyPemProperty;
		] $($rest)* }
	};

	(@munch [$(#[$meta:meta])*] $name:ident $vocab:ident [$($kind:ident $field:ident : $prop:ident;)*]) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq)]
		pub struct $name {
			pub id: Option<$crate::PropertyValue<$crate::properties::IdProperty>>,
			$(pub $field: Option<$crate::$kind<$crate::properties::$prop>>,)*
			types: $crate::vocab::JsonLdType,
			unknown: serde_json::Map<String, serde_json::Value>,
		}

		impl Default for $name {
			fn default() -> Self {
				$name {
					id: None,
					$($field: None,)*
					types: $crate::vocab::JsonLdType::single(<Self as $crate::VocabularyType>::NAME),
					unknown: serde_json::Map::new(),
				}
			}
		}

		impl $name {
			pub fn new() -> Self {
				Self::default()
			}

			/// Sets the JSON-LD `id`.
			pub fn with_id(mut self, id: $crate::Iri) -> Self {
				self.id = Some($crate::PropertyValue::with(id));
				self
			}

			/// JSON-LD `type` values, this type's own name always among them.
			pub fn types(&self) -> Vec<&str> {
				self.types.values_or(<Self as $crate::VocabularyType>::NAME)
			}

			/// Records an additional `type` value next to this type's own name.
			pub fn add_type(&mut self, extra: impl Into<String>) {
				self.types.add(<Self as $crate::VocabularyType>::NAME, extra.into());
			}

			pub fn unknown_mut(&mut self) -> &mut serde_json::Map<String, serde_json::Value> {
				&mut self.unknown
			}
		}

		impl $crate::VocabularyType for $name {
			const NAME: &'static str = stringify!($name);
			const VOCABULARY: $crate::Vocabulary = $crate::Vocabulary::$vocab;

			fn deserialize(
				map: &serde_json::Map<String, serde_json::Value>,
				ctx: &$crate::Context,
			) -> Result<Self, $crate::Error> {
				let types = $crate::vocab::JsonLdType::read(map, Self::KEY, ctx.aliases())?;
				let mut fields = $crate::property::Fields::new(map, ctx);
				Ok($name {
					id: fields.take()?,
					$($field: fields.take()?,)*
					types,
					unknown: fields.into_unknown(),
				})
			}

			fn serialize(&self, aliases: &$crate::AliasMap) -> serde_json::Map<String, serde_json::Value> {
				use $crate::PropertyField;
				let mut out = serde_json::Map::new();
				out.insert("type".to_string(), self.types.to_json(Self::KEY, aliases));
				if let Some(id) = &self.id {
					id.serialize_into(&mut out, aliases);
				}
				$(
					if let Some(field) = &self.$field {
						field.serialize_into(&mut out, aliases);
					}
				)*
				for (key, value) in &self.unknown {
					if !out.contains_key(key) {
						out.insert(key.clone(), value.clone());
					}
				}
				out
			}

			fn canonical_cmp(&self, other: &Self) -> std::cmp::Ordering {
				$crate::property::compare_fields(&self.id, &other.id)
					$(.then_with(|| $crate::property::compare_fields(&self.$field, &other.$field)))*
					.then_with(|| self.types.cmp(&other.types))
					.then_with(|| $crate::property::compare_unknown(&self.unknown, &other.unknown))
			}

			fn property_kinds(&self) -> Vec<(&'static str, Vec<&'static str>)> {
				use $crate::PropertyField;
				let mut out = Vec::new();
				if let Some(id) = &self.id {
					out.push((id.name(), id.kinds()));
				}
				$(
					if let Some(field) = &self.$field {
						out.push((field.name(), field.kinds()));
					}
				)*
				out
			}

			fn canonicalize(&mut self) {
				use $crate::PropertyField;
				$(
					if let Some(field) = &mut self.$field {
						field.canonicalize();
					}
				)*
			}

			fn unknown(&self) -> &serde_json::Map<String, serde_json::Value> {
				&self.unknown
			}

			fn into_entity(self) -> $crate::Entity {
				$crate::Entity::$name(self)
			}
		}

		impl $crate::VocabularyValue for $name {
			fn vocabulary_uri(&self) -> &str {
				<Self as $crate::VocabularyType>::VOCABULARY.uri()
			}

			fn type_name(&self) -> &str {
				<Self as $crate::VocabularyType>::NAME
			}

			fn as_any(&self) -> &dyn std::any::Any {
				self
			}
		}

		impl $crate::Alternative for $name {
			fn into_member(self) -> $crate::Member {
				$crate::Member::Type(Box::new($crate::Entity::$name(self)))
			}

			fn from_member(member: &$crate::Member) -> Option<&Self> {
				match member {
					$crate::Member::Type(entity) => match &**entity {
						$crate::Entity::$name(x) => Some(x),
						_ => None,
					},
					_ => None,
				}
			}

			fn from_member_mut(member: &mut $crate::Member) -> Option<&mut Self> {
				match member {
					$crate::Member::Type(entity) => match &mut **entity {
						$crate::Entity::$name(x) => Some(x),
						_ => None,
					},
					_ => None,
				}
			}
		}
	};
}

pub(crate) use vocab_type;

/// Ties the declared types together: the [`crate::Entity`] enum, the registry of deserializers
/// and the set of types any-typed properties accept.
macro_rules! vocabulary {
	(
		object_or_link: [$($a:ident),* $(,)?];
		other: [$($b:ident),* $(,)?];
	) => {
		/// Any value of a concrete vocabulary type.
		#[derive(Debug, Clone, PartialEq)]
		pub enum Entity {
			$($a($a),)*
			$($b($b),)*
		}

		/// Types accepted by properties ranging over any object or link, in declaration order.
		pub const OBJECT_OR_LINK: &[TypeKey] = &[$(<$a as VocabularyType>::KEY,)*];

		pub(crate) const TYPES: &[TypeKey] = &[
			$(<$a as VocabularyType>::KEY,)*
			$(<$b as VocabularyType>::KEY,)*
		];

		$(impl ObjectOrLink for $a {})*

		static REGISTRY: std::sync::LazyLock<Vec<Registration>> = std::sync::LazyLock::new(|| vec![
			$(Registration::of::<$a>(),)*
			$(Registration::of::<$b>(),)*
		]);

		impl Entity {
			pub fn key(&self) -> TypeKey {
				match self {
					$(Entity::$a(_) => <$a as VocabularyType>::KEY,)*
					$(Entity::$b(_) => <$b as VocabularyType>::KEY,)*
				}
			}

			pub fn as_value(&self) -> &dyn VocabularyValue {
				match self {
					$(Entity::$a(x) => x as &dyn VocabularyValue,)*
					$(Entity::$b(x) => x as &dyn VocabularyValue,)*
				}
			}

			pub fn serialize(&self, aliases: &AliasMap) -> serde_json::Map<String, serde_json::Value> {
				match self {
					$(Entity::$a(x) => x.serialize(aliases),)*
					$(Entity::$b(x) => x.serialize(aliases),)*
				}
			}

			/// Same type: field by field. Different types: declaration order.
			pub fn canonical_cmp(&self, other: &Self) -> std::cmp::Ordering {
				match (self, other) {
					$((Entity::$a(a), Entity::$a(b)) => a.canonical_cmp(b),)*
					$((Entity::$b(a), Entity::$b(b)) => a.canonical_cmp(b),)*
					_ => self.index().cmp(&other.index()),
				}
			}

			pub fn property_kinds(&self) -> Vec<(&'static str, Vec<&'static str>)> {
				match self {
					$(Entity::$a(x) => x.property_kinds(),)*
					$(Entity::$b(x) => x.property_kinds(),)*
				}
			}

			pub fn canonicalize(&mut self) {
				match self {
					$(Entity::$a(x) => x.canonicalize(),)*
					$(Entity::$b(x) => x.canonicalize(),)*
				}
			}

			pub fn unknown(&self) -> &serde_json::Map<String, serde_json::Value> {
				match self {
					$(Entity::$a(x) => x.unknown(),)*
					$(Entity::$b(x) => x.unknown(),)*
				}
			}

			/// The JSON-LD `id`, when it is set and is an IRI.
			pub fn id(&self) -> Option<&Iri> {
				match self {
					$(Entity::$a(x) => x.id.as_ref().and_then(PropertyValue::iri),)*
					$(Entity::$b(x) => x.id.as_ref().and_then(PropertyValue::iri),)*
				}
			}

			paste::paste! {
				$(
					pub fn [< is_ $a:snake >](&self) -> bool {
						matches!(self, Entity::$a(_))
					}

					pub fn [< as_ $a:snake >](&self) -> Option<&$a> {
						match self {
							Entity::$a(x) => Some(x),
							_ => None,
						}
					}
				)*
				$(
					pub fn [< is_ $b:snake >](&self) -> bool {
						matches!(self, Entity::$b(_))
					}

					pub fn [< as_ $b:snake >](&self) -> Option<&$b> {
						match self {
							Entity::$b(x) => Some(x),
							_ => None,
						}
					}
				)*
			}
		}

		$(
			impl From<$a> for Entity {
				fn from(value: $a) -> Self {
					Entity::$a(value)
				}
			}
		)*
		$(
			impl From<$b> for Entity {
				fn from(value: $b) -> Self {
					Entity::$b(value)
				}
			}
		)*
	};
}

pub(crate) use vocabulary;

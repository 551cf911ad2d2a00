use std::{cmp::Ordering, collections::BTreeMap};

use serde_json::Value;

use crate::{Alternative, Member};

pub type DateTime = chrono::DateTime<chrono::FixedOffset>;

/// Scalar value spaces a property can range over, besides vocabulary types and IRIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralKind {
	DateTime,
	Duration,
	Boolean,
	NonNegativeInteger,
	Float,
	String,
	LangString,
	LanguageTag,
	MediaType,
	LinkRelation,
}

impl LiteralKind {
	pub fn name(&self) -> &'static str {
		match self {
			LiteralKind::DateTime => "xsd:dateTime",
			LiteralKind::Duration => "xsd:duration",
			LiteralKind::Boolean => "xsd:boolean",
			LiteralKind::NonNegativeInteger => "xsd:nonNegativeInteger",
			LiteralKind::Float => "xsd:float",
			LiteralKind::String => "xsd:string",
			LiteralKind::LangString => "rdf:langString",
			LiteralKind::LanguageTag => "bcp47",
			LiteralKind::MediaType => "rfc2045",
			LiteralKind::LinkRelation => "rfc5988",
		}
	}

	/// Reads `raw` if it fits this kind's grammar, `None` otherwise.
	pub fn parse(&self, raw: &Value) -> Option<Literal> {
		match self {
			LiteralKind::DateTime => raw.as_str().and_then(parse_date_time).map(Literal::DateTime),
			LiteralKind::Duration => raw.as_str().and_then(Duration::parse).map(Literal::Duration),
			LiteralKind::Boolean => raw.as_bool().map(Literal::Boolean),
			LiteralKind::NonNegativeInteger => raw.as_u64().map(Literal::NonNegativeInteger),
			LiteralKind::Float => raw.as_f64().map(Literal::Float),
			LiteralKind::String => raw.as_str().map(|x| Literal::String(x.to_string())),
			LiteralKind::LangString => LangMap::parse(raw).map(Literal::LangString),
			LiteralKind::LanguageTag => raw.as_str().map(|x| Literal::LanguageTag(x.into())),
			LiteralKind::MediaType => raw.as_str().map(|x| Literal::MediaType(x.into())),
			LiteralKind::LinkRelation => raw.as_str().map(|x| Literal::LinkRelation(x.into())),
		}
	}
}

/// One scalar value, tagged with the kind it was read as.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	DateTime(DateTime),
	Duration(Duration),
	Boolean(bool),
	NonNegativeInteger(u64),
	Float(f64),
	String(String),
	LangString(LangMap),
	LanguageTag(LanguageTag),
	MediaType(MediaType),
	LinkRelation(LinkRelation),
}

impl Literal {
	pub fn kind(&self) -> LiteralKind {
		match self {
			Literal::DateTime(_) => LiteralKind::DateTime,
			Literal::Duration(_) => LiteralKind::Duration,
			Literal::Boolean(_) => LiteralKind::Boolean,
			Literal::NonNegativeInteger(_) => LiteralKind::NonNegativeInteger,
			Literal::Float(_) => LiteralKind::Float,
			Literal::String(_) => LiteralKind::String,
			Literal::LangString(_) => LiteralKind::LangString,
			Literal::LanguageTag(_) => LiteralKind::LanguageTag,
			Literal::MediaType(_) => LiteralKind::MediaType,
			Literal::LinkRelation(_) => LiteralKind::LinkRelation,
		}
	}

	pub fn to_json(&self) -> Value {
		match self {
			Literal::DateTime(x) => Value::String(x.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)),
			Literal::Duration(x) => Value::String(x.to_string()),
			Literal::Boolean(x) => Value::Bool(*x),
			Literal::NonNegativeInteger(x) => Value::from(*x),
			Literal::Float(x) => float_to_json(*x),
			Literal::String(x) => Value::String(x.clone()),
			Literal::LangString(x) => x.to_json(),
			Literal::LanguageTag(x) => Value::String(x.0.clone()),
			Literal::MediaType(x) => Value::String(x.0.clone()),
			Literal::LinkRelation(x) => Value::String(x.0.clone()),
		}
	}

	/// Natural order within a kind, declaration order of [`LiteralKind`] across kinds.
	pub fn canonical_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Literal::DateTime(a), Literal::DateTime(b)) => a.cmp(b)
				.then_with(|| a.offset().local_minus_utc().cmp(&b.offset().local_minus_utc())),
			(Literal::Duration(a), Literal::Duration(b)) => a.canonical_cmp(b),
			(Literal::Boolean(a), Literal::Boolean(b)) => a.cmp(b),
			(Literal::NonNegativeInteger(a), Literal::NonNegativeInteger(b)) => a.cmp(b),
			(Literal::Float(a), Literal::Float(b)) => a.total_cmp(b),
			(Literal::String(a), Literal::String(b)) => a.cmp(b),
			(Literal::LangString(a), Literal::LangString(b)) => a.cmp(b),
			(Literal::LanguageTag(a), Literal::LanguageTag(b)) => a.cmp(b),
			(Literal::MediaType(a), Literal::MediaType(b)) => a.cmp(b),
			(Literal::LinkRelation(a), Literal::LinkRelation(b)) => a.cmp(b),
			_ => self.kind().cmp(&other.kind()),
		}
	}
}

// integral floats print as integers, so `"width": 100` survives a round trip untouched
fn float_to_json(x: f64) -> Value {
	if x.fract() == 0.0 && x.abs() < 9_007_199_254_740_992.0 {
		Value::from(x as i64)
	} else {
		serde_json::Number::from_f64(x).map_or(Value::Null, Value::Number)
	}
}

fn parse_date_time(text: &str) -> Option<DateTime> {
	if let Ok(x) = chrono::DateTime::parse_from_rfc3339(text) {
		return Some(x);
	}
	// xsd:dateTime allows leaving out seconds
	if let Some(naive) = text.strip_suffix(['Z', 'z']) {
		return chrono::NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M")
			.ok()
			.map(|x| x.and_utc().fixed_offset());
	}
	chrono::DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z").ok()
}

/// Implemented by every Rust type carrying a literal kind.
pub trait LiteralType: Sized + 'static {
	const KIND: LiteralKind;

	fn from_literal(literal: &Literal) -> Option<&Self>;
	fn from_literal_mut(literal: &mut Literal) -> Option<&mut Self>;
	fn into_literal(self) -> Literal;
}

macro_rules! literal_type {
	( $( $variant:ident => $t:ty ),* $(,)? ) => {
		$(
			impl LiteralType for $t {
				const KIND: LiteralKind = LiteralKind::$variant;

				fn from_literal(literal: &Literal) -> Option<&Self> {
					match literal {
						Literal::$variant(x) => Some(x),
						_ => None,
					}
				}

				fn from_literal_mut(literal: &mut Literal) -> Option<&mut Self> {
					match literal {
						Literal::$variant(x) => Some(x),
						_ => None,
					}
				}

				fn into_literal(self) -> Literal {
					Literal::$variant(self)
				}
			}

			impl Alternative for $t {
				fn into_member(self) -> Member {
					Member::Literal(self.into_literal())
				}

				fn from_member(member: &Member) -> Option<&Self> {
					match member {
						Member::Literal(x) => Self::from_literal(x),
						_ => None,
					}
				}

				fn from_member_mut(member: &mut Member) -> Option<&mut Self> {
					match member {
						Member::Literal(x) => Self::from_literal_mut(x),
						_ => None,
					}
				}
			}
		)*
	};
}

literal_type! {
	DateTime => DateTime,
	Duration => Duration,
	Boolean => bool,
	NonNegativeInteger => u64,
	Float => f64,
	String => String,
	LangString => LangMap,
	LanguageTag => LanguageTag,
	MediaType => MediaType,
	LinkRelation => LinkRelation,
}

macro_rules! string_literal {
	( $( $(#[$meta:meta])* $name:ident ),* $(,)? ) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
			pub struct $name(pub String);

			impl $name {
				pub fn as_str(&self) -> &str {
					&self.0
				}
			}

			impl From<&str> for $name {
				fn from(value: &str) -> Self {
					$name(value.to_string())
				}
			}

			impl std::fmt::Display for $name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(&self.0)
				}
			}
		)*
	};
}

string_literal! {
	/// BCP47 language tag, such as `en` or `pt-BR`
	LanguageTag,
	/// MIME media type, such as `text/html`
	MediaType,
	/// RFC 5988 link relation, such as `canonical` or `preview`
	LinkRelation,
}

/// Natural language values keyed by language tag (`rdf:langString`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LangMap(pub BTreeMap<String, String>);

impl LangMap {
	pub fn new() -> Self {
		LangMap::default()
	}

	pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
		self.0.insert(language.into(), text.into());
		self
	}

	pub fn get(&self, language: &str) -> Option<&str> {
		self.0.get(language).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn parse(raw: &Value) -> Option<Self> {
		let mut out = BTreeMap::new();
		for (language, text) in raw.as_object()? {
			out.insert(language.clone(), text.as_str()?.to_string());
		}
		Some(LangMap(out))
	}

	pub fn to_json(&self) -> Value {
		Value::Object(
			self.0.iter()
				.map(|(k, v)| (k.clone(), Value::String(v.clone())))
				.collect()
		)
	}
}

/// An `xsd:duration`, keeping every component as written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Duration {
	pub negative: bool,
	pub years: Option<u64>,
	pub months: Option<u64>,
	pub days: Option<u64>,
	pub hours: Option<u64>,
	pub minutes: Option<u64>,
	pub seconds: Option<f64>,
}

impl Duration {
	pub fn from_seconds(seconds: f64) -> Self {
		Duration {
			negative: seconds < 0.0,
			seconds: Some(seconds.abs()),
			..Default::default()
		}
	}

	pub fn parse(text: &str) -> Option<Self> {
		let (negative, rest) = match text.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, text),
		};
		let rest = rest.strip_prefix('P')?;
		let (mut date, time) = match rest.split_once('T') {
			Some((date, time)) => (date, Some(time)),
			None => (rest, None),
		};

		let mut out = Duration { negative, ..Default::default() };
		let mut found = false;

		for (designator, slot) in [('Y', &mut out.years), ('M', &mut out.months), ('D', &mut out.days)] {
			if let Some(number) = take_component(&mut date, designator, false) {
				*slot = Some(number.parse().ok()?);
				found = true;
			}
		}
		if !date.is_empty() {
			return None;
		}

		if let Some(mut time) = time {
			let mut found_time = false;
			for (designator, slot) in [('H', &mut out.hours), ('M', &mut out.minutes)] {
				if let Some(number) = take_component(&mut time, designator, false) {
					*slot = Some(number.parse().ok()?);
					found_time = true;
				}
			}
			if let Some(number) = take_component(&mut time, 'S', true) {
				out.seconds = Some(number.parse().ok()?);
				found_time = true;
			}
			if !time.is_empty() || !found_time {
				return None;
			}
			found = true;
		}

		found.then_some(out)
	}

	/// Length in seconds, counting years as 365 days and months as 30 days.
	pub fn total_seconds(&self) -> f64 {
		let whole = self.years.unwrap_or(0) as f64 * 365.0 * 86400.0
			+ self.months.unwrap_or(0) as f64 * 30.0 * 86400.0
			+ self.days.unwrap_or(0) as f64 * 86400.0
			+ self.hours.unwrap_or(0) as f64 * 3600.0
			+ self.minutes.unwrap_or(0) as f64 * 60.0
			+ self.seconds.unwrap_or(0.0);
		if self.negative { -whole } else { whole }
	}

	pub fn to_time_delta(&self) -> Option<chrono::TimeDelta> {
		chrono::TimeDelta::try_milliseconds((self.total_seconds() * 1000.0) as i64)
	}

	pub fn canonical_cmp(&self, other: &Self) -> Ordering {
		self.total_seconds().total_cmp(&other.total_seconds())
			.then_with(|| self.to_string().cmp(&other.to_string()))
	}
}

fn take_component<'a>(cursor: &mut &'a str, designator: char, fractional: bool) -> Option<&'a str> {
	let end = cursor.find(|c: char| !(c.is_ascii_digit() || (fractional && c == '.')))?;
	if end == 0 || !cursor[end..].starts_with(designator) {
		return None;
	}
	let number = &cursor[..end];
	*cursor = &cursor[end + designator.len_utf8()..];
	Some(number)
}

impl std::fmt::Display for Duration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.negative {
			f.write_str("-")?;
		}
		f.write_str("P")?;
		if let Some(x) = self.years { write!(f, "{x}Y")?; }
		if let Some(x) = self.months { write!(f, "{x}M")?; }
		if let Some(x) = self.days { write!(f, "{x}D")?; }
		let date = self.years.is_some() || self.months.is_some() || self.days.is_some();
		let time = self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some();
		if time {
			f.write_str("T")?;
			if let Some(x) = self.hours { write!(f, "{x}H")?; }
			if let Some(x) = self.minutes { write!(f, "{x}M")?; }
			if let Some(x) = self.seconds { write!(f, "{x}S")?; }
		} else if !date {
			f.write_str("T0S")?;
		}
		Ok(())
	}
}

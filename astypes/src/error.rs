/// Failures while reading raw JSON-LD into typed vocabulary values.
///
/// Only [`Error::TypeMismatch`] is considered recoverable while disambiguating a property value:
/// it just means "this alternative is not the right one, try the next". Everything else aborts
/// deserialization of the enclosing document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("no \"type\" in map")]
	MissingType,

	#[error("\"type\" property is unrecognized: {0}")]
	InvalidType(String),

	#[error("\"type\" property is not of {expected} type: {found}")]
	TypeMismatch {
		expected: &'static str,
		found: String,
	},

	#[error("no registered deserializer handles type '{0}'")]
	UnknownType(String),

	#[error("'{found}' is not an accepted alternative for property '{property}'")]
	NotAccepted {
		property: &'static str,
		found: &'static str,
	},

	#[error("expected a json object, got {0}")]
	NotAnObject(&'static str),

	#[error("invalid IRI '{0}'")]
	InvalidIri(String),
}

impl Error {
	pub fn is_mismatch(&self) -> bool {
		matches!(self, Error::TypeMismatch { .. })
	}
}

/// Failures of a [`crate::TypeResolver`], either while building it or while dispatching.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
	#[error("callback parameter {0} is not a vocabulary type")]
	UnsupportedCallback(&'static str),

	#[error("no callback registered for type {0}")]
	NoCallbackMatched(String),

	#[error("type '{name}' of vocabulary '{vocabulary}' is not handled")]
	UnhandledType {
		vocabulary: String,
		name: String,
	},

	#[error("type assertion failed for {0}, value does not match its own type name")]
	TypeAssertion(String),

	#[error("could not deserialize value: {0}")]
	Deserialize(#[from] Error),
}

/// A list position was used after a mutation that invalidated it, or on another list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("list position {0} is not valid for this list")]
pub struct StalePosition(pub usize);

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

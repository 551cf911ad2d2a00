use std::{any::{Any, TypeId}, collections::HashMap};

use crate::{vocab::registry, Manager, ResolveError, TypeKey, VocabularyValue};

type Handler<'a, R> = Box<dyn FnMut(&dyn Any) -> Option<R> + 'a>;

/// A function taking one concrete vocabulary type, waiting to be registered in a
/// [`TypeResolver`].
pub struct Callback<'a, R> {
	type_id: TypeId,
	rust_type: &'static str,
	handler: Handler<'a, R>,
}

impl<'a, R> Callback<'a, R> {
	pub fn new<T: Any, F>(mut f: F) -> Self
	where
		F: FnMut(&T) -> R + 'a,
	{
		Callback {
			type_id: TypeId::of::<T>(),
			rust_type: std::any::type_name::<T>(),
			handler: Box::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&mut f)),
		}
	}
}

/// Dispatches vocabulary values to callbacks by their runtime type name.
///
/// The set of resolvable types is closed: it is exactly the set of types generated in this
/// crate, and callbacks for anything else are refused when building the resolver.
pub struct TypeResolver<'a, R> {
	callbacks: HashMap<TypeKey, Handler<'a, R>>,
}

impl<'a, R> TypeResolver<'a, R> {
	pub fn new(callbacks: impl IntoIterator<Item = Callback<'a, R>>) -> Result<Self, ResolveError> {
		let mut table = HashMap::new();
		for callback in callbacks {
			let Some(registration) = registry().iter().find(|r| r.type_id == callback.type_id) else {
				return Err(ResolveError::UnsupportedCallback(callback.rust_type));
			};
			if table.contains_key(&registration.key) {
				tracing::warn!("ignoring duplicate callback for {}", registration.key.name);
				continue;
			}
			table.insert(registration.key, callback.handler);
		}
		Ok(TypeResolver { callbacks: table })
	}

	/// Invokes the callback registered for the type of `value`, exactly once.
	pub fn resolve(&mut self, value: &dyn VocabularyValue) -> Result<R, ResolveError> {
		let (uri, name) = (value.vocabulary_uri(), value.type_name());
		let Some(registration) = registry().iter().find(|r| r.key.vocabulary.uri() == uri && r.key.name == name) else {
			return Err(ResolveError::UnhandledType { vocabulary: uri.to_string(), name: name.to_string() });
		};
		let Some(handler) = self.callbacks.get_mut(&registration.key) else {
			return Err(ResolveError::NoCallbackMatched(name.to_string()));
		};
		handler(value.as_any()).ok_or_else(|| ResolveError::TypeAssertion(name.to_string()))
	}

	/// Deserializes `value` with `manager`, taking aliases from its `@context`, then dispatches.
	pub fn resolve_json(&mut self, value: &serde_json::Value, manager: &Manager) -> Result<R, ResolveError> {
		let entity = crate::deserialize(value, manager)?;
		self.resolve(&entity)
	}
}

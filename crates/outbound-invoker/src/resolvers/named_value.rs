//! Shared resolution rules for named request values.
//!
//! Every built-in binding (path variable, header, query parameter, cookie) maps a
//! parameter to one or more `name=value` pairs. The rules are:
//!
//! 1. An optional argument is unwrapped. An empty optional is a missing value,
//!    and so is a list that yields no values for a multi-valued binding.
//! 2. A map-typed parameter contributes one pair per entry, named by the entry
//!    key. Entries are always required: a null or empty optional entry is an
//!    error, while a null map contributes nothing.
//! 3. Anything else is a single value under the parameter's effective name. A
//!    missing value is an error when the parameter is required and contributes
//!    nothing otherwise.
//!
//! Values are rendered by the injected [`ConversionService`].

use super::ArgumentResolver;
use crate::request::HttpRequestValuesBuilder;
use outbound_conversion::{ConversionService, DefaultConversionService};
use outbound_core::{
	ArgumentValue, Binding, Error, ParameterDescriptor, Result, TypeDescriptor,
};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// One `name=value` pair produced by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedValue {
	/// Name of the request element.
	pub name: String,
	/// Rendered value.
	pub value: String,
}

impl ResolvedValue {
	/// Creates a pair.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Describes one family of named request values.
pub trait NamedValueKind: Send + Sync + 'static {
	/// Binding handled by resolvers of this kind.
	const BINDING: Binding;

	/// Whether a list argument expands into one value per element.
	///
	/// When `false`, lists are rendered as a single delimited string.
	const MULTI_VALUE: bool;

	/// Whether a declared default value replaces a missing argument.
	const SUPPORTS_DEFAULT: bool;

	/// Stores one resolved value in the request.
	fn add_value(builder: &mut HttpRequestValuesBuilder, value: &ResolvedValue) -> Result<()>;
}

/// Resolver implementing the named-value rules for the kind `K`.
pub struct NamedValueResolver<K> {
	conversion_service: Arc<dyn ConversionService>,
	kind: PhantomData<fn() -> K>,
}

impl<K> Clone for NamedValueResolver<K> {
	fn clone(&self) -> Self {
		Self {
			conversion_service: Arc::clone(&self.conversion_service),
			kind: PhantomData,
		}
	}
}

impl<K: NamedValueKind> fmt::Debug for NamedValueResolver<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NamedValueResolver")
			.field("binding", &K::BINDING)
			.finish()
	}
}

impl<K: NamedValueKind> Default for NamedValueResolver<K> {
	fn default() -> Self {
		Self::new(Arc::new(DefaultConversionService::new()))
	}
}

impl<K: NamedValueKind> NamedValueResolver<K> {
	/// Creates a resolver rendering values with `conversion_service`.
	pub fn new(conversion_service: Arc<dyn ConversionService>) -> Self {
		Self {
			conversion_service,
			kind: PhantomData,
		}
	}

	/// Binding handled by this resolver.
	pub fn binding(&self) -> Binding {
		K::BINDING
	}

	/// Applies the resolution rules and returns the produced pairs.
	///
	/// Nothing is written anywhere; calling this twice with the same input gives
	/// the same output.
	pub fn resolve_values(
		&self,
		parameter: &ParameterDescriptor,
		argument: &ArgumentValue,
	) -> Result<Vec<ResolvedValue>> {
		let is_map = parameter.declared_type().is_map()
			|| argument.unwrap_optional().is_some_and(ArgumentValue::is_map);
		let name = if is_map {
			None
		} else {
			Some(resolve_name(parameter)?)
		};

		let value = match argument {
			ArgumentValue::Optional(_) => match argument.unwrap_optional() {
				Some(inner) => inner,
				None if name.is_none() => &ArgumentValue::Null,
				None => return self.missing(parameter, name, "empty optional"),
			},
			other => other,
		};

		let mut resolved = Vec::new();
		match (name, value) {
			(None, ArgumentValue::Null) => {
				tracing::trace!(
					binding = %K::BINDING,
					"null map argument contributes no values"
				);
			}
			(None, ArgumentValue::Map(entries)) => {
				let entry_type = parameter
					.declared_type()
					.unwrap_optional()
					.element_type()
					.cloned()
					.unwrap_or_default();
				for (key, entry) in entries {
					let Some(entry_value) = entry.unwrap_optional() else {
						return Err(Error::illegal_argument(format!(
							"Missing value for {} '{}' in map argument: {}",
							K::BINDING,
							key,
							entry
						)));
					};
					let before = resolved.len();
					self.convert_into(key, entry_value, entry_type.unwrap_optional(), &mut resolved)?;
					if resolved.len() == before {
						return Err(Error::illegal_argument(format!(
							"Missing value for {} '{}' in map argument: empty list",
							K::BINDING,
							key
						)));
					}
				}
			}
			(None, other) => {
				return Err(Error::illegal_argument(format!(
					"Expected a map argument for {}, got {}",
					parameter.describe(),
					other.kind()
				)));
			}
			(Some(name), ArgumentValue::Null) => return self.missing(parameter, Some(name), "null"),
			(Some(name), value) => {
				let declared = parameter.declared_type().unwrap_optional();
				self.convert_into(&name, value, declared, &mut resolved)?;
				if resolved.is_empty() {
					return self.missing(parameter, Some(name), "empty list");
				}
			}
		}

		Ok(resolved)
	}

	fn missing(
		&self,
		parameter: &ParameterDescriptor,
		name: Option<String>,
		reason: &str,
	) -> Result<Vec<ResolvedValue>> {
		if K::SUPPORTS_DEFAULT
			&& let (Some(name), Some(default)) = (name.as_deref(), parameter.default_value())
		{
			return Ok(vec![ResolvedValue::new(name, default)]);
		}
		if parameter.is_required() {
			return Err(Error::illegal_argument(format!(
				"Missing required {}: argument is {}",
				parameter.describe(),
				reason
			)));
		}
		tracing::trace!(
			parameter = %parameter.describe(),
			reason,
			"skipping missing value for non-required parameter"
		);
		Ok(Vec::new())
	}

	fn convert_into(
		&self,
		name: &str,
		value: &ArgumentValue,
		declared: &TypeDescriptor,
		out: &mut Vec<ResolvedValue>,
	) -> Result<()> {
		if K::MULTI_VALUE
			&& let ArgumentValue::List(items) = value
		{
			let element_type = declared.element_type().cloned().unwrap_or_default();
			for item in items {
				if let Some(text) = self.convert_one(name, item, &element_type)? {
					out.push(ResolvedValue::new(name, text));
				}
			}
			return Ok(());
		}
		if let Some(text) = self.convert_one(name, value, declared)? {
			out.push(ResolvedValue::new(name, text));
		}
		Ok(())
	}

	fn convert_one(
		&self,
		name: &str,
		value: &ArgumentValue,
		declared: &TypeDescriptor,
	) -> Result<Option<String>> {
		self.conversion_service
			.convert(value, declared)
			.map_err(|e| Error::illegal_argument(format!("{} '{}': {}", K::BINDING, name, e)))
	}
}

/// The effective name of a single-valued parameter.
///
/// A non-empty override name wins; otherwise the declared identifier is used.
/// Without either the parameter cannot be bound.
fn resolve_name(parameter: &ParameterDescriptor) -> Result<String> {
	parameter.name().map(str::to_string).ok_or_else(|| {
		Error::illegal_argument(format!(
			"Name for {} of type [{}] not specified, and parameter name information not available",
			parameter.binding(),
			parameter.declared_type()
		))
	})
}

impl<K: NamedValueKind> ArgumentResolver for NamedValueResolver<K> {
	fn resolve(
		&self,
		argument: &ArgumentValue,
		parameter: &ParameterDescriptor,
		builder: &mut HttpRequestValuesBuilder,
	) -> Result<bool> {
		if parameter.binding() != self.binding() {
			return Ok(false);
		}
		let values = self.resolve_values(parameter, argument)?;
		for value in &values {
			K::add_value(builder, value)?;
		}
		tracing::debug!(
			parameter = %parameter.describe(),
			count = values.len(),
			"resolved argument"
		);
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Recorded;

	impl NamedValueKind for Recorded {
		const BINDING: Binding = Binding::RequestParam;
		const MULTI_VALUE: bool = true;
		const SUPPORTS_DEFAULT: bool = true;

		fn add_value(builder: &mut HttpRequestValuesBuilder, value: &ResolvedValue) -> Result<()> {
			builder.add_request_parameter(value.name.clone(), value.value.clone());
			Ok(())
		}
	}

	fn param(name: &str) -> ParameterDescriptor {
		ParameterDescriptor::builder(Binding::RequestParam)
			.declared_name(name)
			.build()
	}

	#[rstest]
	fn test_list_expands_when_multi_valued() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let values = resolver
			.resolve_values(&param("tag"), &ArgumentValue::from(vec!["a", "b"]))
			.unwrap();
		assert_eq!(
			values,
			vec![ResolvedValue::new("tag", "a"), ResolvedValue::new("tag", "b")]
		);
	}

	fn tag(required: bool, default: Option<&str>) -> ParameterDescriptor {
		let mut builder = ParameterDescriptor::builder(Binding::RequestParam)
			.declared_name("tag")
			.declared_type(TypeDescriptor::list(TypeDescriptor::String))
			.required(required);
		if let Some(default) = default {
			builder = builder.default_value(default);
		}
		builder.build()
	}

	#[rstest]
	#[case(ArgumentValue::List(vec![]))]
	#[case(ArgumentValue::List(vec![ArgumentValue::Null, ArgumentValue::empty()]))]
	#[case(ArgumentValue::some(ArgumentValue::List(vec![])))]
	fn test_list_without_values_is_missing(#[case] argument: ArgumentValue) {
		let resolver = NamedValueResolver::<Recorded>::default();

		let values = resolver
			.resolve_values(&tag(true, Some("none")), &argument)
			.unwrap();
		assert_eq!(values, vec![ResolvedValue::new("tag", "none")]);

		let err = resolver
			.resolve_values(&tag(true, None), &argument)
			.unwrap_err();
		assert!(err.is_illegal_argument());
		assert!(err.to_string().contains("empty list"), "{}", err);

		let values = resolver
			.resolve_values(&tag(false, None), &argument)
			.unwrap();
		assert!(values.is_empty());
	}

	#[rstest]
	fn test_map_entry_with_empty_list_fails() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestParam)
			.declared_type(TypeDescriptor::map(TypeDescriptor::list(TypeDescriptor::String)))
			.build();
		let argument = ArgumentValue::map([("tag", ArgumentValue::List(vec![]))]);
		let err = resolver.resolve_values(&parameter, &argument).unwrap_err();
		assert!(err.is_illegal_argument());
	}

	#[rstest]
	fn test_default_replaces_missing_value() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestParam)
			.declared_name("page")
			.default_value("1")
			.build();
		let values = resolver
			.resolve_values(&parameter, &ArgumentValue::Null)
			.unwrap();
		assert_eq!(values, vec![ResolvedValue::new("page", "1")]);
	}

	#[rstest]
	fn test_missing_name_is_illegal_argument() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestParam)
			.declared_type(TypeDescriptor::String)
			.build();
		let err = resolver
			.resolve_values(&parameter, &ArgumentValue::from("x"))
			.unwrap_err();
		assert!(err.is_illegal_argument());
		assert!(err.to_string().contains("parameter name information not available"));
	}

	#[rstest]
	fn test_map_parameter_needs_no_name() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestParam)
			.declared_type(TypeDescriptor::map(TypeDescriptor::String))
			.build();
		let values = resolver
			.resolve_values(&parameter, &ArgumentValue::map([("q", "rust")]))
			.unwrap();
		assert_eq!(values, vec![ResolvedValue::new("q", "rust")]);
	}

	#[rstest]
	fn test_scalar_for_map_parameter_is_rejected() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestParam)
			.declared_type(TypeDescriptor::map(TypeDescriptor::String))
			.build();
		let err = resolver
			.resolve_values(&parameter, &ArgumentValue::from("x"))
			.unwrap_err();
		assert!(err.is_illegal_argument());
	}

	#[rstest]
	fn test_skips_other_bindings() {
		let resolver = NamedValueResolver::<Recorded>::default();
		let parameter = ParameterDescriptor::path_variable("id", TypeDescriptor::String);
		let mut builder = crate::request::HttpRequestValues::builder();
		let handled = resolver
			.resolve(&ArgumentValue::from("x"), &parameter, &mut builder)
			.unwrap();
		assert_eq!(resolver.binding(), Binding::RequestParam);
		assert!(!handled);
		assert!(builder.build().query_params().is_empty());
	}
}

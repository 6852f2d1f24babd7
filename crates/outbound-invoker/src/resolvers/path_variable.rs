//! Path variable resolution.
//!
//! A path variable fills a `{name}` placeholder of the method's URI template.
//! Lists are not expanded (they render as one comma separated value) and there
//! is no default value: a path segment is either supplied or the parameter must
//! be marked as not required.

use super::named_value::{NamedValueKind, NamedValueResolver, ResolvedValue};
use crate::request::HttpRequestValuesBuilder;
use outbound_core::{ArgumentValue, Binding, ParameterDescriptor, Result};
use std::collections::HashMap;

/// A resolved `(name, value)` URI variable.
pub type ResolvedVariable = ResolvedValue;

/// Path variable binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathVariable;

impl NamedValueKind for PathVariable {
	const BINDING: Binding = Binding::PathVariable;
	const MULTI_VALUE: bool = false;
	const SUPPORTS_DEFAULT: bool = false;

	fn add_value(builder: &mut HttpRequestValuesBuilder, value: &ResolvedValue) -> Result<()> {
		if let Some(previous) = builder.set_uri_variable(value.name.clone(), value.value.clone()) {
			tracing::warn!(
				variable = %value.name,
				previous = %previous,
				current = %value.value,
				"URI variable overwritten"
			);
		}
		Ok(())
	}
}

/// Resolves path-variable parameters into URI variables.
///
/// # Examples
///
/// ```
/// use outbound_core::{ArgumentValue, Binding, ParameterDescriptor, TypeDescriptor};
/// use outbound_invoker::resolvers::PathVariableResolver;
///
/// let resolver = PathVariableResolver::default();
/// let param = ParameterDescriptor::path_variable("id", TypeDescriptor::Bool);
///
/// let vars = resolver.resolve_variables(&param, &ArgumentValue::Bool(true)).unwrap();
/// assert_eq!(vars[0].name, "id");
/// assert_eq!(vars[0].value, "true");
/// ```
pub type PathVariableResolver = NamedValueResolver<PathVariable>;

impl NamedValueResolver<PathVariable> {
	/// Resolves one argument into URI variables without touching any request.
	pub fn resolve_variables(
		&self,
		parameter: &ParameterDescriptor,
		argument: &ArgumentValue,
	) -> Result<Vec<ResolvedVariable>> {
		self.resolve_values(parameter, argument)
	}

	/// Resolves one argument and merges the variables into `mapping`.
	///
	/// On error the mapping is left untouched.
	pub fn resolve_into(
		&self,
		parameter: &ParameterDescriptor,
		argument: &ArgumentValue,
		mapping: &mut HashMap<String, String>,
	) -> Result<()> {
		let variables = self.resolve_values(parameter, argument)?;
		mapping.extend(variables.into_iter().map(|v| (v.name, v.value)));
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::HttpRequestValues;
	use crate::resolvers::ArgumentResolver;
	use outbound_conversion::DefaultConversionService;
	use outbound_core::TypeDescriptor;
	use rstest::{fixture, rstest};
	use std::sync::Arc;

	#[fixture]
	fn resolver() -> PathVariableResolver {
		PathVariableResolver::new(Arc::new(DefaultConversionService::new()))
	}

	fn resolve(
		resolver: &PathVariableResolver,
		parameter: &ParameterDescriptor,
		argument: ArgumentValue,
	) -> Result<HashMap<String, String>> {
		let mut builder = HttpRequestValues::builder();
		assert!(resolver.resolve(&argument, parameter, &mut builder)?);
		Ok(builder.build().uri_variables().clone())
	}

	fn named(declared: &str) -> ParameterDescriptor {
		ParameterDescriptor::path_variable(declared, TypeDescriptor::String)
	}

	fn not_required(declared: &str, declared_type: TypeDescriptor) -> ParameterDescriptor {
		ParameterDescriptor::builder(Binding::PathVariable)
			.declared_name(declared)
			.declared_type(declared_type)
			.required(false)
			.build()
	}

	fn map_param(value_type: TypeDescriptor) -> ParameterDescriptor {
		ParameterDescriptor::builder(Binding::PathVariable)
			.declared_name("map")
			.declared_type(TypeDescriptor::map(value_type))
			.build()
	}

	#[rstest]
	fn test_name_from_parameter(resolver: PathVariableResolver) {
		let vars = resolve(&resolver, &named("id"), "test".into()).unwrap();
		assert_eq!(vars.get("id").map(String::as_str), Some("test"));
	}

	#[rstest]
	fn test_override_name_wins(resolver: PathVariableResolver) {
		let parameter = ParameterDescriptor::builder(Binding::PathVariable)
			.declared_name("employee_id")
			.override_name("id")
			.declared_type(TypeDescriptor::String)
			.build();
		let vars = resolve(&resolver, &parameter, "test".into()).unwrap();
		assert_eq!(vars.get("id").map(String::as_str), Some("test"));
		assert!(!vars.contains_key("employee_id"));
	}

	#[rstest]
	fn test_override_name_without_parameter_name(resolver: PathVariableResolver) {
		let parameter = ParameterDescriptor::builder(Binding::PathVariable)
			.override_name("id")
			.build();
		let vars = resolve(&resolver, &parameter, "test".into()).unwrap();
		assert_eq!(vars.get("id").map(String::as_str), Some("test"));
	}

	#[rstest]
	#[case(ArgumentValue::Bool(true), "true")]
	#[case(ArgumentValue::some(true), "true")]
	#[case(ArgumentValue::some("test"), "test")]
	#[case(ArgumentValue::Int(42), "42")]
	#[case(ArgumentValue::from(vec!["a", "b"]), "a,b")]
	fn test_conversion(
		resolver: PathVariableResolver,
		#[case] argument: ArgumentValue,
		#[case] expected: &str,
	) {
		let parameter = ParameterDescriptor::path_variable("id", TypeDescriptor::Any);
		let vars = resolve(&resolver, &parameter, argument).unwrap();
		assert_eq!(vars.get("id").map(String::as_str), Some(expected));
	}

	#[rstest]
	#[case(ArgumentValue::Null)]
	#[case(ArgumentValue::empty())]
	fn test_required_missing_value_fails(
		resolver: PathVariableResolver,
		#[case] argument: ArgumentValue,
	) {
		let err = resolve(&resolver, &named("id"), argument).unwrap_err();
		assert!(err.is_illegal_argument());
		assert!(err.to_string().contains("Missing required path variable 'id'"));
	}

	#[rstest]
	#[case(ArgumentValue::Null, TypeDescriptor::String)]
	#[case(ArgumentValue::empty(), TypeDescriptor::optional(TypeDescriptor::String))]
	fn test_not_required_missing_value_is_skipped(
		resolver: PathVariableResolver,
		#[case] argument: ArgumentValue,
		#[case] declared_type: TypeDescriptor,
	) {
		let vars = resolve(&resolver, &not_required("id", declared_type), argument).unwrap();
		assert!(vars.get("id").is_none());
		assert!(vars.is_empty());
	}

	#[rstest]
	fn test_default_value_is_ignored(resolver: PathVariableResolver) {
		let parameter = ParameterDescriptor::builder(Binding::PathVariable)
			.declared_name("id")
			.default_value("fallback")
			.required(false)
			.build();
		let vars = resolve(&resolver, &parameter, ArgumentValue::Null).unwrap();
		assert!(vars.is_empty());
	}

	#[rstest]
	fn test_map_values(resolver: PathVariableResolver) {
		let vars = resolve(
			&resolver,
			&map_param(TypeDescriptor::String),
			ArgumentValue::map([("id", "test")]),
		)
		.unwrap();
		assert_eq!(vars.get("id").map(String::as_str), Some("test"));
		assert!(!vars.contains_key("map"));
	}

	#[rstest]
	fn test_map_optional_values(resolver: PathVariableResolver) {
		let vars = resolve(
			&resolver,
			&map_param(TypeDescriptor::optional(TypeDescriptor::String)),
			ArgumentValue::map([("id", ArgumentValue::some("test"))]),
		)
		.unwrap();
		assert_eq!(vars.get("id").map(String::as_str), Some("test"));
	}

	#[rstest]
	#[case(ArgumentValue::Null)]
	#[case(ArgumentValue::empty())]
	fn test_null_map_contributes_nothing(resolver: PathVariableResolver, #[case] argument: ArgumentValue) {
		let vars = resolve(&resolver, &map_param(TypeDescriptor::String), argument).unwrap();
		assert!(vars.is_empty());
	}

	#[rstest]
	#[case(ArgumentValue::empty())]
	#[case(ArgumentValue::Null)]
	fn test_map_missing_entry_fails(resolver: PathVariableResolver, #[case] entry: ArgumentValue) {
		let err = resolve(
			&resolver,
			&map_param(TypeDescriptor::optional(TypeDescriptor::String)),
			ArgumentValue::map([("id", entry)]),
		)
		.unwrap_err();
		assert!(err.is_illegal_argument());
	}

	#[rstest]
	fn test_map_entries_required_even_when_parameter_is_not(resolver: PathVariableResolver) {
		let parameter = not_required("map", TypeDescriptor::map(TypeDescriptor::Any));
		let err = resolve(
			&resolver,
			&parameter,
			ArgumentValue::map([("id", ArgumentValue::empty())]),
		)
		.unwrap_err();
		assert!(err.is_illegal_argument());
	}

	#[rstest]
	fn test_runtime_map_on_any_parameter(resolver: PathVariableResolver) {
		let parameter = ParameterDescriptor::path_variable("ignored", TypeDescriptor::Any);
		let vars = resolve(
			&resolver,
			&parameter,
			ArgumentValue::map([("id", "1"), ("slug", "intro")]),
		)
		.unwrap();
		assert_eq!(vars.len(), 2);
		assert_eq!(vars.get("slug").map(String::as_str), Some("intro"));
	}

	#[rstest]
	fn test_resolution_is_idempotent(resolver: PathVariableResolver) {
		let parameter = named("id");
		let argument = ArgumentValue::some("test");
		let first = resolver.resolve_variables(&parameter, &argument).unwrap();
		let second = resolver.resolve_variables(&parameter, &argument).unwrap();
		assert_eq!(first, second);
		assert_eq!(first, vec![ResolvedVariable::new("id", "test")]);
	}

	#[rstest]
	fn test_resolve_into_leaves_mapping_on_error(resolver: PathVariableResolver) {
		let mut mapping = HashMap::new();
		mapping.insert("other".to_string(), "kept".to_string());
		let err = resolver.resolve_into(&named("id"), &ArgumentValue::Null, &mut mapping);
		assert!(err.is_err());
		assert_eq!(mapping.len(), 1);

		resolver
			.resolve_into(&named("id"), &ArgumentValue::from("x"), &mut mapping)
			.unwrap();
		assert_eq!(mapping.get("id").map(String::as_str), Some("x"));
	}
}

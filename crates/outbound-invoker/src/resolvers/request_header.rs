//! Request header resolution.

use super::named_value::{NamedValueKind, NamedValueResolver, ResolvedValue};
use crate::request::HttpRequestValuesBuilder;
use outbound_core::{Binding, Result};

/// Request header binding. Lists add one header value per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestHeader;

impl NamedValueKind for RequestHeader {
	const BINDING: Binding = Binding::RequestHeader;
	const MULTI_VALUE: bool = true;
	const SUPPORTS_DEFAULT: bool = true;

	fn add_value(builder: &mut HttpRequestValuesBuilder, value: &ResolvedValue) -> Result<()> {
		builder.add_header(&value.name, &value.value)?;
		Ok(())
	}
}

/// Resolves request-header parameters.
pub type RequestHeaderResolver = NamedValueResolver<RequestHeader>;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::HttpRequestValues;
	use crate::resolvers::ArgumentResolver;
	use outbound_core::{ArgumentValue, ParameterDescriptor, TypeDescriptor};
	use rstest::rstest;

	fn header(name: &str) -> ParameterDescriptor {
		ParameterDescriptor::builder(Binding::RequestHeader)
			.declared_name("ignored")
			.override_name(name)
			.declared_type(TypeDescriptor::list(TypeDescriptor::String))
			.build()
	}

	#[rstest]
	fn test_list_adds_header_values() {
		let resolver = RequestHeaderResolver::default();
		let mut builder = HttpRequestValues::builder();
		let handled = resolver
			.resolve(
				&ArgumentValue::from(vec!["a", "b"]),
				&header("X-Tag"),
				&mut builder,
			)
			.unwrap();
		assert!(handled);

		let values = builder.build();
		assert_eq!(values.headers().get_all("x-tag").iter().count(), 2);
	}

	#[rstest]
	fn test_default_value_used_for_null() {
		let resolver = RequestHeaderResolver::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestHeader)
			.declared_name("accept-language")
			.default_value("en")
			.build();
		let mut builder = HttpRequestValues::builder();
		resolver
			.resolve(&ArgumentValue::Null, &parameter, &mut builder)
			.unwrap();
		let values = builder.build();
		assert_eq!(
			values.headers().get("accept-language").unwrap().to_str().unwrap(),
			"en"
		);
	}

	#[rstest]
	#[case(ArgumentValue::List(vec![]))]
	#[case(ArgumentValue::List(vec![ArgumentValue::Null]))]
	fn test_empty_list_for_required_header_fails(#[case] argument: ArgumentValue) {
		let resolver = RequestHeaderResolver::default();
		let mut builder = HttpRequestValues::builder();
		let err = resolver
			.resolve(&argument, &header("X-Tag"), &mut builder)
			.unwrap_err();
		assert!(err.is_illegal_argument());
		assert!(builder.build().headers().is_empty());
	}

	#[rstest]
	fn test_empty_list_falls_back_to_default() {
		let resolver = RequestHeaderResolver::default();
		let parameter = ParameterDescriptor::builder(Binding::RequestHeader)
			.declared_name("x-tag")
			.declared_type(TypeDescriptor::list(TypeDescriptor::String))
			.default_value("d")
			.build();
		let mut builder = HttpRequestValues::builder();
		resolver
			.resolve(
				&ArgumentValue::List(vec![ArgumentValue::Null]),
				&parameter,
				&mut builder,
			)
			.unwrap();
		assert_eq!(builder.build().headers().get("x-tag").unwrap(), "d");
	}

	#[rstest]
	fn test_invalid_header_name_is_illegal_argument() {
		let resolver = RequestHeaderResolver::default();
		let mut builder = HttpRequestValues::builder();
		let err = resolver
			.resolve(&ArgumentValue::from("x"), &header("bad name"), &mut builder)
			.unwrap_err();
		assert!(err.is_illegal_argument());
	}
}

//! Query parameter resolution.

use super::named_value::{NamedValueKind, NamedValueResolver, ResolvedValue};
use crate::request::HttpRequestValuesBuilder;
use outbound_core::{Binding, Result};

/// Query parameter binding. Lists add one value per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestParam;

impl NamedValueKind for RequestParam {
	const BINDING: Binding = Binding::RequestParam;
	const MULTI_VALUE: bool = true;
	const SUPPORTS_DEFAULT: bool = true;

	fn add_value(builder: &mut HttpRequestValuesBuilder, value: &ResolvedValue) -> Result<()> {
		builder.add_request_parameter(value.name.clone(), value.value.clone());
		Ok(())
	}
}

/// Resolves query-parameter parameters.
pub type RequestParamResolver = NamedValueResolver<RequestParam>;

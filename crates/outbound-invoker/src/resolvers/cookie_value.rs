//! Cookie resolution.

use super::named_value::{NamedValueKind, NamedValueResolver, ResolvedValue};
use crate::request::HttpRequestValuesBuilder;
use outbound_core::{Binding, Result};

/// Cookie binding. Lists add one cookie per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieValue;

impl NamedValueKind for CookieValue {
	const BINDING: Binding = Binding::CookieValue;
	const MULTI_VALUE: bool = true;
	const SUPPORTS_DEFAULT: bool = true;

	fn add_value(builder: &mut HttpRequestValuesBuilder, value: &ResolvedValue) -> Result<()> {
		builder.add_cookie(value.name.clone(), value.value.clone());
		Ok(())
	}
}

/// Resolves cookie parameters.
pub type CookieValueResolver = NamedValueResolver<CookieValue>;

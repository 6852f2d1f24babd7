//! Argument resolvers.
//!
//! An [`ArgumentResolver`] inspects one declared parameter together with its
//! runtime argument and contributes to the request under construction. The
//! built-in resolvers share the rules implemented by [`NamedValueResolver`] and
//! differ only in the request element they populate.

use crate::request::HttpRequestValuesBuilder;
use outbound_core::{ArgumentValue, ParameterDescriptor, Result};

pub mod cookie_value;
pub mod named_value;
pub mod path_variable;
pub mod request_header;
pub mod request_param;

pub use cookie_value::{CookieValue, CookieValueResolver};
pub use named_value::{NamedValueKind, NamedValueResolver, ResolvedValue};
pub use path_variable::{PathVariable, PathVariableResolver, ResolvedVariable};
pub use request_header::{RequestHeader, RequestHeaderResolver};
pub use request_param::{RequestParam, RequestParamResolver};

/// Turns a method argument into request values.
pub trait ArgumentResolver: Send + Sync {
	/// Resolves `argument` for `parameter` into `builder`.
	///
	/// Returns `Ok(false)` when this resolver does not handle the parameter, so
	/// the next resolver in the chain can try.
	fn resolve(
		&self,
		argument: &ArgumentValue,
		parameter: &ParameterDescriptor,
		builder: &mut HttpRequestValuesBuilder,
	) -> Result<bool>;
}

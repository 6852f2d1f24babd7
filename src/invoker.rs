//! Argument resolvers, service methods, proxies and service definitions.
//!
//! # Examples
//!
//! ```
//! use outbound::invoker::resolvers::PathVariableResolver;
//! use outbound::core::{ArgumentValue, ParameterDescriptor, TypeDescriptor};
//!
//! let resolver = PathVariableResolver::default();
//! let param = ParameterDescriptor::path_variable("id", TypeDescriptor::String);
//! assert!(resolver.resolve_variables(&param, &ArgumentValue::Null).is_err());
//! ```

pub use outbound_invoker::*;

//! # Outbound
//!
//! Declarative HTTP service clients for Rust.
//!
//! A service is declared as a set of methods, each with a URI template and a list
//! of parameters. Invoking a method resolves its runtime arguments into request
//! values: URI template variables, headers, query parameters and cookies. The
//! request values are then handed to a client adapter, which owns transport.
//!
//! ## Crates
//!
//! - [`core`] - argument values, type and parameter descriptors, errors
//! - [`conversion`] - rendering argument values as request strings
//! - [`invoker`] - argument resolvers, service methods, proxies and service definitions
//!
//! ## Feature Flags
//!
//! - `invoker` (default) - the request-building pipeline
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "invoker")]
//! # {
//! use outbound::prelude::*;
//! use std::sync::Arc;
//!
//! let adapter = Arc::new(RecordingClientAdapter::new());
//! let proxy = HttpServiceProxy::builder(adapter.clone())
//!     .method(
//!         ServiceMethod::new("get_employee", http::Method::GET)
//!             .with_url("/employees/{id}")
//!             .with_parameter(
//!                 ParameterDescriptor::builder(Binding::PathVariable)
//!                     .declared_name("employee_id")
//!                     .override_name("id")
//!                     .declared_type(TypeDescriptor::Int)
//!                     .build(),
//!             ),
//!     )
//!     .build()
//!     .unwrap();
//!
//! proxy.invoke("get_employee", vec![ArgumentValue::Int(7)]).unwrap();
//! assert_eq!(adapter.uri_variables().get("id").map(String::as_str), Some("7"));
//! # }
//! ```

pub mod conversion;
pub mod core;
#[cfg(feature = "invoker")]
pub mod invoker;

// Re-export core types
pub use outbound_core::{
	ArgumentValue, Binding, Error, ParameterDescriptor, Result, TypeDescriptor,
};

// Re-export conversion
pub use outbound_conversion::{ConversionError, ConversionService, DefaultConversionService};

// Re-export the request-building pipeline
#[cfg(feature = "invoker")]
pub use outbound_invoker::{
	ArgumentResolver, ClientAdapter, CookieValueResolver, HttpRequestValues, HttpServiceProxy,
	PathVariableResolver, RequestHeaderResolver, RequestParamResolver, ResolvedVariable,
	ServiceDefinition, ServiceMethod, SettingsError,
};

/// Commonly used types.
pub mod prelude {
	pub use outbound_conversion::{ConversionService, DefaultConversionService};
	pub use outbound_core::{ArgumentValue, Binding, Error, ParameterDescriptor, TypeDescriptor};

	#[cfg(feature = "invoker")]
	pub use outbound_invoker::{
		ArgumentResolver, ClientAdapter, HttpRequestValues, HttpServiceProxy,
		PathVariableResolver, ServiceDefinition, ServiceMethod, testing::RecordingClientAdapter,
	};
}

//! # Outbound Invoker
//!
//! Builds HTTP requests from invocations of declared service methods.
//!
//! A [`ServiceMethod`](method::ServiceMethod) lists its parameters as
//! [`ParameterDescriptor`](outbound_core::ParameterDescriptor)s. When the method
//! is invoked, each argument is handed to a chain of
//! [`ArgumentResolver`](resolvers::ArgumentResolver)s which write URI variables,
//! headers, query parameters and cookies into the request under construction.
//! The finished [`HttpRequestValues`](request::HttpRequestValues) go to a
//! [`ClientAdapter`](proxy::ClientAdapter).
//!
//! ## Resolvers
//!
//! - [`PathVariableResolver`](resolvers::PathVariableResolver) - URI template variables
//! - [`RequestHeaderResolver`](resolvers::RequestHeaderResolver) - headers
//! - [`RequestParamResolver`](resolvers::RequestParamResolver) - query parameters
//! - [`CookieValueResolver`](resolvers::CookieValueResolver) - cookies
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use outbound_core::ArgumentValue;
//! use outbound_invoker::proxy::HttpServiceProxy;
//! use outbound_invoker::settings::ServiceDefinition;
//! use outbound_invoker::testing::RecordingClientAdapter;
//!
//! let definition = ServiceDefinition::from_toml_str(r#"
//! [[methods]]
//! name = "get_user"
//! url = "/users/{id}"
//!
//! [[methods.parameters]]
//! name = "id"
//! binding = "path_variable"
//! "#).unwrap();
//!
//! let adapter = Arc::new(RecordingClientAdapter::new());
//! let proxy = HttpServiceProxy::builder(adapter.clone())
//!     .definition(definition)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! proxy.invoke("get_user", vec![ArgumentValue::Int(42)]).unwrap();
//! let request = adapter.request_values().unwrap();
//! assert_eq!(request.expand_uri().unwrap().as_deref(), Some("/users/42"));
//! ```

pub mod method;
pub mod proxy;
pub mod request;
pub mod resolvers;
pub mod settings;
pub mod template;
pub mod testing;

pub use method::ServiceMethod;
pub use proxy::{ClientAdapter, HttpServiceProxy, HttpServiceProxyBuilder};
pub use request::{HttpRequestValues, HttpRequestValuesBuilder};
pub use resolvers::{
	ArgumentResolver, CookieValueResolver, NamedValueKind, NamedValueResolver,
	PathVariableResolver, RequestHeaderResolver, RequestParamResolver, ResolvedValue,
	ResolvedVariable,
};
pub use settings::{ServiceDefinition, SettingsError};

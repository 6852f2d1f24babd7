//! Service proxies.
//!
//! An [`HttpServiceProxy`] stands in for a declared service: callers invoke
//! methods by name with runtime arguments, the proxy resolves the arguments into
//! [`HttpRequestValues`] and hands them to a [`ClientAdapter`].

use crate::method::ServiceMethod;
use crate::request::HttpRequestValues;
use crate::resolvers::{
	ArgumentResolver, CookieValueResolver, PathVariableResolver, RequestHeaderResolver,
	RequestParamResolver,
};
use crate::settings::{ServiceDefinition, SettingsError};
use indexmap::IndexMap;
use outbound_conversion::{ConversionService, DefaultConversionService};
use outbound_core::{ArgumentValue, Error, Result};
use std::fmt;
use std::sync::Arc;

/// Receives the request values of every invocation.
pub trait ClientAdapter: Send + Sync {
	/// Exchanges the request. Transport is entirely up to the implementation.
	fn exchange(&self, request: &HttpRequestValues) -> Result<()>;
}

/// Client-side stand-in for a declared HTTP service.
pub struct HttpServiceProxy {
	name: String,
	methods: IndexMap<String, ServiceMethod>,
	resolvers: Vec<Arc<dyn ArgumentResolver>>,
	adapter: Arc<dyn ClientAdapter>,
}

impl fmt::Debug for HttpServiceProxy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpServiceProxy")
			.field("name", &self.name)
			.field("methods", &self.methods.keys().collect::<Vec<_>>())
			.field("resolvers", &self.resolvers.len())
			.finish()
	}
}

impl HttpServiceProxy {
	/// Starts building a proxy that sends requests through `adapter`.
	pub fn builder(adapter: Arc<dyn ClientAdapter>) -> HttpServiceProxyBuilder {
		HttpServiceProxyBuilder::new(adapter)
	}

	/// Service name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Looks up a declared method.
	pub fn method(&self, name: &str) -> Option<&ServiceMethod> {
		self.methods.get(name)
	}

	/// Names of all declared methods, in declaration order.
	pub fn method_names(&self) -> impl Iterator<Item = &str> {
		self.methods.keys().map(String::as_str)
	}

	/// Resolves the arguments of `method` without exchanging anything.
	pub fn build_request(&self, method: &str, arguments: &[ArgumentValue]) -> Result<HttpRequestValues> {
		let service_method = self
			.methods
			.get(method)
			.ok_or_else(|| Error::UnknownMethod(method.to_string()))?;
		service_method.build_request(arguments, &self.resolvers)
	}

	/// Invokes `method` with `arguments` and exchanges the resulting request.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use http::Method;
	/// use outbound_core::{ArgumentValue, ParameterDescriptor, TypeDescriptor};
	/// use outbound_invoker::method::ServiceMethod;
	/// use outbound_invoker::proxy::HttpServiceProxy;
	/// use outbound_invoker::testing::RecordingClientAdapter;
	///
	/// let adapter = Arc::new(RecordingClientAdapter::new());
	/// let proxy = HttpServiceProxy::builder(adapter.clone())
	///     .method(
	///         ServiceMethod::new("execute", Method::GET)
	///             .with_url("/{id}")
	///             .with_parameter(ParameterDescriptor::path_variable("id", TypeDescriptor::String)),
	///     )
	///     .build()
	///     .unwrap();
	///
	/// proxy.invoke("execute", vec![ArgumentValue::from("test")]).unwrap();
	/// assert_eq!(adapter.uri_variables().get("id").map(String::as_str), Some("test"));
	/// ```
	pub fn invoke(&self, method: &str, arguments: Vec<ArgumentValue>) -> Result<()> {
		let request = self.build_request(method, &arguments)?;
		tracing::debug!(
			service = %self.name,
			method,
			http_method = %request.method(),
			uri_template = ?request.uri_template(),
			"exchanging request"
		);
		self.adapter.exchange(&request)
	}
}

/// Builder for [`HttpServiceProxy`].
pub struct HttpServiceProxyBuilder {
	name: String,
	adapter: Arc<dyn ClientAdapter>,
	conversion_service: Arc<dyn ConversionService>,
	custom_resolvers: Vec<Arc<dyn ArgumentResolver>>,
	methods: Vec<ServiceMethod>,
}

impl HttpServiceProxyBuilder {
	fn new(adapter: Arc<dyn ClientAdapter>) -> Self {
		Self {
			name: "service".to_string(),
			adapter,
			conversion_service: Arc::new(DefaultConversionService::new()),
			custom_resolvers: Vec::new(),
			methods: Vec::new(),
		}
	}

	/// Sets the service name used in logs.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Replaces the conversion service used by the built-in resolvers.
	pub fn conversion_service(mut self, service: Arc<dyn ConversionService>) -> Self {
		self.conversion_service = service;
		self
	}

	/// Adds a resolver consulted before the built-in ones.
	pub fn custom_resolver(mut self, resolver: Arc<dyn ArgumentResolver>) -> Self {
		self.custom_resolvers.push(resolver);
		self
	}

	/// Declares a method.
	pub fn method(mut self, method: ServiceMethod) -> Self {
		self.methods.push(method);
		self
	}

	/// Declares every method of a service definition and adopts its name.
	pub fn definition(mut self, definition: ServiceDefinition) -> std::result::Result<Self, SettingsError> {
		if let Some(name) = definition.name.clone() {
			self.name = name;
		}
		self.methods.extend(definition.into_methods()?);
		Ok(self)
	}

	/// Builds the proxy.
	///
	/// Fails with [`Error::IllegalArgument`] when two methods share a name.
	pub fn build(self) -> Result<HttpServiceProxy> {
		let mut methods = IndexMap::with_capacity(self.methods.len());
		for method in self.methods {
			let name = method.name().to_string();
			if methods.insert(name.clone(), method).is_some() {
				return Err(Error::illegal_argument(format!(
					"Duplicate method '{}' in service '{}'",
					name, self.name
				)));
			}
		}

		let conversion = self.conversion_service;
		let mut resolvers = self.custom_resolvers;
		resolvers.push(Arc::new(PathVariableResolver::new(Arc::clone(&conversion))));
		resolvers.push(Arc::new(RequestHeaderResolver::new(Arc::clone(&conversion))));
		resolvers.push(Arc::new(RequestParamResolver::new(Arc::clone(&conversion))));
		resolvers.push(Arc::new(CookieValueResolver::new(conversion)));

		Ok(HttpServiceProxy {
			name: self.name,
			methods,
			resolvers,
			adapter: self.adapter,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::HttpRequestValuesBuilder;
	use crate::testing::RecordingClientAdapter;
	use http::Method;
	use outbound_core::{Binding, ParameterDescriptor, TypeDescriptor};
	use rstest::rstest;

	struct ApiKeyResolver;

	impl ArgumentResolver for ApiKeyResolver {
		fn resolve(
			&self,
			argument: &ArgumentValue,
			parameter: &ParameterDescriptor,
			builder: &mut HttpRequestValuesBuilder,
		) -> Result<bool> {
			if parameter.name() != Some("api_key") {
				return Ok(false);
			}
			builder.add_header("x-api-key", &argument.to_string())?;
			Ok(true)
		}
	}

	fn echo_method() -> ServiceMethod {
		ServiceMethod::new("echo", Method::POST)
			.with_url("/echo/{id}")
			.with_parameter(ParameterDescriptor::path_variable("id", TypeDescriptor::String))
	}

	#[rstest]
	fn test_unknown_method() {
		let proxy = HttpServiceProxy::builder(Arc::new(RecordingClientAdapter::new()))
			.build()
			.unwrap();
		let err = proxy.invoke("missing", vec![]).unwrap_err();
		assert_eq!(err, Error::UnknownMethod("missing".to_string()));
	}

	#[rstest]
	fn test_duplicate_method_rejected() {
		let err = HttpServiceProxy::builder(Arc::new(RecordingClientAdapter::new()))
			.method(echo_method())
			.method(echo_method())
			.build()
			.unwrap_err();
		assert!(err.to_string().contains("Duplicate method 'echo'"));
	}

	#[rstest]
	fn test_custom_resolver_runs_first() {
		let adapter = Arc::new(RecordingClientAdapter::new());
		let proxy = HttpServiceProxy::builder(adapter.clone())
			.custom_resolver(Arc::new(ApiKeyResolver))
			.method(
				echo_method().with_parameter(
					ParameterDescriptor::builder(Binding::RequestParam)
						.declared_name("api_key")
						.build(),
				),
			)
			.build()
			.unwrap();

		proxy
			.invoke("echo", vec!["1".into(), "secret".into()])
			.unwrap();

		let request = adapter.request_values().unwrap();
		assert_eq!(request.method(), &Method::POST);
		assert_eq!(request.headers().get("x-api-key").unwrap(), "secret");
		assert!(request.query_params().is_empty());
	}

	#[rstest]
	fn test_failed_resolution_does_not_exchange() {
		let adapter = Arc::new(RecordingClientAdapter::new());
		let proxy = HttpServiceProxy::builder(adapter.clone())
			.method(echo_method())
			.build()
			.unwrap();

		let err = proxy.invoke("echo", vec![ArgumentValue::Null]).unwrap_err();
		assert!(err.is_illegal_argument());
		assert!(adapter.request_values().is_none());
	}

	#[rstest]
	fn test_method_names_in_declaration_order() {
		let proxy = HttpServiceProxy::builder(Arc::new(RecordingClientAdapter::new()))
			.method(ServiceMethod::new("b", Method::GET))
			.method(ServiceMethod::new("a", Method::GET))
			.build()
			.unwrap();
		assert_eq!(proxy.method_names().collect::<Vec<_>>(), vec!["b", "a"]);
	}
}

//! Request values collected while a service method is invoked.

use crate::template::{self, encode_query_component};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use indexmap::IndexMap;
use outbound_core::{Error, Result};
use std::collections::HashMap;

/// Everything the resolvers contributed to one outgoing request.
///
/// Transport is out of scope: a [`ClientAdapter`](crate::proxy::ClientAdapter)
/// receives these values and decides what to do with them.
#[derive(Debug, Clone)]
pub struct HttpRequestValues {
	method: Method,
	uri_template: Option<String>,
	uri_variables: HashMap<String, String>,
	headers: HeaderMap,
	query_params: IndexMap<String, Vec<String>>,
	cookies: IndexMap<String, Vec<String>>,
}

impl HttpRequestValues {
	/// Starts an empty builder for a `GET` request.
	pub fn builder() -> HttpRequestValuesBuilder {
		HttpRequestValuesBuilder::default()
	}

	/// HTTP method.
	pub fn method(&self) -> &Method {
		&self.method
	}

	/// URI template, if the method declared one.
	pub fn uri_template(&self) -> Option<&str> {
		self.uri_template.as_deref()
	}

	/// Variables used to expand the URI template.
	pub fn uri_variables(&self) -> &HashMap<String, String> {
		&self.uri_variables
	}

	/// Request headers.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Query parameters, in insertion order.
	pub fn query_params(&self) -> &IndexMap<String, Vec<String>> {
		&self.query_params
	}

	/// Cookies, in insertion order.
	pub fn cookies(&self) -> &IndexMap<String, Vec<String>> {
		&self.cookies
	}

	/// Expands the URI template and appends the encoded query string.
	///
	/// Returns `None` when no template was declared.
	///
	/// # Examples
	///
	/// ```
	/// use outbound_invoker::request::HttpRequestValues;
	///
	/// let mut builder = HttpRequestValues::builder();
	/// builder.set_uri_template("/users/{id}");
	/// builder.set_uri_variable("id", "42");
	/// builder.add_request_parameter("expand", "roles");
	/// let values = builder.build();
	///
	/// assert_eq!(values.expand_uri().unwrap().as_deref(), Some("/users/42?expand=roles"));
	/// ```
	pub fn expand_uri(&self) -> Result<Option<String>> {
		let Some(template) = self.uri_template.as_deref() else {
			return Ok(None);
		};
		let mut uri = template::expand(template, &self.uri_variables)?;
		if !self.query_params.is_empty() {
			let query = self
				.query_params
				.iter()
				.flat_map(|(name, values)| {
					values.iter().map(move |value| {
						format!(
							"{}={}",
							encode_query_component(name),
							encode_query_component(value)
						)
					})
				})
				.collect::<Vec<_>>()
				.join("&");
			uri.push(if uri.contains('?') { '&' } else { '?' });
			uri.push_str(&query);
		}
		Ok(Some(uri))
	}

	/// Renders the cookies as a single `Cookie` header value.
	pub fn cookie_header(&self) -> Option<String> {
		if self.cookies.is_empty() {
			return None;
		}
		let pairs = self
			.cookies
			.iter()
			.flat_map(|(name, values)| values.iter().map(move |value| format!("{}={}", name, value)))
			.collect::<Vec<_>>();
		Some(pairs.join("; "))
	}
}

/// Mutable request-building context owned by a single invocation.
#[derive(Debug, Clone)]
pub struct HttpRequestValuesBuilder {
	method: Method,
	uri_template: Option<String>,
	uri_variables: HashMap<String, String>,
	headers: HeaderMap,
	query_params: IndexMap<String, Vec<String>>,
	cookies: IndexMap<String, Vec<String>>,
}

impl Default for HttpRequestValuesBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			uri_template: None,
			uri_variables: HashMap::new(),
			headers: HeaderMap::new(),
			query_params: IndexMap::new(),
			cookies: IndexMap::new(),
		}
	}
}

impl HttpRequestValuesBuilder {
	/// Sets the HTTP method.
	pub fn set_method(&mut self, method: Method) -> &mut Self {
		self.method = method;
		self
	}

	/// Sets the URI template.
	pub fn set_uri_template(&mut self, template: impl Into<String>) -> &mut Self {
		self.uri_template = Some(template.into());
		self
	}

	/// Sets a URI variable and returns the value it replaced, if any.
	pub fn set_uri_variable(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Option<String> {
		self.uri_variables.insert(name.into(), value.into())
	}

	/// Current URI variables.
	pub fn uri_variables(&self) -> &HashMap<String, String> {
		&self.uri_variables
	}

	/// Appends a header value.
	///
	/// Fails with [`Error::IllegalArgument`] for an invalid header name or value.
	pub fn add_header(&mut self, name: &str, value: &str) -> Result<&mut Self> {
		let header_name = HeaderName::from_bytes(name.as_bytes())
			.map_err(|e| Error::illegal_argument(format!("Invalid header name '{}': {}", name, e)))?;
		let header_value = HeaderValue::from_str(value).map_err(|e| {
			Error::illegal_argument(format!("Invalid value for header '{}': {}", name, e))
		})?;
		self.headers.append(header_name, header_value);
		Ok(self)
	}

	/// Appends a query parameter value.
	pub fn add_request_parameter(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> &mut Self {
		self.query_params
			.entry(name.into())
			.or_default()
			.push(value.into());
		self
	}

	/// Appends a cookie value.
	pub fn add_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.cookies.entry(name.into()).or_default().push(value.into());
		self
	}

	/// Finishes the request values.
	pub fn build(self) -> HttpRequestValues {
		HttpRequestValues {
			method: self.method,
			uri_template: self.uri_template,
			uri_variables: self.uri_variables,
			headers: self.headers,
			query_params: self.query_params,
			cookies: self.cookies,
		}
	}
}

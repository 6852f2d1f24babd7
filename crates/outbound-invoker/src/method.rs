//! Declared service methods.

use crate::request::{HttpRequestValues, HttpRequestValuesBuilder};
use crate::resolvers::ArgumentResolver;
use http::Method;
use outbound_core::{ArgumentValue, Error, ParameterDescriptor, Result};
use std::sync::Arc;

/// A method of an HTTP service: HTTP method, URI template and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMethod {
	name: String,
	http_method: Method,
	url: Option<String>,
	parameters: Vec<ParameterDescriptor>,
}

impl ServiceMethod {
	/// Declares a method without URL or parameters.
	pub fn new(name: impl Into<String>, http_method: Method) -> Self {
		Self {
			name: name.into(),
			http_method,
			url: None,
			parameters: Vec::new(),
		}
	}

	/// Sets the URI template.
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// Appends a parameter.
	pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Method name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// HTTP method.
	pub fn http_method(&self) -> &Method {
		&self.http_method
	}

	/// URI template.
	pub fn url(&self) -> Option<&str> {
		self.url.as_deref()
	}

	/// Declared parameters, in order.
	pub fn parameters(&self) -> &[ParameterDescriptor] {
		&self.parameters
	}

	/// Runs `resolvers` over every argument and collects the request values.
	///
	/// Each argument goes to the first resolver that accepts its parameter.
	pub fn build_request(
		&self,
		arguments: &[ArgumentValue],
		resolvers: &[Arc<dyn ArgumentResolver>],
	) -> Result<HttpRequestValues> {
		if arguments.len() != self.parameters.len() {
			return Err(Error::illegal_argument(format!(
				"Method '{}' expects {} argument(s), got {}",
				self.name,
				self.parameters.len(),
				arguments.len()
			)));
		}

		let mut builder = HttpRequestValuesBuilder::default();
		builder.set_method(self.http_method.clone());
		if let Some(url) = &self.url {
			builder.set_uri_template(url.clone());
		}

		for (index, (parameter, argument)) in self.parameters.iter().zip(arguments).enumerate() {
			let mut handled = false;
			for resolver in resolvers {
				if resolver.resolve(argument, parameter, &mut builder)? {
					handled = true;
					break;
				}
			}
			if !handled {
				return Err(Error::UnresolvedArgument {
					method: self.name.clone(),
					index,
				});
			}
		}

		Ok(builder.build())
	}
}

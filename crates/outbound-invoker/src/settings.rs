//! Service definitions loaded from TOML.
//!
//! A definition declares the methods of a service and the binding of every
//! parameter, which is the information an annotated interface would carry:
//!
//! ```toml
//! name = "users"
//! base_url = "/api/v1"
//!
//! [[methods]]
//! name = "get_user"
//! method = "GET"
//! url = "/users/{id}"
//!
//! [[methods.parameters]]
//! name = "user_id"
//! binding = "path_variable"
//! value = "id"
//! type = "string"
//! ```

use crate::method::ServiceMethod;
use crate::template::extract_variable_names;
use http::Method;
use outbound_core::{Binding, ParameterDescriptor, TypeDescriptor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Errors raised while loading a service definition.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid service definition: {0}")]
	Invalid(String),
}

/// A declared HTTP service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDefinition {
	/// Service name.
	#[serde(default)]
	pub name: Option<String>,
	/// Prefix prepended to every method URL.
	#[serde(default)]
	pub base_url: Option<String>,
	/// Declared methods.
	#[serde(default)]
	pub methods: Vec<MethodDefinition>,
}

/// A declared service method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDefinition {
	/// Method name used for invocation.
	pub name: String,
	/// HTTP method, `GET` when omitted.
	#[serde(default = "default_http_method")]
	pub method: String,
	/// URI template.
	#[serde(default)]
	pub url: Option<String>,
	/// Declared parameters, in argument order.
	#[serde(default)]
	pub parameters: Vec<ParameterDefinition>,
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDefinition {
	/// The parameter's own identifier.
	#[serde(default)]
	pub name: Option<String>,
	/// Request element the parameter populates.
	pub binding: Binding,
	/// Override name.
	#[serde(default, alias = "rename")]
	pub value: Option<String>,
	/// Whether a missing value is an error.
	#[serde(default = "default_required")]
	pub required: bool,
	/// Declared type.
	#[serde(default, rename = "type")]
	pub ty: TypeDescriptor,
	/// Fallback for a missing value. Not allowed on path variables.
	#[serde(default)]
	pub default: Option<String>,
}

fn default_http_method() -> String {
	"GET".to_string()
}

fn default_required() -> bool {
	true
}

impl ServiceDefinition {
	/// Parses and validates a definition.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let definition: Self = toml::from_str(source)?;
		definition.validate()?;
		Ok(definition)
	}

	/// Reads, parses and validates a definition file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Checks method names, HTTP methods and parameter attributes.
	pub fn validate(&self) -> Result<(), SettingsError> {
		let mut seen = HashSet::new();
		for method in &self.methods {
			if method.name.trim().is_empty() {
				return Err(SettingsError::Invalid("method name cannot be empty".to_string()));
			}
			if !seen.insert(method.name.as_str()) {
				return Err(SettingsError::Invalid(format!(
					"duplicate method '{}'",
					method.name
				)));
			}
			method.http_method()?;
			let url = method.full_url(self.base_url.as_deref()).unwrap_or_default();
			let variables = extract_variable_names(&url);
			for (index, parameter) in method.parameters.iter().enumerate() {
				if parameter.binding != Binding::PathVariable {
					continue;
				}
				if parameter.default.is_some() {
					return Err(SettingsError::Invalid(format!(
						"parameter [{}] of method '{}': path variables cannot declare a default",
						index, method.name
					)));
				}
				if parameter.ty.is_map() {
					continue;
				}
				if let Some(name) = parameter.effective_name()
					&& !variables.iter().any(|variable| variable == name)
				{
					return Err(SettingsError::Invalid(format!(
						"parameter [{}] of method '{}': path variable '{}' does not appear in URL '{}'",
						index, method.name, name, url
					)));
				}
			}
		}
		Ok(())
	}

	/// Converts the definition into service methods.
	pub fn into_methods(self) -> Result<Vec<ServiceMethod>, SettingsError> {
		self.validate()?;
		let base_url = self.base_url;
		self.methods
			.into_iter()
			.map(|method| method.into_service_method(base_url.as_deref()))
			.collect()
	}
}

impl MethodDefinition {
	fn http_method(&self) -> Result<Method, SettingsError> {
		Method::from_bytes(self.method.to_ascii_uppercase().as_bytes()).map_err(|e| {
			SettingsError::Invalid(format!(
				"method '{}' has invalid HTTP method '{}': {}",
				self.name, self.method, e
			))
		})
	}

	/// The method URL joined onto `base_url`.
	fn full_url(&self, base_url: Option<&str>) -> Option<String> {
		match (base_url, self.url.as_deref()) {
			(Some(base), Some(url)) => Some(format!(
				"{}/{}",
				base.trim_end_matches('/'),
				url.trim_start_matches('/')
			)),
			(Some(base), None) => Some(base.to_string()),
			(None, Some(url)) => Some(url.to_string()),
			(None, None) => None,
		}
	}

	fn into_service_method(self, base_url: Option<&str>) -> Result<ServiceMethod, SettingsError> {
		let mut service_method = ServiceMethod::new(self.name.clone(), self.http_method()?);
		if let Some(url) = self.full_url(base_url) {
			service_method = service_method.with_url(url);
		}
		for parameter in self.parameters {
			service_method = service_method.with_parameter(parameter.into_descriptor());
		}
		Ok(service_method)
	}
}

impl ParameterDefinition {
	fn effective_name(&self) -> Option<&str> {
		self.value
			.as_deref()
			.filter(|value| !value.is_empty())
			.or_else(|| self.name.as_deref().filter(|name| !name.is_empty()))
	}

	/// Builds the immutable descriptor.
	pub fn into_descriptor(self) -> ParameterDescriptor {
		let mut builder = ParameterDescriptor::builder(self.binding)
			.required(self.required)
			.declared_type(self.ty);
		if let Some(name) = self.name {
			builder = builder.declared_name(name);
		}
		if let Some(value) = self.value {
			builder = builder.override_name(value);
		}
		if let Some(default) = self.default {
			builder = builder.default_value(default);
		}
		builder.build()
	}
}

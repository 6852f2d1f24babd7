//! Parameter metadata, created once per declared method parameter.

use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The request element a parameter is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
	/// A `{name}` placeholder in the URL template.
	PathVariable,
	/// A request header.
	RequestHeader,
	/// A query parameter.
	RequestParam,
	/// A cookie.
	CookieValue,
}

impl fmt::Display for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::PathVariable => "path variable",
			Self::RequestHeader => "request header",
			Self::RequestParam => "request param",
			Self::CookieValue => "cookie value",
		};
		f.write_str(label)
	}
}

/// Immutable metadata about one parameter of a service method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
	declared_name: Option<String>,
	override_name: Option<String>,
	required: bool,
	declared_type: TypeDescriptor,
	binding: Binding,
	default_value: Option<String>,
}

impl ParameterDescriptor {
	/// Starts a descriptor for a parameter with the given binding.
	///
	/// Parameters are required unless stated otherwise.
	pub fn builder(binding: Binding) -> ParameterDescriptorBuilder {
		ParameterDescriptorBuilder::new(binding)
	}

	/// Shorthand for a required path variable with a declared name.
	pub fn path_variable(declared_name: impl Into<String>, declared_type: TypeDescriptor) -> Self {
		Self::builder(Binding::PathVariable)
			.declared_name(declared_name)
			.declared_type(declared_type)
			.build()
	}

	/// The parameter's own identifier, if that metadata is available.
	pub fn declared_name(&self) -> Option<&str> {
		self.declared_name.as_deref()
	}

	/// The effective name: a non-empty override wins over the declared identifier.
	///
	/// # Examples
	///
	/// ```
	/// use outbound_core::{Binding, ParameterDescriptor};
	///
	/// let param = ParameterDescriptor::builder(Binding::PathVariable)
	///     .declared_name("employee_id")
	///     .override_name("id")
	///     .build();
	/// assert_eq!(param.name(), Some("id"));
	///
	/// let param = ParameterDescriptor::builder(Binding::PathVariable)
	///     .declared_name("id")
	///     .override_name("")
	///     .build();
	/// assert_eq!(param.name(), Some("id"));
	/// ```
	pub fn name(&self) -> Option<&str> {
		self.override_name
			.as_deref()
			.filter(|name| !name.is_empty())
			.or_else(|| self.declared_name.as_deref().filter(|name| !name.is_empty()))
	}

	/// Whether a missing value is a caller error.
	pub fn is_required(&self) -> bool {
		self.required
	}

	/// The declared type.
	pub fn declared_type(&self) -> &TypeDescriptor {
		&self.declared_type
	}

	/// The request element this parameter populates.
	pub fn binding(&self) -> Binding {
		self.binding
	}

	/// Fallback value for a missing argument.
	pub fn default_value(&self) -> Option<&str> {
		self.default_value.as_deref()
	}

	/// Human readable label used in error messages.
	pub fn describe(&self) -> String {
		match self.name() {
			Some(name) => format!("{} '{}'", self.binding, name),
			None => format!("{} of type {}", self.binding, self.declared_type),
		}
	}
}

/// Builder for [`ParameterDescriptor`].
#[derive(Debug, Clone)]
pub struct ParameterDescriptorBuilder {
	declared_name: Option<String>,
	override_name: Option<String>,
	required: bool,
	declared_type: TypeDescriptor,
	binding: Binding,
	default_value: Option<String>,
}

impl ParameterDescriptorBuilder {
	fn new(binding: Binding) -> Self {
		Self {
			declared_name: None,
			override_name: None,
			required: true,
			declared_type: TypeDescriptor::Any,
			binding,
			default_value: None,
		}
	}

	/// Sets the parameter's own identifier.
	pub fn declared_name(mut self, name: impl Into<String>) -> Self {
		self.declared_name = Some(name.into());
		self
	}

	/// Sets the explicit override name.
	pub fn override_name(mut self, name: impl Into<String>) -> Self {
		self.override_name = Some(name.into());
		self
	}

	/// Sets whether a value must be present.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets the declared type.
	pub fn declared_type(mut self, declared_type: TypeDescriptor) -> Self {
		self.declared_type = declared_type;
		self
	}

	/// Sets the fallback value used when the argument is missing.
	pub fn default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	/// Finishes the descriptor.
	pub fn build(self) -> ParameterDescriptor {
		ParameterDescriptor {
			declared_name: self.declared_name,
			override_name: self.override_name,
			required: self.required,
			declared_type: self.declared_type,
			binding: self.binding,
			default_value: self.default_value,
		}
	}
}

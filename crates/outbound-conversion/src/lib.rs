//! # Outbound Conversion
//!
//! Renders [`ArgumentValue`]s as the strings that end up in URI variables,
//! headers, query parameters and cookies.
//!
//! Resolvers receive a [`ConversionService`] as an injected capability; the
//! [`DefaultConversionService`] covers the built-in value kinds.
//!
//! ```
//! use outbound_conversion::{ConversionService, DefaultConversionService};
//! use outbound_core::{ArgumentValue, TypeDescriptor};
//!
//! let service = DefaultConversionService::new();
//! let text = service.convert(&ArgumentValue::Bool(true), &TypeDescriptor::Bool).unwrap();
//! assert_eq!(text.as_deref(), Some("true"));
//! ```

use outbound_core::{ArgumentValue, TypeDescriptor};

/// Errors raised by a [`ConversionService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
	/// The value kind cannot be rendered as a single string.
	#[error("Cannot convert {kind} value declared as {declared} to string")]
	Unsupported {
		/// Runtime kind of the rejected value.
		kind: &'static str,
		/// Declared type of the parameter.
		declared: String,
	},

	/// The value does not fit its declared type.
	#[error("Value '{value}' does not match declared type {declared}")]
	TypeMismatch {
		/// Rendered value.
		value: String,
		/// Declared type of the parameter.
		declared: String,
	},
}

/// Renders argument values as strings.
pub trait ConversionService: Send + Sync {
	/// Converts `value`, declared as `source_type`, to its string form.
	///
	/// Returns `Ok(None)` for null and empty optional values.
	fn convert(
		&self,
		value: &ArgumentValue,
		source_type: &TypeDescriptor,
	) -> Result<Option<String>, ConversionError>;
}

/// Separator used when a list collapses into one string.
pub const LIST_DELIMITER: &str = ",";

/// Conversion for the built-in value kinds.
///
/// - scalars use their canonical text (`true`, `42`, `1.5`)
/// - optionals are unwrapped
/// - lists are joined with [`LIST_DELIMITER`], skipping null elements
/// - maps are rejected
///
/// With `strict` enabled, scalars must also agree with a scalar declared type
/// (a `bool` parameter rejects a string argument). `any` and `string` accept
/// every scalar.
#[derive(Debug, Clone, Default)]
pub struct DefaultConversionService {
	strict: bool,
}

impl DefaultConversionService {
	/// Creates a lenient conversion service.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a service that checks scalars against their declared type.
	pub fn strict() -> Self {
		Self { strict: true }
	}

	fn check_declared(
		&self,
		value: &ArgumentValue,
		declared: &TypeDescriptor,
	) -> Result<(), ConversionError> {
		if !self.strict {
			return Ok(());
		}
		let matches = match (declared, value) {
			(TypeDescriptor::Any | TypeDescriptor::String, _) => true,
			(TypeDescriptor::Bool, ArgumentValue::Bool(_)) => true,
			(TypeDescriptor::Int, ArgumentValue::Int(_)) => true,
			(TypeDescriptor::Float, ArgumentValue::Float(_) | ArgumentValue::Int(_)) => true,
			(TypeDescriptor::Optional(_) | TypeDescriptor::List(_) | TypeDescriptor::Map(_), _) => true,
			_ => false,
		};
		if matches {
			Ok(())
		} else {
			Err(ConversionError::TypeMismatch {
				value: value.to_string(),
				declared: declared.to_string(),
			})
		}
	}
}

impl ConversionService for DefaultConversionService {
	fn convert(
		&self,
		value: &ArgumentValue,
		source_type: &TypeDescriptor,
	) -> Result<Option<String>, ConversionError> {
		match value {
			ArgumentValue::Null | ArgumentValue::Optional(None) => Ok(None),
			ArgumentValue::Optional(Some(inner)) => self.convert(inner, source_type.unwrap_optional()),
			ArgumentValue::Bool(b) => {
				self.check_declared(value, source_type)?;
				Ok(Some(b.to_string()))
			}
			ArgumentValue::Int(i) => {
				self.check_declared(value, source_type)?;
				Ok(Some(i.to_string()))
			}
			ArgumentValue::Float(x) => {
				self.check_declared(value, source_type)?;
				Ok(Some(x.to_string()))
			}
			ArgumentValue::Str(s) => {
				self.check_declared(value, source_type)?;
				Ok(Some(s.clone()))
			}
			ArgumentValue::List(items) => {
				let element_type = source_type
					.element_type()
					.cloned()
					.unwrap_or(TypeDescriptor::Any);
				let mut parts = Vec::with_capacity(items.len());
				for item in items {
					if let Some(text) = self.convert(item, &element_type)? {
						parts.push(text);
					}
				}
				Ok(Some(parts.join(LIST_DELIMITER)))
			}
			ArgumentValue::Map(_) => Err(ConversionError::Unsupported {
				kind: value.kind(),
				declared: source_type.to_string(),
			}),
		}
	}
}

//! Declared parameter types.
//!
//! Types are written in a small lowercase notation so they can be declared in
//! service definition files: `string`, `bool`, `int`, `float`, `any`,
//! `optional<T>`, `list<T>` and `map<T>`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The declared type of a service method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
	/// Any value; the runtime value decides how it is handled.
	#[default]
	Any,
	/// Text.
	String,
	/// `true` / `false`.
	Bool,
	/// Signed integer.
	Int,
	/// Floating point number.
	Float,
	/// Optional wrapper around the inner type.
	Optional(Box<TypeDescriptor>),
	/// Ordered collection of the inner type.
	List(Box<TypeDescriptor>),
	/// String-keyed map with values of the inner type.
	Map(Box<TypeDescriptor>),
}

impl TypeDescriptor {
	/// `optional<inner>`
	pub fn optional(inner: TypeDescriptor) -> Self {
		Self::Optional(Box::new(inner))
	}

	/// `list<inner>`
	pub fn list(inner: TypeDescriptor) -> Self {
		Self::List(Box::new(inner))
	}

	/// `map<inner>`
	pub fn map(inner: TypeDescriptor) -> Self {
		Self::Map(Box::new(inner))
	}

	/// Returns `true` for `optional<T>`.
	pub fn is_optional(&self) -> bool {
		matches!(self, Self::Optional(_))
	}

	/// Returns `true` for `map<T>`, looking through an optional wrapper.
	///
	/// # Examples
	///
	/// ```
	/// use outbound_core::TypeDescriptor;
	///
	/// assert!(TypeDescriptor::map(TypeDescriptor::String).is_map());
	/// assert!(TypeDescriptor::optional(TypeDescriptor::map(TypeDescriptor::Any)).is_map());
	/// assert!(!TypeDescriptor::String.is_map());
	/// ```
	pub fn is_map(&self) -> bool {
		match self {
			Self::Map(_) => true,
			Self::Optional(inner) => inner.is_map(),
			_ => false,
		}
	}

	/// The type with one level of optional wrapping removed.
	pub fn unwrap_optional(&self) -> &TypeDescriptor {
		match self {
			Self::Optional(inner) => inner,
			other => other,
		}
	}

	/// The element type of a list or the value type of a map.
	pub fn element_type(&self) -> Option<&TypeDescriptor> {
		match self {
			Self::List(inner) | Self::Map(inner) => Some(inner),
			_ => None,
		}
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Any => write!(f, "any"),
			Self::String => write!(f, "string"),
			Self::Bool => write!(f, "bool"),
			Self::Int => write!(f, "int"),
			Self::Float => write!(f, "float"),
			Self::Optional(inner) => write!(f, "optional<{}>", inner),
			Self::List(inner) => write!(f, "list<{}>", inner),
			Self::Map(inner) => write!(f, "map<{}>", inner),
		}
	}
}

/// Error returned when a type expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid type expression '{input}': {reason}")]
pub struct TypeParseError {
	/// The rejected input.
	pub input: String,
	/// What was wrong with it.
	pub reason: String,
}

impl FromStr for TypeDescriptor {
	type Err = TypeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let fail = |reason: &str| TypeParseError {
			input: s.to_string(),
			reason: reason.to_string(),
		};

		if let Some(open) = trimmed.find('<') {
			let inner = trimmed[open + 1..]
				.strip_suffix('>')
				.ok_or_else(|| fail("missing closing '>'"))?;
			if inner.trim().is_empty() {
				return Err(fail("empty type argument"));
			}
			let inner: TypeDescriptor = inner.parse().map_err(|e: TypeParseError| fail(&e.reason))?;
			return match trimmed[..open].trim().to_ascii_lowercase().as_str() {
				"optional" => Ok(Self::optional(inner)),
				"list" => Ok(Self::list(inner)),
				"map" => Ok(Self::map(inner)),
				other => Err(fail(&format!("unknown generic type '{}'", other))),
			};
		}

		match trimmed.to_ascii_lowercase().as_str() {
			"any" => Ok(Self::Any),
			"string" | "str" => Ok(Self::String),
			"bool" | "boolean" => Ok(Self::Bool),
			"int" | "integer" => Ok(Self::Int),
			"float" | "number" => Ok(Self::Float),
			"" => Err(fail("empty type expression")),
			other => Err(fail(&format!("unknown type '{}'", other))),
		}
	}
}

impl TryFrom<String> for TypeDescriptor {
	type Error = TypeParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<TypeDescriptor> for String {
	fn from(value: TypeDescriptor) -> Self {
		value.to_string()
	}
}

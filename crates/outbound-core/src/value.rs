//! Runtime argument values.

use indexmap::IndexMap;
use std::fmt;

/// A runtime value passed to a service method.
///
/// `Null` and `Optional(None)` are distinct: the first is an absent reference, the
/// second an explicitly empty optional wrapper. Resolvers treat both as "no value"
/// but keep them apart for error messages and map entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArgumentValue {
	/// No value at all.
	#[default]
	Null,
	/// Boolean value.
	Bool(bool),
	/// Signed integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// Text value.
	Str(String),
	/// Optional wrapper; `None` is an empty optional.
	Optional(Option<Box<ArgumentValue>>),
	/// Ordered collection.
	List(Vec<ArgumentValue>),
	/// String-keyed map, iterated in insertion order.
	Map(IndexMap<String, ArgumentValue>),
}

impl ArgumentValue {
	/// An empty optional.
	pub fn empty() -> Self {
		Self::Optional(None)
	}

	/// A present optional holding `value`.
	///
	/// # Examples
	///
	/// ```
	/// use outbound_core::ArgumentValue;
	///
	/// let value = ArgumentValue::some(true);
	/// assert!(value.is_optional());
	/// assert_eq!(value.unwrap_optional(), Some(&ArgumentValue::Bool(true)));
	/// ```
	pub fn some(value: impl Into<ArgumentValue>) -> Self {
		Self::Optional(Some(Box::new(value.into())))
	}

	/// Builds a map value from key/value pairs.
	pub fn map<K, V, I>(entries: I) -> Self
	where
		K: Into<String>,
		V: Into<ArgumentValue>,
		I: IntoIterator<Item = (K, V)>,
	{
		Self::Map(
			entries
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}

	/// Returns `true` for [`ArgumentValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns `true` for any optional wrapper, present or empty.
	pub fn is_optional(&self) -> bool {
		matches!(self, Self::Optional(_))
	}

	/// Returns `true` for an empty optional.
	pub fn is_empty_optional(&self) -> bool {
		matches!(self, Self::Optional(None))
	}

	/// Returns `true` for a map value.
	pub fn is_map(&self) -> bool {
		matches!(self, Self::Map(_))
	}

	/// Removes every level of optional wrapping.
	///
	/// Returns `None` when the value is null or an empty optional at any level.
	pub fn unwrap_optional(&self) -> Option<&ArgumentValue> {
		match self {
			Self::Null | Self::Optional(None) => None,
			Self::Optional(Some(inner)) => inner.unwrap_optional(),
			other => Some(other),
		}
	}

	/// Short name of the variant, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Str(_) => "string",
			Self::Optional(_) => "optional",
			Self::List(_) => "list",
			Self::Map(_) => "map",
		}
	}
}

impl fmt::Display for ArgumentValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => write!(f, "null"),
			Self::Bool(b) => write!(f, "{}", b),
			Self::Int(i) => write!(f, "{}", i),
			Self::Float(x) => write!(f, "{}", x),
			Self::Str(s) => write!(f, "{}", s),
			Self::Optional(None) => write!(f, "Optional.empty"),
			Self::Optional(Some(inner)) => write!(f, "Optional[{}]", inner),
			Self::List(items) => {
				write!(f, "[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}", item)?;
				}
				write!(f, "]")
			}
			Self::Map(entries) => {
				write!(f, "{{")?;
				for (i, (k, v)) in entries.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}={}", k, v)?;
				}
				write!(f, "}}")
			}
		}
	}
}

impl From<bool> for ArgumentValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for ArgumentValue {
				fn from(value: $ty) -> Self {
					Self::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ArgumentValue {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for ArgumentValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for ArgumentValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for ArgumentValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl<T: Into<ArgumentValue>> From<Option<T>> for ArgumentValue {
	fn from(value: Option<T>) -> Self {
		Self::Optional(value.map(|v| Box::new(v.into())))
	}
}

impl<T: Into<ArgumentValue>> From<Vec<T>> for ArgumentValue {
	fn from(value: Vec<T>) -> Self {
		Self::List(value.into_iter().map(Into::into).collect())
	}
}

impl<V: Into<ArgumentValue>> From<IndexMap<String, V>> for ArgumentValue {
	fn from(value: IndexMap<String, V>) -> Self {
		Self::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
	}
}

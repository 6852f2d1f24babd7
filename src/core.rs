//! Argument values, descriptors and errors.
//!
//! # Examples
//!
//! ```
//! use outbound::core::{ArgumentValue, TypeDescriptor};
//!
//! let ty: TypeDescriptor = "map<optional<string>>".parse().unwrap();
//! assert!(ty.is_map());
//! assert!(ArgumentValue::empty().is_empty_optional());
//! ```

pub use outbound_core::*;

//! # Outbound Core
//!
//! Shared building blocks for declarative HTTP service clients.
//!
//! A service method is described by a list of [`ParameterDescriptor`]s, created once
//! when the service is registered. At call time every argument arrives as an
//! [`ArgumentValue`], and the resolvers in `outbound-invoker` turn the pair into
//! request elements such as URI variables, headers or query parameters.
//!
//! ## Example
//!
//! ```
//! use outbound_core::{ArgumentValue, Binding, ParameterDescriptor, TypeDescriptor};
//!
//! let param = ParameterDescriptor::builder(Binding::PathVariable)
//!     .declared_name("employee_id")
//!     .override_name("id")
//!     .declared_type(TypeDescriptor::String)
//!     .build();
//!
//! assert_eq!(param.name(), Some("id"));
//! assert!(param.is_required());
//!
//! let value = ArgumentValue::from("42");
//! assert!(!value.is_null());
//! ```

pub mod exception;
pub mod parameter;
pub mod types;
pub mod value;

pub use exception::{Error, Result};
pub use parameter::{Binding, ParameterDescriptor, ParameterDescriptorBuilder};
pub use types::{TypeDescriptor, TypeParseError};
pub use value::ArgumentValue;

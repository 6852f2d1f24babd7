//! Conversion of argument values to request strings.

pub use outbound_conversion::*;

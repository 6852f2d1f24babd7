//! Error types shared by the resolution pipeline.

/// Result type used throughout the request-building pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning method arguments into request values.
///
/// Argument-level problems are all reported as [`Error::IllegalArgument`]: they are
/// contract violations at the call site, never transient conditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// An argument violates the declared contract of its parameter.
	#[error("Illegal argument: {0}")]
	IllegalArgument(String),

	/// No registered resolver claimed a parameter.
	#[error("Could not resolve parameter [{index}] of method '{method}': no suitable resolver")]
	UnresolvedArgument {
		/// Name of the invoked method.
		method: String,
		/// Zero-based index of the parameter.
		index: usize,
	},

	/// The invoked method is not declared by the service.
	#[error("Unknown service method: {0}")]
	UnknownMethod(String),

	/// The client adapter failed to exchange the request.
	#[error("Exchange failed: {0}")]
	Exchange(String),
}

impl Error {
	/// Shorthand for building an [`Error::IllegalArgument`].
	pub fn illegal_argument(message: impl Into<String>) -> Self {
		Self::IllegalArgument(message.into())
	}

	/// Returns `true` for [`Error::IllegalArgument`].
	pub fn is_illegal_argument(&self) -> bool {
		matches!(self, Self::IllegalArgument(_))
	}
}

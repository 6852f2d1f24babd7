//! Test support: a client adapter that records instead of sending.

use crate::proxy::ClientAdapter;
use crate::request::HttpRequestValues;
use outbound_core::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Records the request values of the most recent exchange.
///
/// # Examples
///
/// ```
/// use outbound_invoker::proxy::ClientAdapter;
/// use outbound_invoker::request::HttpRequestValues;
/// use outbound_invoker::testing::RecordingClientAdapter;
///
/// let adapter = RecordingClientAdapter::new();
/// assert!(adapter.request_values().is_none());
///
/// adapter.exchange(&HttpRequestValues::builder().build()).unwrap();
/// assert_eq!(adapter.exchange_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingClientAdapter {
	last: Mutex<Option<HttpRequestValues>>,
	count: Mutex<usize>,
	failure: Option<String>,
}

impl RecordingClientAdapter {
	/// Creates an adapter that accepts every request.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an adapter that records the request and then reports `message`.
	pub fn failing(message: impl Into<String>) -> Self {
		Self {
			failure: Some(message.into()),
			..Self::default()
		}
	}

	/// Request values of the last exchange.
	pub fn request_values(&self) -> Option<HttpRequestValues> {
		self.last.lock().clone()
	}

	/// URI variables of the last exchange, empty when nothing was exchanged.
	pub fn uri_variables(&self) -> HashMap<String, String> {
		self.last
			.lock()
			.as_ref()
			.map(|values| values.uri_variables().clone())
			.unwrap_or_default()
	}

	/// Number of exchanges so far.
	pub fn exchange_count(&self) -> usize {
		*self.count.lock()
	}
}

impl ClientAdapter for RecordingClientAdapter {
	fn exchange(&self, request: &HttpRequestValues) -> Result<()> {
		*self.last.lock() = Some(request.clone());
		*self.count.lock() += 1;
		match &self.failure {
			Some(message) => Err(Error::Exchange(message.clone())),
			None => Ok(()),
		}
	}
}

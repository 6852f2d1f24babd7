//! URI template expansion.
//!
//! Templates use `{name}` placeholders. A placeholder may carry a pattern after a
//! colon (`{id:\d+}`); only the part before the colon is the variable name.

use outbound_core::{Error, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::HashMap;

/// Characters escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'%')
	.add(b'/')
	.add(b'<')
	.add(b'>')
	.add(b'?')
	.add(b'`')
	.add(b'{')
	.add(b'}');

/// Characters escaped inside a query component.
pub(crate) const QUERY_COMPONENT: &AsciiSet = &PATH_SEGMENT.add(b'&').add(b'=').add(b'+');

/// Extract variable names from a URI template, in order of appearance.
///
/// # Examples
///
/// ```
/// use outbound_invoker::template::extract_variable_names;
///
/// let names = extract_variable_names("/users/{id}/posts/{post_id:\\d+}");
/// assert_eq!(names, vec!["id", "post_id"]);
/// ```
pub fn extract_variable_names(template: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		let after = &rest[open + 1..];
		let Some(close) = closing_brace(after) else {
			break;
		};
		let name = variable_name(&after[..close]);
		if !name.is_empty() {
			names.push(name.to_string());
		}
		rest = &after[close + 1..];
	}

	names
}

/// Position of the `}` closing a placeholder whose `{` precedes `after`.
///
/// Braces nested inside a pattern (`{id:\d{3}}`) are balanced.
fn closing_brace(after: &str) -> Option<usize> {
	let mut depth = 0usize;
	for (index, ch) in after.char_indices() {
		match ch {
			'{' => depth += 1,
			'}' if depth == 0 => return Some(index),
			'}' => depth -= 1,
			_ => {}
		}
	}
	None
}

fn variable_name(placeholder: &str) -> &str {
	placeholder.split(':').next().unwrap_or_default().trim()
}

/// Substitute every placeholder with its percent-encoded variable value.
///
/// Fails with [`Error::IllegalArgument`] when a placeholder has no value or a
/// brace is left open.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use outbound_invoker::template::expand;
///
/// let mut vars = HashMap::new();
/// vars.insert("id".to_string(), "a b/c".to_string());
///
/// assert_eq!(expand("/users/{id}", &vars).unwrap(), "/users/a%20b%2Fc");
/// ```
pub fn expand(template: &str, variables: &HashMap<String, String>) -> Result<String> {
	let mut result = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		result.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		let close = closing_brace(after).ok_or_else(|| {
			Error::illegal_argument(format!("Unclosed variable in URI template '{}'", template))
		})?;
		let name = variable_name(&after[..close]);
		let value = variables.get(name).ok_or_else(|| {
			Error::illegal_argument(format!(
				"Not enough variable values to expand '{}': missing '{}'",
				template, name
			))
		})?;
		result.extend(utf8_percent_encode(value, PATH_SEGMENT));
		rest = &after[close + 1..];
	}
	result.push_str(rest);

	Ok(result)
}

/// Percent-encode a query parameter name or value.
pub(crate) fn encode_query_component(component: &str) -> String {
	utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

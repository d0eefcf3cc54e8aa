//! Query-string rendering for listing and search parameters.
//!
//! Params records (`PostListingParams`, `SearchParams`, ...) use the same
//! keys in the query string as in JSON, so rendering goes through their
//! serde representation: unset options produce no pair, lists are
//! comma-joined and timestamps keep their RFC 3339 form.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{CodecError, CodecResult};

/// Render a params record as key/value pairs, sorted by key.
pub fn to_query_pairs<T: Serialize>(params: &T) -> CodecResult<Vec<(String, String)>> {
    let Value::Object(fields) = serde_json::to_value(params)? else {
        return Err(CodecError::InvalidQuery(
            "parameters must serialize to a JSON object".to_string(),
        ));
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        if let Some(rendered) = render_value(&key, &value)? {
            pairs.push((key, rendered));
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs)
}

/// Append a params record to the query string of `url`.
pub fn append_query<T: Serialize>(url: &mut Url, params: &T) -> CodecResult<()> {
    let pairs = to_query_pairs(params)?;
    if pairs.is_empty() {
        return Ok(());
    }
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(())
}

fn render_value(key: &str, value: &Value) -> CodecResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Array(items) => {
            let rendered = items
                .iter()
                .map(|item| render_scalar(key, item))
                .collect::<CodecResult<Vec<_>>>()?;
            Ok(Some(rendered.join(",")))
        }
        other => render_scalar(key, other).map(Some),
    }
}

fn render_scalar(key: &str, value: &Value) -> CodecResult<String> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(CodecError::InvalidQuery(
            format!("'{key}' is not a scalar or a list of scalars"),
        )),
    }
}

//! Query-string construction for collection filters.

use url::form_urlencoded;

/// Encode filter parameters as `application/x-www-form-urlencoded`.
///
/// When any key is `email`, `@` is left unescaped across the whole query,
/// which is the form the remote API matches email addresses against.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    let keep_at = params.iter().any(|(key, _)| *key == "email");
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key, keep_at), encode(value, keep_at)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append `params` to `path`, omitting the `?` when there are none.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", encode_query(params))
    }
}

fn encode(input: &str, keep_at: bool) -> String {
    // byte_serialize yields every escaped byte as its own chunk.
    form_urlencoded::byte_serialize(input.as_bytes())
        .map(|chunk| if keep_at && chunk == "%40" { "@" } else { chunk })
        .collect()
}

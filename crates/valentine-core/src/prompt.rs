//! Prompt text, personalised from the page's `?name=` query parameter.

use crate::constants::{DEFAULT_PROMPT, NAME_QUERY_KEY, PROMPT_SUFFIX};

/// First value of `key` in a `location.search` string (leading `?` optional).
///
/// Follows `URLSearchParams.get`: `+` decodes to a space, percent escapes are
/// decoded, and a pair without `=` has an empty value. Escapes that are not
/// valid UTF-8 become U+FFFD; malformed escapes stay literal.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode(k) == key)
        .map(|(_, v)| decode(v))
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// The trimmed `name` parameter, or `None` when missing or blank.
///
/// The name is used verbatim; no case normalisation is applied.
pub fn name_from_search(search: &str) -> Option<String> {
    query_param(search, NAME_QUERY_KEY)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

/// Plain-text prompt. Callers must write it as text content, not markup.
pub fn prompt_text(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{}{}", name, PROMPT_SUFFIX),
        None => DEFAULT_PROMPT.to_string(),
    }
}

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};

/// Convert a single identifier to snake_case.
///
/// Word boundaries are a lowercase letter or digit followed by an uppercase
/// letter, the last capital of an acronym that starts a new word
/// (`HTMLParser` -> `html_parser`), and any run of non-alphanumeric
/// characters, which is dropped.
pub fn snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // `current` is non-empty only if chars[i - 1] was pushed into it
        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("_")
}

/// Rename the top-level keys of a JSON object to snake_case.
///
/// Values are moved across untouched; nested objects and array elements keep
/// their original keys.
pub fn to_snake_case_keys(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| (snake_case(&key), value))
        .collect()
}

/// Build a JSON object from `(key, value)` pairs, omitting every unset entry.
///
/// Only `None` is dropped. `Some(Value::Null)`, `0`, `""` and `[]` are kept.
pub fn strip_unset<I, K>(entries: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Option<Value>)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.into(), v)))
        .collect()
}

/// Base64 encoding of `username:password` for HTTP Basic auth.
pub fn basic_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

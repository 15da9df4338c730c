use anyhow::anyhow;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A value that may be serialized either singular or as an array
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// Parses JSON that holds either a single `T` or an array of them
pub fn parse_one_or_many<T>(json: &str) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let parsed: OneOrMany<T> =
        serde_json::from_str(json).map_err(|e| improve_json_error(&e, json))?;
    Ok(parsed.into_vec())
}

/// Attaches a snippet of the offending input to a JSON parse error
pub fn improve_json_error(err: &serde_json::Error, json_string: &str) -> anyhow::Error {
    if err.line() != 1 {
        // Fallback if the JSON is not minified (for some reason)
        return anyhow!("{err}");
    }

    let col = err.column().min(json_string.len());
    let start = floor_boundary(json_string, col.saturating_sub(50));
    let end = ceil_boundary(json_string, (col + 50).min(json_string.len()));
    let start_ell = if start == 0 { "" } else { "..." };
    let end_ell = if end == json_string.len() { "" } else { "..." };

    let snippet = &json_string[start..end];
    anyhow!("{err} | {start_ell}{snippet}{end_ell}")
}

fn floor_boundary(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_boundary(s: &str, mut idx: usize) -> usize {
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::parse_one_or_many;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        a: u32,
    }

    #[test]
    fn accepts_a_single_object() {
        let values: Vec<Item> = parse_one_or_many(r#"{"a": 1}"#).unwrap();
        assert_eq!(values, vec![Item { a: 1 }]);
    }

    #[test]
    fn accepts_an_array() {
        let values: Vec<Item> = parse_one_or_many(r#"[{"a": 1}, {"a": 2}]"#).unwrap();
        assert_eq!(values, vec![Item { a: 1 }, Item { a: 2 }]);
    }

    #[test]
    fn error_carries_a_snippet() {
        let err = parse_one_or_many::<Item>("{\"a\": nope}").unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("nope"), "unexpected message: {message}");
    }

    #[test]
    fn error_snippet_survives_multibyte_input() {
        let json = format!("{{\"a\": \"{}\" oops", "ä".repeat(60));
        let err = parse_one_or_many::<Item>(&json).unwrap_err();
        let _ = format!("{err}");
    }
}

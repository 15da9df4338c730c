use serde_json::Value;

/// Wire field-naming convention of the serialized embed.
///
/// The two supported client type systems agree on every key except the icon
/// URLs of the author and footer blocks. The in-memory record always uses
/// the snake_case spelling; [`Camel`](Self::Camel) output is produced by
/// renaming keys on the serialized value. Hydration accepts both spellings
/// regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldNaming {
    /// `icon_url`, as in the REST API type definitions.
    #[default]
    Snake,
    /// `iconURL`, as in the alternate client library's type definitions.
    Camel,
}

/// Keys that differ between the two conventions, snake_case first.
const RENAMED_KEYS: &[(&str, &str)] = &[("icon_url", "iconURL")];

pub(crate) fn apply(value: &mut Value, naming: FieldNaming) {
    if naming == FieldNaming::Snake {
        return;
    }
    rename_keys(value);
}

fn rename_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (snake, camel) in RENAMED_KEYS {
                if let Some(inner) = map.remove(*snake) {
                    map.insert((*camel).to_owned(), inner);
                }
            }
            for inner in map.values_mut() {
                rename_keys(inner);
            }
        }
        Value::Array(items) => {
            for item in items {
                rename_keys(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{FieldNaming, apply};

    #[test]
    fn snake_is_a_no_op() {
        let input = json!({"author": {"name": "a", "icon_url": "i"}});
        let mut value = input.clone();
        apply(&mut value, FieldNaming::Snake);
        assert_eq!(value, input);
    }

    #[test]
    fn camel_renames_nested_icon_keys() {
        let mut value = json!({
            "author": {"name": "a", "icon_url": "author-icon"},
            "footer": {"text": "f", "icon_url": "footer-icon"},
            "title": "t",
        });
        apply(&mut value, FieldNaming::Camel);
        assert_eq!(
            value,
            json!({
                "author": {"name": "a", "iconURL": "author-icon"},
                "footer": {"text": "f", "iconURL": "footer-icon"},
                "title": "t",
            })
        );
    }

    #[test]
    fn camel_descends_into_arrays() {
        let mut value = json!([{"footer": {"text": "f", "icon_url": "i"}}]);
        apply(&mut value, FieldNaming::Camel);
        assert_eq!(value, json!([{"footer": {"text": "f", "iconURL": "i"}}]));
    }
}

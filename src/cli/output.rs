//! JSON output shared by `query` and `relations`.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use tola_collections::log;

use super::args::OutputArgs;

/// Keys kept in front of every object when `--fields` narrows the output.
const LEADING_KEYS: &[&str] = &["slug", "href"];

/// Serialize `value`, shape it per `args`, and print or write it.
pub fn write_json<T: Serialize>(value: &T, args: &OutputArgs) -> Result<()> {
    let value = serde_json::to_value(value)?;
    let shaped = shape(value, args.fields.as_deref(), args.filter_empty);

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&shaped)?
    } else {
        serde_json::to_string(&shaped)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("output"; "wrote {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

/// Apply field selection and empty filtering to every entry object.
///
/// Arrays are shaped element-wise and objects holding an `items` array
/// (relation groups) shape their items, so the same flags work for both
/// query results and relation overviews.
fn shape(value: JsonValue, fields: Option<&[String]>, filter_empty: bool) -> JsonValue {
    match value {
        JsonValue::Array(values) => JsonValue::Array(
            values
                .into_iter()
                .map(|v| shape(v, fields, filter_empty))
                .collect(),
        ),
        JsonValue::Object(obj) if is_entry(&obj) => {
            JsonValue::Object(shape_entry(obj, fields, filter_empty))
        }
        JsonValue::Object(obj) => JsonValue::Object(
            obj.into_iter()
                .map(|(k, v)| (k, shape(v, fields, filter_empty)))
                .collect(),
        ),
        other => other,
    }
}

/// Items and links both carry `href`.
fn is_entry(obj: &Map<String, JsonValue>) -> bool {
    obj.contains_key("href")
}

fn shape_entry(
    obj: Map<String, JsonValue>,
    fields: Option<&[String]>,
    filter_empty: bool,
) -> Map<String, JsonValue> {
    let keep = |value: &JsonValue| !filter_empty || !is_empty_value(value);

    let Some(fields) = fields else {
        return obj.into_iter().filter(|(_, v)| keep(v)).collect();
    };

    let mut out = Map::new();
    for key in LEADING_KEYS {
        if let Some(value) = obj.get(*key) {
            out.insert((*key).to_owned(), value.clone());
        }
    }
    for field in fields {
        match obj.get(field) {
            Some(value) if keep(value) => {
                out.insert(field.clone(), value.clone());
            }
            Some(_) => {}
            // Requested but missing: show null unless filtering
            None if !filter_empty => {
                out.insert(field.clone(), JsonValue::Null);
            }
            None => {}
        }
    }
    out
}

/// Check if a JSON value is considered "empty" (null, "", [] or {})
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_empty() {
        let value = json!([{ "slug": "a", "href": "/x/a", "title": "", "parent": [] }]);
        assert_eq!(
            shape(value, None, true),
            json!([{ "slug": "a", "href": "/x/a" }])
        );
    }

    #[test]
    fn test_fields_keep_leading_keys() {
        let value = json!([{ "title": "A", "slug": "a", "href": "/x/a", "featured": true }]);
        let fields = vec!["featured".to_owned(), "missing".to_owned()];

        let shaped = shape(value.clone(), Some(&fields), false);
        assert_eq!(
            shaped,
            json!([{ "slug": "a", "href": "/x/a", "featured": true, "missing": null }])
        );
        let keys: Vec<_> = shaped[0].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["slug", "href", "featured", "missing"]);

        let shaped = shape(value, Some(&fields), true);
        assert_eq!(shaped, json!([{ "slug": "a", "href": "/x/a", "featured": true }]));
    }

    #[test]
    fn test_nested_groups() {
        let value = json!({
            "item": { "slug": "a", "href": "/x/a", "title": "" },
            "direct": [{ "collection": "y", "items": [{ "slug": "b", "href": "/y/b", "title": "" }] }]
        });
        let shaped = shape(value, None, true);
        assert_eq!(shaped["item"], json!({ "slug": "a", "href": "/x/a" }));
        assert_eq!(shaped["direct"][0]["collection"], "y");
        assert_eq!(shaped["direct"][0]["items"][0], json!({ "slug": "b", "href": "/y/b" }));
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&JsonValue::Null));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(0)));
    }
}

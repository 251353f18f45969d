//! Lookup of values in a feature document by dot-separated paths.
//!
//! A path such as `properties.wof:name` is split on `.`; every segment selects an object member, or an array element
//! if the segment is a decimal index. Resolvers pass an ordered list of candidate paths and get the value of the
//! first one that exists, see [`property`] and [`property_or`].
//!
//! Typed reads are lenient in the same way for all fields:
//! * a string read of a number yields its decimal text, a string read of `null` yields an empty string;
//! * an integer read of a numeric string parses it, an integer read of a float truncates it and an integer read of a
//!   boolean yields `1` or `0`.

use serde_json::Value;

use crate::error::PropertyError;

/// Value at `path`, if it exists.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Value of the first of `paths` that exists in the document.
pub fn first_present<'a>(doc: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(doc, path))
}

/// Returns an error naming the first of `paths` that does not exist.
pub fn ensure_properties(doc: &Value, paths: &[&str]) -> Result<(), PropertyError> {
    match paths.iter().find(|path| lookup(doc, path).is_none()) {
        Some(missing) => Err(PropertyError::Missing(missing.to_string())),
        None => Ok(()),
    }
}

/// Types that can be read from a property value.
pub trait FromProperty: Sized {
    /// Converts the value, or returns `None` if it has an incompatible type.
    fn from_property(value: &Value) -> Option<Self>;
}

impl FromProperty for String {
    fn from_property(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some(String::new()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl FromProperty for i64 {
    fn from_property(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl FromProperty for f64 {
    fn from_property(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromProperty for Vec<i64> {
    fn from_property(value: &Value) -> Option<Self> {
        value
            .as_array()
            .map(|items| items.iter().filter_map(i64::from_property).collect())
    }
}

/// Value of the first existing path among `paths`, converted to `T`.
///
/// The first *existing* path wins even if its value cannot be converted, in which case `None` is returned.
pub fn property<T: FromProperty>(doc: &Value, paths: &[&str]) -> Option<T> {
    first_present(doc, paths).and_then(T::from_property)
}

/// Same as [`property`] but returns `default` if no value is found.
pub fn property_or<T: FromProperty>(doc: &Value, paths: &[&str], default: T) -> T {
    property(doc, paths).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn doc() -> Value {
        json!({
            "id": 101851199,
            "properties": {
                "wof:id": 101851199,
                "wof:name": "Montréal",
                "name": "Montreal",
                "mz:is_current": "1",
                "geom:latitude": 45.5,
                "edtf:deprecated": null,
                "mz:is_deprecated": false,
                "wof:supersedes": [1, "2", 3.0],
                "wof:hierarchy": [{"country_id": 85633041}]
            }
        })
    }

    #[test]
    fn lookup_paths() {
        let doc = doc();
        assert_eq!(lookup(&doc, "id"), Some(&json!(101851199)));
        assert_eq!(
            lookup(&doc, "properties.wof:name"),
            Some(&json!("Montréal"))
        );
        assert_eq!(
            lookup(&doc, "properties.wof:hierarchy.0.country_id"),
            Some(&json!(85633041))
        );
        assert_eq!(lookup(&doc, "properties.wof:hierarchy.1"), None);
        assert_eq!(lookup(&doc, "properties.wof:name.first"), None);
        assert_eq!(lookup(&doc, "nope"), None);
    }

    #[test]
    fn first_present_wins() {
        let doc = doc();
        assert_eq!(
            property::<String>(&doc, &["properties.wof:name", "properties.name"]),
            Some("Montréal".to_string())
        );
        assert_eq!(
            property::<String>(&doc, &["properties.wof:label", "properties.name"]),
            Some("Montreal".to_string())
        );
        assert_eq!(
            property_or(&doc, &["properties.wof:label"], "default".to_string()),
            "default"
        );
    }

    #[test]
    fn lenient_reads() {
        let doc = doc();
        assert_eq!(property::<i64>(&doc, &["properties.mz:is_current"]), Some(1));
        assert_eq!(
            property::<String>(&doc, &["properties.wof:id"]),
            Some("101851199".to_string())
        );
        assert_eq!(
            property::<String>(&doc, &["properties.edtf:deprecated"]),
            Some(String::new())
        );
        assert_eq!(property::<f64>(&doc, &["properties.geom:latitude"]), Some(45.5));
        assert_eq!(
            property::<Vec<i64>>(&doc, &["properties.wof:supersedes"]),
            Some(vec![1, 2, 3])
        );
        assert_eq!(property::<i64>(&doc, &["properties.wof:hierarchy"]), None);
        assert_eq!(property::<i64>(&doc, &["properties.mz:is_deprecated"]), Some(0));
    }

    #[test]
    fn ensure() {
        let doc = doc();
        assert!(ensure_properties(&doc, &["id", "properties.wof:id"]).is_ok());
        assert_matches!(
            ensure_properties(&doc, &["properties.wof:id", "properties.wof:placetype"]),
            Err(PropertyError::Missing(path)) if path == "properties.wof:placetype"
        );
    }
}

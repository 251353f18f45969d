//! Identity properties of Who's On First documents.
//!
//! Every accessor walks a fixed list of candidate paths and falls back to a documented default, except [`id`] which
//! returns `None` when no id can be found.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::properties::{first_present, property, property_or, FromProperty};

/// Name used when a feature has none.
pub const DEFAULT_NAME: &str = "a place with no name";
/// Placetype used when a feature has none.
pub const DEFAULT_PLACETYPE: &str = "here be dragons";
/// Country code used when a feature has none.
pub const DEFAULT_COUNTRY: &str = "XX";
/// Repository used when a feature has none.
pub const DEFAULT_REPO: &str = "whosonfirst-data-xx";
/// Parent id of features without a known parent.
pub const UNKNOWN_PARENT_ID: i64 = -1;

const ID_PATHS: &[&str] = &["properties.wof:id", "id"];
const PARENT_ID_PATHS: &[&str] = &["properties.wof:parent_id"];
const NAME_PATHS: &[&str] = &["properties.wof:name", "properties.name"];
const PLACETYPE_PATHS: &[&str] = &["properties.wof:placetype", "properties.placetype"];
const COUNTRY_PATHS: &[&str] = &["properties.wof:country"];
const REPO_PATHS: &[&str] = &["properties.wof:repo"];
const SUPERSEDED_BY_PATHS: &[&str] = &["properties.wof:superseded_by"];
const SUPERSEDES_PATHS: &[&str] = &["properties.wof:supersedes"];
const HIERARCHY_PATHS: &[&str] = &["properties.wof:hierarchy"];
const GEOMETRY_TYPE_PATHS: &[&str] = &["geometry.type"];

/// Numeric id of the feature.
pub fn id(doc: &Value) -> Option<i64> {
    property(doc, ID_PATHS)
}

/// Id of the parent feature, or [`UNKNOWN_PARENT_ID`].
pub fn parent_id(doc: &Value) -> i64 {
    property_or(doc, PARENT_ID_PATHS, UNKNOWN_PARENT_ID)
}

/// Name of the feature if it has one.
pub fn name_opt(doc: &Value) -> Option<String> {
    property(doc, NAME_PATHS)
}

/// Name of the feature, or [`DEFAULT_NAME`].
pub fn name(doc: &Value) -> String {
    name_opt(doc).unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// Placetype of the feature if it has one.
pub fn placetype_opt(doc: &Value) -> Option<String> {
    property(doc, PLACETYPE_PATHS)
}

/// Placetype of the feature, or [`DEFAULT_PLACETYPE`].
pub fn placetype(doc: &Value) -> String {
    placetype_opt(doc).unwrap_or_else(|| DEFAULT_PLACETYPE.to_string())
}

/// Country code if the feature has one.
pub fn country_opt(doc: &Value) -> Option<String> {
    property(doc, COUNTRY_PATHS)
}

/// Country code, or [`DEFAULT_COUNTRY`].
pub fn country(doc: &Value) -> String {
    country_opt(doc).unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}

/// Repository the feature is stored in, if known.
pub fn repo_opt(doc: &Value) -> Option<String> {
    property(doc, REPO_PATHS)
}

/// Repository the feature is stored in, or [`DEFAULT_REPO`].
pub fn repo(doc: &Value) -> String {
    repo_opt(doc).unwrap_or_else(|| DEFAULT_REPO.to_string())
}

/// Ids of the features that replace this one.
pub fn superseded_by(doc: &Value) -> Vec<i64> {
    property_or(doc, SUPERSEDED_BY_PATHS, vec![])
}

/// Ids of the features this one replaces.
pub fn supersedes(doc: &Value) -> Vec<i64> {
    property_or(doc, SUPERSEDES_PATHS, vec![])
}

/// Ancestor ids of the feature, one `placetype_id -> id` map per hierarchy.
pub fn hierarchy(doc: &Value) -> Vec<BTreeMap<String, i64>> {
    let Some(Value::Array(hierarchies)) = first_present(doc, HIERARCHY_PATHS) else {
        return vec![];
    };

    hierarchies
        .iter()
        .filter_map(Value::as_object)
        .map(|h| {
            h.iter()
                .filter_map(|(key, id)| Some((key.clone(), i64::from_property(id)?)))
                .collect()
        })
        .collect()
}

/// GeoJSON geometry type tag, or `"unknown"`.
pub fn geometry_type(doc: &Value) -> String {
    property_or(doc, GEOMETRY_TYPE_PATHS, "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults() {
        let doc = json!({"properties": {}});
        assert_eq!(id(&doc), None);
        assert_eq!(parent_id(&doc), -1);
        assert_eq!(name(&doc), "a place with no name");
        assert_eq!(placetype(&doc), "here be dragons");
        assert_eq!(country(&doc), "XX");
        assert_eq!(repo(&doc), "whosonfirst-data-xx");
        assert!(superseded_by(&doc).is_empty());
        assert!(supersedes(&doc).is_empty());
        assert!(hierarchy(&doc).is_empty());
        assert_eq!(geometry_type(&doc), "unknown");
    }

    #[test]
    fn fallback_paths() {
        let doc = json!({
            "id": 42,
            "properties": {"name": "Somewhere", "placetype": "locality"}
        });
        assert_eq!(id(&doc), Some(42));
        assert_eq!(name(&doc), "Somewhere");
        assert_eq!(placetype(&doc), "locality");
    }

    #[test]
    fn wof_properties() {
        let doc = json!({
            "id": 1,
            "geometry": {"type": "Point", "coordinates": [2.35, 48.85]},
            "properties": {
                "wof:id": 101751119,
                "wof:parent_id": 102068177,
                "wof:name": "Paris",
                "wof:placetype": "locality",
                "wof:country": "FR",
                "wof:repo": "whosonfirst-data-admin-fr",
                "wof:superseded_by": [],
                "wof:supersedes": [1108955789],
                "wof:hierarchy": [{"country_id": 85633147, "locality_id": 101751119}]
            }
        });

        assert_eq!(id(&doc), Some(101751119));
        assert_eq!(parent_id(&doc), 102068177);
        assert_eq!(name(&doc), "Paris");
        assert_eq!(placetype(&doc), "locality");
        assert_eq!(country(&doc), "FR");
        assert_eq!(repo(&doc), "whosonfirst-data-admin-fr");
        assert_eq!(supersedes(&doc), vec![1108955789]);
        assert_eq!(geometry_type(&doc), "Point");

        let hierarchy = hierarchy(&doc);
        assert_eq!(hierarchy.len(), 1);
        assert_eq!(hierarchy[0]["country_id"], 85633147);
        assert_eq!(hierarchy[0]["locality_id"], 101751119);
    }
}

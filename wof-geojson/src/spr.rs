//! Standard Places Result: a flat summary of one feature.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wof_types::{normalize_geometry, BoundingBox, Bounds, Coordinate, GeometryError};

use crate::centroid::{centroid, CentroidSource};
use crate::config::SprConfig;
use crate::error::{PropertyError, WofError};
use crate::existential::{ExistentialFlag, ExistentialStatus};
use crate::properties::lookup;
use crate::uri::{id_to_rel_path, id_to_uri};
use crate::whosonfirst;

/// Derived metadata of one feature.
///
/// Serializes to a flat JSON object with `namespace:field` keys, e.g. `wof:id` and `mz:is_current`. The existential
/// flags are serialized in their integer form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardPlacesResult {
    #[serde(rename = "wof:id")]
    id: i64,
    #[serde(rename = "wof:parent_id")]
    parent_id: i64,
    #[serde(rename = "wof:name")]
    name: String,
    #[serde(rename = "wof:placetype")]
    placetype: String,
    #[serde(rename = "wof:country")]
    country: String,
    #[serde(rename = "wof:repo")]
    repo: String,
    #[serde(rename = "wof:path")]
    path: String,
    #[serde(rename = "mz:uri")]
    uri: String,
    #[serde(rename = "mz:latitude")]
    latitude: f64,
    #[serde(rename = "mz:longitude")]
    longitude: f64,
    #[serde(rename = "src:centroid")]
    centroid_source: CentroidSource,
    #[serde(rename = "mz:min_latitude")]
    min_latitude: f64,
    #[serde(rename = "mz:min_longitude")]
    min_longitude: f64,
    #[serde(rename = "mz:max_latitude")]
    max_latitude: f64,
    #[serde(rename = "mz:max_longitude")]
    max_longitude: f64,
    #[serde(rename = "mz:is_current")]
    is_current: ExistentialFlag,
    #[serde(rename = "mz:is_ceased")]
    is_ceased: ExistentialFlag,
    #[serde(rename = "mz:is_deprecated")]
    is_deprecated: ExistentialFlag,
    #[serde(rename = "mz:is_superseded")]
    is_superseded: ExistentialFlag,
    #[serde(rename = "mz:is_superseding")]
    is_superseding: ExistentialFlag,
    #[serde(rename = "wof:superseded_by")]
    superseded_by: Vec<i64>,
    #[serde(rename = "wof:supersedes")]
    supersedes: Vec<i64>,
}

impl StandardPlacesResult {
    /// Assembles the result with the default [`SprConfig`].
    pub fn assemble(doc: &Value) -> Result<Self, WofError> {
        Self::assemble_with(doc, &SprConfig::default())
    }

    /// Assembles the result of a feature document.
    ///
    /// Fails only if the document has no id or the id is negative. Every other missing property takes its default
    /// value. If the geometry cannot be normalized, the bounding box collapses onto the centroid.
    pub fn assemble_with(doc: &Value, config: &SprConfig) -> Result<Self, WofError> {
        let id = whosonfirst::id(doc)
            .ok_or_else(|| PropertyError::Missing("properties.wof:id".to_string()))?;
        let path = id_to_rel_path(id)?;
        let uri = id_to_uri(config.uri_root(), id)?;

        let centroid = centroid(doc);
        let coordinate = centroid.coordinate();
        let bbox = match geometry_mbr(doc) {
            Ok(Some(mbr)) => mbr,
            Ok(None) => {
                log::warn!("Feature {id} has no bounds, using its centroid instead");
                BoundingBox::from_point(&coordinate)
            }
            Err(err) => {
                log::warn!("Failed to normalize geometry of feature {id}, using its centroid instead: {err}");
                BoundingBox::from_point(&coordinate)
            }
        };

        let status = ExistentialStatus::resolve(doc);

        Ok(Self {
            id,
            parent_id: whosonfirst::parent_id(doc),
            name: whosonfirst::name_opt(doc).unwrap_or_else(|| config.default_name().to_string()),
            placetype: whosonfirst::placetype_opt(doc)
                .unwrap_or_else(|| config.default_placetype().to_string()),
            country: whosonfirst::country_opt(doc)
                .unwrap_or_else(|| config.default_country().to_string()),
            repo: whosonfirst::repo_opt(doc).unwrap_or_else(|| config.default_repo().to_string()),
            path,
            uri,
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            centroid_source: centroid.source(),
            min_latitude: bbox.y_min,
            min_longitude: bbox.x_min,
            max_latitude: bbox.y_max,
            max_longitude: bbox.x_max,
            is_current: status.current,
            is_ceased: status.ceased,
            is_deprecated: status.deprecated,
            is_superseded: status.superseded,
            is_superseding: status.superseding,
            superseded_by: whosonfirst::superseded_by(doc),
            supersedes: whosonfirst::supersedes(doc),
        })
    }

    /// Feature id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Parent id, `-1` if unknown.
    pub fn parent_id(&self) -> i64 {
        self.parent_id
    }

    /// Feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placetype name.
    pub fn placetype(&self) -> &str {
        &self.placetype
    }

    /// ISO country code.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Repository the feature is stored in.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Path of the feature file relative to the data root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// URI of the feature file.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Centroid latitude.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Centroid longitude.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Centroid as a coordinate.
    pub fn centroid(&self) -> Coordinate {
        Coordinate::new(self.longitude, self.latitude).unwrap_or(Coordinate::NULL_ISLAND)
    }

    /// Where the centroid was taken from.
    pub fn centroid_source(&self) -> CentroidSource {
        self.centroid_source
    }

    /// Minimum bounding rectangle of the feature.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.min_longitude,
            self.min_latitude,
            self.max_longitude,
            self.max_latitude,
        )
    }

    /// Minimum latitude of the bounding box.
    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    /// Minimum longitude of the bounding box.
    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    /// Maximum latitude of the bounding box.
    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    /// Maximum longitude of the bounding box.
    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// See [`is_current`](crate::existential::is_current).
    pub fn is_current(&self) -> ExistentialFlag {
        self.is_current
    }

    /// See [`is_ceased`](crate::existential::is_ceased).
    pub fn is_ceased(&self) -> ExistentialFlag {
        self.is_ceased
    }

    /// See [`is_deprecated`](crate::existential::is_deprecated).
    pub fn is_deprecated(&self) -> ExistentialFlag {
        self.is_deprecated
    }

    /// See [`is_superseded`](crate::existential::is_superseded).
    pub fn is_superseded(&self) -> ExistentialFlag {
        self.is_superseded
    }

    /// See [`is_superseding`](crate::existential::is_superseding).
    pub fn is_superseding(&self) -> ExistentialFlag {
        self.is_superseding
    }

    /// Ids of the features that replace this one.
    pub fn superseded_by(&self) -> &[i64] {
        &self.superseded_by
    }

    /// Ids of the features this one replaces.
    pub fn supersedes(&self) -> &[i64] {
        &self.supersedes
    }
}

fn geometry_mbr(doc: &Value) -> Result<Option<BoundingBox>, GeometryError> {
    let geometry = lookup(doc, "geometry")
        .ok_or_else(|| GeometryError::Malformed("feature has no geometry".to_string()))?;
    let polygons = normalize_geometry(geometry)?;
    Ok(Bounds::for_polygons(&polygons).mbr().copied())
}

//! Storage paths and URIs derived from feature ids.
//!
//! The decimal representation of an id is cut into groups of three digits starting from the left, and the groups
//! become directories: `101851199` is stored as `101/851/199/101851199.geojson`. A remainder shorter than three
//! digits forms the last group, so `1234` is stored as `123/4/1234.geojson`.

use std::path::{Path, PathBuf};

use crate::error::PropertyError;

/// Root of the public Who's On First data server.
pub const DEFAULT_URI_ROOT: &str = "https://data.whosonfirst.org/";

const GROUP_LEN: usize = 3;

/// Directory of the feature, relative to the data root, e.g. `101/851/199`.
pub fn id_to_path(id: i64) -> Result<String, PropertyError> {
    if id < 0 {
        return Err(PropertyError::InvalidId(id));
    }

    let digits: Vec<char> = id.to_string().chars().collect();
    let groups: Vec<String> = digits
        .chunks(GROUP_LEN)
        .map(|chunk| chunk.iter().collect())
        .collect();

    Ok(groups.join("/"))
}

/// Path of the feature file relative to the data root, e.g. `101/851/199/101851199.geojson`.
pub fn id_to_rel_path(id: i64) -> Result<String, PropertyError> {
    Ok(format!("{}/{id}.geojson", id_to_path(id)?))
}

/// Path of the feature file inside a local data directory.
pub fn id_to_abs_path(root: impl AsRef<Path>, id: i64) -> Result<PathBuf, PropertyError> {
    let mut path = root.as_ref().to_path_buf();
    path.extend(id_to_rel_path(id)?.split('/'));
    Ok(path)
}

/// URI of the feature file under `root`, e.g. [`DEFAULT_URI_ROOT`].
pub fn id_to_uri(root: &str, id: i64) -> Result<String, PropertyError> {
    let rel_path = id_to_rel_path(id)?;
    if root.ends_with('/') {
        Ok(format!("{root}{rel_path}"))
    } else {
        Ok(format!("{root}/{rel_path}"))
    }
}

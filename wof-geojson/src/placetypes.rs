//! Placetype vocabulary.
//!
//! Placetypes (`country`, `region`, `locality`, ...) form a directed acyclic graph: every placetype lists the ids
//! of its possible parents. The vocabulary is supplied by the application as JSON in the form
//!
//! ```json
//! {
//!   "102312307": {"name": "country", "role": "common", "parent": [102312309]},
//!   "102312309": {"name": "continent", "role": "common", "parent": []}
//! }
//! ```
//!
//! and is parsed once into an immutable [`PlacetypeSpec`] which is then passed to whatever needs it.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WofError;

/// Role of the placetypes present in every hierarchy.
pub const COMMON_ROLE: &str = "common";

/// One placetype of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placetype {
    /// Numeric id, the key of the entry in the vocabulary JSON.
    #[serde(default)]
    pub id: i64,
    /// Name, e.g. `locality`.
    pub name: String,
    /// Role, e.g. `common` or `common_optional`.
    #[serde(default)]
    pub role: String,
    /// Ids of the possible parents.
    #[serde(default)]
    pub parent: Vec<i64>,
}

/// Immutable table of placetypes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacetypeSpec {
    placetypes: BTreeMap<i64, Placetype>,
}

impl PlacetypeSpec {
    /// Parses the vocabulary JSON.
    pub fn from_json(json: &str) -> Result<Self, WofError> {
        let raw: BTreeMap<String, Placetype> = serde_json::from_str(json)?;
        raw.into_iter()
            .map(|(key, mut placetype)| -> Result<Placetype, WofError> {
                placetype.id = key
                    .trim()
                    .parse()
                    .map_err(|_| WofError::Placetype(format!("invalid placetype id '{key}'")))?;
                Ok(placetype)
            })
            .collect()
    }

    /// Reads the vocabulary JSON from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WofError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Number of placetypes in the vocabulary.
    pub fn len(&self) -> usize {
        self.placetypes.len()
    }

    /// Returns true if the vocabulary has no placetypes.
    pub fn is_empty(&self) -> bool {
        self.placetypes.is_empty()
    }

    /// Iterates over placetypes ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Placetype> {
        self.placetypes.values()
    }

    /// Placetype with the given name.
    pub fn by_name(&self, name: &str) -> Option<&Placetype> {
        self.iter().find(|pt| pt.name == name)
    }

    /// Placetype with the given id.
    pub fn by_id(&self, id: i64) -> Option<&Placetype> {
        self.placetypes.get(&id)
    }

    /// Same as [`PlacetypeSpec::by_name`] but fails with [`WofError::Placetype`] for unknown names.
    pub fn placetype(&self, name: &str) -> Result<&Placetype, WofError> {
        self.by_name(name)
            .ok_or_else(|| WofError::Placetype(name.to_string()))
    }

    /// Returns true if a placetype with the name exists.
    pub fn is_valid(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    /// Returns true if a placetype with the id exists.
    pub fn is_valid_id(&self, id: i64) -> bool {
        self.placetypes.contains_key(&id)
    }

    /// Placetypes that list `placetype` as a parent, ordered by id.
    pub fn children(&self, placetype: &Placetype) -> Vec<&Placetype> {
        self.iter()
            .filter(|pt| pt.parent.contains(&placetype.id))
            .collect()
    }

    /// All the placetypes below `placetype`, closest first.
    pub fn descendants(&self, placetype: &Placetype) -> Vec<&Placetype> {
        let mut seen = HashSet::from([placetype.id]);
        let mut queue = VecDeque::from([placetype]);
        let mut descendants = vec![];

        while let Some(current) = queue.pop_front() {
            for child in self.children(current) {
                if seen.insert(child.id) {
                    descendants.push(child);
                    queue.push_back(child);
                }
            }
        }

        descendants
    }

    /// Ancestors of `placetype` with the [`COMMON_ROLE`] role, closest first.
    pub fn ancestors(&self, placetype: &Placetype) -> Vec<&Placetype> {
        self.ancestors_for_roles(placetype, &[COMMON_ROLE])
    }

    /// Ancestors of `placetype` with any of the `roles`, closest first.
    ///
    /// The search does not continue through parents with other roles. A parent is placed before any of its own
    /// parents that were already collected through another path.
    pub fn ancestors_for_roles(&self, placetype: &Placetype, roles: &[&str]) -> Vec<&Placetype> {
        let mut ancestors = vec![];
        self.collect_ancestors(placetype, roles, &mut ancestors);
        ancestors
    }

    fn collect_ancestors<'a>(
        &'a self,
        placetype: &Placetype,
        roles: &[&str],
        ancestors: &mut Vec<&'a Placetype>,
    ) {
        for id in &placetype.parent {
            let Some(parent) = self.by_id(*id) else {
                log::debug!("Placetype {} has unknown parent {id}", placetype.name);
                continue;
            };

            if !roles.contains(&parent.role.as_str()) || ancestors.iter().any(|a| a.id == parent.id)
            {
                continue;
            }

            match ancestors.iter().position(|a| parent.parent.contains(&a.id)) {
                Some(index) => ancestors.insert(index, parent),
                None => ancestors.push(parent),
            }

            self.collect_ancestors(parent, roles, ancestors);
        }
    }
}

impl FromIterator<Placetype> for PlacetypeSpec {
    fn from_iter<T: IntoIterator<Item = Placetype>>(iter: T) -> Self {
        Self {
            placetypes: iter.into_iter().map(|pt| (pt.id, pt)).collect(),
        }
    }
}

/// Set of placetype names used to select features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacetypeFilter {
    names: Vec<String>,
}

impl PlacetypeFilter {
    /// Parses a comma-separated list of placetype names, each of which must exist in `spec`.
    pub fn parse(spec: &PlacetypeSpec, names: &str) -> Result<Self, WofError> {
        let names = names
            .split(',')
            .map(|name| spec.placetype(name.trim()).map(|pt| pt.name.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { names })
    }

    /// Names of the placetypes of the filter.
    pub fn placetypes(&self) -> &[String] {
        &self.names
    }

    /// Returns true if the filter accepts the placetype.
    pub fn matches_placetype(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns true if the filters share at least one placetype.
    pub fn matches(&self, other: &Self) -> bool {
        other
            .placetypes()
            .iter()
            .any(|name| self.matches_placetype(name))
    }
}

impl Display for PlacetypeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names.join(","))
    }
}

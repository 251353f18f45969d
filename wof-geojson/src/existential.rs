//! Lifecycle flags of a feature: current, ceased, deprecated, superseded and superseding.
//!
//! Every flag is a boolean value together with a confidence bit. A flag with `confidence == false` means that the
//! feature says nothing about the property, and its value must not be trusted. The resolvers never fail, absent
//! properties produce a flag instead of an error.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::properties::{first_present, property, property_or};
use crate::whosonfirst;

/// Date values that mean "the date is not known" rather than a real date.
pub const UNKNOWN_DATES: [&str; 3] = ["", "u", "uuuu"];

const DEPRECATED_PATHS: &[&str] = &["properties.edtf:deprecated"];
const CESSATION_PATHS: &[&str] = &["properties.edtf:cessation"];
const SUPERSEDED_PATHS: &[&str] = &["properties.edtf:superseded"];
const IS_CURRENT_PATHS: &[&str] = &["properties.mz:is_current"];
const SUPERSEDED_BY_PATHS: &[&str] = &["properties.wof:superseded_by"];
const SUPERSEDES_PATHS: &[&str] = &["properties.wof:supersedes"];

/// Boolean with a confidence bit.
///
/// Serialized in the integer form returned by [`ExistentialFlag::flag`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct ExistentialFlag {
    value: bool,
    confidence: bool,
}

impl ExistentialFlag {
    /// Confidently true.
    pub const TRUE: Self = Self::new(true, true);
    /// Confidently false.
    pub const FALSE: Self = Self::new(false, true);
    /// Nothing is known about the property.
    pub const UNKNOWN: Self = Self::new(false, false);

    /// Creates a new flag.
    pub const fn new(value: bool, confidence: bool) -> Self {
        Self { value, confidence }
    }

    /// Flag from its integer form: `1` is true, `0` is false and anything else is unknown.
    pub fn from_flag(flag: i64) -> Self {
        match flag {
            1 => Self::TRUE,
            0 => Self::FALSE,
            _ => Self::UNKNOWN,
        }
    }

    /// Integer form of the flag: `1` or `0` if the flag is confident, `-1` otherwise.
    pub fn flag(&self) -> i64 {
        match (self.confidence, self.value) {
            (true, true) => 1,
            (true, false) => 0,
            (false, _) => -1,
        }
    }

    /// Raw value, regardless of confidence.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Whether the value is known.
    pub fn confidence(&self) -> bool {
        self.confidence
    }

    /// Confidently true.
    pub fn is_true(&self) -> bool {
        self.confidence && self.value
    }

    /// Confidently false.
    pub fn is_false(&self) -> bool {
        self.confidence && !self.value
    }

    /// Same as [`ExistentialFlag::confidence`].
    pub fn is_known(&self) -> bool {
        self.confidence
    }

    /// Returns true if both flags have the same integer form.
    pub fn matches(&self, other: &Self) -> bool {
        self.flag() == other.flag()
    }
}

impl From<i64> for ExistentialFlag {
    fn from(flag: i64) -> Self {
        Self::from_flag(flag)
    }
}

impl From<ExistentialFlag> for i64 {
    fn from(flag: ExistentialFlag) -> Self {
        flag.flag()
    }
}

impl Display for ExistentialFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag())
    }
}

fn is_known_date(doc: &Value, paths: &[&str]) -> bool {
    property::<String>(doc, paths).is_some_and(|date| !UNKNOWN_DATES.contains(&date.as_str()))
}

/// True if the feature has a deprecation date. A missing date is a confident false.
pub fn is_deprecated(doc: &Value) -> ExistentialFlag {
    ExistentialFlag::new(is_known_date(doc, DEPRECATED_PATHS), true)
}

/// True if the feature has a cessation date. A missing date is a confident false.
pub fn is_ceased(doc: &Value) -> ExistentialFlag {
    ExistentialFlag::new(is_known_date(doc, CESSATION_PATHS), true)
}

/// True if the property holds a non-empty list. A non-null scalar counts as a list of one element.
///
/// The entries are not inspected, so a list of ids that cannot be parsed still counts as set.
fn is_listed(doc: &Value, paths: &[&str]) -> bool {
    match first_present(doc, paths) {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// True if the feature has a supersession date or a non-empty `wof:superseded_by` list.
pub fn is_superseded(doc: &Value) -> ExistentialFlag {
    let superseded =
        is_known_date(doc, SUPERSEDED_PATHS) || is_listed(doc, SUPERSEDED_BY_PATHS);
    ExistentialFlag::new(superseded, true)
}

/// True if the feature has a non-empty `wof:supersedes` list.
pub fn is_superseding(doc: &Value) -> ExistentialFlag {
    ExistentialFlag::new(is_listed(doc, SUPERSEDES_PATHS), true)
}

/// Whether the feature is current.
///
/// An explicit `mz:is_current` of `1` or `0` is returned as is. Otherwise the feature is confidently not current if
/// it is deprecated, ceased or superseded, and unknown if none of these hold.
pub fn is_current(doc: &Value) -> ExistentialFlag {
    match property_or(doc, IS_CURRENT_PATHS, -1i64) {
        1 => return ExistentialFlag::TRUE,
        0 => return ExistentialFlag::FALSE,
        _ => {}
    }

    if is_deprecated(doc).is_true() || is_ceased(doc).is_true() || is_superseded(doc).is_true() {
        return ExistentialFlag::FALSE;
    }

    log::debug!("Currency of feature {:?} is unknown", whosonfirst::id(doc));
    ExistentialFlag::UNKNOWN
}

/// All the lifecycle flags of one feature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExistentialStatus {
    /// See [`is_current`].
    pub current: ExistentialFlag,
    /// See [`is_ceased`].
    pub ceased: ExistentialFlag,
    /// See [`is_deprecated`].
    pub deprecated: ExistentialFlag,
    /// See [`is_superseded`].
    pub superseded: ExistentialFlag,
    /// See [`is_superseding`].
    pub superseding: ExistentialFlag,
}

impl ExistentialStatus {
    /// Resolves every flag of the document.
    pub fn resolve(doc: &Value) -> Self {
        Self {
            current: is_current(doc),
            ceased: is_ceased(doc),
            deprecated: is_deprecated(doc),
            superseded: is_superseded(doc),
            superseding: is_superseding(doc),
        }
    }
}

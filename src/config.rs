//! Reference datasets stored as JSON.
//!
//! The built-in tables cover the usual SRM 1–40 swatches.  Other
//! datasets (a different camera, lighting, or naming convention) can
//! be kept in a JSON file and loaded at startup:
//!
//! ```no_run
//! use beer_color_meter::{config::ReferenceData, BeerColorClassifier};
//! use std::path::Path;
//!
//! let tables = ReferenceData::from_json_file(Path::new("beers.json"))?
//!     .into_tables()?;
//! let classifier = BeerColorClassifier::new(&tables);
//! # Ok::<(), beer_color_meter::Error>(())
//! ```
//!
//! The file looks like
//!
//! ```json
//! { "entries": [ { "srm": 1.0, "r": 255, "g": 230, "b": 153 } ],
//!   "groups": [ { "maximum_srm": 2.0, "color_name": "Pale Straw" } ] }
//! ```

use std::path::Path;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::reference::{BeerColorEntry, BeerColorGroup, ReferenceTables};

/// Serializable form of [`ReferenceTables`].  It is not validated
/// until converted with [`ReferenceData::into_tables`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub entries: Vec<EntryData>,
    /// Named SRM ranges.  May be omitted.
    #[serde(default)]
    pub groups: Vec<GroupData>,
}

/// A beer color standard in a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryData {
    pub srm: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A named SRM range in a dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub maximum_srm: f64,
    pub color_name: String,
}

impl From<EntryData> for BeerColorEntry {
    fn from(e: EntryData) -> Self {
        BeerColorEntry::new(e.srm, RGB8 { r: e.r, g: e.g, b: e.b })
    }
}

impl From<&BeerColorEntry> for EntryData {
    fn from(e: &BeerColorEntry) -> Self {
        EntryData { srm: e.srm, r: e.color.r, g: e.color.g, b: e.color.b }
    }
}

impl From<GroupData> for BeerColorGroup {
    fn from(g: GroupData) -> Self {
        BeerColorGroup::new(g.maximum_srm, g.color_name)
    }
}

impl From<&ReferenceTables> for ReferenceData {
    fn from(t: &ReferenceTables) -> Self {
        ReferenceData {
            entries: t.entries().iter().map(EntryData::from).collect(),
            groups: t.groups().iter()
                .map(|g| GroupData { maximum_srm: g.maximum_srm,
                                     color_name: g.color_name.clone() })
                .collect(),
        }
    }
}

impl TryFrom<ReferenceData> for ReferenceTables {
    type Error = crate::Error;

    fn try_from(data: ReferenceData) -> Result<Self> {
        ReferenceTables::new(
            data.entries.into_iter().map(BeerColorEntry::from).collect(),
            data.groups.into_iter().map(BeerColorGroup::from).collect())
    }
}

impl ReferenceData {
    /// Validate the dataset.  See [`ReferenceTables::new`].
    pub fn into_tables(self) -> Result<ReferenceTables> {
        ReferenceTables::try_from(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Save the dataset to a JSON file.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

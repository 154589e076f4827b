//! Reference tables of beer color standards.
//!
//! The built-in table lists the SRM values 1 to 40 with their usual
//! sRGB swatches, and twelve named SRM ranges from "Pale Straw" to
//! "Black".  It is generated by the `tools/` crate from
//! `tools/beer_colors.hjson`.

use lazy_static::lazy_static;
use tracing::debug;
use crate::error::{Error, Result};

pub(crate) mod ty;
mod data;
pub use ty::{BeerColorEntry, BeerColorGroup, SRM_TO_EBC};

/// Validated, read-only pair of reference tables: the beer color
/// standards (nearest neighbour candidates, in declared order) and the
/// named SRM ranges (ascending ceilings).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    entries: Vec<BeerColorEntry>, // Invariant: non-empty, unique finite SRM
    groups: Vec<BeerColorGroup>, // Invariant: finite ascending ceilings
}

lazy_static! {
    static ref STANDARD: ReferenceTables = ReferenceTables {
        entries: data::BEER_COLORS.clone(),
        groups: data::BEER_COLOR_GROUPS.clone(),
    };
}

impl ReferenceTables {
    /// Check and bundle `entries` and `groups`.
    ///
    /// Fails with [`Error::Configuration`] if `entries` is empty, if an
    /// SRM value is not finite or appears twice, or if the group
    /// ceilings are not finite and ascending.  The group table may be
    /// empty, in which case no color name is ever resolved.
    pub fn new(entries: Vec<BeerColorEntry>, groups: Vec<BeerColorGroup>)
               -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::configuration("the beer color table is empty"));
        }
        for (i, e) in entries.iter().enumerate() {
            if !e.srm.is_finite() {
                return Err(Error::configuration(format!(
                    "entry {i} has a non-finite SRM ({})", e.srm)));
            }
            if entries[..i].iter().any(|prev| prev.srm == e.srm) {
                return Err(Error::configuration(format!(
                    "SRM {} appears more than once", e.srm)));
            }
        }
        for (i, g) in groups.iter().enumerate() {
            if !g.maximum_srm.is_finite() {
                return Err(Error::configuration(format!(
                    "group {:?} has a non-finite maximum SRM",
                    g.color_name)));
            }
            if i > 0 && groups[i - 1].maximum_srm > g.maximum_srm {
                return Err(Error::configuration(format!(
                    "group {:?} (maximum SRM {}) is declared after a \
                     group with a larger maximum", g.color_name,
                    g.maximum_srm)));
            }
        }
        debug!(entries = entries.len(), groups = groups.len(),
               "reference tables loaded");
        Ok(Self { entries, groups })
    }

    /// The built-in SRM 1–40 table.  Built on first use and shared by
    /// the whole process afterwards.
    pub fn standard() -> &'static ReferenceTables { &STANDARD }

    /// Beer color standards, in declared order.  Never empty.
    pub fn entries(&self) -> &[BeerColorEntry] { &self.entries }

    /// Named SRM ranges, by ascending maximum SRM.
    pub fn groups(&self) -> &[BeerColorGroup] { &self.groups }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn entry(srm: f64) -> BeerColorEntry {
        BeerColorEntry::new(srm, RGB8::new(0, 0, 0))
    }

    #[test]
    fn standard_table() {
        let t = ReferenceTables::standard();
        assert_eq!(t.entries().len(), 40);
        assert_eq!(t.entries()[0].srm, 1.);
        assert_eq!(t.entries()[39].srm, 40.);
        assert_eq!(t.groups().len(), 12);
        assert!(t.groups().windows(2)
                .all(|g| g[0].maximum_srm <= g[1].maximum_srm));
        // Validation accepts its own built-in data.
        let again = ReferenceTables::new(t.entries().to_vec(),
                                         t.groups().to_vec()).unwrap();
        assert_eq!(&again, t);
    }

    #[test]
    fn ebc() {
        let e = BeerColorEntry::new(10., RGB8::new(222, 124, 0));
        assert!((e.ebc() - 19.7).abs() < 1e-12);
        assert_eq!(e.to_string(), "SRM 10 (EBC 19, #DE7C00)");
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(ReferenceTables::new(vec![], vec![]),
                         Err(Error::Configuration { .. })));
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert!(ReferenceTables::new(vec![entry(f64::NAN)], vec![]).is_err());
        assert!(ReferenceTables::new(vec![entry(1.), entry(1.)], vec![])
                .is_err());
        let groups = vec![BeerColorGroup::new(10., "Dark"),
                          BeerColorGroup::new(5., "Light")];
        assert!(ReferenceTables::new(vec![entry(1.)], groups).is_err());
        let groups = vec![BeerColorGroup::new(f64::INFINITY, "Any")];
        assert!(ReferenceTables::new(vec![entry(1.)], groups).is_err());
    }

    #[test]
    fn groups_may_be_empty() {
        let t = ReferenceTables::new(vec![entry(1.)], vec![]).unwrap();
        assert!(t.groups().is_empty());
    }
}

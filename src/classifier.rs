//! Nearest beer color standard of an RGB color.

use std::fmt;
use rgb::RGB8;
use tracing::{debug, warn};
use crate::average::average;
use crate::error::Result;
use crate::reference::{BeerColorEntry, ReferenceTables};

/// EBC value below which a swatch is flagged "dark" for display.
pub const DARK_EBC_THRESHOLD: f64 = 12.;

/// Text color to draw on light swatches (maroon).
pub const DARK_TEXT: RGB8 = RGB8 { r: 128, g: 0, b: 0 };
/// Text color to draw on dark swatches (beige).
pub const LIGHT_TEXT: RGB8 = RGB8 { r: 245, g: 245, b: 220 };

/// The display "dark" flag: `true` iff `ebc < 12`.  Flagged swatches
/// are pale and take [`DARK_TEXT`].
#[inline]
pub fn is_dark(ebc: f64) -> bool { ebc < DARK_EBC_THRESHOLD }

/// Euclidean distance between two colors in RGB space, without any
/// channel weighting.
pub fn distance(c0: RGB8, c1: RGB8) -> f64 {
    let dr = c0.r as f64 - c1.r as f64;
    let dg = c0.g as f64 - c1.g as f64;
    let db = c0.b as f64 - c1.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Matches colors against a set of [`ReferenceTables`].
///
/// The classifier only reads its tables and can be shared between
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct BeerColorClassifier<'t> {
    tables: &'t ReferenceTables,
}

impl Default for BeerColorClassifier<'static> {
    fn default() -> Self { Self::new(ReferenceTables::standard()) }
}

impl<'t> BeerColorClassifier<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self { Self { tables } }

    pub fn tables(&self) -> &'t ReferenceTables { self.tables }

    /// Return the entry closest to `color` and its distance.  Every
    /// entry is compared; an entry replaces the current best only if
    /// it is strictly closer, so the earliest entry wins ties.
    pub fn nearest(&self, color: RGB8) -> (&'t BeerColorEntry, f64) {
        let entries = self.tables.entries();
        let mut best = &entries[0];
        let mut best_d = f64::INFINITY;
        for e in entries {
            let d = distance(color, e.color);
            if d < best_d {
                best_d = d;
                best = e;
            }
        }
        (best, best_d)
    }

    /// Name of the first group (in declared order) whose maximum SRM
    /// is at least `srm`.  Return `None` if `srm` exceeds every
    /// group's maximum.
    pub fn color_name(&self, srm: f64) -> Option<&'t str> {
        for g in self.tables.groups() {
            if g.maximum_srm >= srm {
                return Some(g.color_name.as_str());
            }
        }
        None
    }

    /// Classify `color` against the reference table.
    pub fn classify(&self, color: RGB8) -> Classification<'t> {
        let (entry, distance) = self.nearest(color);
        debug!(?color, srm = entry.srm, distance, "nearest beer color");
        self.result(color, entry, distance)
    }

    /// Average the RGBA buffer `pixels` (see [`average`]) and classify
    /// the result.
    pub fn measure(&self, pixels: &[u8]) -> Result<Classification<'t>> {
        Ok(self.classify(average(pixels)?))
    }

    /// Return the entry whose SRM is exactly `value`, if any.  There is
    /// no rounding: values not taken from the table itself will
    /// usually miss.
    pub fn find_by_srm(&self, value: f64) -> Option<&'t BeerColorEntry> {
        self.tables.entries().iter().find(|e| e.srm == value)
    }

    /// Same as [`Self::find_by_srm`] but return the classification of
    /// the entry's own swatch, as when picking a value on an SRM
    /// slider.
    pub fn select(&self, value: f64) -> Option<Classification<'t>> {
        self.find_by_srm(value).map(|e| self.result(e.color, e, 0.))
    }

    /// Smallest and largest SRM of the table, the natural bounds of an
    /// SRM slider.
    pub fn srm_range(&self) -> (f64, f64) {
        self.tables.entries().iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY),
                  |(lo, hi), e| (lo.min(e.srm), hi.max(e.srm)))
    }

    fn result(&self, color: RGB8, entry: &'t BeerColorEntry, distance: f64)
              -> Classification<'t> {
        let color_name = self.color_name(entry.srm);
        if color_name.is_none() {
            warn!(srm = entry.srm, "SRM above every color group");
        }
        Classification { color, entry: *entry, distance, color_name }
    }
}

/// Outcome of a classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'t> {
    /// The classified color (the average of the pixels when measured).
    pub color: RGB8,
    /// Closest beer color standard.
    pub entry: BeerColorEntry,
    /// RGB distance between `color` and `entry.color`.
    pub distance: f64,
    /// Name of the SRM range of `entry`, `None` if the group table does
    /// not cover it.
    pub color_name: Option<&'t str>,
}

impl Classification<'_> {
    #[inline]
    pub fn srm(&self) -> f64 { self.entry.srm }

    #[inline]
    pub fn ebc(&self) -> f64 { self.entry.ebc() }

    /// `true` iff EBC < 12.  See [`is_dark`].
    #[inline]
    pub fn dark(&self) -> bool { is_dark(self.ebc()) }

    /// Color of text drawn over the matched swatch.
    pub fn text_color(&self) -> RGB8 {
        if self.dark() { DARK_TEXT } else { LIGHT_TEXT }
    }
}

/// Swatch caption: SRM and EBC truncated to integers, then the color
/// name ("Unclassified" when unresolved).
impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRM: {}\nEBC: {}\n\n{}",
               self.srm() as i64, self.ebc() as i64,
               self.color_name.unwrap_or("Unclassified"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::BeerColorGroup;

    fn tables(entries: &[(f64, [u8; 3])], groups: &[(f64, &str)])
              -> ReferenceTables {
        let entries = entries.iter()
            .map(|&(srm, [r, g, b])| BeerColorEntry::new(srm, RGB8::new(r, g, b)))
            .collect();
        let groups = groups.iter()
            .map(|&(m, name)| BeerColorGroup::new(m, name))
            .collect();
        ReferenceTables::new(entries, groups).unwrap()
    }

    #[test]
    fn white_and_black() {
        let t = tables(&[(2., [250, 245, 230]), (40., [10, 5, 5])],
                       &[(10., "Pale"), (40., "Stout")]);
        let c = BeerColorClassifier::new(&t);
        let white = c.classify(RGB8::new(255, 255, 255));
        assert_eq!(white.srm(), 2.);
        assert_eq!(white.color_name, Some("Pale"));
        let black = c.classify(RGB8::new(0, 0, 0));
        assert_eq!(black.srm(), 40.);
        assert_eq!(black.color_name, Some("Stout"));
    }

    #[test]
    fn first_entry_is_compared() {
        // A sentinel that trusted entry 0 would fail for a single-entry
        // table or report a bogus distance.
        let t = tables(&[(5., [100, 100, 100])], &[]);
        let c = BeerColorClassifier::new(&t);
        let (e, d) = c.nearest(RGB8::new(103, 104, 100));
        assert_eq!(e.srm, 5.);
        assert_eq!(d, 5.);
    }

    #[test]
    fn ties_keep_the_earliest_entry() {
        let t = tables(&[(3., [110, 100, 100]), (1., [90, 100, 100]),
                         (2., [100, 110, 100])], &[]);
        let c = BeerColorClassifier::new(&t);
        for _ in 0 .. 3 {
            let r = c.classify(RGB8::new(100, 100, 100));
            assert_eq!(r.srm(), 3.);
            assert_eq!(r.distance, 10.);
        }
    }

    #[test]
    fn idempotent() {
        let c = BeerColorClassifier::default();
        let color = RGB8::new(200, 100, 20);
        assert_eq!(c.classify(color), c.classify(color));
    }

    #[test]
    fn color_name_first_match() {
        let t = tables(&[(1., [0, 0, 0])],
                       &[(3., "Straw"), (3., "Duplicate"), (6., "Gold")]);
        let c = BeerColorClassifier::new(&t);
        assert_eq!(c.color_name(0.5), Some("Straw"));
        assert_eq!(c.color_name(3.), Some("Straw"));
        assert_eq!(c.color_name(3.5), Some("Gold"));
        assert_eq!(c.color_name(6.), Some("Gold"));
        assert_eq!(c.color_name(6.01), None);
    }

    #[test]
    fn unresolved_name() {
        let t = tables(&[(50., [0, 0, 0])], &[(40., "Black")]);
        let r = BeerColorClassifier::new(&t).classify(RGB8::new(0, 0, 0));
        assert_eq!(r.color_name, None);
        assert!(r.to_string().ends_with("\n\nUnclassified"));
    }

    #[test]
    fn dark_threshold() {
        assert!(is_dark(11.99));
        assert!(!is_dark(12.));
        let c = BeerColorClassifier::default();
        // SRM 6 → EBC 11.82, SRM 7 → EBC 13.79
        let six = c.select(6.).unwrap();
        assert!(six.dark());
        assert_eq!(six.text_color(), DARK_TEXT);
        let seven = c.select(7.).unwrap();
        assert!(!seven.dark());
        assert_eq!(seven.text_color(), LIGHT_TEXT);
        for e in c.tables().entries() {
            assert_eq!(is_dark(e.ebc()), e.srm < 12. / 1.97);
        }
    }

    #[test]
    fn find_by_srm() {
        let c = BeerColorClassifier::default();
        let e = c.find_by_srm(12.).unwrap();
        assert_eq!(e.color, RGB8::new(207, 105, 0));
        assert!(c.find_by_srm(12.5).is_none());
        assert!(c.find_by_srm(0.).is_none());
        assert!(c.find_by_srm(12.000001).is_none());
    }

    #[test]
    fn select() {
        let c = BeerColorClassifier::default();
        let r = c.select(20.).unwrap();
        assert_eq!(r.color, r.entry.color);
        assert_eq!(r.distance, 0.);
        assert_eq!(r.color_name, Some("Brown"));
        assert_eq!(r.to_string(), "SRM: 20\nEBC: 39\n\nBrown");
        assert!(c.select(20.5).is_none());
    }

    #[test]
    fn standard_swatches_classify_to_themselves() {
        let c = BeerColorClassifier::default();
        for e in c.tables().entries() {
            let r = c.classify(e.color);
            assert_eq!(r.srm(), e.srm);
            assert_eq!(r.distance, 0.);
            assert!(r.color_name.is_some());
        }
    }

    #[test]
    fn srm_range() {
        assert_eq!(BeerColorClassifier::default().srm_range(), (1., 40.));
        let t = tables(&[(8., [0, 0, 0]), (2., [1, 1, 1]), (5., [2, 2, 2])],
                       &[]);
        assert_eq!(BeerColorClassifier::new(&t).srm_range(), (2., 8.));
    }

    #[test]
    fn measure() {
        let c = BeerColorClassifier::default();
        let px: Vec<u8> = [229, 133, 0, 255].repeat(16);
        let r = c.measure(&px).unwrap();
        assert_eq!(r.color, RGB8::new(229, 133, 0));
        assert_eq!(r.srm(), 9.);
        assert_eq!(r.color_name, Some("Pale Amber"));
        assert!(c.measure(&px[1..]).is_err());
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(RGB8::new(0, 0, 0), RGB8::new(3, 4, 0)), 5.);
        assert_eq!(distance(RGB8::new(255, 0, 0), RGB8::new(0, 0, 0)), 255.);
    }
}

use std::fmt;
use rgb::RGB8;

/// Conversion factor from the SRM scale to the EBC scale.
pub const SRM_TO_EBC: f64 = 1.97;

/// A beer color standard: one row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeerColorEntry {
    /// Position on the SRM scale.  Unique in a table.
    pub srm: f64,
    /// Canonical swatch for this SRM value.
    pub color: RGB8,
}

impl BeerColorEntry {
    pub const fn new(srm: f64, color: RGB8) -> Self {
        Self { srm, color }
    }

    /// Position on the EBC scale, always `1.97 * srm`.
    #[inline]
    pub fn ebc(&self) -> f64 { SRM_TO_EBC * self.srm }
}

impl fmt::Display for BeerColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RGB8 { r, g, b } = self.color;
        write!(f, "SRM {} (EBC {}, #{r:02X}{g:02X}{b:02X})",
               self.srm as i64, self.ebc() as i64)
    }
}

/// A named range of the SRM scale, such as "Amber" or "Black".
#[derive(Debug, Clone, PartialEq)]
pub struct BeerColorGroup {
    /// Largest SRM value (inclusive) carrying this name.
    pub maximum_srm: f64,
    pub color_name: String,
}

impl BeerColorGroup {
    pub fn new(maximum_srm: f64, color_name: impl Into<String>) -> Self {
        Self { maximum_srm, color_name: color_name.into() }
    }
}

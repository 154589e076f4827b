//! Beer color measurement.
//!
//! - [`average()`] reduces an RGBA pixel buffer (a decoded region of a
//!   photo) to its mean color.
//! - [`BeerColorClassifier`] finds the closest beer color standard of
//!   the [`ReferenceTables`] and reports its SRM and EBC values and the
//!   name of its SRM range.
//!
//! The built-in tables ([`ReferenceTables::standard`]) list the SRM
//! values 1 to 40.  Other tables can be loaded from JSON, see
//! [`config`].
//!
//! # Example
//!
//! ```
//! // Two pixels of a pale amber beer.
//! let pixels = [229, 133, 0, 255,  229, 133, 0, 255];
//! let beer = beer_color_meter::measure(&pixels)?;
//! assert_eq!(beer.srm(), 9.);
//! assert_eq!(beer.color_name, Some("Pale Amber"));
//! println!("{beer}");
//! # Ok::<(), beer_color_meter::Error>(())
//! ```

pub mod average;
pub mod classifier;
pub mod config;
pub mod error;
pub mod reference;

pub use average::{average, average_region, average_rgba};
pub use classifier::{BeerColorClassifier, Classification, is_dark};
pub use error::{Error, Result};
pub use reference::{BeerColorEntry, BeerColorGroup, ReferenceTables,
                    SRM_TO_EBC};

/// Average the RGBA buffer `pixels` and classify the result against
/// the built-in tables.
pub fn measure(pixels: &[u8]) -> Result<Classification<'static>> {
    BeerColorClassifier::default().measure(pixels)
}

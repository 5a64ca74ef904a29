#![deny(warnings)]
#![deny(missing_docs)]

//! # note_coords
//!
//! Latitude/longitude extraction from loosely structured note metadata
//!
//! Lenient functions never fail: anything malformed or out of range gives `None`, or is left out of lists.
//! Strict parsing through [`FromStr`](std::str::FromStr) and [`TryFrom`] reports an [`Error`] instead.

use std::num::ParseFloatError;

/// Coordinate pair type and extraction from values
pub mod coordinate;

/// Scalar parsing and geographic validation
pub mod parse;

/// Helpers for host code dealing with raw metadata
pub mod utils;

/// Dynamically typed metadata value
pub mod value;

pub use coordinate::{Coordinate, coordinates, coordinates_from_value, single_coordinate_from_value};
pub use parse::{parse_coordinate, parse_float, verify_lat_lng};
pub use utils::has_own_property;
pub use value::Value;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not a `lat,lng` string
    #[error("expected \"lat,lng\", got {0:?}")]
    Format(String),
    /// Part isn't a number
    #[error("invalid number {part:?}: {source}")]
    Number {
        /// offending part
        part: String,
        /// parser error
        source: ParseFloatError,
    },
    /// Outside geographic bounds
    #[error("coordinate {latitude},{longitude} out of range")]
    OutOfRange {
        /// latitude
        latitude: f64,
        /// longitude
        longitude: f64,
    },
}

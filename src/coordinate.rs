use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use tracing::debug;

use crate::{
    Error,
    parse::{is_blank, parse_coordinate, parse_float, verify_lat_lng},
    value::Value,
};

/// A validated latitude/longitude pair
///
/// Serialized as a `[lat, lng]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// creates a coordinate, if inside geographic bounds
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        verify_lat_lng(latitude, longitude).then_some(Coordinate { latitude, longitude })
    }

    /// returns latitude
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// returns longitude
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = Error;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(latitude, longitude).ok_or(Error::OutOfRange { latitude, longitude })
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = Error;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::try_from((latitude, longitude))
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.latitude, c.longitude]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Strict counterpart of [`single_coordinate_from_value`]: both parts must be plain numbers
impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| Error::Format(s.to_owned()))?;
        if lng.contains(',') {
            return Err(Error::Format(s.to_owned()));
        }
        let parse = |part: &str| {
            let part = part.trim();
            part.parse::<f64>().map_err(|source| Error::Number { part: part.to_owned(), source })
        };
        Coordinate::try_from((parse(lat)?, parse(lng)?))
    }
}

/// Extracts a single coordinate from a `[lat, lng]` list or a `"lat,lng"` string
///
/// Values equal to zero are rejected, so points lying on the equator or on the prime meridian give `None`.
pub fn single_coordinate_from_value(value: &Value) -> Option<Coordinate> {
    let (lat, lng) = match value {
        Value::List(items) if items.len() >= 2 => (parse_coordinate(&items[0]), parse_coordinate(&items[1])),
        Value::Text(s) => {
            let mut parts = s.trim_matches(is_blank).split(',');
            match (parts.next(), parts.next()) {
                (Some(lat), Some(lng)) => {
                    (parse_float(lat.trim_matches(is_blank)), parse_float(lng.trim_matches(is_blank)))
                }
                _ => (None, None),
            }
        }
        _ => (None, None),
    };

    // zero counts as missing
    let lat = lat.filter(|n| *n != 0_f64)?;
    let lng = lng.filter(|n| *n != 0_f64)?;
    Coordinate::new(lat, lng)
}

/// Lazily extracts coordinates from a list of `[lat, lng]` lists, skipping invalid entries
pub fn coordinates(value: &Value) -> impl Iterator<Item = Coordinate> + '_ {
    value.as_list().unwrap_or_default().iter().enumerate().filter_map(|(index, item)| {
        let coordinate = match item {
            Value::List(pair) if pair.len() >= 2 => parse_coordinate(&pair[0])
                .zip(parse_coordinate(&pair[1]))
                .and_then(|(lat, lng)| Coordinate::new(lat, lng)),
            _ => None,
        };
        if coordinate.is_none() {
            debug!("skipping coordinate entry {}: {}", index, item);
        }
        coordinate
    })
}

/// Extracts coordinates from a list of `[lat, lng]` lists, skipping invalid entries
///
/// Returns an empty list if the value isn't a list.
pub fn coordinates_from_value(value: &Value) -> Vec<Coordinate> {
    coordinates(value).collect()
}

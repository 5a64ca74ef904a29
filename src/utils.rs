use serde::{Deserialize, Deserializer};

use crate::{
    coordinate::{Coordinate, coordinates_from_value, single_coordinate_from_value},
    value::Value,
};

/// Checks that `o` is an object declaring `key` as its own property
pub fn has_own_property(o: &serde_json::Value, key: &str) -> bool {
    o.as_object().is_some_and(|map| map.contains_key(key))
}

/// `deserialize_with` helper reading a single coordinate out of a loosely typed field
///
/// Malformed fields give `None` instead of an error.
pub fn deserialize_coordinate_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Coordinate>, D::Error> {
    let temp = Option::<Value>::deserialize(deserializer)?;
    Ok(temp.as_ref().and_then(single_coordinate_from_value))
}

/// `deserialize_with` helper reading a list of coordinates out of a loosely typed field
///
/// Invalid entries are skipped.
pub fn deserialize_coordinates<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Coordinate>, D::Error> {
    let temp = Value::deserialize(deserializer)?;
    Ok(coordinates_from_value(&temp))
}

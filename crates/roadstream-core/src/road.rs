// crates/roadstream-core/src/road.rs

//! Per-feature road logic: the predicate and the property trimmer.

use crate::config::RoadConfig;
use serde_json::{Map, Value};

/// True when the geometry type is one of the configured line types and
/// the properties carry the highway key.
///
/// Only presence of the key counts, so `"highway": ""` or `null` still
/// qualifies. A missing or non-object `geometry`/`properties` is treated
/// as absent rather than as an error.
pub fn is_road(feature: &Value, config: &RoadConfig) -> bool {
    let geometry_type = feature
        .get("geometry")
        .and_then(|geometry| geometry.get("type"))
        .and_then(Value::as_str);

    let is_line = geometry_type.is_some_and(|t| config.geometry_types.iter().any(|g| g == t));
    if !is_line {
        return false;
    }

    feature
        .get("properties")
        .and_then(Value::as_object)
        .is_some_and(|props| props.contains_key(&config.highway_key))
}

/// Replaces `properties` with only the keep-listed keys.
///
/// Kept keys stay in their input order and keep their values untouched.
/// A feature without an object `properties` ends up with an empty one.
pub fn trim_properties(mut feature: Value, config: &RoadConfig) -> Value {
    let Some(obj) = feature.as_object_mut() else {
        return feature;
    };

    match obj.get_mut("properties").and_then(Value::as_object_mut) {
        Some(props) => props.retain(|key, _| config.keep_properties.iter().any(|k| k == key)),
        None => {
            obj.insert("properties".to_string(), Value::Object(Map::new()));
        }
    }
    feature
}

//! JSON serializer for the field catalog.
//!
//! The document lists categories in canonical order; each category carries
//! its label, comment and a `fields` object mapping field name to
//! descriptor, in the same camelCase shape profiles use.

use serde_json::{json, Map, Value};

use crate::catalog::{Catalog, CategoryModule};
use crate::model::SimPlatform;
use crate::platforms;

/// Serializes the catalog to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(catalog: &Catalog) -> Value {
    let categories: Map<String, Value> = catalog
        .categories
        .iter()
        .map(|module| (module.category.as_str().to_owned(), category(module)))
        .collect();
    let mut adapters = Map::new();
    for &platform in SimPlatform::ALL {
        let base = platforms::base_descriptors(platform);
        if !base.is_empty() {
            adapters.insert(
                platform.to_string(),
                serde_json::to_value(base).unwrap_or(Value::Null),
            );
        }
    }
    json!({
        "version": catalog.version,
        "fieldCount": catalog.field_count(),
        "categories": categories,
        "platforms": adapters,
    })
}

fn category(module: &CategoryModule) -> Value {
    let fields: Map<String, Value> = module
        .fields
        .iter()
        .map(|(name, descriptor)| {
            (
                name.as_str().to_owned(),
                serde_json::to_value(descriptor).unwrap_or(Value::Null),
            )
        })
        .collect();
    json!({
        "label": module.label,
        "comment": module.comment,
        "fields": fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_serialized() {
        let value = to_json(Catalog::full());
        let categories = value["categories"].as_object().map(Map::len);
        assert_eq!(categories, Some(14));
        assert_eq!(value["fieldCount"], Catalog::full().field_count());
    }

    #[test]
    fn descriptors_use_profile_shape() {
        let value = to_json(Catalog::full());
        let is_failed = &value["categories"]["failures"]["fields"]["isFailed"];
        assert_eq!(is_failed["type"], "BooleanMap");
        assert_eq!(is_failed["writableByPlatform"]["xplane12"], "Always");
        assert!(is_failed["mapKeys"].as_array().is_some_and(|k| k.len() == 11));
    }

    #[test]
    fn only_xplane_has_an_adapter_table() {
        let value = to_json(Catalog::full());
        let platforms = value["platforms"].as_object();
        assert!(platforms.is_some_and(|p| p.contains_key("xplane12")));
        assert!(platforms.is_some_and(|p| !p.contains_key("msfs2020")));
        assert_eq!(
            value["platforms"]["xplane12"]["position"]["latitudeDeg"]["dataref"],
            "sim/flightmodel/position/latitude"
        );
    }
}

//! Core field metadata types.
//!
//! These types describe every telemetry/control field as typed Rust data.
//! A [`Model`] is the uniform ordered container used for the base catalog,
//! override layers, platform adapter tables, telemetry snapshots and set
//! requests alike. The top-level entry point is
//! [`Catalog::full()`](crate::Catalog::full).

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::map_keys::DEFAULT_MAP_KEYS;
use crate::names::{DataCategory, DataName};

/// The value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// A single number.
    Number,
    /// A single boolean.
    Boolean,
    /// A single string.
    String,
    /// A string-keyed map of numbers.
    NumberMap,
    /// A string-keyed map of booleans.
    BooleanMap,
    /// A string-keyed map of strings.
    StringMap,
}

impl ValueType {
    /// Returns true for the three map-typed variants.
    #[must_use]
    pub fn is_map(self) -> bool {
        matches!(
            self,
            ValueType::NumberMap | ValueType::BooleanMap | ValueType::StringMap
        )
    }

    /// Returns the serialized name of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Number => "Number",
            ValueType::Boolean => "Boolean",
            ValueType::String => "String",
            ValueType::NumberMap => "NumberMap",
            ValueType::BooleanMap => "BooleanMap",
            ValueType::StringMap => "StringMap",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// End-user exposure of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Always shown.
    Always,
    /// Never shown.
    Never,
    /// Only available to tools, not shown in the default field listing.
    Tool,
}

/// Per-platform write capability of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Writability {
    /// The field can never be written.
    Never,
    /// The field can be written once a value has been read from the platform.
    AfterRead,
    /// The field can always be written.
    Always,
}

/// A target simulation platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SimPlatform {
    /// X-Plane 12.
    Xplane12,
    /// Microsoft Flight Simulator 2020.
    Msfs2020,
}

impl SimPlatform {
    /// All platforms in order.
    pub const ALL: &'static [SimPlatform] = &[SimPlatform::Xplane12, SimPlatform::Msfs2020];

    /// Returns the key under which an aircraft profile stores this
    /// platform's adapter overrides.
    #[must_use]
    pub fn profile_key(self) -> &'static str {
        match self {
            SimPlatform::Xplane12 => "xplane",
            SimPlatform::Msfs2020 => "msfs",
        }
    }
}

impl fmt::Display for SimPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimPlatform::Xplane12 => f.write_str("xplane12"),
            SimPlatform::Msfs2020 => f.write_str("msfs2020"),
        }
    }
}

/// Inclusive numeric range, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl From<(f64, f64)> for Range {
    fn from((min, max): (f64, f64)) -> Self {
        Range { min, max }
    }
}

impl From<Range> for (f64, f64) {
    fn from(range: Range) -> Self {
        (range.min, range.max)
    }
}

/// Metadata for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataDescriptor {
    /// Value type.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// End-user exposure.
    pub visibility: Visibility,
    /// Write capability per platform. Absent platforms are `Never`.
    #[serde(default)]
    pub writable_by_platform: BTreeMap<SimPlatform, Writability>,
    /// Inclusive numeric range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    /// Ordered keys of a map-typed field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_keys: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values of a string or string-map field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl DataDescriptor {
    /// Creates a descriptor that is not writable on any platform.
    #[must_use]
    pub fn new(value_type: ValueType, visibility: Visibility) -> Self {
        DataDescriptor {
            value_type,
            visibility,
            writable_by_platform: BTreeMap::new(),
            range: None,
            map_keys: None,
            description: None,
            enum_values: None,
        }
    }

    /// Sets the writability for one platform.
    #[must_use]
    pub fn writable(mut self, platform: SimPlatform, writability: Writability) -> Self {
        self.writable_by_platform.insert(platform, writability);
        self
    }

    /// Sets the inclusive range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(Range { min, max });
        self
    }

    /// Sets the ordered map keys.
    #[must_use]
    pub fn with_map_keys(mut self, keys: &[&str]) -> Self {
        self.map_keys = Some(keys.iter().map(|k| (*k).to_owned()).collect());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the allowed enum values.
    #[must_use]
    pub fn with_enum_values(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| (*v).to_owned()).collect());
        self
    }

    /// Returns the writability on `platform`, `Never` when unspecified.
    #[must_use]
    pub fn writability(&self, platform: SimPlatform) -> Writability {
        self.writable_by_platform
            .get(&platform)
            .copied()
            .unwrap_or(Writability::Never)
    }

    /// Returns true if the field is map-typed.
    #[must_use]
    pub fn is_map(&self) -> bool {
        self.value_type.is_map()
    }

    /// Returns the keys a map-typed value may use: the declared `map_keys`,
    /// or [`DEFAULT_MAP_KEYS`] when none are declared.
    #[must_use]
    pub fn effective_map_keys(&self) -> Vec<&str> {
        match &self.map_keys {
            Some(keys) => keys.iter().map(String::as_str).collect(),
            None => DEFAULT_MAP_KEYS.to_vec(),
        }
    }
}

/// A partial [`DataDescriptor`]: every property optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescriptorOverride {
    /// Value type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// End-user exposure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Write capability per platform; replaces the whole base mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writable_by_platform: Option<BTreeMap<SimPlatform, Writability>>,
    /// Inclusive numeric range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    /// Ordered keys of a map-typed field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_keys: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values of a string or string-map field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl DescriptorOverride {
    /// An override that only changes visibility.
    #[must_use]
    pub fn visibility(visibility: Visibility) -> Self {
        DescriptorOverride {
            visibility: Some(visibility),
            ..DescriptorOverride::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the ordered map keys.
    #[must_use]
    pub fn with_map_keys(mut self, keys: &[&str]) -> Self {
        self.map_keys = Some(keys.iter().map(|k| (*k).to_owned()).collect());
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

/// Ordered mapping from category to field to `T`.
///
/// A field is always stored under its own category and a category is only
/// present while it holds at least one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Model<T> {
    categories: BTreeMap<DataCategory, BTreeMap<DataName, T>>,
}

/// The base catalog and every effective model derived from it.
pub type DataModel = Model<DataDescriptor>;

/// Per-field partial descriptors layered over a [`DataModel`].
pub type OverrideModel = Model<DescriptorOverride>;

impl<T> Default for Model<T> {
    fn default() -> Self {
        Model {
            categories: BTreeMap::new(),
        }
    }
}

impl<T> Model<T> {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a field.
    #[must_use]
    pub fn get(&self, name: DataName) -> Option<&T> {
        self.categories.get(&name.category())?.get(&name)
    }

    /// Looks up a field for modification.
    pub fn get_mut(&mut self, name: DataName) -> Option<&mut T> {
        self.categories.get_mut(&name.category())?.get_mut(&name)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, name: DataName) -> bool {
        self.get(name).is_some()
    }

    /// Inserts a field under its category, returning the previous value.
    pub fn insert(&mut self, name: DataName, value: T) -> Option<T> {
        self.categories
            .entry(name.category())
            .or_default()
            .insert(name, value)
    }

    /// Returns the fields of one category.
    #[must_use]
    pub fn category(&self, category: DataCategory) -> Option<&BTreeMap<DataName, T>> {
        self.categories.get(&category)
    }

    /// Iterates non-empty categories in order.
    pub fn categories(&self) -> impl Iterator<Item = (DataCategory, &BTreeMap<DataName, T>)> {
        self.categories.iter().map(|(c, fields)| (*c, fields))
    }

    /// Iterates every field in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DataName, &T)> {
        self.categories
            .values()
            .flat_map(|fields| fields.iter().map(|(n, v)| (*n, v)))
    }

    /// Iterates every field name in canonical order.
    pub fn names(&self) -> impl Iterator<Item = DataName> + '_ {
        self.iter().map(|(n, _)| n)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the model holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Builds a new model from the fields for which `f` returns a value.
    /// Categories left without fields are omitted.
    #[must_use]
    pub fn filter_map<U>(&self, mut f: impl FnMut(DataName, &T) -> Option<U>) -> Model<U> {
        let mut categories = BTreeMap::new();
        for (category, fields) in &self.categories {
            let kept: BTreeMap<DataName, U> = fields
                .iter()
                .filter_map(|(name, value)| f(*name, value).map(|u| (*name, u)))
                .collect();
            if !kept.is_empty() {
                categories.insert(*category, kept);
            }
        }
        Model { categories }
    }

    /// Builds a new model with only the fields for which `keep` is true.
    /// Categories left without fields are omitted.
    #[must_use]
    pub fn filter(&self, mut keep: impl FnMut(DataName, &T) -> bool) -> Model<T>
    where
        T: Clone,
    {
        self.filter_map(|name, value| keep(name, value).then(|| value.clone()))
    }
}

impl<T> FromIterator<(DataName, T)> for Model<T> {
    fn from_iter<I: IntoIterator<Item = (DataName, T)>>(iter: I) -> Self {
        let mut model = Model::new();
        for (name, value) in iter {
            model.insert(name, value);
        }
        model
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Model<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ModelVisitor(PhantomData))
    }
}

struct ModelVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ModelVisitor<T> {
    type Value = Model<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of categories to fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut model = Model::new();
        while let Some(category) = access.next_key::<DataCategory>()? {
            let fields: BTreeMap<DataName, T> = access.next_value()?;
            for (name, value) in fields {
                if name.category() != category {
                    return Err(de::Error::custom(format_args!(
                        "field `{name}` does not belong to category `{category}`"
                    )));
                }
                model.insert(name, value);
            }
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_platform_is_never_writable() {
        let d = DataDescriptor::new(ValueType::Number, Visibility::Always)
            .writable(SimPlatform::Xplane12, Writability::Always);
        assert_eq!(d.writability(SimPlatform::Xplane12), Writability::Always);
        assert_eq!(d.writability(SimPlatform::Msfs2020), Writability::Never);
    }

    #[test]
    fn effective_map_keys_fall_back_to_default() {
        let d = DataDescriptor::new(ValueType::NumberMap, Visibility::Always);
        assert_eq!(d.effective_map_keys(), vec!["0"]);
        let d = d.with_map_keys(&["LeftEngine", "RightEngine"]);
        assert_eq!(d.effective_map_keys(), vec!["LeftEngine", "RightEngine"]);
    }

    #[test]
    fn filter_drops_empty_categories() {
        let model: Model<u32> = [
            (DataName::LatitudeDeg, 1),
            (DataName::BatteryOn, 2),
            (DataName::ParkingBrakeOn, 3),
        ]
        .into_iter()
        .collect();
        let kept = model.filter(|_, v| *v > 1);
        assert_eq!(kept.len(), 2);
        assert!(kept.category(DataCategory::Position).is_none());
        assert_eq!(kept.categories().count(), 1);
    }

    #[test]
    fn deserialize_rejects_misplaced_fields() {
        let ok: Result<Model<u32>, _> = serde_json::from_str(r#"{"systems":{"batteryOn":1}}"#);
        assert!(ok.is_ok());
        let err: Result<Model<u32>, _> = serde_json::from_str(r#"{"levers":{"batteryOn":1}}"#);
        assert!(err.is_err());
        let unknown: Result<Model<u32>, _> =
            serde_json::from_str(r#"{"levers":{"nonsense":1}}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn descriptor_serializes_type_and_range() {
        let d = DataDescriptor::new(ValueType::Number, Visibility::Tool).with_range(0.0, 100.0);
        let v = serde_json::to_value(&d).unwrap_or_default();
        assert_eq!(v["type"], "Number");
        assert_eq!(v["visibility"], "Tool");
        assert_eq!(v["range"], serde_json::json!([0.0, 100.0]));
        assert!(v.get("mapKeys").is_none());
    }
}

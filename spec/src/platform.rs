//! Platform adapter descriptors.
//!
//! A [`PlatformDescriptor`] tells a platform's telemetry transport how to read
//! and write one field natively, and optionally carries a partial
//! [`DescriptorOverride`] for the field's generic metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{DescriptorOverride, Model};

/// A native command used to actuate a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandRef {
    /// Native command reference.
    #[serde(rename = "ref")]
    pub command: String,
    /// Seconds to hold the command; instantaneous when absent.
    #[serde(default, rename = "durationS", skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// How one field maps to native telemetry on a platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlatformDescriptor {
    /// Overrides for the field's generic metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<DescriptorOverride>,
    /// Native telemetry reference read for the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataref: Option<String>,
    /// Command used to actuate the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandRef>,
    /// Multiplier from the native value to the field's unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// Offset added after applying `ratio`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Native array index to map key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_index_name_map: Option<BTreeMap<u32, String>>,
    /// Enum value to native numeric code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_value_map: Option<BTreeMap<String, f64>>,
}

/// Platform descriptors keyed like the catalog.
pub type PlatformModel = Model<PlatformDescriptor>;

impl PlatformDescriptor {
    /// A descriptor reading `dataref`.
    #[must_use]
    pub fn dataref(dataref: &str) -> Self {
        PlatformDescriptor {
            dataref: Some(dataref.to_owned()),
            ..PlatformDescriptor::default()
        }
    }

    /// A descriptor that only actuates `command`.
    #[must_use]
    pub fn command(command: &str) -> Self {
        PlatformDescriptor::default().with_command(command)
    }

    /// A descriptor that only overrides generic metadata.
    #[must_use]
    pub fn overriding(descriptor: DescriptorOverride) -> Self {
        PlatformDescriptor {
            descriptor: Some(descriptor),
            ..PlatformDescriptor::default()
        }
    }

    /// Sets the actuating command.
    #[must_use]
    pub fn with_command(mut self, command: &str) -> Self {
        self.command = Some(CommandRef {
            command: command.to_owned(),
            duration_seconds: None,
        });
        self
    }

    /// Sets the unit ratio.
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Sets the unit offset.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Maps native array indices, in order, to `keys`.
    #[must_use]
    pub fn with_array_keys(mut self, keys: &[&str]) -> Self {
        self.array_index_name_map = Some(
            (0u32..)
                .zip(keys.iter())
                .map(|(i, k)| (i, (*k).to_owned()))
                .collect(),
        );
        self
    }

    /// Sets the enum value translation table.
    #[must_use]
    pub fn with_enum_values(mut self, values: &[(&str, f64)]) -> Self {
        self.enum_value_map = Some(
            values
                .iter()
                .map(|(name, code)| ((*name).to_owned(), *code))
                .collect(),
        );
        self
    }

    /// Sets the generic metadata override.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: DescriptorOverride) -> Self {
        self.descriptor = Some(descriptor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Visibility;

    #[test]
    fn array_index_map_parses_string_indices() {
        let json = r#"{"arrayIndexNameMap":{"0":"LeftEngine","1":"RightEngine"},"descriptor":{"visibility":"Always"}}"#;
        let parsed: Result<PlatformDescriptor, _> = serde_json::from_str(json);
        assert!(parsed.is_ok(), "{parsed:?}");
        let d = parsed.unwrap_or_default();
        let map = d.array_index_name_map.unwrap_or_default();
        assert_eq!(map.get(&1).map(String::as_str), Some("RightEngine"));
        assert_eq!(
            d.descriptor.and_then(|o| o.visibility),
            Some(Visibility::Always)
        );
    }

    #[test]
    fn unknown_properties_are_rejected() {
        let parsed: Result<PlatformDescriptor, _> = serde_json::from_str(r#"{"datarefs":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn with_array_keys_numbers_from_zero() {
        let d = PlatformDescriptor::dataref("sim/x").with_array_keys(&["a", "b"]);
        let map = d.array_index_name_map.unwrap_or_default();
        assert_eq!(map.get(&0).map(String::as_str), Some("a"));
        assert_eq!(map.len(), 2);
    }
}

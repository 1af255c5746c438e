//! The base descriptor catalog.
//!
//! Each category module in [`crate::categories`] contributes a
//! [`CategoryModule`]; [`Catalog::full`] assembles them once per process
//! into the immutable [`DataModel`] every resolution starts from.

use std::sync::OnceLock;

use crate::categories;
use crate::model::{DataDescriptor, DataModel};
use crate::names::{DataCategory, DataName};

/// One category's metadata and field descriptors.
#[derive(Debug, Clone)]
pub struct CategoryModule {
    /// The category.
    pub category: DataCategory,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the category.
    pub comment: &'static str,
    /// Every field of the category, in declaration order.
    pub fields: Vec<(DataName, DataDescriptor)>,
}

/// The complete field catalog.
#[derive(Debug)]
pub struct Catalog {
    /// Catalog version.
    pub version: &'static str,
    /// All category modules in canonical order.
    pub categories: Vec<CategoryModule>,
    descriptors: DataModel,
}

impl Catalog {
    /// Returns the complete catalog, built on first use.
    #[must_use]
    pub fn full() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::from_modules(
                "1.0.0",
                vec![
                    categories::position::module(),
                    categories::attitude::module(),
                    categories::radios_navigation::module(),
                    categories::lights::module(),
                    categories::indicators::module(),
                    categories::levers::module(),
                    categories::autopilot::module(),
                    categories::systems::module(),
                    categories::failures::module(),
                    categories::weight_balance::module(),
                    categories::environment::module(),
                    categories::initialization::module(),
                    categories::simulation::module(),
                    categories::freezes::module(),
                ],
            )
        })
    }

    /// Builds a catalog from category modules.
    #[must_use]
    pub fn from_modules(version: &'static str, categories: Vec<CategoryModule>) -> Catalog {
        let descriptors = categories
            .iter()
            .flat_map(|m| m.fields.iter().cloned())
            .collect();
        Catalog {
            version,
            categories,
            descriptors,
        }
    }

    /// Returns every field descriptor as a [`DataModel`].
    #[must_use]
    pub fn descriptors(&self) -> &DataModel {
        &self.descriptors
    }

    /// Looks up a field descriptor.
    #[must_use]
    pub fn find(&self, name: DataName) -> Option<&DataDescriptor> {
        self.descriptors.get(name)
    }

    /// Returns the total number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.descriptors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SimPlatform, Visibility, Writability};

    #[test]
    fn catalog_defines_every_field() {
        let catalog = Catalog::full();
        assert_eq!(catalog.categories.len(), DataCategory::ALL.len());
        for &name in DataName::ALL {
            assert!(catalog.find(name).is_some(), "{name} missing from catalog");
        }
        assert_eq!(catalog.field_count(), DataName::ALL.len());
    }

    #[test]
    fn modules_only_declare_their_own_fields() {
        for module in &Catalog::full().categories {
            for (name, _) in &module.fields {
                assert_eq!(name.category(), module.category, "{name} in wrong module");
            }
        }
    }

    #[test]
    fn map_keys_only_on_map_types() {
        for (name, d) in Catalog::full().descriptors().iter() {
            if d.map_keys.is_some() {
                assert!(d.is_map(), "{name} declares mapKeys on {}", d.value_type);
            }
        }
    }

    #[test]
    fn map_keys_are_unique() {
        for (name, d) in Catalog::full().descriptors().iter() {
            if let Some(keys) = &d.map_keys {
                let unique: std::collections::BTreeSet<_> = keys.iter().collect();
                assert_eq!(unique.len(), keys.len(), "{name} repeats a map key");
            }
        }
    }

    #[test]
    fn ranges_are_ordered() {
        for (name, d) in Catalog::full().descriptors().iter() {
            if let Some(range) = d.range {
                assert!(range.min <= range.max, "{name} has an inverted range");
            }
        }
    }

    #[test]
    fn mixture_is_hidden_until_a_profile_shows_it() {
        let mixture = Catalog::full().find(DataName::MixtureLeverPercentRich);
        assert_eq!(mixture.map(|d| d.visibility), Some(Visibility::Never));
        assert_eq!(
            mixture.map(|d| d.writability(SimPlatform::Xplane12)),
            Some(Writability::AfterRead)
        );
    }
}

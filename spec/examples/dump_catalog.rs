//! Demonstrates loading the field catalog and resolving a built-in profile.
//!
//! Run with: `cargo run --example dump_catalog -p simdata-spec`

use simdata_spec::{Catalog, SimPlatform};

fn main() {
    let catalog = Catalog::full();

    println!("SimData catalog v{}", catalog.version);
    println!("  Categories: {}", catalog.categories.len());
    println!("  Fields:     {}", catalog.field_count());
    println!();

    for module in &catalog.categories {
        let maps = module.fields.iter().filter(|(_, d)| d.is_map()).count();
        let writable = module
            .fields
            .iter()
            .filter(|(_, d)| {
                d.writability(SimPlatform::Xplane12) != simdata_spec::Writability::Never
            })
            .count();
        println!(
            "  {:18} {:>2} fields, {:>2} maps, {:>2} writable on {}",
            module.category.as_str(),
            module.fields.len(),
            maps,
            writable,
            SimPlatform::Xplane12,
        );
    }

    println!();

    for profile in simdata_spec::profiles::builtin() {
        let overrides = profile
            .platform_overrides(SimPlatform::Xplane12)
            .map_or(0, |m| m.len());
        println!("  {:32} {:>2} overrides", profile.aircraft_code, overrides);
    }

    println!();

    let json = simdata_spec::serializer::json::to_json(catalog);
    let levers = &json["categories"]["levers"]["fields"];
    let throttle = &levers["throttlePercentOpen"];
    println!(
        "levers.throttlePercentOpen as JSON: {}",
        serde_json::to_string(throttle).unwrap_or_else(|e| format!("<{e}>"))
    );
}

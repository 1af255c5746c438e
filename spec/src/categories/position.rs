//! `position` category: where the aircraft is and how fast it moves.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, ValueType, Visibility};
use crate::names::{DataCategory, DataName};

/// Returns the `position` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Position,
        label: "Position",
        comment: "Geographic position, altitude and speeds of the aircraft.",
        fields: fields(),
    }
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    let number = || DataDescriptor::new(ValueType::Number, Visibility::Always);
    vec![
        (
            DataName::LatitudeDeg,
            number()
                .with_range(-90.0, 90.0)
                .with_description("Latitude in degrees, north positive."),
        ),
        (
            DataName::LongitudeDeg,
            number()
                .with_range(-180.0, 180.0)
                .with_description("Longitude in degrees, east positive."),
        ),
        (
            DataName::AglAltitudeFt,
            number().with_description("Height above ground level in feet."),
        ),
        (
            DataName::MslAltitudeFt,
            number().with_description("Altitude above mean sea level in feet."),
        ),
        (
            DataName::IndicatedAirspeedKts,
            number().with_description("Indicated airspeed in knots."),
        ),
        (
            DataName::GpsGroundSpeedKts,
            number().with_description("Ground speed in knots."),
        ),
        (
            DataName::VerticalSpeedUpFpm,
            number().with_description("Vertical speed in feet per minute, climb positive."),
        ),
    ]
}

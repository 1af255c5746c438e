//! X-Plane command references used by the base adapter table.

/// Toggles the autopilot servos.
pub const AUTOPILOT_SERVOS_TOGGLE: &str = "sim/autopilot/servos_toggle";
/// Toggles the flight director.
pub const FLIGHT_DIRECTOR_TOGGLE: &str = "sim/autopilot/fdir_toggle";
/// Toggles heading select.
pub const HEADING_MODE_TOGGLE: &str = "sim/autopilot/heading";
/// Engages wing leveling, activating the autopilot if needed.
pub const RETURN_TO_LEVEL: &str = "sim/autopilot/return_to_level";
/// Toggles pause.
pub const PAUSE_TOGGLE: &str = "sim/operation/pause_toggle";
/// Cycles the flight model speed.
pub const FLIGHT_MODEL_SPEED_CHANGE: &str = "sim/operation/flightmodel_speed_change";
/// Resets the current flight.
pub const RESET_FLIGHT: &str = "sim/operation/reset_flight";
/// Toggles propeller beta.
pub const PROP_BETA_TOGGLE: &str = "sim/engines/beta_toggle";
/// Toggles the ground speed freeze.
pub const FREEZE_TOGGLE: &str = "sim/operation/freeze_toggle";
/// Repairs every system.
pub const FIX_ALL_SYSTEMS: &str = "sim/operation/fix_all_systems";
/// Regenerates the weather.
pub const REGENERATE_WEATHER: &str = "sim/operation/regen_weather";

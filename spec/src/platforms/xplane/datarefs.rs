//! X-Plane dataref names used by the base adapter table.

/// Aircraft configuration.
pub mod aircraft {
    /// Minimum governed propeller speed.
    pub const PROP_MIN_ROTATION_SPEED_RADS_SEC: &str = "sim/aircraft/controls/acf_RSC_mingov_prp";
    /// Propeller redline speed.
    pub const PROP_MAX_ROTATION_SPEED_RADS_SEC: &str = "sim/aircraft/controls/acf_RSC_redline_prp";
    /// Number of engines.
    pub const ENGINE_COUNT: &str = "sim/aircraft/engine/acf_num_engines";
    /// Aircraft UI name.
    pub const NAME: &str = "sim/aircraft/view/acf_ui_name";
}

/// Legacy cockpit datarefs.
pub mod cockpit {
    /// Autopilot heading bug, magnetic degrees.
    pub const AUTOPILOT_HEADING_MAG: &str = "sim/cockpit/autopilot/heading_mag";
    /// Autopilot altitude bug, feet.
    pub const AUTOPILOT_ALTITUDE: &str = "sim/cockpit/autopilot/altitude";
    /// Autopilot target vertical speed, fpm.
    pub const AUTOPILOT_VERTICAL_VELOCITY: &str = "sim/cockpit/autopilot/vertical_velocity";
    /// Transponder code.
    pub const TRANSPONDER_CODE: &str = "sim/cockpit/radios/transponder_code";
    /// Pitot heat switch.
    pub const PITOT_HEAT_ON: &str = "sim/cockpit/switches/pitot_heat_on";
    /// Total energy audio switch.
    pub const TOTAL_ENERGY_AUDIO: &str = "sim/cockpit/switches/tot_ener_audio";
}

/// Cockpit2 datarefs.
pub mod cockpit2 {
    /// Stall warning annunciator.
    pub const STALL_WARNING: &str = "sim/cockpit2/annunciators/stall_warning";
    /// Propeller beta annunciator.
    pub const PROP_BETA: &str = "sim/cockpit2/annunciators/prop_beta";
    /// Autopilot servos engaged.
    pub const AUTOPILOT_SERVOS_ON: &str = "sim/cockpit2/autopilot/servos_on";
    /// Heading mode status.
    pub const AUTOPILOT_HEADING_STATUS: &str = "sim/cockpit2/autopilot/heading_status";
    /// Altitude mode.
    pub const AUTOPILOT_ALTITUDE_MODE: &str = "sim/cockpit2/autopilot/altitude_mode";
    /// Flight director mode.
    pub const FLIGHT_DIRECTOR_MODE: &str = "sim/cockpit2/autopilot/flight_director_mode";
    /// Battery master.
    pub const BATTERY_ON: &str = "sim/cockpit2/electrical/battery_on";
    /// ITT, degrees C.
    pub const ITT_DEG_C: &str = "sim/cockpit2/engine/indicators/ITT_deg_C";
    /// Torque, newton-metres.
    pub const TORQUE_N_MTR: &str = "sim/cockpit2/engine/indicators/torque_n_mtr";
    /// N1, percent.
    pub const N1_PERCENT: &str = "sim/cockpit2/engine/indicators/N1_percent";
    /// Propeller or rotor speed, rpm.
    pub const PROP_SPEED_RPM: &str = "sim/cockpit2/engine/indicators/prop_speed_rpm";
    /// Manifold pressure, inHg.
    pub const MPR_IN_HG: &str = "sim/cockpit2/engine/indicators/MPR_in_hg";
    /// Engine speed, rpm.
    pub const ENGINE_SPEED_RPM: &str = "sim/cockpit2/engine/indicators/engine_speed_rpm";
    /// EGT, degrees C.
    pub const EGT_DEG_C: &str = "sim/cockpit2/engine/indicators/EGT_deg_C";
    /// Gear handle down ratio.
    pub const GEAR_HANDLE_DOWN: &str = "sim/cockpit2/controls/gear_handle_down";
    /// Speedbrake handle ratio.
    pub const SPEEDBRAKE_RATIO: &str = "sim/cockpit2/controls/speedbrake_ratio";
    /// Flap handle ratio.
    pub const FLAP_RATIO: &str = "sim/cockpit2/controls/flap_ratio";
    /// Throttle including beta and reverse.
    pub const THROTTLE_BETA_REV_RATIO: &str =
        "sim/cockpit2/engine/actuators/throttle_beta_rev_ratio";
    /// Collective ratio.
    pub const COLLECTIVE_RATIO: &str = "sim/cockpit2/engine/actuators/prop_ratio_all";
    /// Mixture ratio.
    pub const MIXTURE_RATIO: &str = "sim/cockpit2/engine/actuators/mixture_ratio";
    /// Governor switch.
    pub const GOVERNOR_ON: &str = "sim/cockpit2/engine/actuators/governor_on";
    /// Landing lights switch.
    pub const LANDING_LIGHTS_ON: &str = "sim/cockpit2/switches/landing_lights_on";
    /// Taxi light switch.
    pub const TAXI_LIGHT_ON: &str = "sim/cockpit2/switches/taxi_light_on";
    /// Navigation lights switch.
    pub const NAVIGATION_LIGHTS_ON: &str = "sim/cockpit2/switches/navigation_lights_on";
    /// Strobe lights switch.
    pub const STROBE_LIGHTS_ON: &str = "sim/cockpit2/switches/strobe_lights_on";
    /// Altimeter setting, inHg.
    pub const BAROMETER_SETTING_IN_HG: &str =
        "sim/cockpit2/gauges/actuators/barometer_setting_in_hg_pilot";
    /// Slip indicator ball deflection, degrees.
    pub const SLIP_DEG: &str = "sim/cockpit2/gauges/indicators/slip_deg";
    /// Sideslip, degrees right.
    pub const SIDESLIP_DEG: &str = "sim/cockpit2/gauges/indicators/sideslip_degrees";
    /// Total energy variometer, fpm.
    pub const TOTAL_ENERGY_FPM: &str = "sim/cockpit2/gauges/indicators/total_energy_fpm";
    /// Propeller heat switch.
    pub const PROP_HEAT_ON: &str = "sim/cockpit2/ice/ice_prop_heat_on_pilot";
}

/// Flight model datarefs.
pub mod flightmodel {
    /// Latitude.
    pub const LATITUDE: &str = "sim/flightmodel/position/latitude";
    /// Longitude.
    pub const LONGITUDE: &str = "sim/flightmodel/position/longitude";
    /// Height above ground, metres.
    pub const Y_AGL: &str = "sim/flightmodel/position/y_agl";
    /// Elevation MSL, metres.
    pub const ELEVATION: &str = "sim/flightmodel/position/elevation";
    /// Indicated airspeed, knots.
    pub const INDICATED_AIRSPEED: &str = "sim/flightmodel/position/indicated_airspeed";
    /// Ground speed, m/s.
    pub const GROUNDSPEED: &str = "sim/flightmodel/position/groundspeed";
    /// Vertical speed, fpm.
    pub const VH_IND_FPM: &str = "sim/flightmodel/position/vh_ind_fpm";
    /// Roll, degrees right.
    pub const PHI: &str = "sim/flightmodel/position/phi";
    /// Pitch, degrees up.
    pub const THETA: &str = "sim/flightmodel/position/theta";
    /// Magnetic heading.
    pub const MAG_PSI: &str = "sim/flightmodel/position/mag_psi";
    /// True heading.
    pub const PSI: &str = "sim/flightmodel/position/psi";
    /// True ground track.
    pub const HPATH: &str = "sim/flightmodel/position/hpath";
    /// Carburetor heat ratio.
    pub const CARB_HEAT_RATIO: &str = "sim/flightmodel/engine/ENGN_crbht";
    /// Parking brake ratio.
    pub const PARKING_BRAKE_RATIO: &str = "sim/flightmodel/controls/parkbrake";
    /// Low rotor speed warning.
    pub const LOW_ROTOR_SPEED: &str = "sim/flightmodel/failures/lo_rotor_warning";
    /// Crash flag.
    pub const HAS_CRASHED: &str = "sim/flightmodel2/misc/has_crashed";
    /// Total weight, kg.
    pub const WEIGHT_TOTAL_KG: &str = "sim/flightmodel/weight/m_total";
    /// Centre of gravity reference.
    pub const CG_Z_REF: &str = "sim/flightmodel/misc/cgz_ref_to_default";
}

/// Time and simulation datarefs.
pub mod time {
    /// Zulu time, seconds.
    pub const ZULU_TIME_SEC: &str = "sim/time/zulu_time_sec";
    /// Day of year.
    pub const LOCAL_DATE_DAYS: &str = "sim/time/local_date_days";
    /// Pause flag.
    pub const PAUSED: &str = "sim/time/paused";
    /// Simulation speed multiplier.
    pub const SIM_SPEED: &str = "sim/time/sim_speed";
    /// Ground speed multiplier, zero when frozen.
    pub const GROUND_SPEED: &str = "sim/time/ground_speed";
}

/// Weather datarefs.
pub mod weather {
    /// Wind direction at the aircraft.
    pub const WIND_DIRECTION_DEGT: &str = "sim/weather/aircraft/wind_now_direction_degt";
    /// Wind speed at the aircraft, m/s.
    pub const WIND_SPEED_MSC: &str = "sim/weather/aircraft/wind_now_speed_msc";
    /// Cloud bases, metres MSL.
    pub const CLOUD_BASE_MSL_M: &str = "sim/weather/region/cloud_base_msl_m";
    /// Cloud tops, metres MSL.
    pub const CLOUD_TOPS_MSL_M: &str = "sim/weather/region/cloud_tops_msl_m";
    /// Cloud type per layer.
    pub const CLOUD_TYPE: &str = "sim/weather/region/cloud_type";
    /// Cloud coverage ratio per layer.
    pub const CLOUD_COVERAGE_PERCENT: &str = "sim/weather/region/cloud_coverage_percent";
    /// Wind layer altitude, metres MSL.
    pub const WIND_ALTITUDE_MSL_M: &str = "sim/weather/region/wind_altitude_msl_m";
    /// Wind layer direction.
    pub const WIND_DIRECTION_DEGT_LAYERS: &str = "sim/weather/region/wind_direction_degt";
    /// Wind layer speed, m/s.
    pub const WIND_SPEED_MSC_LAYERS: &str = "sim/weather/region/wind_speed_msc";
    /// Wind layer turbulence ratio.
    pub const TURBULENCE: &str = "sim/weather/region/turbulence";
    /// Wind layer gust increase, m/s.
    pub const SHEAR_SPEED_MSC: &str = "sim/weather/region/shear_speed_msc";
    /// Sea level pressure, pascals.
    pub const SEALEVEL_PRESSURE_PAS: &str = "sim/weather/region/sealevel_pressure_pas";
    /// Runway friction code.
    pub const RUNWAY_FRICTION: &str = "sim/weather/region/runway_friction";
    /// Rain ratio.
    pub const RAIN_PERCENT: &str = "sim/weather/region/rain_percent";
    /// Ground temperature, degrees C.
    pub const SEALEVEL_TEMPERATURE_C: &str = "sim/weather/region/sealevel_temperature_c";
    /// Thermal climb rate, m/s.
    pub const THERMAL_RATE_MS: &str = "sim/weather/region/thermal_rate_ms";
    /// Weather evolution mode.
    pub const CHANGE_MODE: &str = "sim/weather/region/change_mode";
    /// Visibility, statute miles.
    pub const VISIBILITY_REPORTED_SM: &str = "sim/weather/region/visibility_reported_sm";
}

//! Physics tuning and table geometry
//!
//! Defaults reproduce the fixed reference table. A JSON document may
//! override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;
use crate::sim::Table;

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Felt bounds and ball size
    pub table: Table,

    // === Physics ===
    /// Mass shared by every ball
    pub ball_mass: f32,
    /// Rolling friction coefficient
    pub friction_coefficient: f32,
    /// Speeds below this snap to zero
    pub static_friction_threshold: f32,
    /// Ball-ball impulse scale
    pub collision_scale: f32,
    /// Pixels travelled per unit velocity per unit time
    pub position_scale: f32,

    // === Shots ===
    /// Scales the cue-to-cursor vector into a force
    pub shot_power_multiplier: f32,

    // === Timing ===
    /// Clock advance per frame
    pub clock_step: f32,
    /// Sleep between frames (milliseconds)
    pub frame_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table: Table::STANDARD,

            ball_mass: BALL_MASS,
            friction_coefficient: FRICTION_COEFFICIENT,
            static_friction_threshold: STATIC_FRICTION_THRESHOLD,
            collision_scale: COLLISION_SCALE,
            position_scale: POSITION_SCALE,

            shot_power_multiplier: SHOT_POWER_MULTIPLIER,

            clock_step: CLOCK_STEP,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SetupError> {
        positive("ball_mass", self.ball_mass)?;
        // Friction divides by speed, and only speeds at or above this reach it
        positive("static_friction_threshold", self.static_friction_threshold)?;
        positive("clock_step", self.clock_step)?;
        positive("position_scale", self.position_scale)?;
        finite("collision_scale", self.collision_scale)?;
        finite("shot_power_multiplier", self.shot_power_multiplier)?;

        finite("table.felt_left", self.table.felt_left)?;
        finite("table.felt_top", self.table.felt_top)?;
        positive("table.felt_width", self.table.felt_width)?;
        positive("table.felt_height", self.table.felt_height)?;
        positive("table.ball_diameter", self.table.ball_diameter)?;
        // Edges are derived by addition and must not overflow either
        finite("table.felt_width", self.table.felt_right())?;
        finite("table.felt_height", self.table.felt_bottom())?;

        if !self.friction_coefficient.is_finite() || self.friction_coefficient < 0.0 {
            return Err(SetupError::invalid(
                "friction_coefficient",
                format!("must be finite and non-negative, got {}", self.friction_coefficient),
            ));
        }
        if self.table.felt_width <= self.table.ball_diameter {
            return Err(SetupError::invalid(
                "table.felt_width",
                "felt must be wider than one ball",
            ));
        }
        if self.table.felt_height <= self.table.ball_diameter {
            return Err(SetupError::invalid(
                "table.felt_height",
                "felt must be taller than one ball",
            ));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SetupError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SetupError::invalid(
            field,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.ball_mass, 15.0);
        assert_eq!(settings.clock_step, 0.001);
        assert_eq!(settings.table, Table::STANDARD);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "ball_mass": 20.0 }"#).unwrap();
        assert_eq!(settings.ball_mass, 20.0);
        assert_eq!(settings.friction_coefficient, FRICTION_COEFFICIENT);
        assert_eq!(settings.table.felt_width, FELT_WIDTH);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = Settings::from_json(r#"{ "static_friction_threshold": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SetupError::InvalidSettings {
                field: "static_friction_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_tiny_table_rejected() {
        let mut settings = Settings::default();
        settings.table.felt_height = 20.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_overflowing_values_rejected() {
        // serde_json narrows out-of-range literals to infinity
        for field in [
            "felt_left",
            "felt_top",
            "felt_width",
            "felt_height",
            "ball_diameter",
        ] {
            let mut table = serde_json::json!({
                "felt_left": 100.0,
                "felt_top": 100.0,
                "felt_width": 800.0,
                "felt_height": 400.0,
                "ball_diameter": 35.0,
            });
            table[field] = serde_json::json!(1e39);
            let json = serde_json::json!({ "table": table }).to_string();
            let err = Settings::from_json(&json).unwrap_err();
            assert!(
                matches!(err, SetupError::InvalidSettings { .. }),
                "{field} accepted: {err}"
            );
        }

        for field in ["collision_scale", "shot_power_multiplier", "position_scale"] {
            let json = format!(r#"{{ "{field}": 1e39 }}"#);
            assert!(Settings::from_json(&json).is_err(), "{field} accepted");
        }

        // Finite on their own, but the right edge overflows
        let json = r#"{ "table": { "felt_left": 3e38, "felt_top": 100.0,
            "felt_width": 3e38, "felt_height": 400.0, "ball_diameter": 35.0 } }"#;
        assert!(Settings::from_json(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ nope"),
            Err(SetupError::Parse(_))
        ));
    }
}

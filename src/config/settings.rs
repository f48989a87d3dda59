use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{exact, parse_config, ConfigError};
use crate::units::Units;

pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_OPTIONS: &str =
    ".Option Cell_Char = Yes, MeasFile=1, MCBrief=6, Random_Generator = MOA";
pub const DEFAULT_TECH_MODEL: &str = "library/tech/45nm_LP.pm";

/// Global characterization settings.
///
/// Only the sections used for deck generation are read; other keys in the
/// file are ignored.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub library: LibrarySettings,
    pub unit: Units,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Input slews to sweep, in the configured time unit.
    #[serde(deserialize_with = "exact::deserialize_vec")]
    pub input_slew: Vec<Decimal>,
    /// Output loads to sweep, in the configured capacitance unit.
    #[serde(deserialize_with = "exact::deserialize_vec")]
    pub output_load: Vec<Decimal>,
    /// Supply voltage in volts.
    #[serde(deserialize_with = "exact::deserialize")]
    pub voltage: Decimal,
}

/// Analysis and stimulus constants written into every deck.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub title: String,
    /// Nominal `SLEW_I`, in the configured time unit.
    #[serde(deserialize_with = "exact::deserialize")]
    pub default_slew: Decimal,
    /// Nominal `CAP_O`, in the configured capacitance unit.
    #[serde(deserialize_with = "exact::deserialize")]
    pub default_load: Decimal,
    /// Transient step, in the configured time unit.
    #[serde(deserialize_with = "exact::deserialize")]
    pub precision: Decimal,
    /// Transient stop time, in the configured time unit.
    #[serde(deserialize_with = "exact::deserialize")]
    pub length: Decimal,
    /// Monte Carlo trials per sweep point.
    pub monte_carlo: usize,
    pub options: String,
    pub pulse_delay: String,
    pub pulse_width: String,
    pub pulse_period: String,
    /// Lower slew threshold as a fraction of the supply.
    #[serde(deserialize_with = "exact::deserialize")]
    pub slew_low: Decimal,
    /// Upper slew threshold as a fraction of the supply.
    #[serde(deserialize_with = "exact::deserialize")]
    pub slew_high: Decimal,
    /// Transistor model file, relative to the project root.
    pub tech_model: PathBuf,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            default_slew: dec!(10),
            default_load: dec!(10),
            precision: dec!(10),
            length: dec!(50000),
            monte_carlo: 1000,
            options: DEFAULT_OPTIONS.to_string(),
            pulse_delay: "5ns".to_string(),
            pulse_width: "20ns".to_string(),
            pulse_period: "50ns".to_string(),
            slew_low: dec!(0.3),
            slew_high: dec!(0.7),
            tech_model: PathBuf::from(DEFAULT_TECH_MODEL),
        }
    }
}

pub fn parse_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    parse_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::SETTINGS;

    #[test]
    fn test_parse_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, SETTINGS).unwrap();

        let settings = parse_settings(&path).unwrap();
        assert_eq!(settings.library.input_slew, vec![dec!(50), dec!(200)]);
        assert_eq!(settings.library.output_load, vec![dec!(1), dec!(2)]);
        assert_eq!(settings.library.voltage, dec!(1.1));
        assert_eq!(settings.unit.time, "ps");
        assert_eq!(settings.unit.capacitance, "fF");
        assert_eq!(settings.simulation, SimulationSettings::default());
    }

    #[test]
    fn test_partial_simulation_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "library": {"input_slew": [], "output_load": [], "voltage": 1},
                "unit": {"time": "ps", "space": "nm", "capacitance": "fF"},
                "simulation": {"monte_carlo": 20, "pulse_period": "100ns"},
                "cts": {"max_fanout": 8}
            }"#,
        )
        .unwrap();

        let settings = parse_settings(&path).unwrap();
        assert_eq!(settings.simulation.monte_carlo, 20);
        assert_eq!(settings.simulation.pulse_period, "100ns");
        assert_eq!(settings.simulation.pulse_width, "20ns");
        assert_eq!(settings.simulation.length, dec!(50000));
    }

    #[test]
    fn test_missing_voltage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "library": {"input_slew": [1], "output_load": [1]},
                "unit": {"time": "ps", "space": "nm", "capacitance": "fF"}
            }"#,
        )
        .unwrap();

        let err = parse_settings(&path).unwrap_err();
        assert!(err.to_string().contains("voltage"));
    }

    #[test]
    fn test_unrepresentable_slew_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "library": {"input_slew": [50.0, 1e-30], "output_load": [1], "voltage": 1.1},
                "unit": {"time": "ps", "space": "nm", "capacitance": "fF"}
            }"#,
        )
        .unwrap();

        let err = parse_settings(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("cannot be represented exactly"));

        std::fs::write(
            &path,
            r#"{
                "library": {"input_slew": [1e30], "output_load": [1], "voltage": 1.1},
                "unit": {"time": "ps", "space": "nm", "capacitance": "fF"}
            }"#,
        )
        .unwrap();
        assert!(parse_settings(&path).is_err());
    }

    #[test]
    fn test_small_slew_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "library": {"input_slew": [1e-20, 2.5], "output_load": [0.001], "voltage": 1.1},
                "unit": {"time": "ps", "space": "nm", "capacitance": "fF"},
                "simulation": {"slew_low": 0.2, "slew_high": 0.8}
            }"#,
        )
        .unwrap();

        let settings = parse_settings(&path).unwrap();
        assert_eq!(
            settings.library.input_slew,
            vec![dec!(0.00000000000000000001), dec!(2.5)]
        );
        assert_eq!(settings.library.output_load, vec![dec!(0.001)]);
        assert_eq!(settings.simulation.slew_low, dec!(0.2));
        assert_eq!(
            settings.unit.time(settings.library.input_slew[0]).to_string(),
            "0.00000000000000000001ps"
        );
    }

    #[test]
    fn test_toml_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[library]
input_slew = [5, 12.5]
output_load = [0.5]
voltage = 1.8

[unit]
time = "ns"
space = "um"
capacitance = "pF"
"#,
        )
        .unwrap();

        let settings = parse_settings(&path).unwrap();
        assert_eq!(settings.library.input_slew, vec![dec!(5), dec!(12.5)]);
        assert_eq!(settings.library.output_load, vec![dec!(0.5)]);
        assert_eq!(settings.unit.time, "ns");
    }
}

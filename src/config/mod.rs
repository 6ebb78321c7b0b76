use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::parameters::{DEFAULT_AMPLITUDE_PERCENT, DEFAULT_DUTY_CYCLE_PERCENT, DEFAULT_PERIOD_MS};
use crate::types::waveform::Waveform;

/// Largest accepted percentage (amplitude, duty cycle)
pub const MAX_PERCENT: u32 = 100;
/// Accepted period range in milliseconds
pub const MIN_PERIOD_MS: u32 = 1;
pub const MAX_PERIOD_MS: u32 = 60_000;

/// Startup configuration for all four engines
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default = "default_pulse")]
    pub pulse: WaveConfig,

    #[serde(default)]
    pub sawtooth: WaveConfig,

    #[serde(default)]
    pub triangle: WaveConfig,

    #[serde(default)]
    pub sine: WaveConfig,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: GeneratorConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every engine section
    pub fn validate(&self) -> Result<()> {
        for waveform in Waveform::ALL {
            self.wave(waveform)
                .validate(waveform)
                .with_context(|| format!("Invalid configuration for {} engine", waveform))?;
        }
        Ok(())
    }

    pub fn wave(&self, waveform: Waveform) -> &WaveConfig {
        match waveform {
            Waveform::Pulse => &self.pulse,
            Waveform::Sawtooth => &self.sawtooth,
            Waveform::Triangle => &self.triangle,
            Waveform::Sine => &self.sine,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pulse: default_pulse(),
            sawtooth: WaveConfig::default(),
            triangle: WaveConfig::default(),
            sine: WaveConfig::default(),
        }
    }
}

/// Settings for one engine
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WaveConfig {
    /// Amplitude in percent of full scale
    #[serde(default = "default_amplitude")]
    pub amplitude: u32,

    #[serde(default = "default_period_ms")]
    pub period_ms: u32,

    /// Duty cycle in percent, pulse only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<u32>,

    #[serde(default)]
    pub enabled: bool,
}

impl WaveConfig {
    pub fn validate(&self, waveform: Waveform) -> Result<()> {
        check_percent("Amplitude", self.amplitude)?;
        check_period(self.period_ms)?;

        if let Some(duty_cycle) = self.duty_cycle {
            if !waveform.has_duty_cycle() {
                return Err(anyhow!("Duty cycle is only supported by the pulse engine"));
            }
            check_percent("Duty cycle", duty_cycle)?;
        }

        Ok(())
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            period_ms: default_period_ms(),
            duty_cycle: None,
            enabled: false,
        }
    }
}

/// Reject percentages above 100
pub fn check_percent(name: &str, value: u32) -> Result<u32> {
    if value > MAX_PERCENT {
        return Err(anyhow!("{} must be between 0 and {}", name, MAX_PERCENT));
    }
    Ok(value)
}

/// Reject periods outside 1-60000 ms
pub fn check_period(value: u32) -> Result<u32> {
    if !(MIN_PERIOD_MS..=MAX_PERIOD_MS).contains(&value) {
        return Err(anyhow!(
            "Period must be between {} and {} ms",
            MIN_PERIOD_MS,
            MAX_PERIOD_MS
        ));
    }
    Ok(value)
}

// Default value functions for serde
fn default_amplitude() -> u32 {
    DEFAULT_AMPLITUDE_PERCENT
}

fn default_period_ms() -> u32 {
    DEFAULT_PERIOD_MS
}

fn default_pulse() -> WaveConfig {
    WaveConfig {
        duty_cycle: Some(DEFAULT_DUTY_CYCLE_PERCENT),
        ..WaveConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let yaml = r#"
pulse:
  amplitude: 75
  period_ms: 20
  duty_cycle: 25
  enabled: true
sine:
  period_ms: 1000
"#;

        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.pulse.amplitude, 75);
        assert_eq!(config.pulse.duty_cycle, Some(25));
        assert!(config.pulse.enabled);
        assert_eq!(config.sine.period_ms, 1000);
        assert_eq!(config.sine.amplitude, 100);
        assert!(!config.sine.enabled);
    }

    #[test]
    fn test_defaults() {
        let config: GeneratorConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.pulse.duty_cycle, Some(50));
        for waveform in Waveform::ALL {
            let wave = config.wave(waveform);
            assert_eq!(wave.amplitude, 100);
            assert_eq!(wave.period_ms, 100);
            assert!(!wave.enabled);
        }
    }

    #[test]
    fn test_validate_ranges() {
        let yaml = r#"
sawtooth:
  amplitude: 101
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());

        let yaml = r#"
triangle:
  period_ms: 0
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());

        let yaml = r#"
sine:
  period_ms: 60001
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duty_cycle_pulse_only() {
        let yaml = r#"
triangle:
  duty_cycle: 20
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let yaml = r#"
noise:
  amplitude: 10
"#;
        assert!(serde_yaml::from_str::<GeneratorConfig>(yaml).is_err());
    }

    #[test]
    fn test_check_helpers() {
        assert_eq!(check_percent("Amplitude", 100).unwrap(), 100);
        assert!(check_percent("Amplitude", 101).is_err());
        assert_eq!(check_period(1).unwrap(), 1);
        assert_eq!(check_period(60_000).unwrap(), 60_000);
        assert!(check_period(0).is_err());
    }
}

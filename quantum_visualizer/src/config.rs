//! Startup configuration
//!
//! Read from `WAVEFN_*` environment variables. Anything missing or
//! unparsable falls back to its default with a warning.

use std::str::FromStr;

use thiserror::Error;

use crate::sampler::{PotentialKind, QuantumNumber};

pub const ENV_POTENTIAL: &str = "WAVEFN_POTENTIAL";
pub const ENV_QUANTUM_NUMBER: &str = "WAVEFN_N";
pub const ENV_WINDOW_WIDTH: &str = "WAVEFN_WINDOW_WIDTH";
pub const ENV_WINDOW_HEIGHT: &str = "WAVEFN_WINDOW_HEIGHT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown potential '{0}' (expected 'well' or 'harmonic')")]
    UnknownPotential(String),
}

impl FromStr for PotentialKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "well" | "infinite-well" | "infinite_well" | "box" => Ok(PotentialKind::InfiniteWell),
            "harmonic" | "harmonic-oscillator" | "harmonic_oscillator" | "oscillator" | "sho" => {
                Ok(PotentialKind::HarmonicOscillator)
            }
            other => Err(ConfigError::UnknownPotential(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub potential: PotentialKind,
    pub quantum_number: QuantumNumber,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            potential: PotentialKind::InfiniteWell,
            quantum_number: QuantumNumber::GROUND,
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl ExplorerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_POTENTIAL) {
            match raw.parse::<PotentialKind>() {
                Ok(kind) => config.potential = kind,
                Err(e) => log::warn!("{ENV_POTENTIAL}: {e}, using {}", config.potential),
            }
        }

        if let Some(raw) = lookup(ENV_QUANTUM_NUMBER) {
            match raw.trim().parse::<u32>() {
                Ok(n) => {
                    if let Err(e) = QuantumNumber::new(n) {
                        log::warn!("{ENV_QUANTUM_NUMBER}: {e}, clamping");
                    }
                    config.quantum_number = QuantumNumber::clamped(n);
                }
                Err(e) => log::warn!(
                    "{ENV_QUANTUM_NUMBER}: '{raw}' is not a quantum number ({e}), using {}",
                    config.quantum_number
                ),
            }
        }

        config.window_width = parse_dimension(&lookup, ENV_WINDOW_WIDTH, config.window_width);
        config.window_height = parse_dimension(&lookup, ENV_WINDOW_HEIGHT, config.window_height);

        config
    }
}

fn parse_dimension(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> u32 {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<u32>() {
        Ok(px) if px > 0 => px,
        _ => {
            log::warn!("{key}: '{raw}' is not a valid size, using {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ExplorerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExplorerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), ExplorerConfig::default());
    }

    #[test]
    fn potential_aliases() {
        for alias in ["well", "Infinite-Well", " box "] {
            assert_eq!(alias.parse::<PotentialKind>(), Ok(PotentialKind::InfiniteWell), "{alias}");
        }
        for alias in ["harmonic", "SHO", "oscillator", "harmonic_oscillator"] {
            assert_eq!(alias.parse::<PotentialKind>(), Ok(PotentialKind::HarmonicOscillator), "{alias}");
        }
        assert_eq!(
            "hydrogen".parse::<PotentialKind>(),
            Err(ConfigError::UnknownPotential("hydrogen".into()))
        );
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (ENV_POTENTIAL, "harmonic"),
            (ENV_QUANTUM_NUMBER, "3"),
            (ENV_WINDOW_WIDTH, "800"),
            (ENV_WINDOW_HEIGHT, "600"),
        ]);

        assert_eq!(config.potential, PotentialKind::HarmonicOscillator);
        assert_eq!(config.quantum_number.get(), 3);
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
    }

    #[test]
    fn out_of_range_quantum_number_is_clamped() {
        assert_eq!(config_from(&[(ENV_QUANTUM_NUMBER, "0")]).quantum_number.get(), 1);
        assert_eq!(config_from(&[(ENV_QUANTUM_NUMBER, "25")]).quantum_number.get(), 10);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            (ENV_POTENTIAL, "tokamak"),
            (ENV_QUANTUM_NUMBER, "three"),
            (ENV_WINDOW_WIDTH, "0"),
            (ENV_WINDOW_HEIGHT, "-1"),
        ]);

        assert_eq!(config, ExplorerConfig::default());
    }
}

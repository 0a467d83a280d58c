//! Parameter-file loading for headless runs
//!
//! Runs are described by a TOML file with a `[global]` table (run
//! description, tick budget) and a `[model]` table feeding
//! `FlockingConfig`. Every key has a default, so a partial file or no
//! file at all still produces the nominal run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::FlockingConfig;
use crate::core::error::Result;

/// Run-level settings that are not part of the model itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalParams {
    /// Free-form label carried into logs and output filenames
    pub description: String,
    /// Number of ticks a run executes
    pub max_timestep: u64,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            description: "nominal".into(),
            max_timestep: 1000,
        }
    }
}

/// Full contents of one parameter file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    pub global: GlobalParams,
    pub model: FlockingConfig,
}

impl RunParams {
    /// Load and parse a parameter file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: RunParams = toml::from_str(&text)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_parameter_file() {
        let params: RunParams = toml::from_str(
            r#"
            [global]
            description = "dense flock"
            max_timestep = 250

            [model]
            population = 40
            width = 50.0
            height = 50.0
            speed = 1.5
            vision = 15.0
            separation = 3.0
            cohere = 0.03
            separate = 0.3
            match = 0.05
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(params.global.description, "dense flock");
        assert_eq!(params.global.max_timestep, 250);
        assert_eq!(params.model.population, 40);
        assert_eq!(params.model.match_velocity, 0.05);
        assert_eq!(params.model.seed, Some(7));
        assert!(params.model.validate().is_ok());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let params: RunParams = toml::from_str(
            r#"
            [model]
            population = 10
            "#,
        )
        .unwrap();

        assert_eq!(params.global.max_timestep, 1000);
        assert_eq!(params.model.population, 10);
        assert_eq!(params.model.vision, 10.0);
        assert_eq!(params.model.seed, None);
    }

    #[test]
    fn test_empty_file_is_nominal() {
        let params: RunParams = toml::from_str("").unwrap();
        assert_eq!(params.model.population, 100);
        assert_eq!(params.global.description, "nominal");
    }

    #[test]
    fn test_params_round_trip_through_toml() {
        let params = RunParams::default();
        let text = toml::to_string(&params).unwrap();
        let reparsed: RunParams = toml::from_str(&text).unwrap();
        assert_eq!(reparsed.model.population, params.model.population);
        assert_eq!(reparsed.global.max_timestep, params.global.max_timestep);
    }
}

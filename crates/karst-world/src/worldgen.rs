use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Tunable terrain parameters, loadable from TOML. Every field has a
/// default so a partial file is valid.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenParams {
    #[serde(default = "default_height_frequency")]
    pub height_frequency: f32,
    #[serde(default = "default_height_amplitude")]
    pub height_amplitude: f32,
    #[serde(default = "default_base_height")]
    pub base_height: f32,
    /// Depth of the dirt band under the grass crown.
    #[serde(default = "default_soil_depth")]
    pub soil_depth: i32,
}

fn default_height_frequency() -> f32 {
    0.01
}
fn default_height_amplitude() -> f32 {
    24.0
}
fn default_base_height() -> f32 {
    8.0
}
fn default_soil_depth() -> i32 {
    3
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self {
            height_frequency: default_height_frequency(),
            height_amplitude: default_height_amplitude(),
            base_height: default_base_height(),
            soil_depth: default_soil_depth(),
        }
    }
}

pub fn load_params_from_str(s: &str) -> Result<WorldGenParams, Box<dyn Error>> {
    Ok(toml::from_str(s)?)
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    load_params_from_str(&s)
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Configuration for the output image canvas
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CanvasConfig {
    pub width_px: u32,
    pub height_px: u32,
}

// Configuration for the generated vector field
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FieldConfig {
    /// How many vectors to generate.
    pub vector_count: u32,
    /// Seed for the field RNG; identical seeds reproduce identical sketches.
    pub seed: u64,
    /// Field width; anchors and raw displacements are drawn from [0, max_x).
    pub max_x: f64,
    /// Field height; anchors and raw displacements are drawn from [0, max_y).
    pub max_y: f64,
}

// Transform chain applied to every generated vector, in declaration order.
// Each step is optional and skipped when absent from the config file.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TransformConfig {
    #[serde(default)]
    pub set_length: Option<f64>,
    #[serde(default)]
    pub rotate_degrees: Option<f64>,
    #[serde(default)]
    pub scale: Option<f64>,
}

// Configuration for output settings
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub base_filename: String,
    #[serde(default = "default_save_csv")]
    pub save_csv: bool,
}

fn default_save_csv() -> bool {
    false
}

// Main sketch configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SketchConfig {
    pub canvas: CanvasConfig,
    pub field: FieldConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    pub output: OutputConfig,
}

impl SketchConfig {
    /// Loads the sketch configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e)
        })?;
        let config: SketchConfig = toml::from_str(&config_str).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from '{}': {}", path_ref.display(), e)
        })?;

        // --- Add Validation ---
        if config.canvas.width_px == 0 || config.canvas.height_px == 0 {
            anyhow::bail!("canvas dimensions must be positive.");
        }
        if config.field.vector_count == 0 {
            anyhow::bail!("vector_count must be greater than 0.");
        }
        if config.field.max_x <= 0.0 || config.field.max_y <= 0.0 {
            anyhow::bail!("field bounds (max_x, max_y) must be positive.");
        }

        Ok(config)
    }
}

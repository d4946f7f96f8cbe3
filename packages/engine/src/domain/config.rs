//! World configuration - parsed from host-supplied JSON and validated once,
//! at construction time. A world never changes size or variant after that.

use serde::{Deserialize, Serialize};

use crate::domain::tool::Tool;

/// Upper bound on the grid edge. The toys ship between 100 and 500; anything
/// past this is almost certainly a host bug, not a bigger toy.
pub const MAX_GRID_SIZE: u32 = 4096;

pub const DEFAULT_GRID_SIZE: u32 = 500;
pub const DEFAULT_BRUSH_RADIUS: f32 = 50.0;

/// Which update rule a world runs. Fixed at construction; never mixed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Sand,
    Forkbomb,
    Pipes,
}

impl Variant {
    pub fn from_name(name: &str) -> Result<Variant, String> {
        match name {
            "sand" => Ok(Variant::Sand),
            "forkbomb" => Ok(Variant::Forkbomb),
            "pipes" => Ok(Variant::Pipes),
            other => Err(format!("unknown variant name: {other}")),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Sand => "sand",
            Variant::Forkbomb => "forkbomb",
            Variant::Pipes => "pipes",
        }
    }

    /// Default tool for freshly constructed worlds of this variant.
    pub fn default_tool(self) -> Tool {
        match self {
            // The growth toy starts with the pipe tool selected.
            Variant::Pipes => Tool::Pipe,
            // Sand and fork bomb deposit their own element for any
            // non-erase tool, so the selection barely matters.
            _ => Tool::Paint,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub variant: Variant,

    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    #[serde(default = "default_brush_radius")]
    pub brush_radius: f32,

    /// Pixel size of the presentation surface; `None` means cell space and
    /// pixel space coincide (canvas = grid_size x grid_size).
    #[serde(default)]
    pub canvas_size: Option<(f32, f32)>,

    /// Initially selected tool; `None` picks the variant's default.
    #[serde(default)]
    pub tool: Option<Tool>,
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}

fn default_brush_radius() -> f32 {
    DEFAULT_BRUSH_RADIUS
}

impl SimConfig {
    pub fn new(grid_size: u32, variant: Variant) -> SimConfig {
        SimConfig {
            variant,
            grid_size,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            canvas_size: None,
            tool: None,
        }
    }

    pub fn from_json(json: &str) -> Result<SimConfig, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Construction-time checks. Everything past this point is total: a
    /// validated world has no recoverable-error states.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("grid_size must be positive".to_string());
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "grid_size {} exceeds maximum {}",
                self.grid_size, MAX_GRID_SIZE
            ));
        }
        if !self.brush_radius.is_finite() || self.brush_radius < 0.0 {
            return Err(format!("brush_radius must be non-negative, got {}", self.brush_radius));
        }
        if let Some((w, h)) = self.canvas_size {
            if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
                return Err(format!("canvas_size must be positive, got ({w}, {h})"));
            }
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig::new(DEFAULT_GRID_SIZE, Variant::Sand)
    }
}

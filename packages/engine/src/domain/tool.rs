//! Tool selection - the closed set of brush tools
//!
//! The host UI used to dispatch on raw tool-name strings; here the name is
//! resolved exactly once, at input time, and unknown names are a
//! configuration error rather than an undefined tool id.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    None,
    Pipe,
    Paint,
    Erase,
}

impl Tool {
    /// Resolve a host-supplied tool name.
    ///
    /// "empty" is accepted as an alias of "erase" (the toolbar's historical
    /// name for it).
    pub fn from_name(name: &str) -> Result<Tool, String> {
        match name {
            "none" => Ok(Tool::None),
            "pipe" => Ok(Tool::Pipe),
            "paint" => Ok(Tool::Paint),
            "erase" | "empty" => Ok(Tool::Erase),
            other => Err(format!("unknown tool name: {other}")),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::Pipe => "pipe",
            Tool::Paint => "paint",
            Tool::Erase => "erase",
        }
    }
}

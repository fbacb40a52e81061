//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial brush settings for a new editing session.
///
/// `set d` and `set l` change the brush at runtime; these values only apply
/// until then.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Initial brush color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial stroke size in pixels (odd, valid range: 1 - 255)
    #[serde(default = "default_size")]
    pub default_size: i64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
        }
    }
}

/// How `save` writes files.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SaveConfig {
    /// Write to a temporary file next to the target, then rename it into place
    #[serde(default = "default_atomic")]
    pub atomic: bool,

    /// Keep the previous contents of an overwritten image as `<file>.bak`
    #[serde(default)]
    pub backup: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            atomic: default_atomic(),
            backup: false,
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_size() -> i64 {
    1
}

fn default_atomic() -> bool {
    true
}

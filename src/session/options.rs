use crate::config::SaveConfig;

/// Runtime options controlling how images are written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Write a temporary sibling file and rename it over the target.
    pub atomic: bool,
    /// Rotate an existing target to `<file>.bak` before replacing it.
    pub backup: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            backup: false,
        }
    }
}

/// Build runtime save options from configuration values.
pub fn options_from_config(save_cfg: &SaveConfig) -> SaveOptions {
    SaveOptions {
        atomic: save_cfg.atomic,
        backup: save_cfg.backup,
    }
}

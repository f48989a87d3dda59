use std::path::{Path, PathBuf};

pub fn settings_path(root: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(root.as_ref()).join("utils/settings.json")
}

pub fn buffer_config_path(root: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(root.as_ref()).join("utils/buffer.json")
}

pub fn buffer_subckt(root: impl AsRef<Path>, index: usize) -> PathBuf {
    PathBuf::from(root.as_ref()).join(format!("library/spice/buf{index}.subckt"))
}

pub fn workspace(root: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(root.as_ref()).join("workspace")
}

/// The deck shared by every buffer; each write replaces the previous one.
pub fn out_deck(root: impl AsRef<Path>) -> PathBuf {
    workspace(root).join("for_lut.sp")
}

pub fn out_buffer_deck(root: impl AsRef<Path>, index: usize) -> PathBuf {
    workspace(root).join(format!("for_lut_buf{index}.sp"))
}

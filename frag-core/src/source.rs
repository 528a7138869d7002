// frag_core/src/source.rs
use crate::config::FragConfig;
use crate::domain::FramePaths;
use crate::error::Result;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct SourceParams {
    pub path_dataset: PathBuf,
    pub depth_folder: String,
    pub color_folder: String,
}

impl From<&FragConfig> for SourceParams {
    fn from(c: &FragConfig) -> Self {
        Self {
            path_dataset: c.path_dataset.clone(),
            depth_folder: c.depth_folder.clone(),
            color_folder: c.color_folder.clone(),
        }
    }
}

/// Enumerates the depth and color frames of a dataset, index-aligned and in
/// capture order.
pub trait FrameSource: Send + Sync {
    fn load_frame_paths(&self) -> Result<FramePaths>;
}

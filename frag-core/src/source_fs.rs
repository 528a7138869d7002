use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::FramePaths;
use crate::error::{FragError, Result};
use crate::fragment::loader::is_file;
use crate::source::{FrameSource, SourceParams};

/// Only 16-bit png depth is read.
const DEPTH_EXTENSIONS: &[&str] = &["png"];
const COLOR_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Frames stored as image files under `<dataset>/<depth_folder>` and
/// `<dataset>/<color_folder>`.
pub struct FsFrameSource {
    depth_dir: PathBuf,
    color_dir: PathBuf,
}

impl FsFrameSource {
    pub fn new(params: SourceParams) -> Result<Self> {
        if !params.path_dataset.exists() {
            return Err(FragError::InvalidConfiguration(format!(
                "dataset path not found: {}",
                params.path_dataset.display()
            )));
        }
        Ok(Self {
            depth_dir: params.path_dataset.join(&params.depth_folder),
            color_dir: params.path_dataset.join(&params.color_folder),
        })
    }
}

impl FrameSource for FsFrameSource {
    fn load_frame_paths(&self) -> Result<FramePaths> {
        let depth = list_images(&self.depth_dir, DEPTH_EXTENSIONS[0])?;
        if depth.is_empty() {
            return Err(FragError::NoFrames(self.depth_dir.clone()));
        }

        // First extension whose count matches the depth frames wins.
        let mut seen = 0;
        for ext in COLOR_EXTENSIONS {
            let color = list_images(&self.color_dir, ext)?;
            if color.len() == depth.len() {
                debug!(frames = depth.len(), ext, "frames listed");
                return Ok(FramePaths { depth, color });
            }
            seen = seen.max(color.len());
        }
        Err(FragError::InputMismatch {
            depth: depth.len(),
            color: seen,
        })
    }
}

/// Files directly in `dir` with extension `ext`, sorted by name. A missing
/// directory lists as empty.
fn list_images(dir: &Path, ext: &str) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for e in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let e = e?;
        if e.file_name().to_string_lossy().starts_with('.')
            || !e.path().extension().is_some_and(|x| x == ext)
        {
            continue;
        }
        if is_file(&e) {
            out.push(e.path().to_string_lossy().into_owned());
        }
    }
    Ok(out)
}

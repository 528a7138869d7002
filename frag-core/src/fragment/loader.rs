use crate::domain::Role;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Fragment lists read back from disk, one entry per discovered file.
///
/// Depth and color files are discovered independently; nothing checks that
/// every id has both, so the two lists may differ in length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedFragments {
    pub depth_lists: Vec<Vec<String>>,
    pub color_lists: Vec<Vec<String>>,
}

impl LoadedFragments {
    pub fn len(&self) -> usize {
        self.depth_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth_lists.is_empty()
    }

    /// Position-wise (depth, color) pairs, cut to the shorter list.
    pub fn pairs(&self) -> impl Iterator<Item = (&[String], &[String])> {
        self.depth_lists
            .iter()
            .zip(&self.color_lists)
            .map(|(d, c)| (d.as_slice(), c.as_slice()))
    }

    pub fn into_parts(self) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        (self.depth_lists, self.color_lists)
    }
}

/// Load every `*_colors.txt` and `*_depths.txt` list in `dir`, ordered by
/// file name. A missing directory loads as empty.
pub fn load_fragments(dir: &Path) -> Result<LoadedFragments> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no fragments directory");
        return Ok(LoadedFragments::default());
    }

    let color_lists = read_lists(&list_files(dir, Role::Colors)?)?;
    let depth_lists = read_lists(&list_files(dir, Role::Depths)?)?;
    if color_lists.len() != depth_lists.len() {
        warn!(
            depths = depth_lists.len(),
            colors = color_lists.len(),
            "fragment list counts differ"
        );
    }

    Ok(LoadedFragments {
        depth_lists,
        color_lists,
    })
}

/// Regular files directly in `dir` whose name ends with the role suffix,
/// sorted by name. Dot-files are skipped the way a shell glob skips them;
/// symlinks count when they resolve to a file.
pub fn list_files(dir: &Path, role: Role) -> Result<Vec<PathBuf>> {
    let suffix = role.suffix();
    let mut out = Vec::new();
    for e in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let e = e?;
        let name = e.file_name().to_string_lossy();
        let matched = !name.starts_with('.') && name.ends_with(&suffix);
        if matched && is_file(&e) {
            out.push(e.into_path());
        }
    }
    Ok(out)
}

/// Links are only resolved after the name matched, so a dangling link
/// elsewhere in the directory is ignored.
pub(crate) fn is_file(e: &walkdir::DirEntry) -> bool {
    e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file())
}

fn read_lists(files: &[PathBuf]) -> Result<Vec<Vec<String>>> {
    files
        .iter()
        .map(|p| {
            let list = read_list(p)?;
            debug!(file = %p.display(), entries = list.len(), "fragment list loaded");
            Ok(list)
        })
        .collect()
}

/// Whitespace-separated tokens in file order; an empty file gives an empty list.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.split_whitespace().map(str::to_owned).collect())
}

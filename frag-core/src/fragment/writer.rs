use crate::domain::{Fragment, Role};
use crate::error::Result;
use crate::plan::plan_fragments;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write one pair of index files per fragment into `output_dir`.
///
/// The frame count is taken from `depth_paths`; a shorter `color_paths`
/// yields shorter color lists rather than an error. Files already present
/// under the same names are overwritten, higher ids left over from an
/// earlier run are not touched. Returns the number of fragments written.
pub fn split_fragments<S: AsRef<str>>(
    depth_paths: &[S],
    color_paths: &[S],
    fragment_size: usize,
    output_dir: &Path,
) -> Result<usize> {
    let plan = plan_fragments(depth_paths.len(), fragment_size)?;
    fs::create_dir_all(output_dir)?;

    for frag in &plan {
        write_list(
            &output_dir.join(frag.file_name(Role::Colors)),
            clamped(color_paths, frag),
        )?;
        write_list(
            &output_dir.join(frag.file_name(Role::Depths)),
            &depth_paths[frag.start..frag.end],
        )?;
        debug!(id = frag.id, start = frag.start, end = frag.end, "fragment written");
    }

    info!(
        frames = depth_paths.len(),
        fragments = plan.len(),
        dir = %output_dir.display(),
        "split fragments"
    );
    Ok(plan.len())
}

fn clamped<'a, S>(paths: &'a [S], frag: &Fragment) -> &'a [S] {
    let end = frag.end.min(paths.len());
    let start = frag.start.min(end);
    &paths[start..end]
}

/// One entry per line, each terminated by `\n`.
fn write_list<S: AsRef<str>>(path: &Path, entries: &[S]) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for e in entries {
        w.write_all(e.as_ref().as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

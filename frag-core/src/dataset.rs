use crate::config::FragConfig;
use crate::error::Result;
use crate::fragment::loader::{LoadedFragments, load_fragments};
use crate::fragment::writer::split_fragments;
use crate::source::FrameSource;
use crate::source_factory::{Backend, open_source};

/// List the dataset's frames and write their fragment lists under
/// `<path_dataset>/fragments`.
pub fn split_dataset(cfg: &FragConfig) -> Result<usize> {
    let source = open_source(Backend::Fs, cfg.into())?;
    split_from_source(source.as_ref(), cfg)
}

pub fn split_from_source(source: &dyn FrameSource, cfg: &FragConfig) -> Result<usize> {
    let frames = source.load_frame_paths()?;
    split_fragments(
        &frames.depth,
        &frames.color,
        cfg.fragment_size,
        &cfg.fragments_dir(),
    )
}

pub fn load_dataset_fragments(cfg: &FragConfig) -> Result<LoadedFragments> {
    load_fragments(&cfg.fragments_dir())
}

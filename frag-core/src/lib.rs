#![forbid(unsafe_code)]

pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod plan;
pub mod source;
pub mod source_factory;
pub mod source_fs;

pub mod fragment {
    pub mod loader;
    pub mod writer;
}

// Re-exports: stable API surface
pub use config::{ConfigSources, DefaultDataset, FragConfig};
pub use dataset::{load_dataset_fragments, split_dataset};
pub use domain::{Fragment, FramePaths, Role};
pub use fragment::loader::{LoadedFragments, load_fragments};
pub use fragment::writer::split_fragments;
pub use plan::plan_fragments;

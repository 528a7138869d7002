use crate::error::Result;
use crate::source::{FrameSource, SourceParams};
use crate::source_fs::FsFrameSource;

pub enum Backend {
    Fs,
}

pub fn open_source(backend: Backend, p: SourceParams) -> Result<Box<dyn FrameSource>> {
    match backend {
        Backend::Fs => Ok(Box::new(FsFrameSource::new(p)?)),
    }
}

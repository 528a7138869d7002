use crate::error::{FragError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_FRAGMENT_SIZE: i64 = 100;
pub const FRAGMENTS_DIR: &str = "fragments";

/// Bundled example datasets, used only when no config file is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefaultDataset {
    #[default]
    Lounge,
    JackJack,
}

impl DefaultDataset {
    pub fn dir_name(self) -> &'static str {
        match self {
            DefaultDataset::Lounge => "LoungeRGBDImages",
            DefaultDataset::JackJack => "JackJackL515Bag",
        }
    }

    pub fn path_in(self, data_root: &Path) -> PathBuf {
        data_root.join(self.dir_name())
    }
}

/// `~/open3d_data/extract`; `data_root` / `FRAG_DATA_ROOT` replace it.
fn default_data_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("open3d_data")
        .join("extract")
}

/// Inputs to configuration resolution, typically straight from the CLI.
#[derive(Clone, Debug, Default)]
pub struct ConfigSources {
    /// YAML file; when absent the default dataset supplies `path_dataset`.
    pub config_file: Option<PathBuf>,
    pub default_dataset: DefaultDataset,
    pub path_dataset: Option<PathBuf>,
    pub fragment_size: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragConfig {
    pub path_dataset: PathBuf,
    pub depth_folder: String,
    pub color_folder: String,
    pub fragment_size: usize,
}

// Signed so that a non-positive size reaches validation instead of failing
// as a decode error.
#[derive(Deserialize)]
struct RawConfig {
    path_dataset: String,
    data_root: String,
    depth_folder: String,
    color_folder: String,
    fragment_size: i64,
}

impl FragConfig {
    /// Defaults, then config file, then `FRAG_*` environment variables
    /// (including `FRAG_DATA_ROOT`), then explicit overrides.
    pub fn resolve(src: &ConfigSources) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("depth_folder", "depth")?
            .set_default("color_folder", "color")?
            .set_default("fragment_size", DEFAULT_FRAGMENT_SIZE)?
            .set_default("data_root", path_string(&default_data_root()))?
            .set_default("path_dataset", "")?;

        if let Some(path) = &src.config_file {
            builder = builder.add_source(File::new(&path_string(path), FileFormat::Yaml));
        }

        let raw: RawConfig = builder
            .add_source(Environment::with_prefix("FRAG").try_parsing(true))
            .set_override_option("path_dataset", src.path_dataset.as_deref().map(path_string))?
            .set_override_option("fragment_size", src.fragment_size)?
            .build()?
            .try_deserialize()?;

        validate(raw, src)
    }

    /// Directory holding the fragment index files.
    pub fn fragments_dir(&self) -> PathBuf {
        self.path_dataset.join(FRAGMENTS_DIR)
    }
}

/// An empty `path_dataset` falls back to the default dataset under
/// `data_root`, but only when no config file was given.
fn validate(mut raw: RawConfig, src: &ConfigSources) -> Result<FragConfig> {
    if raw.path_dataset.trim().is_empty() && src.config_file.is_none() {
        raw.path_dataset = path_string(&src.default_dataset.path_in(Path::new(&raw.data_root)));
    }
    if raw.path_dataset.trim().is_empty() {
        return Err(FragError::InvalidConfiguration(
            "path_dataset is not set".into(),
        ));
    }
    if raw.fragment_size <= 0 {
        return Err(FragError::InvalidConfiguration(format!(
            "fragment_size must be positive, got {}",
            raw.fragment_size
        )));
    }
    let fragment_size = usize::try_from(raw.fragment_size).map_err(|_| {
        FragError::InvalidConfiguration(format!(
            "fragment_size {} does not fit this platform",
            raw.fragment_size
        ))
    })?;
    Ok(FragConfig {
        path_dataset: PathBuf::from(raw.path_dataset),
        depth_folder: raw.depth_folder,
        color_folder: raw.color_folder,
        fragment_size,
    })
}

fn path_string(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn yaml(dir: &Path, body: &str) -> PathBuf {
        let p = dir.join("config.yml");
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn file_values_and_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let file = yaml(tmp.path(), "path_dataset: /data/scene\nfragment_size: 25\n");
        let cfg = FragConfig::resolve(&ConfigSources {
            config_file: Some(file),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(cfg.path_dataset, PathBuf::from("/data/scene"));
        assert_eq!(cfg.fragment_size, 25);
        assert_eq!(cfg.depth_folder, "depth");
        assert_eq!(cfg.color_folder, "color");
        assert_eq!(cfg.fragments_dir(), PathBuf::from("/data/scene/fragments"));
    }

    #[test]
    fn overrides_beat_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = yaml(
            tmp.path(),
            "path_dataset: /data/a\nfragment_size: 25\ncolor_folder: rgb\n",
        );
        let cfg = FragConfig::resolve(&ConfigSources {
            config_file: Some(file),
            path_dataset: Some(PathBuf::from("/data/b")),
            fragment_size: Some(7),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(cfg.path_dataset, PathBuf::from("/data/b"));
        assert_eq!(cfg.fragment_size, 7);
        assert_eq!(cfg.color_folder, "rgb");
    }

    #[test]
    fn default_dataset_without_file() {
        let cfg = FragConfig::resolve(&ConfigSources {
            default_dataset: DefaultDataset::JackJack,
            ..Default::default()
        })
        .unwrap();
        assert!(cfg.path_dataset.ends_with("JackJackL515Bag"));
        assert_eq!(cfg.fragment_size, DEFAULT_FRAGMENT_SIZE as usize);
    }

    #[test]
    fn data_root_from_file_places_default_dataset() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("datasets");
        let raw = RawConfig {
            path_dataset: String::new(),
            data_root: path_string(&root),
            depth_folder: "depth".into(),
            color_folder: "color".into(),
            fragment_size: 5,
        };
        let cfg = validate(raw, &ConfigSources::default()).unwrap();
        assert_eq!(cfg.path_dataset, root.join("LoungeRGBDImages"));
    }

    #[test]
    fn non_positive_fragment_size_is_invalid() {
        for k in [0, -3] {
            let err = FragConfig::resolve(&ConfigSources {
                path_dataset: Some(PathBuf::from("/data")),
                fragment_size: Some(k),
                ..Default::default()
            })
            .unwrap_err();
            assert!(matches!(err, FragError::InvalidConfiguration(_)), "{err}");
        }
    }

    #[test]
    fn file_without_dataset_path_is_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let file = yaml(tmp.path(), "fragment_size: 10\n");
        let err = FragConfig::resolve(&ConfigSources {
            config_file: Some(file),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, FragError::InvalidConfiguration(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = FragConfig::resolve(&ConfigSources {
            config_file: Some(tmp.path().join("absent.yml")),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, FragError::Config(_)));
    }
}

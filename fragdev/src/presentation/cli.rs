use clap::{Parser, Subcommand, ValueEnum};
use frag_core::DefaultDataset;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "fragdev: split RGB-D frame lists into fragments", long_about = None)]
pub struct Cli {
    /// YAML config file; overrides the default dataset, overridden by the flags below
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset used when no config file is given
    #[arg(
        long = "default-dataset",
        visible_alias = "default_dataset",
        value_enum,
        default_value_t = DatasetArg::Lounge,
        global = true
    )]
    pub default_dataset: DatasetArg,

    /// Dataset root (overrides config)
    #[arg(long = "path-dataset", global = true)]
    pub path_dataset: Option<PathBuf>,

    /// Frames per fragment (overrides config)
    #[arg(long = "fragment-size", allow_negative_numbers = true, global = true)]
    pub fragment_size: Option<i64>,

    /// Defaults to `split`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DatasetArg {
    Lounge,
    #[value(name = "jack_jack", alias = "jack-jack")]
    JackJack,
}

impl From<DatasetArg> for DefaultDataset {
    fn from(d: DatasetArg) -> Self {
        match d {
            DatasetArg::Lounge => DefaultDataset::Lounge,
            DatasetArg::JackJack => DefaultDataset::JackJack,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List dataset frames, write fragment lists, then reload them
    Split,

    /// Print the fragment lists currently on disk
    Load {
        /// Also print every path
        #[arg(long)]
        long: bool,
    },

    /// Print fragment ranges for the dataset without writing anything
    Plan,
}

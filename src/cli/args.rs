use clap::Parser;
use std::path::PathBuf;

/// Prints the recorder's camera list, ready to paste into its config.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct MainArgs {
    /// The path to a config file with `count`, `size` and `base_path` keys
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// The number of camera slots to generate
    #[clap(long, short = 'n')]
    pub count: Option<u32>,

    /// The width and height of each camera's render, in pixels
    #[clap(long, short, allow_hyphen_values = true)]
    pub size: Option<i64>,

    /// The prim path that camera names are appended to
    #[clap(long, short)]
    pub base_path: Option<String>,
}

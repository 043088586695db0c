use std::path::PathBuf;

use config::{Config, ConfigError};
use rc_camera_list::ListConfig;

use crate::cli::args::MainArgs;

pub const ENV_PREFIX: &str = "RECORDER_CONFIG";

#[derive(Debug)]
pub struct RecorderConfig {
    pub list: ListConfig,
}

impl RecorderConfig {
    /// Reads settings from `path` (if given) and `RECORDER_CONFIG_*`
    /// environment variables, in that order of precedence.
    pub fn read(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::read_with_prefix(path, ENV_PREFIX)
    }

    fn read_with_prefix(path: Option<PathBuf>, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut c = Config::new();

        if let Some(path) = path {
            c.merge(config::File::from(path))?;
        }

        c.merge(config::Environment::with_prefix(env_prefix))?;

        Self::from_config(c)
    }

    fn from_config(c: Config) -> Result<Self, ConfigError> {
        Ok(Self { list: c.try_into()? })
    }

    /// Command line flags win over everything else.
    pub fn apply_args(&mut self, args: &MainArgs) {
        if let Some(count) = args.count {
            self.list.count = count;
        }

        if let Some(size) = args.size {
            self.list.size = size;
        }

        if let Some(base_path) = &args.base_path {
            self.list.base_path = base_path.clone();
        }
    }
}

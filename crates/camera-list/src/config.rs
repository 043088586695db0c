use serde::Deserialize;

use crate::{
    generate::{DEFAULT_COUNT, DEFAULT_SIZE},
    name::BASE_PATH,
};

/// Parameters of a generated camera list. Missing keys fall back to the
/// stock 50 x 512px layout under `/World/Cams_01/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// The number of camera slots to emit
    pub count: u32,

    /// The width and height of each camera's render, in pixels
    pub size: i64,

    /// The prim path that camera names are appended to
    pub base_path: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            base_path: BASE_PATH.to_owned(),
        }
    }
}

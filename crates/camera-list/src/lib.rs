#[macro_use]
extern crate tracing;

mod block;
mod config;
mod error;
mod generate;
mod name;

pub use block::{format_block, CameraBlock};
pub use config::ListConfig;
pub use error::GenerateError;
pub use generate::{generate, generate_with};
pub use name::{camera_name, BASE_PATH};

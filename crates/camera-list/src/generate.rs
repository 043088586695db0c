use crate::{block::CameraBlock, config::ListConfig, error::GenerateError, name::camera_name_in};

pub const DEFAULT_COUNT: u32 = 50;
pub const DEFAULT_SIZE: i64 = 512;

/// Highest slot count whose indices all fit in a two-digit suffix.
pub const MAX_COUNT: u32 = 100;

pub const SEPARATOR: &str = ", \n";

/// Generates the stock camera list: 50 cameras under `/World/Cams_01/`, each
/// rendering at 512x512.
pub fn generate() -> String {
    render(crate::name::BASE_PATH, DEFAULT_COUNT, DEFAULT_SIZE)
}

pub fn generate_with(config: &ListConfig) -> Result<String, GenerateError> {
    if config.count > MAX_COUNT {
        return Err(GenerateError::PaddingOverflow {
            count: config.count,
            max: MAX_COUNT,
        });
    }

    Ok(render(&config.base_path, config.count, config.size))
}

fn render(base_path: &str, count: u32, size: i64) -> String {
    let blocks: Vec<String> = (0..i64::from(count))
        .map(|index| {
            let name = camera_name_in(base_path, index);
            trace!("camera slot {} -> {}", index, name);
            CameraBlock::new(&name, size).to_string()
        })
        .collect();

    debug!("generated {} camera blocks", blocks.len());

    blocks.join(SEPARATOR)
}

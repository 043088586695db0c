use std::io::Write;

use anyhow::Context;
use clap::Parser;

#[macro_use]
extern crate tracing;

mod cli;
mod config;
mod logging;

fn main() -> anyhow::Result<()> {
    // setup colorful backtraces
    color_backtrace::install();

    logging::init();

    let main_args = cli::args::MainArgs::parse();

    debug!("reading config from {:?}", &main_args.config);
    let mut config = crate::config::RecorderConfig::read(main_args.config.clone())
        .context("failed to read config file")?;
    config.apply_args(&main_args);

    let stdout = std::io::stdout();
    emit(&config, &mut stdout.lock())?;

    info!("wrote {} camera blocks", config.list.count);

    Ok(())
}

/// Generates the camera list and writes it to `out`, followed by a newline.
fn emit(config: &crate::config::RecorderConfig, out: &mut impl Write) -> anyhow::Result<()> {
    debug!("generating camera list with {:?}", &config.list);
    let list =
        rc_camera_list::generate_with(&config.list).context("failed to generate camera list")?;

    writeln!(out, "{}", list).context("failed to write camera list")?;
    out.flush().context("failed to write camera list")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rc_camera_list::ListConfig;

    use super::*;
    use crate::config::RecorderConfig;

    #[test]
    fn default_output_bytes() {
        let config = RecorderConfig {
            list: ListConfig::default(),
        };

        let mut out = Vec::new();
        emit(&config, &mut out).unwrap();

        let mut expected = rc_camera_list::generate().into_bytes();
        expected.push(b'\n');

        assert_eq!(out, expected);
        assert_eq!(out.len(), 3145);
        assert!(out.starts_with(b"[\n    \"/World/Cams_01/Camera\",\n    512,\n"));
        assert!(out.ends_with(b"\"/World/Cams_01/Camera_49\",\n    512,\n    512,\n    \"\"\n]\n"));
    }

    #[test]
    fn overflow_writes_nothing() {
        let config = RecorderConfig {
            list: ListConfig {
                count: 101,
                ..ListConfig::default()
            },
        };

        let mut out = Vec::new();
        assert!(emit(&config, &mut out).is_err());
        assert!(out.is_empty());
    }
}

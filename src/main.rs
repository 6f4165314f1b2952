//! bsrender CLI
//!
//! Resolves the renderer configuration and hands it to the render
//! pipeline. Run as a CGI program when `QUERY_STRING` is set.

use std::env;
use std::process::ExitCode;

use bsrender::config::{ConfigError, EffectiveConfig, InvocationMode};
use bsrender::logging::init_logging;
use bsrender::usage::print_usage;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let mode = InvocationMode::from_env();

    let effective = match EffectiveConfig::resolve(&args, &mode) {
        Ok(effective) => effective,
        Err(ConfigError::HelpRequested) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match effective.to_json() {
        Ok(json) => tracing::debug!(effective = %json, "effective configuration"),
        Err(e) => tracing::warn!("could not serialize effective configuration: {}", e),
    }

    let config = effective.into_config();
    if mode.is_interactive() && config.print_status {
        println!(
            "Configuration ready: {}x{}, data {}, output {}",
            config.camera_res_x,
            config.camera_res_y,
            config.data_file_directory,
            config.output_file_name
        );
    }

    ExitCode::SUCCESS
}

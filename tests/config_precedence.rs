//! Layering and trust-boundary tests for configuration resolution.

use std::fs;

use bsrender::config::{
    apply_command_line, apply_query_string, load_config_file, ConfigOrigin, EffectiveConfig,
    InvocationMode,
};
use bsrender::BsrConfig;
use tempfile::TempDir;

fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("bsrender")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

struct Fixture {
    _dir: TempDir,
    path: String,
}

fn fixture(contents: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bsrender.cfg");
    fs::write(&path, contents).unwrap();
    Fixture {
        path: path.to_string_lossy().to_string(),
        _dir: dir,
    }
}

fn resolve(args: &[String], mode: &InvocationMode) -> EffectiveConfig {
    let mut status = Vec::new();
    EffectiveConfig::resolve_with_status(args, mode, &mut status).unwrap()
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn test_command_line_wins_over_file_for_every_kind() {
    let fx = fixture(
        "camera_wb_enable=no\nbits_per_color=16\ncamera_gamma=2.2\ndata_file_directory=from_file\n",
    );
    let effective = resolve(
        &argv(&[
            "-c",
            &fx.path,
            "--camera_wb_enable=yes",
            "--bits_per_color=8",
            "--camera_gamma=1.8",
            "-d",
            "from_cli",
        ]),
        &InvocationMode::Interactive,
    );

    assert!(effective.config.camera_wb_enable);
    assert_eq!(effective.config.bits_per_color, 8);
    assert_eq!(effective.config.camera_gamma, 1.8);
    assert_eq!(effective.config.data_file_directory, "from_cli");
}

#[test]
fn test_file_alone_sets_values() {
    let fx = fixture("camera_fov=180 # wide angle\nsRGB_gamma=no\n");
    let effective = resolve(&argv(&["-c", &fx.path]), &InvocationMode::Interactive);
    assert_eq!(effective.config.camera_fov, 180.0);
    assert!(!effective.config.srgb_gamma);
}

#[test]
fn test_untouched_fields_keep_defaults() {
    let fx = fixture("camera_fov=180\n");
    let effective = resolve(&argv(&["-q", "-c", &fx.path]), &InvocationMode::Interactive);

    let mut expected = BsrConfig::default();
    expected.config_file_name = fx.path.clone();
    expected.print_status = false;
    expected.camera_fov = 180.0;
    assert_eq!(effective.config, expected);
}

// =============================================================================
// Trust boundary
// =============================================================================

#[test]
fn test_privileged_field_only_changes_from_trusted_sources() {
    let fx = fixture("num_threads=12\n");

    let mut config = BsrConfig::default();
    load_config_file(&mut config, fx.path.as_ref()).unwrap();
    assert_eq!(config.num_threads, 12);

    apply_command_line(&mut config, &argv(&["--num_threads=24"])).unwrap();
    assert_eq!(config.num_threads, 24);

    apply_query_string(&mut config, "num_threads=48&NUM_THREADS=96").unwrap();
    assert_eq!(config.num_threads, 24);
}

#[test]
fn test_request_mode_keeps_file_values_for_privileged_fields() {
    let fx = fixture("output_file_name=render.png\ncgi_max_res_x=1024\n");
    let mode = InvocationMode::RequestServing {
        query: "output_file_name=../../etc/shadow&cgi_max_res_x=999999&camera_res_x=1000"
            .to_string(),
    };

    let effective = resolve(&argv(&["-c", &fx.path]), &mode);

    assert_eq!(effective.config.output_file_name, "render.png");
    assert_eq!(effective.config.cgi_max_res_x, 1024);
    assert_eq!(effective.config.camera_res_x, 1000);
}

#[test]
fn test_request_mode_source_order() {
    let fx = fixture("");
    let mode = InvocationMode::RequestServing {
        query: "camera_pan=10".to_string(),
    };
    let effective = resolve(&argv(&["-c", &fx.path]), &mode);

    let origins: Vec<ConfigOrigin> = effective.sources.iter().map(|s| s.origin).collect();
    assert_eq!(
        origins,
        vec![
            ConfigOrigin::Defaults,
            ConfigOrigin::CommandLine,
            ConfigOrigin::File,
            ConfigOrigin::QueryString,
        ]
    );
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_file_loader_idempotent() {
    let fx = fixture("camera_fov=77\nskyglow_enable=yes\noutput_file_name='a b.png'\n");

    let mut once = BsrConfig::default();
    load_config_file(&mut once, fx.path.as_ref()).unwrap();

    let mut twice = BsrConfig::default();
    load_config_file(&mut twice, fx.path.as_ref()).unwrap();
    load_config_file(&mut twice, fx.path.as_ref()).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.output_file_name, "a b.png");
}

#[test]
fn test_short_flag_forms_equivalent() {
    let joined = resolve(
        &argv(&["-q", "-c/nonexistent/x.cfg", "-d/mydata"]),
        &InvocationMode::Interactive,
    );
    let split = resolve(
        &argv(&["-q", "-c", "/nonexistent/x.cfg", "-d", "/mydata"]),
        &InvocationMode::Interactive,
    );
    assert_eq!(joined.config, split.config);
    assert_eq!(joined.config.data_file_directory, "/mydata");
}

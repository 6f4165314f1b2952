//! The configuration record consumed by the render pipeline.
//!
//! Every setting lives in one flat struct. `Default` is the defaults
//! initializer; the loaders mutate the record in place afterwards.

use serde::{Deserialize, Serialize};

/// Maximum length in bytes of any string field.
pub const MAX_STRING_LEN: usize = 255;

/// Fully resolved renderer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsrConfig {
    // Paths. `config_file_name` is only settable through `-c`.
    pub config_file_name: String,
    pub data_file_directory: String,
    pub output_file_name: String,

    // Process tuning (privileged)
    pub print_status: bool,
    pub num_threads: i32,
    pub per_thread_buffer: i32,
    pub per_thread_buffer_airy: i32,

    // Limits applied when serving requests (privileged)
    pub cgi_mode: bool,
    pub cgi_max_res_x: i32,
    pub cgi_max_res_y: i32,
    pub cgi_gaia_min_parallax_quality: i32,
    pub cgi_allow_airy_disk: bool,
    pub cgi_min_airy_disk_first_null: f64,
    pub cgi_max_airy_disk_max_extent: i32,
    pub cgi_max_airy_disk_min_extent: i32,
    pub cgi_allow_anti_alias: bool,

    // Star selection
    pub gaia_db_enable: bool,
    pub gaia_min_parallax_quality: i32,
    pub external_db_enable: bool,
    pub render_distance_min: f64,
    pub render_distance_max: f64,
    pub render_distance_selector: i32,
    pub star_color_min: f64,
    pub star_color_max: f64,

    // Camera
    pub camera_res_x: i32,
    pub camera_res_y: i32,
    pub camera_fov: f64,
    pub camera_pixel_limit_mag: f64,
    pub camera_pixel_limit_mode: i32,
    pub camera_wb_enable: bool,
    pub camera_wb_temp: f64,
    pub camera_color_saturation: f64,
    pub camera_gamma: f64,
    pub camera_projection: i32,
    pub spherical_orientation: i32,
    pub mollewide_iterations: i32,

    // Color filter pass bands, in nanometers
    pub red_filter_long_limit: f64,
    pub red_filter_short_limit: f64,
    pub green_filter_long_limit: f64,
    pub green_filter_short_limit: f64,
    pub blue_filter_long_limit: f64,
    pub blue_filter_short_limit: f64,

    // Optics
    pub airy_disk_enable: bool,
    pub airy_disk_first_null: f64,
    pub airy_disk_max_extent: i32,
    pub airy_disk_min_extent: i32,
    pub airy_disk_obstruction: f64,
    pub anti_alias_enable: bool,
    pub anti_alias_radius: f64,
    pub skyglow_enable: bool,
    pub skyglow_temp: f64,
    pub skyglow_per_pixel_mag: f64,

    // Output encoding
    pub gaussian_blur_radius: f64,
    pub output_scaling_factor: f64,
    pub draw_crosshairs: bool,
    pub draw_grid_lines: bool,
    pub srgb_gamma: bool,
    pub bits_per_color: i32,

    // Camera and target placement (ICRS)
    pub camera_icrs_x: f64,
    pub camera_icrs_y: f64,
    pub camera_icrs_z: f64,
    pub camera_icrs_ra: f64,
    pub camera_icrs_dec: f64,
    pub camera_icrs_r: f64,
    pub target_icrs_x: f64,
    pub target_icrs_y: f64,
    pub target_icrs_z: f64,
    pub target_icrs_ra: f64,
    pub target_icrs_dec: f64,
    pub target_icrs_r: f64,
    pub camera_rotation: f64,
    pub camera_pan: f64,
    pub camera_tilt: f64,
}

impl Default for BsrConfig {
    fn default() -> Self {
        Self {
            config_file_name: "bsrender.cfg".to_string(),
            data_file_directory: "galaxydata".to_string(),
            output_file_name: "galaxy.png".to_string(),
            print_status: true,
            num_threads: 16,
            per_thread_buffer: 1000,
            per_thread_buffer_airy: 100_000,
            cgi_mode: false,
            cgi_max_res_x: 999_999,
            cgi_max_res_y: 999_999,
            cgi_gaia_min_parallax_quality: 0,
            cgi_allow_airy_disk: true,
            cgi_min_airy_disk_first_null: 0.3,
            cgi_max_airy_disk_max_extent: 1000,
            cgi_max_airy_disk_min_extent: 3,
            cgi_allow_anti_alias: true,
            gaia_db_enable: true,
            gaia_min_parallax_quality: 0,
            external_db_enable: true,
            render_distance_min: 0.0,
            render_distance_max: 1.0E99,
            render_distance_selector: 0,
            star_color_min: 0.0,
            star_color_max: 1.0E99,
            camera_res_x: 4000,
            camera_res_y: 2000,
            camera_fov: 360.0,
            camera_pixel_limit_mag: 8.0,
            camera_pixel_limit_mode: 0,
            camera_wb_enable: true,
            camera_wb_temp: 4300.0,
            camera_color_saturation: 1.0,
            camera_gamma: 1.0,
            camera_projection: 0,
            spherical_orientation: 0,
            mollewide_iterations: 5,
            red_filter_long_limit: 705.0,
            red_filter_short_limit: 550.0,
            green_filter_long_limit: 600.0,
            green_filter_short_limit: 445.0,
            blue_filter_long_limit: 465.0,
            blue_filter_short_limit: 395.0,
            airy_disk_enable: false,
            airy_disk_first_null: 0.75,
            airy_disk_max_extent: 100,
            airy_disk_min_extent: 1,
            airy_disk_obstruction: 0.0,
            anti_alias_enable: false,
            anti_alias_radius: 1.0,
            skyglow_enable: false,
            skyglow_temp: 4500.0,
            skyglow_per_pixel_mag: 14.0,
            gaussian_blur_radius: 0.0,
            output_scaling_factor: 1.0,
            draw_crosshairs: false,
            draw_grid_lines: false,
            srgb_gamma: true,
            bits_per_color: 8,
            camera_icrs_x: 0.0,
            camera_icrs_y: 0.0,
            camera_icrs_z: 0.0,
            camera_icrs_ra: 0.0,
            camera_icrs_dec: 0.0,
            camera_icrs_r: 0.0,
            target_icrs_x: 0.0,
            target_icrs_y: 0.0,
            target_icrs_z: 0.0,
            target_icrs_ra: 266.4168371,
            target_icrs_dec: -29.0078106,
            target_icrs_r: 8178.0,
            camera_rotation: -58.6,
            camera_pan: 0.0,
            camera_tilt: 0.0,
        }
    }
}

/// Copy `value` into `dest`, truncated to [`MAX_STRING_LEN`] bytes.
///
/// Truncation backs off to the nearest UTF-8 character boundary.
pub fn set_bounded_string(dest: &mut String, value: &str) {
    let end = floor_char_boundary(value, MAX_STRING_LEN);
    dest.clear();
    dest.push_str(&value[..end]);
}

/// Largest index `<= max` that falls on a character boundary of `s`.
pub(crate) fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BsrConfig::default();
        assert_eq!(config.config_file_name, "bsrender.cfg");
        assert_eq!(config.data_file_directory, "galaxydata");
        assert_eq!(config.output_file_name, "galaxy.png");
        assert!(config.print_status);
        assert_eq!(config.num_threads, 16);
        assert_eq!(config.camera_res_x, 4000);
        assert_eq!(config.camera_fov, 360.0);
        assert_eq!(config.render_distance_max, 1.0E99);
        assert_eq!(config.target_icrs_ra, 266.4168371);
        assert!(!config.airy_disk_enable);
        assert!(config.srgb_gamma);
    }

    #[test]
    fn test_bounded_string_short_value() {
        let mut dest = "old".to_string();
        set_bounded_string(&mut dest, "new/path");
        assert_eq!(dest, "new/path");
    }

    #[test]
    fn test_bounded_string_truncates() {
        let mut dest = String::new();
        let long = "x".repeat(MAX_STRING_LEN + 40);
        set_bounded_string(&mut dest, &long);
        assert_eq!(dest.len(), MAX_STRING_LEN);
    }

    #[test]
    fn test_bounded_string_respects_char_boundary() {
        let mut dest = String::new();
        // 254 ASCII bytes followed by a two-byte character straddling the limit
        let value = format!("{}é", "a".repeat(MAX_STRING_LEN - 1));
        set_bounded_string(&mut dest, &value);
        assert_eq!(dest.len(), MAX_STRING_LEN - 1);
        assert!(dest.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut config = BsrConfig::default();
        config.camera_fov = 180.0;
        let json = serde_json::to_string(&config).unwrap();
        let parsed: BsrConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.camera_fov, 180.0);
        assert_eq!(parsed.num_threads, config.num_threads);
        assert_eq!(parsed.output_file_name, config.output_file_name);
    }
}

//! Option registry and dispatcher
//!
//! Each option is one row of a static table: its external name, the record
//! field it writes, and the trust level needed to reach it. Privileged and
//! public options live in separate tables so an untrusted lookup never sees
//! a privileged row at all.
//!
//! Names match case-insensitively and exactly. `num_threads` matches
//! `NUM_THREADS` but not `num_threads_extra` or `num_thread`.

use std::fmt;

use serde::Serialize;

use crate::parse::{parse_bool, parse_double, parse_int};
use crate::record::{set_bounded_string, BsrConfig};

/// Where a segment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trust {
    /// Config file or command line
    Trusted,
    /// Request query string
    Untrusted,
}

/// Which sources may set an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Privilege {
    /// Only trusted sources
    Privileged,
    /// Any source
    Public,
}

/// Value type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Bool,
    Int,
    Double,
    String,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::Bool => "yes|no",
            OptionKind::Int => "integer",
            OptionKind::Double => "number",
            OptionKind::String => "string",
        };
        f.write_str(name)
    }
}

/// Typed reference to the record field an option writes
#[derive(Clone, Copy)]
pub enum Field {
    Bool(fn(&mut BsrConfig) -> &mut bool),
    Int(fn(&mut BsrConfig) -> &mut i32),
    Double(fn(&mut BsrConfig) -> &mut f64),
    Str(fn(&mut BsrConfig) -> &mut String),
}

impl Field {
    pub fn kind(&self) -> OptionKind {
        match self {
            Field::Bool(_) => OptionKind::Bool,
            Field::Int(_) => OptionKind::Int,
            Field::Double(_) => OptionKind::Double,
            Field::Str(_) => OptionKind::String,
        }
    }

    /// Parse `value` for this field's type and store it in `config`.
    fn store(&self, config: &mut BsrConfig, value: &str) {
        match self {
            Field::Bool(field) => *field(config) = parse_bool(value),
            Field::Int(field) => *field(config) = parse_int(value),
            Field::Double(field) => *field(config) = parse_double(value),
            Field::Str(field) => set_bounded_string(field(config), value),
        }
    }
}

/// One registry row
#[derive(Clone, Copy)]
pub struct OptionDef {
    pub name: &'static str,
    pub privilege: Privilege,
    pub field: Field,
}

impl OptionDef {
    pub fn kind(&self) -> OptionKind {
        self.field.kind()
    }

    /// Case-insensitive exact name comparison.
    pub fn matches(&self, option: &str) -> bool {
        self.name.eq_ignore_ascii_case(option)
    }
}

impl fmt::Debug for OptionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDef")
            .field("name", &self.name)
            .field("privilege", &self.privilege)
            .field("kind", &self.kind())
            .finish()
    }
}

macro_rules! options {
    ($privilege:ident; $($kind:ident $name:literal => $field:ident,)*) => {
        &[$(OptionDef {
            name: $name,
            privilege: Privilege::$privilege,
            field: Field::$kind(|c| &mut c.$field),
        },)*]
    };
}

/// Options reachable from trusted sources only.
///
/// `config_file_name` is not listed: only `-c` can set it.
pub static PRIVILEGED_OPTIONS: &[OptionDef] = options![Privileged;
    Str "data_file_directory" => data_file_directory,
    Str "output_file_name" => output_file_name,
    Bool "print_status" => print_status,
    Int "num_threads" => num_threads,
    Int "per_thread_buffer" => per_thread_buffer,
    Int "per_thread_buffer_Airy" => per_thread_buffer_airy,
    Bool "cgi_mode" => cgi_mode,
    Int "cgi_max_res_x" => cgi_max_res_x,
    Int "cgi_max_res_y" => cgi_max_res_y,
    Int "cgi_Gaia_min_parallax_quality" => cgi_gaia_min_parallax_quality,
    Bool "cgi_allow_Airy_disk" => cgi_allow_airy_disk,
    Double "cgi_min_Airy_disk_first_null" => cgi_min_airy_disk_first_null,
    Int "cgi_max_Airy_disk_max_extent" => cgi_max_airy_disk_max_extent,
    Int "cgi_max_Airy_disk_min_extent" => cgi_max_airy_disk_min_extent,
    Bool "cgi_allow_anti_alias" => cgi_allow_anti_alias,
];

/// Options reachable from any source, including request query strings.
pub static PUBLIC_OPTIONS: &[OptionDef] = options![Public;
    Bool "Gaia_db_enable" => gaia_db_enable,
    Int "Gaia_min_parallax_quality" => gaia_min_parallax_quality,
    Bool "external_db_enable" => external_db_enable,
    Double "render_distance_min" => render_distance_min,
    Double "render_distance_max" => render_distance_max,
    Int "render_distance_selector" => render_distance_selector,
    Double "star_color_min" => star_color_min,
    Double "star_color_max" => star_color_max,
    Int "camera_res_x" => camera_res_x,
    Int "camera_res_y" => camera_res_y,
    Double "camera_fov" => camera_fov,
    Double "camera_pixel_limit_mag" => camera_pixel_limit_mag,
    Int "camera_pixel_limit_mode" => camera_pixel_limit_mode,
    Bool "camera_wb_enable" => camera_wb_enable,
    Double "camera_wb_temp" => camera_wb_temp,
    Double "camera_color_saturation" => camera_color_saturation,
    Double "camera_gamma" => camera_gamma,
    Int "camera_projection" => camera_projection,
    Int "spherical_orientation" => spherical_orientation,
    Int "Mollewide_iterations" => mollewide_iterations,
    Double "red_filter_long_limit" => red_filter_long_limit,
    Double "red_filter_short_limit" => red_filter_short_limit,
    Double "green_filter_long_limit" => green_filter_long_limit,
    Double "green_filter_short_limit" => green_filter_short_limit,
    Double "blue_filter_long_limit" => blue_filter_long_limit,
    Double "blue_filter_short_limit" => blue_filter_short_limit,
    Bool "Airy_disk_enable" => airy_disk_enable,
    Double "Airy_disk_first_null" => airy_disk_first_null,
    Int "Airy_disk_max_extent" => airy_disk_max_extent,
    Int "Airy_disk_min_extent" => airy_disk_min_extent,
    Double "Airy_disk_obstruction" => airy_disk_obstruction,
    Bool "anti_alias_enable" => anti_alias_enable,
    Double "anti_alias_radius" => anti_alias_radius,
    Bool "skyglow_enable" => skyglow_enable,
    Double "skyglow_temp" => skyglow_temp,
    Double "skyglow_per_pixel_mag" => skyglow_per_pixel_mag,
    Double "Gaussian_blur_radius" => gaussian_blur_radius,
    Double "output_scaling_factor" => output_scaling_factor,
    Bool "draw_crosshairs" => draw_crosshairs,
    Bool "draw_grid_lines" => draw_grid_lines,
    Bool "sRGB_gamma" => srgb_gamma,
    Int "bits_per_color" => bits_per_color,
    Double "camera_icrs_x" => camera_icrs_x,
    Double "camera_icrs_y" => camera_icrs_y,
    Double "camera_icrs_z" => camera_icrs_z,
    Double "camera_icrs_ra" => camera_icrs_ra,
    Double "camera_icrs_dec" => camera_icrs_dec,
    Double "camera_icrs_r" => camera_icrs_r,
    Double "target_icrs_x" => target_icrs_x,
    Double "target_icrs_y" => target_icrs_y,
    Double "target_icrs_z" => target_icrs_z,
    Double "target_icrs_ra" => target_icrs_ra,
    Double "target_icrs_dec" => target_icrs_dec,
    Double "target_icrs_r" => target_icrs_r,
    Double "camera_rotation" => camera_rotation,
    Double "camera_pan" => camera_pan,
    Double "camera_tilt" => camera_tilt,
];

/// Every option visible at the given trust level.
pub fn options_for(trust: Trust) -> impl Iterator<Item = &'static OptionDef> {
    let privileged: &'static [OptionDef] = match trust {
        Trust::Trusted => PRIVILEGED_OPTIONS,
        Trust::Untrusted => &[],
    };
    privileged.iter().chain(PUBLIC_OPTIONS.iter())
}

/// Every registered option, privileged first.
pub fn all_options() -> impl Iterator<Item = &'static OptionDef> {
    options_for(Trust::Trusted)
}

/// Find the option named `option` among those visible at `trust`.
pub fn lookup(option: &str, trust: Trust) -> Option<&'static OptionDef> {
    options_for(trust).find(|def| def.matches(option))
}

/// Apply a sanitized `value` to the option named `option`.
///
/// Returns `false` and leaves `config` untouched when no visible option
/// has that name.
pub fn dispatch(config: &mut BsrConfig, option: &str, value: &str, trust: Trust) -> bool {
    match lookup(option, trust) {
        Some(def) => {
            def.field.store(config, value);
            tracing::trace!(option = def.name, value, "applied option");
            true
        }
        None => false,
    }
}

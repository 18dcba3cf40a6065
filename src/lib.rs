//! Gabor-patch stimulus generation.
//!
//! A Gabor patch is a cosine grating windowed by a spatial envelope. This
//! crate turns a set of [`PatchParams`] into an 8-bit RGB raster in two steps:
//!
//! 1. **Fields**: [`generate_fields`] samples the grating amplitude and the
//!    envelope over one rotated, centered [`CoordinateGrid`].
//! 2. **Compose**: [`compose`] mixes `color1`/`color2` by amplitude and lays
//!    the result over the background with the envelope as opacity.
//!
//! [`generate_batch`] drives both steps for every orientation of a
//! [`PatchRequest`] and writes one PNG per orientation, named by
//! [`output_file_name`].
#![forbid(unsafe_code)]

mod compose;
mod field;
mod foundation;
mod params;
mod pipeline;

pub use compose::blend::compose;
pub use compose::output::{format_frequency, format_orientation, output_file_name, write_png};
pub use field::generate::{PatchFields, generate_fields};
pub use field::grid::{CoordinateGrid, GridPoint};
pub use foundation::core::{Field, Rgb};
pub use foundation::error::{GaborError, GaborResult};
pub use params::color::parse_color;
pub use params::config::PatchConfig;
pub use params::envelope::Envelope;
pub use params::orientation::expand_orientations;
pub use params::patch::{PatchParams, PatchRequest};
pub use pipeline::{generate_batch, render_patch, write_patch};

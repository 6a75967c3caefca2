//! # halocline
//!
//! Time and depth resolved read access to gridded ocean-model output.
//!
//! A coverage adds a time axis and a vertical axis to a structured horizontal
//! grid and answers queries such as "temperature at 12.5 m on 1 July 00:00"
//! over the whole grid at once.
//!
//! ## Key Features
//!
//! - **Depth or layer queries**: request a physical depth (`f64`) or a vertical layer index (`usize`)
//! - **Sigma and z coordinates**: layer depths may be fixed per layer or vary with every cell
//! - **Scalar and vector variables**: temperature, salinity and baroclinic (u, v) velocity
//! - **Pluggable readers**: any [`CoverageReader`] can feed raw layer slices
//!
//! ## Architecture
//!
//! - **Axes**: [`TimeAxis`] and [`VerticalAxis`] resolve requested times and depths to indices
//! - **Engine**: [`vertical::engine`] copies or interpolates every cell across its bracket
//! - **Coverage**: [`TimeLevelCoverage`] composes grid, axes and reader behind one query API

pub mod config;
pub mod coverage;
pub mod error;
pub mod grid;
pub mod interpolation;
pub mod logging;
pub mod reader;
pub mod time_axis;
pub mod vertical;

pub use config::Config;
pub use coverage::TimeLevelCoverage;
pub use error::{HaloclineError, Result};
pub use grid::HorizontalGrid;
pub use interpolation::{get_interpolator, Extrapolation, VerticalInterpolator};
pub use logging::{
    generate_query_id, init_tracing, log_error, log_query_stats, log_timed_operation,
};
pub use reader::{CoverageReader, MemoryReader, Variable, VectorField};
pub use time_axis::{TimeAxis, TimeSelector};
pub use vertical::{DepthLookup, DepthSelector, LevelField, LevelIndex, VerticalAxis};

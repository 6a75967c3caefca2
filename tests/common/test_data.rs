//! Test data generation utilities.
//!
//! This module builds in-memory coverages with known layer values so that
//! expected results can be computed by hand.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use ndarray::{array, Array1, Array3, Array4};

use halocline::reader::{
    BAROCLINIC_EASTWARD_SEA_WATER_VELOCITY, BAROCLINIC_NORTHWARD_SEA_WATER_VELOCITY,
    SEA_WATER_SALINITY, SEA_WATER_TEMPERATURE,
};
use halocline::{
    Config, HorizontalGrid, LevelField, MemoryReader, TimeAxis, TimeLevelCoverage, VerticalAxis,
};

/// Grid width used by every fixture
pub const X_SIZE: usize = 2;
/// Grid height used by every fixture
pub const Y_SIZE: usize = 2;
/// Number of vertical layers in every fixture
pub const N_LAYERS: usize = 3;
/// Number of time steps in every fixture
pub const N_TIMES: usize = 2;

/// First time step of every fixture
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap()
}

/// Hourly time axis
pub fn time_axis() -> TimeAxis {
    TimeAxis::new(
        (0..N_TIMES as i64)
            .map(|h| start_time() + Duration::hours(h))
            .collect(),
    )
}

/// Raw temperature at (t, layer, y, x): every digit identifies one index
pub fn temperature(t: usize, layer: usize, y: usize, x: usize) -> f64 {
    (1000 * t + 100 * layer + 10 * y + x) as f64
}

/// Raw salinity at (t, layer, y, x)
pub fn salinity(t: usize, layer: usize, y: usize, x: usize) -> f64 {
    30.0 + temperature(t, layer, y, x) / 1000.0
}

/// Raw eastward velocity at (t, layer, y, x)
pub fn velocity_u(t: usize, layer: usize, y: usize, x: usize) -> f64 {
    temperature(t, layer, y, x) / 100.0
}

/// Raw northward velocity at (t, layer, y, x)
pub fn velocity_v(t: usize, layer: usize, y: usize, x: usize) -> f64 {
    -velocity_u(t, layer, y, x)
}

fn field(f: fn(usize, usize, usize, usize) -> f64) -> Array4<f64> {
    Array4::from_shape_fn((N_TIMES, N_LAYERS, Y_SIZE, X_SIZE), |(t, z, y, x)| {
        f(t, z, y, x)
    })
}

/// Reader holding temperature, salinity and both velocity components
pub fn full_reader() -> MemoryReader {
    MemoryReader::new()
        .with_variable(SEA_WATER_TEMPERATURE, field(temperature))
        .with_variable(SEA_WATER_SALINITY, field(salinity))
        .with_variable(BAROCLINIC_EASTWARD_SEA_WATER_VELOCITY, field(velocity_u))
        .with_variable(BAROCLINIC_NORTHWARD_SEA_WATER_VELOCITY, field(velocity_v))
}

/// Fixed z-levels at 0, 10 and 20 m
pub fn z_levels() -> Array1<f64> {
    array![0.0, 10.0, 20.0]
}

/// Bottom depth of each cell used by the sigma fixture
pub fn bottom_depth(y: usize, x: usize) -> f64 {
    [[12.0, 16.0], [20.0, 40.0]][y][x]
}

/// Sigma levels: surface, mid-column and bottom of each cell
pub fn sigma_levels() -> Array3<f64> {
    Array3::from_shape_fn((N_LAYERS, Y_SIZE, X_SIZE), |(z, y, x)| {
        bottom_depth(y, x) * z as f64 / (N_LAYERS - 1) as f64
    })
}

pub fn grid() -> HorizontalGrid {
    HorizontalGrid::new(X_SIZE, Y_SIZE)
}

/// Coverage over fixed z-levels
pub fn z_level_coverage(reader: MemoryReader) -> TimeLevelCoverage<MemoryReader> {
    TimeLevelCoverage::new(
        reader,
        grid(),
        time_axis(),
        VerticalAxis::z_levels(z_levels()),
        Config::default(),
    )
    .expect("valid z-level coverage")
}

/// Coverage over sigma levels
pub fn sigma_coverage(reader: MemoryReader) -> TimeLevelCoverage<MemoryReader> {
    TimeLevelCoverage::new(
        reader,
        grid(),
        time_axis(),
        VerticalAxis::sigma(sigma_levels()),
        Config::default(),
    )
    .expect("valid sigma coverage")
}

/// Non-sigma coverage whose depth table still varies per cell
pub fn varying_z_coverage(reader: MemoryReader) -> TimeLevelCoverage<MemoryReader> {
    TimeLevelCoverage::new(
        reader,
        grid(),
        time_axis(),
        VerticalAxis::new(LevelField::Varying(sigma_levels()), false),
        Config::default(),
    )
    .expect("valid coverage")
}

/// Linear interpolation between two samples
pub fn lerp(d0: f64, v0: f64, d1: f64, v1: f64, target: f64) -> f64 {
    v0 + (v1 - v0) * (target - d0) / (d1 - d0)
}

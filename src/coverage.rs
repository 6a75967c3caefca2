//! Time and depth resolved coverage.
//!
//! [`TimeLevelCoverage`] combines a horizontal grid with a time axis, a
//! vertical axis and a reader. Every variable goes through the same routine:
//! resolve the time step and the per-cell brackets, read one raw slice per
//! candidate layer, then resolve each cell at the requested depth.

use ndarray::{s, Array2, Array3, Array4, Axis};

use crate::config::Config;
use crate::error::{HaloclineError, Result};
use crate::grid::HorizontalGrid;
use crate::interpolation::{get_interpolator, VerticalInterpolator};
use crate::logging::{log_error, log_query_stats, log_timed_operation};
use crate::reader::{CoverageReader, Variable, VectorField};
use crate::time_axis::{TimeAxis, TimeSelector};
use crate::vertical::engine::resolve_vertical_slice;
use crate::vertical::{DepthLookup, DepthSelector, LevelField, LevelIndex, VerticalAxis};

/// Gridded ocean-model output with time and vertical dimensions
pub struct TimeLevelCoverage<R> {
    grid: HorizontalGrid,
    time_axis: TimeAxis,
    vertical_axis: VerticalAxis,
    reader: R,
    interpolator: Box<dyn VerticalInterpolator>,
    config: Config,
}

impl<R: CoverageReader> TimeLevelCoverage<R> {
    /// Create a coverage, applying the tolerances and interpolation method of `config`
    pub fn new(
        reader: R,
        grid: HorizontalGrid,
        time_axis: TimeAxis,
        vertical_axis: VerticalAxis,
        config: Config,
    ) -> Result<Self> {
        config.validate()?;

        let vertical_axis = vertical_axis.with_depth_tolerance(config.vertical.depth_tolerance);
        vertical_axis.validate(&grid)?;

        let time_axis = time_axis.with_tolerance(config.time_tolerance());
        let interpolator = get_interpolator(
            &config.vertical.interpolation_method,
            config.vertical.extrapolation,
        )?;

        Ok(Self {
            grid,
            time_axis,
            vertical_axis,
            reader,
            interpolator,
            config,
        })
    }

    pub fn get_x_size(&self) -> usize {
        self.grid.get_x_size()
    }

    pub fn get_y_size(&self) -> usize {
        self.grid.get_y_size()
    }

    pub fn is_sigma_coordinate(&self) -> bool {
        self.vertical_axis.is_sigma_coordinate()
    }

    /// Depth table of the vertical layers
    pub fn levels(&self) -> &LevelField {
        self.vertical_axis.levels()
    }

    pub fn grid(&self) -> &HorizontalGrid {
        &self.grid
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    pub fn vertical_axis(&self) -> &VerticalAxis {
        &self.vertical_axis
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn find_time_index(&self, time: impl Into<TimeSelector>) -> Result<usize> {
        self.time_axis.find_time_index(time.into())
    }

    pub fn find_level_index(&self, depth: impl Into<DepthSelector>) -> Result<LevelIndex> {
        self.vertical_axis.find_level_index(depth.into(), &self.grid)
    }

    /// Sea water temperature over the grid at the requested time and depth
    pub fn sea_water_temperature_at(
        &self,
        time: impl Into<TimeSelector>,
        depth: impl Into<DepthSelector>,
    ) -> Result<Array2<f64>> {
        let values = self.resolve_at_time_and_depth(
            "sea_water_temperature_at",
            time.into(),
            depth.into(),
            1,
            DepthLookup::PerCell,
            |index_t, index_z| {
                Ok(self
                    .reader
                    .read_sea_water_temperature(index_t, index_z)?
                    .insert_axis(Axis(0)))
            },
        )?;
        Ok(values.index_axis_move(Axis(0), 0))
    }

    /// Sea water salinity over the grid at the requested time and depth
    pub fn sea_water_salinity_at(
        &self,
        time: impl Into<TimeSelector>,
        depth: impl Into<DepthSelector>,
    ) -> Result<Array2<f64>> {
        let values = self.resolve_at_time_and_depth(
            "sea_water_salinity_at",
            time.into(),
            depth.into(),
            1,
            DepthLookup::PerCell,
            |index_t, index_z| {
                Ok(self
                    .reader
                    .read_sea_water_salinity(index_t, index_z)?
                    .insert_axis(Axis(0)))
            },
        )?;
        Ok(values.index_axis_move(Axis(0), 0))
    }

    /// Baroclinic (u, v) velocity over the grid at the requested time and depth
    pub fn baroclinic_sea_water_velocity_at(
        &self,
        time: impl Into<TimeSelector>,
        depth: impl Into<DepthSelector>,
    ) -> Result<VectorField> {
        let values = self.resolve_at_time_and_depth(
            "baroclinic_sea_water_velocity_at",
            time.into(),
            depth.into(),
            2,
            DepthLookup::CoordinateSystem,
            |index_t, index_z| {
                self.reader
                    .read_baroclinic_sea_water_velocity(index_t, index_z)?
                    .into_components()
            },
        )?;
        VectorField::from_components(values)
    }

    /// Any variable as a `(components, y, x)` array
    pub fn read_variable_at(
        &self,
        variable: Variable,
        time: impl Into<TimeSelector>,
        depth: impl Into<DepthSelector>,
    ) -> Result<Array3<f64>> {
        let lookup = match variable {
            Variable::BaroclinicSeaWaterVelocity => DepthLookup::CoordinateSystem,
            _ => DepthLookup::PerCell,
        };
        self.resolve_at_time_and_depth(
            variable.standard_name(),
            time.into(),
            depth.into(),
            variable.components(),
            lookup,
            |index_t, index_z| self.reader.read_variable(variable, index_t, index_z),
        )
    }

    fn resolve_at_time_and_depth<F>(
        &self,
        operation: &str,
        time: TimeSelector,
        depth: DepthSelector,
        components: usize,
        lookup: DepthLookup,
        fetch: F,
    ) -> Result<Array3<f64>>
    where
        F: FnMut(usize, usize) -> Result<Array3<f64>>,
    {
        log_timed_operation(operation, || {
            self.resolve_layers(operation, time, depth, components, lookup, fetch)
        })
        .map_err(|e| {
            log_error(&e, operation);
            e
        })
    }

    fn resolve_layers<F>(
        &self,
        operation: &str,
        time: TimeSelector,
        depth: DepthSelector,
        components: usize,
        lookup: DepthLookup,
        mut fetch: F,
    ) -> Result<Array3<f64>>
    where
        F: FnMut(usize, usize) -> Result<Array3<f64>>,
    {
        // fail before any read when the depth table cannot serve this lookup
        self.vertical_axis.check_lookup(lookup)?;

        let index_t = self.find_time_index(time)?;
        let level_index = self.find_level_index(depth)?;
        let indexes_z = level_index.indexes_z();
        let (ny, nx) = self.grid.shape();

        let mut layers = Array4::from_elem((indexes_z.len(), components, ny, nx), f64::NAN);
        for (position, &index_z) in indexes_z.iter().enumerate() {
            let slice = fetch(index_t, index_z)?;
            if slice.dim() != (components, ny, nx) {
                return Err(HaloclineError::Reader {
                    message: format!(
                        "Layer {} at time step {} has shape {:?}, expected {:?}",
                        index_z,
                        index_t,
                        slice.shape(),
                        [components, ny, nx]
                    ),
                });
            }
            layers.slice_mut(s![position, .., .., ..]).assign(&slice);
        }

        let resolved = resolve_vertical_slice(
            &level_index,
            &layers,
            &self.vertical_axis,
            lookup,
            depth.target_depth(),
            self.interpolator.as_ref(),
        )?;

        log_query_stats(
            operation,
            index_t,
            indexes_z,
            resolved.direct_cells,
            resolved.interpolated_cells,
        );

        Ok(resolved.values)
    }
}

//! Readers supplying raw horizontal layer slices.
//!
//! A coverage never touches storage itself: it asks a [`CoverageReader`] for
//! the full horizontal slice of one variable at one time step and one layer.
//! [`MemoryReader`] keeps whole `(time, layer, y, x)` arrays in memory.

use ndarray::{s, Array2, Array3, Array4, Axis};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{HaloclineError, Result};

/// CF standard name of sea water temperature
pub const SEA_WATER_TEMPERATURE: &str = "sea_water_temperature";
/// CF standard name of sea water salinity
pub const SEA_WATER_SALINITY: &str = "sea_water_salinity";
/// Eastward component of the baroclinic velocity
pub const BAROCLINIC_EASTWARD_SEA_WATER_VELOCITY: &str = "baroclinic_eastward_sea_water_velocity";
/// Northward component of the baroclinic velocity
pub const BAROCLINIC_NORTHWARD_SEA_WATER_VELOCITY: &str = "baroclinic_northward_sea_water_velocity";

/// Physical variables a coverage can resolve at depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    SeaWaterTemperature,
    SeaWaterSalinity,
    BaroclinicSeaWaterVelocity,
}

impl Variable {
    pub fn standard_name(&self) -> &'static str {
        match self {
            Variable::SeaWaterTemperature => SEA_WATER_TEMPERATURE,
            Variable::SeaWaterSalinity => SEA_WATER_SALINITY,
            Variable::BaroclinicSeaWaterVelocity => "baroclinic_sea_water_velocity",
        }
    }

    /// 1 for scalars, 2 for (u, v) vectors
    pub fn components(&self) -> usize {
        match self {
            Variable::BaroclinicSeaWaterVelocity => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.standard_name())
    }
}

impl FromStr for Variable {
    type Err = HaloclineError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            SEA_WATER_TEMPERATURE => Ok(Variable::SeaWaterTemperature),
            SEA_WATER_SALINITY => Ok(Variable::SeaWaterSalinity),
            "baroclinic_sea_water_velocity" => Ok(Variable::BaroclinicSeaWaterVelocity),
            _ => Err(HaloclineError::VariableName {
                name: name.to_string(),
            }),
        }
    }
}

/// Horizontal (u, v) vector field
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    pub u: Array2<f64>,
    pub v: Array2<f64>,
}

impl VectorField {
    /// Split a `(2, y, x)` array into its u and v components
    pub fn from_components(values: Array3<f64>) -> Result<Self> {
        if values.len_of(Axis(0)) != 2 {
            return Err(HaloclineError::DataNotFound {
                message: format!(
                    "Vector field needs 2 components, got {}",
                    values.len_of(Axis(0))
                ),
            });
        }
        Ok(Self {
            u: values.index_axis(Axis(0), 0).to_owned(),
            v: values.index_axis(Axis(0), 1).to_owned(),
        })
    }

    /// Stack u and v into a `(2, y, x)` array
    pub fn into_components(self) -> Result<Array3<f64>> {
        Ok(ndarray::stack(Axis(0), &[self.u.view(), self.v.view()])?)
    }
}

/// Source of raw horizontal layer slices
pub trait CoverageReader {
    /// Temperature over the whole grid at one time step and layer
    fn read_sea_water_temperature(&self, index_t: usize, index_z: usize) -> Result<Array2<f64>>;

    /// Salinity over the whole grid at one time step and layer
    fn read_sea_water_salinity(&self, index_t: usize, index_z: usize) -> Result<Array2<f64>>;

    /// Baroclinic velocity components over the whole grid at one time step and layer
    fn read_baroclinic_sea_water_velocity(
        &self,
        index_t: usize,
        index_z: usize,
    ) -> Result<VectorField>;

    /// Any variable as a `(components, y, x)` array
    fn read_variable(&self, variable: Variable, index_t: usize, index_z: usize) -> Result<Array3<f64>> {
        match variable {
            Variable::SeaWaterTemperature => Ok(self
                .read_sea_water_temperature(index_t, index_z)?
                .insert_axis(Axis(0))),
            Variable::SeaWaterSalinity => Ok(self
                .read_sea_water_salinity(index_t, index_z)?
                .insert_axis(Axis(0))),
            Variable::BaroclinicSeaWaterVelocity => self
                .read_baroclinic_sea_water_velocity(index_t, index_z)?
                .into_components(),
        }
    }
}

/// In-memory reader holding `(time, layer, y, x)` arrays keyed by standard name
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    data: HashMap<String, Array4<f64>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable
    pub fn with_variable(mut self, name: impl Into<String>, values: Array4<f64>) -> Self {
        self.data.insert(name.into(), values);
        self
    }

    /// Get a variable's data array
    pub fn get_variable(&self, name: &str) -> Option<&Array4<f64>> {
        self.data.get(name)
    }

    /// Get a variable's data array with error handling
    pub fn get_variable_checked(&self, name: &str) -> Result<&Array4<f64>> {
        self.data.get(name).ok_or_else(|| HaloclineError::VariableName {
            name: name.to_string(),
        })
    }

    /// Check if a variable exists
    pub fn has_variable(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Validate that every stored variable shares one shape
    pub fn validate(&self) -> Result<()> {
        let mut reference: Option<(&str, &[usize])> = None;

        for (name, values) in &self.data {
            match reference {
                None => reference = Some((name.as_str(), values.shape())),
                Some((ref_name, shape)) if shape != values.shape() => {
                    return Err(HaloclineError::DataNotFound {
                        message: format!(
                            "Variable {} has shape {:?} but {} has {:?}",
                            name,
                            values.shape(),
                            ref_name,
                            shape
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    fn read_slice(&self, name: &str, index_t: usize, index_z: usize) -> Result<Array2<f64>> {
        let values = self.get_variable_checked(name)?;
        let (nt, nz, _, _) = values.dim();

        if index_t >= nt || index_z >= nz {
            return Err(HaloclineError::DataNotFound {
                message: format!(
                    "Slice (t={}, z={}) of {} is outside its {}x{} time/layer extent",
                    index_t, index_z, name, nt, nz
                ),
            });
        }

        Ok(values.slice(s![index_t, index_z, .., ..]).to_owned())
    }
}

impl CoverageReader for MemoryReader {
    fn read_sea_water_temperature(&self, index_t: usize, index_z: usize) -> Result<Array2<f64>> {
        self.read_slice(SEA_WATER_TEMPERATURE, index_t, index_z)
    }

    fn read_sea_water_salinity(&self, index_t: usize, index_z: usize) -> Result<Array2<f64>> {
        self.read_slice(SEA_WATER_SALINITY, index_t, index_z)
    }

    fn read_baroclinic_sea_water_velocity(
        &self,
        index_t: usize,
        index_z: usize,
    ) -> Result<VectorField> {
        Ok(VectorField {
            u: self.read_slice(BAROCLINIC_EASTWARD_SEA_WATER_VELOCITY, index_t, index_z)?,
            v: self.read_slice(BAROCLINIC_NORTHWARD_SEA_WATER_VELOCITY, index_t, index_z)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ramp(shape: (usize, usize, usize, usize), offset: f64) -> Array4<f64> {
        Array4::from_shape_fn(shape, |(t, z, y, x)| {
            offset + (t * 1000 + z * 100 + y * 10 + x) as f64
        })
    }

    #[test]
    fn test_variable_names() {
        assert_eq!(
            "sea_water_salinity".parse::<Variable>().unwrap(),
            Variable::SeaWaterSalinity
        );
        assert_eq!(Variable::BaroclinicSeaWaterVelocity.components(), 2);
        assert_eq!(Variable::SeaWaterTemperature.components(), 1);
        assert_eq!(
            Variable::SeaWaterTemperature.to_string(),
            "sea_water_temperature"
        );

        match "sea_surface_height".parse::<Variable>() {
            Err(HaloclineError::VariableName { name }) => assert_eq!(name, "sea_surface_height"),
            other => panic!("Expected VariableName error, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_reader_slices() {
        let reader = MemoryReader::new().with_variable(SEA_WATER_TEMPERATURE, ramp((2, 3, 2, 2), 0.0));

        let slice = reader.read_sea_water_temperature(1, 2).unwrap();
        assert_eq!(slice, ndarray::array![[1200.0, 1201.0], [1210.0, 1211.0]]);

        assert!(matches!(
            reader.read_sea_water_temperature(2, 0),
            Err(HaloclineError::DataNotFound { .. })
        ));
        assert!(matches!(
            reader.read_sea_water_salinity(0, 0),
            Err(HaloclineError::VariableName { .. })
        ));
    }

    #[test]
    fn test_read_variable_components() {
        let reader = MemoryReader::new()
            .with_variable(BAROCLINIC_EASTWARD_SEA_WATER_VELOCITY, ramp((1, 2, 2, 3), 0.0))
            .with_variable(BAROCLINIC_NORTHWARD_SEA_WATER_VELOCITY, ramp((1, 2, 2, 3), 0.5))
            .with_variable(SEA_WATER_SALINITY, ramp((1, 2, 2, 3), 35.0));
        assert!(reader.validate().is_ok());

        let velocity = reader
            .read_variable(Variable::BaroclinicSeaWaterVelocity, 0, 1)
            .unwrap();
        assert_eq!(velocity.shape(), &[2, 2, 3]);
        assert_eq!(velocity[[0, 1, 2]], 112.0);
        assert_eq!(velocity[[1, 1, 2]], 112.5);

        let salinity = reader.read_variable(Variable::SeaWaterSalinity, 0, 0).unwrap();
        assert_eq!(salinity.shape(), &[1, 2, 3]);
    }

    #[test]
    fn test_validate_detects_shape_mismatch() {
        let reader = MemoryReader::new()
            .with_variable(SEA_WATER_TEMPERATURE, Array4::zeros((1, 2, 2, 2)))
            .with_variable(SEA_WATER_SALINITY, Array4::zeros((1, 3, 2, 2)));
        assert!(reader.validate().is_err());
    }

    #[test]
    fn test_vector_field_round_trip_shape() {
        let field = VectorField {
            u: Array2::zeros((2, 3)),
            v: Array2::ones((2, 3)),
        };
        let stacked = field.clone().into_components().unwrap();
        assert_eq!(stacked.shape(), &[2, 2, 3]);
        assert_eq!(VectorField::from_components(stacked).unwrap(), field);
        assert!(VectorField::from_components(Array3::zeros((1, 2, 3))).is_err());
    }
}

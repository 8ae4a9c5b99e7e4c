//! Configuration types for the occupancy grid.

use crate::core::WorldPoint;
use serde::{Deserialize, Serialize};

/// Grid configuration.
///
/// Geometry is fixed for the lifetime of the grid it constructs: dimensions,
/// resolution and origin never change after construction, only cell content
/// does.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Extent of the volume in meters along each axis
    pub dimensions: WorldPoint,

    /// Meters per cell edge (e.g., 0.02 = 2cm voxels)
    pub resolution: f32,

    /// World coordinates of the cell (0, 0, 0) center
    pub origin: WorldPoint,

    /// Propagation cutoff in meters. Distances beyond this are reported as
    /// exactly this value.
    pub max_distance: f32,

    /// Name of the coordinate frame the grid's world coordinates live in.
    /// Carried for bookkeeping, never interpreted numerically.
    pub reference_frame: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dimensions: WorldPoint::new(3.0, 3.0, 3.0),
            resolution: 0.02,
            origin: WorldPoint::new(-0.75, -1.25, -1.0),
            max_distance: 0.2,
            reference_frame: "map".to_string(),
        }
    }
}

impl GridConfig {
    /// Create a configuration for a volume of the given size centered at the
    /// world origin
    pub fn centered(dimensions: WorldPoint, resolution: f32) -> Self {
        Self {
            dimensions,
            resolution,
            origin: dimensions * -0.5,
            ..Default::default()
        }
    }

    /// Cell count along each axis: `ceil(dimension / resolution)`
    pub fn num_cells(&self) -> [usize; 3] {
        [
            (self.dimensions.x / self.resolution).ceil() as usize,
            (self.dimensions.y / self.resolution).ceil() as usize,
            (self.dimensions.z / self.resolution).ceil() as usize,
        ]
    }

    /// Validate the configuration.
    ///
    /// A non-positive resolution or a dimension yielding zero cells along any
    /// axis is a construction-time error, never an insertion-time one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.resolution > 0.0) || !self.resolution.is_finite() {
            return Err(ConfigError::NonPositiveResolution {
                resolution: self.resolution,
            });
        }
        let dims = [
            ('x', self.dimensions.x),
            ('y', self.dimensions.y),
            ('z', self.dimensions.z),
        ];
        for (axis, dimension) in dims {
            if !(dimension > 0.0) || (dimension / self.resolution).ceil() < 1.0 {
                return Err(ConfigError::EmptyAxis { axis, dimension });
            }
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration error type.
///
/// All variants are fatal at construction time; the grid never starts with
/// an invalid geometry.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// File I/O error
    Io(String),
    /// YAML parsing error
    Parse(String),
    /// Resolution is zero, negative, or non-finite
    NonPositiveResolution {
        /// The offending resolution value
        resolution: f32,
    },
    /// A dimension produces zero cells along one axis
    EmptyAxis {
        /// Axis name ('x', 'y' or 'z')
        axis: char,
        /// The offending dimension value in meters
        dimension: f32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::NonPositiveResolution { resolution } => {
                write!(f, "Resolution must be positive, got {}", resolution)
            }
            ConfigError::EmptyAxis { axis, dimension } => {
                write!(f, "Dimension {} = {}m yields zero cells", axis, dimension)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

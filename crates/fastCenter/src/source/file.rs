//! Flat binary cloud files.
//!
//! ## Purpose
//!
//! Persists a cloud as a headerless sequence of native-endian `f64` values,
//! three per point, and loads it back with a sanity check on every coordinate.
//!
//! ## Invariants
//!
//! * An empty file, or one whose length is not a multiple of 24 bytes, is corrupt.
//! * A loaded coordinate that is NaN or outside `[0, 1]` is corrupt.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::primitives::cloud::DIMENSIONS;
use crate::primitives::errors::CenterError;
use crate::source::generate::generate_uniform;
use crate::source::PointCloudSource;

/// Size of one serialized point in bytes.
pub const POINT_BYTES: usize = DIMENSIONS * std::mem::size_of::<f64>();

/// Write flat coordinates to `path`, replacing any existing file.
pub fn save_cloud(path: &Path, coords: &[f64]) -> Result<(), CenterError> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(bytemuck::cast_slice(coords))?;
    out.flush()?;
    Ok(())
}

/// Read flat coordinates from `path`.
///
/// Only the file length is checked here; see [`validate_unit_bounds`]. A
/// file with no points is rejected like a truncated one.
pub fn load_cloud(path: &Path) -> Result<Vec<f64>, CenterError> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() || bytes.len() % POINT_BYTES != 0 {
        return Err(CenterError::TruncatedCloud {
            len: bytes.len(),
            point_size: POINT_BYTES,
        });
    }
    Ok(bytemuck::pod_collect_to_vec::<u8, f64>(&bytes))
}

/// Check that every coordinate is a number inside `[0, 1]`.
pub fn validate_unit_bounds(coords: &[f64]) -> Result<(), CenterError> {
    match coords.iter().position(|v| !(0.0..=1.0).contains(v)) {
        Some(pos) => Err(CenterError::CorruptData {
            index: pos / DIMENSIONS,
            axis: pos % DIMENSIONS,
            value: coords[pos],
        }),
        None => Ok(()),
    }
}

/// Uniform cloud cached in a flat binary file.
///
/// The first call generates `count` points and writes them to `path`; later
/// calls load and validate the file instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedCloudSource {
    path: PathBuf,
    count: usize,
    seed: u64,
}

impl CachedCloudSource {
    /// Cache `count` generated points at `path`, seeded with 0.
    pub fn new(path: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            path: path.into(),
            count,
            seed: 0,
        }
    }

    /// Set the generator seed used when the cache is missing.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl PointCloudSource for CachedCloudSource {
    fn points(&self) -> Result<Vec<f64>, CenterError> {
        if self.path.exists() {
            info!(path = %self.path.display(), "cloud exists");
            let coords = load_cloud(&self.path)?;
            validate_unit_bounds(&coords)?;
            info!("sanity check succeeded");

            let loaded = coords.len() / DIMENSIONS;
            if loaded != self.count {
                warn!(
                    expected = self.count,
                    loaded, "cached cloud size differs from requested size, using cache"
                );
            }
            return Ok(coords);
        }

        if self.count == 0 {
            return Err(CenterError::InvalidInput(
                "cannot create an empty cloud cache".to_string(),
            ));
        }

        info!(
            path = %self.path.display(),
            points = self.count,
            seed = self.seed,
            "cloud does not exist, creating it"
        );
        let coords = generate_uniform(self.count, self.seed);
        save_cloud(&self.path, &coords)?;
        Ok(coords)
    }
}

//! Snapshot and character ROM loading.
//!
//! Both assets are raw binary files with a fixed size. Short files are an
//! error; long files are accepted with a warning and truncated by the
//! library types.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use c64_raster::charset::CHARSET_SIZE;
use c64_raster::snapshot::SNAPSHOT_SIZE;
use c64_raster::{GlyphStore, ImageSizeError, Snapshot};
use log::{info, warn};

/// Character ROM file name inside the `roms/` directory.
pub const CHARGEN_FILE: &str = "chargen.rom";

/// Why an asset could not be loaded.
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be read.
    Missing {
        what: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// The file is shorter than the asset's fixed size.
    Truncated {
        what: &'static str,
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl AssetError {
    fn truncated(path: &Path, err: ImageSizeError) -> Self {
        Self::Truncated {
            what: err.what,
            path: path.to_path_buf(),
            expected: err.expected,
            actual: err.actual,
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { what, path, source } => {
                write!(f, "cannot read {what} at {}: {source}", path.display())
            }
            Self::Truncated {
                what,
                path,
                expected,
                actual,
            } => write!(
                f,
                "{what} at {} is {actual} bytes, expected {expected}",
                path.display()
            ),
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing { source, .. } => Some(source),
            Self::Truncated { .. } => None,
        }
    }
}

fn read_asset(path: &Path, what: &'static str, expected: usize) -> Result<Vec<u8>, AssetError> {
    let data = std::fs::read(path).map_err(|source| AssetError::Missing {
        what,
        path: path.to_path_buf(),
        source,
    })?;
    if data.len() > expected {
        warn!(
            "{what} at {} is {} bytes, using the first {expected}",
            path.display(),
            data.len()
        );
    }
    Ok(data)
}

/// Load a memory snapshot.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, AssetError> {
    let data = read_asset(path, "snapshot", SNAPSHOT_SIZE)?;
    let snapshot = Snapshot::from_bytes(data).map_err(|e| AssetError::truncated(path, e))?;
    info!("Loaded snapshot: {}", path.display());
    Ok(snapshot)
}

/// Load a character ROM.
pub fn load_glyphs(path: &Path) -> Result<GlyphStore, AssetError> {
    let data = read_asset(path, "character ROM", CHARSET_SIZE)?;
    let glyphs = GlyphStore::from_bytes(data).map_err(|e| AssetError::truncated(path, e))?;
    info!("Loaded character ROM: {}", path.display());
    Ok(glyphs)
}

/// Find the roms/ directory relative to the executable or current directory.
#[must_use]
pub fn find_roms_dir() -> PathBuf {
    // Walk up from target/debug or target/release to the workspace root
    if let Ok(exe) = std::env::current_exe() {
        let mut dir = exe.parent().map(Path::to_path_buf);
        for _ in 0..5 {
            let Some(d) = dir else { break };
            let roms = d.join("roms");
            if roms.is_dir() {
                return roms;
            }
            dir = d.parent().map(Path::to_path_buf);
        }
    }
    PathBuf::from("roms")
}

/// Default character ROM location.
#[must_use]
pub fn default_font_path() -> PathBuf {
    find_roms_dir().join(CHARGEN_FILE)
}

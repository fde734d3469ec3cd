//! Session persistence as JSON.

use std::error::Error;
use std::fs;
use std::path::Path;

use c64_raster::Session;
use log::info;

/// Load a session. Missing fields take their defaults and out-of-range
/// values are masked back into range.
pub fn load_session(path: &Path) -> Result<Session, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let session: Session = serde_json::from_str(&text)?;
    info!("Loaded session: {}", path.display());
    Ok(session.normalized())
}

/// Save a session as pretty-printed JSON.
pub fn save_session(session: &Session, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, json + "\n")?;
    info!("Session saved to {}", path.display());
    Ok(())
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::CatalogError;

/// Opens a catalog file for line-by-line reading.
///
/// The handle is owned by the returned reader and closed when it drops,
/// whichever way the load ends.
pub fn open_source(path: &Path) -> Result<BufReader<File>, CatalogError> {
    let file = File::open(path).map_err(|e| {
        log::warn!("Failed to open catalog {:?}: {e}", path);
        CatalogError::SourceUnavailable(e)
    })?;
    log::debug!("Opened catalog {:?}", path);
    Ok(BufReader::new(file))
}

//! Catalog writer
//!
//! Serializes a [`Catalog`] to JSON and puts it at the output path. The
//! document is written to a temporary file next to the destination and
//! renamed over it, so readers see either the old file or the complete new one.
//! A replaced file keeps its permissions; a new one gets 0644 less the umask.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Catalog;

/// Canonical text form of a catalog.
pub fn catalog_to_json(catalog: &Catalog) -> CatalogResult<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Write `catalog` to `path`, replacing any existing file.
pub fn write_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> CatalogResult<()> {
    let path = path.as_ref();
    let json = catalog_to_json(catalog)?;

    let write_err = |source: std::io::Error| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".catalog-").suffix(".json.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

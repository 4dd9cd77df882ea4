pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod matching;
pub mod report;
pub mod util;
pub mod verdict;

use std::path::Path;

use tracing::info_span;

use crate::catalog::SignatureCatalog;
use crate::config::InspectConfig;
use crate::error::{InspectError, ReadError};
use crate::io::artifact;
use crate::io::window::{FileWindows, SliceWindows};
use crate::report::model::{ArtifactInfo, CatalogInfo, Report, ToolInfo};
use crate::verdict::extension::observed_extension;

pub const TOOL_NAME: &str = "sigil";

/// JSON schema version of sigil reports.
/// Bump only when the report shape changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Inspect a file on disk against an already loaded catalog.
pub fn inspect(
    path: &Path,
    catalog: &SignatureCatalog,
    config: &InspectConfig,
    tool: ToolInfo,
) -> Result<Report, ReadError> {
    let path_str = path.display().to_string();
    let _span = info_span!("inspect", file = %path_str).entered();

    let windows = FileWindows::open(path)?;
    let assessments = matching::evaluate(&windows, catalog.signatures())?;
    let verdict = verdict::derive_verdict(&path_str, &observed_extension(&path_str), assessments);

    let artifact = if config.hash_artifact {
        artifact::fingerprint(windows.path())?.into_artifact(Some(path_str))
    } else {
        ArtifactInfo {
            path: Some(path_str),
            size_bytes: windows.size(),
            hash: None,
        }
    };

    Ok(Report::new(tool, artifact, CatalogInfo::from(catalog), verdict))
}

/// Load the catalog at `catalog_path`, then inspect `path` with it.
///
/// The catalog is loaded first so a broken catalog is reported even when
/// the target is also unreadable.
pub fn inspect_with(
    path: &Path,
    catalog_path: &Path,
    config: &InspectConfig,
    tool: ToolInfo,
) -> Result<Report, InspectError> {
    let catalog = catalog::load_catalog(catalog_path, config)?;
    Ok(inspect(path, &catalog, config, tool)?)
}

/// Inspect an in-memory buffer. `identity` stands in for the file path and
/// supplies the observed extension.
pub fn inspect_bytes(
    identity: &str,
    bytes: &[u8],
    catalog: &SignatureCatalog,
    config: &InspectConfig,
    tool: ToolInfo,
) -> Result<Report, ReadError> {
    let windows = SliceWindows::new(identity, bytes);
    let assessments = matching::evaluate(&windows, catalog.signatures())?;
    let verdict = verdict::derive_verdict(identity, &observed_extension(identity), assessments);

    let artifact = if config.hash_artifact {
        artifact::fingerprint_bytes(bytes).into_artifact(Some(identity.to_string()))
    } else {
        ArtifactInfo {
            path: Some(identity.to_string()),
            size_bytes: bytes.len() as u64,
            hash: None,
        }
    };

    Ok(Report::new(tool, artifact, CatalogInfo::from(catalog), verdict))
}

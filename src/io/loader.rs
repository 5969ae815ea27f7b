//! Alternate tabular input: adjust a pre-computed association table
//!
//! Intended contract: a delimited text file with a header line naming
//! chromosome / position / identifier / reference / alternate / test-name /
//! p-value columns (identifier and p-value mandatory), loaded into the same
//! record tables the primary path consumes and pushed through the same
//! engine. Header parsing failures map to `MalformedInput` (with the line
//! number) and a header missing the mandatory columns to
//! `InconsistentInput`.
//!
//! The loader is a placeholder: it fails with a definitive status and no
//! partial side effects.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::AdjustConfig;
use crate::error::{AdjustError, Result};

/// Input description for the tabular format. Each column-name override
/// falls back to the conventional header names when `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssocFileSpec {
    pub path: PathBuf,
    /// Defaults: `CHROM`, `CHR`.
    pub chrom_field: Option<String>,
    /// Defaults: `POS`, `BP`.
    pub pos_field: Option<String>,
    /// Defaults: `ID`, `SNP`.
    pub id_field: Option<String>,
    /// Defaults: `REF`, `A2`.
    pub ref_field: Option<String>,
    /// Defaults: `ALT`, `ALT1`, `A1`.
    pub alt_field: Option<String>,
    /// Default: `TEST`.
    pub test_field: Option<String>,
    /// Default: `P`.
    pub p_field: Option<String>,
}

/// Adjust an external association table.
///
/// Not yet implemented: returns [`AdjustError::NotYetSupported`] without
/// touching the filesystem.
pub fn load_and_adjust(
    _file: &AssocFileSpec,
    _config: &AdjustConfig,
    _out_prefix: &Path,
) -> Result<u64> {
    Err(AdjustError::NotYetSupported {
        feature: "adjusting a pre-computed association file",
    })
}

//! padjust: multiple-testing correction for association scan results
//!
//! Given per-variant association statistics at genome-wide scale
//! (chi-square and/or p-value per test), this crate derives a consistent
//! (chi-square, p-value) pair per test, ranks the tests, applies
//! genomic-control inflation correction, computes the requested adjustment
//! families (Bonferroni, Holm step-down, Šidák single-step and step-down,
//! Benjamini-Hochberg, Benjamini-Yekutieli), and streams a sorted,
//! filtered report table.
//!
//! # Example
//!
//! ```ignore
//! use padjust::prelude::*;
//! use std::path::Path;
//!
//! let stats = AssocStats {
//!     included: &included,
//!     chi_sqs: Some(&chi_sqs),
//!     p_values: None,
//! };
//! let rows = adjusted_report(&stats, &metadata, &AdjustConfig::default(), Path::new("scan"))?;
//! ```

pub mod config;
pub mod correction;
pub mod data;
pub mod error;
pub mod io;
pub mod stats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adjusted_report;
    pub use crate::config::{AdjustConfig, ColumnSet};
    pub use crate::correction::{sort_by_significance, CorrectionVectors};
    pub use crate::data::{collect_valid, AssocStats, TestRecord, VariantMetadata};
    pub use crate::error::{AdjustError, Result};
    pub use crate::io::{load_and_adjust, AssocFileSpec};
}

use std::path::Path;

use crate::config::AdjustConfig;
use crate::correction::genomic_control;
use crate::data::{AssocStats, VariantMetadata};
use crate::error::Result;
use crate::io::report::{self, ReportInput};
use crate::io::writer::TableWriter;

/// Run the full correction pipeline and write `<out_prefix>.adjusted`
/// (`.adjusted.gz` when compressing).
///
/// Returns the number of rows written, which reflects the p-value filter
/// rather than the correction denominator. Zero valid tests is not an
/// error: a notice is logged and no file is created.
pub fn adjusted_report(
    stats_in: &AssocStats<'_>,
    metadata: &VariantMetadata,
    config: &AdjustConfig,
    out_prefix: &Path,
) -> Result<u64> {
    let mut records = data::collect_valid(stats_in)?;
    if records.is_empty() {
        log::info!("Zero valid tests; adjustment skipped.");
        return Ok(0);
    }
    correction::sort_by_significance(&mut records);

    let unadj_p: Vec<f64> = records.iter().map(|r| r.p).collect();
    let gc_p = if config.skip_gc {
        None
    } else {
        let recip = genomic_control::lambda_recip(&records, config.lambda);
        Some(genomic_control::adjusted_p_values(&records, recip))
    };

    // the substitution decision: which p-sequence feeds every family
    let primary_p: &[f64] = match (&gc_p, config.gc_corrected_input) {
        (Some(gc), true) => gc,
        _ => &unadj_p,
    };

    let vectors = correction::compute_selected(primary_p, config);

    let mut writer = TableWriter::create(out_prefix, config.compress)?;
    let input = ReportInput {
        sorted: &records,
        primary_p,
        unadj_p: &unadj_p,
        gc_p: gc_p.as_deref(),
        vectors: &vectors,
    };
    let rows = report::stream(&mut writer, &input, metadata, config)?;
    let out_path = writer.path().to_path_buf();
    writer.finish()?;
    log::info!(
        "Adjusted values ({} row{}) written to {}.",
        rows,
        if rows == 1 { "" } else { "s" },
        out_path.display()
    );
    Ok(rows)
}

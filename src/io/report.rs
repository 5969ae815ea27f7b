//! Report streaming: column layout, value formatting, filtering
//!
//! One header line, then one row per record in ascending primary-p order.
//! Because the records are sorted, the p-value filter can stop the scan at
//! the first failing row instead of inspecting the remainder.

use crate::config::AdjustConfig;
use crate::correction::CorrectionVectors;
use crate::data::{TestRecord, VariantMetadata};
use crate::error::{AdjustError, Result};
use crate::io::writer::TableWriter;

/// Everything the streamer consumes: sorted records, the p-value vectors,
/// and the per-family adjustments aligned to them.
pub struct ReportInput<'a> {
    pub sorted: &'a [TestRecord],
    /// Primary ascending p-sequence after the GC substitution decision.
    pub primary_p: &'a [f64],
    /// Raw p-values in sorted order.
    pub unadj_p: &'a [f64],
    /// GC-adjusted p-values, absent when genomic control was skipped.
    pub gc_p: Option<&'a [f64]>,
    pub vectors: &'a CorrectionVectors,
}

/// Shortest-form value formatting with six significant digits, in the
/// style of printf `%g`.
fn fmt_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let exp = value.abs().log10().floor() as i32;
    if !(-4..=5).contains(&exp) {
        let formatted = format!("{:.5e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mantissa, exponent)
            }
            None => formatted,
        }
    } else {
        let decimals = (5 - exp).max(0) as usize;
        let formatted = format!("{:.*}", decimals, value);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}

/// The clipped-value token, computed once per invocation and reused for
/// every cell at or below the display floor.
fn floor_token(config: &AdjustConfig) -> String {
    if !config.log10 {
        fmt_g(config.output_min_p)
    } else if config.output_min_p > 0.0 {
        fmt_g(-config.output_min_p.log10())
    } else {
        "inf".to_string()
    }
}

/// Append one p-like cell: floor substitution, then the optional -log10
/// transform.
fn push_p(row: &mut String, value: f64, config: &AdjustConfig, token: &str) {
    row.push('\t');
    if value <= config.output_min_p {
        row.push_str(token);
    } else if config.log10 {
        row.push_str(&fmt_g(-value.log10()));
    } else {
        row.push_str(&fmt_g(value));
    }
}

fn header_line(input: &ReportInput<'_>, config: &AdjustConfig) -> String {
    let cols = &config.columns;
    let mut header = String::from("#");
    if cols.chrom {
        header.push_str("CHROM\t");
    }
    if cols.pos {
        header.push_str("POS\t");
    }
    header.push_str("ID");
    if cols.ref_allele {
        header.push_str("\tREF");
    }
    if cols.alt1 {
        header.push_str("\tALT1");
    }
    if cols.alt {
        header.push_str("\tALT");
    }
    if cols.unadj {
        header.push_str("\tUNADJ");
    }
    if cols.gc && input.gc_p.is_some() {
        header.push_str("\tGC");
    }
    if input.vectors.qq.is_some() {
        header.push_str("\tQQ");
    }
    if input.vectors.bonferroni.is_some() {
        header.push_str("\tBONF");
    }
    if input.vectors.holm.is_some() {
        header.push_str("\tHOLM");
    }
    if input.vectors.sidak_single_step.is_some() {
        header.push_str("\tSIDAK_SS");
    }
    if input.vectors.sidak_step_down.is_some() {
        header.push_str("\tSIDAK_SD");
    }
    if input.vectors.fdr_bh.is_some() {
        header.push_str("\tFDR_BH");
    }
    if input.vectors.fdr_by.is_some() {
        header.push_str("\tFDR_BY");
    }
    header
}

fn check_metadata(metadata: &VariantMetadata, config: &AdjustConfig) -> Result<()> {
    let cols = &config.columns;
    if cols.chrom && metadata.chroms.is_none() {
        return Err(AdjustError::InconsistentInput {
            reason: "CHROM column requested but no chromosome names supplied".to_string(),
        });
    }
    if cols.pos && metadata.positions.is_none() {
        return Err(AdjustError::InconsistentInput {
            reason: "POS column requested but no positions supplied".to_string(),
        });
    }
    if (cols.ref_allele || cols.alt1 || cols.alt) && metadata.alleles.is_empty() {
        return Err(AdjustError::InconsistentInput {
            reason: "allele column requested but no allele storage supplied".to_string(),
        });
    }
    Ok(())
}

/// Stream the report: header, then one row per record with primary p at or
/// below the filter threshold. Returns the number of rows written.
pub fn stream(
    writer: &mut TableWriter,
    input: &ReportInput<'_>,
    metadata: &VariantMetadata,
    config: &AdjustConfig,
) -> Result<u64> {
    check_metadata(metadata, config)?;
    writer.write_line(&header_line(input, config))?;

    let cols = &config.columns;
    let token = floor_token(config);
    let mut rows_written = 0u64;
    let mut row = String::new();

    for (i, record) in input.sorted.iter().enumerate() {
        if input.primary_p[i] > config.p_filter {
            // ascending order: every remaining row fails the filter too
            break;
        }
        row.clear();
        let uidx = record.variant_idx;
        if let Some(chroms) = &metadata.chroms {
            if cols.chrom {
                row.push_str(&chroms[uidx as usize]);
                row.push('\t');
            }
        }
        if let Some(positions) = &metadata.positions {
            if cols.pos {
                row.push_str(&positions[uidx as usize].to_string());
                row.push('\t');
            }
        }
        row.push_str(metadata.id_of(uidx));
        if cols.ref_allele || cols.alt1 || cols.alt {
            let alleles = metadata.alleles_of(uidx);
            if cols.ref_allele {
                row.push('\t');
                row.push_str(&alleles[0]);
            }
            if cols.alt1 {
                row.push('\t');
                row.push_str(&alleles[1]);
            }
            if cols.alt {
                row.push('\t');
                row.push_str(&alleles[1..].join(","));
            }
        }
        if cols.unadj {
            push_p(&mut row, input.unadj_p[i], config, &token);
        }
        if let Some(gc_p) = input.gc_p {
            if cols.gc {
                push_p(&mut row, gc_p[i], config, &token);
            }
        }
        // QQ is a rank diagnostic, not a p-value: no floor, no transform
        if let Some(v) = &input.vectors.qq {
            row.push('\t');
            row.push_str(&fmt_g(v[i]));
        }
        if let Some(v) = &input.vectors.bonferroni {
            push_p(&mut row, v[i], config, &token);
        }
        if let Some(v) = &input.vectors.holm {
            push_p(&mut row, v[i], config, &token);
        }
        if let Some(v) = &input.vectors.sidak_single_step {
            push_p(&mut row, v[i], config, &token);
        }
        if let Some(v) = &input.vectors.sidak_step_down {
            push_p(&mut row, v[i], config, &token);
        }
        if let Some(v) = &input.vectors.fdr_bh {
            push_p(&mut row, v[i], config, &token);
        }
        if let Some(v) = &input.vectors.fdr_by {
            push_p(&mut row, v[i], config, &token);
        }
        writer.write_line(&row)?;
        rows_written += 1;
    }
    Ok(rows_written)
}

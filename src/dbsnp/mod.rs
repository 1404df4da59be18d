//! Streaming reducer over the gzip-compressed dbSNP gene annotation table.

pub mod annotation;
pub mod row;

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use flate2::read::MultiGzDecoder;

use crate::config::ReductionMode;
use crate::error::Error;
use crate::identifier::RsId;
use crate::membership::MembershipSet;
use crate::progress::Progress;
use crate::region::RegionClass;

use annotation::{IdentifierAnnotation, update};
use row::{ParsedRow, SkipReason};

/// Number of rows between progress updates.
pub const PROGRESS_INTERVAL: u64 = 1 << 18;

/// Accumulated annotations keyed by rs identifier.
pub type AnnotationMap = HashMap<RsId, IdentifierAnnotation>;

/// Row counts gathered during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub rows: u64,
    pub skipped_no_gene_link: u64,
    pub skipped_alt_contig: u64,
    pub not_in_list: u64,
    pub matched: u64,
    /// Matched rows whose gene code has no region class (rule mode only).
    pub unmapped_code: u64,
}

/// Output of a full table scan.
#[derive(Debug, Default)]
pub struct Reduction {
    pub annotations: AnnotationMap,
    pub stats: ScanStats,
}

impl Reduction {
    /// Number of identifiers that will produce at least one output record.
    #[must_use]
    pub fn num_annotated(&self) -> usize {
        self.annotations.values().filter(|a| !a.is_empty()).count()
    }
}

/// Reduce a gzip-compressed dbSNP table. Concatenated gzip members are read in sequence.
pub fn reduce_dbsnp_gz<R: Read>(
    reader: R,
    membership: &MembershipSet,
    mode: ReductionMode,
    progress: &mut dyn Progress,
) -> Result<Reduction, Error> {
    let decoder = MultiGzDecoder::new(reader);
    let buf_reader = BufReader::new(decoder);
    reduce_dbsnp(buf_reader, membership, mode, progress)
}

/// Reduce an uncompressed dbSNP table from a buffered reader.
///
/// Every row is consumed: a later row can still raise an identifier's best class.
pub fn reduce_dbsnp<R: BufRead>(
    mut reader: R,
    membership: &MembershipSet,
    mode: ReductionMode,
    progress: &mut dyn Progress,
) -> Result<Reduction, Error> {
    let mut annotations = AnnotationMap::with_capacity(membership.len());
    let mut stats = ScanStats::default();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_num: u64 = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;
        let line = strip_line_end(&buf);
        stats.rows += 1;
        if stats.rows % PROGRESS_INTERVAL == 0 {
            progress.update(stats.rows);
        }

        let parsed = row::parse_line(line).map_err(|e| with_line(e, line_num, line))?;
        let keyed = match parsed {
            ParsedRow::Skipped(SkipReason::NoGeneLink) => {
                stats.skipped_no_gene_link += 1;
                continue;
            }
            ParsedRow::Skipped(SkipReason::AltContig) => {
                stats.skipped_alt_contig += 1;
                continue;
            }
            ParsedRow::Keyed(keyed) => keyed,
        };

        if !membership.contains(keyed.rs_id) {
            stats.not_in_list += 1;
            continue;
        }

        let candidate = keyed
            .candidate()
            .map_err(|e| with_line(e, line_num, line))?;
        stats.matched += 1;
        if mode == ReductionMode::Rule && RegionClass::from_gene_code(candidate.gene_code).is_none()
        {
            stats.unmapped_code += 1;
        }

        let slot = annotations.entry(keyed.rs_id).or_default();
        *slot = update(std::mem::take(slot), &candidate, mode);
    }

    progress.finish(stats.rows);
    Ok(Reduction { annotations, stats })
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_end(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn with_line(error: Error, line_num: u64, line: &[u8]) -> Error {
    let context = format!(
        "(dbSNP line {line_num}: {})",
        String::from_utf8_lossy(line)
    );
    match error {
        Error::Parse(msg) => Error::Parse(format!("{msg} {context}")),
        Error::Format(msg) => Error::Format(format!("{msg} {context}")),
        other => other,
    }
}

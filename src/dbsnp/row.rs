//! dbSNP annotation table row parser.
//!
//! Rows are handled as raw bytes. Only the columns a row actually needs are
//! decoded, so stray non-UTF-8 bytes in unrelated rows or columns are harmless.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;
use crate::identifier::RsId;

const RS_ID_COLUMN: usize = 0;
const CONTIG_COLUMN: usize = 1;
const GENE_ID_COLUMN: usize = 5;
const GENE_NAME_COLUMN: usize = 6;
const GENE_CODE_COLUMN: usize = 11;

/// Columns needed to decide whether a row is skipped.
const MIN_KEYED_COLUMNS: usize = GENE_NAME_COLUMN + 1;
/// Columns needed to build a gene candidate.
const MIN_CANDIDATE_COLUMNS: usize = GENE_CODE_COLUMN + 1;

/// RefSeq accession prefix for unplaced and alternate contigs.
pub const ALT_CONTIG_PREFIX: &[u8] = b"NW_";

/// Why a row was excluded before its identifier was looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Gene ID or gene name column is empty (also used for blank lines).
    NoGeneLink,
    /// The row is placed on an unplaced or alternate contig.
    AltContig,
}

/// Result of parsing a single table row.
#[derive(Debug)]
pub enum ParsedRow<'a> {
    Skipped(SkipReason),
    Keyed(KeyedRow<'a>),
}

/// A row with a parsed identifier whose gene columns have not been parsed yet.
///
/// Gene ID, name and code are only decoded once the identifier is known to
/// be wanted, so malformed values on irrelevant rows are never rejected.
#[derive(Debug)]
pub struct KeyedRow<'a> {
    pub rs_id: RsId,
    columns: Vec<&'a [u8]>,
}

/// One candidate gene annotation for an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneCandidate<'a> {
    pub gene_id: u32,
    pub gene_name: &'a str,
    pub gene_code: u8,
}

/// Parse the skip-relevant columns and the identifier of a single row.
///
/// `line` must not include its line terminator.
pub fn parse_line(line: &[u8]) -> Result<ParsedRow<'_>, Error> {
    if line.trim_ascii().is_empty() {
        return Ok(ParsedRow::Skipped(SkipReason::NoGeneLink));
    }

    let columns: Vec<&[u8]> = line.split(|&b| b == b'\t').collect();
    if columns.len() < MIN_KEYED_COLUMNS {
        return Err(Error::Format(format!(
            "dbSNP row has {} columns, expected at least {MIN_KEYED_COLUMNS}",
            columns.len()
        )));
    }

    if columns[GENE_ID_COLUMN].is_empty() || columns[GENE_NAME_COLUMN].is_empty() {
        return Ok(ParsedRow::Skipped(SkipReason::NoGeneLink));
    }
    if columns[CONTIG_COLUMN].starts_with(ALT_CONTIG_PREFIX) {
        return Ok(ParsedRow::Skipped(SkipReason::AltContig));
    }

    let rs_id = RsId::parse_bare(column_str(columns[RS_ID_COLUMN], "rs identifier")?)?;
    Ok(ParsedRow::Keyed(KeyedRow { rs_id, columns }))
}

impl<'a> KeyedRow<'a> {
    /// Parse the gene ID, gene name and gene function code columns.
    pub fn candidate(&self) -> Result<GeneCandidate<'a>, Error> {
        if self.columns.len() < MIN_CANDIDATE_COLUMNS {
            return Err(Error::Format(format!(
                "dbSNP row for rs{} has {} columns, expected at least {MIN_CANDIDATE_COLUMNS}",
                self.rs_id,
                self.columns.len()
            )));
        }

        let gene_id: u32 = parse_digits(
            column_str(self.columns[GENE_ID_COLUMN], "gene ID")?,
            "gene ID",
        )?;
        let gene_name = column_str(self.columns[GENE_NAME_COLUMN], "gene name")?;
        let gene_code = parse_gene_code(column_str(
            self.columns[GENE_CODE_COLUMN],
            "gene function code",
        )?)?;

        Ok(GeneCandidate {
            gene_id,
            gene_name,
            gene_code,
        })
    }
}

/// Decode one column as UTF-8.
fn column_str<'a>(bytes: &'a [u8], what: &str) -> Result<&'a str, Error> {
    std::str::from_utf8(bytes).map_err(|e| {
        Error::Parse(format!(
            "invalid {what} '{}': {e}",
            String::from_utf8_lossy(bytes)
        ))
    })
}

/// Parse an unsigned base-10 number made of ASCII digits only (no sign).
fn parse_digits<T>(s: &str, what: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(format!(
            "invalid {what} '{s}': expected decimal digits"
        )));
    }
    s.parse()
        .map_err(|e| Error::Parse(format!("invalid {what} '{s}': {e}")))
}

/// Parse a gene function code.
///
/// Numbers above 255 saturate to 255, which has no region class. Anything
/// that is not an unsigned integer is an error.
fn parse_gene_code(s: &str) -> Result<u8, Error> {
    let code: u64 = parse_digits(s, "gene function code")?;
    Ok(u8::try_from(code).unwrap_or(u8::MAX))
}

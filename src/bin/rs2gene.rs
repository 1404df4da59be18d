use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use rsgene::cli;
use rsgene::config::{ConfigFile, ReductionMode, RunConfig};
use rsgene::dbsnp;
use rsgene::emit;
use rsgene::membership::MembershipSet;
use rsgene::perf;
use rsgene::progress::StderrCounter;

#[derive(Parser)]
#[command(
    name = "rs2gene",
    version,
    about = "Map rs identifiers to their highest-priority gene annotation in a dbSNP table"
)]
struct Cli {
    /// Gzip-compressed dbSNP gene annotation table [default: DBSNP.GZ]
    #[arg(long = "db")]
    db: Option<PathBuf>,

    /// File with one rs identifier per line [default: RSLIST.TXT]
    #[arg(long = "rs")]
    rs: Option<PathBuf>,

    /// Keep every gene name instead of applying the gene priority rules
    #[arg(long = "no-rule", visible_alias = "nr")]
    no_rule: bool,

    /// Optional JSON file with db, rs and noRule settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();

    cli::banner("rs identifier to gene mapping");

    let config_file = cli_args
        .config
        .as_deref()
        .map(ConfigFile::from_file)
        .transpose()?;
    let config = RunConfig::resolve(cli_args.db, cli_args.rs, cli_args.no_rule, config_file);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let num_records = run(&config, &mut writer)?;

    cli::print_summary(start, num_records);
    Ok(())
}

/// Load the rs list, scan dbSNP and write result rows to `out`.
///
/// Only result rows go to `out`; progress and counts are reported on stderr.
fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<usize> {
    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    config.validate()?;
    cli::kv("dbSNP", &config.db_path.display().to_string());
    cli::kv("rs list", &config.rs_path.display().to_string());
    cli::kv(
        "Gene rules",
        match config.mode {
            ReductionMode::Rule => "priority (coding > intron > UTR > upstream)",
            ReductionMode::NoRule => "off (all gene names kept)",
        },
    );

    eprintln!();

    // ── rs List ──────────────────────────────────────────
    cli::section("rs List");

    let membership = MembershipSet::from_file(&config.rs_path)
        .with_context(|| format!("failed to load rs list: {}", config.rs_path.display()))?;
    cli::count("Identifiers", membership.len() as u64);
    if membership.is_empty() {
        cli::warning("rs list is empty, no rows will be written");
    }

    eprintln!();

    // ── dbSNP Scan ───────────────────────────────────────
    cli::section("dbSNP Scan");

    let scan_start = Instant::now();
    let db_file = File::open(&config.db_path)
        .with_context(|| format!("failed to open dbSNP: {}", config.db_path.display()))?;
    let mut progress = StderrCounter::new("Rows scanned");
    let reduction = dbsnp::reduce_dbsnp_gz(db_file, &membership, config.mode, &mut progress)
        .with_context(|| format!("failed to scan dbSNP: {}", config.db_path.display()))?;

    let stats = &reduction.stats;
    cli::kv(
        "Throughput",
        &perf::format_rate(stats.rows, scan_start.elapsed(), "rows"),
    );
    cli::count("No gene link", stats.skipped_no_gene_link);
    cli::count("Alternate contig", stats.skipped_alt_contig);
    cli::count("Not in rs list", stats.not_in_list);
    cli::count("Matched", stats.matched);
    if config.mode == ReductionMode::Rule {
        cli::count("Unranked gene code", stats.unmapped_code);
    }

    let num_annotated = reduction.num_annotated();
    let num_missing = membership.len() - num_annotated;
    cli::count("Annotated IDs", num_annotated as u64);
    if num_missing > 0 {
        cli::warning(&format!(
            "{} identifiers have no gene annotation",
            perf::format_count(num_missing as u64)
        ));
    }

    eprintln!();

    // ── Output ───────────────────────────────────────────
    cli::section("Output");

    let num_records =
        emit::write_annotations(out, &reduction.annotations).context("failed to write results")?;
    cli::success(&format!(
        "{} rs-gene rows written",
        perf::format_count(num_records as u64)
    ));

    Ok(num_records)
}

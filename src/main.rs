//! checktls - summarize SSL Labs scan results
//!
//! Reads the JSON written by `ssllabs-scan`, builds the per-site report and
//! the TLS/HTTP summaries, and writes them as text, CSV or HTML.

use anyhow::Context;
use checktls::checks::GradeTable;
use checktls::cli::{Cli, OutputFormat};
use checktls::config::{self, Contracts, Settings};
use checktls::models::read_results;
use checktls::report::{self, text, ReportBuilder};
use checktls::stats::{category_counts, display_wildcards, http_counts, Counts};
use clap::Parser;
use console::style;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    info!(
        "{} version {} - SSL Labs input {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        cli.file.display()
    );

    let settings = config::load_settings(cli).context("can not load configuration")?;
    let hosts = read_results(&cli.file)
        .with_context(|| format!("can not parse {}", cli.file.display()))?;

    let mut out = open_output(cli)?;

    if cli.wildcards {
        writeln!(out, "All wildcards certs:\n{}", display_wildcards(&hosts).trim_end())?;
        out.flush()?;
        return Ok(());
    }

    let contracts = load_contracts(cli, &settings)?;
    let grades = match &settings.report.grades {
        Some(path) => GradeTable::load_from_file(path)
            .with_context(|| format!("can not read grades from {}", path.display()))?,
        None => GradeTable::new(),
    };
    if contracts.is_empty() {
        info!("No contracts loaded, Contract column left empty");
    }
    if grades.is_empty() {
        info!("No external grades loaded, Mozilla/CryptCheck columns left empty");
    }

    let final_report = ReportBuilder::new(settings.report_config())
        .with_contracts(&contracts)
        .with_grades(&grades)
        .build(&hosts)
        .context("error analyzing report")?;

    let tls = category_counts(Some(&hosts));
    debug!("TLS categories:\n{}", report::display_categories(&tls));
    let http = http_counts(Some(&final_report));

    info!("SSL Labs engine: {}", final_report.ssllabs);

    match cli.format {
        OutputFormat::Csv => {
            report::write_csv(&mut out, Some(&final_report), &tls, &http)
                .context("can not generate CSV")?;
        }
        OutputFormat::Html => {
            report::write_html(&mut out, Some(&final_report)).context("can not write HTML")?;
        }
        OutputFormat::Text => {
            write!(out, "{}", text::format_report(&final_report, &tls, &http))?;
        }
    }
    out.flush()?;

    if let Some(prefix) = &cli.summary {
        write_summary_file(prefix, &tls, &http)?;
    }

    Ok(())
}

fn open_output(cli: &Cli) -> anyhow::Result<Box<dyn Write>> {
    if cli.to_stdout() {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    info!("Output file is {}", cli.output);
    let fh = File::create(&cli.output).with_context(|| format!("can not create {}", cli.output))?;
    Ok(Box::new(BufWriter::new(fh)))
}

/// An explicitly requested contracts file must exist; the default one may
/// be missing
fn load_contracts(cli: &Cli, settings: &Settings) -> anyhow::Result<Contracts> {
    let path = &settings.report.contracts;
    match Contracts::load_from_file(path) {
        Ok(contracts) => Ok(contracts),
        Err(e) if cli.contracts.is_none() => {
            warn!("{}, contracts left empty", e);
            Ok(Contracts::default())
        }
        Err(e) => Err(e).with_context(|| format!("can not read contracts {}", path.display())),
    }
}

fn write_summary_file(prefix: &str, tls: &Counts, http: &Counts) -> anyhow::Result<()> {
    let name = report::summary_file_name(prefix, chrono::Utc::now());
    info!("HTML summary: {}", name);

    let fh = File::create(&name).with_context(|| format!("can not create {}", name))?;
    let mut fh = BufWriter::new(fh);
    report::write_html_summary(&mut fh, tls, http).context("can not write HTML summary")?;
    fh.flush()?;
    Ok(())
}

//! # Tirscan CLI - Command-Line RBS Expression Prediction
//!
//! A command-line interface for ribosome binding site expression
//! prediction against an empirical motif table.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a single leader sequence
//! tirscan -t emopec_data.json -s TTTTTTAAGGAGTT
//!
//! # Batch mode over a FASTA file of leaders, TSV output
//! tirscan -t emopec_data.json -i leaders.fasta -f tsv -o reports.tsv
//!
//! # Cross-reference against cluster statistics
//! tirscan -t emopec_data.json -c clusters_with_stats.csv -s TTTTTTAAGGAGTT
//!
//! # Inverse direction: which clusters cover an expression value
//! tirscan -t emopec_data.json -c clusters_with_stats.csv -e 2.0
//! ```
//!
//! ## Options
//!
//! - `-t, --table <FILE>`: Expression table JSON file (required)
//! - `-c, --clusters <FILE>`: Cluster statistics CSV file
//! - `-s, --sequence <SEQ>`: Leader sequence to analyze
//! - `-i, --input <FILE>`: FASTA file of leader sequences
//! - `-e, --expression <VALUE>`: Target expression value (inverse direction)
//! - `-f, --format <FORMAT>`: Output format: text, tsv, json (default: text)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-m, --max-spacing <N>`: Maximum spacer offset to scan (default: 12)
//! - `-q, --quiet`: Suppress summary messages
//!
//! Exactly one of `--sequence`, `--input`, or `--expression` selects the
//! direction. A malformed `--expression` value yields the empty result
//! rather than an error.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::{Arg, ArgAction, Command};
use tirscan_core::TirAnalyzer;
use tirscan_core::clusters::{ClusterTable, parse_expression_target};
use tirscan_core::config::{OutputFormat, PredictorConfig};
use tirscan_core::expression::ExpressionTable;
use tirscan_core::output::{write_cluster_ranking, write_leader_reports};

/// Main entry point for the tirscan CLI application.
///
/// Parses command-line arguments, loads the data files, runs the selected
/// query direction, and writes results in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("tirscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ribosome binding site expression prediction")
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .value_name("FILE")
                .required(true)
                .help("Expression table JSON file"),
        )
        .arg(
            Arg::new("clusters")
                .short('c')
                .long("clusters")
                .value_name("FILE")
                .help("Cluster statistics CSV file"),
        )
        .arg(
            Arg::new("sequence")
                .short('s')
                .long("sequence")
                .value_name("SEQ")
                .help("Leader sequence to analyze"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("FASTA file of leader sequences"),
        )
        .arg(
            Arg::new("expression")
                .short('e')
                .long("expression")
                .value_name("VALUE")
                .help("Target expression value (inverse direction)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, tsv, json")
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("max-spacing")
                .short('m')
                .long("max-spacing")
                .value_name("N")
                .help("Maximum spacer offset to scan"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress summary messages"),
        )
        .get_matches();

    let mut config = PredictorConfig::default();
    if let Some(raw) = matches.get_one::<String>("max-spacing") {
        let max_spacing: usize = raw.parse().map_err(|_| "Invalid max spacing")?;
        if max_spacing == 0 {
            return Err("Invalid max spacing".into());
        }
        config.max_spacing = max_spacing;
    }

    let format = match matches.get_one::<String>("format").unwrap().as_str() {
        "text" => OutputFormat::Text,
        "tsv" => OutputFormat::Tsv,
        "json" => OutputFormat::Json,
        _ => return Err("Invalid output format".into()),
    };

    let directions = ["sequence", "input", "expression"]
        .into_iter()
        .filter(|id| matches.contains_id(id))
        .count();
    if directions != 1 {
        return Err("Specify exactly one of --sequence, --input, --expression".into());
    }

    let table = ExpressionTable::from_json_file(matches.get_one::<String>("table").unwrap())?;
    let mut analyzer = TirAnalyzer::new(table, config);
    if let Some(path) = matches.get_one::<String>("clusters") {
        analyzer = analyzer.with_clusters(ClusterTable::from_csv_file(path)?);
    }

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let quiet = matches.get_flag("quiet");

    if let Some(sequence) = matches.get_one::<String>("sequence") {
        let report = analyzer.analyze_leader(sequence, None)?;
        write_leader_reports(&mut writer, std::slice::from_ref(&report), format)?;
        if !quiet {
            eprintln!(
                "Predicted core {} with expression {:.4}.",
                report.decomposition.core, report.decomposition.expression
            );
        }
    } else if let Some(input_file) = matches.get_one::<String>("input") {
        let reports = analyzer.analyze_fasta_file(input_file)?;
        write_leader_reports(&mut writer, &reports, format)?;
        if !quiet {
            eprintln!("Analyzed {} leader sequences.", reports.len());
        }
    } else if let Some(raw_target) = matches.get_one::<String>("expression") {
        match parse_expression_target(raw_target) {
            Some(target) => {
                let ranked = analyzer.clusters_for_expression(target);
                write_cluster_ranking(&mut writer, &ranked, format)?;
                if !quiet {
                    eprintln!("{} clusters cover expression {:.4}.", ranked.len(), target);
                }
            }
            None => {
                // Malformed values degrade to the empty result.
                write_cluster_ranking(&mut writer, &[], format)?;
                if !quiet {
                    eprintln!("Invalid expression value; no clusters matched.");
                }
            }
        }
    }

    writer.flush()?;
    Ok(())
}

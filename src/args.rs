//! Command line handling
//!
//! The tool accepts single-dash, case-insensitive flags such as `-dataType long`.
//! Raw tokens are first rewritten into long options that `clap` understands, and
//! anything the tool does not recognize is reported as a warning and dropped.

use crate::config::{SortConfig, SortConfigBuilder};
use crate::error::{SortError, SortResult, Warning};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Recognized flags: (command line spelling, clap id, description for errors)
const FLAGS: [(&str, &str, &str); 4] = [
    ("-sortingType", "sorting-type", "sorting type"),
    ("-dataType", "data-type", "data type"),
    ("-inputFile", "input-file", "input file"),
    ("-outputFile", "output-file", "output file"),
];

/// Parse the full argument vector (program name first) into a configuration.
///
/// Unknown flags are appended to `warnings` as they are met, so the ones seen
/// before a fatal error are still available to report.
pub fn parse_args(args: &[String], warnings: &mut Vec<Warning>) -> SortResult<SortConfig> {
    let converted = convert_flag_syntax(args, warnings)?;
    let matches = build_cli().try_get_matches_from(converted)?;

    parse_config_from_matches(&matches)
}

pub fn build_cli() -> Command {
    Command::new("sorting-tool")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage(
            "sorting-tool [-sortingType natural|byCount] [-dataType long|line|word] \
             [-inputFile FILE] [-outputFile FILE]",
        )
        .about("Sort numbers, lines or words naturally or by frequency")
        .long_about(
            "Read numbers, lines or words and print them in natural order or grouped by \
             how often they occur.\n\nFlags are case-insensitive and the last occurrence wins.",
        )
        // Repeated flags replace earlier values
        .args_override_self(true)
        .arg(Arg::new("sorting-type")
            .long("sorting-type")
            .help("Output order: natural (default) or byCount")
            .value_name("TYPE")
            .action(ArgAction::Set))
        .arg(Arg::new("data-type")
            .long("data-type")
            .help("Input interpretation: long, line or word (default)")
            .value_name("TYPE")
            .action(ArgAction::Set))
        .arg(Arg::new("input-file")
            .long("input-file")
            .help("Read from FILE instead of standard input")
            .value_name("FILE")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set))
        .arg(Arg::new("output-file")
            .long("output-file")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set))
}

/// Rewrite `-sortingType`-style flags to clap long options.
///
/// A recognized flag must be followed by a value that does not itself start
/// with `-`. Unknown `-` tokens become warnings; other stray tokens are ignored.
fn convert_flag_syntax(
    args: &[String],
    warnings: &mut Vec<Warning>,
) -> SortResult<Vec<String>> {
    let mut converted = Vec::with_capacity(args.len());

    let mut iter = args.iter();
    // Program name
    if let Some(program) = iter.next() {
        converted.push(program.clone());
    }

    while let Some(arg) = iter.next() {
        if let Some(&(_, id, what)) = FLAGS
            .iter()
            .find(|(flag, _, _)| flag.eq_ignore_ascii_case(arg))
        {
            let value = iter
                .next()
                .filter(|value| !value.starts_with('-'))
                .ok_or_else(|| SortError::missing_value(what))?;
            converted.push(format!("--{id}"));
            converted.push(value.clone());
        } else if arg == "--help" || arg == "--version" {
            converted.push(arg.clone());
        } else if arg.starts_with('-') {
            warnings.push(Warning::UnknownParameter(arg.clone()));
        }
    }

    Ok(converted)
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new();

    if let Some(sorting_type) = matches.get_one::<String>("sorting-type") {
        builder = builder.sorting_type(sorting_type.parse()?);
    }
    if let Some(data_type) = matches.get_one::<String>("data-type") {
        builder = builder.data_type(data_type.parse()?);
    }
    if let Some(input) = matches.get_one::<PathBuf>("input-file") {
        builder = builder.input_file(input.clone());
    }
    if let Some(output) = matches.get_one::<PathBuf>("output-file") {
        builder = builder.output_file(output.clone());
    }

    builder.build()
}

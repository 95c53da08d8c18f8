use anyhow::{Context, Result};
use chordmark::{BassPolicy, SourceFormat, TransformDescriptor, TransposeOffset, TransposeOptions};
use clap::{Arg, ArgMatches, Command};
use std::io::{Read, Write};
use std::path::Path;

const STDIN_PATH: &str = "-";

fn detect_file_format(file_path: &str) -> Result<SourceFormat> {
    if file_path == STDIN_PATH {
        return Ok(SourceFormat::ChordText);
    }

    let path = Path::new(file_path);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", file_path))?;

    SourceFormat::from_extension(extension)
        .ok_or_else(|| anyhow::anyhow!("Unsupported file extension: .{}", extension))
}

fn select_format(matches: &ArgMatches, input_file: &str) -> Result<SourceFormat> {
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("text") => Ok(SourceFormat::ChordText),
        Some("markdown") => Ok(SourceFormat::Markdown),
        _ => detect_file_format(input_file)
            .with_context(|| format!("Failed to detect input file format: {}", input_file)),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn read_input(input_file: &str) -> Result<String> {
    if input_file == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        return Ok(content);
    }
    std::fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file))
}

fn build_command() -> Command {
    Command::new("chordmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transpose ChordMark chord sheets")
        .arg(
            Arg::new("input")
                .help("Input file (.chordmark, .txt or .md), or - for stdin")
                .required(true)
                .value_name("INPUT_FILE")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file (default: stdout)")
                .value_name("OUTPUT_FILE")
                .index(2),
        )
        .arg(
            Arg::new("transpose")
                .help("Transpose by semitones (e.g. +2, -3)")
                .short('t')
                .long("transpose")
                .allow_hyphen_values(true)
                .value_name("SEMITONES")
                .default_value("0")
                .value_parser(|value: &str| value.parse::<TransposeOffset>()),
        )
        .arg(
            Arg::new("keep-bass")
                .help("Leave the bass note of slash chords (G/B) as written")
                .long("keep-bass")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .help("Input layout; auto detects from the file extension")
                .long("format")
                .value_name("FORMAT")
                .value_parser(["auto", "text", "markdown"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("label")
                .help("Print the key label (Original, +N, -N) to stderr")
                .long("label")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .help("Disable logging")
                .short('q')
                .long("quiet")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

    let input_file = matches
        .get_one::<String>("input")
        .context("Missing input file")?;
    let output_file = matches.get_one::<String>("output");
    let offset = matches
        .get_one::<TransposeOffset>("transpose")
        .copied()
        .unwrap_or_default();
    let bass = if matches.get_flag("keep-bass") {
        BassPolicy::Preserve
    } else {
        BassPolicy::Transpose
    };

    let format = select_format(&matches, input_file)?;
    log::info!("Input format: {:?}, transpose: {}", format, offset);

    let transforms = TransformDescriptor {
        transpose_amount: offset.semitones(),
        options: TransposeOptions { bass },
        format,
    };

    let content = read_input(input_file)?;
    let transposed = chordmark::apply_transforms(&content, &transforms);

    match output_file {
        Some(path) => {
            log::info!("Writing output file: {}", path);
            std::fs::write(path, transposed.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(transposed.as_bytes())
                .context("Failed to write to standard output")?;
            stdout.flush().context("Failed to write to standard output")?;
        }
    }

    if matches.get_flag("label") {
        eprintln!("Key: {}", offset.label());
    }

    Ok(())
}

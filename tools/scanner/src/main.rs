//! CLI tool for inspecting DBC files with the `dbc-scan` primitives.
//!
//! # Usage
//!
//! ```bash
//! # Print every meaningful line with its line number
//! dbc-scan lines --input network.dbc
//!
//! # List blank-line separated sections as JSON
//! cat network.dbc | dbc-scan sections --json
//!
//! # Token helpers
//! dbc-scan split "0|16@1+" --delimiter '|'
//! dbc-scan number " 0.25 " --default 1
//! dbc-scan swap 0x01020304 --width 4
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dbc_scan::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Inspect DBC files: normalized lines, sections and token conversions.
#[derive(Parser, Debug)]
#[command(name = "dbc-scan")]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every non-blank line as `<line_no>: <trimmed line>`.
    Lines(InputArgs),

    /// List sections separated by blank lines.
    Sections {
        #[command(flatten)]
        input: InputArgs,

        /// Emit a JSON array instead of tab-separated rows.
        #[arg(long)]
        json: bool,
    },

    /// Split a value on a single delimiter character, one token per line.
    Split {
        /// Value to split.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Delimiter character.
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,

        /// Trim whitespace around every token.
        #[arg(long)]
        trim: bool,
    },

    /// Convert a value to a floating-point number.
    Number {
        /// Value to convert.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Result when the value is not a valid number.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        default: f64,
    },

    /// Reverse the byte order of a hexadecimal value.
    Swap {
        /// Unsigned hexadecimal value, with or without `0x`.
        value: String,

        /// Value width in bytes.
        #[arg(long, value_enum, default_value_t = Width::Four)]
        width: Width,
    },
}

/// Input source shared by the file-reading commands.
#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Input file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Accept input files without the `.dbc` extension.
    #[arg(long)]
    any_extension: bool,
}

/// Supported value widths for `swap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Width {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

impl Width {
    fn bytes(self) -> u32 {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Four => 4,
            Width::Eight => 8,
            Width::Sixteen => 16,
        }
    }
}

/// One blank-line separated block of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Section {
    /// Position of the section in the file (1-based).
    index: usize,
    /// Line number of the first line (1-based).
    start_line: usize,
    /// Number of lines up to the closing blank line or end of input.
    line_count: usize,
    /// First line, trimmed.
    head: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let mut out = stdout().lock();

    match args.command {
        Command::Lines(input) => {
            let printed = print_lines(open_input(&input)?, &mut out)?;
            info!(printed, "lines printed");
        }
        Command::Sections { input, json } => {
            let sections = collect_sections(open_input(&input)?)?;
            info!(count = sections.len(), "sections found");
            write_sections(&sections, json, &mut out)?;
        }
        Command::Split { value, delimiter, trim: trim_tokens } => {
            for token in split(&value, delimiter) {
                let token = if trim_tokens { trim(token) } else { token };
                writeln!(out, "{token}")?;
            }
        }
        Command::Number { value, default } => {
            writeln!(out, "{}", convert_to_double(&value, default))?;
        }
        Command::Swap { value, width } => {
            writeln!(out, "{}", swap_hex(&value, width)?)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Opens the input file (checking its extension) or stdin.
fn open_input(input: &InputArgs) -> Result<Box<dyn BufRead>> {
    match &input.input {
        Some(path) => {
            if !input.any_extension {
                check_extension(path)?;
            }
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            debug!(path = %path.display(), "reading file");
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(stdin().lock())),
    }
}

/// Writes every non-blank line with its line number. Returns the number printed.
fn print_lines<R: BufRead, W: Write>(reader: R, mut out: W) -> Result<usize> {
    let mut stream = LineStream::new(reader);
    let mut line = String::new();
    let mut printed = 0;

    while next_non_blank_line(&mut stream, &mut line).is_good() {
        writeln!(out, "{}: {}", stream.lines_read(), trim(line.as_str()))?;
        printed += 1;
    }

    let latin1 = stream.latin1_lines();
    let total = stream.finish().map_err(FormatError::from)?;
    debug!(total, printed, latin1, "input exhausted");
    Ok(printed)
}

/// Walks the input section by section.
fn collect_sections<R: BufRead>(reader: R) -> Result<Vec<Section>> {
    let mut stream = LineStream::new(reader);
    let mut line = String::new();
    let mut sections = Vec::new();

    while next_non_blank_line(&mut stream, &mut line).is_good() {
        let start_line = stream.lines_read();
        let head = trim(line.as_str()).to_string();

        // The closing blank line itself is not part of the section.
        let end_line = if skip_to_next_blank_line(&mut stream, &mut line).is_good() {
            stream.lines_read() - 1
        } else {
            stream.lines_read()
        };

        sections.push(Section {
            index: sections.len() + 1,
            start_line,
            line_count: end_line - start_line + 1,
            head,
        });
    }

    stream.finish().map_err(FormatError::from)?;
    Ok(sections)
}

fn write_sections<W: Write>(sections: &[Section], json: bool, mut out: W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut out, sections).context("Failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    for section in sections {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            section.index, section.start_line, section.line_count, section.head
        )?;
    }
    Ok(())
}

/// Parses an unsigned hex value of the given width and swaps its bytes.
fn swap_hex(value: &str, width: Width) -> Result<String> {
    let digits = trim(value);
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    let parsed = u128::from_str_radix(digits, 16)
        .with_context(|| format!("Invalid hexadecimal value: '{value}'"))?;

    let bits = width.bytes() * 8;
    if bits < u128::BITS && parsed >> bits != 0 {
        bail!("Value {value} does not fit in {} byte(s)", width.bytes());
    }

    let swapped = match width {
        Width::One => u128::from(swap_endianness(parsed as u8)),
        Width::Two => u128::from(swap_endianness(parsed as u16)),
        Width::Four => u128::from(swap_endianness(parsed as u32)),
        Width::Eight => u128::from(swap_endianness(parsed as u64)),
        Width::Sixteen => swap_endianness(parsed),
    };

    let hex_digits = width.bytes() as usize * 2;
    Ok(format!("0x{swapped:0hex_digits$X}"))
}

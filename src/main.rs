//! SVG Inliner CLI
//!
//! Usage:
//!   svg-inliner [OPTIONS] [INPUT]
//!
//! Options:
//!   -o, --output <FILE>       Output file (stdout if not provided)
//!   -c, --config <FILE>       Conversion settings (TOML format)
//!   -v, --verbose             More diagnostics (-v debug, -vv trace)
//!   -q, --quiet               Only warnings and errors
//!       --log-format <FMT>    pretty or compact
//!   -h, --help                Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use svg_inliner::logging::{init_logging, LogConfig, LogFormat};
use svg_inliner::{convert_file_with_config, inline_styles_with_config, load_config, ConvertError};

#[derive(Parser)]
#[command(name = "svg-inliner")]
#[command(about = "Replace class-based SVG fills with inline fill attributes")]
struct Cli {
    /// Input SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Conversion settings (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet).with_format(cli.log_format);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: could not set up logging: {}", e);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e, None, "");
            std::process::exit(1);
        }
    };

    // File to file goes through the library entry point directly
    if let (Some(input), Some(output)) = (&cli.input, &cli.output) {
        if let Err(e) = convert_file_with_config(input, output, &config) {
            let source = fs::read_to_string(input).ok();
            report_error(&e, source.as_deref(), &input.display().to_string());
            std::process::exit(1);
        }
        return;
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let svg = match inline_styles_with_config(&source, &config) {
        Ok(svg) => svg,
        Err(e) => {
            report_error(&e, Some(&source), &filename);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = write_output(path, &svg) {
                report_error(&e, None, &filename);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

fn write_output(path: &Path, svg: &str) -> Result<(), ConvertError> {
    fs::write(path, svg).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Print an error to stderr, with source context for malformed XML
fn report_error(err: &ConvertError, source: Option<&str>, filename: &str) {
    match (err, source) {
        (ConvertError::Xml(xml), Some(source)) => eprint!("{}", xml.format(source, filename)),
        _ => eprintln!("Error: {}", err),
    }
}

//! Styled QR CLI
//!
//! Usage:
//!   styled-qr [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <FILE>    Theme file for geometry and colors (TOML format)
//!   -o, --output <FILE>   Write the SVG to a file instead of stdout
//!   -f, --force           Overwrite an existing output file
//!   -l, --label <TEXT>    Label used in log output
//!   --compact             Write the SVG on a single line
//!   --standalone          Include the XML declaration
//!   --data-uri            Print a base64 data URI instead of raw SVG
//!   --pattern-size        Print the finder-pattern size and exit
//!   -v, --verbose         Increase log verbosity (repeatable)
//!   -h, --help            Print help

use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use styled_qr::{locate, parse, render, to_data_uri, RenderConfig, Theme};

#[derive(Parser)]
#[command(name = "styled-qr")]
#[command(about = "Render QR module matrices as stylized SVG")]
struct Cli {
    /// Matrix file, one row per line (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Theme file for geometry and colors (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,

    /// Label used in log output (defaults to the input file stem)
    #[arg(short, long)]
    label: Option<String>,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Include the XML declaration
    #[arg(long)]
    standalone: bool,

    /// Print a base64 data URI instead of raw SVG
    #[arg(long)]
    data_uri: bool,

    /// Print the finder-pattern size and exit
    #[arg(long)]
    pattern_size: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)
            .map_err(|e| format!("Error loading theme '{}': {}", path.display(), e))?,
        None => Theme::default(),
    };
    if let Some(name) = &theme.metadata.name {
        log::info!("using theme '{}'", name);
    }

    let (source, filename) = match &cli.input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;
            (content, path.display().to_string())
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            (buffer, "stdin".to_string())
        }
    };

    let matrix = parse(&source).map_err(|e| e.format(&source, &filename))?;

    if cli.pattern_size {
        println!("{}", locate(&matrix));
        return Ok(());
    }

    let label = cli.label.clone().unwrap_or_else(|| default_label(cli.input.as_deref()));
    let config = theme
        .apply(RenderConfig::new())
        .with_pretty_print(!cli.compact)
        .with_standalone(cli.standalone);

    let svg = render(&matrix, &label, &config).map_err(|e| format!("Error: {}", e))?;
    let text = if cli.data_uri {
        let mut uri = to_data_uri(&svg);
        uri.push('\n');
        uri
    } else {
        svg
    };

    match &cli.output {
        Some(path) => write_output(path, &text, cli.force)
            .map_err(|e| format!("Error writing '{}': {}", path.display(), e)),
        None => io::stdout()
            .write_all(text.as_bytes())
            .map_err(|e| format!("Error writing to stdout: {}", e)),
    }
}

fn default_label(input: Option<&Path>) -> String {
    input
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string())
}

/// Write to `path`, refusing to replace an existing file unless `force`
fn write_output(path: &Path, text: &str, force: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    log::info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

fn print_intro() {
    println!(
        r##"Styled QR - stylized SVG rendering of QR module matrices

USAGE:
    styled-qr [OPTIONS] [FILE]
    cat code.txt | styled-qr

INPUT:
    One matrix row per line. Lit modules: # 1 X x   Unlit modules: . 0 _ -
    Spaces, blank lines and // comments are ignored. The matrix must be square.

OPTIONS:
    -t, --theme        Geometry and color overrides (TOML file)
    -o, --output       Write to a file (never overwrites without --force)
    -l, --label        Label used in log output
    --compact          Single-line SVG
    --standalone       Include the XML declaration
    --data-uri         Print a base64 data URI
    --pattern-size     Print the finder-pattern size and exit
    -v, --verbose      More log output (repeatable)
    -h, --help         Print help

THEME FILE:
    [geometry]
    module_size = 20
    border = 20
    corner_radius = 40
    dot_radius = 10

    [colors]
    background = "#0B0A0C"
    body = "#B9C0CD"
    accent = "#23C0DC"
    frame = "#343B57""##
    );
}

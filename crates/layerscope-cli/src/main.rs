use std::fs;
use std::io::{self, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;
use layerscope_core::{InspectError, InspectOptions, Verbosity, init_verbosity};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LAYERSCOPE_BUILD_COMMIT"),
    " ",
    env!("LAYERSCOPE_BUILD_DATE"),
    ")\ncommit: ",
    env!("LAYERSCOPE_BUILD_COMMIT_FULL"),
);

const EXAMPLES: &str = "Examples:\n  layerscope pcap inspect capture.pcapng\n  layerscope pcap inspect dhcp.pcap -v 3 -c 10\n  layerscope pcap dissect 'captures/*.pcapng' --verbosity 0";

#[derive(Parser, Debug)]
#[command(name = "layerscope")]
#[command(version = env!("CARGO_PKG_VERSION"), long_version = LONG_VERSION)]
#[command(
    about = "Layer-by-layer dissection of captured frames (Ethernet, IPv4, ARP, TCP, UDP, BOOTP/DHCP).",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Diagnostic log filter for stderr, e.g. `debug` (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on PCAP/PCAPNG inputs.
    Pcap {
        #[command(subcommand)]
        command: PcapCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PcapCommands {
    /// Decode every frame of a capture and print its protocol layers.
    #[command(alias = "dissect")]
    #[command(after_help = EXAMPLES)]
    Inspect {
        /// Path to a .pcap or .pcapng file (a glob must match exactly one)
        input: PathBuf,

        /// Detail level: 0 layer names only, 1 essential, 2 common, 3 everything
        #[arg(short = 'v', long, default_value_t = Verbosity::DEFAULT, value_name = "0..=3")]
        verbosity: Verbosity,

        /// Stop after N frames
        #[arg(short = 'c', long, value_name = "N")]
        count: Option<u64>,

        /// Suppress the summary line on stderr
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(cli.log_level.as_deref()).and_then(|()| match cli.command {
        Commands::Pcap { command } => match command {
            PcapCommands::Inspect {
                input,
                verbosity,
                count,
                quiet,
            } => cmd_pcap_inspect(&input, verbosity, count, quiet),
        },
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

/// Diagnostics go to stderr; stdout carries only rendered frames.
fn init_logging(filter: Option<&str>) -> Result<(), CliError> {
    let env_filter = match filter {
        Some(filter) => EnvFilter::try_new(filter).map_err(|err| {
            CliError::new(
                format!("invalid log filter '{filter}'"),
                Some(format!("{err}; try `warn`, `debug` or `layerscope_core=trace`")),
            )
        })?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init()
        .ok();
    Ok(())
}

fn cmd_pcap_inspect(
    input: &Path,
    verbosity: Verbosity,
    count: Option<u64>,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;

    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .pcap or .pcapng file".to_string()),
        ));
    }

    init_verbosity(verbosity).context("Failed to configure verbosity")?;
    let options = InspectOptions {
        max_frames: count,
        ..InspectOptions::from_global()
    };
    debug!(input = %resolved_input.display(), %verbosity, ?count, "inspecting capture");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = match layerscope_core::inspect_pcap_file(&resolved_input, &options, &mut out) {
        Ok(summary) => summary,
        // Reader went away (e.g. piped into `head`); nothing left to report.
        Err(InspectError::Io(err)) if err.kind() == ErrorKind::BrokenPipe => return Ok(()),
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context("PCAP/PCAPNG inspection failed")
                .into());
        }
    };

    if !quiet {
        match (summary.time_start, summary.time_end) {
            (Some(start), Some(end)) => {
                eprintln!("OK: {} frames decoded ({start} .. {end})", summary.frames)
            }
            _ => eprintln!("OK: {} frames decoded", summary.frames),
        }
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .pcap or .pcapng file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "pcap" && ext != "pcapng" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .pcap or .pcapng file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .pcap or .pcapng".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        total => {
            let mut message = format!("multiple files match pattern '{pattern}' ({total} matches)");
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>();
            message.push_str("; matches: ");
            message.push_str(&listed.join(", "));
            if total > 3 {
                message.push_str(", ...");
            }
            Err(CliError::new(
                message,
                Some("pass a single capture file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

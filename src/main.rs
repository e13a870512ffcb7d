//! Command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use hostrules_gen::{
    default_output_path, resolve_output_arg, run, Config, Source, DEFAULT_SOURCE_URL,
};

/// Generate a dotted-domain .hostrules whitelist from a dnsmasq-style
/// server rule list.
///
/// Without a subcommand the default rule source URL is fetched. A bare
/// output filename is placed under the default output directory.
#[derive(Parser, Debug)]
#[command(name = "hostrules-gen")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,

    /// Output file path
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,
}

/// Rule-source selection
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the rule source from a custom URL
    FetchFromUrl {
        /// Rule source URL
        url: String,

        /// Output file path
        #[arg(value_name = "OUTPUT")]
        output: Option<String>,
    },
    /// Read the rule source from a local file
    FetchFromFile {
        /// Rule source file
        path: PathBuf,

        /// Output file path
        #[arg(value_name = "OUTPUT")]
        output: Option<String>,
    },
}

impl Args {
    /// Resolve the parsed arguments to a rule source and an output path.
    fn resolve(self) -> (Source, PathBuf) {
        match self.command {
            Some(Command::FetchFromUrl { url, output }) => {
                (Source::Url(url), resolve_output(output))
            }
            Some(Command::FetchFromFile { path, output }) => {
                (Source::File(path), resolve_output(output))
            }
            None => (
                Source::Url(DEFAULT_SOURCE_URL.to_string()),
                resolve_output(self.output),
            ),
        }
    }
}

fn resolve_output(arg: Option<String>) -> PathBuf {
    match arg {
        Some(arg) => resolve_output_arg(&arg),
        None => default_output_path(),
    }
}

fn main() -> ExitCode {
    // Unrecognized argument combinations exit non-zero here, with usage on
    // stderr, before anything else runs.
    let args = Args::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let (source, output_path) = args.resolve();
    let config = Config::new().with_output_path(output_path);
    match run(&config, &source) {
        Ok(summary) => {
            info!(
                lines = summary.written,
                whitelist = summary.whitelist_lines,
                deduplicated = summary.deduplicated,
                blacklisted = summary.blacklisted + summary.demoted,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

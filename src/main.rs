mod debug_report;

use clap::Parser;
use pathtrie::{NodeId, Router};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PATHTRIE_LOG";

/// Compile route patterns into a trie and match a request path against them.
///
/// Exit codes: 0 matched, 1 no route matched, 2 invalid arguments or routes.
#[derive(Debug, Parser)]
#[command(name = "pathtrie", version)]
struct Cli {
    /// Route pattern to compile; repeat for more routes.
    #[arg(short, long = "route", value_name = "PATTERN", allow_hyphen_values = true)]
    routes: Vec<String>,

    /// File with one route pattern per line ('#' starts a comment line).
    #[arg(short = 'f', long, value_name = "FILE")]
    routes_file: Option<PathBuf>,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Request path to match.
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    path: String,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let patterns = match load_patterns(&cli) {
        Ok(patterns) => patterns,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    if patterns.is_empty() {
        eprintln!("error: no routes given (use --route or --routes-file)");
        return ExitCode::from(2);
    }

    let mut router = Router::new();
    let mut routes: Vec<(String, Vec<NodeId>)> = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match router.compile(&pattern) {
            Ok(ends) => routes.push((pattern, ends)),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(2);
            }
        }
    }

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    let found = router.match_path(&cli.path);
    debug_report::print_run(&cli.path, &router, &routes, found.as_ref(), color);

    if found.is_some() { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Routes file entries first, then `--route` flags, in order.
fn load_patterns(cli: &Cli) -> Result<Vec<String>, String> {
    let mut patterns = Vec::new();

    if let Some(path) = &cli.routes_file {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| format!("error: failed to read routes file {}: {err}", path.display()))?;
        patterns.extend(parse_routes_file(&contents));
    }

    patterns.extend(cli.routes.iter().cloned());
    Ok(patterns)
}

fn parse_routes_file(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use ti_txt::{analyze_file, AggregateScope, AnalysisOptions, DEFAULT_DISPLAY_LINES};

mod logging;
mod report;

/*
Usage:
  analyze_ti_txt build/gpio_blink_example.hex build/uart_echo_example.hex

  Every file is analyzed even if an earlier one cannot be read.

 */

#[derive(Debug, Parser)]
#[command(version, about = "Inspect TI-TXT firmware record files")]
struct Args {
    /// Record files to analyze, in order.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Lines shown per file.
    #[arg(short = 'n', long = "lines", default_value_t = DEFAULT_DISPLAY_LINES)]
    display_lines: usize,

    /// Lines that feed the statistics.
    #[arg(long, value_enum, default_value_t = Scope::Full)]
    scope: Scope,

    /// Print bounds-check notes for displayed records.
    #[arg(long)]
    strict: bool,

    /// Log filter directive, overridden by RUST_LOG.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Scope {
    /// Every line of the file.
    Full,
    /// Only the displayed lines.
    Window,
}

impl From<Scope> for AggregateScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Full => AggregateScope::FullInput,
            Scope::Window => AggregateScope::DisplayWindow,
        }
    }
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("ERROR: {:#}", e);
        process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::setup_logging(&args.log_level)?;

    let options = AnalysisOptions {
        display_lines: args.display_lines,
        scope: args.scope.into(),
    };
    let render_options = report::RenderOptions {
        strict: args.strict,
    };
    info!(files = args.files.len(), ?options, "starting analysis");

    let mut failed = 0;
    for path in &args.files {
        match analyze_file(path, &options) {
            Ok(analysis) => {
                let rendered = report::AnalysisReport {
                    path,
                    analysis: &analysis,
                    options: &render_options,
                };
                println!("{rendered}");
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "analysis failed");
                failed += 1;
                println!("{}", report::FailureReport { path, error: &e });
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files could not be analyzed", args.files.len());
    }
    Ok(())
}

//! CLI entry point for entryguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and
//! exit codes. All business logic lives in the `entryguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use entryguard_app::{
    DecideInput, ExplainOutput, OutputFormat, parse_output_format, parse_report_json,
    render_markdown, render_text, run_decide, run_explain, serialize_report, write_text,
};
use entryguard_domain::{Clock, FixedClock, SystemClock};
use entryguard_loader::InputPaths;
use entryguard_settings::Overrides;
use entryguard_types::AdmissionReport;
use time::Date;
use time::macros::format_description;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "entryguard",
    version,
    about = "Border admission classifier for traveler entry records"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every traveler record and emit one decision per record.
    Decide {
        /// JSON array of traveler entry records.
        #[arg(long)]
        entries: Utf8PathBuf,

        /// JSON array of watchlist entries.
        #[arg(long)]
        watchlist: Utf8PathBuf,

        /// JSON object of country policies keyed by country code.
        #[arg(long)]
        countries: Utf8PathBuf,

        /// Path to entryguard config TOML (missing file means defaults).
        #[arg(long, default_value = "entryguard.toml")]
        config: Utf8PathBuf,

        /// Override profile (compat|strict).
        #[arg(long)]
        profile: Option<String>,

        /// Override the visa validity window, in days.
        #[arg(long)]
        visa_validity_days: Option<u32>,

        /// Evaluate as of this date (YYYY-MM-DD) instead of today (UTC).
        #[arg(long)]
        today: Option<String>,

        /// Classify records on the current thread only.
        #[arg(long)]
        sequential: bool,

        /// Output format (text|json|markdown).
        #[arg(long, default_value = "text")]
        format: String,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Render an existing JSON report as text or markdown.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Output format (text|json|markdown).
        #[arg(long, default_value = "markdown")]
        format: String,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id or code.
    Explain {
        /// The rule_id (e.g., "admission.watchlist") or code (e.g., "invalid_passport").
        identifier: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Decide {
            entries,
            watchlist,
            countries,
            config,
            profile,
            visa_validity_days,
            today,
            sequential,
            format,
            out,
        } => cmd_decide(DecideArgs {
            paths: InputPaths {
                entries,
                watchlist,
                countries,
            },
            config,
            overrides: Overrides {
                profile,
                visa_validity_days,
                parallel: sequential.then_some(false),
            },
            today,
            format,
            out,
        }),
        Commands::Render {
            report,
            format,
            out,
        } => cmd_render(&report, &format, out.as_deref()),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    };

    if let Err(err) = result {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("entryguard error: {err:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays the decision stream.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

struct DecideArgs {
    paths: InputPaths,
    config: Utf8PathBuf,
    overrides: Overrides,
    today: Option<String>,
    format: String,
    out: Option<Utf8PathBuf>,
}

fn cmd_decide(args: DecideArgs) -> anyhow::Result<()> {
    let format = parse_output_format(&args.format)?;

    let clock: Box<dyn Clock> = match args.today.as_deref() {
        Some(s) => Box::new(FixedClock(parse_today(s)?)),
        None => Box::new(local_clock()),
    };

    // Missing config file is allowed (defaults apply).
    let config_text = if args.config.exists() {
        std::fs::read_to_string(&args.config)
            .with_context(|| format!("read config {}", args.config))?
    } else {
        tracing::debug!(path = %args.config, "no config file, using defaults");
        String::new()
    };

    let output = run_decide(DecideInput {
        paths: &args.paths,
        config_text: &config_text,
        overrides: &args.overrides,
        clock: clock.as_ref(),
    })?;

    emit(&output.report, format, args.out.as_deref())
}

fn cmd_render(
    report_path: &Utf8Path,
    format: &str,
    out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let format = parse_output_format(format)?;
    let text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report {}", report_path))?;
    let report = parse_report_json(&text)?;
    emit(&report, format, out)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", entryguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                entryguard_app::format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

/// The machine's local calendar date, or the UTC date when the offset is unknown.
fn local_clock() -> SystemClock {
    match SystemClock::local() {
        Ok(clock) => {
            tracing::debug!(offset = %clock.offset(), "using local calendar date");
            clock
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                "local UTC offset unavailable, evaluating against the UTC date"
            );
            SystemClock::utc()
        }
    }
}

fn parse_today(s: &str) -> anyhow::Result<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid --today date: {s} (expected YYYY-MM-DD)"))
}

fn emit(
    report: &AdmissionReport,
    format: OutputFormat,
    out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let bytes = match format {
        OutputFormat::Text => render_text(report).into_bytes(),
        OutputFormat::Markdown => render_markdown(report).into_bytes(),
        OutputFormat::Json => serialize_report(report)?,
    };

    match out {
        Some(path) => write_text(path, &bytes).context("write output"),
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

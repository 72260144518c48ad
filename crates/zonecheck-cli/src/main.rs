//! CLI entry point for zonecheck.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `zonecheck-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use zonecheck_app::{
    EvaluateInput, ExplainOutput, FactsInput, format_custom_explanation, format_explanation,
    format_not_found, format_rules, parse_report_json, render_markdown, render_text,
    resolve_settings, run_evaluate, run_explain, run_list_rules, serialize_report, validate_input,
};
use zonecheck_settings::Overrides;

/// Exit code for input the form layer rejects (zone not selected, bad size).
const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "zonecheck",
    version,
    about = "Which building types does a land parcel permit?"
)]
struct Cli {
    /// Path to zonecheck config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "zonecheck.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|residential).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Disable a rule by id for this run (repeatable).
    #[arg(long, global = true, value_name = "RULE_ID")]
    disable: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate property facts and print the permitted building types.
    Evaluate {
        /// Zone of the parcel (1, 2 or 3).
        #[arg(long, allow_hyphen_values = true)]
        zone: Option<String>,

        /// Parcel size in square metres.
        #[arg(long, allow_hyphen_values = true)]
        size: Option<String>,

        /// The parcel is in a flood zone.
        #[arg(long)]
        flood: bool,

        /// Output format for stdout.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// List the active rules in evaluation order.
    Rules,

    /// Explain a rule by id (e.g. "building.apartment_complex") or name, including config rules.
    Explain {
        /// Rule id or building type name.
        identifier: String,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.cmd {
        Commands::Evaluate {
            zone,
            size,
            flood,
            format,
            report_out,
        } => {
            let input = FactsInput {
                zone: zone.clone(),
                size: size.clone(),
                flood: *flood,
            };
            cmd_evaluate(&cli, input, *format, report_out.as_deref())
        }
        Commands::Rules => cmd_rules(&cli),
        Commands::Explain { identifier } => cmd_explain(&cli, identifier),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("zonecheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        disable: cli.disable.clone(),
    }
}

/// Missing config file is allowed (defaults apply); an unreadable one is not.
fn load_config_text(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        debug!(%path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn cmd_evaluate(
    cli: &Cli,
    input: FactsInput,
    format: Format,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let facts = match validate_input(&input) {
        Ok(facts) => facts,
        Err(err) => {
            eprintln!("{err}");
            return Ok(EXIT_INVALID_INPUT);
        }
    };

    let config_text = load_config_text(&cli.config)?;
    let output = run_evaluate(EvaluateInput {
        config_text: &config_text,
        overrides: overrides(cli),
        facts,
    })?;

    if let Some(path) = report_out {
        let data = serialize_report(&output.report)?;
        write_file(path, &data).context("write report json")?;
    }

    match format {
        Format::Text => print!("{}", render_text(&output.report)),
        Format::Markdown => print!("{}", render_markdown(&output.report)),
        Format::Json => {
            let data = serialize_report(&output.report)?;
            println!("{}", String::from_utf8_lossy(&data));
        }
    }

    Ok(0)
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<i32> {
    let config_text = load_config_text(&cli.config)?;
    let rules = run_list_rules(&config_text, overrides(cli))?;
    print!("{}", format_rules(&rules));
    Ok(0)
}

fn cmd_explain(cli: &Cli, identifier: &str) -> anyhow::Result<i32> {
    let config_text = load_config_text(&cli.config)?;
    let resolved = resolve_settings(&config_text, overrides(cli))?;

    let code = match run_explain(identifier, &resolved.effective.custom_rules) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::Custom(exp) => {
            print!("{}", format_custom_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, &available_rule_ids));
            1
        }
    };
    Ok(code)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

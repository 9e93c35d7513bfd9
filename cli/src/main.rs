use std::path::PathBuf;

use argmap_core::OptionTable;
use clap::{Args, Parser, Subcommand};

/// Output format for the parsed option table.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

/// Value type requested by `get`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LookupKind {
    Bool,
    Str,
    Int,
}

#[derive(Debug, Parser)]
#[command(name = "argmap")]
#[command(about = "Inspect how a raw argument list resolves into options")]
struct Cli {
    /// Emit debug-level logs on stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical option table for an argument list.
    Dump(DumpArgs),
    /// Resolve a single option as a bool, string, or integer.
    Get(GetArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Config file merged under the arguments (arguments win).
    #[arg(long)]
    conf: Option<PathBuf>,
    /// Raw arguments to parse, given after `--`.
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// How to interpret the stored value.
    kind: LookupKind,
    /// Option name to look up (e.g. -port).
    #[arg(allow_hyphen_values = true)]
    name: String,
    /// Value returned when the option is absent.
    #[arg(long, allow_hyphen_values = true)]
    default: Option<String>,
    #[command(flatten)]
    source: SourceArgs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Dump(args) => run_dump(args),
        Command::Get(args) => run_get(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "argmap=debug,argmap_core=debug"
    } else {
        "argmap=warn,argmap_core=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table(source: &SourceArgs) -> Result<OptionTable, String> {
    let mut table = OptionTable::parse(&source.args);
    if let Some(conf) = &source.conf {
        let adopted = table
            .merge_config_file(conf)
            .map_err(|err| err.to_string())?;
        tracing::debug!(path = %conf.display(), adopted, "Applied config file");
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// dump command
// ---------------------------------------------------------------------------

fn run_dump(args: DumpArgs) -> Result<(), String> {
    let table = load_table(&args.source)?;
    println!("{}", format_table(&table, args.format)?);
    Ok(())
}

fn format_table(table: &OptionTable, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(table)
            .map_err(|e| format!("Failed to serialize output: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(table).map_err(|e| format!("Failed to serialize output: {e}"))
        }
        CliOutputFormat::Table => {
            let width = table.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            let lines: Vec<String> = table
                .iter()
                .map(|(name, value)| format!("{name:<width$}  {value}"))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

// ---------------------------------------------------------------------------
// get command
// ---------------------------------------------------------------------------

fn run_get(args: GetArgs) -> Result<(), String> {
    let table = load_table(&args.source)?;
    println!("{}", resolve(&table, args.kind, &args.name, args.default.as_deref())?);
    Ok(())
}

fn resolve(
    table: &OptionTable,
    kind: LookupKind,
    name: &str,
    default: Option<&str>,
) -> Result<String, String> {
    let value = match kind {
        LookupKind::Bool => {
            let default = match default {
                None => false,
                Some(raw) => parse_bool_default(raw)?,
            };
            table.get_bool(name, default).to_string()
        }
        LookupKind::Str => table.get_str(name, default.unwrap_or("")).to_string(),
        LookupKind::Int => {
            let default = match default {
                None => 0,
                Some(raw) => raw
                    .parse::<i64>()
                    .map_err(|_| format!("invalid integer default '{raw}'"))?,
            };
            table.get_int(name, default).to_string()
        }
    };
    Ok(value)
}

fn parse_bool_default(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(format!("invalid boolean default '{raw}' (expected true/false/1/0)")),
    }
}

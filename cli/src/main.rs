use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gamefeed_core::validate_schedule;
use gamefeed_decoder::feed::FeedTable;
use gamefeed_decoder::gacha::{PoolConfig, simulate_draws};
use gamefeed_decoder::report::build_feed_report;
use gamefeed_decoder::{decode_feed, output};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Text,
}

impl From<CliOutputFormat> for output::OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Text => Self::Text,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gamefeed")]
#[command(about = "Offline event feed decoding and lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode raw feed rows into IDs and schedule text.
    Decode(DecodeArgs),
    /// Look up an entry in a published (header-labeled) feed file.
    Lookup(LookupArgs),
    /// Decode raw feed rows and check schedule fields for range problems.
    Validate(ValidateArgs),
    /// Emit a full per-row decode report.
    Report(ReportArgs),
    /// Simulate seeded draws from a configured pool.
    Gacha(GachaArgs),
}

#[derive(Debug, Args)]
struct DecodeArgs {
    /// Raw feed TSV file, or '-' for stdin.
    input: PathBuf,
    /// Optional JSON file mapping event IDs to display names.
    #[arg(long)]
    names: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// Published feed TSV file with a header line, or '-' for stdin.
    input: PathBuf,
    /// Value to look up in the ID column.
    #[arg(long)]
    id: String,
    /// Header name of the ID column.
    #[arg(long, default_value = "ID")]
    id_column: String,
    /// Header name of the display-name column.
    #[arg(long, default_value = "Name")]
    name_column: String,
    /// Header name of the schedule column.
    #[arg(long, default_value = "Schedule")]
    schedule_column: String,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Raw feed TSV file, or '-' for stdin.
    input: PathBuf,
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Raw feed TSV file, or '-' for stdin.
    input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct GachaArgs {
    /// Pool configuration JSON file.
    #[arg(long)]
    config: PathBuf,
    /// Pool name inside the configuration file.
    #[arg(long, default_value = "NC")]
    pool: String,
    /// Initial 32-bit seed.
    #[arg(long)]
    seed: u32,
    /// Number of rolls to simulate.
    #[arg(long, default_value_t = 10)]
    rolls: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Decode(args) => run_decode(args),
        Command::Lookup(args) => run_lookup(args),
        Command::Validate(args) => run_validate(args),
        Command::Report(args) => run_report(args),
        Command::Gacha(args) => run_gacha(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Reads a file argument, treating '-' as stdin.
fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| format!("Failed to read stdin: {err}"))?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

fn run_decode(args: DecodeArgs) -> Result<(), String> {
    let text = read_input(&args.input)?;

    let names: BTreeMap<i64, String> = match &args.names {
        Some(path) => {
            let raw = read_input(path)?;
            serde_json::from_str(&raw)
                .map_err(|err| format!("Failed to parse name table '{}': {err}", path.display()))?
        }
        None => BTreeMap::new(),
    };

    let rows = decode_feed(&text);
    let rendered = output::format_rows(&rows, &names, args.format.into())?;
    print!("{rendered}");
    Ok(())
}

fn run_lookup(args: LookupArgs) -> Result<(), String> {
    let text = read_input(&args.input)?;
    let table = FeedTable::parse(&text).map_err(|err| err.to_string())?;

    let record = table
        .find(&args.id_column, &args.id)
        .map_err(|err| err.to_string())?
        .ok_or_else(|| format!("ID {} not found", args.id))?;

    println!(
        "{}",
        record.lookup_reply(&args.id_column, &args.name_column, &args.schedule_column)
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let text = read_input(&args.input)?;
    let rows = decode_feed(&text);

    let mut problem_rows = 0usize;
    for (index, row) in rows.iter().enumerate() {
        let Some(schedule) = &row.schedule else {
            continue;
        };
        let errors = validate_schedule(schedule);
        if errors.is_empty() {
            continue;
        }
        problem_rows += 1;
        for error in errors {
            println!("row {index}: {error}");
        }
    }

    if problem_rows > 0 {
        return Err(format!("{problem_rows} row(s) with out-of-range schedule fields"));
    }
    println!("Validated {} row(s), no problems found.", rows.len());
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), String> {
    let text = read_input(&args.input)?;
    let bundle = build_feed_report(&text);
    let rendered = output::format_report(&bundle, args.format.into())?;
    print!("{rendered}");
    Ok(())
}

fn run_gacha(args: GachaArgs) -> Result<(), String> {
    let raw = read_input(&args.config)?;
    let config: PoolConfig = serde_json::from_str(&raw)
        .map_err(|err| format!("Failed to parse pool config '{}': {err}", args.config.display()))?;

    let pool = config
        .get(&args.pool)
        .ok_or_else(|| format!("Pool '{}' not found in config", args.pool))?;

    for draw in simulate_draws(pool, args.seed, args.rolls) {
        println!(
            "{:>3}  {:>6}  {}  {}",
            draw.roll,
            draw.slot_id,
            draw.rarity.label(),
            draw.name
        );
    }
    Ok(())
}

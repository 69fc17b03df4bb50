//! palmerpenguins Command Line Interface
//!
//! Print, summarise and export the bundled penguin datasets.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use palmerpenguins::api::{PenguinsData, PenguinsLoader, DESCRIPTION};
use palmerpenguins::core::Result;
use palmerpenguins::utils::describe;
use palmerpenguins::{Dataset, Table};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "palmerpenguins")]
#[command(about = "The Palmer Archipelago penguin dataset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "palmerpenguins contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a dataset
    Show(ShowArgs),
    /// Per-column summary statistics
    Describe(DescribeArgs),
    /// Value counts for one column
    Counts(CountsArgs),
    /// Describe the dataset and its columns
    Info,
}

#[derive(Args)]
struct SourceArgs {
    /// Use the raw 17-column dataset instead of the curated one
    #[arg(long)]
    raw: bool,

    /// Directory holding penguins.csv and penguins_raw.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl SourceArgs {
    fn loader(&self) -> PenguinsLoader {
        match &self.data_dir {
            Some(dir) => PenguinsLoader::new().with_data_dir(dir),
            None => PenguinsLoader::new(),
        }
    }

    fn dataset(&self) -> Dataset {
        if self.raw {
            Dataset::Raw
        } else {
            Dataset::Curated
        }
    }
}

#[derive(Args)]
struct ShowArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Only the four measurements plus the species label (curated only)
    #[arg(long)]
    features_target: bool,

    /// Drop rows containing any missing value
    #[arg(long)]
    drop_missing: bool,

    /// Print only the first N rows
    #[arg(long)]
    head: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Args)]
struct DescribeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Drop rows containing any missing value first
    #[arg(long)]
    drop_missing: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CountsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Column to count (defaults to the species column)
    #[arg(short, long)]
    column: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Aligned plain-text columns
    #[value(name = "table")]
    Table,
    /// Comma-separated values with header
    #[value(name = "csv")]
    Csv,
    /// JSON array of row records
    #[value(name = "json")]
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Show(args) => show_command(args),
        Commands::Describe(args) => describe_command(args),
        Commands::Counts(args) => counts_command(args),
        Commands::Info => {
            print!("{DESCRIPTION}");
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

/// Load the requested dataset, optionally without incomplete rows
fn load(source: &SourceArgs, drop_missing: bool) -> Result<Table> {
    let table = source.loader().load_table(source.dataset())?;
    Ok(if drop_missing {
        table.drop_missing()
    } else {
        table
    })
}

fn show_command(args: ShowArgs) -> Result<()> {
    let table = if args.features_target && !args.source.raw {
        match args.source.loader().load(true, args.drop_missing)? {
            // Show the label next to the measurements it belongs to
            PenguinsData::FeaturesTarget { features, target } => features.with_column(target)?,
            PenguinsData::Table(table) => table,
        }
    } else {
        if args.features_target {
            info!("--features-target applies to the curated dataset only, ignoring");
        }
        load(&args.source, args.drop_missing)?
    };

    let table = match args.head {
        Some(n) => table.head(n),
        None => table,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => print_table(&mut out, &table)?,
        OutputFormat::Csv => table.write_csv(&mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &table).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn describe_command(args: DescribeArgs) -> Result<()> {
    let table = load(&args.source, args.drop_missing)?;
    let summary = describe(&table);

    if args.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &summary).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    println!(
        "=== {} ({} rows x {} columns) ===",
        args.source.dataset(),
        table.n_rows(),
        table.n_cols()
    );
    for column in &summary {
        println!("{column}");
    }
    Ok(())
}

fn counts_command(args: CountsArgs) -> Result<()> {
    let table = load(&args.source, false)?;
    let name = args
        .column
        .as_deref()
        .unwrap_or_else(|| args.source.dataset().species_column());
    let column = table.try_column(name)?;

    let counts = column.value_counts();
    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    for (value, n) in &counts {
        println!("{value:<width$}  {n}");
    }
    let missing = column.missing_count();
    if missing > 0 {
        println!("{:<width$}  {missing}", "NA");
    }
    Ok(())
}

/// Write the table with each column padded to its widest cell
fn print_table<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    let cells: Vec<Vec<String>> = table
        .columns()
        .iter()
        .map(|c| c.iter().map(|v| v.to_string()).collect())
        .collect();
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .zip(&cells)
        .map(|(c, col)| col.iter().map(String::len).chain([c.name().len()]).max().unwrap_or(0))
        .collect();

    let header: Vec<String> = table
        .column_names()
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{name:<w$}"))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end())?;

    for row in 0..table.n_rows() {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(col, &w)| format!("{:<w$}", col[row]))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    Ok(())
}

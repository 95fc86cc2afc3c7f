use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use equate_indexer::{LoadedTable, TableLoader};
use equate_resolver::{resolve_ascii, Resolver};

mod render;

#[derive(Parser)]
#[command(name = "eqlookup")]
#[command(about = "eZ80 include reverse lookup: addresses to labels and back", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Label table to load (newline-delimited `name = $hexvalue` records)
    #[arg(
        long,
        global = true,
        env = "EQLOOKUP_LABELS",
        default_value = "ti84pce.lab"
    )]
    labels: PathBuf,

    /// Output JSON instead of styled text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an address to its labels, or a label to its address
    #[command(visible_aliases = ["whatis", "rl"])]
    Lookup(LookupArgs),

    /// Convert a code point to its character, or text to its code points
    Ascii(AsciiArgs),

    /// Show how the label table loaded
    Stats,
}

#[derive(Args)]
struct LookupArgs {
    /// Queries to resolve; reads one query per stdin line when omitted
    queries: Vec<String>,
}

#[derive(Args)]
struct AsciiArgs {
    /// Code points or text to convert; reads stdin lines when omitted
    queries: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // JSON consumers get a clean stdout; info logs go quiet with it.
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || cli.json {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match &cli.command {
        Commands::Lookup(args) => run_lookup(&cli, args),
        Commands::Ascii(args) => run_ascii(&cli, args),
        Commands::Stats => run_stats(&cli),
    }
}

fn load_table(cli: &Cli) -> Result<LoadedTable> {
    TableLoader::new(&cli.labels)
        .load()
        .with_context(|| format!("Cannot serve lookups without {}", cli.labels.display()))
}

fn run_lookup(cli: &Cli, args: &LookupArgs) -> Result<()> {
    let loaded = load_table(cli)?;
    let resolver = Resolver::new(&loaded.index);

    for query in gather_queries(&args.queries)? {
        let outcome = resolver.resolve(&query);
        if cli.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{}", render::lookup_line(&outcome));
        }
    }
    Ok(())
}

fn run_ascii(cli: &Cli, args: &AsciiArgs) -> Result<()> {
    // Conversion never touches the label table.
    for query in gather_queries(&args.queries)? {
        let outcome = resolve_ascii(&query);
        if cli.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{}", render::ascii_line(&outcome));
        }
    }
    Ok(())
}

fn run_stats(cli: &Cli) -> Result<()> {
    let loaded = load_table(cli)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&loaded.stats)?);
    } else {
        print!("{}", render::stats_block(&loaded.stats, &cli.labels));
    }
    Ok(())
}

fn gather_queries(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let mut queries = Vec::new();
    for line in io::stdin().lock().lines() {
        queries.push(line.context("Failed to read a query from stdin")?);
    }
    if queries.is_empty() {
        anyhow::bail!("No queries given. Pass them as arguments or pipe one per line via stdin.");
    }
    Ok(queries)
}

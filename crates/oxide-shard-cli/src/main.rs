//! oxide-shard CLI
//!
//! Command-line tool for inspecting how statements are routed and
//! rewritten.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_shard_cli::ParseReport;
use oxide_shard_core::dialect::{Dialect, GenericDialect};
use oxide_shard_core::rule::{RuleConfiguration, ShardingRule, ShardingTableMetaData};
use oxide_shard_core::SqlParser;
use oxide_shard_mysql::MySqlDialect;

/// Inspect SQL routing and rewriting for sharded databases.
#[derive(Parser)]
#[command(name = "oxide-shard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sharding rule file (JSON). Without one, no table is sharded.
    #[arg(short, long, env = "OXIDE_SHARD_RULES")]
    rules: Option<PathBuf>,

    /// SQL dialect of the input.
    #[arg(short, long, value_enum, default_value_t = DialectArg::Generic)]
    dialect: DialectArg,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Generic,
    Mysql,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a statement and print tables, route conditions, tokens and
    /// the rewritten SQL as JSON.
    Parse {
        /// The SQL statement.
        sql: String,

        /// Print compact JSON on one line.
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (rule, metadata) = load_rules(cli.rules.as_deref())?;
    let dialect: Box<dyn Dialect> = match cli.dialect {
        DialectArg::Generic => Box::new(GenericDialect::new()),
        DialectArg::Mysql => Box::new(MySqlDialect::new()),
    };
    debug!(dialect = dialect.name(), "dialect selected");

    match cli.command {
        Commands::Parse { sql, compact } => {
            let parser = SqlParser::new(dialect.as_ref(), &rule, &metadata);
            let statement = parser
                .parse(&sql)
                .with_context(|| format!("cannot parse statement: {sql}"))?;
            let report = ParseReport::new(&sql, &statement);
            let json = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn load_rules(
    path: Option<&std::path::Path>,
) -> anyhow::Result<(ShardingRule, ShardingTableMetaData)> {
    let Some(path) = path else {
        return Ok((ShardingRule::default(), ShardingTableMetaData::new()));
    };
    let configuration = RuleConfiguration::load(path)?;
    let rules = configuration
        .build()
        .with_context(|| format!("invalid sharding rules in {}", path.display()))?;
    Ok(rules)
}

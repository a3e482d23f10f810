//! LinkRank CLI: rank linked pages from the command line
//!
//! Loads pages from a directory, runs the ranking engine and prints the result.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use linkrank::output::{report_json, write_top};
use linkrank::{LinkRankConfig, RankReport, ZeroDegreePolicy};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "linkrank", version, about = "Rank linked documentation pages")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the highest-ranked page
    Top {
        #[command(flatten)]
        run: RunArgs,

        /// Do not write the result shard
        #[arg(long)]
        no_write: bool,
    },
    /// Print every page's final rank
    Ranks {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Print every final page record with its votes
    Dump {
        #[command(flatten)]
        run: RunArgs,
    },
}

/// Overrides for values from the configuration file
#[derive(Args)]
struct RunArgs {
    /// Directory holding the pages
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Page file name (repeatable)
    #[arg(long = "page")]
    pages: Vec<String>,

    /// Damping factor in (0, 1)
    #[arg(long)]
    damping: Option<f64>,

    /// Number of propagation rounds
    #[arg(long)]
    iterations: Option<usize>,

    /// Prefix of the result shard file
    #[arg(long)]
    output: Option<String>,

    /// Abort instead of skipping votes with a zero out-degree
    #[arg(long)]
    fail_on_zero_degree: bool,
}

impl RunArgs {
    fn apply(&self, config: &mut LinkRankConfig) {
        if let Some(dir) = &self.dir {
            config.data_dir = dir.clone();
        }
        if !self.pages.is_empty() {
            config.pages = self.pages.clone();
        }
        if let Some(damping) = self.damping {
            config.damping_factor = damping;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(output) = &self.output {
            config.output_prefix = output.clone();
        }
        if self.fail_on_zero_degree {
            config.zero_degree = ZeroDegreePolicy::Fail;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => LinkRankConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => LinkRankConfig::default(),
    };

    match &cli.command {
        Commands::Top { run, no_write } => {
            run.apply(&mut config);
            let report = rank(&config)?;
            print_top(&report, &cli.format)?;
            if !no_write {
                let path = write_top(&config.output_prefix, report.top.as_ref())
                    .context("writing result shard")?;
                info!("Result written to {}", path.display());
            }
        }
        Commands::Ranks { run } => {
            run.apply(&mut config);
            let report = rank(&config)?;
            print_ranks(&report, &cli.format)?;
        }
        Commands::Dump { run } => {
            run.apply(&mut config);
            let report = rank(&config)?;
            print_pages(&report, &cli.format)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only results
fn init_logging(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn rank(config: &LinkRankConfig) -> anyhow::Result<RankReport> {
    config.page_rank_config().validate()?;
    let report = linkrank::run(config)
        .with_context(|| format!("ranking pages in {}", config.data_dir.display()))?;
    Ok(report)
}

fn print_top(report: &RankReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.top)?);
        }
        OutputFormat::Csv => {
            println!("page,rank");
            if let Some(top) = &report.top {
                println!("{},{:.5}", format_csv_value(&top.name), top.rank);
            }
        }
        OutputFormat::Table => match &report.top {
            Some(top) => println!("{}", top),
            None => println!("(no results)"),
        },
    }
    Ok(())
}

fn print_pages(report: &RankReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.pages)?);
        }
        OutputFormat::Csv => {
            println!("page,rank,votes");
            for page in &report.pages {
                let votes = page.vote_names().join(" ");
                println!(
                    "{},{:.5},{}",
                    format_csv_value(&page.name),
                    page.rank,
                    format_csv_value(&votes)
                );
            }
        }
        OutputFormat::Table => {
            for page in &report.pages {
                println!("{}", page);
            }
        }
    }
    Ok(())
}

fn print_ranks(report: &RankReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", report_json(report)?);
        }
        OutputFormat::Csv => {
            println!("page,rank");
            for score in &report.ranks {
                println!("{},{:.5}", format_csv_value(&score.name), score.rank);
            }
        }
        OutputFormat::Table => {
            if report.ranks.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["page", "rank"]);
            for score in &report.ranks {
                table.add_row(vec![score.name.clone(), format!("{:.5}", score.rank)]);
            }

            println!("{}", table);
            println!(
                "{} page(s), {} round(s), damping {}",
                report.ranks.len(),
                report.iterations,
                report.damping_factor
            );
        }
    }
    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

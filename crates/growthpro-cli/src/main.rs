use clap::{Args, Parser, Subcommand};
use growthpro_core::{
    generate_report, list_supported_categories, market_insights, regenerate_headline,
    BusinessQuery,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "growthpro")]
#[command(about = "Generate demo business-growth marketing reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a full metrics report for a business
    Report(BusinessArgs),
    /// Draw a new headline plus alternatives
    Headline(BusinessArgs),
    /// Show market context (keywords, seasonality, demographics)
    Insights(BusinessArgs),
    /// List detectable business categories and their keywords
    Categories,
}

#[derive(Debug, Args, PartialEq, Eq)]
struct BusinessArgs {
    /// Business name, e.g. "Tony's Pizza Kitchen"
    #[arg(long)]
    name: String,
    /// City or area, e.g. "New York"
    #[arg(long)]
    location: String,
    /// Seed the random source for reproducible output
    #[arg(long, env = "GROWTHPRO_SEED")]
    seed: Option<u64>,
}

impl BusinessArgs {
    fn query(&self) -> anyhow::Result<BusinessQuery> {
        Ok(BusinessQuery::new(&self.name, &self.location)?)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Report(args) => {
            let report = generate_report(&mut args.rng(), &args.query()?);
            tracing::debug!(
                business_type = %report.business_type,
                location_type = %report.location_type,
                "generated report"
            );
            print_json(&report)
        }
        Commands::Headline(args) => {
            print_json(&regenerate_headline(&mut args.rng(), &args.query()?))
        }
        Commands::Insights(args) => print_json(&market_insights(&args.query()?)),
        Commands::Categories => print_json(&list_supported_categories()),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "command failed");
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use travelbudget::logging::init_tracing;
use travelbudget::{BudgetEstimator, TravelBudgetConfig, TravelBudgetError, TravelPlan};

mod cli;

fn load_plan(path: Option<&Path>) -> Result<TravelPlan> {
    match path {
        Some(path) => TravelPlan::from_json_file(path)
            .with_context(|| format!("Failed to load plan file: {}", path.display())),
        None => Ok(TravelPlan::paris_example()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let result = run(args).await;
    if let Err(e) = &result {
        if let Some(err) = e.downcast_ref::<TravelBudgetError>() {
            eprintln!("{}", err.user_message());
        }
    }
    result
}

async fn run(args: cli::Cli) -> Result<()> {
    let config = TravelBudgetConfig::load_from_path(args.config.clone())?;
    init_tracing(&config.logging, args.verbose);

    let estimator = BudgetEstimator::from_config(&config)?;

    match args.get_command() {
        cli::Commands::Estimate { plan, refine } => {
            let plan = load_plan(plan.as_deref())?;
            let mut budget = estimator.estimate_budget(&plan);

            if refine {
                if estimator.can_refine() {
                    budget = estimator.refine_budget(&plan, &budget).await;
                } else {
                    warn!("--refine ignored: set llm.enabled and llm.api_key to use refinement");
                }
            }

            println!("Budget Estimation:");
            println!("{}", serde_json::to_string_pretty(&budget)?);
        }
        cli::Commands::Prices {
            destination,
            accommodation_type,
        } => {
            let prices = estimator.lookup_prices(&destination, &accommodation_type);
            println!("{}", serde_json::to_string_pretty(&prices)?);
        }
    }

    Ok(())
}

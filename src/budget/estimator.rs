//! Budget estimation entry points
//!
//! [`estimate`] is the deterministic core. [`BudgetEstimator`] bundles it
//! with the optional refinement client and the price source.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::budget::categories::{
    estimate_accommodation_cost, estimate_activity_cost, estimate_food_cost,
    estimate_miscellaneous_cost, estimate_transportation_cost,
};
use crate::budget::price_lookup::{PriceSource, StaticPriceSource};
use crate::budget::refinement::{self, RefinementOutcome};
use crate::config::TravelBudgetConfig;
use crate::llm::{LlmClient, OpenAiClient};
use crate::models::{BudgetBreakdown, TravelPlan};
use crate::Result;

/// Run the five category estimators and total them
#[must_use]
pub fn estimate(plan: &TravelPlan) -> BudgetBreakdown {
    BudgetBreakdown::new(
        estimate_accommodation_cost(plan.accommodation.as_ref(), plan.duration),
        estimate_transportation_cost(plan.transportation.as_ref()),
        estimate_activity_cost(&plan.activities),
        estimate_food_cost(&plan.destination, plan.duration),
        estimate_miscellaneous_cost(plan.duration),
    )
}

/// Estimates travel budgets, optionally refining them with a language model
pub struct BudgetEstimator {
    llm: Option<Arc<dyn LlmClient>>,
    prices: Arc<dyn PriceSource>,
}

impl Default for BudgetEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetEstimator {
    /// Estimator without refinement, using placeholder prices
    #[must_use]
    pub fn new() -> Self {
        Self {
            llm: None,
            prices: Arc::new(StaticPriceSource),
        }
    }

    /// Build from configuration; an OpenAI-compatible client is attached when `llm.enabled`
    pub fn from_config(config: &TravelBudgetConfig) -> Result<Self> {
        let estimator = Self::new();
        if !config.llm.enabled {
            return Ok(estimator);
        }
        let client = OpenAiClient::from_config(&config.llm)?;
        Ok(estimator.with_llm(Arc::new(client)))
    }

    #[must_use]
    pub fn with_llm(mut self, llm: Arc<dyn LlmClient>) -> Self {
        self.llm = Some(llm);
        self
    }

    #[must_use]
    pub fn with_price_source(mut self, prices: Arc<dyn PriceSource>) -> Self {
        self.prices = prices;
        self
    }

    #[must_use]
    pub fn can_refine(&self) -> bool {
        self.llm.is_some()
    }

    #[instrument(skip_all, fields(destination = %plan.destination, duration = plan.duration))]
    #[must_use]
    pub fn estimate_budget(&self, plan: &TravelPlan) -> BudgetBreakdown {
        let budget = estimate(plan);
        info!("Estimated total {:.2}", budget.total());
        budget
    }

    /// Refinement with the outcome kept, so callers can tell whether it took
    pub async fn refine_budget_outcome(
        &self,
        plan: &TravelPlan,
        initial: &BudgetBreakdown,
    ) -> RefinementOutcome {
        match &self.llm {
            Some(llm) => refinement::refine_with(llm.as_ref(), plan, initial).await,
            None => {
                warn!("No LLM client configured, keeping the initial estimate");
                RefinementOutcome::Unrefined {
                    original: *initial,
                    reason: "no LLM client configured".to_string(),
                }
            }
        }
    }

    /// Refine `initial`; on any failure `initial` comes back unchanged
    pub async fn refine_budget(
        &self,
        plan: &TravelPlan,
        initial: &BudgetBreakdown,
    ) -> BudgetBreakdown {
        self.refine_budget_outcome(plan, initial)
            .await
            .into_budget()
    }

    pub async fn estimate_and_refine(&self, plan: &TravelPlan) -> BudgetBreakdown {
        let initial = self.estimate_budget(plan);
        self.refine_budget(plan, &initial).await
    }

    #[must_use]
    pub fn lookup_prices(&self, destination: &str, accommodation_type: &str) -> BTreeMap<String, f64> {
        self.prices.lookup_prices(destination, accommodation_type)
    }
}

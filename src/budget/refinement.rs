//! Best-effort LLM refinement of a deterministic estimate

use tracing::{info, instrument, warn};

use crate::llm::LlmClient;
use crate::models::{BudgetBreakdown, TravelPlan};
use crate::{Result, TravelBudgetError};

/// What a refinement attempt produced
#[derive(Debug, Clone, PartialEq)]
pub enum RefinementOutcome {
    /// The model returned a usable breakdown
    Refined(BudgetBreakdown),
    /// The call or the reply failed; the estimate passed in is kept
    Unrefined {
        original: BudgetBreakdown,
        reason: String,
    },
}

impl RefinementOutcome {
    #[must_use]
    pub fn is_refined(&self) -> bool {
        matches!(self, Self::Refined(_))
    }

    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Refined(_) => None,
            Self::Unrefined { reason, .. } => Some(reason),
        }
    }

    /// Collapse to the breakdown a caller should use
    #[must_use]
    pub fn into_budget(self) -> BudgetBreakdown {
        match self {
            Self::Refined(budget) | Self::Unrefined { original: budget, .. } => budget,
        }
    }
}

/// Prompt asking the model to improve on `initial` for `plan`
pub fn build_prompt(plan: &TravelPlan, initial: &BudgetBreakdown) -> Result<String> {
    let plan_json = serde_json::to_string_pretty(plan)
        .map_err(|e| TravelBudgetError::parse(format!("Failed to serialize travel plan: {e}")))?;
    let budget_json = serde_json::to_string_pretty(initial)
        .map_err(|e| TravelBudgetError::parse(format!("Failed to serialize budget: {e}")))?;

    Ok(format!(
        "Given the following travel plan:\n\
         {plan_json}\n\
         \n\
         And the initial budget estimation:\n\
         {budget_json}\n\
         \n\
         Please provide a more accurate budget estimation considering:\n\
         1. Current market prices for the destination\n\
         2. Seasonal variations\n\
         3. Specific accommodation and transportation details\n\
         4. Activity costs\n\
         5. Food and miscellaneous expenses\n\
         \n\
         Return the refined budget in the same JSON format."
    ))
}

/// Drop a surrounding Markdown code fence, with or without a language tag
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a model reply into a breakdown. The reply's own total is not trusted.
pub fn parse_refined_budget(reply: &str) -> Result<BudgetBreakdown> {
    serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| TravelBudgetError::parse(format!("Unusable refinement reply: {e}")))
}

async fn request_refinement(
    llm: &dyn LlmClient,
    plan: &TravelPlan,
    initial: &BudgetBreakdown,
) -> Result<BudgetBreakdown> {
    let prompt = build_prompt(plan, initial)?;
    let reply = llm.complete(&prompt).await?;
    parse_refined_budget(&reply)
}

/// Ask the model for a better estimate, recording why it failed if it did
#[instrument(skip_all, fields(destination = %plan.destination, model = llm.model_name()))]
pub async fn refine_with(
    llm: &dyn LlmClient,
    plan: &TravelPlan,
    initial: &BudgetBreakdown,
) -> RefinementOutcome {
    match request_refinement(llm, plan, initial).await {
        Ok(refined) => {
            info!(
                "Refined total {:.2} (initial {:.2})",
                refined.total(),
                initial.total()
            );
            RefinementOutcome::Refined(refined)
        }
        Err(e) => {
            warn!("Error refining budget with LLM: {}", e);
            RefinementOutcome::Unrefined {
                original: *initial,
                reason: e.to_string(),
            }
        }
    }
}

/// Refine `initial`, falling back to it unchanged on any failure
pub async fn refine(
    llm: &dyn LlmClient,
    plan: &TravelPlan,
    initial: &BudgetBreakdown,
) -> BudgetBreakdown {
    refine_with(llm, plan, initial).await.into_budget()
}

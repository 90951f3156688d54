//! Closing narrative of the report.
//!
//! Pure formatting over aggregates computed earlier in the pipeline.

use serde::{Deserialize, Serialize};
use tally_analysis::ScaledClientSummary;

/// Figures quoted in the closing paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// Number of top clients summarised.
    pub client_count: usize,
    /// Units ordered by the client with the most entries.
    pub top_client_units: f64,
    /// Highest total profit among the summarised clients, in millions.
    pub max_profit_millions: Option<f64>,
}

impl Narrative {
    /// Build from the top client's units and the scaled summary rows.
    pub fn from_summary(top_client_units: f64, summary: &[ScaledClientSummary]) -> Self {
        let max_profit_millions = summary
            .iter()
            .map(|s| s.total_profit)
            .reduce(f64::max);

        Self {
            client_count: summary.len(),
            top_client_units,
            max_profit_millions,
        }
    }

    /// Render the paragraph.
    pub fn render(&self) -> String {
        let profit = self.max_profit_millions.map_or_else(
            || "no client profit figures were available".to_string(),
            |p| format!("with the highest total profits being {p:.2} million dollars"),
        );

        format!(
            "The analysis revealed that the top {} clients are significant contributors to the company's revenue and profit.\n\
             The client with the most entries ordered a total of {} units. Overall, these clients generated considerable profits, {}.\n",
            self.client_count, self.top_client_units, profit
        )
    }
}

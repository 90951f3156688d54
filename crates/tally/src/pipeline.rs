//! The report pipeline: explore, derive, validate, aggregate, narrate.

use crate::config::PipelineConfig;
use crate::error::Result;
use polars::prelude::DataFrame;
use tally_analysis::{
    ClientSummary, ColumnStats, GroupKey, OrderTotalResult, ScaledClientSummary, ValueCount,
    column_names, describe, most_frequent_where, scale_to_millions, sort_by_profit_desc,
    sum_where, summarize_groups, top_values, validate_order_totals,
};
use tally_data::columns::{CATEGORY, CLIENT_ID, QTY, SUB_CATEGORY};
use tally_data::load_orders;
use tally_output::{
    Narrative, ReportFormat, Section, client_revenue_table, column_stats_table, frame_preview,
    render_report, scaled_summary_table, value_count_table,
};
use tally_pricing::derive_columns;
use tracing::{debug, info};

const REPORT_TITLE: &str = "Client Order Report";

/// Runs every stage of the report over one order table.
#[derive(Debug, Clone, Default)]
pub struct ReportPipeline {
    config: PipelineConfig,
}

impl ReportPipeline {
    /// Create a pipeline with the given configuration.
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load the configured table and run every stage on it.
    pub fn run(&self) -> Result<PipelineReport> {
        let orders = load_orders(&self.config.data_path)?;
        self.run_on_frame(&orders)
    }

    /// Run every stage on an already loaded table.
    pub fn run_on_frame(&self, orders: &DataFrame) -> Result<PipelineReport> {
        let config = &self.config;
        info!(rows = orders.height(), "starting report pipeline");

        // Exploration
        let columns = column_names(orders);
        let statistics = describe(orders)?;
        let top_categories = top_values(orders, CATEGORY, config.top_categories)?;
        let top_subcategory = match top_categories.first() {
            Some(top) => most_frequent_where(orders, CATEGORY, &top.value, SUB_CATEGORY)?,
            None => None,
        };
        let top_clients = top_values(orders, CLIENT_ID, config.top_clients)?;
        let top_client_ids: Vec<GroupKey> =
            top_clients.iter().map(|vc| vc.value.clone()).collect();
        let top_client_units = match top_client_ids.first() {
            Some(id) => sum_where(orders, QTY, CLIENT_ID, id)?,
            None => 0.0,
        };
        debug!(
            categories = top_categories.len(),
            clients = top_clients.len(),
            "exploration complete"
        );

        // Derivation
        let derived = derive_columns(orders, &config.pricing)?;
        let preview = derived.head(Some(config.preview_rows));

        // Validation never fails the run
        let validation = validate_order_totals(&derived, &config.validation);
        info!(
            checked = validation.len(),
            matched = validation.iter().filter(|r| r.is_match()).count(),
            "validated order totals"
        );

        // Aggregation
        let client_summary = summarize_groups(&derived, CLIENT_ID, &top_client_ids)?;
        let mut scaled_summary = scale_to_millions(&client_summary);
        sort_by_profit_desc(&mut scaled_summary);
        info!(clients = client_summary.len(), "summarised top clients");

        let narrative = Narrative::from_summary(top_client_units, &scaled_summary);

        Ok(PipelineReport {
            columns,
            statistics,
            top_categories,
            top_subcategory,
            top_clients,
            top_client_units,
            preview,
            validation,
            client_summary,
            scaled_summary,
            narrative,
        })
    }
}

/// Every value computed by one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Column names of the source table.
    pub columns: Vec<String>,
    /// Statistics of the numeric source columns.
    pub statistics: Vec<ColumnStats>,
    /// Most frequent categories.
    pub top_categories: Vec<ValueCount>,
    /// Most frequent subcategory within the top category.
    pub top_subcategory: Option<GroupKey>,
    /// Clients with the most entries.
    pub top_clients: Vec<ValueCount>,
    /// Units ordered by the client with the most entries.
    pub top_client_units: f64,
    /// First rows of the derived table.
    pub preview: DataFrame,
    /// Order total checks.
    pub validation: Vec<OrderTotalResult>,
    /// Unscaled totals of the top clients, in ranking order.
    pub client_summary: Vec<ClientSummary>,
    /// Totals in millions, by descending profit.
    pub scaled_summary: Vec<ScaledClientSummary>,
    /// Closing paragraph.
    pub narrative: Narrative,
}

impl PipelineReport {
    /// Client id with the most entries.
    pub fn top_client(&self) -> Option<&GroupKey> {
        self.top_clients.first().map(|vc| &vc.value)
    }

    /// Unscaled totals of the top clients, by ascending client id.
    pub fn revenue_by_client(&self) -> Vec<ClientSummary> {
        let mut rows = self.client_summary.clone();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }

    /// Render every section in report order.
    pub fn render(&self, format: ReportFormat) -> String {
        render_report(REPORT_TITLE, &self.sections(), format)
    }

    fn sections(&self) -> Vec<Section> {
        let top_category = self
            .top_categories
            .first()
            .map_or_else(|| "none".to_string(), |vc| vc.value.to_string());
        let top_subcategory = self
            .top_subcategory
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let top_client = self
            .top_client()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let client_ids: Vec<String> = self
            .top_clients
            .iter()
            .map(|vc| vc.value.to_string())
            .collect();

        vec![
            Section::text("Column Names", self.columns.join(", ")),
            Section::table("Basic Statistics", column_stats_table(&self.statistics)),
            Section::table(
                format!("Top {} Item Categories", self.top_categories.len()),
                value_count_table("Category", &self.top_categories),
            ),
            Section::text(
                format!("Top Subcategory in {top_category}"),
                top_subcategory,
            ),
            Section::table(
                format!("Top {} Clients", self.top_clients.len()),
                value_count_table("Client ID", &self.top_clients),
            ),
            Section::text("Top Client IDs", client_ids.join(", ")),
            Section::text(
                format!("Total Units Ordered by Client {top_client}"),
                self.top_client_units.to_string(),
            ),
            Section::table(
                "Derived Columns",
                frame_preview(&self.preview, self.preview.height()),
            ),
            Section::lines(
                "Order Total Validation",
                self.validation.iter().map(ToString::to_string).collect(),
            ),
            Section::table(
                "Top Client Revenue",
                client_revenue_table(&self.revenue_by_client()),
            ),
            Section::table(
                "Client Summary (Millions)",
                scaled_summary_table(&self.scaled_summary),
            ),
            Section::text("Summary", self.narrative.render()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn orders() -> DataFrame {
        df! {
            "order_id" => [1_i64, 1, 2, 3],
            "client_id" => [7_i64, 7, 8, 7],
            "category" => ["Hardware", "Hardware", "Outdoor", "Hardware"],
            "sub_category" => ["Drills", "Saws", "Hoses", "Drills"],
            "unit_price" => [10.0, 20.0, 5.0, 1.0],
            "unit_cost" => [4.0, 10.0, 2.0, 0.5],
            "qty" => [5_i64, 1, 10, 2],
            "Weight" => [60.0, 1.0, 2.0, 3.0],
        }
        .unwrap()
    }

    #[test]
    fn test_stages_on_small_frame() {
        let config = PipelineConfig {
            validation: Vec::new(),
            ..PipelineConfig::default()
        };
        let report = ReportPipeline::new(config).run_on_frame(&orders()).unwrap();

        assert_eq!(report.top_client(), Some(&GroupKey::Int(7)));
        assert_eq!(report.top_subcategory, Some(GroupKey::from("Drills")));
        assert_eq!(report.top_client_units, 8.0);
        assert_eq!(report.preview.height(), 4);
        assert_eq!(report.client_summary.len(), 2);
        assert_eq!(report.narrative.client_count, 2);
    }

    #[test]
    fn test_revenue_listed_by_client_id() {
        let df = df! {
            "order_id" => [1_i64, 2, 3],
            "client_id" => [9_i64, 9, 3],
            "category" => ["Hardware", "Hardware", "Outdoor"],
            "sub_category" => ["Drills", "Saws", "Hoses"],
            "unit_price" => [10.0, 20.0, 5.0],
            "unit_cost" => [4.0, 10.0, 2.0],
            "qty" => [5_i64, 1, 10],
            "Weight" => [60.0, 1.0, 2.0],
        }
        .unwrap();
        let report = ReportPipeline::default().run_on_frame(&df).unwrap();

        let ranked: Vec<GroupKey> = report.client_summary.iter().map(|s| s.key.clone()).collect();
        assert_eq!(ranked, vec![GroupKey::Int(9), GroupKey::Int(3)]);

        let by_id: Vec<GroupKey> = report
            .revenue_by_client()
            .iter()
            .map(|s| s.key.clone())
            .collect();
        assert_eq!(by_id, vec![GroupKey::Int(3), GroupKey::Int(9)]);
    }
}

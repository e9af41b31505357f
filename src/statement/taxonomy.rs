//! The statement taxonomy: a fixed, closed set of statement categories, each
//! mapping to an ordered list of US-GAAP concept-id aliases. The category set
//! is fixed by design; the alias lists are data, loaded from an external JSON
//! definition so new filer tagging conventions need no code change.
//!
//! Alias order carries no priority — every alias present in the fact store is
//! unioned into the category, never first-match.

use serde::Deserialize;

use super::error::StatementError;

#[derive(Debug, Deserialize)]
pub struct Taxonomy {
    #[serde(rename = "Comprehensive Categorization of All Financial Items")]
    pub categories: Categories,
}

#[derive(Debug, Deserialize)]
pub struct Categories {
    #[serde(rename = "Balance Sheet Items")]
    pub balance_sheet: BalanceSheetTags,
    #[serde(rename = "Income Statement Items")]
    pub income_statement: IncomeStatementTags,
    #[serde(rename = "Cash Flow Statement Items")]
    pub cash_flow: CashFlowTags,
    #[serde(rename = "Other Comprehensive Income Items")]
    pub other_comprehensive_income: Vec<String>,
    #[serde(rename = "Financial Metrics and Ratios")]
    pub financial_metrics: Vec<String>,
    #[serde(rename = "Share-Based Compensation")]
    pub share_based_compensation: Vec<String>,
    #[serde(rename = "Taxes")]
    pub taxes: Vec<String>,
    #[serde(rename = "Leases")]
    pub leases: Vec<String>,
    #[serde(rename = "Debt and Borrowings")]
    pub debt_and_borrowings: Vec<String>,
    #[serde(rename = "Intangible Assets and Goodwill")]
    pub intangibles_and_goodwill: Vec<String>,
    #[serde(rename = "Commitments and Contingencies")]
    pub commitments_and_contingencies: Vec<String>,
    #[serde(rename = "Derivatives and Hedging")]
    pub derivatives_and_hedging: Vec<String>,
    #[serde(rename = "Stock and Equity-related Items")]
    pub stock_and_equity: Vec<String>,
    #[serde(rename = "Other Financial Items")]
    pub other_financial_items: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BalanceSheetTags {
    #[serde(rename = "Assets")]
    pub assets: AssetTags,
    #[serde(rename = "Liabilities")]
    pub liabilities: LiabilityTags,
    #[serde(rename = "Equity")]
    pub equity: Vec<String>,
    #[serde(rename = "Total Liabilities and Equity")]
    pub total_liabilities_and_equity: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssetTags {
    #[serde(rename = "Current Assets")]
    pub current_assets: Vec<String>,
    #[serde(rename = "Non-Current Assets")]
    pub non_current_assets: Vec<String>,
    #[serde(rename = "Total Assets")]
    pub total_assets: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LiabilityTags {
    #[serde(rename = "Current Liabilities")]
    pub current_liabilities: Vec<String>,
    #[serde(rename = "Non-Current Liabilities")]
    pub non_current_liabilities: Vec<String>,
    #[serde(rename = "Total Liabilities")]
    pub total_liabilities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct IncomeStatementTags {
    #[serde(rename = "Revenue")]
    pub revenue: Vec<String>,
    #[serde(rename = "Cost of Revenue")]
    pub cost_of_revenue: Vec<String>,
    #[serde(rename = "Gross Profit")]
    pub gross_profit: Vec<String>,
    #[serde(rename = "Operating Expenses")]
    pub operating_expenses: Vec<String>,
    #[serde(rename = "Operating Income/Loss")]
    pub operating_income_loss: Vec<String>,
    #[serde(rename = "Other Income/Expense")]
    pub other_income_expense: Vec<String>,
    #[serde(rename = "Income Before Tax")]
    pub income_before_tax: Vec<String>,
    #[serde(rename = "Income Tax")]
    pub income_tax: Vec<String>,
    #[serde(rename = "Net Income/Loss")]
    pub net_income_loss: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CashFlowTags {
    #[serde(rename = "Operating Activities")]
    pub operating_activities: Vec<String>,
    #[serde(rename = "Investing Activities")]
    pub investing_activities: Vec<String>,
    #[serde(rename = "Financing Activities")]
    pub financing_activities: Vec<String>,
    #[serde(rename = "Cash and Cash Equivalents")]
    pub cash_and_cash_equivalents: Vec<String>,
}

impl Taxonomy {
    /// Parses a taxonomy definition document.
    pub fn parse(json: &str) -> Result<Taxonomy, StatementError> {
        serde_json::from_str(json).map_err(StatementError::MalformedTaxonomy)
    }
}

//! The assembled statement document. Its shape mirrors the taxonomy exactly:
//! every leaf category is a sequence of line items, and an empty sequence
//! means "nothing matched", never an error.

use serde::Serialize;

use super::model::LineItem;

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub balance_sheet: BalanceSheet,
    pub income_statement: IncomeStatement,
    pub cash_flow_statement: CashFlowStatement,
    pub other_comprehensive_income_items: Vec<LineItem>,
    pub financial_metrics_and_ratios: Vec<LineItem>,
    pub share_based_compensation: Vec<LineItem>,
    pub taxes: Vec<LineItem>,
    pub leases: Vec<LineItem>,
    pub debt_and_borrowings: Vec<LineItem>,
    pub intangible_assets_and_goodwill: Vec<LineItem>,
    pub commitments_and_contingencies: Vec<LineItem>,
    pub derivatives_and_hedging: Vec<LineItem>,
    pub stock_and_equity_related_items: Vec<LineItem>,
    pub other_financial_items: Vec<LineItem>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceSheet {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub equity: Vec<LineItem>,
    pub total_liabilities_and_equity: Vec<LineItem>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Assets {
    pub current_assets: Vec<LineItem>,
    pub non_current_assets: Vec<LineItem>,
    pub total_assets: Vec<LineItem>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Liabilities {
    pub current_liabilities: Vec<LineItem>,
    pub non_current_liabilities: Vec<LineItem>,
    pub total_liabilities: Vec<LineItem>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct IncomeStatement {
    pub revenue: Vec<LineItem>,
    pub cost_of_revenue: Vec<LineItem>,
    pub gross_profit: Vec<LineItem>,
    pub operating_expenses: Vec<LineItem>,
    pub operating_income_loss: Vec<LineItem>,
    pub other_income_expense: Vec<LineItem>,
    pub income_before_tax: Vec<LineItem>,
    pub income_tax: Vec<LineItem>,
    pub net_income_loss: Vec<LineItem>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CashFlowStatement {
    pub operating_activities: Vec<LineItem>,
    pub investing_activities: Vec<LineItem>,
    pub financing_activities: Vec<LineItem>,
    pub cash_and_cash_equivalents: Vec<LineItem>,
}

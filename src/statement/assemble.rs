//! The resolve/filter/collect engine. One generic procedure runs over every
//! category path of the taxonomy; the original per-statement assembly
//! functions collapse into [`line_items`] parameterized by alias list.

use super::model::{Fact, FactStore, FilterContext, LineItem, Observation};
use super::output::{
    Assets, BalanceSheet, CashFlowStatement, IncomeStatement, Liabilities, Statement,
};
use super::taxonomy::Taxonomy;

/// Resolves a category's alias list against the store, preserving alias
/// order. Aliases a filer never reported are skipped: absence is the common
/// case, not an error.
pub fn resolve_facts<'a>(store: &'a FactStore, aliases: &[String]) -> Vec<&'a Fact> {
    aliases
        .iter()
        .filter_map(|alias| store.get(alias))
        .collect()
}

/// Selects the observations of one fact that satisfy the filter context,
/// preserving the fact's original observation order.
pub fn relevant_observations(fact: &Fact, ctx: &FilterContext) -> Vec<Observation> {
    fact.observations
        .iter()
        .filter(|obs| ctx.matches(obs))
        .cloned()
        .collect()
}

/// Resolve, filter, collect for one category. A fact with no surviving
/// observations contributes no line item at all, so consumers can tell
/// "not reported" apart from "reported as zero".
pub fn line_items(store: &FactStore, aliases: &[String], ctx: &FilterContext) -> Vec<LineItem> {
    resolve_facts(store, aliases)
        .into_iter()
        .filter_map(|fact| {
            let entries = relevant_observations(fact, ctx);
            if entries.is_empty() {
                return None;
            }
            Some(LineItem {
                tag: fact.concept_id.clone(),
                entries,
            })
        })
        .collect()
}

/// Drives the resolve/filter/collect procedure over every category path in
/// the taxonomy. Infallible: inputs are validated at parse time, and every
/// resolution step degrades to empty rather than erroring.
pub fn assemble(store: &FactStore, taxonomy: &Taxonomy, ctx: &FilterContext) -> Statement {
    let cats = &taxonomy.categories;
    let items = |aliases: &[String]| line_items(store, aliases, ctx);

    Statement {
        balance_sheet: BalanceSheet {
            assets: Assets {
                current_assets: items(&cats.balance_sheet.assets.current_assets),
                non_current_assets: items(&cats.balance_sheet.assets.non_current_assets),
                total_assets: items(&cats.balance_sheet.assets.total_assets),
            },
            liabilities: Liabilities {
                current_liabilities: items(&cats.balance_sheet.liabilities.current_liabilities),
                non_current_liabilities: items(
                    &cats.balance_sheet.liabilities.non_current_liabilities,
                ),
                total_liabilities: items(&cats.balance_sheet.liabilities.total_liabilities),
            },
            equity: items(&cats.balance_sheet.equity),
            total_liabilities_and_equity: items(&cats.balance_sheet.total_liabilities_and_equity),
        },
        income_statement: IncomeStatement {
            revenue: items(&cats.income_statement.revenue),
            cost_of_revenue: items(&cats.income_statement.cost_of_revenue),
            gross_profit: items(&cats.income_statement.gross_profit),
            operating_expenses: items(&cats.income_statement.operating_expenses),
            operating_income_loss: items(&cats.income_statement.operating_income_loss),
            other_income_expense: items(&cats.income_statement.other_income_expense),
            income_before_tax: items(&cats.income_statement.income_before_tax),
            income_tax: items(&cats.income_statement.income_tax),
            net_income_loss: items(&cats.income_statement.net_income_loss),
        },
        cash_flow_statement: CashFlowStatement {
            operating_activities: items(&cats.cash_flow.operating_activities),
            investing_activities: items(&cats.cash_flow.investing_activities),
            financing_activities: items(&cats.cash_flow.financing_activities),
            cash_and_cash_equivalents: items(&cats.cash_flow.cash_and_cash_equivalents),
        },
        other_comprehensive_income_items: items(&cats.other_comprehensive_income),
        financial_metrics_and_ratios: items(&cats.financial_metrics),
        share_based_compensation: items(&cats.share_based_compensation),
        taxes: items(&cats.taxes),
        leases: items(&cats.leases),
        debt_and_borrowings: items(&cats.debt_and_borrowings),
        intangible_assets_and_goodwill: items(&cats.intangibles_and_goodwill),
        commitments_and_contingencies: items(&cats.commitments_and_contingencies),
        derivatives_and_hedging: items(&cats.derivatives_and_hedging),
        stock_and_equity_related_items: items(&cats.stock_and_equity),
        other_financial_items: items(&cats.other_financial_items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::model::Observation;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn obs(form: &str, fy: i32, val: i64) -> Observation {
        Observation {
            period_end: NaiveDate::from_ymd_opt(fy, 12, 31).unwrap(),
            value: Decimal::from(val),
            fiscal_year: fy,
            fiscal_period: "FY".to_string(),
            form: form.to_string(),
        }
    }

    fn fact(concept_id: &str, observations: Vec<Observation>) -> Fact {
        Fact {
            concept_id: concept_id.to_string(),
            label: concept_id.to_string(),
            observations,
        }
    }

    fn store(facts: Vec<Fact>) -> FactStore {
        let map: HashMap<String, Fact> = facts
            .into_iter()
            .map(|f| (f.concept_id.clone(), f))
            .collect();
        FactStore::new(0, "Test Co".to_string(), map)
    }

    fn ctx(form: &str, fy: i32) -> FilterContext {
        FilterContext {
            form: form.to_string(),
            fiscal_year: fy,
        }
    }

    fn aliases(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn resolve_preserves_alias_order_and_skips_absent_tags() {
        let store = store(vec![
            fact("NetIncomeLoss", vec![]),
            fact("Revenues", vec![]),
        ]);
        let resolved = resolve_facts(
            &store,
            &aliases(&["Revenues", "SalesRevenueNet", "NetIncomeLoss"]),
        );
        let ids: Vec<&str> = resolved.iter().map(|f| f.concept_id.as_str()).collect();
        assert_eq!(ids, vec!["Revenues", "NetIncomeLoss"]);
    }

    #[test]
    fn filter_requires_both_form_and_fiscal_year() {
        let fact = fact(
            "Revenues",
            vec![
                obs("10-K", 2023, 100),
                obs("10-Q", 2023, 25),
                obs("10-K", 2022, 90),
            ],
        );
        let kept = relevant_observations(&fact, &ctx("10-K", 2023));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].value, Decimal::from(100));
        assert_eq!(kept[0].form, "10-K");
        assert_eq!(kept[0].fiscal_year, 2023);
    }

    #[test]
    fn amended_forms_are_not_folded_into_their_base_form() {
        let fact = fact("Assets", vec![obs("10-K/A", 2023, 500)]);
        assert!(relevant_observations(&fact, &ctx("10-K", 2023)).is_empty());
        assert_eq!(relevant_observations(&fact, &ctx("10-K/A", 2023)).len(), 1);
    }

    // Filers pick different tags for the same economic fact; the category
    // must fill from whichever alias carries data.
    #[test]
    fn alias_union_matches_whichever_tag_the_filer_used() {
        let store = store(vec![fact(
            "RevenueFromContractWithCustomerExcludingAssessedTax",
            vec![obs("10-K", 2023, 1_000_000)],
        )]);
        let tags = aliases(&[
            "Revenues",
            "RevenueFromContractWithCustomerExcludingAssessedTax",
        ]);

        let items = line_items(&store, &tags, &ctx("10-K", 2023));
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].tag,
            "RevenueFromContractWithCustomerExcludingAssessedTax"
        );
        assert_eq!(items[0].entries.len(), 1);
        assert_eq!(items[0].entries[0].value, Decimal::from(1_000_000));
    }

    #[test]
    fn mismatched_fiscal_year_yields_an_empty_category() {
        let store = store(vec![fact(
            "RevenueFromContractWithCustomerExcludingAssessedTax",
            vec![obs("10-K", 2023, 1_000_000)],
        )]);
        let tags = aliases(&[
            "Revenues",
            "RevenueFromContractWithCustomerExcludingAssessedTax",
        ]);

        let items = line_items(&store, &tags, &ctx("10-K", 2022));
        assert!(items.is_empty());
    }

    #[test]
    fn no_line_item_is_fabricated_for_a_fully_filtered_fact() {
        // Revenues has data, but only for 10-Q; it must be absent, not an
        // empty placeholder next to the surviving NetIncomeLoss item.
        let store = store(vec![
            fact("Revenues", vec![obs("10-Q", 2023, 25)]),
            fact("NetIncomeLoss", vec![obs("10-K", 2023, 10)]),
        ]);
        let items = line_items(
            &store,
            &aliases(&["Revenues", "NetIncomeLoss"]),
            &ctx("10-K", 2023),
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tag, "NetIncomeLoss");
        assert!(items.iter().all(|li| !li.entries.is_empty()));
    }

    #[test]
    fn line_item_order_follows_alias_order() {
        let store = store(vec![
            fact("NetIncomeLoss", vec![obs("10-K", 2023, 10)]),
            fact("ProfitLoss", vec![obs("10-K", 2023, 12)]),
            fact("Revenues", vec![obs("10-K", 2023, 100)]),
        ]);
        let items = line_items(
            &store,
            &aliases(&["ProfitLoss", "Revenues", "NetIncomeLoss"]),
            &ctx("10-K", 2023),
        );
        let tags: Vec<&str> = items.iter().map(|li| li.tag.as_str()).collect();
        assert_eq!(tags, vec!["ProfitLoss", "Revenues", "NetIncomeLoss"]);
    }

    #[test]
    fn entries_keep_the_facts_observation_order() {
        let fact = fact(
            "Assets",
            vec![
                obs("10-K", 2023, 300),
                obs("10-K", 2023, 100),
                obs("10-K", 2023, 200),
            ],
        );
        let kept = relevant_observations(&fact, &ctx("10-K", 2023));
        let vals: Vec<Decimal> = kept.iter().map(|o| o.value).collect();
        assert_eq!(
            vals,
            vec![Decimal::from(300), Decimal::from(100), Decimal::from(200)]
        );
    }
}

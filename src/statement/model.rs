use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One reported value of a concept, scoped to a fiscal period and the filing
/// it was sourced from. Field names on the wire follow the registry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "end")]
    pub period_end: NaiveDate,
    #[serde(rename = "val", with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
    #[serde(rename = "fy")]
    pub fiscal_year: i32,
    #[serde(rename = "fp")]
    pub fiscal_period: String,
    pub form: String,
}

/// All historical observations reported under one US-GAAP concept for one
/// entity, in the order the registry reported them.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub concept_id: String,
    pub label: String,
    pub observations: Vec<Observation>,
}

/// In-memory company facts, keyed by concept id. Built once per run from the
/// registry payload and read-only afterwards.
#[derive(Debug, Default)]
pub struct FactStore {
    pub cik: u64,
    pub entity_name: String,
    facts: HashMap<String, Fact>,
}

impl FactStore {
    pub fn new(cik: u64, entity_name: String, facts: HashMap<String, Fact>) -> Self {
        FactStore {
            cik,
            entity_name,
            facts,
        }
    }

    pub fn get(&self, concept_id: &str) -> Option<&Fact> {
        self.facts.get(concept_id)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

/// Narrows one assembly run to a single filing form and fiscal year. Both
/// predicates are exact-equality; "10-K/A" is not folded into "10-K".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterContext {
    pub form: String,
    pub fiscal_year: i32,
}

impl FilterContext {
    pub fn matches(&self, obs: &Observation) -> bool {
        obs.form == self.form && obs.fiscal_year == self.fiscal_year
    }
}

/// One concept's observations that survived filtering for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub tag: String,
    pub entries: Vec<Observation>,
}

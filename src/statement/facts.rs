//! Wire-schema types for the registry's `companyfacts` payload and the
//! mapping step that flattens them into the internal [`FactStore`] model.
//! Registry schema drift only touches this layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use super::error::StatementError;
use super::model::{Fact, FactStore, Observation};

#[derive(Debug, Deserialize)]
pub struct CompanyFacts {
    pub cik: u64,
    #[serde(rename = "entityName")]
    pub entity_name: String,
    pub facts: FactGroups,
}

#[derive(Debug, Deserialize)]
pub struct FactGroups {
    #[serde(rename = "us-gaap", default)]
    pub us_gaap: HashMap<String, ConceptData>,
}

#[derive(Debug, Deserialize)]
pub struct ConceptData {
    pub label: Option<String>,
    pub units: UnitData,
}

/// Only the USD bucket is read; concepts reported exclusively in other units
/// (shares, pure ratios, foreign currencies) are dropped during flattening.
#[derive(Debug, Deserialize)]
pub struct UnitData {
    #[serde(rename = "USD", default)]
    pub usd: Vec<UnitEntry>,
}

#[derive(Debug, Deserialize)]
pub struct UnitEntry {
    pub end: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub val: Decimal,
    // fy/fp are null on some older registry entries; those observations can
    // never satisfy an exact-match filter and are skipped while flattening.
    #[serde(default)]
    pub fy: Option<i32>,
    #[serde(default)]
    pub fp: Option<String>,
    pub form: String,
}

impl FactStore {
    /// Parses a raw `companyfacts` JSON document into a fact store.
    pub fn parse(json: &str) -> Result<FactStore, StatementError> {
        let dto: CompanyFacts =
            serde_json::from_str(json).map_err(StatementError::MalformedFacts)?;
        Ok(dto.into())
    }
}

impl From<CompanyFacts> for FactStore {
    fn from(dto: CompanyFacts) -> Self {
        let mut facts = HashMap::with_capacity(dto.facts.us_gaap.len());
        for (concept_id, concept) in dto.facts.us_gaap {
            if concept.units.usd.is_empty() {
                continue;
            }
            let observations: Vec<Observation> = concept
                .units
                .usd
                .into_iter()
                .filter_map(|entry| {
                    let (fy, fp) = match (entry.fy, entry.fp) {
                        (Some(fy), Some(fp)) => (fy, fp),
                        _ => return None,
                    };
                    Some(Observation {
                        period_end: entry.end,
                        value: entry.val,
                        fiscal_year: fy,
                        fiscal_period: fp,
                        form: entry.form,
                    })
                })
                .collect();
            facts.insert(
                concept_id.clone(),
                Fact {
                    concept_id,
                    label: concept.label.unwrap_or_default(),
                    observations,
                },
            );
        }
        FactStore::new(dto.cik, dto.entity_name, facts)
    }
}

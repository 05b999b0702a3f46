//! Dashboard figures derived from the full tender list.

use chrono::Datelike;
use serde::Serialize;

use models::tender::Tender;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
const TOP_ENTITIES: usize = 5;
const AWARDED: &str = "Awarded";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderStats {
    pub total_tenders: usize,
    /// Budget figures only consider amounts greater than zero.
    pub average_budget: f64,
    pub highest_budget: f64,
    pub lowest_budget: f64,
    pub awarded_tenders: usize,
    pub deadlines_by_month: Vec<MonthCount>,
    pub top_entities: Vec<EntityCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCount {
    pub procuring_entity: String,
    pub count: usize,
}

impl TenderStats {
    pub fn from_tenders(tenders: &[Tender]) -> Self {
        let budgets: Vec<f64> = tenders.iter().map(|t| t.budget_amount).filter(|b| *b > 0.0).collect();
        let (average_budget, highest_budget, lowest_budget) = if budgets.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let total: f64 = budgets.iter().sum();
            (
                total / budgets.len() as f64,
                budgets.iter().copied().fold(f64::MIN, f64::max),
                budgets.iter().copied().fold(f64::MAX, f64::min),
            )
        };

        let awarded_tenders = tenders
            .iter()
            .filter(|t| t.status.as_deref() == Some(AWARDED))
            .count();

        let mut per_month = [0usize; 12];
        for deadline in tenders.iter().filter_map(|t| t.tender_deadline) {
            per_month[deadline.month0() as usize] += 1;
        }
        let deadlines_by_month = MONTHS
            .iter()
            .zip(per_month)
            .map(|(month, count)| MonthCount { month: *month, count })
            .collect();

        Self {
            total_tenders: tenders.len(),
            average_budget,
            highest_budget,
            lowest_budget,
            awarded_tenders,
            deadlines_by_month,
            top_entities: top_entities(tenders),
        }
    }
}

// Ties keep first-seen order (stable sort over insertion order).
fn top_entities(tenders: &[Tender]) -> Vec<EntityCount> {
    let mut counts: Vec<EntityCount> = Vec::new();
    for entity in tenders.iter().filter_map(|t| t.procuring_entity.as_deref()) {
        match counts.iter_mut().find(|c| c.procuring_entity == entity) {
            Some(c) => c.count += 1,
            None => counts.push(EntityCount { procuring_entity: entity.to_string(), count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_ENTITIES);
    counts
}

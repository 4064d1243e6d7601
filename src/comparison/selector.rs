use std::{cmp::Ordering, collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::currency::format_yen;

use super::catalog::{comparison_items, ComparisonItem};

/// Smallest quantity still considered relatable.
pub const MIN_QUANTITY: f64 = 0.5;
/// Largest quantity still considered relatable.
pub const MAX_QUANTITY: f64 = 20.0;
/// Results returned per call.
pub const MAX_RESULTS: usize = 3;

const RANGE_BONUS: f64 = 0.3;
const SNAP_TOLERANCE: f64 = 0.1;
// Selections that must land on a fresh basis before the constraint is relaxed.
const DIVERSE_PICKS: usize = 2;

/// Which cost a comparison quantity was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonPeriod {
    Day,
    Month,
    Year,
}

impl ComparisonPeriod {
    pub const ALL: [ComparisonPeriod; 3] = [
        ComparisonPeriod::Day,
        ComparisonPeriod::Month,
        ComparisonPeriod::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonPeriod::Day => "day",
            ComparisonPeriod::Month => "month",
            ComparisonPeriod::Year => "year",
        }
    }
}

impl fmt::Display for ComparisonPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selected comparison, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub name: String,
    pub price: u64,
    pub unit: String,
    pub quantity: String,
    pub period: ComparisonPeriod,
}

impl ComparisonResult {
    /// e.g. `Video streaming plan x3 per month (¥1,000 per month)`.
    pub fn describe(&self) -> String {
        format!(
            "{} x{} per {} ({} per {})",
            self.name,
            self.quantity,
            self.period,
            format_yen(self.price),
            self.unit
        )
    }
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    item: &'a ComparisonItem,
    period: ComparisonPeriod,
    quantity: f64,
    score: f64,
}

/// Picks up to three relatable comparisons from a price catalog.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonSelector<'a> {
    catalog: &'a [ComparisonItem],
}

impl Default for ComparisonSelector<'static> {
    fn default() -> Self {
        Self::new(comparison_items())
    }
}

impl<'a> ComparisonSelector<'a> {
    pub fn new(catalog: &'a [ComparisonItem]) -> Self {
        Self { catalog }
    }

    pub fn select(&self, daily: f64, monthly: f64, yearly: f64) -> Vec<ComparisonResult> {
        let candidates = self.ranked_candidates([daily, monthly, yearly]);
        let mut picked: Vec<&Candidate<'a>> = Vec::with_capacity(MAX_RESULTS);
        let mut names: HashSet<&str> = HashSet::new();
        let mut periods: HashSet<ComparisonPeriod> = HashSet::new();

        for candidate in &candidates {
            if picked.len() >= MAX_RESULTS {
                break;
            }
            if names.contains(candidate.item.name.as_str()) {
                continue;
            }
            if picked.len() < DIVERSE_PICKS && periods.contains(&candidate.period) {
                continue;
            }
            names.insert(candidate.item.name.as_str());
            periods.insert(candidate.period);
            picked.push(candidate);
        }

        for candidate in &candidates {
            if picked.len() >= MAX_RESULTS {
                break;
            }
            if names.insert(candidate.item.name.as_str()) {
                picked.push(candidate);
            }
        }

        picked
            .into_iter()
            .map(|candidate| ComparisonResult {
                name: candidate.item.name.clone(),
                price: candidate.item.price,
                unit: candidate.item.unit.clone(),
                quantity: format_quantity(candidate.quantity),
                period: candidate.period,
            })
            .collect()
    }

    fn ranked_candidates(&self, bases: [f64; 3]) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::new();
        for item in self.catalog {
            if item.price == 0 {
                continue;
            }
            for (period, base) in ComparisonPeriod::ALL.into_iter().zip(bases) {
                let quantity = base / item.price as f64;
                if let Some(score) = score_quantity(quantity) {
                    candidates.push(Candidate {
                        item,
                        period,
                        quantity,
                        score,
                    });
                }
            }
        }
        // Stable: ties keep catalog order, then Day/Month/Year.
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        candidates
    }
}

/// Convenience wrapper over the built-in catalog.
pub fn select_comparison_items(daily: f64, monthly: f64, yearly: f64) -> Vec<ComparisonResult> {
    ComparisonSelector::default().select(daily, monthly, yearly)
}

/// `None` when the quantity falls outside the relatable range.
pub fn score_quantity(quantity: f64) -> Option<f64> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return None;
    }
    Some(integer_proximity(quantity) + range_bonus(quantity))
}

fn integer_proximity(quantity: f64) -> f64 {
    1.0 - 2.0 * (quantity - quantity.round()).abs()
}

fn range_bonus(quantity: f64) -> f64 {
    if (1.0..=5.0).contains(&quantity) {
        RANGE_BONUS
    } else {
        0.0
    }
}

pub fn format_quantity(quantity: f64) -> String {
    let nearest = quantity.round();
    if (quantity - nearest).abs() < SNAP_TOLERANCE || quantity >= 10.0 {
        format!("{}", nearest as i64)
    } else {
        format!("{:.1}", quantity)
    }
}

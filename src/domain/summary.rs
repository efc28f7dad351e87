//! Financial summary. Pure reduction over a business's transactions; no I/O.

use crate::domain::{Business, Transaction, TransactionKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Margin (percent) above which a business counts as healthy.
pub const HEALTHY_MARGIN: f64 = 20.0;

/// Coarse judgment of financial health derived from the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Healthy,
    Caution,
    Critical,
}

impl HealthBand {
    /// `> 20` healthy, `(0, 20]` caution, `<= 0` critical.
    pub fn classify(margin: f64) -> Self {
        if margin > HEALTHY_MARGIN {
            HealthBand::Healthy
        } else if margin > 0.0 {
            HealthBand::Caution
        } else {
            HealthBand::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::Caution => "caution",
            HealthBand::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub revenue: f64,
    pub costs: f64,
    pub net_profit: f64,
    /// Net profit as a percentage of revenue; 0 when there is no revenue.
    pub margin: f64,
    pub health_band: HealthBand,
}

impl Summary {
    pub fn of(business: &Business) -> Self {
        summarize(&business.transactions)
    }

    /// Local narrative used when the advisor cannot be reached.
    pub fn basic_report(&self, currency: &str) -> String {
        format!(
            "Basic analysis: profit {:.2} {} | margin {:.1}% | health {}",
            self.net_profit, currency, self.margin, self.health_band
        )
    }
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    // Summed in ascending order so storage order cannot change the result.
    let total = |kind: TransactionKind| -> f64 {
        let mut amounts: Vec<f64> = transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .collect();
        amounts.sort_by(f64::total_cmp);
        amounts.iter().sum()
    };
    let revenue = total(TransactionKind::Sale);
    let costs = total(TransactionKind::Cost);
    let net_profit = revenue - costs;
    let margin = if revenue > 0.0 {
        net_profit / revenue * 100.0
    } else {
        0.0
    };

    Summary {
        revenue,
        costs,
        net_profit,
        margin,
        health_band: HealthBand::classify(margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusinessId, TransactionId};
    use chrono::Utc;

    fn tx(id: u64, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: TransactionId(id),
            business_id: BusinessId(1),
            amount,
            kind,
            category: "other".to_string(),
            description: String::new(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_loja_a_scenario() {
        let txs = vec![
            tx(1, 1000.0, TransactionKind::Sale),
            tx(2, 300.0, TransactionKind::Cost),
        ];
        let s = summarize(&txs);
        assert_eq!(s.revenue, 1000.0);
        assert_eq!(s.costs, 300.0);
        assert_eq!(s.net_profit, 700.0);
        assert_eq!(s.margin, 70.0);
        assert_eq!(s.health_band, HealthBand::Healthy);
    }

    #[test]
    fn test_empty_is_critical() {
        let s = summarize(&[]);
        assert_eq!(s.revenue, 0.0);
        assert_eq!(s.costs, 0.0);
        assert_eq!(s.net_profit, 0.0);
        assert_eq!(s.margin, 0.0);
        assert_eq!(s.health_band, HealthBand::Critical);
    }

    #[test]
    fn test_costs_without_revenue_have_zero_margin() {
        let s = summarize(&[tx(1, 250.0, TransactionKind::Cost)]);
        assert_eq!(s.net_profit, -250.0);
        assert_eq!(s.margin, 0.0);
        assert_eq!(s.health_band, HealthBand::Critical);
    }

    #[test]
    fn test_health_band_boundaries() {
        assert_eq!(HealthBand::classify(20.0), HealthBand::Caution);
        assert_eq!(HealthBand::classify(20.0001), HealthBand::Healthy);
        assert_eq!(HealthBand::classify(0.0), HealthBand::Critical);
        assert_eq!(HealthBand::classify(-5.0), HealthBand::Critical);
        assert_eq!(HealthBand::classify(0.5), HealthBand::Caution);
    }

    #[test]
    fn test_margin_of_exactly_twenty_is_caution() {
        // 1000 revenue, 800 costs -> 200 profit -> 20%
        let s = summarize(&[
            tx(1, 1000.0, TransactionKind::Sale),
            tx(2, 800.0, TransactionKind::Cost),
        ]);
        assert_eq!(s.margin, 20.0);
        assert_eq!(s.health_band, HealthBand::Caution);
    }

    #[test]
    fn test_profit_identity_and_order_independence() {
        let mut txs: Vec<Transaction> = (0..50)
            .map(|i| {
                let kind = if i % 3 == 0 {
                    TransactionKind::Cost
                } else {
                    TransactionKind::Sale
                };
                tx(i, (i as f64) * 13.37 + 0.1, kind)
            })
            .collect();
        let forward = summarize(&txs);
        assert!((forward.revenue - forward.costs - forward.net_profit).abs() < 1e-9);

        txs.reverse();
        let backward = summarize(&txs);
        assert!((forward.revenue - backward.revenue).abs() < 1e-9);
        assert!((forward.costs - backward.costs).abs() < 1e-9);
        assert!((forward.margin - backward.margin).abs() < 1e-9);
        assert_eq!(forward.health_band, backward.health_band);
    }

    #[test]
    fn test_reordering_near_healthy_boundary_is_identical() {
        let forward = vec![
            tx(1, 0.1, TransactionKind::Sale),
            tx(2, 0.2, TransactionKind::Sale),
            tx(3, 0.3, TransactionKind::Sale),
            tx(4, 0.48, TransactionKind::Cost),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut interleaved = forward.clone();
        interleaved.swap(0, 3);
        interleaved.swap(1, 2);

        let a = summarize(&forward);
        assert_eq!(a, summarize(&reversed));
        assert_eq!(a, summarize(&interleaved));
        assert_eq!(a.health_band, summarize(&reversed).health_band);
    }

    #[test]
    fn test_basic_report_contains_figures() {
        let s = summarize(&[
            tx(1, 1000.0, TransactionKind::Sale),
            tx(2, 300.0, TransactionKind::Cost),
        ]);
        assert_eq!(
            s.basic_report("MT"),
            "Basic analysis: profit 700.00 MT | margin 70.0% | health healthy"
        );
    }

    #[test]
    fn test_health_band_serializes_lowercase() {
        let json = serde_json::to_string(&HealthBand::Caution).unwrap();
        assert_eq!(json, "\"caution\"");
    }
}

use std::collections::BTreeMap;
use std::fmt::Write;

use rust_decimal::Decimal;
use tracing::info;

use crate::transaction::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_amount: Decimal,
    pub by_status: BTreeMap<&'static str, usize>,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        // No currency normalization: amounts are summed as reported.
        let total_amount: Decimal = transactions.iter().map(|tx| tx.amount).sum();

        let mut by_status = BTreeMap::new();
        for tx in transactions {
            let status = tx.status.map(|s| s.as_str()).unwrap_or("unknown");
            *by_status.entry(status).or_insert(0) += 1;
        }

        info!(
            count = transactions.len(),
            %total_amount,
            "generated transaction summary"
        );
        Self {
            count: transactions.len(),
            total_amount,
            by_status,
        }
    }

    pub fn render(&self) -> String {
        if self.count == 0 {
            return "No transactions found.\n".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Found {} transactions", self.count);
        let _ = writeln!(out, "Total amount: ${:.2}", self.total_amount);
        let _ = writeln!(out, "Transaction statuses:");
        for (status, count) in &self.by_status {
            let _ = writeln!(out, "  - {status}: {count}");
        }
        out
    }
}

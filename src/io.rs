use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::ExportError;
use crate::transaction::Transaction;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    amount: String,
    bank_description: String,
    counterparty_id: String,
    counterparty_name: String,
    counterparty_nickname: String,
    created_at: String,
    dashboard_link: String,
    details: String,
    estimated_delivery_date: String,
    failed_at: String,
    id: String,
    kind: String,
    note: String,
    external_memo: String,
    posted_at: String,
    reason_for_failure: String,
    status: String,
    fee_id: String,
    currency_exchange_info: String,
    compliant_with_receipt_policy: String,
    has_generated_receipt: String,
    credit_account_period_id: String,
    mercury_category: String,
    general_ledger_code_name: String,
    attachments: String,
    related_transactions: String,
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_date(value: &Option<DateTime<Utc>>) -> String {
    value.map(|date| date.to_rfc3339()).unwrap_or_default()
}

fn opt_bool(value: &Option<bool>) -> String {
    value.map(|b| b.to_string()).unwrap_or_default()
}

// Nested structures land in a single column as their JSON form.
fn opt_json<T: Serialize>(value: &Option<T>) -> Result<String, ExportError> {
    Ok(value
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?
        .unwrap_or_default())
}

impl TryFrom<&Transaction> for CsvRow {
    type Error = ExportError;

    fn try_from(tx: &Transaction) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: tx.amount.to_string(),
            bank_description: opt_str(&tx.bank_description),
            counterparty_id: opt_str(&tx.counterparty_id),
            counterparty_name: opt_str(&tx.counterparty_name),
            counterparty_nickname: opt_str(&tx.counterparty_nickname),
            created_at: opt_date(&tx.created_at),
            dashboard_link: opt_str(&tx.dashboard_link),
            details: opt_json(&tx.details)?,
            estimated_delivery_date: opt_date(&tx.estimated_delivery_date),
            failed_at: opt_date(&tx.failed_at),
            id: opt_str(&tx.id),
            kind: tx.kind.map(|k| k.as_str().to_string()).unwrap_or_default(),
            note: opt_str(&tx.note),
            external_memo: opt_str(&tx.external_memo),
            posted_at: opt_date(&tx.posted_at),
            reason_for_failure: opt_str(&tx.reason_for_failure),
            status: tx
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            fee_id: opt_str(&tx.fee_id),
            currency_exchange_info: opt_json(&tx.currency_exchange_info)?,
            compliant_with_receipt_policy: opt_bool(&tx.compliant_with_receipt_policy),
            has_generated_receipt: opt_bool(&tx.has_generated_receipt),
            credit_account_period_id: opt_str(&tx.credit_account_period_id),
            mercury_category: opt_str(&tx.mercury_category),
            general_ledger_code_name: opt_str(&tx.general_ledger_code_name),
            attachments: opt_json(&tx.attachments)?,
            related_transactions: opt_json(&tx.related_transactions)?,
        })
    }
}

pub fn write_transactions<W: Write>(
    writer: W,
    transactions: &[Transaction],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for tx in transactions {
        csv_writer.serialize(CsvRow::try_from(tx)?)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> Result<(), ExportError> {
    let path = path.as_ref();
    info!(
        count = transactions.len(),
        path = %path.display(),
        "saving transactions to CSV"
    );
    let file = File::create(path)?;
    write_transactions(file, transactions)?;
    info!(count = transactions.len(), "transactions saved");
    Ok(())
}

use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::client::{PAGE_SIZE, PageQuery, TransactionSource};
use crate::error::ExportError;
use crate::transaction::Transaction;

pub fn fetch_all<S: TransactionSource>(
    source: &S,
    account_id: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<Transaction>, ExportError> {
    if account_id.is_empty() {
        error!("account id is required for fetching transactions");
        return Err(ExportError::MissingAccountId);
    }

    info!(account_id, "starting to fetch all transactions");

    let mut all = Vec::new();
    let mut offset = 0;
    loop {
        debug!(offset, "fetching transactions with offset");
        let query = PageQuery::new(offset, start_date, end_date);
        let page = source.transactions_page(account_id, &query)?;
        let fetched = page.transactions.len();
        all.extend(page.transactions);

        // A page shorter than the limit means the server has no further data.
        if fetched < PAGE_SIZE {
            break;
        }
        offset += PAGE_SIZE;
    }

    info!(count = all.len(), "retrieved all transactions");
    Ok(all)
}

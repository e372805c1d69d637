use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::account::{Account, AccountsResponse};
use crate::error::ExportError;
use crate::transaction::{Page, map_page};

pub const BASE_URL: &str = "https://api.mercury.com/api/v1";

// Maximum page size allowed by the API.
pub const PAGE_SIZE: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub limit: usize,
    pub offset: usize,
    pub order: SortOrder,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PageQuery {
    pub fn new(offset: usize, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            limit: PAGE_SIZE,
            offset,
            order: SortOrder::Desc,
            start_date,
            end_date,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("order", self.order.as_str().to_string()),
        ];
        if let Some(start) = self.start_date {
            params.push(("start_date", start.to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.to_string()));
        }
        params
    }
}

pub trait TransactionSource {
    fn transactions_page(&self, account_id: &str, query: &PageQuery) -> Result<Page, ExportError>;
}

pub struct Client {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        info!("initializing Mercury API client");
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn request(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value, ExportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "making API request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!(status = status.as_u16(), %body, "API request failed");
            return Err(ExportError::Request {
                status: status.as_u16(),
                body,
            });
        }

        debug!("API request successful");
        Ok(response.json()?)
    }

    pub fn accounts(&self) -> Result<Vec<Account>, ExportError> {
        info!("fetching all available bank accounts");
        let value = self.request("/accounts", &[])?;
        let response: AccountsResponse = serde_json::from_value(value)?;
        info!(count = response.accounts.len(), "retrieved accounts");
        Ok(response.accounts)
    }
}

impl TransactionSource for Client {
    fn transactions_page(&self, account_id: &str, query: &PageQuery) -> Result<Page, ExportError> {
        if account_id.is_empty() {
            error!("account id is required for fetching transactions");
            return Err(ExportError::MissingAccountId);
        }

        debug!(
            account_id,
            limit = query.limit,
            offset = query.offset,
            "fetching transactions page"
        );
        let path = format!("/account/{account_id}/transactions");
        let value = self.request(&path, &query.params())?;
        map_page(value)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use chrono::NaiveDate;
    use rust_decimal::dec;

    use super::*;
    use crate::transaction::TransactionKind;

    // One-shot HTTP server returning a canned response.
    fn spawn_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let mut read = 0;
                loop {
                    match stream.read(&mut buf[read..]) {
                        Ok(0) => break,
                        Ok(n) => {
                            read += n;
                            if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    #[test]
    fn accounts_decodes_response() {
        let base_url = spawn_server(
            "200 OK",
            r#"{"accounts":[{"id":"acc-1","name":"Checking"}]}"#,
        );
        let client = Client::with_base_url(base_url, "test-key");
        let accounts = client.accounts().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "acc-1");
        assert_eq!(accounts[0].name, "Checking");
    }

    #[test]
    fn non_success_status_carries_status_and_body() {
        let base_url = spawn_server("403 Forbidden", r#"{"error":"invalid api key"}"#);
        let client = Client::with_base_url(base_url, "bad-key");
        let err = client.accounts().unwrap_err();
        match err {
            ExportError::Request { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, r#"{"error":"invalid api key"}"#);
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[test]
    fn transactions_page_maps_records() {
        let base_url = spawn_server(
            "200 OK",
            r#"{"total":1,"transactions":[{"amount":25.5,"id":"tx-1","kind":"wireFee","status":"sent"}]}"#,
        );
        let client = Client::with_base_url(base_url, "test-key");
        let page = client
            .transactions_page("acc-1", &PageQuery::new(0, None, None))
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.transactions[0].amount, dec!(25.5));
        assert_eq!(page.transactions[0].kind, Some(TransactionKind::WireFee));
    }

    #[test]
    fn transactions_page_requires_account_id() {
        let client = Client::with_base_url("http://127.0.0.1:9", "test-key");
        let err = client
            .transactions_page("", &PageQuery::new(0, None, None))
            .unwrap_err();
        assert!(matches!(err, ExportError::MissingAccountId));
    }

    #[test]
    fn page_query_params_without_dates() {
        let query = PageQuery::new(500, None, None);
        assert_eq!(
            query.params(),
            vec![
                ("limit", "500".to_string()),
                ("offset", "500".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn page_query_params_with_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let query = PageQuery::new(0, Some(start), Some(end));
        let params = query.params();
        assert!(params.contains(&("start_date", "2024-02-01".to_string())));
        assert!(params.contains(&("end_date", "2024-03-01".to_string())));
    }
}

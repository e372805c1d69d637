use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExportError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    ExternalTransfer,
    InternalTransfer,
    OutgoingPayment,
    CreditCardCredit,
    CreditCardTransaction,
    DebitCardTransaction,
    IncomingDomesticWire,
    CheckDeposit,
    IncomingInternationalWire,
    TreasuryTransfer,
    WireFee,
    CardInternationalTransactionFee,
    Other,
}

impl TransactionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalTransfer => "externalTransfer",
            Self::InternalTransfer => "internalTransfer",
            Self::OutgoingPayment => "outgoingPayment",
            Self::CreditCardCredit => "creditCardCredit",
            Self::CreditCardTransaction => "creditCardTransaction",
            Self::DebitCardTransaction => "debitCardTransaction",
            Self::IncomingDomesticWire => "incomingDomesticWire",
            Self::CheckDeposit => "checkDeposit",
            Self::IncomingInternationalWire => "incomingInternationalWire",
            Self::TreasuryTransfer => "treasuryTransfer",
            Self::WireFee => "wireFee",
            Self::CardInternationalTransactionFee => "cardInternationalTransactionFee",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Sent,
    Cancelled,
    Failed,
}

impl TransactionStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentType {
    CheckImage,
    Receipt,
    Other,
}

impl AttachmentType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckImage => "checkImage",
            Self::Receipt => "receipt",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomesticWireRoutingInfo {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicRoutingInfo {
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub bank_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondentInfo {
    pub routing_number: Option<String>,
    pub swift_code: Option<String>,
    pub bank_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub bank_name: Option<String>,
    pub city_state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecificData {
    pub country_specific_data_canada: Option<HashMap<String, String>>,
    pub country_specific_data_australia: Option<HashMap<String, String>>,
    pub country_specific_data_india: Option<HashMap<String, String>>,
    pub country_specific_data_russia: Option<HashMap<String, String>>,
    pub country_specific_data_philippines: Option<HashMap<String, String>>,
    pub country_specific_data_south_africa: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternationalWireRoutingInfo {
    pub iban: Option<String>,
    pub swift_code: Option<String>,
    pub correspondent_info: Option<CorrespondentInfo>,
    pub bank_details: Option<BankDetails>,
    pub address: Option<Address>,
    pub phone_number: Option<String>,
    pub country_specific: Option<CountrySpecificData>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub address: Option<Address>,
    pub domestic_wire_routing_info: Option<DomesticWireRoutingInfo>,
    pub electronic_routing_info: Option<ElectronicRoutingInfo>,
    pub international_wire_routing_info: Option<InternationalWireRoutingInfo>,
    pub debit_card_info: Option<CardInfo>,
    pub credit_card_info: Option<CardInfo>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyExchangeInfo {
    pub converted_from_currency: String,
    pub converted_to_currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub converted_from_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub converted_to_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee_amount: Decimal,
    pub fee_percentage: f64,
    pub exchange_rate: f64,
    pub fee_transaction_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub url: String,
    pub attachment_type: AttachmentType,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub bank_description: Option<String>,
    pub counterparty_id: Option<String>,
    pub counterparty_name: Option<String>,
    pub counterparty_nickname: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub dashboard_link: Option<String>,
    pub details: Option<TransactionDetails>,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub id: Option<String>,
    pub kind: Option<TransactionKind>,
    pub note: Option<String>,
    pub external_memo: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub reason_for_failure: Option<String>,
    pub status: Option<TransactionStatus>,
    pub fee_id: Option<String>,
    pub currency_exchange_info: Option<CurrencyExchangeInfo>,
    pub compliant_with_receipt_policy: Option<bool>,
    pub has_generated_receipt: Option<bool>,
    pub credit_account_period_id: Option<String>,
    pub mercury_category: Option<String>,
    pub general_ledger_code_name: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
    pub related_transactions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub total: u64,
    pub transactions: Vec<Transaction>,
}

pub fn map_record(value: Value) -> Result<Transaction, ExportError> {
    Ok(serde_json::from_value(value)?)
}

pub fn map_page(mut value: Value) -> Result<Page, ExportError> {
    let total = value.get("total").and_then(Value::as_u64).unwrap_or(0);
    let records = match value.get_mut("transactions").map(Value::take) {
        Some(Value::Array(records)) => records,
        _ => Vec::new(),
    };
    let transactions = records
        .into_iter()
        .map(map_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page {
        total,
        transactions,
    })
}

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::info;

use crate::account::Account;
use crate::error::ExportError;

pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, ExportError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn select_account<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    accounts: &[Account],
) -> Result<Option<String>, ExportError> {
    let choice = prompt_line(
        input,
        output,
        "\nEnter account number to fetch transactions for (or press Enter for all accounts): ",
    )?;

    match choice.parse::<usize>() {
        Ok(index) if index >= 1 && index <= accounts.len() => {
            let account = &accounts[index - 1];
            info!(account_id = %account.id, "selected account");
            writeln!(output, "Selected account: {}", account.name)?;
            Ok(Some(account.id.clone()))
        }
        _ => Ok(None),
    }
}

pub fn prompt_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: NaiveDate,
) -> Result<NaiveDate, ExportError> {
    let entered = prompt_line(input, output, message)?;
    if entered.is_empty() {
        return Ok(default);
    }
    NaiveDate::parse_from_str(&entered, "%Y-%m-%d").map_err(|_| ExportError::InvalidDate(entered))
}

pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<bool, ExportError> {
    let answer = prompt_line(input, output, message)?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

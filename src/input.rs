//! Parsing of free-text user input into typed values.
//!
//! Everything here runs before the session is touched, so a rejected line
//! never leaves partial state behind.

use crate::common::types::{Kilobytes, PageNo};
use crate::error::ValidationError;
use crate::session::FileRequest;

/// Parse a number, rejecting blanks, garbage, NaN and infinities
pub fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    let value: f64 = input.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: input.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    Ok(value)
}

/// Parse a non-negative size in kilobytes
pub fn parse_kb(field: &'static str, input: &str) -> Result<Kilobytes, ValidationError> {
    let value = parse_number(field, input)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeSize { field, value });
    }
    Ok(value)
}

pub fn parse_length(field: &'static str, input: &str) -> Result<usize, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    input.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: input.to_string(),
    })
}

/// Parse page numbers separated by commas and/or whitespace
pub fn parse_reference_string(input: &str) -> Result<Vec<PageNo>, ValidationError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|_| ValidationError::NotANumber {
                field: "reference string",
                input: token.to_string(),
            })
        })
        .collect()
}

/// Parse `name size_kb allocated_kb ref_length` from whitespace-separated
/// fields
pub fn parse_file_fields<'a, I>(mut fields: I) -> Result<FileRequest, ValidationError>
where
    I: Iterator<Item = &'a str>,
{
    let name = fields.next().ok_or(ValidationError::MissingField("file name"))?;
    let size_kb = parse_kb("file size", fields.next().unwrap_or(""))?;
    let allocated_kb = parse_kb("allocated RAM", fields.next().unwrap_or(""))?;
    let reference_length = parse_length("reference string length", fields.next().unwrap_or(""))?;
    Ok(FileRequest::new(name, size_kb, allocated_kb, reference_length))
}

/// Parse one line of a batch file. Blank lines and `#` comments yield `None`.
pub fn parse_file_line(line: &str) -> Option<Result<FileRequest, ValidationError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(parse_file_fields(line.split_whitespace()))
}

/// Parse a compact `name:size_kb:allocated_kb:ref_length` argument
pub fn parse_file_arg(arg: &str) -> Result<FileRequest, ValidationError> {
    parse_file_fields(arg.split(':'))
}

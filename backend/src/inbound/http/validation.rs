//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs carry raw strings; these helpers parse them into domain
//! types and report failures as `InvalidRequest` with field-level details.

use std::str::FromStr;

use serde_json::json;
use uuid::Uuid;

use crate::domain::{ComplaintId, Error, ParseEnumError, UserId};

/// Validation error codes surfaced in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn parse_complaint_id(value: &str) -> Result<ComplaintId, Error> {
    parse_uuid(value, FieldName::new("id")).map(ComplaintId::from_uuid)
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    parse_uuid(value, field).map(UserId::from_uuid)
}

/// Parse a closed-enum wire name such as `"In-Progress"`.
pub(crate) fn parse_enum<T>(value: &str, field: FieldName) -> Result<T, Error>
where
    T: FromStr<Err = ParseEnumError>,
{
    value.parse().map_err(|err: ParseEnumError| {
        let field = field.as_str();
        Error::invalid_request(format!("{field} is not a recognised {}", err.kind()))
            .with_details(json!({
                "field": field,
                "value": err.value(),
                "code": ErrorCode::InvalidValue.as_str(),
            }))
    })
}

pub(crate) fn parse_optional_enum<T>(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error>
where
    T: FromStr<Err = ParseEnumError>,
{
    value.map(|raw| parse_enum(raw, field)).transpose()
}

//! Gateway types
//!
//! ## Input
//! - [`StrictDecimal`]: format-checked decimal (JSON number or string)
//! - [`ScheduleRequest`]: `POST /api/schedules` body, field rules via `validator`
//! - [`ValidatedSchedule`]: extractor yielding a [`TransferOrder`] plus the
//!   date it was validated against
//!
//! ## Output
//! - [`ApiError`] / [`ErrorBody`]: `{ error, status, details? }`

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::state::AppState;
use crate::scheduling::{SchedulingError, TransferOrder};

/// Digits in an account number
pub const ACCOUNT_DIGITS: usize = 10;

/// Largest accepted principal (1,000,000,000,000.00)
// Mantissa 100_000_000_000_000 (0x5AF3_107A_4000) with scale 2
pub const MAX_TRANSFER_VALUE: Decimal = Decimal::from_parts(0x107A_4000, 0x5AF3, 0, false, 2);

// ============================================================================
// StrictDecimal: Format-Validated Decimal at Serde Layer
// ============================================================================

/// Strict format Decimal - validates format during deserialization
///
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects empty strings
///
/// Sign and range checks are field validation, not format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Support both JSON number and JSON string
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        match DecimalOrString::deserialize(deserializer)? {
            DecimalOrString::String(s) => {
                if s.is_empty() {
                    return Err(D::Error::custom("Amount cannot be empty"));
                }
                if s.starts_with('.') {
                    return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
                }
                if s.ends_with('.') {
                    return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
                }

                Decimal::from_str(&s)
                    .map(StrictDecimal)
                    .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))
            }
            DecimalOrString::Number(d) => Ok(StrictDecimal(d)),
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// Schedule transfer request (HTTP body)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Account to debit (10 digits)
    #[schema(value_type = String, example = "1234567890")]
    #[validate(
        required(message = "Origin account is required."),
        custom(function = "validate_origin_account")
    )]
    pub origin_account: Option<String>,

    /// Account to credit (10 digits)
    #[schema(value_type = String, example = "0987654321")]
    #[validate(
        required(message = "Destination account is required."),
        custom(function = "validate_destination_account")
    )]
    pub destination_account: Option<String>,

    /// Principal, JSON number or string
    #[schema(value_type = String, example = "500.00")]
    #[validate(
        required(message = "The transfer value is required."),
        custom(function = "validate_value")
    )]
    pub value: Option<StrictDecimal>,

    /// Execution date, today or later (`YYYY-MM-DD`)
    #[schema(value_type = String, format = Date, example = "2026-10-19")]
    #[validate(required(message = "The transfer date is required."))]
    pub transfer_date: Option<NaiveDate>,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn is_account_number(s: &str) -> bool {
    s.len() == ACCOUNT_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

fn validate_origin_account(value: &str) -> Result<(), ValidationError> {
    if is_account_number(value) {
        Ok(())
    } else {
        Err(field_error(
            "account_format",
            "Origin account must have 10 digits.",
        ))
    }
}

fn validate_destination_account(value: &str) -> Result<(), ValidationError> {
    if is_account_number(value) {
        Ok(())
    } else {
        Err(field_error(
            "account_format",
            "Destination account must have 10 digits.",
        ))
    }
}

fn validate_value(value: &StrictDecimal) -> Result<(), ValidationError> {
    let value = value.inner();
    if value <= Decimal::ZERO {
        Err(field_error("positive", "The value must be positive."))
    } else if value > MAX_TRANSFER_VALUE {
        Err(field_error("max", "The value is too large."))
    } else {
        Ok(())
    }
}

impl ScheduleRequest {
    /// Run field rules plus the `transferDate >= today` rule.
    ///
    /// All failures are reported together.
    pub fn validate_on(self, today: NaiveDate) -> Result<TransferOrder, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        if self.transfer_date.is_some_and(|date| date < today) {
            errors.add(
                "transfer_date",
                field_error(
                    "future_or_present",
                    "The transfer date cannot be in the past.",
                ),
            );
        }

        match (
            self.origin_account,
            self.destination_account,
            self.value,
            self.transfer_date,
        ) {
            (Some(origin_account), Some(destination_account), Some(value), Some(transfer_date))
                if errors.is_empty() =>
            {
                Ok(TransferOrder {
                    origin_account,
                    destination_account,
                    value: value.inner(),
                    transfer_date,
                })
            }
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Extractor
// ============================================================================

/// Validated schedule extractor.
///
/// Parses and validates the body before the handler runs. `today` is read
/// from the service clock once and must be reused for scheduling.
#[derive(Debug)]
pub struct ValidatedSchedule {
    pub order: TransferOrder,
    pub today: NaiveDate,
}

impl FromRequest<Arc<AppState>> for ValidatedSchedule {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let Json(body): Json<ScheduleRequest> = Json::from_request(req, state).await?;

        let today = state.scheduling.today();
        let order = body.validate_on(today).inspect_err(|e| {
            tracing::warn!(today = %today, "Schedule request rejected: {}", e);
        })?;

        Ok(ValidatedSchedule { order, today })
    }
}

// ============================================================================
// Errors
// ============================================================================

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "originAccount")]
    pub field: String,
    #[schema(example = "Origin account must have 10 digits.")]
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(
        example = "No applicable tax rule found for transfers scheduled with 51 days advance."
    )]
    pub error: String,
    #[schema(example = 400)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// Error returned by handlers and extractors
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Vec<FieldError>,
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            details: Vec::new(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal server error".to_string(),
            details: Vec::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            status: self.status.as_u16(),
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<SchedulingError> for ApiError {
    fn from(e: SchedulingError) -> Self {
        match e {
            SchedulingError::Repository(ref inner) => {
                // Storage details stay in the log
                tracing::error!(code = e.code(), "Repository failure: {}", inner);
                ApiError::internal()
            }
            SchedulingError::TransferDateInPast { .. } => {
                let message = e.to_string();
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: message.clone(),
                    details: vec![FieldError {
                        field: "transferDate".to_string(),
                        message,
                    }],
                }
            }
            SchedulingError::NoTaxRuleFound { .. } => ApiError {
                status: StatusCode::from_u16(e.http_status())
                    .unwrap_or(StatusCode::BAD_REQUEST),
                error: e.to_string(),
                details: Vec::new(),
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = camel_case(field.as_ref());
                errs.iter()
                    .map(|err| FieldError {
                        field: field.clone(),
                        message: err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string()),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));

        let error = details
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        ApiError {
            status: StatusCode::BAD_REQUEST,
            error,
            details,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid JSON: {}", rejection.body_text()))
    }
}

/// `transfer_date` -> `transferDate`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn parse(json: &str) -> ScheduleRequest {
        serde_json::from_str(json).unwrap()
    }

    // =========================================================================
    // StrictDecimal Tests
    // =========================================================================

    #[test]
    fn test_strict_decimal_valid_string() {
        let d: StrictDecimal = serde_json::from_str(r#""500.00""#).unwrap();
        assert_eq!(d.inner(), Decimal::from_str("500.00").unwrap());
        assert_eq!(d.inner().scale(), 2);
    }

    #[test]
    fn test_strict_decimal_valid_number() {
        let d: StrictDecimal = serde_json::from_str("1.5").unwrap();
        assert_eq!(d.inner(), Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_strict_decimal_rejects_dot_prefix() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#"".5""#);
        assert!(result.unwrap_err().to_string().contains("use 0.5 not .5"));
    }

    #[test]
    fn test_strict_decimal_rejects_dot_suffix() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#""5.""#);
        assert!(result.unwrap_err().to_string().contains("use 5.0 not 5."));
    }

    #[test]
    fn test_strict_decimal_rejects_empty() {
        let result: Result<StrictDecimal, _> = serde_json::from_str(r#""""#);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    // =========================================================================
    // ScheduleRequest Validation Tests
    // =========================================================================

    #[test]
    fn test_valid_request_builds_order() {
        let req = parse(
            r#"{"originAccount":"1234567890","destinationAccount":"0987654321","value":"500.00","transferDate":"2026-10-19"}"#,
        );
        let order = req.validate_on(today()).unwrap();
        assert_eq!(order.origin_account, "1234567890");
        assert_eq!(order.destination_account, "0987654321");
        assert_eq!(order.value, Decimal::new(50000, 2));
        assert_eq!(order.transfer_date, today());
    }

    #[test]
    fn test_high_precision_value_accepted() {
        let req = parse(
            r#"{"originAccount":"1234567890","destinationAccount":"0987654321","value":100.005,"transferDate":"2026-10-20"}"#,
        );
        let order = req.validate_on(today()).unwrap();
        assert_eq!(order.value, Decimal::from_str("100.005").unwrap());
    }

    #[test]
    fn test_bad_accounts_reported() {
        let req = parse(
            r#"{"originAccount":"12345","destinationAccount":"abcdefghij","value":"10","transferDate":"2026-10-19"}"#,
        );
        let err = ApiError::from(req.validate_on(today()).unwrap_err());
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.details,
            vec![
                FieldError {
                    field: "destinationAccount".into(),
                    message: "Destination account must have 10 digits.".into(),
                },
                FieldError {
                    field: "originAccount".into(),
                    message: "Origin account must have 10 digits.".into(),
                },
            ]
        );
        assert!(err.error.contains("Origin account must have 10 digits."));
    }

    #[test]
    fn test_eleven_digits_rejected() {
        assert!(!is_account_number("12345678901"));
        assert!(!is_account_number("123456789"));
        assert!(!is_account_number("12345 7890"));
        assert!(is_account_number("0000000000"));
    }

    #[test]
    fn test_zero_and_negative_value_rejected() {
        for value in ["0", "-1.00"] {
            let req = parse(&format!(
                r#"{{"originAccount":"1234567890","destinationAccount":"0987654321","value":"{}","transferDate":"2026-10-19"}}"#,
                value
            ));
            let err = ApiError::from(req.validate_on(today()).unwrap_err());
            assert_eq!(err.details.len(), 1);
            assert_eq!(err.details[0].field, "value");
            assert_eq!(err.details[0].message, "The value must be positive.");
        }
    }

    #[test]
    fn test_value_upper_bound() {
        let request = |value: &str| {
            parse(&format!(
                r#"{{"originAccount":"1234567890","destinationAccount":"0987654321","value":"{}","transferDate":"2026-10-19"}}"#,
                value
            ))
        };

        let at_max = request("1000000000000.00").validate_on(today()).unwrap();
        assert_eq!(at_max.value, MAX_TRANSFER_VALUE);

        for value in ["1000000000000.01", "79228162514264337593543950335"] {
            let err = ApiError::from(request(value).validate_on(today()).unwrap_err());
            assert_eq!(
                err.details,
                vec![FieldError {
                    field: "value".into(),
                    message: "The value is too large.".into(),
                }]
            );
        }
    }

    #[test]
    fn test_past_date_rejected() {
        let req = parse(
            r#"{"originAccount":"1234567890","destinationAccount":"0987654321","value":"10","transferDate":"2026-10-18"}"#,
        );
        let err = ApiError::from(req.validate_on(today()).unwrap_err());
        assert_eq!(
            err.details,
            vec![FieldError {
                field: "transferDate".into(),
                message: "The transfer date cannot be in the past.".into(),
            }]
        );
    }

    #[test]
    fn test_missing_fields_reported_as_required() {
        let req = parse("{}");
        let err = ApiError::from(req.validate_on(today()).unwrap_err());
        let fields: Vec<&str> = err.details.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["destinationAccount", "originAccount", "transferDate", "value"]
        );
        assert!(err.error.contains("Origin account is required."));
        assert!(err.error.contains("The transfer date is required."));
    }

    // =========================================================================
    // ApiError Mapping Tests
    // =========================================================================

    #[test]
    fn test_no_tax_rule_maps_to_bad_request() {
        let err = ApiError::from(SchedulingError::NoTaxRuleFound { day_offset: 51 });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.error,
            "No applicable tax rule found for transfers scheduled with 51 days advance."
        );
        assert!(err.details.is_empty());
    }

    #[test]
    fn test_repository_error_hides_details() {
        let err = ApiError::from(SchedulingError::Repository(
            crate::scheduling::RepositoryError::Unavailable("secret host".into()),
        ));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.error.contains("secret host"));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "boom".into(),
            status: 400,
            details: Vec::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "boom", "status": 400}));
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("transfer_date"), "transferDate");
        assert_eq!(camel_case("origin_account"), "originAccount");
        assert_eq!(camel_case("value"), "value");
        assert_eq!(camel_case("originAccount"), "originAccount");
    }
}

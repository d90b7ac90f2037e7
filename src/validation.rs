//! Declarative per-route request validation.
//!
//! Every route declares an ordered list of [`Rule`]s over its path parameters
//! and body fields. Evaluation runs the whole list and collects every failure
//! in rule order; the handler only runs when the list is clean. A missing
//! body field fails each rule that targets it, so a POST without `price`
//! reports the numeric, non-empty and positive messages together.

use serde_json::Value;

use crate::error::{AppError, FieldError};

pub const MSG_INVALID_ID: &str = "ID no Válido";
pub const MSG_NAME_EMPTY: &str = "El nombre del producto no puede ir vacío";
pub const MSG_PRICE_NOT_NUMERIC: &str = "Valor no válido";
pub const MSG_PRICE_EMPTY: &str = "El precio del producto no puede ir vacío";
pub const MSG_PRICE_NOT_POSITIVE: &str = "Precio no válido";
pub const MSG_AVAILABILITY_NOT_BOOL: &str = "Valor para disponibilidad no válido";

/// Where a rule reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A path parameter, always textual.
    Param,
    /// A field of the JSON body.
    Body,
}

/// Predicate applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    IsInt,
    NotEmpty,
    IsNumeric,
    IsBoolean,
    Positive,
}

/// One declared rule: field, source, predicate and its fixed message.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub source: Source,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            source: Source::Param,
            check,
            message,
        }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            source: Source::Body,
            check,
            message,
        }
    }
}

/// Rules for routes whose only input is the `:id` path parameter.
pub const ID_RULES: &[Rule] = &[Rule::param("id", Check::IsInt, MSG_INVALID_ID)];

/// Rules for POST /: name and price from the body.
pub const CREATE_RULES: &[Rule] = &[
    Rule::body("name", Check::NotEmpty, MSG_NAME_EMPTY),
    Rule::body("price", Check::IsNumeric, MSG_PRICE_NOT_NUMERIC),
    Rule::body("price", Check::NotEmpty, MSG_PRICE_EMPTY),
    Rule::body("price", Check::Positive, MSG_PRICE_NOT_POSITIVE),
];

/// Rules for PUT /:id: id plus the full body shape.
pub const UPDATE_RULES: &[Rule] = &[
    Rule::param("id", Check::IsInt, MSG_INVALID_ID),
    Rule::body("name", Check::NotEmpty, MSG_NAME_EMPTY),
    Rule::body("price", Check::IsNumeric, MSG_PRICE_NOT_NUMERIC),
    Rule::body("price", Check::NotEmpty, MSG_PRICE_EMPTY),
    Rule::body("price", Check::Positive, MSG_PRICE_NOT_POSITIVE),
    Rule::body("availability", Check::IsBoolean, MSG_AVAILABILITY_NOT_BOOL),
];

/// Evaluate every rule, collecting all failures in rule order.
///
/// `params` holds the route's path parameters by name; `body` is the parsed
/// JSON body (`Value::Null` for body-less routes).
pub fn run_rules(rules: &[Rule], params: &[(&str, &str)], body: &Value) -> Result<(), AppError> {
    let mut errors = Vec::new();
    for rule in rules {
        let passed = match rule.source {
            Source::Param => params
                .iter()
                .find(|(name, _)| *name == rule.field)
                .map(|(_, value)| check_str(rule.check, value))
                .unwrap_or(false),
            Source::Body => check_value(rule.check, body.get(rule.field)),
        };
        if !passed {
            errors.push(FieldError::new(rule.field, rule.message));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn check_str(check: Check, value: &str) -> bool {
    match check {
        Check::IsInt => value.parse::<i64>().is_ok(),
        Check::NotEmpty => !value.trim().is_empty(),
        Check::IsNumeric => value.parse::<f64>().is_ok(),
        Check::IsBoolean => value.parse::<bool>().is_ok(),
        Check::Positive => value.parse::<f64>().map(|n| n > 0.0).unwrap_or(false),
    }
}

/// Absent and null fields fail every check aimed at them.
fn check_value(check: Check, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match check {
        Check::IsInt => match value {
            Value::Number(n) => n.is_i64(),
            Value::String(s) => s.parse::<i64>().is_ok(),
            _ => false,
        },
        Check::NotEmpty => match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        },
        Check::IsNumeric => numeric(value).is_some(),
        Check::IsBoolean => value.is_boolean(),
        Check::Positive => numeric(value).map(|n| n > 0.0).unwrap_or(false),
    }
}

/// Numbers and numeric strings both count, like form input would.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

// Field extraction for handlers. Callers run the route's rules first; the
// fallbacks only exist so extraction stays total.

/// Body field as owned text. Non-string scalars are stringified.
pub fn string_field(body: &Value, field: &str) -> String {
    match body.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Body field as a number, accepting numeric strings.
pub fn number_field(body: &Value, field: &str) -> f64 {
    body.get(field).and_then(numeric).unwrap_or_default()
}

/// Body field as a boolean.
pub fn bool_field(body: &Value, field: &str) -> bool {
    body.get(field).and_then(Value::as_bool).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failures(rules: &[Rule], params: &[(&str, &str)], body: &Value) -> Vec<FieldError> {
        match run_rules(rules, params, body) {
            Ok(()) => Vec::new(),
            Err(AppError::Validation(errors)) => errors,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_create_body_passes() {
        let body = json!({"name": "Monitor", "price": 800});
        assert!(run_rules(CREATE_RULES, &[], &body).is_ok());
    }

    #[test]
    fn collects_every_failure_not_just_the_first() {
        let body = json!({"name": "", "price": "abc"});
        let errors = failures(CREATE_RULES, &[], &body);
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![MSG_NAME_EMPTY, MSG_PRICE_NOT_NUMERIC, MSG_PRICE_NOT_POSITIVE]
        );
    }

    #[test]
    fn missing_price_fails_all_three_price_rules() {
        let body = json!({"name": "Monitor"});
        let errors = failures(CREATE_RULES, &[], &body);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.field == "price"));
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in [0, -10] {
            let body = json!({"name": "Monitor", "price": price});
            let errors = failures(CREATE_RULES, &[], &body);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, MSG_PRICE_NOT_POSITIVE);
        }
    }

    #[test]
    fn numeric_string_price_is_accepted() {
        let body = json!({"name": "Monitor", "price": "800"});
        assert!(run_rules(CREATE_RULES, &[], &body).is_ok());
    }

    #[test]
    fn id_param_must_be_an_integer() {
        assert!(run_rules(ID_RULES, &[("id", "7")], &Value::Null).is_ok());
        let errors = failures(ID_RULES, &[("id", "hola")], &Value::Null);
        assert_eq!(errors, vec![FieldError::new("id", MSG_INVALID_ID)]);
    }

    #[test]
    fn update_requires_boolean_availability() {
        let body = json!({"name": "Monitor", "price": 800, "availability": "yes"});
        let errors = failures(UPDATE_RULES, &[("id", "1")], &body);
        assert_eq!(
            errors,
            vec![FieldError::new("availability", MSG_AVAILABILITY_NOT_BOOL)]
        );
    }

    #[test]
    fn whitespace_name_counts_as_empty() {
        let body = json!({"name": "   ", "price": 800});
        let errors = failures(CREATE_RULES, &[], &body);
        assert_eq!(errors, vec![FieldError::new("name", MSG_NAME_EMPTY)]);
    }

    #[test]
    fn errors_preserve_rule_order() {
        let body = json!({});
        let errors = failures(UPDATE_RULES, &[("id", "x")], &body);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["id", "name", "price", "price", "price", "availability"]
        );
    }
}

//! Input validation for user records.
//!
//! Each intent has a rule table. A rule names a field, says whether the field
//! must be present, and lists the checks its value has to pass. `validate`
//! walks the table in order and reports one message per offending field, so
//! the output is deterministic for a given input.

use serde_json::Value;
use validator::ValidateEmail;

use crate::constants::*;
use crate::error::{DomainError, DomainResult};
use crate::user::{CreateUser, UpdateUser};

const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";
const FIELD_AGE: &str = "age";

/// What the caller means to do with the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Every field is mandatory
    Create,
    /// Every field is optional, but present fields follow the create rules
    Update,
}

impl Intent {
    fn rules(self) -> &'static [FieldRule] {
        match self {
            Intent::Create => CREATE_RULES,
            Intent::Update => UPDATE_RULES,
        }
    }
}

/// A single predicate over a present field value
struct Check {
    check: fn(&Value) -> bool,
    message: &'static str,
    /// Skip the remaining checks of the field when this one fails
    halt: bool,
}

/// Rules for one field of the record
struct FieldRule {
    field: &'static str,
    required: bool,
    missing: &'static str,
    checks: &'static [Check],
    /// Copy a value that passed every check into the patch
    assign: fn(&mut UpdateUser, &Value),
}

impl FieldRule {
    /// Check the field and, when it passes, assign it to `fields`.
    ///
    /// Returns the joined messages for every failed check. `null` counts as
    /// absent.
    fn apply(&self, value: Option<&Value>, fields: &mut UpdateUser) -> Option<String> {
        let value = match value.filter(|v| !v.is_null()) {
            Some(value) => value,
            None if self.required => return Some(self.missing.to_string()),
            None => return None,
        };

        let mut messages = Vec::new();
        for check in self.checks {
            if !(check.check)(value) {
                messages.push(check.message);
                if check.halt {
                    break;
                }
            }
        }

        if messages.is_empty() {
            (self.assign)(fields, value);
            None
        } else {
            Some(messages.join(MESSAGE_SEPARATOR))
        }
    }
}

const NAME_CHECKS: &[Check] = &[
    Check {
        check: Value::is_string,
        message: MSG_NAME_NOT_STRING,
        halt: true,
    },
    Check {
        check: is_non_blank,
        message: MSG_NAME_REQUIRED,
        halt: false,
    },
];

const EMAIL_CHECKS: &[Check] = &[
    Check {
        check: Value::is_string,
        message: MSG_EMAIL_NOT_STRING,
        halt: true,
    },
    Check {
        check: is_non_blank,
        message: MSG_EMAIL_REQUIRED,
        halt: false,
    },
    Check {
        check: is_email,
        message: MSG_EMAIL_INVALID,
        halt: false,
    },
];

const AGE_CHECKS: &[Check] = &[
    Check {
        check: Value::is_number,
        message: MSG_AGE_NOT_NUMBER,
        halt: true,
    },
    Check {
        check: is_integer,
        message: MSG_AGE_NOT_INTEGER,
        halt: false,
    },
    Check {
        check: is_non_negative,
        message: MSG_AGE_NEGATIVE,
        halt: false,
    },
];

const CREATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: FIELD_NAME,
        required: true,
        missing: MSG_NAME_REQUIRED,
        checks: NAME_CHECKS,
        assign: assign_name,
    },
    FieldRule {
        field: FIELD_EMAIL,
        required: true,
        missing: MSG_EMAIL_REQUIRED,
        checks: EMAIL_CHECKS,
        assign: assign_email,
    },
    FieldRule {
        field: FIELD_AGE,
        required: true,
        missing: MSG_AGE_REQUIRED,
        checks: AGE_CHECKS,
        assign: assign_age,
    },
];

const UPDATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: FIELD_NAME,
        required: false,
        missing: MSG_NAME_REQUIRED,
        checks: NAME_CHECKS,
        assign: assign_name,
    },
    FieldRule {
        field: FIELD_EMAIL,
        required: false,
        missing: MSG_EMAIL_REQUIRED,
        checks: EMAIL_CHECKS,
        assign: assign_email,
    },
    FieldRule {
        field: FIELD_AGE,
        required: false,
        missing: MSG_AGE_REQUIRED,
        checks: AGE_CHECKS,
        assign: assign_age,
    },
];

fn is_non_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

fn is_email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.validate_email())
}

fn is_integer(value: &Value) -> bool {
    integer_value(value).is_some()
}

fn is_non_negative(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n >= MIN_AGE as f64)
}

/// Whole number that fits an `i32`; `30.0` counts, `30.5` does not
fn integer_value(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64)
        .map(|n| n as i32)
}

fn assign_name(fields: &mut UpdateUser, value: &Value) {
    fields.name = value.as_str().map(str::to_string);
}

fn assign_email(fields: &mut UpdateUser, value: &Value) {
    fields.email = value.as_str().map(str::to_string);
}

fn assign_age(fields: &mut UpdateUser, value: &Value) {
    fields.age = integer_value(value);
}

/// Single pass over the rule table: check every field and collect the
/// values that passed.
fn check_record(input: &Value, intent: Intent) -> Result<UpdateUser, Vec<String>> {
    let Some(record) = input.as_object() else {
        return Err(vec![MSG_BODY_NOT_OBJECT.to_string()]);
    };

    let mut fields = UpdateUser::default();
    let violations: Vec<String> = intent
        .rules()
        .iter()
        .filter_map(|rule| rule.apply(record.get(rule.field), &mut fields))
        .collect();

    if violations.is_empty() {
        Ok(fields)
    } else {
        Err(violations)
    }
}

/// Check a raw record against the rules of `intent`.
///
/// Unknown fields are ignored. On failure the messages come back in rule
/// table order, one per offending field.
pub fn validate(input: &Value, intent: Intent) -> Result<(), Vec<String>> {
    check_record(input, intent).map(|_| ())
}

/// Validate a raw record as a new user and coerce it into a candidate.
pub fn validate_create(input: &Value) -> DomainResult<CreateUser> {
    match check_record(input, Intent::Create).map_err(DomainError::validation)? {
        UpdateUser {
            name: Some(name),
            email: Some(email),
            age: Some(age),
        } => Ok(CreateUser { name, email, age }),
        fields => Err(DomainError::validation(missing_fields(&fields))),
    }
}

/// Required-field messages for every create field the pass left unset
fn missing_fields(fields: &UpdateUser) -> Vec<String> {
    let present = [
        fields.name.is_some(),
        fields.email.is_some(),
        fields.age.is_some(),
    ];
    CREATE_RULES
        .iter()
        .zip(present)
        .filter(|(_, present)| !present)
        .map(|(rule, _)| rule.missing.to_string())
        .collect()
}

/// Validate a raw record as a partial update and coerce it into a patch.
pub fn validate_update(input: &Value) -> DomainResult<UpdateUser> {
    check_record(input, Intent::Update).map_err(DomainError::validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(input: Value, intent: Intent) -> Vec<String> {
        validate(&input, intent).unwrap_err()
    }

    #[test]
    fn test_valid_create_is_coerced() {
        let candidate =
            validate_create(&json!({"name": "Alice", "email": "a@x.com", "age": 30})).unwrap();

        assert_eq!(
            candidate,
            CreateUser {
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                age: 30,
            }
        );
    }

    #[test]
    fn test_create_requires_every_field_in_order() {
        assert_eq!(
            messages(json!({}), Intent::Create),
            vec![MSG_NAME_REQUIRED, MSG_EMAIL_REQUIRED, MSG_AGE_REQUIRED]
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        assert_eq!(
            messages(
                json!({"name": null, "email": "a@x.com", "age": 1}),
                Intent::Create
            ),
            vec![MSG_NAME_REQUIRED]
        );
    }

    #[test]
    fn test_negative_age_rejected() {
        assert_eq!(
            messages(
                json!({"name": "Bob", "email": "b@x.com", "age": -1}),
                Intent::Create
            ),
            vec![MSG_AGE_NEGATIVE]
        );
    }

    #[test]
    fn test_zero_age_accepted() {
        let candidate =
            validate_create(&json!({"name": "Baby", "email": "baby@x.com", "age": 0})).unwrap();
        assert_eq!(candidate.age, 0);
    }

    #[test]
    fn test_field_with_several_violations_joins_messages() {
        assert_eq!(
            messages(
                json!({"name": "Bob", "email": "", "age": -1.5}),
                Intent::Create
            ),
            vec![
                format!("{}, {}", MSG_EMAIL_REQUIRED, MSG_EMAIL_INVALID),
                format!("{}, {}", MSG_AGE_NOT_INTEGER, MSG_AGE_NEGATIVE),
            ]
        );
    }

    #[test]
    fn test_wrong_type_stops_field_checks() {
        assert_eq!(
            messages(
                json!({"name": 42, "email": "b@x.com", "age": "thirty"}),
                Intent::Create
            ),
            vec![MSG_NAME_NOT_STRING, MSG_AGE_NOT_NUMBER]
        );
    }

    #[test]
    fn test_invalid_email_shape() {
        assert_eq!(
            messages(
                json!({"name": "Bob", "email": "not-an-email", "age": 20}),
                Intent::Create
            ),
            vec![MSG_EMAIL_INVALID]
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            messages(json!({"name": "   "}), Intent::Update),
            vec![MSG_NAME_REQUIRED]
        );
    }

    #[test]
    fn test_whole_float_age_accepted() {
        let patch = validate_update(&json!({"age": 31.0})).unwrap();
        assert_eq!(patch.age, Some(31));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let candidate = validate_create(&json!({
            "name": "Alice",
            "email": "a@x.com",
            "age": 30,
            "role": "admin",
            "id": 99,
        }))
        .unwrap();
        assert_eq!(candidate.name, "Alice");
    }

    #[test]
    fn test_update_allows_empty_patch() {
        let patch = validate_update(&json!({})).unwrap();
        assert_eq!(patch, UpdateUser::default());
    }

    #[test]
    fn test_update_checks_present_fields() {
        assert_eq!(
            messages(json!({"email": "nope", "age": -3}), Intent::Update),
            vec![MSG_EMAIL_INVALID, MSG_AGE_NEGATIVE]
        );
    }

    #[test]
    fn test_update_keeps_only_present_fields() {
        let patch = validate_update(&json!({"name": "Alicia", "extra": true})).unwrap();
        assert_eq!(
            patch,
            UpdateUser {
                name: Some("Alicia".to_string()),
                email: None,
                age: None,
            }
        );
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert_eq!(
            messages(json!(["name", "Alice"]), Intent::Create),
            vec![MSG_BODY_NOT_OBJECT]
        );
        assert!(matches!(
            validate_update(&json!("Alice")),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_every_create_rule_assigns_its_field() {
        let mut fields = UpdateUser::default();
        let record = json!({"name": "Alice", "email": "a@x.com", "age": 30});
        for rule in CREATE_RULES {
            assert_eq!(rule.apply(record.get(rule.field), &mut fields), None);
        }
        assert!(missing_fields(&fields).is_empty());
    }

    #[test]
    fn test_age_out_of_range_is_not_an_integer() {
        assert_eq!(
            messages(
                json!({"name": "Old", "email": "o@x.com", "age": 10_000_000_000_i64}),
                Intent::Create
            ),
            vec![MSG_AGE_NOT_INTEGER]
        );
    }
}

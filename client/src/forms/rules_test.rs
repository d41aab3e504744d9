use super::*;

// =============================================================================
// check
// =============================================================================

#[test]
fn required_fires_only_on_empty() {
    assert_eq!(check("", &[Rule::Required]), vec![FieldError::Required]);
    assert!(check(" ", &[Rule::Required]).is_empty());
}

#[test]
fn empty_value_reports_only_required() {
    let rules = [Rule::Required, Rule::Email, Rule::MinLength(3)];
    assert_eq!(check("", &rules), vec![FieldError::Required]);
}

#[test]
fn optional_empty_value_passes_other_rules() {
    assert!(check("", &[Rule::Email, Rule::MinLength(3)]).is_empty());
}

#[test]
fn length_limits_count_characters() {
    assert_eq!(check("ab", &[Rule::MinLength(3)]), vec![FieldError::MinLength(3)]);
    assert!(check("Hélène", &[Rule::MaxLength(6)]).is_empty());
    assert_eq!(check("abcdefg", &[Rule::MaxLength(6)]), vec![FieldError::MaxLength(6)]);
}

#[test]
fn multiple_failures_keep_rule_order() {
    assert_eq!(
        check("x", &[Rule::Email, Rule::MinLength(3)]),
        vec![FieldError::Email, FieldError::MinLength(3)]
    );
}

// =============================================================================
// is_email
// =============================================================================

#[test]
fn accepts_common_addresses() {
    for value in ["test@example.com", "jacksparrow@gmail.com", "first.last+tag@sub.domain.org", "yoga@studio"] {
        assert!(is_email(value), "expected valid: {value}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for value in [
        "userexample.com",
        "abdourrahmanfakhsi",
        "@example.com",
        "user@",
        "a@b@c",
        "user name@example.com",
        "user..name@example.com",
        ".user@example.com",
        "user@-example.com",
        "user@example..com",
    ] {
        assert!(!is_email(value), "expected invalid: {value}");
    }
}

#[test]
fn rejects_overlong_local_part() {
    let value = format!("{}@example.com", "a".repeat(65));
    assert!(!is_email(&value));
}

// =============================================================================
// FormErrors
// =============================================================================

#[test]
fn form_errors_collect_per_field() {
    let mut errors = FormErrors::default();
    errors
        .field("email", "", &[Rule::Required, Rule::Email])
        .field("password", "12345", &[Rule::Required, Rule::MinLength(3)]);
    assert!(!errors.is_valid());
    assert!(errors.has_error("email", FieldError::Required));
    assert!(errors.errors("password").is_empty());
    assert_eq!(errors.messages(), vec!["email is required".to_owned()]);
}

#[test]
fn push_appends_to_existing_field() {
    let mut errors = FormErrors::default();
    errors.field("name", "ab", &[Rule::MinLength(3)]).push("name", FieldError::Required);
    assert_eq!(errors.errors("name"), &[FieldError::MinLength(3), FieldError::Required]);
}

#[test]
fn no_failures_is_valid() {
    let mut errors = FormErrors::default();
    errors.field("email", "test@example.com", &[Rule::Required, Rule::Email]);
    assert!(errors.is_valid());
    assert!(errors.messages().is_empty());
}

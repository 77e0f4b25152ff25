use festival_forms::core::form::{FORM_ERRORS_MESSAGE, INVALID_NATIONAL_ID_MESSAGE, INVALID_PHONE_MESSAGE};
use festival_forms::core::phone::sanitize_phone_input;
use festival_forms::domain::model::FormField;
use festival_forms::{DigitPolicy, FormValidator, RegistrationForm};

#[test]
fn test_typed_values_validate_after_sanitising() {
    let form = RegistrationForm {
        national_id: Some("0013542419".to_string()),
        phone_number: Some(sanitize_phone_input("0935 111 2233")),
    };
    assert_eq!(form.phone_number.as_deref(), Some("0935-111-2233"));

    let report = FormValidator::default().validate(&form);
    assert!(report.is_valid(), "{:?}", report.errors);
}

#[test]
fn test_rejected_form_carries_persian_messages() {
    let form = RegistrationForm {
        national_id: Some("0010008941".to_string()),
        phone_number: Some("02188776655".to_string()),
    };

    let report = FormValidator::new(DigitPolicy::Permissive).validate(&form);
    assert!(!report.is_valid());
    assert_eq!(report.errors[0].field, FormField::NationalId);
    assert_eq!(report.errors[0].message, INVALID_NATIONAL_ID_MESSAGE);
    assert_eq!(report.errors[1].field, FormField::PhoneNumber);
    assert_eq!(report.errors[1].message, INVALID_PHONE_MESSAGE);
    assert_eq!(report.summary(), Some(FORM_ERRORS_MESSAGE));
}

#[test]
fn test_report_serializes_field_names() {
    let form = RegistrationForm {
        national_id: Some("123".to_string()),
        phone_number: None,
    };
    let report = FormValidator::default().validate(&form);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["errors"][0]["field"], "national_id");
}

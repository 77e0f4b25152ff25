use crate::core::national_id::NationalIdValidator;
use crate::core::phone::is_valid_phone_number;
use crate::domain::model::{DigitPolicy, FieldError, FormField, FormReport, RegistrationForm};

pub const INVALID_NATIONAL_ID_MESSAGE: &str = "کد ملی معتبر نیست";
pub const INVALID_PHONE_MESSAGE: &str = "شماره موبایل باید با 09 شروع شده و 11 رقمی باشد";
pub const FORM_ERRORS_MESSAGE: &str = "لطفاً خطاهای فرم را بررسی و اصلاح کنید";

#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    policy: DigitPolicy,
}

impl FormValidator {
    pub fn new(policy: DigitPolicy) -> Self {
        Self { policy }
    }

    pub fn validate(&self, form: &RegistrationForm) -> FormReport {
        let mut report = FormReport::default();

        if let Some(national_id) = &form.national_id {
            if let Some(error) = self.check_national_id(national_id) {
                report.errors.push(error);
            }
        }

        if let Some(phone) = &form.phone_number {
            if let Some(error) = self.check_phone_number(phone) {
                report.errors.push(error);
            }
        }

        report
    }

    pub fn check_national_id(&self, value: &str) -> Option<FieldError> {
        let validator = NationalIdValidator::new(self.policy);
        match validator.rejection(value) {
            None => None,
            Some(reason) => {
                tracing::debug!(?reason, "national id rejected");
                Some(FieldError {
                    field: FormField::NationalId,
                    message: INVALID_NATIONAL_ID_MESSAGE.to_string(),
                })
            }
        }
    }

    pub fn check_phone_number(&self, value: &str) -> Option<FieldError> {
        if is_valid_phone_number(value, self.policy) {
            None
        } else {
            Some(FieldError {
                field: FormField::PhoneNumber,
                message: INVALID_PHONE_MESSAGE.to_string(),
            })
        }
    }
}

impl FormReport {
    /// Banner shown above the submit row when the form is rejected.
    pub fn summary(&self) -> Option<&'static str> {
        if self.is_valid() {
            None
        } else {
            Some(FORM_ERRORS_MESSAGE)
        }
    }
}

//! Per-step field validation.
//!
//! Validation never fails: it returns an [`ErrorMap`] that is empty when the
//! step passes.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::locale::Catalog;

use super::draft::{is_blank, Draft, Field, FinanceDetails};
use super::steps::LogicalStep;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Field errors keyed by field, iterated in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether a field has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Record an error for a field.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for a field.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    /// Drop all errors.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Merge another map in, overwriting duplicate keys.
    pub fn extend(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }

    /// Iterate errors in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Fields with an error, in display order.
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

/// Whether an email matches the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Validate the fields of one step.
pub fn validate(step: LogicalStep, draft: &Draft, catalog: &Catalog) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        LogicalStep::BuyerType => {
            if draft.buyer_type.is_none() {
                errors.insert(Field::BuyerType, catalog.err_buyer_type_required);
            }
        }
        LogicalStep::PaymentMethod => {
            if draft.payment_method().is_none() {
                errors.insert(Field::PaymentMethod, catalog.err_payment_method_required);
            }
        }
        LogicalStep::PersonalInfo => {
            let identity = &draft.identity;
            if is_blank(&identity.full_name) {
                errors.insert(Field::FullName, catalog.err_full_name_required);
            }
            if is_blank(&identity.national_id) {
                errors.insert(Field::NationalId, catalog.err_national_id_required);
            }
            if !is_blank(&identity.email) && !is_valid_email(&identity.email) {
                errors.insert(Field::Email, catalog.err_email_invalid);
            }
            if is_blank(&identity.phone) {
                errors.insert(Field::Phone, catalog.err_phone_required);
            }
        }
        LogicalStep::FinancialInfo => {
            let empty = FinanceDetails::default();
            let finance = draft.finance().unwrap_or(&empty);
            validate_finance(finance, catalog, &mut errors);
        }
        LogicalStep::Confirmation => {
            if !draft.closing.accepted_terms {
                errors.insert(Field::AcceptedTerms, catalog.err_terms_required);
            }
        }
    }

    errors
}

fn validate_finance(finance: &FinanceDetails, catalog: &Catalog, errors: &mut ErrorMap) {
    if finance.job_sector.is_none() {
        errors.insert(Field::JobSector, catalog.err_job_sector_required);
    }
    if finance.needs_bank_verification() && finance.bank_verified.is_none() {
        errors.insert(Field::BankVerified, catalog.err_bank_verified_required);
    }
    if is_blank(&finance.monthly_salary) {
        errors.insert(Field::MonthlySalary, catalog.err_monthly_salary_required);
    }
    if is_blank(&finance.bank_or_finance_company) {
        errors.insert(Field::BankOrFinanceCompany, catalog.err_bank_required);
    }
    if finance.has_existing_obligations.is_none() {
        errors.insert(
            Field::HasExistingObligations,
            catalog.err_obligations_required,
        );
    }
    if finance.has_obligations() && !finance.has_obligation_amount() {
        errors.insert(Field::LoanDetails, catalog.err_loan_details_required);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{ARABIC, ENGLISH};
    use crate::wizard::draft::{FieldValue, PaymentMethod};

    fn set(draft: &mut Draft, field: Field, value: &str) {
        draft.apply(field, FieldValue::text(value)).unwrap();
    }

    #[test]
    fn buyer_type_is_required() {
        let mut draft = Draft::new(None);
        let errors = validate(LogicalStep::BuyerType, &draft, &ENGLISH);
        assert_eq!(errors.get(Field::BuyerType), Some(ENGLISH.err_buyer_type_required));

        set(&mut draft, Field::BuyerType, "company");
        assert!(validate(LogicalStep::BuyerType, &draft, &ENGLISH).is_empty());
    }

    #[test]
    fn payment_method_is_required() {
        let draft = Draft::new(None);
        let errors = validate(LogicalStep::PaymentMethod, &draft, &ENGLISH);
        assert!(errors.contains(Field::PaymentMethod));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn personal_info_requires_name_id_and_phone() {
        let draft = Draft::new(None);
        let errors = validate(LogicalStep::PersonalInfo, &draft, &ENGLISH);
        assert_eq!(
            errors.fields(),
            vec![Field::FullName, Field::NationalId, Field::Phone]
        );
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let mut draft = Draft::new(None);
        set(&mut draft, Field::FullName, "   ");
        let errors = validate(LogicalStep::PersonalInfo, &draft, &ENGLISH);
        assert!(errors.contains(Field::FullName));
    }

    #[test]
    fn email_is_optional_but_must_be_well_formed() {
        let mut draft = Draft::new(None);
        set(&mut draft, Field::FullName, "Ali Hassan");
        set(&mut draft, Field::NationalId, "12345");
        set(&mut draft, Field::Phone, "0500000000");
        assert!(validate(LogicalStep::PersonalInfo, &draft, &ENGLISH).is_empty());

        set(&mut draft, Field::Email, "ali@example");
        let errors = validate(LogicalStep::PersonalInfo, &draft, &ENGLISH);
        assert_eq!(errors.get(Field::Email), Some(ENGLISH.err_email_invalid));

        set(&mut draft, Field::Email, "ali@example.com");
        assert!(validate(LogicalStep::PersonalInfo, &draft, &ENGLISH).is_empty());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" a.b+c@d.e.f "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn private_sector_requires_bank_verification() {
        let mut draft = Draft::new(Some(PaymentMethod::Finance));
        set(&mut draft, Field::JobSector, "private");
        let errors = validate(LogicalStep::FinancialInfo, &draft, &ENGLISH);
        assert!(errors.contains(Field::BankVerified));

        set(&mut draft, Field::JobSector, "government");
        let errors = validate(LogicalStep::FinancialInfo, &draft, &ENGLISH);
        assert!(!errors.contains(Field::BankVerified));
    }

    #[test]
    fn obligations_need_one_amount_under_loan_details() {
        let mut draft = Draft::new(Some(PaymentMethod::Finance));
        set(&mut draft, Field::JobSector, "government");
        set(&mut draft, Field::MonthlySalary, "12000");
        set(&mut draft, Field::BankOrFinanceCompany, "Al Rajhi");
        set(&mut draft, Field::HasExistingObligations, "yes");

        let errors = validate(LogicalStep::FinancialInfo, &draft, &ENGLISH);
        assert_eq!(errors.fields(), vec![Field::LoanDetails]);

        set(&mut draft, Field::PropertyObligationAmount, "2500");
        assert!(validate(LogicalStep::FinancialInfo, &draft, &ENGLISH).is_empty());
    }

    #[test]
    fn financial_step_on_cash_draft_reports_required_fields() {
        let draft = Draft::new(Some(PaymentMethod::Cash));
        let errors = validate(LogicalStep::FinancialInfo, &draft, &ENGLISH);
        assert!(errors.contains(Field::JobSector));
        assert!(errors.contains(Field::MonthlySalary));
    }

    #[test]
    fn confirmation_requires_terms() {
        let mut draft = Draft::new(None);
        assert!(validate(LogicalStep::Confirmation, &draft, &ENGLISH)
            .contains(Field::AcceptedTerms));
        draft
            .apply(Field::AcceptedTerms, FieldValue::Checked(true))
            .unwrap();
        assert!(validate(LogicalStep::Confirmation, &draft, &ENGLISH).is_empty());
    }

    #[test]
    fn messages_follow_locale() {
        let draft = Draft::new(None);
        let errors = validate(LogicalStep::Confirmation, &draft, &ARABIC);
        assert_eq!(
            errors.get(Field::AcceptedTerms),
            Some(ARABIC.err_terms_required)
        );
    }

    #[test]
    fn error_map_basics() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::Phone, "x");
        errors.insert(Field::BuyerType, "y");
        assert_eq!(errors.fields(), vec![Field::BuyerType, Field::Phone]);
        assert_eq!(errors.remove(Field::Phone).as_deref(), Some("x"));
        assert_eq!(errors.len(), 1);
        errors.clear();
        assert!(errors.is_empty());
    }
}

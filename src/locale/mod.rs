//! Bundled translation sets.
//!
//! The wizard ships exactly two catalogs, selected by the host's
//! `is_english` flag. Every label, error, and action string shown to the
//! buyer comes from a [`Catalog`].

mod ar;
mod en;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::{
    BankVerification, BuyerType, Field, JobSector, LogicalStep, PaymentMethod, YesNo,
};

pub use ar::ARABIC;
pub use en::ENGLISH;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Locale {
    /// Map the host's `is_english` flag to a locale.
    pub fn from_is_english(is_english: bool) -> Self {
        if is_english {
            Self::English
        } else {
            Self::Arabic
        }
    }

    /// Whether this is the English locale.
    pub fn is_english(&self) -> bool {
        matches!(self, Self::English)
    }

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// Translation set for this locale.
    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Self::English => &ENGLISH,
            Self::Arabic => &ARABIC,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            _ => Err(format!("unknown locale: {}", s)),
        }
    }
}

/// One translation set.
#[derive(Debug)]
pub struct Catalog {
    pub wizard_title: &'static str,
    pub order_title: &'static str,

    pub step_buyer_type: &'static str,
    pub step_payment_method: &'static str,
    pub step_personal_info: &'static str,
    pub step_financial_info: &'static str,
    pub step_confirmation: &'static str,

    pub label_buyer_type: &'static str,
    pub label_payment_method: &'static str,
    pub label_full_name: &'static str,
    pub label_national_id: &'static str,
    pub label_email: &'static str,
    pub label_phone: &'static str,
    pub label_has_whatsapp: &'static str,
    pub label_job_sector: &'static str,
    pub label_bank_verified: &'static str,
    pub label_monthly_salary: &'static str,
    pub label_bank_or_finance_company: &'static str,
    pub label_has_existing_obligations: &'static str,
    pub label_personal_obligation_amount: &'static str,
    pub label_property_obligation_amount: &'static str,
    pub label_loan_details: &'static str,
    pub label_accepted_terms: &'static str,
    pub label_note: &'static str,

    pub individual: &'static str,
    pub company: &'static str,
    pub cash: &'static str,
    pub finance: &'static str,
    pub government: &'static str,
    pub military: &'static str,
    pub private_sector: &'static str,
    pub retired: &'static str,
    pub verified: &'static str,
    pub not_verified: &'static str,
    pub yes: &'static str,
    pub no: &'static str,

    pub err_buyer_type_required: &'static str,
    pub err_payment_method_required: &'static str,
    pub err_job_sector_required: &'static str,
    pub err_bank_verified_required: &'static str,
    pub err_monthly_salary_required: &'static str,
    pub err_bank_required: &'static str,
    pub err_obligations_required: &'static str,
    pub err_loan_details_required: &'static str,
    pub err_full_name_required: &'static str,
    pub err_national_id_required: &'static str,
    pub err_email_invalid: &'static str,
    pub err_phone_required: &'static str,
    pub err_terms_required: &'static str,

    pub nav_prompt: &'static str,
    pub action_next: &'static str,
    pub action_back: &'static str,
    pub action_cancel: &'static str,
    pub action_submit: &'static str,
    pub action_export: &'static str,

    pub submitting: &'static str,
    pub submit_success: &'static str,
    pub submit_failure: &'static str,
    pub export_saved: &'static str,
    pub cancelled: &'static str,

    pub summary_title: &'static str,
    pub vehicle_title: &'static str,
    pub vehicle_year: &'static str,
    pub vehicle_price: &'static str,
    pub vehicle_specs: &'static str,
    pub generated_at: &'static str,

    pub filter_make: &'static str,
    pub filter_body_type: &'static str,
    pub filter_fuel: &'static str,
    pub filter_max_price: &'static str,
    pub filter_any: &'static str,
}

impl Catalog {
    /// Label for a field.
    pub fn field_label(&self, field: Field) -> &'static str {
        match field {
            Field::BuyerType => self.label_buyer_type,
            Field::PaymentMethod => self.label_payment_method,
            Field::FullName => self.label_full_name,
            Field::NationalId => self.label_national_id,
            Field::Email => self.label_email,
            Field::Phone => self.label_phone,
            Field::HasWhatsapp => self.label_has_whatsapp,
            Field::JobSector => self.label_job_sector,
            Field::BankVerified => self.label_bank_verified,
            Field::MonthlySalary => self.label_monthly_salary,
            Field::BankOrFinanceCompany => self.label_bank_or_finance_company,
            Field::HasExistingObligations => self.label_has_existing_obligations,
            Field::PersonalObligationAmount => self.label_personal_obligation_amount,
            Field::PropertyObligationAmount => self.label_property_obligation_amount,
            Field::LoanDetails => self.label_loan_details,
            Field::AcceptedTerms => self.label_accepted_terms,
            Field::Note => self.label_note,
        }
    }

    /// Title of a logical step.
    pub fn step_title(&self, step: LogicalStep) -> &'static str {
        match step {
            LogicalStep::BuyerType => self.step_buyer_type,
            LogicalStep::PaymentMethod => self.step_payment_method,
            LogicalStep::PersonalInfo => self.step_personal_info,
            LogicalStep::FinancialInfo => self.step_financial_info,
            LogicalStep::Confirmation => self.step_confirmation,
        }
    }

    /// Yes/no label for a boolean.
    pub fn yes_no(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}

/// Choice values with a translated label.
pub trait Localized {
    /// Label in the given catalog.
    fn label(&self, catalog: &Catalog) -> &'static str;
}

impl Localized for BuyerType {
    fn label(&self, catalog: &Catalog) -> &'static str {
        match self {
            BuyerType::Individual => catalog.individual,
            BuyerType::Company => catalog.company,
        }
    }
}

impl Localized for PaymentMethod {
    fn label(&self, catalog: &Catalog) -> &'static str {
        match self {
            PaymentMethod::Cash => catalog.cash,
            PaymentMethod::Finance => catalog.finance,
        }
    }
}

impl Localized for JobSector {
    fn label(&self, catalog: &Catalog) -> &'static str {
        match self {
            JobSector::Government => catalog.government,
            JobSector::Military => catalog.military,
            JobSector::Private => catalog.private_sector,
            JobSector::Retired => catalog.retired,
        }
    }
}

impl Localized for BankVerification {
    fn label(&self, catalog: &Catalog) -> &'static str {
        match self {
            BankVerification::Verified => catalog.verified,
            BankVerification::NotVerified => catalog.not_verified,
        }
    }
}

impl Localized for YesNo {
    fn label(&self, catalog: &Catalog) -> &'static str {
        catalog.yes_no(matches!(self, YesNo::Yes))
    }
}

//! The in-progress order record.
//!
//! The draft changes shape with the payment branch: finance details only
//! exist while the payment method is finance, the bank verification only
//! while the job sector is private, and obligation amounts only while the
//! buyer reports existing obligations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShowroomError};

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $key)] $variant),+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire key for this option.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
                match normalized.as_str() {
                    $($key => Ok($name::$variant),)+
                    _ => Err(format!("unknown option '{}'", s)),
                }
            }
        }
    };
}

choice_enum! {
    /// Who is buying.
    BuyerType {
        /// A private person.
        Individual => "individual",
        /// A registered business.
        Company => "company",
    }
}

choice_enum! {
    /// How the purchase is paid.
    PaymentMethod {
        /// Paid in full.
        Cash => "cash",
        /// Paid through a bank or finance company.
        Finance => "finance",
    }
}

choice_enum! {
    /// Employment sector of a finance applicant.
    JobSector {
        Government => "government",
        Military => "military",
        Private => "private",
        Retired => "retired",
    }
}

choice_enum! {
    /// Whether a private-sector salary is verified by the employer's bank.
    BankVerification {
        Verified => "verified",
        NotVerified => "not-verified",
    }
}

choice_enum! {
    /// Plain yes/no answer.
    YesNo {
        Yes => "yes",
        No => "no",
    }
}

/// Every key a form value or validation error can be attached to.
///
/// Declaration order is the display priority used by summaries and error
/// listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    BuyerType,
    PaymentMethod,
    FullName,
    NationalId,
    Email,
    Phone,
    HasWhatsapp,
    JobSector,
    BankVerified,
    MonthlySalary,
    BankOrFinanceCompany,
    HasExistingObligations,
    PersonalObligationAmount,
    PropertyObligationAmount,
    /// Combined error key for the obligation amounts. Not editable.
    LoanDetails,
    AcceptedTerms,
    Note,
}

/// How a field receives its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text.
    Text,
    /// One of a fixed set of options, given as text.
    Choice,
    /// A checkbox.
    Toggle,
}

impl Field {
    /// Every editable field, in display order.
    pub const EDITABLE: &'static [Field] = &[
        Field::BuyerType,
        Field::PaymentMethod,
        Field::FullName,
        Field::NationalId,
        Field::Email,
        Field::Phone,
        Field::HasWhatsapp,
        Field::JobSector,
        Field::BankVerified,
        Field::MonthlySalary,
        Field::BankOrFinanceCompany,
        Field::HasExistingObligations,
        Field::PersonalObligationAmount,
        Field::PropertyObligationAmount,
        Field::AcceptedTerms,
        Field::Note,
    ];

    /// Wire key (camelCase, as submitted).
    pub fn key(&self) -> &'static str {
        match self {
            Field::BuyerType => "buyerType",
            Field::PaymentMethod => "paymentMethod",
            Field::FullName => "fullName",
            Field::NationalId => "nationalId",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::HasWhatsapp => "hasWhatsapp",
            Field::JobSector => "jobSector",
            Field::BankVerified => "bankVerified",
            Field::MonthlySalary => "monthlySalary",
            Field::BankOrFinanceCompany => "bankOrFinanceCompany",
            Field::HasExistingObligations => "hasExistingObligations",
            Field::PersonalObligationAmount => "personalObligationAmount",
            Field::PropertyObligationAmount => "propertyObligationAmount",
            Field::LoanDetails => "loanDetails",
            Field::AcceptedTerms => "acceptedTerms",
            Field::Note => "note",
        }
    }

    /// The input kind a caller must supply for this field.
    pub fn kind(&self) -> InputKind {
        match self {
            Field::BuyerType
            | Field::PaymentMethod
            | Field::JobSector
            | Field::BankVerified
            | Field::HasExistingObligations => InputKind::Choice,
            Field::HasWhatsapp | Field::AcceptedTerms => InputKind::Toggle,
            _ => InputKind::Text,
        }
    }

    /// The error key an edit of this field clears.
    pub fn error_key(&self) -> Field {
        match self {
            Field::PersonalObligationAmount | Field::PropertyObligationAmount => {
                Field::LoanDetails
            }
            other => *other,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::EDITABLE
            .iter()
            .chain(std::iter::once(&Field::LoanDetails))
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// A value supplied for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text or choice input.
    Text(String),
    /// Checkbox input.
    Checked(bool),
}

impl FieldValue {
    /// Shorthand for a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

/// Identity and contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub has_whatsapp: bool,
}

/// Financial qualification fields, present only on the finance branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinanceDetails {
    pub job_sector: Option<JobSector>,
    /// Only meaningful while `job_sector` is private.
    pub bank_verified: Option<BankVerification>,
    pub monthly_salary: String,
    pub bank_or_finance_company: String,
    pub has_existing_obligations: Option<YesNo>,
    /// Only meaningful while `has_existing_obligations` is yes.
    pub personal_obligation_amount: String,
    /// Only meaningful while `has_existing_obligations` is yes.
    pub property_obligation_amount: String,
}

impl FinanceDetails {
    /// Whether the applicant reported existing obligations.
    pub fn has_obligations(&self) -> bool {
        self.has_existing_obligations == Some(YesNo::Yes)
    }

    /// Whether a bank verification answer is required.
    pub fn needs_bank_verification(&self) -> bool {
        self.job_sector == Some(JobSector::Private)
    }

    /// Whether at least one obligation amount is filled in.
    pub fn has_obligation_amount(&self) -> bool {
        !is_blank(&self.personal_obligation_amount) || !is_blank(&self.property_obligation_amount)
    }
}

/// Payment branch of the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payment {
    /// No method chosen yet.
    #[default]
    Unselected,
    /// Cash purchase.
    Cash,
    /// Financed purchase with its qualification details.
    Finance(FinanceDetails),
}

/// Terms acceptance and free-form note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closing {
    pub accepted_terms: bool,
    pub note: String,
}

/// The form record being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub buyer_type: Option<BuyerType>,
    pub payment: Payment,
    pub identity: Identity,
    pub closing: Closing,
}

impl Draft {
    /// Create an empty draft, optionally seeded with a payment method.
    pub fn new(preselected: Option<PaymentMethod>) -> Self {
        let mut draft = Self::default();
        draft.select_payment(preselected);
        draft
    }

    /// The chosen payment method, if any.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        match self.payment {
            Payment::Unselected => None,
            Payment::Cash => Some(PaymentMethod::Cash),
            Payment::Finance(_) => Some(PaymentMethod::Finance),
        }
    }

    /// Finance details, when on the finance branch.
    pub fn finance(&self) -> Option<&FinanceDetails> {
        match &self.payment {
            Payment::Finance(details) => Some(details),
            _ => None,
        }
    }

    /// Apply a single field value.
    ///
    /// Switching to a branch that no longer holds a dependent field discards
    /// that field's value.
    pub fn apply(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match field {
            Field::BuyerType => self.buyer_type = parse_choice(field, value)?,
            Field::PaymentMethod => {
                let method = parse_choice(field, value)?;
                self.select_payment(method);
            }
            Field::FullName => self.identity.full_name = text(field, value)?,
            Field::NationalId => self.identity.national_id = text(field, value)?,
            Field::Email => self.identity.email = text(field, value)?,
            Field::Phone => self.identity.phone = text(field, value)?,
            Field::HasWhatsapp => self.identity.has_whatsapp = checked(field, value)?,
            Field::JobSector => {
                let sector = parse_choice(field, value)?;
                let finance = self.finance_for(field)?;
                finance.job_sector = sector;
                if !finance.needs_bank_verification() {
                    finance.bank_verified = None;
                }
            }
            Field::BankVerified => {
                let verification = parse_choice(field, value)?;
                let finance = self.finance_for(field)?;
                if !finance.needs_bank_verification() {
                    return Err(ShowroomError::FieldUnavailable {
                        field: field.key().to_string(),
                        reason: "job sector is not private".to_string(),
                    });
                }
                finance.bank_verified = verification;
            }
            Field::MonthlySalary => {
                let salary = text(field, value)?;
                self.finance_for(field)?.monthly_salary = salary;
            }
            Field::BankOrFinanceCompany => {
                let company = text(field, value)?;
                self.finance_for(field)?.bank_or_finance_company = company;
            }
            Field::HasExistingObligations => {
                let answer = parse_choice(field, value)?;
                let finance = self.finance_for(field)?;
                finance.has_existing_obligations = answer;
                if !finance.has_obligations() {
                    finance.personal_obligation_amount.clear();
                    finance.property_obligation_amount.clear();
                }
            }
            Field::PersonalObligationAmount | Field::PropertyObligationAmount => {
                let amount = text(field, value)?;
                let finance = self.finance_for(field)?;
                if !finance.has_obligations() {
                    return Err(ShowroomError::FieldUnavailable {
                        field: field.key().to_string(),
                        reason: "no existing obligations were reported".to_string(),
                    });
                }
                if field == Field::PersonalObligationAmount {
                    finance.personal_obligation_amount = amount;
                } else {
                    finance.property_obligation_amount = amount;
                }
            }
            Field::LoanDetails => {
                return Err(ShowroomError::InvalidInput {
                    field: field.key().to_string(),
                    message: "error key only, not an editable field".to_string(),
                })
            }
            Field::AcceptedTerms => self.closing.accepted_terms = checked(field, value)?,
            Field::Note => self.closing.note = text(field, value)?,
        }
        Ok(())
    }

    fn select_payment(&mut self, method: Option<PaymentMethod>) {
        self.payment = match (method, std::mem::take(&mut self.payment)) {
            (None, _) => Payment::Unselected,
            (Some(PaymentMethod::Cash), _) => Payment::Cash,
            (Some(PaymentMethod::Finance), Payment::Finance(details)) => Payment::Finance(details),
            (Some(PaymentMethod::Finance), _) => Payment::Finance(FinanceDetails::default()),
        };
    }

    fn finance_for(&mut self, field: Field) -> Result<&mut FinanceDetails> {
        match &mut self.payment {
            Payment::Finance(details) => Ok(details),
            _ => Err(ShowroomError::FieldUnavailable {
                field: field.key().to_string(),
                reason: "payment method is not finance".to_string(),
            }),
        }
    }
}

/// True when the text is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn text(field: Field, value: FieldValue) -> Result<String> {
    match value {
        FieldValue::Text(s) => Ok(s),
        FieldValue::Checked(_) => Err(ShowroomError::InvalidInput {
            field: field.key().to_string(),
            message: "expected text input".to_string(),
        }),
    }
}

fn checked(field: Field, value: FieldValue) -> Result<bool> {
    match value {
        FieldValue::Checked(b) => Ok(b),
        FieldValue::Text(_) => Err(ShowroomError::InvalidInput {
            field: field.key().to_string(),
            message: "expected checkbox input".to_string(),
        }),
    }
}

fn parse_choice<T: FromStr<Err = String>>(field: Field, value: FieldValue) -> Result<Option<T>> {
    let raw = text(field, value)?;
    if is_blank(&raw) {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|message| ShowroomError::InvalidInput {
            field: field.key().to_string(),
            message,
        })
}

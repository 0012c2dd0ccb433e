//! Localized summary of a draft for the side panel and exported document.

use crate::locale::{Catalog, Localized};

use super::draft::{is_blank, Draft, Field};

/// One labelled summary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
}

/// Project the non-empty fields of a draft, in display order.
///
/// Finance lines appear only on the finance branch, each under the same
/// presence rules the completeness check uses.
pub fn project(draft: &Draft, catalog: &Catalog) -> Vec<SummaryLine> {
    let mut lines = Vec::new();
    let mut push = |field: Field, value: String| {
        if !is_blank(&value) {
            lines.push(SummaryLine {
                field,
                label: catalog.field_label(field),
                value,
            });
        }
    };

    if let Some(buyer) = draft.buyer_type {
        push(Field::BuyerType, buyer.label(catalog).to_string());
    }
    if let Some(method) = draft.payment_method() {
        push(Field::PaymentMethod, method.label(catalog).to_string());
    }

    let identity = &draft.identity;
    push(Field::FullName, identity.full_name.trim().to_string());
    push(Field::NationalId, identity.national_id.trim().to_string());
    push(Field::Email, identity.email.trim().to_string());
    push(Field::Phone, identity.phone.trim().to_string());
    if identity.has_whatsapp {
        push(Field::HasWhatsapp, catalog.yes.to_string());
    }

    if let Some(finance) = draft.finance() {
        if let Some(sector) = finance.job_sector {
            push(Field::JobSector, sector.label(catalog).to_string());
        }
        if finance.needs_bank_verification() {
            if let Some(verification) = finance.bank_verified {
                push(Field::BankVerified, verification.label(catalog).to_string());
            }
        }
        push(Field::MonthlySalary, finance.monthly_salary.trim().to_string());
        push(
            Field::BankOrFinanceCompany,
            finance.bank_or_finance_company.trim().to_string(),
        );
        if let Some(answer) = finance.has_existing_obligations {
            push(Field::HasExistingObligations, answer.label(catalog).to_string());
        }
        if finance.has_obligations() {
            push(
                Field::PersonalObligationAmount,
                finance.personal_obligation_amount.trim().to_string(),
            );
            push(
                Field::PropertyObligationAmount,
                finance.property_obligation_amount.trim().to_string(),
            );
        }
    }

    lines
}

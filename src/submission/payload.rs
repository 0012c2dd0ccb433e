//! The JSON body sent to the lead endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::inventory::SelectedVehicle;
use crate::wizard::{BankVerification, BuyerType, Draft, JobSector, PaymentMethod, YesNo};

/// Reference to the ordered vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub year: u16,
    pub price: u64,
}

/// A submitted order.
///
/// Finance fields are omitted on the cash branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub buyer_type: Option<BuyerType>,
    pub payment_method: Option<PaymentMethod>,
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub has_whatsapp: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_sector: Option<JobSector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_verified: Option<BankVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_or_finance_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_existing_obligations: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_obligation_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_obligation_amount: Option<String>,

    pub accepted_terms: bool,
    pub note: String,
    pub submitted_at: DateTime<Utc>,
    pub vehicle: VehicleRef,
}

impl LeadPayload {
    /// Build the payload for a draft and vehicle.
    pub fn new(draft: &Draft, vehicle: &SelectedVehicle, submitted_at: DateTime<Utc>) -> Self {
        let identity = &draft.identity;
        let finance = draft.finance();
        let trimmed = |s: &String| s.trim().to_string();

        Self {
            buyer_type: draft.buyer_type,
            payment_method: draft.payment_method(),
            full_name: trimmed(&identity.full_name),
            national_id: trimmed(&identity.national_id),
            email: trimmed(&identity.email),
            phone: trimmed(&identity.phone),
            has_whatsapp: identity.has_whatsapp,
            job_sector: finance.and_then(|f| f.job_sector),
            bank_verified: finance.and_then(|f| f.bank_verified),
            monthly_salary: finance.map(|f| trimmed(&f.monthly_salary)),
            bank_or_finance_company: finance.map(|f| trimmed(&f.bank_or_finance_company)),
            has_existing_obligations: finance.and_then(|f| f.has_existing_obligations),
            personal_obligation_amount: finance
                .filter(|f| f.has_obligations())
                .map(|f| trimmed(&f.personal_obligation_amount)),
            property_obligation_amount: finance
                .filter(|f| f.has_obligations())
                .map(|f| trimmed(&f.property_obligation_amount)),
            accepted_terms: draft.closing.accepted_terms,
            note: draft.closing.note.clone(),
            submitted_at,
            vehicle: VehicleRef {
                id: vehicle.id.clone(),
                name: vehicle.name.clone(),
                year: vehicle.year,
                price: vehicle.price,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Field, FieldValue};
    use chrono::TimeZone;

    fn vehicle() -> SelectedVehicle {
        SelectedVehicle {
            id: Some("lc-2023".to_string()),
            name: "Toyota Land Cruiser".to_string(),
            year: 2023,
            price: 320_000,
            image_url: None,
            specs: Vec::new(),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn cash_payload_omits_finance_fields() {
        let mut draft = Draft::new(Some(PaymentMethod::Cash));
        draft
            .apply(Field::FullName, FieldValue::text(" Ali Hassan "))
            .unwrap();

        let json = serde_json::to_value(LeadPayload::new(&draft, &vehicle(), at())).unwrap();
        assert_eq!(json["paymentMethod"], "cash");
        assert_eq!(json["fullName"], "Ali Hassan");
        assert_eq!(json["buyerType"], serde_json::Value::Null);
        assert!(json.get("jobSector").is_none());
        assert!(json.get("monthlySalary").is_none());
        assert_eq!(json["submittedAt"], "2026-03-01T09:30:00Z");
        assert_eq!(json["vehicle"]["id"], "lc-2023");
        assert_eq!(json["vehicle"]["price"], 320_000);
    }

    #[test]
    fn finance_payload_carries_qualification() {
        let mut draft = Draft::new(Some(PaymentMethod::Finance));
        for (field, value) in [
            (Field::JobSector, "private"),
            (Field::BankVerified, "not-verified"),
            (Field::MonthlySalary, "15000"),
            (Field::HasExistingObligations, "yes"),
            (Field::PersonalObligationAmount, "800"),
        ] {
            draft.apply(field, FieldValue::text(value)).unwrap();
        }

        let json = serde_json::to_value(LeadPayload::new(&draft, &vehicle(), at())).unwrap();
        assert_eq!(json["jobSector"], "private");
        assert_eq!(json["bankVerified"], "not-verified");
        assert_eq!(json["monthlySalary"], "15000");
        assert_eq!(json["hasExistingObligations"], "yes");
        assert_eq!(json["personalObligationAmount"], "800");
        assert_eq!(json["propertyObligationAmount"], "");
    }
}

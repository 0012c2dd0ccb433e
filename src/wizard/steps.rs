//! Mapping from the numeric cursor to the named step shown.
//!
//! The step sequence is a fixed table keyed by whether the host preselected
//! a payment method and by which branch is active:
//!
//! | preselected | branch  | steps |
//! |-------------|---------|-------|
//! | cash        | -       | buyer type, personal info, confirmation |
//! | finance     | -       | buyer type, personal info, financial info, confirmation |
//! | none        | cash/none | buyer type, payment method, personal info, confirmation |
//! | none        | finance | buyer type, payment method, personal info, financial info, confirmation |

use std::fmt;

use super::draft::{Field, PaymentMethod};

/// One of the named form sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalStep {
    BuyerType,
    PaymentMethod,
    PersonalInfo,
    FinancialInfo,
    Confirmation,
}

impl LogicalStep {
    /// Stable identifier for logs and prompt keys.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BuyerType => "buyer_type",
            Self::PaymentMethod => "payment_method",
            Self::PersonalInfo => "personal_info",
            Self::FinancialInfo => "financial_info",
            Self::Confirmation => "confirmation",
        }
    }

    /// Fields edited on this step, in display order.
    ///
    /// Conditional fields are listed; whether they apply depends on the draft.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::BuyerType => &[Field::BuyerType],
            Self::PaymentMethod => &[Field::PaymentMethod],
            Self::PersonalInfo => &[
                Field::FullName,
                Field::NationalId,
                Field::Email,
                Field::Phone,
                Field::HasWhatsapp,
            ],
            Self::FinancialInfo => &[
                Field::JobSector,
                Field::BankVerified,
                Field::MonthlySalary,
                Field::BankOrFinanceCompany,
                Field::HasExistingObligations,
                Field::PersonalObligationAmount,
                Field::PropertyObligationAmount,
            ],
            Self::Confirmation => &[Field::AcceptedTerms, Field::Note],
        }
    }
}

impl fmt::Display for LogicalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

use LogicalStep::{BuyerType, Confirmation, FinancialInfo, PersonalInfo};

const PRESELECTED_CASH: &[LogicalStep] = &[BuyerType, PersonalInfo, Confirmation];
const PRESELECTED_FINANCE: &[LogicalStep] = &[BuyerType, PersonalInfo, FinancialInfo, Confirmation];
const OPEN_CASH: &[LogicalStep] = &[
    BuyerType,
    LogicalStep::PaymentMethod,
    PersonalInfo,
    Confirmation,
];
const OPEN_FINANCE: &[LogicalStep] = &[
    BuyerType,
    LogicalStep::PaymentMethod,
    PersonalInfo,
    FinancialInfo,
    Confirmation,
];

/// The ordered steps for a branch.
///
/// A preselected method wins over the chosen one; with no preselection an
/// unchosen method follows the cash sequence.
pub fn step_plan(
    preselected: Option<PaymentMethod>,
    chosen: Option<PaymentMethod>,
) -> &'static [LogicalStep] {
    match (preselected, chosen) {
        (Some(PaymentMethod::Cash), _) => PRESELECTED_CASH,
        (Some(PaymentMethod::Finance), _) => PRESELECTED_FINANCE,
        (None, Some(PaymentMethod::Finance)) => OPEN_FINANCE,
        (None, _) => OPEN_CASH,
    }
}

/// Number of steps on a branch.
pub fn step_count(preselected: Option<PaymentMethod>, chosen: Option<PaymentMethod>) -> usize {
    step_plan(preselected, chosen).len()
}

/// Resolve a 1-based cursor to the step it shows.
///
/// Cursors outside `1..=step_count` are clamped to the nearest end.
pub fn resolve(
    cursor: usize,
    preselected: Option<PaymentMethod>,
    chosen: Option<PaymentMethod>,
) -> LogicalStep {
    let plan = step_plan(preselected, chosen);
    plan[cursor.clamp(1, plan.len()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use PaymentMethod::{Cash, Finance};

    const METHODS: [Option<PaymentMethod>; 3] = [None, Some(Cash), Some(Finance)];

    #[test]
    fn preselected_cash_sequence() {
        assert_eq!(resolve(1, Some(Cash), Some(Cash)), BuyerType);
        assert_eq!(resolve(2, Some(Cash), Some(Cash)), PersonalInfo);
        assert_eq!(resolve(3, Some(Cash), Some(Cash)), Confirmation);
        assert_eq!(step_count(Some(Cash), Some(Cash)), 3);
    }

    #[test]
    fn preselected_finance_sequence() {
        assert_eq!(resolve(2, Some(Finance), Some(Finance)), PersonalInfo);
        assert_eq!(resolve(3, Some(Finance), Some(Finance)), FinancialInfo);
        assert_eq!(resolve(4, Some(Finance), Some(Finance)), Confirmation);
    }

    #[test]
    fn open_sequences() {
        assert_eq!(resolve(2, None, None), LogicalStep::PaymentMethod);
        assert_eq!(resolve(3, None, Some(Cash)), PersonalInfo);
        assert_eq!(resolve(4, None, Some(Cash)), Confirmation);
        assert_eq!(resolve(4, None, Some(Finance)), FinancialInfo);
        assert_eq!(resolve(5, None, Some(Finance)), Confirmation);
    }

    #[test]
    fn resolve_is_deterministic() {
        for pre in METHODS {
            for chosen in METHODS {
                for cursor in 0..8 {
                    assert_eq!(
                        resolve(cursor, pre, chosen),
                        resolve(cursor, pre, chosen)
                    );
                }
            }
        }
    }

    #[test]
    fn preselected_cash_never_shows_payment_or_finance_steps() {
        for chosen in METHODS {
            for cursor in 0..8 {
                let step = resolve(cursor, Some(Cash), chosen);
                assert_ne!(step, LogicalStep::PaymentMethod);
                assert_ne!(step, FinancialInfo);
            }
        }
    }

    #[test]
    fn preselected_finance_never_shows_payment_step() {
        for chosen in METHODS {
            for cursor in 0..8 {
                assert_ne!(
                    resolve(cursor, Some(Finance), chosen),
                    LogicalStep::PaymentMethod
                );
            }
        }
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
        assert_eq!(resolve(0, None, None), BuyerType);
        assert_eq!(resolve(9, None, Some(Cash)), Confirmation);
        assert_eq!(resolve(9, Some(Finance), None), Confirmation);
    }

    #[test]
    fn every_plan_starts_with_buyer_type_and_ends_with_confirmation() {
        for pre in METHODS {
            for chosen in METHODS {
                let plan = step_plan(pre, chosen);
                assert_eq!(plan.first(), Some(&BuyerType));
                assert_eq!(plan.last(), Some(&Confirmation));
            }
        }
    }
}

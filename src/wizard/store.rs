//! Draft record, cursor, and per-field errors for one open wizard.

use crate::error::{Result, ShowroomError};

use super::draft::{is_blank, Draft, Field, FieldValue, PaymentMethod};
use super::steps::{self, LogicalStep};
use super::validation::{is_valid_email, ErrorMap};

/// Mutable state of one wizard instance.
#[derive(Debug, Clone)]
pub struct FormStateStore {
    draft: Draft,
    preselected: Option<PaymentMethod>,
    cursor: usize,
    errors: ErrorMap,
}

impl FormStateStore {
    /// Create a fresh store, seeding the payment method if preselected.
    pub fn new(preselected: Option<PaymentMethod>) -> Self {
        Self {
            draft: Draft::new(preselected),
            preselected,
            cursor: 1,
            errors: ErrorMap::new(),
        }
    }

    /// Current draft.
    pub fn get(&self) -> &Draft {
        &self.draft
    }

    /// The host's preselected payment method, if any.
    pub fn preselected(&self) -> Option<PaymentMethod> {
        self.preselected
    }

    /// 1-based cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current field errors.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Steps of the active branch.
    pub fn plan(&self) -> &'static [LogicalStep] {
        steps::step_plan(self.preselected, self.draft.payment_method())
    }

    /// Number of steps on the active branch.
    pub fn step_count(&self) -> usize {
        self.plan().len()
    }

    /// The step the cursor shows.
    pub fn current_step(&self) -> LogicalStep {
        steps::resolve(self.cursor, self.preselected, self.draft.payment_method())
    }

    /// Merge field values into the draft.
    ///
    /// Either every entry applies or none does. Each edited field's error is
    /// cleared. Returns the edited fields.
    pub fn set<I>(&mut self, partial: I) -> Result<Vec<Field>>
    where
        I: IntoIterator<Item = (Field, FieldValue)>,
    {
        let mut next = self.draft.clone();
        let mut edited = Vec::new();

        for (field, value) in partial {
            if field == Field::PaymentMethod && self.preselected.is_some() {
                return Err(ShowroomError::PaymentMethodLocked);
            }
            next.apply(field, value)?;
            edited.push(field);
        }

        self.draft = next;
        for field in &edited {
            self.errors.remove(field.error_key());
        }
        self.clamp_cursor();
        Ok(edited)
    }

    /// Restore initial values, clear errors, and rewind to the first step.
    pub fn reset(&mut self) {
        self.draft = Draft::new(self.preselected);
        self.errors.clear();
        self.cursor = 1;
    }

    /// Whether every detail needed for the order is present.
    ///
    /// Implies that every step of the active branch validates.
    pub fn is_complete(&self) -> bool {
        let draft = &self.draft;
        let identity = &draft.identity;

        let base = draft.buyer_type.is_some()
            && draft.payment_method().is_some()
            && !is_blank(&identity.full_name)
            && !is_blank(&identity.national_id)
            && !is_blank(&identity.phone)
            && (is_blank(&identity.email) || is_valid_email(&identity.email))
            && draft.closing.accepted_terms;
        if !base {
            return false;
        }

        match draft.finance() {
            None => true,
            Some(finance) => {
                finance.job_sector.is_some()
                    && !is_blank(&finance.monthly_salary)
                    && !is_blank(&finance.bank_or_finance_company)
                    && finance.has_existing_obligations.is_some()
                    && (!finance.needs_bank_verification() || finance.bank_verified.is_some())
                    && (!finance.has_obligations() || finance.has_obligation_amount())
            }
        }
    }

    pub(crate) fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    pub(crate) fn advance(&mut self) -> bool {
        if self.cursor < self.step_count() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn retreat(&mut self) -> bool {
        if self.cursor > 1 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.clamp(1, self.step_count());
    }
}

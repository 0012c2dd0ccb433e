//! Navigation and submission for one open purchase wizard.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{Result, ShowroomError};
use crate::inventory::SelectedVehicle;
use crate::locale::{Catalog, Locale};
use crate::submission::{LeadPayload, SubmissionClient, SubmissionError};

use super::draft::{Field, FieldValue, PaymentMethod};
use super::steps::LogicalStep;
use super::store::FormStateStore;
use super::validation::{validate, ErrorMap};

/// Why the wizard closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The order was submitted.
    Submitted,
    /// The buyer cancelled or backed out of the first step.
    Dismissed,
}

/// Result of [`WizardController::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to this step.
    Moved(LogicalStep),
    /// The current step has errors; the cursor did not move.
    Blocked(ErrorMap),
    /// Already on the last step of the branch.
    AtLastStep,
    /// A submission is in flight; nothing changed.
    Pending,
}

/// Result of [`WizardController::back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    /// Moved to this step.
    Moved(LogicalStep),
    /// Backed out of the first step; the wizard closed.
    Closed,
    /// A submission is in flight; nothing changed.
    Pending,
}

/// Result of [`WizardController::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Submission is now in flight; send this payload.
    Ready(LeadPayload),
    /// The confirmation step has errors.
    Invalid(ErrorMap),
    /// A submission is already in flight.
    AlreadySubmitting,
}

/// Result of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the wizard reset and closed.
    Submitted,
    /// Rejected or unreachable; the draft is kept. Holds the message to show.
    Failed(String),
    /// The confirmation step has errors.
    Invalid(ErrorMap),
    /// No submission was in flight.
    Ignored,
}

type CloseCallback = Box<dyn FnMut(CloseReason)>;

/// The wizard state machine.
///
/// Owns the form state for one selected vehicle. Opening creates a fresh
/// draft; submitting successfully or closing discards it.
pub struct WizardController {
    store: FormStateStore,
    vehicle: SelectedVehicle,
    locale: Locale,
    submitting: bool,
    on_close: Option<CloseCallback>,
}

impl WizardController {
    /// Open the wizard for a vehicle.
    pub fn open(
        vehicle: SelectedVehicle,
        preselected: Option<PaymentMethod>,
        locale: Locale,
    ) -> Self {
        let store = FormStateStore::new(preselected);
        info!(
            "Opening order wizard for '{}' ({} steps)",
            vehicle.name,
            store.step_count()
        );
        Self {
            store,
            vehicle,
            locale,
            submitting: false,
            on_close: None,
        }
    }

    /// Register the host's close callback.
    pub fn on_close(&mut self, callback: impl FnMut(CloseReason) + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    pub fn store(&self) -> &FormStateStore {
        &self.store
    }

    pub fn vehicle(&self) -> &SelectedVehicle {
        &self.vehicle
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.locale.catalog()
    }

    pub fn cursor(&self) -> usize {
        self.store.cursor()
    }

    pub fn step_count(&self) -> usize {
        self.store.step_count()
    }

    pub fn current_step(&self) -> LogicalStep {
        self.store.current_step()
    }

    pub fn errors(&self) -> &ErrorMap {
        self.store.errors()
    }

    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit one field.
    pub fn edit(&mut self, field: Field, value: FieldValue) -> Result<()> {
        self.set([(field, value)]).map(|_| ())
    }

    /// Edit several fields at once. See [`FormStateStore::set`].
    pub fn set<I>(&mut self, partial: I) -> Result<Vec<Field>>
    where
        I: IntoIterator<Item = (Field, FieldValue)>,
    {
        self.ensure_idle()?;
        let edited = self.store.set(partial)?;
        debug!(
            "Edited {}",
            edited.iter().map(Field::key).collect::<Vec<_>>().join(", ")
        );
        Ok(edited)
    }

    /// Validate the current step and advance if it passes.
    pub fn next(&mut self) -> Advance {
        if self.submitting {
            return Advance::Pending;
        }
        let step = self.current_step();
        let errors = validate(step, self.store.get(), self.catalog());
        self.store.set_errors(errors.clone());

        if !errors.is_empty() {
            debug!(
                "Step '{}' blocked on {}",
                step,
                errors.iter().map(|(f, _)| f.key()).collect::<Vec<_>>().join(", ")
            );
            return Advance::Blocked(errors);
        }

        if self.store.advance() {
            let to = self.current_step();
            debug!("Advanced to step {} '{}'", self.cursor(), to);
            Advance::Moved(to)
        } else {
            Advance::AtLastStep
        }
    }

    /// Go back one step, or close when already on the first.
    pub fn back(&mut self) -> Back {
        if self.submitting {
            return Back::Pending;
        }
        if self.store.retreat() {
            let to = self.current_step();
            debug!("Went back to step {} '{}'", self.cursor(), to);
            Back::Moved(to)
        } else {
            self.close();
            Back::Closed
        }
    }

    /// Discard the draft and notify the host.
    ///
    /// Does nothing while a submission is in flight.
    pub fn close(&mut self) {
        if self.submitting {
            debug!("Close ignored while submitting");
            return;
        }
        info!("Order wizard dismissed");
        self.finish(CloseReason::Dismissed);
    }

    /// Start a submission from the confirmation step.
    ///
    /// Returns an error when called on any other step.
    pub fn begin_submit(&mut self) -> Result<SubmitStart> {
        if self.submitting {
            debug!("Submission already in flight");
            return Ok(SubmitStart::AlreadySubmitting);
        }
        let step = self.current_step();
        if step != LogicalStep::Confirmation {
            return Err(ShowroomError::InvalidWizardState {
                message: format!("cannot submit from step '{}'", step),
            });
        }

        let errors = validate(step, self.store.get(), self.catalog());
        self.store.set_errors(errors.clone());
        if !errors.is_empty() {
            return Ok(SubmitStart::Invalid(errors));
        }

        self.submitting = true;
        info!("Submitting order for '{}'", self.vehicle.name);
        Ok(SubmitStart::Ready(LeadPayload::new(
            self.store.get(),
            &self.vehicle,
            Utc::now(),
        )))
    }

    /// Record the result of the in-flight submission.
    pub fn finish_submit(
        &mut self,
        result: std::result::Result<(), SubmissionError>,
    ) -> SubmitOutcome {
        if !self.submitting {
            return SubmitOutcome::Ignored;
        }
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Order submitted");
                self.finish(CloseReason::Submitted);
                SubmitOutcome::Submitted
            }
            Err(e) => {
                warn!("Order submission failed: {}", e);
                SubmitOutcome::Failed(self.catalog().submit_failure.to_string())
            }
        }
    }

    /// Submit through a client, blocking until it answers.
    pub fn submit(&mut self, client: &dyn SubmissionClient) -> Result<SubmitOutcome> {
        match self.begin_submit()? {
            SubmitStart::Ready(lead) => {
                let result = client.submit(&lead);
                Ok(self.finish_submit(result))
            }
            SubmitStart::Invalid(errors) => Ok(SubmitOutcome::Invalid(errors)),
            SubmitStart::AlreadySubmitting => Ok(SubmitOutcome::Ignored),
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.submitting {
            return Err(ShowroomError::InvalidWizardState {
                message: "cannot edit while an order is being submitted".to_string(),
            });
        }
        Ok(())
    }

    fn finish(&mut self, reason: CloseReason) {
        self.store.reset();
        self.submitting = false;
        if let Some(callback) = self.on_close.as_mut() {
            callback(reason);
        }
    }
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("vehicle", &self.vehicle.name)
            .field("locale", &self.locale)
            .field("cursor", &self.store.cursor())
            .field("submitting", &self.submitting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::draft::Draft;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StubClient {
        fail: bool,
        calls: RefCell<Vec<LeadPayload>>,
    }

    impl StubClient {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SubmissionClient for StubClient {
        fn submit(&self, lead: &LeadPayload) -> std::result::Result<(), SubmissionError> {
            self.calls.borrow_mut().push(lead.clone());
            if self.fail {
                Err(SubmissionError::Transport("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn vehicle() -> SelectedVehicle {
        SelectedVehicle {
            id: Some("camry-2024".to_string()),
            name: "Toyota Camry".to_string(),
            year: 2024,
            price: 118_000,
            image_url: None,
            specs: Vec::new(),
        }
    }

    fn wizard(preselected: Option<PaymentMethod>) -> WizardController {
        WizardController::open(vehicle(), preselected, Locale::English)
    }

    fn text(field: Field, value: &str) -> (Field, FieldValue) {
        (field, FieldValue::text(value))
    }

    fn record_closes(wizard: &mut WizardController) -> Rc<RefCell<Vec<CloseReason>>> {
        let closes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&closes);
        wizard.on_close(move |reason| sink.borrow_mut().push(reason));
        closes
    }

    fn fill_cash_order(wizard: &mut WizardController) {
        wizard.edit(Field::BuyerType, FieldValue::text("individual")).unwrap();
        assert_eq!(wizard.next(), Advance::Moved(LogicalStep::PersonalInfo));
        wizard
            .set([
                text(Field::FullName, "Ali Hassan"),
                text(Field::NationalId, "12345"),
                text(Field::Phone, "0500000000"),
            ])
            .unwrap();
        assert_eq!(wizard.next(), Advance::Moved(LogicalStep::Confirmation));
        wizard
            .edit(Field::AcceptedTerms, FieldValue::Checked(true))
            .unwrap();
    }

    #[test]
    fn opens_on_first_step() {
        let wizard = wizard(None);
        assert_eq!(wizard.cursor(), 1);
        assert_eq!(wizard.current_step(), LogicalStep::BuyerType);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn cash_order_submits_and_resets() {
        let mut wizard = wizard(Some(PaymentMethod::Cash));
        let closes = record_closes(&mut wizard);
        fill_cash_order(&mut wizard);

        let client = StubClient::new(false);
        let outcome = wizard.submit(&client).unwrap();

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(wizard.store().get(), &Draft::new(Some(PaymentMethod::Cash)));
        assert_eq!(wizard.cursor(), 1);
        assert_eq!(*closes.borrow(), vec![CloseReason::Submitted]);

        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].full_name, "Ali Hassan");
        assert_eq!(calls[0].vehicle.name, "Toyota Camry");
    }

    #[test]
    fn failed_submission_keeps_draft() {
        let mut wizard = wizard(Some(PaymentMethod::Cash));
        let closes = record_closes(&mut wizard);
        fill_cash_order(&mut wizard);

        let outcome = wizard.submit(&StubClient::new(true)).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(Locale::English.catalog().submit_failure.to_string())
        );
        assert_eq!(wizard.store().get().identity.full_name, "Ali Hassan");
        assert_eq!(wizard.current_step(), LogicalStep::Confirmation);
        assert!(!wizard.is_submitting());
        assert!(closes.borrow().is_empty());
    }

    #[test]
    fn duplicate_submission_is_ignored() {
        let mut wizard = wizard(Some(PaymentMethod::Cash));
        fill_cash_order(&mut wizard);

        assert!(matches!(
            wizard.begin_submit().unwrap(),
            SubmitStart::Ready(_)
        ));
        assert!(wizard.is_submitting());
        assert_eq!(
            wizard.begin_submit().unwrap(),
            SubmitStart::AlreadySubmitting
        );
        assert_eq!(
            wizard.submit(&StubClient::new(false)).unwrap(),
            SubmitOutcome::Ignored
        );

        assert_eq!(wizard.finish_submit(Ok(())), SubmitOutcome::Submitted);
        assert_eq!(wizard.finish_submit(Ok(())), SubmitOutcome::Ignored);
    }

    #[test]
    fn in_flight_submission_freezes_the_wizard() {
        let mut wizard = wizard(Some(PaymentMethod::Cash));
        let closes = record_closes(&mut wizard);
        fill_cash_order(&mut wizard);
        assert!(matches!(
            wizard.begin_submit().unwrap(),
            SubmitStart::Ready(_)
        ));

        assert_eq!(wizard.back(), Back::Pending);
        assert_eq!(wizard.next(), Advance::Pending);
        let err = wizard
            .edit(Field::FullName, FieldValue::text("Changed"))
            .unwrap_err();
        assert!(matches!(err, ShowroomError::InvalidWizardState { .. }));
        wizard.close();
        assert_eq!(
            wizard.begin_submit().unwrap(),
            SubmitStart::AlreadySubmitting
        );

        let outcome =
            wizard.finish_submit(Err(SubmissionError::Transport("timeout".to_string())));

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(wizard.store().get().identity.full_name, "Ali Hassan");
        assert_eq!(wizard.current_step(), LogicalStep::Confirmation);
        assert!(closes.borrow().is_empty());
        assert_eq!(wizard.back(), Back::Moved(LogicalStep::PersonalInfo));
    }

    #[test]
    fn submit_requires_accepted_terms() {
        let mut wizard = wizard(Some(PaymentMethod::Cash));
        fill_cash_order(&mut wizard);
        wizard
            .edit(Field::AcceptedTerms, FieldValue::Checked(false))
            .unwrap();

        let client = StubClient::new(false);
        match wizard.submit(&client).unwrap() {
            SubmitOutcome::Invalid(errors) => assert!(errors.contains(Field::AcceptedTerms)),
            other => panic!("expected invalid, got {:?}", other),
        }
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn submit_outside_confirmation_is_an_error() {
        let mut wizard = wizard(None);
        let err = wizard.begin_submit().unwrap_err();
        assert!(matches!(err, ShowroomError::InvalidWizardState { .. }));
    }

    #[test]
    fn private_sector_without_bank_verification_blocks() {
        let mut wizard = wizard(Some(PaymentMethod::Finance));
        wizard.edit(Field::BuyerType, FieldValue::text("individual")).unwrap();
        wizard.next();
        wizard
            .set([
                text(Field::FullName, "Ali Hassan"),
                text(Field::NationalId, "12345"),
                text(Field::Phone, "0500000000"),
            ])
            .unwrap();
        assert_eq!(wizard.next(), Advance::Moved(LogicalStep::FinancialInfo));

        wizard
            .set([
                text(Field::JobSector, "private"),
                text(Field::MonthlySalary, "15000"),
                text(Field::BankOrFinanceCompany, "SNB"),
                text(Field::HasExistingObligations, "no"),
            ])
            .unwrap();

        match wizard.next() {
            Advance::Blocked(errors) => {
                assert_eq!(errors.fields(), vec![Field::BankVerified]);
            }
            other => panic!("expected blocked, got {:?}", other),
        }
        assert_eq!(wizard.cursor(), 3);
        assert!(wizard.errors().contains(Field::BankVerified));
    }

    #[test]
    fn obligations_error_clears_when_an_amount_is_filled() {
        let mut wizard = wizard(Some(PaymentMethod::Finance));
        wizard.edit(Field::BuyerType, FieldValue::text("company")).unwrap();
        wizard.next();
        wizard
            .set([
                text(Field::FullName, "Ali Hassan"),
                text(Field::NationalId, "12345"),
                text(Field::Phone, "0500000000"),
            ])
            .unwrap();
        wizard.next();
        wizard
            .set([
                text(Field::JobSector, "government"),
                text(Field::MonthlySalary, "15000"),
                text(Field::BankOrFinanceCompany, "SNB"),
                text(Field::HasExistingObligations, "yes"),
            ])
            .unwrap();

        match wizard.next() {
            Advance::Blocked(errors) => assert_eq!(errors.fields(), vec![Field::LoanDetails]),
            other => panic!("expected blocked, got {:?}", other),
        }

        wizard
            .edit(Field::PersonalObligationAmount, FieldValue::text("900"))
            .unwrap();
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.next(), Advance::Moved(LogicalStep::Confirmation));
    }

    #[test]
    fn back_from_first_step_closes() {
        let mut wizard = wizard(None);
        let closes = record_closes(&mut wizard);
        wizard.edit(Field::BuyerType, FieldValue::text("company")).unwrap();

        assert_eq!(wizard.back(), Back::Closed);
        assert_eq!(wizard.cursor(), 1);
        assert_eq!(wizard.store().get().buyer_type, None);
        assert_eq!(*closes.borrow(), vec![CloseReason::Dismissed]);
    }

    #[test]
    fn back_moves_one_step() {
        let mut wizard = wizard(None);
        wizard.edit(Field::BuyerType, FieldValue::text("company")).unwrap();
        wizard.next();
        assert_eq!(wizard.back(), Back::Moved(LogicalStep::BuyerType));
        assert_eq!(wizard.store().get().buyer_type, Some(crate::wizard::BuyerType::Company));
    }

    #[test]
    fn next_on_last_step_stays() {
        let mut wizard = wizard(Some(PaymentMethod::Cash));
        fill_cash_order(&mut wizard);
        assert_eq!(wizard.next(), Advance::AtLastStep);
        assert_eq!(wizard.cursor(), 3);
    }

    #[test]
    fn passing_step_replaces_stale_errors() {
        let mut wizard = wizard(None);
        assert!(matches!(wizard.next(), Advance::Blocked(_)));
        wizard.edit(Field::BuyerType, FieldValue::text("individual")).unwrap();
        assert_eq!(wizard.next(), Advance::Moved(LogicalStep::PaymentMethod));
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn close_without_callback_resets() {
        let mut wizard = wizard(Some(PaymentMethod::Finance));
        wizard.edit(Field::FullName, FieldValue::text("Sara")).unwrap();
        wizard.close();
        assert_eq!(wizard.store().get(), &Draft::new(Some(PaymentMethod::Finance)));
    }
}

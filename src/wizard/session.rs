//! Drives an open wizard through a [`UserInterface`].
//!
//! Each pass of the loop shows one logical step: a badge header, a prompt
//! per applicable field, then a navigation prompt. Interactive sessions
//! repeat a blocked step; non-interactive sessions abort on the first
//! validation failure because nobody can correct the answers.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Result, ShowroomError};
use crate::export::{DocumentExporter, ImagePrefetch};
use crate::inventory::format_price;
use crate::locale::{Catalog, Localized};
use crate::submission::SubmissionClient;
use crate::ui::{BadgeHandle, BadgeStyles, Prompt, PromptOption, UserInterface};

use super::controller::{Advance, Back, SubmitOutcome, SubmitStart, WizardController};
use super::draft::{
    BankVerification, BuyerType, Draft, Field, FieldValue, InputKind, JobSector, PaymentMethod,
    YesNo,
};
use super::steps::LogicalStep;
use super::summary;
use super::validation::ErrorMap;

/// Prompt key of the navigation question.
pub const NAV_PROMPT_KEY: &str = "nav";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Submitted,
    Cancelled,
}

/// Result of [`WizardSession::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Order documents written during the session.
    pub exported: Vec<PathBuf>,
}

/// Collaborators of a session.
pub struct SessionOptions {
    /// Offers the export action on the confirmation step when set.
    pub exporter: Option<DocumentExporter>,
    /// Vehicle image fetch started when the wizard opened.
    pub image: ImagePrefetch,
    /// Export once, just before submitting, without asking.
    pub auto_export: bool,
    pub badges: BadgeStyles,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            exporter: None,
            image: ImagePrefetch::none(),
            auto_export: false,
            badges: BadgeStyles::new(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Back,
    Cancel,
    Submit,
    Export,
}

impl Action {
    fn key(&self) -> &'static str {
        match self {
            Action::Next => "next",
            Action::Back => "back",
            Action::Cancel => "cancel",
            Action::Submit => "submit",
            Action::Export => "export",
        }
    }

    fn label(&self, catalog: &Catalog) -> &'static str {
        match self {
            Action::Next => catalog.action_next,
            Action::Back => catalog.action_back,
            Action::Cancel => catalog.action_cancel,
            Action::Submit => catalog.action_submit,
            Action::Export => catalog.action_export,
        }
    }

    fn parse(answer: &str, offered: &[Action]) -> Result<Action> {
        let answer = answer.trim().to_lowercase();
        offered
            .iter()
            .copied()
            .find(|action| action.key() == answer)
            .ok_or_else(|| ShowroomError::InvalidInput {
                field: NAV_PROMPT_KEY.to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    answer,
                    offered.iter().map(Action::key).collect::<Vec<_>>().join(", ")
                ),
            })
    }
}

/// What the loop does after a step.
enum Flow {
    Stay,
    Done(SessionOutcome),
}

/// An interactive order session over one wizard.
pub struct WizardSession {
    wizard: WizardController,
    exporter: Option<DocumentExporter>,
    prefetch: Option<ImagePrefetch>,
    image: Option<String>,
    auto_export: bool,
    badges: BadgeStyles,
    exported: Vec<PathBuf>,
}

impl WizardSession {
    pub fn new(wizard: WizardController, options: SessionOptions) -> Self {
        Self {
            wizard,
            exporter: options.exporter,
            prefetch: Some(options.image),
            image: None,
            auto_export: options.auto_export,
            badges: options.badges,
            exported: Vec::new(),
        }
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// Run until the order is submitted or the buyer leaves.
    pub fn run(
        &mut self,
        ui: &mut dyn UserInterface,
        client: &dyn SubmissionClient,
    ) -> Result<SessionReport> {
        let badge = self.badges.acquire();
        let catalog = self.wizard.catalog();

        ui.show_header(catalog.wizard_title);
        let vehicle = self.wizard.vehicle();
        ui.show_hint(&format!(
            "{} {} · {}",
            vehicle.name,
            vehicle.year,
            format_price(vehicle.price)
        ));

        let outcome = loop {
            match self.run_step(ui, client, &badge)? {
                Flow::Stay => continue,
                Flow::Done(outcome) => break outcome,
            }
        };

        if outcome == SessionOutcome::Cancelled {
            ui.message(catalog.cancelled);
        }
        info!("Order session ended: {:?}", outcome);

        Ok(SessionReport {
            outcome,
            exported: std::mem::take(&mut self.exported),
        })
    }

    fn run_step(
        &mut self,
        ui: &mut dyn UserInterface,
        client: &dyn SubmissionClient,
        badge: &BadgeHandle,
    ) -> Result<Flow> {
        let catalog = self.wizard.catalog();
        let step = self.wizard.current_step();

        ui.show_header(&format!(
            "{} {}",
            badge.render(self.wizard.cursor(), self.wizard.step_count()),
            catalog.step_title(step)
        ));

        if step == LogicalStep::Confirmation {
            self.show_summary(ui);
        }
        for &field in step.fields() {
            // Conditions are re-read per field; an earlier answer can open a later one.
            if self.applies(field) {
                self.ask(ui, field)?;
            }
        }

        let offered = self.offered_actions(step);
        let action = self.ask_action(ui, &offered)?;
        debug!("Step '{}' action: {}", step, action.key());

        match action {
            Action::Next => match self.wizard.next() {
                Advance::Moved(_) | Advance::AtLastStep | Advance::Pending => Ok(Flow::Stay),
                Advance::Blocked(errors) => self.blocked(ui, step, &errors),
            },
            Action::Back => match self.wizard.back() {
                Back::Moved(_) | Back::Pending => Ok(Flow::Stay),
                Back::Closed => Ok(Flow::Done(SessionOutcome::Cancelled)),
            },
            Action::Cancel => {
                self.wizard.close();
                Ok(Flow::Done(SessionOutcome::Cancelled))
            }
            Action::Export => {
                self.export(ui)?;
                Ok(Flow::Stay)
            }
            Action::Submit => {
                if self.auto_export && self.wizard.is_complete() {
                    self.export(ui)?;
                }
                self.submit(ui, client, step)
            }
        }
    }

    fn offered_actions(&self, step: LogicalStep) -> Vec<Action> {
        if step != LogicalStep::Confirmation {
            return vec![Action::Next, Action::Back, Action::Cancel];
        }

        let mut actions = vec![Action::Submit];
        if !self.auto_export
            && self
                .exporter
                .as_ref()
                .is_some_and(|exporter| exporter.is_available(&self.wizard))
        {
            actions.push(Action::Export);
        }
        actions.extend([Action::Back, Action::Cancel]);
        actions
    }

    fn ask_action(&mut self, ui: &mut dyn UserInterface, offered: &[Action]) -> Result<Action> {
        let catalog = self.wizard.catalog();
        let options = offered
            .iter()
            .map(|action| PromptOption::new(action.label(catalog), action.key()))
            .collect();
        let prompt = Prompt::select(NAV_PROMPT_KEY, catalog.nav_prompt, options)
            .with_default(offered[0].key());

        let answer = ui.prompt(&prompt)?;
        Action::parse(&answer.as_string(), offered)
    }

    fn blocked(
        &mut self,
        ui: &mut dyn UserInterface,
        step: LogicalStep,
        errors: &ErrorMap,
    ) -> Result<Flow> {
        let lines = self.error_lines(errors);
        for line in &lines {
            ui.error(line);
        }

        if ui.is_interactive() {
            Ok(Flow::Stay)
        } else {
            Err(ShowroomError::ValidationFailed {
                step: step.key().to_string(),
                errors: lines.join("; "),
            })
        }
    }

    fn error_lines(&self, errors: &ErrorMap) -> Vec<String> {
        let catalog = self.wizard.catalog();
        errors
            .iter()
            .map(|(field, message)| format!("{}: {}", catalog.field_label(field), message))
            .collect()
    }

    fn submit(
        &mut self,
        ui: &mut dyn UserInterface,
        client: &dyn SubmissionClient,
        step: LogicalStep,
    ) -> Result<Flow> {
        let catalog = self.wizard.catalog();

        let lead = match self.wizard.begin_submit()? {
            SubmitStart::Ready(lead) => lead,
            SubmitStart::Invalid(errors) => return self.blocked(ui, step, &errors),
            SubmitStart::AlreadySubmitting => return Ok(Flow::Stay),
        };

        let mut spinner = ui.start_spinner(catalog.submitting);
        let result = client.submit(&lead);

        match self.wizard.finish_submit(result) {
            SubmitOutcome::Submitted => {
                spinner.finish_success(catalog.submit_success);
                Ok(Flow::Done(SessionOutcome::Submitted))
            }
            SubmitOutcome::Failed(message) => {
                spinner.finish_error(&message);
                if ui.is_interactive() {
                    Ok(Flow::Stay)
                } else {
                    Err(ShowroomError::Submission { message })
                }
            }
            SubmitOutcome::Invalid(errors) => self.blocked(ui, step, &errors),
            SubmitOutcome::Ignored => Ok(Flow::Stay),
        }
    }

    fn export(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let image = self.image();
        let Some(exporter) = self.exporter.as_ref() else {
            return Ok(());
        };

        match exporter.export(&self.wizard, image) {
            Ok(path) => {
                ui.success(&format!(
                    "{} {}",
                    self.wizard.catalog().export_saved,
                    path.display()
                ));
                self.exported.push(path);
                Ok(())
            }
            Err(e) if ui.is_interactive() => {
                ui.error(&e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// The prefetched image, waiting for the fetch on first use.
    fn image(&mut self) -> Option<String> {
        if let Some(prefetch) = self.prefetch.take() {
            self.image = prefetch.join();
        }
        self.image.clone()
    }

    fn show_summary(&self, ui: &mut dyn UserInterface) {
        let catalog = self.wizard.catalog();
        let vehicle = self.wizard.vehicle();

        let mut rows = vec![(catalog.vehicle_title.to_string(), vehicle.name.clone())];
        rows.extend(
            summary::project(self.wizard.store().get(), catalog)
                .into_iter()
                .map(|line| (line.label.to_string(), line.value)),
        );
        ui.show_summary(catalog.summary_title, &rows);
    }

    /// Whether a field is part of the draft in its current shape.
    fn applies(&self, field: Field) -> bool {
        let store = self.wizard.store();
        let finance = store.get().finance();
        match field {
            Field::PaymentMethod => store.preselected().is_none(),
            Field::JobSector
            | Field::MonthlySalary
            | Field::BankOrFinanceCompany
            | Field::HasExistingObligations => finance.is_some(),
            Field::BankVerified => finance.is_some_and(|f| f.needs_bank_verification()),
            Field::PersonalObligationAmount | Field::PropertyObligationAmount => {
                finance.is_some_and(|f| f.has_obligations())
            }
            Field::LoanDetails => false,
            _ => true,
        }
    }

    fn ask(&mut self, ui: &mut dyn UserInterface, field: Field) -> Result<()> {
        let prompt = field_prompt(field, self.wizard.store().get(), self.wizard.catalog());
        let answer = ui.prompt(&prompt)?;

        let value = match field.kind() {
            InputKind::Toggle => FieldValue::Checked(answer.as_bool()),
            InputKind::Choice | InputKind::Text => FieldValue::text(answer.as_string()),
        };
        self.wizard.edit(field, value)
    }
}

impl fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardSession")
            .field("wizard", &self.wizard)
            .field("exporter", &self.exporter.is_some())
            .field("auto_export", &self.auto_export)
            .field("exported", &self.exported)
            .finish()
    }
}

/// Build the prompt for one field, defaulting to its current value.
fn field_prompt(field: Field, draft: &Draft, catalog: &Catalog) -> Prompt {
    let key = field.key();
    let label = catalog.field_label(field);
    let finance = draft.finance();

    match field {
        Field::BuyerType => choice_prompt(key, label, BuyerType::ALL, draft.buyer_type, catalog),
        Field::PaymentMethod => {
            choice_prompt(key, label, PaymentMethod::ALL, draft.payment_method(), catalog)
        }
        Field::JobSector => choice_prompt(
            key,
            label,
            JobSector::ALL,
            finance.and_then(|f| f.job_sector),
            catalog,
        ),
        Field::BankVerified => choice_prompt(
            key,
            label,
            BankVerification::ALL,
            finance.and_then(|f| f.bank_verified),
            catalog,
        ),
        Field::HasExistingObligations => choice_prompt(
            key,
            label,
            YesNo::ALL,
            finance.and_then(|f| f.has_existing_obligations),
            catalog,
        ),
        Field::HasWhatsapp => {
            Prompt::confirm(key, label).with_default(draft.identity.has_whatsapp.to_string())
        }
        Field::AcceptedTerms => {
            Prompt::confirm(key, label).with_default(draft.closing.accepted_terms.to_string())
        }
        _ => Prompt::input(key, label).with_default(text_value(field, draft)),
    }
}

fn choice_prompt<T>(
    key: &str,
    label: &str,
    all: &[T],
    current: Option<T>,
    catalog: &Catalog,
) -> Prompt
where
    T: Localized + fmt::Display + Copy,
{
    let options = all
        .iter()
        .map(|choice| PromptOption::new(choice.label(catalog), choice.to_string()))
        .collect();
    let prompt = Prompt::select(key, label, options);
    match current {
        Some(choice) => prompt.with_default(choice.to_string()),
        None => prompt,
    }
}

fn text_value(field: Field, draft: &Draft) -> String {
    let identity = &draft.identity;
    let finance = draft.finance();
    let value = match field {
        Field::FullName => Some(&identity.full_name),
        Field::NationalId => Some(&identity.national_id),
        Field::Email => Some(&identity.email),
        Field::Phone => Some(&identity.phone),
        Field::Note => Some(&draft.closing.note),
        Field::MonthlySalary => finance.map(|f| &f.monthly_salary),
        Field::BankOrFinanceCompany => finance.map(|f| &f.bank_or_finance_company),
        Field::PersonalObligationAmount => finance.map(|f| &f.personal_obligation_amount),
        Field::PropertyObligationAmount => finance.map(|f| &f.property_obligation_amount),
        _ => None,
    };
    value.cloned().unwrap_or_default()
}

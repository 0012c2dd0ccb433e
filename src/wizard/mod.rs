//! The multi-step purchase wizard.
//!
//! # Overview
//!
//! A buyer fills a [`Draft`] across up to five logical steps. Which steps
//! appear depends on whether the host preselected a payment method and on
//! the branch the buyer picked:
//!
//! - [`steps`] maps the cursor to a [`LogicalStep`]
//! - [`validation`] checks one step and returns an [`ErrorMap`]
//! - [`FormStateStore`] owns the draft, cursor, and errors
//! - [`WizardController`] gates navigation on validation and runs submission
//! - [`summary`] projects the draft into localized display lines
//! - [`session`] drives a controller through a [`UserInterface`](crate::ui::UserInterface)

pub mod controller;
pub mod draft;
pub mod session;
pub mod steps;
pub mod store;
pub mod summary;
pub mod validation;

pub use controller::{Advance, Back, CloseReason, SubmitOutcome, SubmitStart, WizardController};
pub use draft::{
    is_blank, BankVerification, BuyerType, Closing, Draft, Field, FieldValue, FinanceDetails,
    Identity, InputKind, JobSector, Payment, PaymentMethod, YesNo,
};
pub use session::{SessionOptions, SessionOutcome, SessionReport, WizardSession};
pub use steps::LogicalStep;
pub use store::FormStateStore;
pub use summary::SummaryLine;
pub use validation::{validate, ErrorMap};

//! Downloadable order documents.

mod image;
mod render;

pub use image::{embeddable, HttpImageFetcher, ImageFetcher, ImagePrefetch, ERROR_PREFIX};
pub use render::{DocumentRenderer, MarkdownRenderer, OrderDocument};

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::error::{Result, ShowroomError};
use crate::wizard::{summary, WizardController};

/// File name for an exported order: `car-order-{fullName}-{YYYY-MM-DD}.{ext}`.
pub fn export_filename(full_name: &str, date: NaiveDate, extension: &str) -> String {
    let name: String = full_name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("car-order-{}-{}.{}", name, date.format("%Y-%m-%d"), extension)
}

/// Writes order documents into a directory.
pub struct DocumentExporter {
    renderer: Box<dyn DocumentRenderer>,
    directory: PathBuf,
    dealer_name: Option<String>,
}

impl DocumentExporter {
    pub fn new(renderer: Box<dyn DocumentRenderer>, directory: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            directory: directory.into(),
            dealer_name: None,
        }
    }

    /// Show a dealer name under the document title.
    pub fn with_dealer_name(mut self, dealer_name: Option<String>) -> Self {
        self.dealer_name = dealer_name;
        self
    }

    /// Whether the wizard's draft may be exported.
    pub fn is_available(&self, wizard: &WizardController) -> bool {
        wizard.is_complete()
    }

    /// Export the current draft. Fails unless every detail is filled in.
    pub fn export(&self, wizard: &WizardController, image: Option<String>) -> Result<PathBuf> {
        self.export_at(wizard, image, Utc::now())
    }

    /// Export with an explicit generation time.
    pub fn export_at(
        &self,
        wizard: &WizardController,
        image: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<PathBuf> {
        if !self.is_available(wizard) {
            return Err(ShowroomError::ExportUnavailable);
        }

        let draft = wizard.store().get();
        let catalog = wizard.catalog();
        let document = OrderDocument {
            catalog,
            dealer_name: self.dealer_name.as_deref(),
            vehicle: wizard.vehicle(),
            lines: summary::project(draft, catalog),
            note: &draft.closing.note,
            image,
            generated_at: now,
        };

        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(export_filename(
            &draft.identity.full_name,
            now.date_naive(),
            self.renderer.extension(),
        ));
        fs::write(&path, self.renderer.render(&document))?;

        info!("Exported order summary to {}", path.display());
        Ok(path)
    }
}

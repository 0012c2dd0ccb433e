//! Order document rendering.

use chrono::{DateTime, Utc};

use crate::inventory::{format_price, SelectedVehicle};
use crate::locale::Catalog;
use crate::wizard::{is_blank, SummaryLine};

/// Everything an exported order document shows.
#[derive(Debug, Clone)]
pub struct OrderDocument<'a> {
    pub catalog: &'a Catalog,
    pub dealer_name: Option<&'a str>,
    pub vehicle: &'a SelectedVehicle,
    pub lines: Vec<SummaryLine>,
    pub note: &'a str,
    /// `data:` URI of the vehicle image.
    pub image: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Produces the bytes of an exported document.
pub trait DocumentRenderer {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &OrderDocument<'_>) -> Vec<u8>;
}

/// Renders orders as Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl DocumentRenderer for MarkdownRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, document: &OrderDocument<'_>) -> Vec<u8> {
        let catalog = document.catalog;
        let vehicle = document.vehicle;
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", catalog.order_title));
        if let Some(dealer) = document.dealer_name {
            out.push_str(&format!("_{}_\n\n", dealer));
        }

        out.push_str(&format!("## {}\n\n", catalog.vehicle_title));
        out.push_str(&format!("**{}**\n\n", vehicle.name));
        if let Some(image) = &document.image {
            out.push_str(&format!("![{}]({})\n\n", vehicle.name, image));
        }
        out.push_str(&format!("- {}: {}\n", catalog.vehicle_year, vehicle.year));
        out.push_str(&format!(
            "- {}: {}\n",
            catalog.vehicle_price,
            format_price(vehicle.price)
        ));

        if !vehicle.specs.is_empty() {
            out.push_str(&format!("\n### {}\n\n", catalog.vehicle_specs));
            for spec in &vehicle.specs {
                out.push_str(&format!("- {}: {}\n", spec.label, spec.value));
            }
        }

        out.push_str(&format!("\n## {}\n\n", catalog.summary_title));
        out.push_str("| | |\n|---|---|\n");
        for line in &document.lines {
            out.push_str(&format!("| {} | {} |\n", cell(line.label), cell(&line.value)));
        }

        if !is_blank(document.note) {
            out.push_str(&format!("\n## {}\n\n{}\n", catalog.label_note, document.note.trim()));
        }

        out.push_str(&format!(
            "\n---\n\n{}: {}\n",
            catalog.generated_at,
            document.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        out.into_bytes()
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::VehicleSpec;
    use crate::locale::ENGLISH;
    use crate::wizard::Field;
    use chrono::TimeZone;

    fn vehicle() -> SelectedVehicle {
        SelectedVehicle {
            id: None,
            name: "Toyota Camry".to_string(),
            year: 2024,
            price: 118_000,
            image_url: None,
            specs: vec![VehicleSpec {
                label: "Engine".to_string(),
                value: "2.5L".to_string(),
            }],
        }
    }

    fn render(document: &OrderDocument<'_>) -> String {
        String::from_utf8(MarkdownRenderer.render(document)).unwrap()
    }

    fn document(vehicle: &SelectedVehicle) -> OrderDocument<'_> {
        OrderDocument {
            catalog: &ENGLISH,
            dealer_name: Some("Desert Motors"),
            vehicle,
            lines: vec![SummaryLine {
                field: Field::FullName,
                label: ENGLISH.label_full_name,
                value: "Ali | Hassan".to_string(),
            }],
            note: "",
            image: None,
            generated_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn renders_vehicle_and_summary() {
        let vehicle = vehicle();
        let text = render(&document(&vehicle));

        assert!(text.starts_with(&format!("# {}", ENGLISH.order_title)));
        assert!(text.contains("_Desert Motors_"));
        assert!(text.contains("**Toyota Camry**"));
        assert!(text.contains("- Price: 118,000"));
        assert!(text.contains("- Engine: 2.5L"));
        assert!(text.contains(&format!("| {} | Ali \\| Hassan |", ENGLISH.label_full_name)));
        assert!(text.contains("2026-03-01 09:30 UTC"));
    }

    #[test]
    fn image_and_note_are_optional() {
        let vehicle = vehicle();
        let mut doc = document(&vehicle);
        let text = render(&doc);
        assert!(!text.contains("!["));
        assert!(!text.contains(&format!("## {}", ENGLISH.label_note)));

        doc.image = Some("data:image/png;base64,AAAA".to_string());
        doc.note = "Deliver on Friday";
        let text = render(&doc);
        assert!(text.contains("![Toyota Camry](data:image/png;base64,AAAA)"));
        assert!(text.contains("Deliver on Friday"));
    }

    #[test]
    fn markdown_extension() {
        assert_eq!(MarkdownRenderer.extension(), "md");
    }
}

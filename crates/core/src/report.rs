//! Safety-report input model and its mapping onto document sections.

use crate::config::ReportOptions;
use crate::simplify::Simplifier;
use safedoc_idf::{
    Block, Document, DocumentBuilder, DocumentError, PlacementPolicy, SectionBuilder, SectionKind,
};
use safedoc_types::{ImageKey, Px, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    pub name: String,
    pub location: String,
    pub client: String,
    pub prepared_by: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hazard {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub controls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStep {
    pub title: String,
    pub description: String,
    pub controls: Vec<String>,
}

/// A photo reference. Dimensions come from the host's decoder; when decoding
/// failed the host leaves them at zero and fills `unavailable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub key: ImageKey,
    #[serde(default)]
    pub width: Px,
    #[serde(default)]
    pub height: Px,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub unavailable: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub role: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyInfo {
    pub contacts: Vec<Contact>,
    pub assembly_point: String,
    pub nearest_hospital: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signature {
    pub role: String,
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetyReport {
    pub project: ProjectDetails,
    pub hazards: Vec<Hazard>,
    pub job_steps: Vec<JobStep>,
    pub photos: Vec<Photo>,
    pub emergency: Option<EmergencyInfo>,
    pub signatures: Vec<Signature>,
}

impl SafetyReport {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Builds the section list for `report`.
///
/// Sections whose source data is empty are left out entirely.
pub fn build_report_document(
    report: &SafetyReport,
    options: &ReportOptions,
) -> Result<Document, DocumentError> {
    let simplifier = Simplifier::new(options.simplify_language);
    let mut builder = DocumentBuilder::new();

    if !report.hazards.is_empty() {
        builder.push_section(summary_section(report, options, &simplifier));
    }
    if let Some(section) = project_section(&report.project) {
        builder.push_section(section);
    }
    if !report.hazards.is_empty() {
        builder.push_section(hazard_section(&report.hazards, &simplifier));
    }
    if !report.job_steps.is_empty() {
        builder.push_section(job_step_section(&report.job_steps, options, &simplifier));
    }
    if !report.photos.is_empty() {
        builder.push_section(photo_section(&report.photos, options));
    }
    if report.emergency.is_some() || !report.signatures.is_empty() {
        builder.push_section(emergency_section(
            report.emergency.as_ref(),
            &report.signatures,
        ));
    }

    let document = builder.build()?;
    log::debug!(
        "Built report '{}' with {} sections and {} blocks",
        report.project.name,
        document.sections().len(),
        document.block_count()
    );
    Ok(document)
}

fn summary_section(
    report: &SafetyReport,
    options: &ReportOptions,
    simplifier: &Simplifier,
) -> SectionBuilder {
    let mut ranked: Vec<&Hazard> = report.hazards.iter().collect();
    // stable: equal severities keep report order
    ranked.sort_by(|a, b| b.severity.cmp(&a.severity));

    let high = report
        .hazards
        .iter()
        .filter(|h| h.severity >= Severity::High)
        .count();
    let mut section = SectionBuilder::new(SectionKind::Summary)
        .default_title()
        .policy(PlacementPolicy::SinglePage)
        .block(Block::paragraph(format!(
            "{} hazards identified, {} rated high or critical.",
            report.hazards.len(),
            high
        )));

    for hazard in ranked.into_iter().take(options.summary_hazard_count) {
        let mut value = format!("Severity: {}.", hazard.severity.label());
        if let Some(control) = hazard.controls.first() {
            value.push(' ');
            value.push_str(&simplifier.control(control));
        }
        section.push(Block::field(hazard.title.clone(), value));
    }
    section
}

fn project_section(project: &ProjectDetails) -> Option<SectionBuilder> {
    let fields = [
        ("Project", &project.name),
        ("Location", &project.location),
        ("Client", &project.client),
        ("Prepared by", &project.prepared_by),
        ("Date", &project.date),
    ];
    let mut section = SectionBuilder::new(SectionKind::ProjectInfo).default_title();
    for (label, value) in fields {
        if !value.trim().is_empty() {
            section.push(Block::field(label, value.clone()));
        }
    }
    if !project.description.trim().is_empty() {
        section.push(Block::paragraph(project.description.clone()));
    }
    (!section.is_empty()).then_some(section)
}

fn hazard_section(hazards: &[Hazard], simplifier: &Simplifier) -> SectionBuilder {
    let mut section = SectionBuilder::new(SectionKind::Hazards)
        .default_title()
        .continuation_heading(true);

    for (i, hazard) in hazards.iter().enumerate() {
        if i > 0 {
            section.push(Block::Divider);
        }
        section.push(Block::field(
            format!("{} ({})", hazard.title, hazard.severity.label()),
            simplifier.text(&hazard.description),
        ));
        if !hazard.controls.is_empty() {
            section.push(Block::bullets(
                hazard.controls.iter().map(|c| simplifier.control(c)),
            ));
        }
    }
    section
}

fn job_step_section(
    steps: &[JobStep],
    options: &ReportOptions,
    simplifier: &Simplifier,
) -> SectionBuilder {
    // One block per step so the per-page count is a count of steps.
    let blocks = steps.iter().enumerate().map(|(i, step)| {
        let mut value = simplifier.text(&step.description);
        if !step.controls.is_empty() {
            let controls: Vec<String> = step.controls.iter().map(|c| simplifier.control(c)).collect();
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str("Controls: ");
            value.push_str(&controls.join("; "));
        }
        Block::field(format!("Step {}: {}", i + 1, step.title), value)
    });

    SectionBuilder::new(SectionKind::JobSteps)
        .default_title()
        .policy(PlacementPolicy::FixedCount {
            per_page: options.job_steps_per_page,
        })
        .continuation_heading(true)
        .blocks(blocks)
}

fn photo_section(photos: &[Photo], options: &ReportOptions) -> SectionBuilder {
    let slot = Size::new(options.photo_box_width, options.photo_box_height);
    let blocks = photos.iter().map(|photo| {
        let decoded = photo.width > 0.0 && photo.height > 0.0;
        let mut block = Block::image(
            photo.key.clone(),
            Size::new(photo.width, photo.height),
            slot,
        );
        if let Some(caption) = &photo.caption {
            block = block.with_caption(caption.clone());
        }
        if let Block::Image { unavailable, .. } = &mut block {
            *unavailable = match (&photo.unavailable, decoded) {
                (Some(reason), _) => Some(reason.clone()),
                (None, false) => Some("image dimensions unknown".to_string()),
                (None, true) => None,
            };
        }
        block
    });

    SectionBuilder::new(SectionKind::Photos)
        .default_title()
        .policy(PlacementPolicy::FixedCount {
            per_page: options.photos_per_page,
        })
        .break_before(true)
        .continuation_heading(true)
        .blocks(blocks)
}

fn emergency_section(emergency: Option<&EmergencyInfo>, signatures: &[Signature]) -> SectionBuilder {
    let mut section = SectionBuilder::new(SectionKind::EmergencyAndSignatures)
        .default_title()
        .policy(PlacementPolicy::SinglePage)
        .break_before(true);

    if let Some(info) = emergency {
        for contact in &info.contacts {
            section.push(Block::field(
                contact.role.clone(),
                format!("{}, {}", contact.name, contact.phone),
            ));
        }
        if !info.assembly_point.trim().is_empty() {
            section.push(Block::field("Assembly point", info.assembly_point.clone()));
        }
        if !info.nearest_hospital.trim().is_empty() {
            section.push(Block::field("Nearest hospital", info.nearest_hospital.clone()));
        }
    }

    if !signatures.is_empty() {
        if !section.is_empty() {
            section.push(Block::Divider);
        }
        for signature in signatures {
            section.push(Block::field(
                signature.role.clone(),
                format!(
                    "{}    Signature: ____________    Date: {}",
                    signature.name, signature.date
                ),
            ));
        }
    }
    section
}

use safedoc::SafetyReport;
use serde_json::{Value, json};

pub fn hazard(title: &str, severity: &str) -> Value {
    json!({
        "title": title,
        "description": "Workers utilize elevated platforms adjacent to the excavation.",
        "severity": severity,
        "controls": [
            "Workers should wear harnesses",
            "Guardrails must be installed prior to work"
        ]
    })
}

pub fn job_step(n: usize) -> Value {
    json!({
        "title": format!("Task {}", n),
        "description": "Commence work once the area is barricaded.",
        "controls": ["It is recommended to inspect tools daily"]
    })
}

pub fn photo(key: &str) -> Value {
    json!({ "key": key, "width": 1600, "height": 1200, "caption": format!("Photo {}", key) })
}

pub fn report_json(hazards: Vec<Value>, steps: Vec<Value>, photos: Vec<Value>) -> Value {
    json!({
        "project": {
            "name": "Riverside pump station",
            "location": "Dock road, north gate",
            "client": "Harbour Water",
            "preparedBy": "Site safety office",
            "date": "2026-03-02"
        },
        "hazards": hazards,
        "jobSteps": steps,
        "photos": photos,
        "emergency": {
            "contacts": [{"role": "Site lead", "name": "A. Mensah", "phone": "555-0100"}],
            "assemblyPoint": "Gate B car park",
            "nearestHospital": "St Mary's, 4 km"
        },
        "signatures": [{"role": "Supervisor", "name": "J. Park", "date": "2026-03-02"}]
    })
}

pub fn report(value: Value) -> SafetyReport {
    serde_json::from_value(value).expect("fixture report should deserialize")
}

/// A report with `hazards` hazards, `steps` job steps and `photos` photos.
pub fn sized_report(hazards: usize, steps: usize, photos: usize) -> SafetyReport {
    let severities = ["low", "medium", "high", "critical"];
    report(report_json(
        (0..hazards)
            .map(|i| hazard(&format!("Hazard {}", i + 1), severities[i % 4]))
            .collect(),
        (0..steps).map(|i| job_step(i + 1)).collect(),
        (0..photos).map(|i| photo(&format!("p{}", i + 1))).collect(),
    ))
}

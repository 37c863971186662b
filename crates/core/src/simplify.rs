//! Plain-language rewriting applied to report text before layout.
//!
//! Runs before measurement, so whatever it produces is what gets wrapped and
//! drawn.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Jargon and its plain replacement. Longer phrases come first so they win
/// over their own sub-phrases.
const VOCABULARY: &[(&str, &str)] = &[
    ("personal protective equipment", "safety gear"),
    ("in the event of", "if"),
    ("prior to", "before"),
    ("in order to", "to"),
    ("at this point in time", "now"),
    ("a sufficient number of", "enough"),
    ("in close proximity to", "near"),
    ("commence", "start"),
    ("utilize", "use"),
    ("utilise", "use"),
    ("terminate", "stop"),
    ("elevated", "high up"),
    ("ascertain", "check"),
    ("facilitate", "help"),
    ("subsequently", "then"),
    ("approximately", "about"),
    ("adjacent to", "next to"),
    ("ingress", "entry"),
    ("egress", "exit"),
];

static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    VOCABULARY
        .iter()
        .filter_map(|(phrase, plain)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
            Regex::new(&pattern).ok().map(|re| (re, *plain))
        })
        .collect()
});

static WORKER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:all\s+)?(?:workers|employees|personnel|staff|operators|crews?)\s+(?:should|must|shall|will|need\s+to|are\s+required\s+to)\s+",
    )
    .expect("static regex")
});

static ADVISORY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:please\s+|it\s+is\s+(?:recommended|required|advised|important)\s+(?:that\s+you\s+|to\s+)|you\s+(?:should|must|need\s+to)\s+)",
    )
    .expect("static regex")
});

static PASSIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<object>.+?)\s+(?:must|should|shall|are\s+to|is\s+to)\s+be\s+(?P<verb>[a-z]+)(?P<rest>.*)$")
        .expect("static regex")
});

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("static regex"));

/// Past participles that have an obvious imperative form.
fn imperative_of(participle: &str) -> Option<&'static str> {
    let verb = match participle.to_lowercase().as_str() {
        "worn" => "wear",
        "used" => "use",
        "installed" => "install",
        "inspected" => "inspect",
        "checked" => "check",
        "kept" => "keep",
        "secured" => "secure",
        "removed" => "remove",
        "maintained" => "maintain",
        "provided" => "provide",
        "barricaded" => "barricade",
        "locked" => "lock",
        "tagged" => "tag",
        "isolated" => "isolate",
        "cleared" => "clear",
        "reported" => "report",
        "stored" => "store",
        "tested" => "test",
        _ => return None,
    };
    Some(verb)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rewrites jargon into plain words, keeping the capitalisation of the first
/// letter of each replaced phrase.
pub fn simplify(text: &str) -> String {
    let mut out = text.to_string();
    for (re, plain) in RULES.iter() {
        out = re
            .replace_all(&out, |caps: &Captures| {
                let matched = &caps[0];
                if matched.chars().next().is_some_and(char::is_uppercase) {
                    capitalize_first(plain)
                } else {
                    plain.to_string()
                }
            })
            .into_owned();
    }
    SPACES.replace_all(&out, " ").trim().to_string()
}

/// Turns a control measure into an imperative instruction.
///
/// "Workers should wear gloves" becomes "Wear gloves" and
/// "Harnesses must be worn at all times." becomes "Wear harnesses at all times."
pub fn action_phrase(text: &str) -> String {
    let trimmed = text.trim();
    let stripped = WORKER_PREFIX.replace(trimmed, "");
    let stripped = ADVISORY_PREFIX.replace(&stripped, "").into_owned();

    if let Some(caps) = PASSIVE.captures(&stripped) {
        if let Some(verb) = imperative_of(&caps["verb"]) {
            let object = lowercase_first(caps["object"].trim_start_matches("The ").trim_start_matches("the "));
            return capitalize_first(&format!("{} {}{}", verb, object, &caps["rest"]));
        }
    }
    capitalize_first(&stripped)
}

/// Applies both rewrites as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplifier {
    enabled: bool,
}

impl Simplifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn text(&self, text: &str) -> String {
        if self.enabled {
            simplify(text)
        } else {
            text.trim().to_string()
        }
    }

    pub fn control(&self, text: &str) -> String {
        if self.enabled {
            action_phrase(&simplify(text))
        } else {
            text.trim().to_string()
        }
    }
}

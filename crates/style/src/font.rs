use crate::error::StyleError;
use safedoc_types::Px;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Numeric(n) => *n,
        }
    }

    fn parse(s: &str) -> Result<Self, StyleError> {
        match s.to_lowercase().as_str() {
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "bold" => Ok(FontWeight::Bold),
            _ => s
                .parse::<u16>()
                .map(FontWeight::Numeric)
                .map_err(|_| StyleError::InvalidFontWeight(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::Numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// The style token handed to a `TextMeasurer`.
///
/// Two tokens with the same fields measure identically, which is what lets the
/// layout engine cache derived metrics per token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: Px,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Hash for TextStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font_size.to_bits().hash(state);
        self.weight.hash(state);
        self.style.hash(state);
    }
}

impl Eq for TextStyle {}

impl Default for TextStyle {
    fn default() -> Self {
        Self::body()
    }
}

impl TextStyle {
    pub fn new(font_size: Px, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            font_size,
            weight,
            style,
        }
    }

    pub fn body() -> Self {
        Self::new(11.0, FontWeight::Regular, FontStyle::Normal)
    }

    pub fn label() -> Self {
        Self::new(10.0, FontWeight::Bold, FontStyle::Normal)
    }

    pub fn heading() -> Self {
        Self::new(16.0, FontWeight::Bold, FontStyle::Normal)
    }

    pub fn caption() -> Self {
        Self::new(9.0, FontWeight::Regular, FontStyle::Italic)
    }

    pub fn with_size(self, font_size: Px) -> Self {
        Self { font_size, ..self }
    }

    pub fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }

    pub fn is_valid(&self) -> bool {
        self.font_size.is_finite() && self.font_size > 0.0
    }
}

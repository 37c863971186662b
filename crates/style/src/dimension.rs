//! Page sizes and margins.
use crate::error::StyleError;
use safedoc_types::Px;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};
use std::hash::{Hash, Hasher};

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Hash for Margins {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Margins {}

impl Margins {
    pub fn all(value: Px) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn x(value: Px) -> Self {
        Self {
            top: 0.0,
            right: value,
            bottom: 0.0,
            left: value,
        }
    }

    pub fn y(value: Px) -> Self {
        Self {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Parse a CSS-style length value with optional unit (e.g., "10pt", "5mm", "12")
    fn parse_length(input: &str) -> Result<Px, StyleError> {
        let input = input.trim();
        let invalid = |e: std::num::ParseFloatError| {
            StyleError::InvalidLength(input.to_string(), e.to_string())
        };

        if let Some(val) = input.strip_suffix("pt") {
            return val.trim().parse::<Px>().map_err(invalid);
        }
        if let Some(val) = input.strip_suffix("px") {
            return val.trim().parse::<Px>().map_err(invalid);
        }
        if let Some(val) = input.strip_suffix("in") {
            return val.trim().parse::<Px>().map(|v| v * 72.0).map_err(invalid);
        }
        if let Some(val) = input.strip_suffix("cm") {
            return val.trim().parse::<Px>().map(|v| v * 28.35).map_err(invalid);
        }
        if let Some(val) = input.strip_suffix("mm") {
            return val.trim().parse::<Px>().map(|v| v * 2.835).map_err(invalid);
        }

        // No unit, assume points
        input.parse::<Px>().map_err(invalid)
    }

    /// Parse CSS-style margin shorthand (1, 2, or 4 values)
    pub fn parse_shorthand(input: &str) -> Result<Self, StyleError> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.len() {
            1 => Ok(Margins::all(values[0])),
            2 => Ok(Margins {
                top: values[0],
                right: values[1],
                bottom: values[0],
                left: values[1],
            }),
            4 => Ok(Margins {
                top: values[0],
                right: values[1],
                bottom: values[2],
                left: values[3],
            }),
            n => Err(StyleError::InvalidShorthand(n)),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string like '10pt' or '10pt 20pt', a number, or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as Px))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as Px))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as Px))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => {
                            let _ = map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    A4,
    #[default]
    Letter,
    Legal,
    Custom { width: Px, height: Px },
}

impl Eq for PageSize {}

impl Hash for PageSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PageSize::A4 => 0u8.hash(state),
            PageSize::Letter => 1u8.hash(state),
            PageSize::Legal => 2u8.hash(state),
            PageSize::Custom { width, height } => {
                3u8.hash(state);
                width.to_bits().hash(state);
                height.to_bits().hash(state);
            }
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(&self) -> (Px, Px) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    fn parse(s: &str) -> Result<Self, StyleError> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" | "us-letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleError::UnknownPageSize(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: Px, height: Px },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_shorthand() {
        assert_eq!(Margins::parse_shorthand("10pt").unwrap(), Margins::all(10.0));
        let m = Margins::parse_shorthand("1in 18").unwrap();
        assert_eq!(m.top, 72.0);
        assert_eq!(m.right, 18.0);
        assert_eq!(m.bottom, 72.0);
        assert_eq!(m.left, 18.0);
        assert_eq!(
            Margins::parse_shorthand("1 2 3").unwrap_err(),
            StyleError::InvalidShorthand(3)
        );
        assert!(Margins::parse_shorthand("ten").is_err());
    }

    #[test]
    fn test_margins_deserialize_forms() {
        let from_str: Margins = serde_json::from_str("\"36pt\"").unwrap();
        assert_eq!(from_str, Margins::all(36.0));
        let from_num: Margins = serde_json::from_str("20").unwrap();
        assert_eq!(from_num, Margins::all(20.0));
        let from_map: Margins = serde_json::from_str(r#"{"top": 5, "left": 7}"#).unwrap();
        assert_eq!(from_map.top, 5.0);
        assert_eq!(from_map.left, 7.0);
        assert_eq!(from_map.bottom, 0.0);
    }

    #[test]
    fn test_page_size_deserialize() {
        let a4: PageSize = serde_json::from_str("\"a4\"").unwrap();
        assert_eq!(a4, PageSize::A4);
        let custom: PageSize = serde_json::from_str(r#"{"width": 300, "height": 700}"#).unwrap();
        assert_eq!(custom.dimensions(), (300.0, 700.0));
        assert!(serde_json::from_str::<PageSize>("\"tabloid\"").is_err());
    }

    #[test]
    fn test_margins_validity() {
        assert!(Margins::all(10.0).is_valid());
        assert!(!Margins::all(-1.0).is_valid());
    }
}

use safedoc_style::{FontStyle, FontWeight, TextStyle};
use safedoc_types::Px;

/// Font name with style suffix, e.g. `Helvetica-BoldItalic`.
pub fn styled_font_name(base_name: &str, style: &TextStyle) -> String {
    let bold = style.weight.numeric_value() >= FontWeight::Bold.numeric_value();
    let italic = style.style == FontStyle::Italic;

    let mut name = base_name.to_string();
    if bold || italic {
        name.push('-');
        if bold && italic {
            name.push_str("BoldItalic");
        } else if bold {
            name.push_str("Bold");
        } else {
            name.push_str("Italic");
        }
    }
    name
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: Px, page_height: Px) -> Px {
    page_height - y
}

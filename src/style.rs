use serde::{Deserialize, Serialize};

/// Horizontal placement of the optional email image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS keyword for this alignment
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Center
    }
}

/// Style record for one section of the email
///
/// All values are CSS-literal strings passed through to the output without
/// unit validation. `line_height` is only meaningful for the content section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    pub font_size: String,
    pub color: String,
    pub background_color: String,
    pub padding: String,
    pub text_align: String,
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl SectionStyle {
    /// Inline CSS declaration list in the fixed property order
    /// (fontSize, color, backgroundColor, padding, textAlign, fontFamily,
    /// lineHeight). Output order is stable for identical input.
    pub fn to_inline_css(&self) -> String {
        let mut css = format!(
            "font-size: {}; color: {}; background-color: {}; padding: {}; text-align: {}; font-family: {}",
            self.font_size,
            self.color,
            self.background_color,
            self.padding,
            self.text_align,
            self.font_family,
        );
        if let Some(line_height) = &self.line_height {
            css.push_str("; line-height: ");
            css.push_str(line_height);
        }
        css
    }
}

/// Per-section style records — always exactly header, content, footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub header: SectionStyle,
    pub content: SectionStyle,
    pub footer: SectionStyle,
}

impl StyleSheet {
    pub fn default_header() -> SectionStyle {
        SectionStyle {
            font_size: "24px".to_string(),
            color: "#000000".to_string(),
            background_color: "transparent".to_string(),
            padding: "10px".to_string(),
            text_align: "left".to_string(),
            font_family: "Arial".to_string(),
            line_height: None,
        }
    }

    pub fn default_content() -> SectionStyle {
        SectionStyle {
            font_size: "16px".to_string(),
            color: "#333333".to_string(),
            background_color: "transparent".to_string(),
            padding: "15px".to_string(),
            text_align: "left".to_string(),
            font_family: "Arial".to_string(),
            line_height: Some("1.5".to_string()),
        }
    }

    pub fn default_footer() -> SectionStyle {
        SectionStyle {
            font_size: "14px".to_string(),
            color: "#666666".to_string(),
            background_color: "transparent".to_string(),
            padding: "10px".to_string(),
            text_align: "center".to_string(),
            font_family: "Arial".to_string(),
            line_height: None,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            header: Self::default_header(),
            content: Self::default_content(),
            footer: Self::default_footer(),
        }
    }
}

/// Size and placement of the optional email image
///
/// An empty `url` means no image. The stored url is collaborator-relative
/// (`/uploads/...`) and is absolutized against a base url at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    #[serde(default)]
    pub url: String,
    pub width: String,
    pub max_height: String,
    pub alignment: Alignment,
}

impl ImageDescriptor {
    /// True when a url is present and the image block should render
    pub fn has_image(&self) -> bool {
        !self.url.is_empty()
    }
}

impl Default for ImageDescriptor {
    fn default() -> Self {
        ImageDescriptor {
            url: String::new(),
            width: "100%".to_string(),
            max_height: "300px".to_string(),
            alignment: Alignment::Center,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::style::{ImageDescriptor, SectionStyle, StyleSheet};

/// One of the three fixed sections of an email template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Content,
    Footer,
}

/// Rich-text markup per section — always exactly header, content, footer,
/// never partial. Empty strings are valid and mean "omit this block".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub footer: String,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Header => &self.header,
            SectionKind::Content => &self.content,
            SectionKind::Footer => &self.footer,
        }
    }
}

/// The canonical in-memory representation of one email template
///
/// A document is an immutable value: edits go through the `with_*`
/// transitions, each returning a new document, so serialization and
/// compilation never observe partial state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateDocument {
    pub title: String,
    pub sections: Sections,
    pub styles: StyleSheet,
    pub image: ImageDescriptor,
}

impl TemplateDocument {
    /// New document with default styles, empty sections and no image
    pub fn new(title: impl Into<String>) -> Self {
        TemplateDocument {
            title: title.into(),
            sections: Sections::default(),
            styles: StyleSheet::default(),
            image: ImageDescriptor::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace one section's markup
    pub fn with_section(mut self, kind: SectionKind, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        match kind {
            SectionKind::Header => self.sections.header = markup,
            SectionKind::Content => self.sections.content = markup,
            SectionKind::Footer => self.sections.footer = markup,
        }
        self
    }

    /// Replace one section's style record
    pub fn with_style(mut self, kind: SectionKind, style: SectionStyle) -> Self {
        match kind {
            SectionKind::Header => self.styles.header = style,
            SectionKind::Content => self.styles.content = style,
            SectionKind::Footer => self.styles.footer = style,
        }
        self
    }

    /// Replace the image descriptor
    pub fn with_image(mut self, image: ImageDescriptor) -> Self {
        self.image = image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Alignment;

    #[test]
    fn test_transitions_return_new_documents() {
        let base = TemplateDocument::new("Newsletter");
        let edited = base
            .clone()
            .with_section(SectionKind::Header, "<h1>Hello</h1>")
            .with_image(ImageDescriptor {
                url: "/uploads/a.png".to_string(),
                ..ImageDescriptor::default()
            });

        assert_eq!(base.sections.header, "");
        assert_eq!(edited.sections.header, "<h1>Hello</h1>");
        assert!(edited.image.has_image());
        assert_eq!(edited.image.alignment, Alignment::Center);
    }

    #[test]
    fn test_with_style_targets_one_section() {
        let mut style = StyleSheet::default_footer();
        style.color = "#222222".to_string();
        let doc = TemplateDocument::new("t").with_style(SectionKind::Footer, style);

        assert_eq!(doc.styles.footer.color, "#222222");
        assert_eq!(doc.styles.header, StyleSheet::default_header());
    }
}

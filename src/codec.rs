use serde::Serialize;
use serde_json::Value;

use crate::document::{Sections, TemplateDocument};
use crate::style::{Alignment, ImageDescriptor, SectionStyle, StyleSheet};
use crate::store::StoredTemplate;

// ─── Serialization ───────────────────────────────────────────────────────────

// Wire form of one saved template. Field order is the order older readers
// expect: the flat top-level keys (sections, imageStyles, styles, imageUrl)
// duplicate what lives under `layout` so that writers predating the layout
// object can still pick out the pieces they understand.
#[derive(Serialize)]
struct Wire<'a> {
    title: &'a str,
    sections: &'a Sections,
    #[serde(rename = "imageStyles")]
    image_styles: WireImageStyles<'a>,
    styles: &'a StyleSheet,
    #[serde(rename = "imageUrl")]
    image_url: &'a str,
    image: &'a ImageDescriptor,
    layout: WireLayout<'a>,
}

#[derive(Serialize)]
struct WireLayout<'a> {
    header: WireSection<'a>,
    content: WireSection<'a>,
    footer: WireSection<'a>,
    image: WireImage<'a>,
}

#[derive(Serialize)]
struct WireSection<'a> {
    content: &'a str,
    styles: &'a SectionStyle,
}

#[derive(Serialize)]
struct WireImageStyles<'a> {
    width: &'a str,
    #[serde(rename = "maxHeight")]
    max_height: &'a str,
    alignment: Alignment,
}

#[derive(Serialize)]
struct WireImage<'a> {
    width: &'a str,
    #[serde(rename = "maxHeight")]
    max_height: &'a str,
    alignment: Alignment,
    url: &'a str,
}

/// Serialize a document to its persisted JSON text
///
/// Guarantees: output is valid JSON, `layout.*.content` byte-equals the
/// corresponding `sections.*` value, and the rich-text markup passes through
/// untouched. Identical documents serialize to identical text.
pub fn serialize(doc: &TemplateDocument) -> String {
    let image = &doc.image;
    let wire = Wire {
        title: &doc.title,
        sections: &doc.sections,
        image_styles: WireImageStyles {
            width: &image.width,
            max_height: &image.max_height,
            alignment: image.alignment,
        },
        styles: &doc.styles,
        image_url: &image.url,
        image,
        layout: WireLayout {
            header: WireSection {
                content: &doc.sections.header,
                styles: &doc.styles.header,
            },
            content: WireSection {
                content: &doc.sections.content,
                styles: &doc.styles.content,
            },
            footer: WireSection {
                content: &doc.sections.footer,
                styles: &doc.styles.footer,
            },
            image: WireImage {
                width: &image.width,
                max_height: &image.max_height,
                alignment: image.alignment,
                url: &image.url,
            },
        },
    };
    serde_json::to_string(&wire).expect("wire form always serializes")
}

// ─── Deserialization ─────────────────────────────────────────────────────────

/// Deserialize persisted text back into a document
///
/// Total over arbitrary input: never fails. Non-JSON text is treated as a
/// legacy plain-text body (the whole text becomes the content section);
/// parsed JSON resolves each field through an ordered fallback chain, and
/// anything missing lands on the built-in defaults.
///
/// `legacy_image_url` is the `imageUrl` column of a stored record predating
/// the structured form; it is used only when the text itself carries no url.
pub fn deserialize(text: &str, legacy_image_url: Option<&str>) -> TemplateDocument {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return legacy_plain_text(text, legacy_image_url),
    };

    let sections = Sections {
        header: str_at(&parsed, "/layout/header/content")
            .unwrap_or_default()
            .to_string(),
        content: first_non_empty(&[
            str_at(&parsed, "/layout/content/content"),
            str_at(&parsed, "/sections/content"),
            str_at(&parsed, "/content"),
        ])
        .to_string(),
        footer: str_at(&parsed, "/layout/footer/content")
            .unwrap_or_default()
            .to_string(),
    };

    let styles = StyleSheet {
        header: resolve_style(&parsed, "/styles/header", StyleSheet::default_header()),
        content: resolve_style(&parsed, "/styles/content", StyleSheet::default_content()),
        footer: resolve_style(&parsed, "/styles/footer", StyleSheet::default_footer()),
    };

    // Image descriptor: structured layout entry first, then the legacy
    // top-level imageStyles object, then defaults.
    let descriptor = parsed
        .pointer("/layout/image")
        .or_else(|| parsed.pointer("/imageStyles"));
    let defaults = ImageDescriptor::default();
    let mut image = ImageDescriptor {
        url: String::new(),
        width: descriptor
            .and_then(|d| d.get("width"))
            .and_then(Value::as_str)
            .unwrap_or(&defaults.width)
            .to_string(),
        max_height: descriptor
            .and_then(|d| d.get("maxHeight"))
            .and_then(Value::as_str)
            .unwrap_or(&defaults.max_height)
            .to_string(),
        alignment: descriptor
            .and_then(|d| d.get("alignment"))
            .and_then(Value::as_str)
            .and_then(parse_alignment)
            .unwrap_or(defaults.alignment),
    };
    image.url = first_non_empty(&[
        str_at(&parsed, "/imageUrl"),
        str_at(&parsed, "/layout/image/url"),
        legacy_image_url,
    ])
    .to_string();

    TemplateDocument {
        title: str_at(&parsed, "/title").unwrap_or_default().to_string(),
        sections,
        styles,
        image,
    }
}

/// Rebuild the editing document for a stored record
///
/// The record's own title wins over anything embedded in the content text,
/// and its `imageUrl` column serves as the legacy url fallback.
pub fn from_stored(stored: &StoredTemplate) -> TemplateDocument {
    let mut doc = deserialize(&stored.content, Some(&stored.image_url));
    doc.title = stored.title.clone();
    doc
}

fn legacy_plain_text(text: &str, legacy_image_url: Option<&str>) -> TemplateDocument {
    TemplateDocument {
        title: String::new(),
        sections: Sections {
            header: String::new(),
            content: text.to_string(),
            footer: String::new(),
        },
        styles: StyleSheet::default(),
        image: ImageDescriptor {
            url: legacy_image_url.unwrap_or_default().to_string(),
            ..ImageDescriptor::default()
        },
    }
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

// Empty strings count as absent in the fallback chains.
fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> &'a str {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

// A style record is taken field by field so a partial record still
// resolves, with the section's defaults filling the gaps.
fn resolve_style(parsed: &Value, pointer: &str, defaults: SectionStyle) -> SectionStyle {
    let Some(record) = parsed.pointer(pointer) else {
        return defaults;
    };
    let field = |key: &str, fallback: String| -> String {
        record
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(fallback)
    };
    SectionStyle {
        font_size: field("fontSize", defaults.font_size),
        color: field("color", defaults.color),
        background_color: field("backgroundColor", defaults.background_color),
        padding: field("padding", defaults.padding),
        text_align: field("textAlign", defaults.text_align),
        font_family: field("fontFamily", defaults.font_family),
        // Unlike the other fields, an absent lineHeight stays absent: the
        // record as written is authoritative for the optional property.
        line_height: record
            .get("lineHeight")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn parse_alignment(value: &str) -> Option<Alignment> {
    match value {
        "left" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_content_mirrors_sections() {
        let doc = TemplateDocument::new("Promo")
            .with_section(crate::document::SectionKind::Header, "<h1>Hi</h1>");
        let json: Value = serde_json::from_str(&serialize(&doc)).unwrap();
        assert_eq!(
            json.pointer("/layout/header/content").and_then(Value::as_str),
            json.pointer("/sections/header").and_then(Value::as_str),
        );
    }

    #[test]
    fn test_partial_style_record_fills_defaults() {
        let doc = deserialize(r#"{"styles":{"header":{"fontSize":"40px"}}}"#, None);
        assert_eq!(doc.styles.header.font_size, "40px");
        assert_eq!(doc.styles.header.font_family, "Arial");
        assert_eq!(doc.styles.content, StyleSheet::default_content());
    }

    #[test]
    fn test_non_object_json_resolves_to_defaults() {
        for text in ["null", "5", "[1,2]", "\"quoted string\""] {
            let doc = deserialize(text, None);
            assert_eq!(doc.sections, Sections::default());
            assert_eq!(doc.styles, StyleSheet::default());
        }
    }
}

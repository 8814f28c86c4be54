use crate::document::TemplateDocument;
use crate::style::Alignment;

// Static page chrome shared by every export.
const PAGE_CSS: &str = "\
      body {
        margin: 0;
        padding: 0;
        font-family: Arial, sans-serif;
        background-color: #f5f5f5;
      }
      .container {
        max-width: 800px;
        margin: 40px auto;
        background: #ffffff;
        padding: 40px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
      }
      .preview-container {
        background: #ffffff;
        border-radius: 4px;
      }
      .image-container {
        margin: 20px 0;
      }";

// Compatibility rules overriding rich-text editor markup (Quill-style
// class names, heading sizes, list indents, blockquote, link color) so the
// exported file renders the same regardless of which editor produced the
// markup. Content-independent: must stay byte-identical across compiles.
const COMPAT_CSS: &str = "\
      /* Editor alignment classes */
      .ql-align-center, [style*=\"text-align: center\"] {
        text-align: center !important;
      }
      .ql-align-right, [style*=\"text-align: right\"] {
        text-align: right !important;
      }
      .ql-align-left, [style*=\"text-align: left\"] {
        text-align: left !important;
      }
      .ql-align-justify, [style*=\"text-align: justify\"] {
        text-align: justify !important;
      }
      /* Font sizes */
      .ql-size-small {
        font-size: 0.75em !important;
      }
      .ql-size-large {
        font-size: 1.5em !important;
      }
      .ql-size-huge {
        font-size: 2.5em !important;
      }
      /* Headers */
      h1 { font-size: 2em !important; }
      h2 { font-size: 1.5em !important; }
      h3 { font-size: 1.17em !important; }
      h4 { font-size: 1em !important; }
      h5 { font-size: 0.83em !important; }
      h6 { font-size: 0.75em !important; }
      /* List indents */
      .ql-indent-1 { padding-left: 3em !important; }
      .ql-indent-2 { padding-left: 6em !important; }
      .ql-indent-3 { padding-left: 9em !important; }
      /* Rich text elements */
      p { margin: 0 0 1em 0; }
      strong { font-weight: bold !important; }
      em { font-style: italic !important; }
      u { text-decoration: underline !important; }
      s { text-decoration: line-through !important; }
      blockquote {
        border-left: 4px solid #ccc !important;
        margin: 1.5em 10px !important;
        padding: 0.5em 10px !important;
      }
      /* Lists */
      ul, ol {
        margin: 1em 0 !important;
        padding-left: 2em !important;
      }
      li {
        margin-bottom: 0.5em !important;
      }
      /* Links */
      a {
        color: #06c !important;
        text-decoration: underline !important;
      }
      /* Preserve section styles on nested elements */
      .header *, .content *, .footer * {
        text-align: inherit !important;
        background-color: inherit !important;
        color: inherit !important;
        font-family: inherit !important;
        font-size: inherit !important;
        line-height: inherit !important;
      }
      /* Responsive design */
      @media (max-width: 768px) {
        .container {
          margin: 20px;
          padding: 20px;
        }
      }";

/// Compile a document into a standalone HTML email file
///
/// Pure and deterministic: identical input yields byte-identical output.
/// Section markup is already-sanitized rich text and is injected verbatim;
/// style values are passed through as literal CSS without validation.
/// Empty sections produce no wrapper element; the image block renders only
/// when the descriptor carries a url. `base_url` absolutizes the stored
/// collaborator-relative image url.
pub fn compile(doc: &TemplateDocument, base_url: &str) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("    <title>");
    html.push_str(&doc.title);
    html.push_str("</title>\n    <style>\n");
    html.push_str(PAGE_CSS);
    html.push('\n');
    html.push_str(COMPAT_CSS);
    html.push_str("\n    </style>\n</head>\n<body>\n");
    html.push_str("    <div class=\"container\">\n      <div class=\"preview-container\">\n");

    push_section(&mut html, "header", &doc.sections.header, &doc.styles.header.to_inline_css());
    push_image(&mut html, doc, base_url);
    push_section(&mut html, "content", &doc.sections.content, &doc.styles.content.to_inline_css());
    push_section(&mut html, "footer", &doc.sections.footer, &doc.styles.footer.to_inline_css());

    html.push_str("      </div>\n    </div>\n</body>\n</html>\n");
    html
}

fn push_section(html: &mut String, name: &str, markup: &str, inline_css: &str) {
    if markup.is_empty() {
        return;
    }
    html.push_str("        <div class=\"");
    html.push_str(name);
    html.push_str("\" style=\"");
    html.push_str(inline_css);
    html.push_str("\">\n          ");
    html.push_str(markup);
    html.push_str("\n        </div>\n");
}

fn push_image(html: &mut String, doc: &TemplateDocument, base_url: &str) {
    let image = &doc.image;
    if !image.has_image() {
        return;
    }
    let placement = match image.alignment {
        Alignment::Center => "display: block; margin: 0 auto;",
        Alignment::Left => "float: left; margin-right: 20px;",
        Alignment::Right => "float: right; margin-left: 20px;",
    };
    html.push_str("        <div class=\"image-container\" style=\"text-align: ");
    html.push_str(image.alignment.as_css());
    html.push_str("\">\n          <img src=\"");
    html.push_str(base_url);
    html.push_str(&image.url);
    html.push_str("\" alt=\"Email Image\" style=\"width: ");
    html.push_str(&image.width);
    html.push_str("; max-height: ");
    html.push_str(&image.max_height);
    html.push_str("; ");
    html.push_str(placement);
    html.push_str("\">\n        </div>\n");
}

/// Lower-case a title and collapse whitespace runs into single hyphens
///
/// Punctuation passes through unchanged.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
            in_whitespace = false;
        }
    }
    slug
}

/// Suggested download filename for a compiled template
pub fn suggested_filename(title: &str) -> String {
    format!("{}-template.html", slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My Spring Sale!!"), "my-spring-sale!!");
        assert_eq!(slugify("Weekly  Update"), "weekly-update");
        assert_eq!(slugify("Launch"), "launch");
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("My Spring Sale!!"), "my-spring-sale!!-template.html");
    }

    #[test]
    fn test_compat_css_is_static() {
        // The compatibility block is content-independent; any edit here is
        // a snapshot-breaking change.
        assert!(COMPAT_CSS.contains(".ql-align-center"));
        assert!(COMPAT_CSS.contains(".ql-size-huge"));
        assert!(COMPAT_CSS.contains("blockquote"));
        assert!(COMPAT_CSS.contains("color: #06c !important;"));
    }
}

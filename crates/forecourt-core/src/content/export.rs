//! Serializes a generated text block into a downloadable document.

/// Supported download formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    PlainText,
    Markdown,
    Html,
}

impl ExportFormat {
    /// Total parse: unknown tags fall back to plain text.
    pub fn from_tag(tag: &str) -> ExportFormat {
        match tag.trim().to_lowercase().as_str() {
            "md" | "markdown" => ExportFormat::Markdown,
            "html" | "htm" => ExportFormat::Html,
            _ => ExportFormat::PlainText,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "text/plain; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }
}

/// A finished download: name, MIME type, and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Wraps `content` for download.
///
/// Plain text and Markdown embed the content unchanged. The HTML wrapper is
/// a fixed document embedding the literal text with newlines rendered as
/// `<br>` breaks, so reversing the wrapper recovers the content exactly.
pub fn export(content: &str, title: &str, file_stem: &str, format: ExportFormat) -> ExportedDocument {
    let body = match format {
        ExportFormat::PlainText | ExportFormat::Markdown => content.to_owned(),
        ExportFormat::Html => html_document(content, title),
    };
    ExportedDocument {
        file_name: format!(
            "{stem}.{ext}",
            stem = file_name_stem(file_stem),
            ext = format.extension()
        ),
        content_type: format.content_type(),
        body,
    }
}

/// Strips quotes, backslashes and control characters from the stem; the
/// name ends up inside a quoted Content-Disposition value.
fn file_name_stem(stem: &str) -> String {
    stem.chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect()
}

fn html_document(content: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    body {{
      font-family: Arial, sans-serif;
      line-height: 1.6;
      margin: 0;
      padding: 20px;
    }}
    h1 {{
      color: #2563eb;
    }}
    .container {{
      max-width: 800px;
      margin: 0 auto;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>{title}</h1>
    <div>{content}</div>
  </div>
</body>
</html>"#,
        title = title,
        content = content.replace('\n', "<br>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_with_plaintext_fallback() {
        assert_eq!(ExportFormat::from_tag("txt"), ExportFormat::PlainText);
        assert_eq!(ExportFormat::from_tag("text"), ExportFormat::PlainText);
        assert_eq!(ExportFormat::from_tag("MD"), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from_tag("markdown"), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from_tag("html"), ExportFormat::Html);
        assert_eq!(ExportFormat::from_tag("htm"), ExportFormat::Html);
        assert_eq!(ExportFormat::from_tag("docx"), ExportFormat::PlainText);
        assert_eq!(ExportFormat::from_tag(""), ExportFormat::PlainText);
    }

    #[test]
    fn plain_and_markdown_round_trip_unchanged() {
        let content = "line one\nline two\n\nline four";
        for format in [ExportFormat::PlainText, ExportFormat::Markdown] {
            let doc = export(content, "Post", "camry-facebook", format);
            assert_eq!(doc.body, content);
        }
    }

    #[test]
    fn html_round_trips_modulo_wrapper() {
        let content = "line one\nline two\n\nline four";
        let doc = export(content, "Post", "camry-facebook", ExportFormat::Html);
        let inner_start = doc.body.find("<div>").unwrap() + "<div>".len();
        let inner_end = doc.body.find("</div>").unwrap();
        let recovered = doc.body[inner_start..inner_end].replace("<br>", "\n");
        assert_eq!(recovered, content);
    }

    #[test]
    fn html_wrapper_carries_the_title() {
        let doc = export("body", "Facebook Post", "stem", ExportFormat::Html);
        assert!(doc.body.contains("<title>Facebook Post</title>"));
        assert!(doc.body.contains("<h1>Facebook Post</h1>"));
    }

    #[test]
    fn file_names_use_the_format_extension() {
        let txt = export("c", "t", "camry-x", ExportFormat::PlainText);
        assert_eq!(txt.file_name, "camry-x.txt");
        assert_eq!(txt.content_type, "text/plain; charset=utf-8");

        let md = export("c", "t", "camry-x", ExportFormat::Markdown);
        assert_eq!(md.file_name, "camry-x.md");

        let html = export("c", "t", "camry-x", ExportFormat::Html);
        assert_eq!(html.file_name, "camry-x.html");
        assert_eq!(html.content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn file_names_drop_header_hostile_characters() {
        let doc = export("c", "t", "O\"Brien-\\Special\u{7}-x", ExportFormat::PlainText);
        assert_eq!(doc.file_name, "OBrien-Special-x.txt");
    }
}

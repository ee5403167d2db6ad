//! Minimal HTML helpers for server-rendered pages

/// Escape text for safe interpolation into HTML element content or
/// double-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a page body in the shared document shell.
///
/// `title` is escaped; `body` is inserted verbatim and must already be safe.
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 24px; background: #f5f6f8; color: #1f2328; }}
        .container {{ max-width: 960px; margin: 0 auto; }}
        .card {{ background: #fff; border-radius: 8px; padding: 20px; margin-bottom: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ text-align: left; padding: 8px; border-bottom: 1px solid #e1e4e8; }}
        .error {{ color: #cf222e; }}
        nav a {{ margin-left: 12px; }}
    </style>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>"#,
        title = escape(title),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("web-01"), "web-01");
    }

    #[test]
    fn test_document_escapes_title_only() {
        let page = document("A & B", "<p>ok</p>");
        assert!(page.contains("<title>A &amp; B</title>"));
        assert!(page.contains("<p>ok</p>"));
    }
}

//! HTML sanitization for documents inserted into the page.

/// Sanitize a fetched HTML fragment (e.g. a EULA document).
///
/// The output is cleaned with `ammonia`, which strips scripts, event
/// handler attributes and other constructs that could run code.
pub fn sanitize_html(raw: &str) -> String {
    ammonia::clean(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_document_structure() {
        let html = sanitize_html("<h2>Terms</h2><p>Use it <strong>well</strong>.</p>");
        assert_eq!(html, "<h2>Terms</h2><p>Use it <strong>well</strong>.</p>");
    }

    #[test]
    fn test_strips_script_and_handlers() {
        let html = sanitize_html(r#"<p onclick="steal()">ok</p><script>alert(1)</script>"#);
        assert!(!html.contains("script"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("ok"));
    }
}

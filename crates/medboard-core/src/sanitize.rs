//! HTML text escaping.

/// Escape text so that, inserted into markup, it reads as literal text.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. The output is
/// safe both as element content and inside quoted attribute values.
///
/// Kept here rather than built on `maud::Escaper` so this crate has no
/// markup dependency; unlike maud's escaper it also covers `'`, which keeps
/// single-quoted attributes safe.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_plain_text_unchanged() {
        assert_eq!(sanitize("Aspirin 500mg"), "Aspirin 500mg");
    }

    #[test]
    fn sanitize_single_quote_alone() {
        assert_eq!(sanitize("Children's"), "Children&#39;s");
    }

    #[test]
    fn sanitize_non_ascii_unchanged() {
        assert_eq!(sanitize("Ibuprofène 200 µg"), "Ibuprofène 200 µg");
    }

    #[test]
    fn sanitize_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_script_tag() {
        assert_eq!(
            sanitize("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn sanitize_ampersand_first() {
        // An existing entity must not survive as an entity.
        assert_eq!(sanitize("&lt;"), "&amp;lt;");
    }

    #[test]
    fn sanitize_quotes() {
        assert_eq!(
            sanitize(r#"" onmouseover='x'"#),
            "&quot; onmouseover=&#39;x&#39;"
        );
    }

    #[test]
    fn sanitize_leaves_no_markup_characters() {
        let hostile = r#"<img src=x onerror="alert('x')"> & <b>bold</b>"#;
        let out = sanitize(hostile);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
        // Every remaining '&' starts one of our entities.
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|e| rest.starts_with(e)),
                "stray ampersand at {i} in {out}"
            );
        }
    }

    #[test]
    fn sanitize_unicode_passthrough() {
        assert_eq!(sanitize("café — 你好 🎉"), "café — 你好 🎉");
    }
}

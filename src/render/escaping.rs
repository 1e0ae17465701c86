//! Text escaping for content and attribute values

use std::borrow::Cow;

const CONTENT_SPECIALS: [char; 5] = ['&', '<', '>', '"', '\''];
const ATTRIBUTE_TRIGGERS: [char; 3] = ['"', '&', '<'];

/// Escape text content.
///
/// Every `&` is escaped, including one that starts an existing entity
/// reference, so `&amp;` comes out as `&amp;amp;`. Text with nothing to
/// escape is returned borrowed.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(CONTENT_SPECIALS) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Escape an attribute value placed inside double quotes.
///
/// Only `"`, `&` and `<` trigger escaping; a value without them is copied
/// as-is even if it holds `>` or `'`.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if value.contains(ATTRIBUTE_TRIGGERS) {
        escape(value)
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape(r#"<a href="x">'b' & c</a>"#), "&lt;a href=&quot;x&quot;&gt;&apos;b&apos; &amp; c&lt;/a&gt;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
        assert_eq!(escape("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
        assert_eq!(escape("fish & chips"), "fish &amp; chips");
        assert_eq!(escape("&ampersand"), "&amp;ampersand");
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(escape("héllo ☃ & 日本"), "héllo ☃ &amp; 日本");
    }

    #[test]
    fn test_attribute_narrow_rule() {
        assert!(matches!(escape_attribute("a > b 'c'"), Cow::Borrowed(_)));
        assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_attribute("a<b"), "a&lt;b");
    }

    #[test]
    fn test_attribute_full_escape_once_triggered() {
        assert_eq!(escape_attribute("x > y & 'z'"), "x &gt; y &amp; &apos;z&apos;");
    }
}

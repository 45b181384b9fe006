//! HTML minifier.
//!
//! # Responsibilities
//! - Strip `<!-- … -->` comments
//! - Collapse insignificant whitespace (drop it entirely between tags)
//! - Drop optional attribute value quotes
//! - Leave `<script>`, `<style>` and `<pre>` contents untouched
//!
//! Lossless for rendering: the transformation never changes what the
//! browser displays, only the byte count.

/// Elements whose raw text content must pass through verbatim.
const RAW_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "pre"];

/// Characters that force an attribute value to stay quoted.
const QUOTED_VALUE_CHARS: [char; 6] = ['"', '\'', '`', '=', '<', '>'];

/// Minify an HTML document.
pub fn minify(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;

    while i < bytes.len() {
        if html[i..].starts_with("<!--") {
            match html[i..].find("-->") {
                Some(end) => i += end + 3,
                None => break, // unterminated comment swallows the rest
            }
            continue;
        }

        if bytes[i] == b'<' {
            let (tag, next) = read_tag(html, i);
            let name = tag_name(tag);
            out.push_str(&compact_tag(tag));
            i = next;

            if !tag.starts_with("</") && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                let closing = format!("</{}", name);
                let rest = &html[i..];
                match find_case_insensitive(rest, &closing) {
                    Some(pos) => {
                        out.push_str(&rest[..pos]);
                        i += pos;
                    }
                    None => {
                        out.push_str(rest);
                        i = bytes.len();
                    }
                }
            }
            continue;
        }

        if bytes[i].is_ascii_whitespace() {
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            let at_edge = out.is_empty() || j == bytes.len();
            let between_tags = out.ends_with('>') && j < bytes.len() && bytes[j] == b'<';
            if !at_edge && !between_tags {
                out.push(' ');
            }
            i = j;
            continue;
        }

        // Plain text run up to the next tag or whitespace. Boundaries are
        // ASCII, so slicing here is UTF-8 safe.
        let mut j = i;
        while j < bytes.len() && bytes[j] != b'<' && !bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        out.push_str(&html[i..j]);
        i = j;
    }

    out
}

/// Read one tag starting at `start` (which points at `<`), honouring quoted
/// attribute values. Returns the tag slice including both angle brackets and
/// the index just past it.
fn read_tag(html: &str, start: usize) -> (&str, usize) {
    let bytes = html.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = start + 1;
    while i < bytes.len() {
        match (quote, bytes[i]) {
            (Some(q), c) if c == q => quote = None,
            (None, b'"') | (None, b'\'') => quote = Some(bytes[i]),
            (None, b'>') => return (&html[start..=i], i + 1),
            _ => {}
        }
        i += 1;
    }
    (&html[start..], bytes.len())
}

/// Lowercased element name of a tag slice like `<a href=…>` or `</pre>`.
fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '!')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Rebuild a tag with single-space separation and optional attribute quotes
/// removed.
fn compact_tag(tag: &str) -> String {
    let inner = tag
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim();
    let (slash, inner) = match inner.strip_prefix('/') {
        Some(rest) => ("/", rest),
        None => ("", inner),
    };

    let mut out = String::with_capacity(tag.len());
    out.push('<');
    out.push_str(slash);
    for (idx, token) in split_attributes(inner).into_iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&unquote_attribute(token));
    }
    out.push('>');
    out
}

/// Split tag innards on whitespace, keeping quoted values intact.
fn split_attributes(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut tokens = Vec::new();
    let mut quote: Option<u8> = None;
    let mut start = None;

    for (i, &c) in bytes.iter().enumerate() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (None, b'"') | (None, b'\'') => quote = Some(c),
            (None, c) if c.is_ascii_whitespace() => {
                if let Some(s) = start.take() {
                    tokens.push(&inner[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&inner[s..]);
    }
    tokens
}

/// Drop the quotes of `name="value"` when the value may legally appear
/// unquoted (non-empty, no whitespace, none of the reserved characters).
fn unquote_attribute(token: &str) -> String {
    let Some(eq) = token.find('=') else {
        return token.to_string();
    };
    let (name, value) = token.split_at(eq + 1);
    let quoted = (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2);
    if !quoted {
        return token.to_string();
    }
    let bare = &value[1..value.len() - 1];
    let removable = !bare.is_empty()
        && bare
            .chars()
            .all(|c| !c.is_ascii_whitespace() && !QUOTED_VALUE_CHARS.contains(&c));
    if removable {
        format!("{}{}", name, bare)
    } else {
        token.to_string()
    }
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comments() {
        assert_eq!(minify("<p>a</p><!-- gone --><p>b</p>"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_drops_whitespace_between_tags() {
        assert_eq!(minify("<div>\n    <p>x</p>\n</div>\n"), "<div><p>x</p></div>");
    }

    #[test]
    fn test_collapses_whitespace_in_text() {
        assert_eq!(minify("<p>two\n    words</p>"), "<p>two words</p>");
    }

    #[test]
    fn test_unquotes_simple_attributes() {
        assert_eq!(
            minify("<a href=\"./\" class=\"hljs-subst\">x</a>"),
            "<a href=./ class=hljs-subst>x</a>"
        );
    }

    #[test]
    fn test_keeps_quotes_when_value_needs_them() {
        // '=' and spaces force quoting.
        assert_eq!(
            minify("<a href=\"$uri?raw=1\">x</a>"),
            "<a href=\"$uri?raw=1\">x</a>"
        );
        assert_eq!(
            minify("<span style=\"min-width: 20ch;\"></span>"),
            "<span style=\"min-width: 20ch;\"></span>"
        );
    }

    #[test]
    fn test_script_and_pre_content_untouched() {
        let html = "<script>const  a = 1;\n// not an html comment\n</script><pre>  two  spaces </pre>";
        assert_eq!(minify(html), html);
    }

    #[test]
    fn test_collapses_attribute_separators() {
        assert_eq!(
            minify("<link  id=\"css\"\n      rel=\"stylesheet\">"),
            "<link id=css rel=stylesheet>"
        );
    }

    #[test]
    fn test_idempotent() {
        let html = "<div>\n  <a href=\"./\">x</a>   y\n</div>";
        let once = minify(html);
        assert_eq!(minify(&once), once);
    }
}

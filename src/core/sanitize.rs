// src/core/sanitize.rs

/// Resolve the entities Jonas pages actually emit. Anything exotic is left
/// alone rather than guessed at.
pub fn normalize_entities(s: &str) -> String {
    const TABLE: &[(&str, &str)] = &[
        ("&nbsp;", " "),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&eacute;", "é"),
        ("&egrave;", "è"),
        ("&ecirc;", "ê"),
        ("&euml;", "ë"),
        ("&agrave;", "à"),
        ("&acirc;", "â"),
        ("&ccedil;", "ç"),
        ("&icirc;", "î"),
        ("&iuml;", "ï"),
        ("&ocirc;", "ô"),
        ("&ugrave;", "ù"),
        ("&ucirc;", "û"),
        ("&oelig;", "œ"),
        ("&amp;", "&"), // last, so &amp;eacute; stays literal
    ];
    let mut out = s.to_string();
    for (ent, ch) in TABLE {
        if out.contains(ent) {
            out = out.replace(ent, ch);
        }
    }
    out
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Escape text for embedding in generated HTML. Dataset content is
/// untrusted; every cell goes through here on the HTML export path.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

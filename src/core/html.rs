// src/core/html.rs

use super::collate;
use super::sanitize::normalize_entities;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Byte range of the next `<o ...> ... </o>` block at or after `from`.
/// Case-insensitive on the tag patterns, tolerant of attributes.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of one tag block: inner content, entities resolved,
/// nested tags stripped, whitespace collapsed.
pub fn block_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}

/// Value of an attribute inside an opening tag, quoted or bare.
/// Only looks at the opening tag (up to the first '>').
pub fn attr_value(block: &str, name: &str) -> Option<String> {
    let open_end = block.find('>').unwrap_or(block.len());
    let open = &block[..open_end];
    let lc = to_lower(open);
    let mut pos = 0usize;

    loop {
        let at = lc[pos..].find(&to_lower(name))? + pos;
        let after = at + name.len();
        let rest = open[after..].trim_start();
        if !rest.starts_with('=') {
            pos = after;
            continue;
        }
        let rest = rest[1..].trim_start();
        return Some(match rest.as_bytes().first() {
            Some(b'"') | Some(b'\'') => {
                let quote = rest.chars().next().unwrap_or('"');
                let body = &rest[1..];
                let end = body.find(quote).unwrap_or(body.len());
                body[..end].to_string()
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                rest[..end].to_string()
            }
        });
    }
}

/// Labelled sibling-pair lookup: find a `<label_tag>` block whose visible
/// text contains `label` (case- and accent-insensitive), then return the
/// visible text of the next `<value_tag>` block after it.
///
/// `max_label_len` guards against matching inside long prose cells when
/// label and value share a tag (the td/td strategy).
pub fn sibling_pair_value(
    doc: &str,
    label_tag: &str,
    value_tag: &str,
    label: &str,
    max_label_len: usize,
) -> Option<String> {
    let open = format!("<{label_tag}");
    let close = format!("</{label_tag}>");
    let v_open = format!("<{value_tag}");
    let v_close = format!("</{value_tag}>");
    let needle = collate::fold(label);

    let mut pos = 0usize;
    while let Some((ls, le)) = next_tag_block_ci(doc, &open, &close, pos) {
        let text = block_text(&doc[ls..le]);
        pos = le;
        if text.is_empty() || text.chars().count() > max_label_len {
            continue;
        }
        if !collate::fold(&text).contains(&needle) {
            continue;
        }
        if let Some((vs, ve)) = next_tag_block_ci(doc, &v_open, &v_close, le) {
            let val = block_text(&doc[vs..ve]);
            if !val.is_empty() {
                return Some(val);
            }
        }
    }
    None
}

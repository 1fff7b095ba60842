//! Named character entities.
//!
//! Only a fixed handful of entities is recognized. Anything else that starts
//! with `&` is left in the text exactly as written.

/// Recognized entities and their replacements.
pub static ENTITIES: [(&str, &str); 6] = [
    ("&copy;", "\u{a9}"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

/// Match an entity at the start of `input`.
///
/// Returns the entity as written and its replacement.
#[must_use]
pub fn match_entity(input: &str) -> Option<(&'static str, &'static str)> {
    ENTITIES
        .iter()
        .find(|(name, _)| input.starts_with(name))
        .copied()
}

/// Replace every recognized entity in `text`.
///
/// The scan is a single left-to-right pass, so replacements are never
/// rescanned: `&amp;lt;` decodes to `&lt;`, not `<`.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        if let Some((name, replacement)) = match_entity(rest) {
            out.push_str(replacement);
            rest = &rest[name.len()..];
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

//! Identifier helpers shared by the grouper and the scaffold generator.

pub const FALLBACK_CODE: &str = "UNMAPPED";

/// Canonical grouping key for a domain code: blank becomes `UNMAPPED`,
/// everything else is trimmed and uppercased.
pub fn safe_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return FALLBACK_CODE.to_string();
    }
    trimmed.to_uppercase()
}

pub fn is_fallback_code(code: &str) -> bool {
    safe_code(code) == FALLBACK_CODE
}

pub fn slug(name: &str) -> String {
    let normalized = normalize(name).to_lowercase().replace('_', "-");
    collapse(&normalized, '-')
}

pub fn package_name(base: &str, domain_name: &str) -> String {
    let sanitized: String = normalize(domain_name)
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '.'
            }
        })
        .collect();
    let sanitized = collapse(&sanitized, '.');
    format!("{}.{}", base, sanitized.trim_matches('.'))
}

pub fn class_name(name: &str) -> String {
    normalize(name)
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

pub fn method_name(raw_name: &str) -> String {
    let normalized = normalize(raw_name).to_lowercase();
    let mut parts = normalized
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let Some(first) = parts.next() else {
        return "handle".to_string();
    };
    let mut name = first.to_string();
    for part in parts {
        name.push_str(&capitalize(part));
    }
    name
}

/// ASCII-only, whitespace runs folded to `-`. Blank input maps to `unmapped`.
fn normalize(value: &str) -> String {
    if value.trim().is_empty() {
        return "unmapped".to_string();
    }
    let kept: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

fn collapse(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == separator && out.ends_with(separator) {
            continue;
        }
        out.push(c);
    }
    out
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Company name cleanup for search queries.

use lazy_static::lazy_static;
use regex::Regex;

/// Trailing corporate-entity designators, stripped case-insensitively.
///
/// Multi-word phrases come first so "Company Limited" is removed as a unit.
const CORPORATE_SUFFIXES: &[&str] = &[
    // Phrases
    "Public Company Limited",
    "Company Limited",
    "Holdings Limited",
    "Holding Limited",
    "Group Limited",
    "Co., Ltd.",
    "Co., Ltd",
    "Co. Ltd.",
    "Co. Ltd",
    "Co Ltd",
    "Pty Ltd",
    // Single tokens
    "Limited",
    "Ltd.",
    "Ltd",
    "Incorporated",
    "Inc.",
    "Inc",
    "Corporation",
    "Corp.",
    "Corp",
    "Company",
    "Co.",
    "Co",
    "Holdings",
    "Holding",
    "Group",
    "PLC",
    "LLC",
    "L.P.",
    "LP",
    "S.p.A.",
    "SpA",
    "S.A.",
    "SA",
    "N.V.",
    "NV",
    "AG",
    "SE",
    "GmbH",
    "A/S",
    "ASA",
    "AB",
    "K.K.",
    "Tbk",
    "Berhad",
    "Bhd",
];

lazy_static! {
    /// Innermost parenthetical group, e.g. "(0700)" or "(Holdings)"
    static ref PARENTHETICAL_REGEX: Regex =
        Regex::new(r"\([^()]*\)").expect("Invalid regex pattern");
}

/// Strip corporate suffixes and parenthetical annotations from a company name.
///
/// Suffixes are removed repeatedly from the end ("Group Holdings Ltd" loses
/// all three), but never down to nothing: a name that consists only of a
/// suffix (e.g. "Holdings") is returned unchanged. Names without Latin
/// suffixes, such as CJK names, pass through.
///
/// # Examples
///
/// ```
/// use screener_tickers::naming::normalize_company_name;
///
/// assert_eq!(normalize_company_name(Some("Test Holdings Company Limited")), "Test");
/// assert_eq!(normalize_company_name(Some("Tencent Holdings Ltd. (0700)")), "Tencent");
/// assert_eq!(normalize_company_name(Some("Holdings")), "Holdings");
/// assert_eq!(normalize_company_name(None), "");
/// ```
pub fn normalize_company_name(raw_name: Option<&str>) -> String {
    let raw = match raw_name.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    let without_parens = strip_parentheticals(raw);
    let mut name = if has_meaningful_text(&without_parens) {
        without_parens
    } else {
        collapse_whitespace(raw)
    };

    while let Some(stripped) = strip_one_suffix(&name) {
        name = stripped;
    }

    name
}

/// Remove `( ... )` groups, innermost first, and collapse the leftover gaps.
fn strip_parentheticals(raw: &str) -> String {
    let mut current = raw.to_string();
    while PARENTHETICAL_REGEX.is_match(&current) {
        current = PARENTHETICAL_REGEX.replace_all(&current, " ").into_owned();
    }
    collapse_whitespace(&current)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_meaningful_text(s: &str) -> bool {
    s.chars().any(char::is_alphanumeric)
}

/// Remove the first matching trailing suffix, unless that would leave nothing.
fn strip_one_suffix(name: &str) -> Option<String> {
    let suffix = CORPORATE_SUFFIXES
        .iter()
        .find(|suffix| ends_with_word(name, suffix))?;

    let remaining = name[..name.len() - suffix.len()]
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace());

    if has_meaningful_text(remaining) {
        Some(remaining.to_string())
    } else {
        None
    }
}

/// Case-insensitive `ends_with` that only matches a whole trailing word.
fn ends_with_word(name: &str, suffix: &str) -> bool {
    let Some(start) = name.len().checked_sub(suffix.len()) else {
        return false;
    };
    if !name.is_char_boundary(start) || !name[start..].eq_ignore_ascii_case(suffix) {
        return false;
    }
    match name[..start].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || c == ',',
    }
}

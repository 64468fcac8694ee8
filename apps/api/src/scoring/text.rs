//! Small text-matching helpers shared by both scorers. All matching is
//! plain case-folded scanning — the keyword lists are tiny and fixed, so
//! nothing fancier than substring search is warranted.

/// Whole-word containment: `needle` appears in `haystack` with no
/// alphanumeric (or `_`) character touching either end of the match.
/// Both sides are expected to be lowercased already.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let boundary = |c: char| !c.is_alphanumeric() && c != '_';
        let before_ok = haystack[..start].chars().next_back().map_or(true, boundary);
        let after_ok = haystack[end..].chars().next().map_or(true, boundary);
        if before_ok && after_ok {
            return true;
        }
        from = end;
    }
    false
}

/// Extracts the first monetary amount from free text: the first run of
/// digits, with commas inside the run treated as thousands separators.
/// "₹60,000/month" parses as 60000, not 60.
pub fn first_amount(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut digits = String::new();
    for &b in &bytes[start..] {
        match b {
            b'0'..=b'9' => digits.push(b as char),
            b',' => continue,
            _ => break,
        }
    }
    digits.parse().ok()
}

/// Formats an integer with comma grouping ("60000" -> "60,000").
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// True when the text contains a `<digits>%` pattern.
pub fn has_percent_metric(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes
        .windows(2)
        .any(|w| w[0].is_ascii_digit() && w[1] == b'%')
}

/// True when the text contains a `<digits><whitespace?>+` pattern
/// (counts like "500+ users").
pub fn has_count_metric(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            let mut k = j;
            while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < bytes.len() && bytes[k] == b'+' {
                return true;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    false
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

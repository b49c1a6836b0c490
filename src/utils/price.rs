//! Price string helpers.
//!
//! Prices are display strings and may carry several size tiers separated by
//! `/` ("180 / 100"). Only the largest tier feeds the calorie estimate.

/// Fallback price used when no tier parses (or the largest tier is zero).
pub const DEFAULT_PRICE: i64 = 80;

/// Parse the leading integer of a segment, ignoring leading whitespace and
/// anything after the digits. `" 100 ml"` -> 100, `"abc"` -> None.
pub fn parse_leading_int(segment: &str) -> Option<i64> {
    let s = segment.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    // Saturate on absurdly long digit runs rather than failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Largest numeric tier of a price string, or [`DEFAULT_PRICE`].
pub fn max_price(price: &str) -> i64 {
    match price.split('/').filter_map(parse_leading_int).max() {
        Some(0) | None => DEFAULT_PRICE,
        Some(max) => max,
    }
}

/// Price as shown on the menu card.
pub fn format_price(price: &str) -> String {
    format!("₹ {}", price)
}

//! Display formatting for listing fields: `tel:` phone numbers, star glyphs,
//! and rating/review labels.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^+\d]").expect("static regex is valid"));

const FULL_STAR: char = '★';
const HALF_STAR: char = '½';
const EMPTY_STAR: char = '☆';
const STAR_POSITIONS: usize = 5;

/// Phone number reduced to dialable characters, for `tel:` links.
///
/// Keeps digits and a leading `+`. Missing or empty input yields `None`.
pub fn normalize_phone(phone: Option<&str>) -> Option<String> {
    let phone = phone.filter(|p| !p.is_empty())?;
    let stripped = NON_DIAL_CHARS.replace_all(phone, "");

    let (sign, digits) = match stripped.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", &stripped[..]),
    };

    Some(format!("{}{}", sign, digits.replace('+', "")))
}

/// Star string for a rating, e.g. `★★★★½☆` for 4.5.
///
/// Five positions of `★`/`☆`; a `½` marker follows the filled stars when the
/// fractional part is at least one half.
pub fn star_glyphs(rating: Option<f64>) -> String {
    let Some(rating) = rating.filter(|r| r.is_finite()) else {
        return EMPTY_STAR.to_string().repeat(STAR_POSITIONS);
    };

    let rating = rating.clamp(0.0, STAR_POSITIONS as f64);
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() >= 0.5);
    let empty = STAR_POSITIONS - full;

    let mut stars = String::with_capacity((STAR_POSITIONS + 1) * 3);
    stars.extend(std::iter::repeat(FULL_STAR).take(full));
    stars.extend(std::iter::repeat(HALF_STAR).take(half));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    stars
}

/// Rating with one decimal place, or `"N/A"`.
///
/// Exact ties round away from zero (4.25 gives `"4.3"`), matching how the
/// site's front end formats ratings.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating.filter(|r| r.is_finite()) {
        Some(rating) => round_one_decimal(rating),
        None => "N/A".to_string(),
    }
}

pub fn format_review_count(count: Option<u32>) -> String {
    count.unwrap_or(0).to_string()
}

/// Values at or above this magnitude are whole numbers in `f64`.
const INTEGRAL_THRESHOLD: f64 = 9_007_199_254_740_992.0;

fn round_one_decimal(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= INTEGRAL_THRESHOLD {
        return format!("{:.1}", value);
    }

    // Wide enough to expose the exact binary value's second decimal digit.
    let exact = format!("{:.60}", magnitude);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), "0"));
    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let round_up = digits.next().unwrap_or(0) >= 5;

    let whole: u64 = whole.parse().unwrap_or(0);
    let scaled = whole * 10 + tenths + u64::from(round_up);
    let sign = if value.is_sign_negative() && scaled > 0 { "-" } else { "" };

    format!("{}{}.{}", sign, scaled / 10, scaled % 10)
}

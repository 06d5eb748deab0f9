//! Input normalisation shared by the form and the calculators.

/// Keeps only the ASCII digits of `raw`.
///
/// # Examples
///
/// ```
/// use pickup_core::calculations::common::digits_only;
///
/// assert_eq!(digits_only("1a2 b3"), "123");
/// assert_eq!(digits_only("-4"), "4");
/// assert_eq!(digits_only("abc"), "");
/// ```
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parses an item count from free text.
///
/// Every non-digit character is dropped and the rest is read as a base-10
/// number. Text with no digits is 0. Counts too large for `u32` saturate at
/// `u32::MAX`. Never fails.
///
/// # Examples
///
/// ```
/// use pickup_core::calculations::common::parse_item_count;
///
/// assert_eq!(parse_item_count("3abc"), 3);
/// assert_eq!(parse_item_count(""), 0);
/// assert_eq!(parse_item_count("007"), 7);
/// ```
pub fn parse_item_count(raw: &str) -> u32 {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return 0;
    }
    // Only digits remain, so the one failure mode is overflow.
    digits.parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn digits_only_drops_signs_and_separators() {
        assert_eq!(digits_only("-1,234.5"), "12345");
    }

    #[test]
    fn digits_only_ignores_non_ascii_digits() {
        assert_eq!(digits_only("٣2"), "2");
    }

    #[test]
    fn parse_item_count_strips_trailing_letters() {
        assert_eq!(parse_item_count("3abc"), 3);
    }

    #[test]
    fn parse_item_count_empty_is_zero() {
        assert_eq!(parse_item_count(""), 0);
        assert_eq!(parse_item_count("   "), 0);
    }

    #[test]
    fn parse_item_count_all_letters_is_zero() {
        assert_eq!(parse_item_count("twelve"), 0);
    }

    #[test]
    fn parse_item_count_negative_input_loses_its_sign() {
        assert_eq!(parse_item_count("-5"), 5);
    }

    #[test]
    fn parse_item_count_joins_scattered_digits() {
        assert_eq!(parse_item_count("1 2"), 12);
    }

    #[test]
    fn parse_item_count_saturates_on_overflow() {
        assert_eq!(parse_item_count("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn parse_item_count_is_idempotent_on_its_own_output() {
        for raw in ["", "3abc", "0042", "x9y9z"] {
            let once = parse_item_count(raw);
            let twice = parse_item_count(&once.to_string());

            assert_eq!(once, twice, "input {raw:?}");
        }
    }
}

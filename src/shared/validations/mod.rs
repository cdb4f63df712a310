use super::PaginationParams;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 15;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest row offset a page may reach; SQL backends take a signed 64-bit offset.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Parse a strictly positive integer, `None` for anything else.
pub fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
}

/// Normalize raw `page` / `limit` query values.
///
/// Missing or invalid values fall back to page 1 and 15 items; the page
/// size is capped at [`MAX_PAGE_SIZE`]. A page whose offset would exceed
/// [`MAX_OFFSET`] is invalid as well.
pub fn validate_pagination(page: Option<&str>, limit: Option<&str>) -> PaginationParams {
    let limit = parse_positive(limit)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);
    let page = parse_positive(page)
        .filter(|p| {
            (p - 1)
                .checked_mul(limit)
                .is_some_and(|offset| offset <= MAX_OFFSET)
        })
        .unwrap_or(DEFAULT_PAGE);
    PaginationParams { page, limit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        let p = validate_pagination(None, None);
        assert_eq!(p, PaginationParams { page: 1, limit: 15 });
    }

    #[test]
    fn non_numeric_values_fall_back() {
        let p = validate_pagination(Some("abc"), Some("abc"));
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 15);
    }

    #[test]
    fn zero_and_negative_are_invalid() {
        let p = validate_pagination(Some("0"), Some("-5"));
        assert_eq!(p, PaginationParams { page: 1, limit: 15 });
    }

    #[test]
    fn valid_values_are_kept_and_limit_is_capped() {
        assert_eq!(
            validate_pagination(Some(" 4 "), Some("30")),
            PaginationParams { page: 4, limit: 30 }
        );
        assert_eq!(validate_pagination(None, Some("5000")).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_past_max_offset_falls_back() {
        let p = validate_pagination(Some("18446744073709551615"), Some("15"));
        assert_eq!(p, PaginationParams { page: 1, limit: 15 });

        let p = validate_pagination(Some("99999999999999999999999"), None);
        assert_eq!(p.page, 1);

        let last = MAX_OFFSET / 100 + 1;
        let p = validate_pagination(Some(&last.to_string()), Some("100"));
        assert_eq!(p.page, last);
        assert!(p.offset() <= MAX_OFFSET);
    }
}

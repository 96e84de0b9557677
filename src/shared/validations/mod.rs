use crate::domain::{PaginationError, PaginationResult};

/// Resolve a raw `page` query value into a page number within `1..=total_pages`.
///
/// A missing value means page 1. Anything that is not an integer is an
/// [`PaginationError::InvalidParameter`]; integers outside the range
/// (including zero and negatives) are [`PaginationError::PageNotFound`].
pub fn validate_page(raw: Option<&str>, total_pages: u32) -> PaginationResult<u32> {
    let page = match raw {
        None => 1,
        Some(value) => value
            .parse::<i32>()
            .map_err(|_| PaginationError::InvalidParameter(value.to_string()))?
            as i64,
    };

    if page < 1 || page > total_pages as i64 {
        return Err(PaginationError::PageNotFound { page, total_pages });
    }
    Ok(page as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_defaults_to_first_page() {
        assert_eq!(validate_page(None, 5), Ok(1));
    }

    #[test]
    fn numbers_in_range_pass() {
        assert_eq!(validate_page(Some("1"), 5), Ok(1));
        assert_eq!(validate_page(Some("5"), 5), Ok(5));
    }

    #[test]
    fn non_numeric_is_invalid() {
        for raw in ["nan", "", "2.5", " 2", "two"] {
            assert_eq!(
                validate_page(Some(raw), 5),
                Err(PaginationError::InvalidParameter(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn overflowing_number_is_invalid() {
        assert!(matches!(
            validate_page(Some("99999999999999999999"), 5),
            Err(PaginationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn out_of_range_is_not_found() {
        for (raw, page) in [("0", 0), ("-1", -1), ("6", 6)] {
            assert_eq!(
                validate_page(Some(raw), 5),
                Err(PaginationError::PageNotFound {
                    page,
                    total_pages: 5
                })
            );
        }
    }
}

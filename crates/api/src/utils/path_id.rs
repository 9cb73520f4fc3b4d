use extman_domain::{DomainError, Extension};

/// Parse the `{id}` path segment of an extension route.
///
/// # Examples
/// ```
/// use extman_api::utils::parse_path_id;
///
/// assert_eq!(parse_path_id("3").ok(), Some(3));
/// assert!(parse_path_id("abc").is_err());
/// ```
pub fn parse_path_id(raw: &str) -> Result<i64, DomainError> {
    Extension::parse_id(raw).map_err(DomainError::InvalidExtensionId)
}

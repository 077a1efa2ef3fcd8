/// Error code registry for linestamp
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Document errors
/// - 3000-3999: Repository errors
/// - 7000-7999: Validation errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;

    // Document errors (2000-2999)
    pub const DOCUMENT_INVALID_JSON: u16 = 2001;
    pub const DOCUMENT_SERIALIZATION_ERROR: u16 = 2002;

    // Repository errors (3000-3999)
    pub const REPOSITORY_IO_ERROR: u16 = 3001;
    pub const REPOSITORY_NOT_FOUND: u16 = 3004;
    pub const REPOSITORY_REQUEST_FAILED: u16 = 3010;
    pub const REPOSITORY_HTTP_STATUS: u16 = 3011;
    pub const REPOSITORY_UNAUTHORIZED: u16 = 3012;

    // Validation errors (7000-7999)
    pub const VALIDATION_MALFORMED_TOKEN: u16 = 7001;
    pub const VALIDATION_INVALID_URL: u16 = 7002;
    pub const VALIDATION_MISSING_AUTH: u16 = 7003;
    pub const VALIDATION_INVALID_PATH: u16 = 7004;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",

        2001 => "Bot document is not valid JSON",
        2002 => "Bot document could not be serialized",

        3001 => "Repository I/O error",
        3004 => "Bot document not found",
        3010 => "Repository request failed",
        3011 => "Repository returned an error status",
        3012 => "Repository rejected the credentials",

        7001 => "Placeholder token is malformed",
        7002 => "URL is not a bot editor page",
        7003 => "Authorization token is missing",
        7004 => "Path does not name a bot file",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!(ErrorCode::CONFIG_GENERIC >= 1000 && ErrorCode::CONFIG_GENERIC < 2000);
        assert!(ErrorCode::DOCUMENT_INVALID_JSON >= 2000 && ErrorCode::DOCUMENT_INVALID_JSON < 3000);
        assert!(ErrorCode::REPOSITORY_NOT_FOUND >= 3000 && ErrorCode::REPOSITORY_NOT_FOUND < 4000);
        assert!(
            ErrorCode::VALIDATION_MISSING_AUTH >= 7000 && ErrorCode::VALIDATION_MISSING_AUTH < 8000
        );
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(
            describe_error_code(ErrorCode::VALIDATION_MALFORMED_TOKEN),
            "Placeholder token is malformed"
        );
        assert_eq!(describe_error_code(3011), "Repository returned an error status");
        assert_eq!(describe_error_code(65535), "Unknown error code");
    }
}

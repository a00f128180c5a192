use snaplink::errors::{ClientError, Result, TOKEN_REQUIRED_MESSAGE};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_creation_error() {
        let error = ClientError::creation("invalid url");

        assert!(matches!(error, ClientError::Creation(_)));
        assert_eq!(error.code(), "E001");
        assert_eq!(error.message(), "invalid url");
        assert_eq!(error.to_string(), "Shorten Failed: invalid url");
    }

    #[test]
    fn test_token_required_error() {
        let error = ClientError::token_required();

        assert!(matches!(error, ClientError::TokenRequired(_)));
        assert_eq!(error.code(), "E002");
        assert_eq!(error.message(), TOKEN_REQUIRED_MESSAGE);
        assert!(error.to_string().contains("Token Required"));
    }

    #[test]
    fn test_lookup_error() {
        let error = ClientError::lookup("Not found");

        assert!(matches!(error, ClientError::Lookup(_)));
        assert_eq!(error.code(), "E003");
        assert_eq!(error.to_string(), "Lookup Failed: Not found");
    }

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            ClientError::creation(""),
            ClientError::token_required(),
            ClientError::lookup(""),
            ClientError::validation(""),
            ClientError::network(""),
            ClientError::storage(""),
            ClientError::serialization(""),
            ClientError::config(""),
        ];
        let mut codes: Vec<&str> = all.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error: ClientError = io_error.into();

        assert!(matches!(error, ClientError::Storage(_)));
        assert!(error.to_string().contains("read-only"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json").unwrap_err();
        let error: ClientError = json_error.into();

        assert!(matches!(error, ClientError::Serialization(_)));
        assert!(error.to_string().contains("Serialization Error"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(parse("{}").is_ok());
        assert!(matches!(parse("nope"), Err(ClientError::Serialization(_))));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_format_colored_contains_parts() {
        colored::control::set_override(false);
        let error = ClientError::lookup("Invalid analytics token");
        let out = error.format_colored();

        assert!(out.contains("[ERROR]"));
        assert!(out.contains("E003"));
        assert!(out.contains("Lookup Failed"));
        assert!(out.contains("Invalid analytics token"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = ClientError::validation("bad input");
        let error_trait: &dyn Error = &error;
        assert!(!error_trait.to_string().is_empty());
        assert!(error_trait.source().is_none());
    }

    #[test]
    fn test_debug_implementation() {
        let debug_string = format!("{:?}", ClientError::network("refused"));
        assert!(debug_string.contains("Network"));
        assert!(debug_string.contains("refused"));
    }
}

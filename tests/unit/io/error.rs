//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use number_puzzle::GameError;
    use number_puzzle::io::error::{invalid_grid, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GameError::FileSystem {
            path: "/tmp/store.json".into(),
            operation: "read store",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read store"));
        assert!(error.to_string().contains("/tmp/store.json"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("size", &1, &"must be between 2 and 8");

        let message = error.to_string();
        assert!(message.contains("size"));
        assert!(message.contains("'1'"));
        assert!(message.contains("must be between 2 and 8"));
        assert!(error.source().is_none());
    }

    // Tests InvalidGrid error formatting
    // Verified by omitting reason from message
    #[test]
    fn test_invalid_grid_error() {
        let error = invalid_grid(&"row 0 holds 3");

        assert_eq!(error.to_string(), "Invalid grid: row 0 holds 3");
        assert!(error.source().is_none());
    }

    // Tests StoreFormat error keeps the JSON parse error as its source
    // Verified by dropping the source from the match
    #[test]
    fn test_store_format_error() {
        let parse_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = GameError::StoreFormat {
            path: PathBuf::from("scores.json"),
            source: parse_error,
        };

        assert!(error.to_string().contains("scores.json"));
        assert!(error.source().is_some());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = GameError::ImageExport {
            path: PathBuf::from("/restricted/board.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/board.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests io errors convert into terminal errors
    // Verified by mapping io errors to file system errors
    #[test]
    fn test_io_error_conversion() {
        let error: GameError = std::io::Error::other("broken pipe").into();

        assert!(matches!(error, GameError::Terminal { .. }));
        assert!(error.to_string().contains("broken pipe"));
    }
}

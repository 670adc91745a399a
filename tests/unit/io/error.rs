//! Tests for error variants, constructors and message formatting

#[cfg(test)]
mod tests {
    use gridtools::GridError;
    use gridtools::io::error::{invalid_parameter, out_of_bounds};
    use std::error::Error;

    // Tests error source chaining for file system failures
    // Verified by dropping the #[source] attribute
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GridError::FileSystem {
            path: "/tmp/grid.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/grid.json"));
    }

    // Tests out-of-bounds messages carry the position and grid size
    // Verified by omitting the dimensions from the message
    #[test]
    fn test_out_of_bounds_message() {
        let message = out_of_bounds([5, 7], (3, 4)).to_string();
        assert!(message.contains("(5, 7)"));
        assert!(message.contains("3x4"));
    }

    // Tests the invalid argument constructor fills every field
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_parameter() {
        let error = invalid_parameter("factor", &0, &"must be at least 1");
        match &error {
            GridError::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(*parameter, "factor");
                assert_eq!(value, "0");
                assert_eq!(reason, "must be at least 1");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(error.to_string().contains("'factor' = '0'"));
    }

    // Tests subdivision errors name the offending block and colours
    // Verified by omitting the colour list from the message
    #[test]
    fn test_subdivision_messages() {
        let block = GridError::MultiColorBlock {
            block_row: 1,
            block_col: 2,
            colors: vec![3, 4],
        };
        assert!(block.to_string().contains("(1, 2)"));
        assert!(block.to_string().contains("[3, 4]"));

        let lines = GridError::InconsistentGridlines {
            horizontal: 5,
            vertical: 6,
        };
        assert!(lines.to_string().contains("horizontal lines are 5"));
    }
}

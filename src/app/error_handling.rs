//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// This function processes errors and displays them according to their type:
/// - For `LinestampError`: Shows user message always, developer message in verbose mode
/// - For other errors: Shows error message, and the chain in verbose mode
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::LinestampError;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(err) = error.downcast_ref::<LinestampError>() {
        eprintln!("{}", err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", err.developer_message());
            let mut source = std::error::Error::source(err);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
        }

        err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}

//! Input validation utilities
//!
//! Provides input validation and sanitization functions.

/// Validate that a command line is not empty and carries no control bytes
/// that would break the reply framing.
pub fn is_valid_input(input: &str) -> bool {
    !input.trim().is_empty() && !input.contains('\0') && !input.contains('\r') && !input.contains('\n')
}

/// Strip the line terminator sent by the client
pub fn sanitize_input(input: &str) -> &str {
    input.trim_end_matches(['\r', '\n'])
}

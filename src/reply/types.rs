//! Reply value

use std::fmt;

/// A reply code paired with its rendered message.
///
/// Immutable once built. `Display` produces the control-connection wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    code: u16,
    message: String,
}

impl Reply {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Positive completion, intermediate or preliminary replies (1xx-3xx).
    pub fn is_positive(&self) -> bool {
        (100..400).contains(&self.code)
    }
}

fn starts_with_code(line: &str) -> bool {
    line.len() > 2 && line.bytes().take(3).all(|b| b.is_ascii_digit())
}

impl fmt::Display for Reply {
    /// Single-line messages render as `"<code> <message>\r\n"`.
    ///
    /// Multi-line messages open with `"<code>-"`, close with `"<code> "`, and
    /// inner lines that begin with three digits are indented so clients do
    /// not mistake them for the closing line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<&str> = self.message.lines().collect();

        if lines.len() <= 1 {
            return write!(f, "{} {}\r\n", self.code, lines.first().copied().unwrap_or(""));
        }

        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                write!(f, "{}-{}\r\n", self.code, line)?;
            } else if i == last {
                write!(f, "{} {}\r\n", self.code, line)?;
            } else if starts_with_code(line) {
                write!(f, "  {}\r\n", line)?;
            } else {
                write!(f, "{}\r\n", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let reply = Reply::new(226, "Transfer complete.");
        assert_eq!(reply.to_string(), "226 Transfer complete.\r\n");
        assert_eq!(reply.code(), 226);
        assert_eq!(reply.message(), "Transfer complete.");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(Reply::new(200, "").to_string(), "200 \r\n");
    }

    #[test]
    fn test_multi_line() {
        let reply = Reply::new(220, "Welcome\nto the server\nReady");
        assert_eq!(
            reply.to_string(),
            "220-Welcome\r\nto the server\r\n220 Ready\r\n"
        );
    }

    #[test]
    fn test_multi_line_pads_inner_codes() {
        let reply = Reply::new(211, "Status\r\n150 files\r\nEnd");
        assert_eq!(reply.to_string(), "211-Status\r\n  150 files\r\n211 End\r\n");
    }

    #[test]
    fn test_trailing_newline_is_single_line() {
        assert_eq!(Reply::new(200, "OK\n").to_string(), "200 OK\r\n");
    }

    #[test]
    fn test_positive_range() {
        assert!(Reply::new(331, "").is_positive());
        assert!(!Reply::new(530, "").is_positive());
    }
}

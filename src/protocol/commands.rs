//! Module `commands`
//!
//! Parses a raw control-connection line into a `Request` and maps its
//! command token onto the commands the server understands.

/// One FTP request line, split into command token and argument.
///
/// Values are stored exactly as parsed and never re-parsed later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    line: String,
    command: String,
    argument: Option<String>,
}

impl Request {
    /// Parses a request line. The command token is upper-cased, the argument
    /// is trimmed and dropped when empty.
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim().to_string();
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("").to_ascii_uppercase();
        let argument = parts
            .next()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);

        Self {
            line,
            command,
            argument,
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }
}

/// Commands handled by the server.
#[derive(Debug, PartialEq)]
pub enum Command {
    USER(String), // Username for login
    PASS(String), // Password for login
    PWD,
    CWD(String), // Change working directory
    LANG(Option<String>),
    NOOP,
    STAT,
    QUIT,
    UNKNOWN, // Unknown, unsupported or missing a required argument
}

impl Command {
    /// Maps a parsed request onto a command, validating required arguments.
    pub fn from_request(request: &Request) -> Command {
        let arg = request.argument().map(str::to_string);

        match (request.command(), arg) {
            ("USER", Some(arg)) => Command::USER(arg),
            ("PASS", Some(arg)) => Command::PASS(arg),
            ("PWD" | "XPWD", _) => Command::PWD,
            ("CWD" | "XCWD", Some(arg)) => Command::CWD(arg),
            ("LANG", arg) => Command::LANG(arg),
            ("NOOP", _) => Command::NOOP,
            ("STAT", None) => Command::STAT,
            ("QUIT", _) => Command::QUIT,
            _ => Command::UNKNOWN,
        }
    }

    /// Whether the command may run before login.
    pub fn allowed_before_login(&self) -> bool {
        matches!(
            self,
            Command::USER(_)
                | Command::PASS(_)
                | Command::LANG(_)
                | Command::NOOP
                | Command::QUIT
                | Command::UNKNOWN
        )
    }
}

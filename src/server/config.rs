//! Configuration management for the RAX FTP reply server
//!
//! Loaded once at startup from `config.toml` with `RAX_FTP_*` environment
//! overrides. Reply templates live in the `[[messages]]` tables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::MessageEntry;

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the FTP control connection
    pub bind_address: String,

    /// Port for FTP control connection
    pub control_port: u16,

    /// Root directory exposed to logged-in clients
    pub server_root: String,

    /// Language of the untagged reply templates
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Maximum FTP command length
    #[serde(default = "default_max_command_length")]
    pub max_command_length: usize,

    /// Reply templates
    #[serde(default = "default_messages")]
    pub messages: Vec<MessageEntry>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_command_length() -> usize {
    512
}

fn message(code: u16, sub_id: Option<&str>, text: &str) -> MessageEntry {
    MessageEntry {
        code,
        sub_id: sub_id.map(str::to_string),
        language: None,
        text: text.to_string(),
    }
}

/// Built-in reply templates, used when the configuration has none.
pub fn default_messages() -> Vec<MessageEntry> {
    vec![
        message(200, None, "{output.msg}"),
        message(200, Some("LANG"), "Language changed."),
        message(211, None, "Server status: {stat.con.curr} of {stat.con.total} connections, {stat.login.curr} logged in, up since {stat.start.time}"),
        message(220, None, "Welcome to RAX FTP Server ({server.ip}:{server.port})"),
        message(221, None, "Goodbye {client.login.name}."),
        message(230, None, "User {client.login.name} logged in."),
        message(250, None, "Directory changed to {client.dir}"),
        message(257, None, "\"{client.dir}\" is current directory."),
        message(331, None, "Password required for {request.arg}."),
        message(500, None, "{output.msg}"),
        message(501, None, "{output.msg}"),
        message(502, None, "Command {request.cmd} not implemented."),
        message(503, None, "{output.msg}"),
        message(504, Some("LANG"), "Language {request.arg} not supported."),
        message(530, None, "{output.msg}"),
        message(550, None, "{request.arg}: {output.msg}"),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            control_port: 2121,
            server_root: "./server_root".to_string(),
            default_language: default_language(),
            max_command_length: default_max_command_length(),
            messages: default_messages(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Try production path first, then development path
        let config_paths = ["rax-ftp-reply/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Self::build(File::with_name(config_path)) {
                Ok(config) => return Ok(config),
                Err(e) => last_error = Some(e),
            }
        }

        Err(config::ConfigError::Message(format!(
            "Failed to load config.toml from any location. Tried: {config_paths:?}. Last error: {last_error:?}"
        )))
    }

    /// Load configuration from an explicit file path
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(File::from(path))
    }

    fn build<T>(file: T) -> Result<Self, config::ConfigError>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("RAX_FTP").try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.bind_address.is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.control_port == 0 {
            return Err(config::ConfigError::Message(
                "Control port cannot be 0".into(),
            ));
        }

        if self.server_root.is_empty() {
            return Err(config::ConfigError::Message(
                "server_root cannot be empty".into(),
            ));
        }

        if self.default_language.is_empty() {
            return Err(config::ConfigError::Message(
                "default_language cannot be empty".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and control port as socket address
    pub fn control_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.control_port)
    }

    /// Get server root as PathBuf
    pub fn server_root_path(&self) -> PathBuf {
        PathBuf::from(&self.server_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
bind_address = "0.0.0.0"
control_port = 2200
server_root = "/srv/ftp"

[[messages]]
code = 220
text = "Hello {client.ip}"

[[messages]]
code = 220
language = "de"
text = "Hallo {client.ip}"
"#,
        )
        .unwrap();

        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.control_socket(), "0.0.0.0:2200");
        assert_eq!(config.server_root_path(), PathBuf::from("/srv/ftp"));
        assert_eq!(config.default_language, "en");
        assert_eq!(config.max_command_length, 512);
        assert_eq!(config.messages.len(), 2);
        assert_eq!(config.messages[1].language.as_deref(), Some("de"));
        assert_eq!(config.messages[0].sub_id, None);
    }

    #[test]
    fn test_missing_messages_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "bind_address = \"127.0.0.1\"\ncontrol_port = 2121\nserver_root = \"root\"\n",
        )
        .unwrap();

        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.messages.len(), default_messages().len());
    }

    #[test]
    fn test_rejects_zero_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "bind_address = \"127.0.0.1\"\ncontrol_port = 0\nserver_root = \"root\"\n",
        )
        .unwrap();

        assert!(ServerConfig::load_from(&path).is_err());
    }
}

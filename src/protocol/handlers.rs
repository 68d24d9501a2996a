//! Command handlers module for the RAX FTP reply server.
//!
//! Each handler updates the client session and the server statistics, then
//! renders its reply through the template translator.

use log::info;

use crate::client::{ClientSession, User};
use crate::error::handlers::{navigate_error_code, navigate_error_message};
use crate::navigate::VirtualFileSystem;
use crate::protocol::{Command, Request};
use crate::reply::{Reply, codes, translate};
use crate::server::{ServerConfig, ServerContext};

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure,
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub reply: Reply,
}

impl CommandResult {
    fn new(status: CommandStatus, reply: Reply) -> Self {
        Self { status, reply }
    }

    fn from_reply(reply: Reply) -> Self {
        let status = if reply.is_positive() {
            CommandStatus::Success
        } else {
            CommandStatus::Failure
        };
        Self { status, reply }
    }
}

/// Borrowed state a handler needs to build its reply.
struct Handler<'a> {
    session: &'a mut ClientSession,
    request: &'a Request,
    context: &'a ServerContext,
    config: &'a ServerConfig,
}

impl Handler<'_> {
    fn reply(&self, code: u16, sub_id: Option<&str>, basic_message: &str) -> Reply {
        translate(
            &*self.session,
            Some(self.request),
            self.context,
            code,
            sub_id,
            basic_message,
        )
    }

    fn end_login(&mut self) {
        if let Some(user) = self.session.logout() {
            self.context.statistics().logout(user.is_anonymous());
        }
    }
}

/// Dispatches a received request to its corresponding handler.
///
/// # Arguments
///
/// * `session` - Mutable reference to the session that sent the request.
/// * `request` - The parsed request line.
/// * `context` - Catalog and statistics shared by all connections.
/// * `config` - Server configuration.
///
/// # Returns
///
/// * `CommandResult` - Status of the command and the reply to send.
pub fn handle_command(
    session: &mut ClientSession,
    request: &Request,
    context: &ServerContext,
    config: &ServerConfig,
) -> CommandResult {
    let command = Command::from_request(request);
    let mut handler = Handler {
        session,
        request,
        context,
        config,
    };

    if !handler.session.is_logged_in() && !command.allowed_before_login() {
        let reply = handler.reply(
            codes::NOT_LOGGED_IN,
            None,
            "Please login with USER and PASS.",
        );
        return CommandResult::from_reply(reply);
    }

    match command {
        Command::USER(username) => handle_cmd_user(&mut handler, username),
        Command::PASS(_) => handle_cmd_pass(&mut handler),
        Command::PWD => handle_cmd_pwd(&handler),
        Command::CWD(path) => handle_cmd_cwd(&mut handler, &path),
        Command::LANG(language) => handle_cmd_lang(&mut handler, language),
        Command::NOOP => CommandResult::from_reply(handler.reply(codes::OK, None, "Command okay.")),
        Command::STAT => CommandResult::from_reply(handler.reply(codes::SYSTEM_STATUS, None, "")),
        Command::QUIT => handle_cmd_quit(&mut handler),
        Command::UNKNOWN => CommandResult::from_reply(handler.reply(
            codes::NOT_IMPLEMENTED,
            None,
            "Command not implemented.",
        )),
    }
}

/// Handles the USER command: any previous login ends and the name waits for PASS.
fn handle_cmd_user(handler: &mut Handler<'_>, username: String) -> CommandResult {
    handler.end_login();
    handler.session.set_pending_username(Some(username));
    CommandResult::from_reply(handler.reply(codes::PASSWORD_REQUIRED, None, "Password required."))
}

/// Handles the PASS command: completes the login started by USER.
///
/// Credential checking belongs to the authentication layer; every password
/// is accepted here.
fn handle_cmd_pass(handler: &mut Handler<'_>) -> CommandResult {
    let Some(username) = handler.session.pending_username().map(str::to_string) else {
        let reply = handler.reply(codes::BAD_SEQUENCE, None, "Login with USER first.");
        return CommandResult::from_reply(reply);
    };

    let user = User::new(username, "/");
    let anonymous = user.is_anonymous();
    info!("User {} logged in (anonymous: {})", user.name(), anonymous);

    let file_system = VirtualFileSystem::new(handler.config.server_root_path());
    handler.session.login(user, file_system);
    handler.context.statistics().login(anonymous);

    CommandResult::from_reply(handler.reply(codes::LOGIN_SUCCESS, None, "User logged in."))
}

fn handle_cmd_pwd(handler: &Handler<'_>) -> CommandResult {
    CommandResult::from_reply(handler.reply(codes::PATHNAME_CREATED, None, ""))
}

/// Handles the CWD command: moves the session's working directory.
fn handle_cmd_cwd(handler: &mut Handler<'_>, path: &str) -> CommandResult {
    let result = handler
        .session
        .file_system_mut()
        .map(|file_system| file_system.change_directory(path).map(str::to_string));

    let Some(result) = result else {
        let reply = handler.reply(codes::NOT_LOGGED_IN, None, "Please login with USER and PASS.");
        return CommandResult::from_reply(reply);
    };

    match result {
        Ok(new_path) => {
            info!("Working directory changed to {}", new_path);
            CommandResult::from_reply(handler.reply(codes::FILE_ACTION_OK, None, ""))
        }
        Err(e) => {
            info!("CWD {} failed: {}", path, e);
            let reply = handler.reply(navigate_error_code(&e), None, navigate_error_message(&e));
            CommandResult::from_reply(reply)
        }
    }
}

/// Handles the LANG command: selects the reply language, or resets it
/// to the default when no argument is given.
fn handle_cmd_lang(handler: &mut Handler<'_>, language: Option<String>) -> CommandResult {
    match language {
        Some(language) if !handler.context.catalog().supports_language(&language) => {
            let reply = handler.reply(
                codes::NOT_IMPLEMENTED_FOR_PARAMETER,
                Some("LANG"),
                "Language not supported.",
            );
            CommandResult::from_reply(reply)
        }
        language => {
            handler.session.set_language(language);
            CommandResult::from_reply(handler.reply(codes::OK, Some("LANG"), "Command okay."))
        }
    }
}

/// Handles the QUIT command: replies, then ends the login and the connection.
fn handle_cmd_quit(handler: &mut Handler<'_>) -> CommandResult {
    let reply = handler.reply(codes::CLOSING_CONTROL_CONNECTION, None, "Goodbye.");
    handler.end_login();
    CommandResult::new(CommandStatus::CloseConnection, reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MessageResource;
    use crate::server::config::default_messages;
    use crate::statistics::{ServerStatistics, Statistics};
    use std::fs;
    use std::sync::Arc;

    struct Fixture {
        _root: tempfile::TempDir,
        config: ServerConfig,
        context: ServerContext,
        session: ClientSession,
    }

    impl Fixture {
        fn new() -> Self {
            let root = tempfile::tempdir().unwrap();
            fs::create_dir_all(root.path().join("pub")).unwrap();

            let mut entries = default_messages();
            entries.push(crate::catalog::MessageEntry {
                code: 221,
                sub_id: None,
                language: Some("fr".into()),
                text: "Au revoir {client.login.name}.".into(),
            });

            let config = ServerConfig {
                server_root: root.path().to_string_lossy().to_string(),
                messages: entries,
                ..ServerConfig::default()
            };
            let context = ServerContext::new(
                Arc::new(MessageResource::new(&config.default_language, &config.messages)),
                Arc::new(ServerStatistics::default()),
            );
            let session = ClientSession::new(
                "10.0.0.5:4021".parse().ok(),
                "127.0.0.1:2121".parse().ok(),
            );

            Self {
                _root: root,
                config,
                context,
                session,
            }
        }

        fn run(&mut self, line: &str) -> CommandResult {
            let request = Request::parse(line);
            handle_command(&mut self.session, &request, &self.context, &self.config)
        }
    }

    #[test]
    fn test_commands_require_login() {
        let mut fixture = Fixture::new();
        let result = fixture.run("PWD");
        assert_eq!(result.status, CommandStatus::Failure);
        assert_eq!(result.reply.to_string(), "530 Please login with USER and PASS.\r\n");
    }

    #[test]
    fn test_login_flow() {
        let mut fixture = Fixture::new();

        let result = fixture.run("USER alice");
        assert_eq!(result.reply.to_string(), "331 Password required for alice.\r\n");

        let result = fixture.run("PASS secret");
        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(result.reply.message(), "User alice logged in.");
        assert_eq!(fixture.context.statistics().current_logins(), 1);
        assert_eq!(fixture.context.statistics().total_anonymous_logins(), 0);
    }

    #[test]
    fn test_pass_without_user() {
        let mut fixture = Fixture::new();
        let result = fixture.run("PASS secret");
        assert_eq!(result.reply.code(), 503);
        assert!(!fixture.session.is_logged_in());
    }

    #[test]
    fn test_pwd_and_cwd() {
        let mut fixture = Fixture::new();
        fixture.run("USER anonymous");
        fixture.run("PASS guest@");
        assert_eq!(fixture.context.statistics().current_anonymous_logins(), 1);

        assert_eq!(fixture.run("PWD").reply.message(), "\"/\" is current directory.");

        let result = fixture.run("CWD pub");
        assert_eq!(result.reply.to_string(), "250 Directory changed to /pub\r\n");

        let result = fixture.run("CWD missing");
        assert_eq!(result.status, CommandStatus::Failure);
        assert_eq!(result.reply.to_string(), "550 missing: No such directory.\r\n");
        assert_eq!(fixture.run("PWD").reply.message(), "\"/pub\" is current directory.");
    }

    #[test]
    fn test_lang_switches_templates() {
        let mut fixture = Fixture::new();
        fixture.run("USER bob");
        fixture.run("PASS x");

        let result = fixture.run("LANG de");
        assert_eq!(result.reply.to_string(), "504 Language de not supported.\r\n");

        let result = fixture.run("LANG fr");
        assert_eq!(result.reply.to_string(), "200 Language changed.\r\n");

        let result = fixture.run("QUIT");
        assert_eq!(result.status, CommandStatus::CloseConnection);
        assert_eq!(result.reply.to_string(), "221 Au revoir bob.\r\n");
        assert_eq!(fixture.context.statistics().current_logins(), 0);
    }

    #[test]
    fn test_unknown_command() {
        let mut fixture = Fixture::new();
        let result = fixture.run("SITE CHMOD 777 x");
        assert_eq!(result.reply.to_string(), "502 Command SITE not implemented.\r\n");
    }

    #[test]
    fn test_stat_reports_counters() {
        let mut fixture = Fixture::new();
        fixture.context.statistics().connection_opened();
        fixture.run("USER alice");
        fixture.run("PASS x");

        let message = fixture.run("STAT").reply.message().to_string();
        assert!(message.starts_with("Server status: 1 of 1 connections, 1 logged in, up since "));
        assert!(message.ends_with('Z'));
    }
}

//! Placeholder value resolution
//!
//! Routes a placeholder name to its category and formats the value from the
//! session, request and statistics providers. Unknown names and missing data
//! resolve to an empty string.

use log::{debug, warn};

use crate::client::SessionView;
use crate::protocol::Request;
use crate::statistics::Statistics;
use crate::template::variables::{
    ClientVariable, ConnectionStat, DirectoryStat, FileStat, LoginStat, OutputVariable,
    RequestVariable, ServerVariable, StatVariable, Variable,
};
use crate::utils::datetime::iso8601;

/// Resolves placeholders for one reply.
///
/// Borrows its providers for the duration of a single translation and never
/// modifies them.
pub struct VariableResolver<'a> {
    code: u16,
    basic_message: &'a str,
    session: &'a dyn SessionView,
    request: Option<&'a Request>,
    statistics: &'a dyn Statistics,
}

impl<'a> VariableResolver<'a> {
    pub fn new(
        code: u16,
        basic_message: &'a str,
        session: &'a dyn SessionView,
        request: Option<&'a Request>,
        statistics: &'a dyn Statistics,
    ) -> Self {
        Self {
            code,
            basic_message,
            session,
            request,
            statistics,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Resolves a placeholder name. Never fails: anything that cannot be
    /// resolved becomes `""`.
    pub fn resolve(&self, name: &str) -> String {
        Variable::parse(name)
            .and_then(|variable| self.value(variable))
            .unwrap_or_default()
    }

    /// Value of a recognized placeholder, `None` when its data is unavailable.
    pub fn value(&self, variable: Variable) -> Option<String> {
        match variable {
            Variable::Output(v) => Some(self.output_value(v)),
            Variable::Server(v) => self.server_value(v),
            Variable::Request(v) => self.request_value(v),
            Variable::Client(v) => self.client_value(v),
            Variable::Stat(v) => Some(self.stat_value(v)),
        }
    }

    fn output_value(&self, variable: OutputVariable) -> String {
        match variable {
            OutputVariable::Code => self.code.to_string(),
            OutputVariable::Message => self.basic_message.to_string(),
        }
    }

    fn server_value(&self, variable: ServerVariable) -> Option<String> {
        let local_addr = self.session.local_addr()?;
        match variable {
            ServerVariable::Ip => Some(local_addr.ip().to_string()),
            ServerVariable::Port => Some(local_addr.port().to_string()),
        }
    }

    fn request_value(&self, variable: RequestVariable) -> Option<String> {
        // Connection-level replies carry no request.
        let request = self.request?;
        match variable {
            RequestVariable::Line => Some(request.line().to_string()),
            RequestVariable::Command => Some(request.command().to_string()),
            RequestVariable::Argument => request.argument().map(str::to_string),
        }
    }

    fn client_value(&self, variable: ClientVariable) -> Option<String> {
        let session = self.session;
        match variable {
            ClientVariable::Ip => session.remote_addr().map(|addr| addr.ip().to_string()),
            ClientVariable::ConnectionTime => Some(iso8601(&session.creation_time())),
            ClientVariable::LoginName => session.user().map(|user| user.name().to_string()),
            ClientVariable::LoginTime => session.login_time().map(|time| iso8601(&time)),
            ClientVariable::AccessTime => Some(iso8601(&session.last_access_time())),
            ClientVariable::Home => match session.user() {
                Some(user) => Some(user.home_directory().to_string()),
                None => {
                    warn!("client.home referenced in a reply before login");
                    None
                }
            },
            ClientVariable::Directory => {
                let view = session.file_system_view()?;
                match view.current_directory() {
                    Ok(path) => Some(path),
                    Err(e) => {
                        debug!("Working directory unavailable for reply: {}", e);
                        Some(String::new())
                    }
                }
            }
        }
    }

    fn stat_value(&self, variable: StatVariable) -> String {
        let stats = self.statistics;
        let count = match variable {
            StatVariable::StartTime => return iso8601(&stats.start_time()),
            StatVariable::Connection(ConnectionStat::Total) => stats.total_connections(),
            StatVariable::Connection(ConnectionStat::Current) => stats.current_connections(),
            StatVariable::Login(LoginStat::Total) => stats.total_logins(),
            StatVariable::Login(LoginStat::Current) => stats.current_logins(),
            StatVariable::Login(LoginStat::AnonymousTotal) => stats.total_anonymous_logins(),
            StatVariable::Login(LoginStat::AnonymousCurrent) => stats.current_anonymous_logins(),
            StatVariable::File(FileStat::UploadCount) => stats.total_uploads(),
            StatVariable::File(FileStat::UploadBytes) => stats.total_upload_bytes(),
            StatVariable::File(FileStat::DownloadCount) => stats.total_downloads(),
            StatVariable::File(FileStat::DownloadBytes) => stats.total_download_bytes(),
            StatVariable::File(FileStat::DeleteCount) => stats.total_deletes(),
            StatVariable::Directory(DirectoryStat::CreateCount) => stats.total_directories_created(),
            StatVariable::Directory(DirectoryStat::DeleteCount) => stats.total_directories_removed(),
        };
        count.to_string()
    }
}

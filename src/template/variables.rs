//! Template variable vocabulary
//!
//! The closed set of placeholder names a reply template may reference,
//! grouped by category. Names are matched case-sensitively.

/// Top-level placeholder category, selected by the leading name segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Output,
    Server,
    Request,
    Stat,
    Client,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Output,
        Category::Server,
        Category::Request,
        Category::Stat,
        Category::Client,
    ];

    /// Name prefix routed to this category, trailing dot included.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Output => "output.",
            Category::Server => "server.",
            Category::Request => "request.",
            Category::Stat => "stat.",
            Category::Client => "client.",
        }
    }

    /// Returns the category whose prefix `name` starts with.
    pub fn of(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| name.starts_with(c.prefix()))
    }
}

/// A recognized placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Output(OutputVariable),
    Server(ServerVariable),
    Request(RequestVariable),
    Client(ClientVariable),
    Stat(StatVariable),
}

impl Variable {
    /// Parses a placeholder name, routing on its category prefix first.
    ///
    /// Returns `None` for names outside the vocabulary.
    pub fn parse(name: &str) -> Option<Variable> {
        match Category::of(name)? {
            Category::Output => OutputVariable::parse(name).map(Variable::Output),
            Category::Server => ServerVariable::parse(name).map(Variable::Server),
            Category::Request => RequestVariable::parse(name).map(Variable::Request),
            Category::Stat => StatVariable::parse(name).map(Variable::Stat),
            Category::Client => ClientVariable::parse(name).map(Variable::Client),
        }
    }

    /// Canonical dotted name, as written inside a template.
    pub fn name(self) -> &'static str {
        match self {
            Variable::Output(v) => v.name(),
            Variable::Server(v) => v.name(),
            Variable::Request(v) => v.name(),
            Variable::Client(v) => v.name(),
            Variable::Stat(v) => v.name(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Variable::Output(_) => Category::Output,
            Variable::Server(_) => Category::Server,
            Variable::Request(_) => Category::Request,
            Variable::Client(_) => Category::Client,
            Variable::Stat(_) => Category::Stat,
        }
    }

    /// Every recognized placeholder.
    pub fn all() -> Vec<Variable> {
        let mut all = Vec::new();
        all.extend(OutputVariable::ALL.map(Variable::Output));
        all.extend(ServerVariable::ALL.map(Variable::Server));
        all.extend(RequestVariable::ALL.map(Variable::Request));
        all.extend(ClientVariable::ALL.map(Variable::Client));
        all.extend(StatVariable::all().into_iter().map(Variable::Stat));
        all
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputVariable {
    Code,
    Message,
}

impl OutputVariable {
    pub const ALL: [OutputVariable; 2] = [OutputVariable::Code, OutputVariable::Message];

    pub fn name(self) -> &'static str {
        match self {
            OutputVariable::Code => "output.code",
            OutputVariable::Message => "output.msg",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerVariable {
    Ip,
    Port,
}

impl ServerVariable {
    pub const ALL: [ServerVariable; 2] = [ServerVariable::Ip, ServerVariable::Port];

    pub fn name(self) -> &'static str {
        match self {
            ServerVariable::Ip => "server.ip",
            ServerVariable::Port => "server.port",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestVariable {
    Line,
    Command,
    Argument,
}

impl RequestVariable {
    pub const ALL: [RequestVariable; 3] = [
        RequestVariable::Line,
        RequestVariable::Command,
        RequestVariable::Argument,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RequestVariable::Line => "request.line",
            RequestVariable::Command => "request.cmd",
            RequestVariable::Argument => "request.arg",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientVariable {
    Ip,
    ConnectionTime,
    LoginName,
    LoginTime,
    AccessTime,
    Home,
    Directory,
}

impl ClientVariable {
    pub const ALL: [ClientVariable; 7] = [
        ClientVariable::Ip,
        ClientVariable::ConnectionTime,
        ClientVariable::LoginName,
        ClientVariable::LoginTime,
        ClientVariable::AccessTime,
        ClientVariable::Home,
        ClientVariable::Directory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClientVariable::Ip => "client.ip",
            ClientVariable::ConnectionTime => "client.con.time",
            ClientVariable::LoginName => "client.login.name",
            ClientVariable::LoginTime => "client.login.time",
            ClientVariable::AccessTime => "client.access.time",
            ClientVariable::Home => "client.home",
            ClientVariable::Directory => "client.dir",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

/// Statistic groups below `stat.`.
///
/// The prefixes are not uniform: `stat.con` and `stat.file` match without a
/// trailing dot while `stat.login.` and `stat.dir.` require it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGroup {
    Connection,
    Login,
    File,
    Directory,
}

impl StatGroup {
    pub const ALL: [StatGroup; 4] = [
        StatGroup::Connection,
        StatGroup::Login,
        StatGroup::File,
        StatGroup::Directory,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            StatGroup::Connection => "stat.con",
            StatGroup::Login => "stat.login.",
            StatGroup::File => "stat.file",
            StatGroup::Directory => "stat.dir.",
        }
    }

    pub fn of(name: &str) -> Option<StatGroup> {
        Self::ALL.into_iter().find(|g| name.starts_with(g.prefix()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatVariable {
    StartTime,
    Connection(ConnectionStat),
    Login(LoginStat),
    File(FileStat),
    Directory(DirectoryStat),
}

impl StatVariable {
    const START_TIME: &'static str = "stat.start.time";

    pub fn name(self) -> &'static str {
        match self {
            StatVariable::StartTime => Self::START_TIME,
            StatVariable::Connection(v) => v.name(),
            StatVariable::Login(v) => v.name(),
            StatVariable::File(v) => v.name(),
            StatVariable::Directory(v) => v.name(),
        }
    }

    pub fn all() -> Vec<StatVariable> {
        let mut all = vec![StatVariable::StartTime];
        all.extend(ConnectionStat::ALL.map(StatVariable::Connection));
        all.extend(LoginStat::ALL.map(StatVariable::Login));
        all.extend(FileStat::ALL.map(StatVariable::File));
        all.extend(DirectoryStat::ALL.map(StatVariable::Directory));
        all
    }

    fn parse(name: &str) -> Option<Self> {
        if name == Self::START_TIME {
            return Some(StatVariable::StartTime);
        }

        match StatGroup::of(name)? {
            StatGroup::Connection => ConnectionStat::parse(name).map(StatVariable::Connection),
            StatGroup::Login => LoginStat::parse(name).map(StatVariable::Login),
            StatGroup::File => FileStat::parse(name).map(StatVariable::File),
            StatGroup::Directory => DirectoryStat::parse(name).map(StatVariable::Directory),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStat {
    Total,
    Current,
}

impl ConnectionStat {
    pub const ALL: [ConnectionStat; 2] = [ConnectionStat::Total, ConnectionStat::Current];

    pub fn name(self) -> &'static str {
        match self {
            ConnectionStat::Total => "stat.con.total",
            ConnectionStat::Current => "stat.con.curr",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStat {
    Total,
    Current,
    AnonymousTotal,
    AnonymousCurrent,
}

impl LoginStat {
    pub const ALL: [LoginStat; 4] = [
        LoginStat::Total,
        LoginStat::Current,
        LoginStat::AnonymousTotal,
        LoginStat::AnonymousCurrent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LoginStat::Total => "stat.login.total",
            LoginStat::Current => "stat.login.curr",
            LoginStat::AnonymousTotal => "stat.login.anon.total",
            LoginStat::AnonymousCurrent => "stat.login.anon.curr",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStat {
    UploadCount,
    UploadBytes,
    DownloadCount,
    DownloadBytes,
    DeleteCount,
}

impl FileStat {
    pub const ALL: [FileStat; 5] = [
        FileStat::UploadCount,
        FileStat::UploadBytes,
        FileStat::DownloadCount,
        FileStat::DownloadBytes,
        FileStat::DeleteCount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FileStat::UploadCount => "stat.file.upload.count",
            FileStat::UploadBytes => "stat.file.upload.bytes",
            FileStat::DownloadCount => "stat.file.download.count",
            FileStat::DownloadBytes => "stat.file.download.bytes",
            FileStat::DeleteCount => "stat.file.delete.count",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStat {
    CreateCount,
    DeleteCount,
}

impl DirectoryStat {
    pub const ALL: [DirectoryStat; 2] = [DirectoryStat::CreateCount, DirectoryStat::DeleteCount];

    pub fn name(self) -> &'static str {
        match self {
            DirectoryStat::CreateCount => "stat.dir.create.count",
            DirectoryStat::DeleteCount => "stat.dir.delete.count",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

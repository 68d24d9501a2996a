use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use rax_ftp_reply::catalog::{MessageEntry, MessageResource};
use rax_ftp_reply::client::{ClientSession, User};
use rax_ftp_reply::navigate::VirtualFileSystem;
use rax_ftp_reply::protocol::Request;
use rax_ftp_reply::statistics::{ServerStatistics, Statistics};
use rax_ftp_reply::{Server, ServerConfig, ServerContext, translate};

fn entry(code: u16, text: &str) -> MessageEntry {
    MessageEntry {
        code,
        sub_id: None,
        language: None,
        text: text.to_string(),
    }
}

fn context_with(entries: &[MessageEntry]) -> ServerContext {
    ServerContext::new(
        Arc::new(MessageResource::new("en", entries)),
        Arc::new(ServerStatistics::default()),
    )
}

#[test]
fn test_welcome_message_end_to_end() {
    let context = context_with(&[entry(
        230,
        "Welcome {client.login.name}, you are connection {stat.con.curr} of {stat.con.total}.",
    )]);
    for _ in 0..107 {
        context.statistics().connection_opened();
    }
    for _ in 0..104 {
        context.statistics().connection_closed();
    }

    let root = tempfile::tempdir().unwrap();
    let mut session = ClientSession::new("10.0.0.5:4021".parse().ok(), None);
    session.login(User::new("alice", "/"), VirtualFileSystem::new(root.path()));

    let reply = translate(&session, None, &context, 230, None, "");
    assert_eq!(reply.code(), 230);
    assert_eq!(reply.message(), "Welcome alice, you are connection 3 of 107.");
    assert_eq!(
        reply.to_string(),
        "230 Welcome alice, you are connection 3 of 107.\r\n"
    );
}

#[test]
fn test_connection_level_reply_has_no_request_values() {
    let context = context_with(&[entry(421, "{request.cmd} {request.arg} -> {output.code}")]);
    let session = ClientSession::new(None, None);

    let reply = translate(&session, None, &context, 421, None, "");
    assert_eq!(reply.message(), " -> 421");
}

#[test]
fn test_request_and_client_values() {
    let context = context_with(&[entry(
        150,
        "{client.ip} asked for {request.arg} via {request.cmd} ({request.line})",
    )]);
    let session = ClientSession::new("10.0.0.5:4021".parse().ok(), None);
    let request = Request::parse("RETR data.csv");

    let reply = translate(&session, Some(&request), &context, 150, None, "");
    assert_eq!(
        reply.message(),
        "10.0.0.5 asked for data.csv via RETR (RETR data.csv)"
    );
}

#[test]
fn test_malformed_templates_are_literal() {
    let context = context_with(&[
        entry(200, "done} {output.code}"),
        entry(201, "{output.code} then {output.msg"),
        entry(202, "{bogus.name}|{stat.unknown.thing}|{output.msg}"),
    ]);
    let session = ClientSession::new(None, None);

    assert_eq!(
        translate(&session, None, &context, 200, None, "ok").message(),
        "done} {output.code}"
    );
    assert_eq!(
        translate(&session, None, &context, 201, None, "ok").message(),
        "201 then {output.msg"
    );
    assert_eq!(
        translate(&session, None, &context, 202, None, "{output.code}").message(),
        "||{output.code}"
    );
}

#[test]
fn test_statistics_snapshot_values() {
    let context = context_with(&[entry(
        211,
        "up {stat.file.upload.count}/{stat.file.upload.bytes} down {stat.file.download.count}/{stat.file.download.bytes} del {stat.file.delete.count} mkd {stat.dir.create.count} rmd {stat.dir.delete.count}",
    )]);
    let stats = context.statistics();
    stats.file_uploaded(10);
    stats.file_downloaded(300);
    stats.file_downloaded(200);
    stats.file_deleted();
    stats.directory_created();
    stats.directory_created();
    stats.directory_removed();

    let session = ClientSession::new(None, None);
    let reply = translate(&session, None, &context, 211, None, "");
    assert_eq!(reply.message(), "up 1/10 down 2/500 del 1 mkd 2 rmd 1");
}

struct FtpClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl FtpClient {
    async fn connect(addr: std::net::SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    async fn read_line(&mut self) -> String {
        let mut line = String::new();
        self.reader.read_line(&mut line).await.unwrap();
        line
    }

    async fn send_raw(&mut self, bytes: &[u8]) -> String {
        self.writer.write_all(bytes).await.unwrap();
        self.read_line().await
    }

    async fn send(&mut self, command: &str) -> String {
        self.writer
            .write_all(format!("{}\r\n", command).as_bytes())
            .await
            .unwrap();
        self.read_line().await
    }
}

async fn start_server(root: &std::path::Path) -> (std::net::SocketAddr, ServerContext) {
    let config = ServerConfig {
        control_port: 0,
        server_root: root.to_string_lossy().to_string(),
        ..ServerConfig::default()
    };
    let server = Server::bind(config).await.unwrap();
    let addr = server.local_addr().unwrap();
    let context = server.context().clone();

    tokio::spawn(async move {
        server.start().await;
    });

    (addr, context)
}

#[tokio::test]
async fn test_live_session() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("pub")).unwrap();
    let (addr, context) = start_server(root.path()).await;

    let mut client = FtpClient::connect(addr).await;
    let greeting = client.read_line().await;
    assert_eq!(
        greeting,
        format!("220 Welcome to RAX FTP Server (127.0.0.1:{})\r\n", addr.port())
    );

    assert_eq!(
        client.send("PWD").await,
        "530 Please login with USER and PASS.\r\n"
    );
    assert_eq!(client.send("USER alice").await, "331 Password required for alice.\r\n");
    assert_eq!(client.send("PASS secret").await, "230 User alice logged in.\r\n");
    assert_eq!(client.send("CWD pub").await, "250 Directory changed to /pub\r\n");
    assert_eq!(client.send("PWD").await, "257 \"/pub\" is current directory.\r\n");
    assert_eq!(client.send("NOOP").await, "200 Command okay.\r\n");
    assert_eq!(client.send("FEAT").await, "502 Command FEAT not implemented.\r\n");
    assert_eq!(client.send("QUIT").await, "221 Goodbye alice.\r\n");

    // Connection closed after QUIT
    assert_eq!(client.read_line().await, "");

    assert_eq!(context.statistics().total_connections(), 1);
    assert_eq!(context.statistics().total_logins(), 1);
}

#[tokio::test]
async fn test_undecodable_and_over_long_lines_keep_session() {
    let root = tempfile::tempdir().unwrap();
    let (addr, _context) = start_server(root.path()).await;

    let mut client = FtpClient::connect(addr).await;
    client.read_line().await;

    assert_eq!(
        client.send_raw(b"USER caf\xe9\r\n").await,
        "500 Invalid command encoding.\r\n"
    );
    assert_eq!(client.send("NOOP").await, "200 Command okay.\r\n");

    let long_line = format!("USER {}", "x".repeat(2000));
    assert_eq!(client.send(&long_line).await, "500 Command too long.\r\n");
    assert_eq!(client.send("NOOP").await, "200 Command okay.\r\n");
}

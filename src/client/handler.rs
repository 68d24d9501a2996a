use log::{error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::client::ClientSession;
use crate::middleware::logging::{log_command, log_connection, log_reply};
use crate::protocol::{CommandStatus, Request, handle_command};
use crate::reply::{Reply, codes, translate};
use crate::server::{ServerConfig, ServerContext};
use crate::utils::validation::{is_valid_input, sanitize_input};

async fn write_reply<W>(writer: &mut W, reply: &Reply) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(reply.to_string().as_bytes()).await?;
    writer.flush().await
}

/// Outcome of reading one request line from the control connection.
#[derive(Debug, PartialEq)]
enum LineRead {
    Closed,
    Line(String),
    TooLong,
    NotUtf8,
}

/// Reads one request line, never buffering more than `limit + 1` bytes.
///
/// The remainder of an over-long line is read and dropped so the next
/// request starts on a fresh line.
async fn read_request_line<R>(reader: &mut R, limit: usize, buf: &mut Vec<u8>) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let max = limit as u64 + 1;

    buf.clear();
    if (&mut *reader).take(max).read_until(b'\n', buf).await? == 0 {
        return Ok(LineRead::Closed);
    }

    if buf.len() > limit {
        while !buf.ends_with(b"\n") {
            buf.clear();
            if (&mut *reader).take(max).read_until(b'\n', buf).await? == 0 {
                break;
            }
        }
        return Ok(LineRead::TooLong);
    }

    match String::from_utf8(std::mem::take(buf)) {
        Ok(line) => Ok(LineRead::Line(line)),
        Err(_) => Ok(LineRead::NotUtf8),
    }
}

/// Handles one FTP control connection using Tokio async runtime.
///
/// - Sends the translated 220 greeting.
/// - Reads request lines and dispatches them with `handle_command`.
/// - Keeps the connection and login statistics in step with the session.
pub async fn handle_client(
    stream: TcpStream,
    context: ServerContext,
    config: Arc<ServerConfig>,
) -> Result<(), std::io::Error> {
    let mut session = ClientSession::new(stream.peer_addr().ok(), stream.local_addr().ok());
    let client_label = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    context.statistics().connection_opened();
    log_connection(&client_label);

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let result = async {
        let greeting = translate(&session, None, &context, codes::READY, None, "Service ready.");
        write_reply(&mut write_half, &greeting).await?;

        let mut buf = Vec::new();
        loop {
            let line = match read_request_line(&mut reader, config.max_command_length, &mut buf).await? {
                LineRead::Closed => {
                    info!("Connection closed by client {}", client_label);
                    break;
                }
                LineRead::Line(line) => line,
                LineRead::TooLong => {
                    session.touch();
                    let reply = translate(&session, None, &context, codes::SYNTAX_ERROR, None, "Command too long.");
                    write_reply(&mut write_half, &reply).await?;
                    continue;
                }
                LineRead::NotUtf8 => {
                    session.touch();
                    let reply = translate(&session, None, &context, codes::SYNTAX_ERROR, None, "Invalid command encoding.");
                    write_reply(&mut write_half, &reply).await?;
                    continue;
                }
            };

            session.touch();

            let trimmed = sanitize_input(&line);
            if !is_valid_input(trimmed) {
                let reply = translate(&session, None, &context, codes::SYNTAX_ERROR, None, "Invalid command.");
                write_reply(&mut write_half, &reply).await?;
                continue;
            }

            let request = Request::parse(trimmed);
            log_command(&client_label, &request);

            let result = handle_command(&mut session, &request, &context, &config);
            log_reply(&client_label, &result.reply);
            write_reply(&mut write_half, &result.reply).await?;

            if result.status == CommandStatus::CloseConnection {
                info!("Client {} requested to quit", client_label);
                break;
            }
        }

        Ok::<(), std::io::Error>(())
    }
    .await;

    if let Err(e) = &result {
        error!("Connection error for {}: {}", client_label, e);
    }

    if let Some(user) = session.logout() {
        context.statistics().logout(user.is_anonymous());
    }
    context.statistics().connection_closed();
    info!("Client {} disconnected", client_label);

    result
}

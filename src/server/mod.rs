//! Server module
//!
//! Sequential serve loop: accept one connection, read one request, run the
//! pipeline, write the complete response, close, repeat. Nothing is
//! spawned; exactly one request is in flight at a time.

pub mod listener;

pub use listener::create_reusable_listener;

use crate::config::Config;
use crate::handler;
use crate::logger::{self, LogSink};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One read per connection; a request line never comes close to this.
const READ_BUFFER_SIZE: usize = 8192;

/// Run the accept loop until accepting fails.
///
/// Per-connection I/O errors are logged and the loop moves on to the next
/// connection; only a failure of the listener itself ends the loop.
pub async fn serve(listener: TcpListener, config: &Config, log: &dyn LogSink) -> std::io::Result<()> {
    log.log("[SERVER START]");

    loop {
        let (mut stream, peer_addr) = listener.accept().await?;

        if config.logging.access_log {
            logger::log_connection_accepted(&peer_addr);
        }

        if let Err(err) = handle_connection(&mut stream, config, log).await {
            log.log(&format!("[EXCEPTION] - {err}"));
            logger::log_connection_error(&err);
        }
    }
}

/// Serve a single connection to completion, then shut it down.
async fn handle_connection(
    stream: &mut TcpStream,
    config: &Config,
    log: &dyn LogSink,
) -> std::io::Result<()> {
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    let bytes_read = stream.read(&mut buffer).await?;
    let raw = String::from_utf8_lossy(&buffer[..bytes_read]);

    let response = handler::process_request(&raw, &config.server, log).await;

    stream.write_all(&response).await?;
    stream.shutdown().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, ServerConfig};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySink(Mutex<Vec<String>>);

    impl LogSink for MemorySink {
        fn log(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn test_config(root: &std::path::Path) -> Config {
        Config {
            server: ServerConfig {
                web_root: root.to_string_lossy().into_owned(),
                bind_address: "127.0.0.1".to_string(),
                bind_port: 0,
                server_name: "solohttpd/test".to_string(),
            },
            logging: LoggingConfig {
                log_file: "solohttpd.log".to_string(),
                access_log: false,
            },
        }
    }

    #[tokio::test]
    async fn test_one_request_per_connection_over_loopback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>ok</html>").unwrap();
        let config = test_config(dir.path());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream
                .write_all(b"GET /index.html HTTP/1.1\r\n\r\n")
                .await
                .unwrap();
            let mut response = Vec::new();
            stream.read_to_end(&mut response).await.unwrap();
            response
        });

        let (mut stream, _) = listener.accept().await.unwrap();
        handle_connection(&mut stream, &config, &MemorySink::default())
            .await
            .unwrap();

        let response = client.await.unwrap();
        let text = String::from_utf8_lossy(&response);
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.ends_with("<html>ok</html>"));
    }

    #[tokio::test]
    async fn test_malformed_request_still_gets_a_response() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream.write_all(b"\r\n").await.unwrap();
            let mut response = Vec::new();
            stream.read_to_end(&mut response).await.unwrap();
            response
        });

        let (mut stream, _) = listener.accept().await.unwrap();
        handle_connection(&mut stream, &config, &MemorySink::default())
            .await
            .unwrap();

        let response = client.await.unwrap();
        let text = String::from_utf8_lossy(&response);
        assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }
}

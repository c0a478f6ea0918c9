//! Test helpers: a one-shot HTTP server and a recording presenter

use async_trait::async_trait;
use std::sync::Mutex;
use stockcard_core::{MessageHandle, PresentationError, Presenter, RenderedView};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve exactly one HTTP response, returning the base URL and the raw request
pub(crate) async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status} Status\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        request
    });

    (format!("http://{addr}"), server)
}

/// Accept one connection and never answer it
pub(crate) async fn serve_silent() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let _request = read_request(&mut socket).await;
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    });

    (format!("http://{addr}"), server)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// One presenter call
#[derive(Debug, Clone)]
pub(crate) enum Call {
    Create(RenderedView),
    Replace(MessageHandle, RenderedView),
}

/// Presenter that records every call
#[derive(Default)]
pub(crate) struct RecordingPresenter {
    calls: Mutex<Vec<Call>>,
}

impl RecordingPresenter {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The view passed to the single `replace` call
    pub(crate) fn final_view(&self) -> RenderedView {
        let calls = self.calls();
        assert_eq!(calls.len(), 2, "expected one create and one replace");
        assert!(matches!(calls[0], Call::Create(_)));
        match &calls[1] {
            Call::Replace(handle, view) => {
                assert_eq!(handle.id(), "1");
                view.clone()
            }
            Call::Create(_) => panic!("second call was not a replace"),
        }
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn create(&self, view: &RenderedView) -> Result<MessageHandle, PresentationError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(Call::Create(view.clone()));
        Ok(MessageHandle::new(calls.len().to_string()))
    }

    async fn replace(
        &self,
        handle: &MessageHandle,
        view: &RenderedView,
    ) -> Result<(), PresentationError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Replace(handle.clone(), view.clone()));
        Ok(())
    }
}

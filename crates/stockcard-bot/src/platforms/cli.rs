//! Console presenter
//!
//! Prints views as plain text. Each `create` prints a new message; each
//! `replace` prints the updated message under the same number.

use async_trait::async_trait;
use chrono::DateTime;
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use stockcard_core::{ContentBlock, MessageHandle, PresentationError, Presenter, RenderedView};

const RULE: &str = "────────────────────────────────";

/// Render a view as plain text, one block after another
pub fn render_plain(view: &RenderedView) -> String {
    let mut lines = vec![format!("[accent {}]", view.accent)];

    for block in &view.blocks {
        match block {
            ContentBlock::Text { content } => lines.push(humanize_timestamps(content)),
            ContentBlock::Separator => lines.push(RULE.to_string()),
            ContentBlock::Image { url } => lines.push(format!("[image] {url}")),
            ContentBlock::ActionRow(row) => {
                for link in row.links() {
                    lines.push(format!("[{}] {}", link.label, link.url));
                }
            }
        }
    }

    lines.join("\n")
}

/// Replace `<t:UNIX:R>` markup with a readable UTC time
fn humanize_timestamps(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("<t:") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let rendered = tail.find('>').and_then(|end| {
            let inner = tail[3..end].strip_suffix(":R")?;
            let secs = inner.parse::<i64>().ok()?;
            let at = DateTime::from_timestamp(secs, 0)?;
            Some((at.format("%Y-%m-%d %H:%M:%S UTC").to_string(), end + 1))
        });

        match rendered {
            Some((time, consumed)) => {
                out.push_str(&time);
                rest = &tail[consumed..];
            }
            None => {
                out.push_str("<t:");
                rest = &tail[3..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Presenter writing to stdout (or any writer)
pub struct ConsolePresenter {
    out: Mutex<Box<dyn Write + Send>>,
    issued: AtomicU64,
}

impl ConsolePresenter {
    /// Presenter printing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Presenter printing to a custom writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            issued: AtomicU64::new(0),
        }
    }

    fn print(&self, header: &str, view: &RenderedView) -> Result<(), PresentationError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| PresentationError::Unreachable("console writer poisoned".to_string()))?;

        writeln!(out, "{header}\n{}\n", render_plain(view))
            .and_then(|()| out.flush())
            .map_err(|e| PresentationError::Unreachable(e.to_string()))
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::stdout()
    }
}

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn create(&self, view: &RenderedView) -> Result<MessageHandle, PresentationError> {
        let id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.print(&format!("=== message #{id} ==="), view)?;
        Ok(MessageHandle::new(id.to_string()))
    }

    async fn replace(
        &self,
        handle: &MessageHandle,
        view: &RenderedView,
    ) -> Result<(), PresentationError> {
        let known = handle
            .id()
            .parse::<u64>()
            .is_ok_and(|id| id >= 1 && id <= self.issued.load(Ordering::SeqCst));
        if !known {
            return Err(PresentationError::HandleExpired(handle.to_string()));
        }

        self.print(&format!("=== message #{handle} (updated) ==="), view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stockcard_core::{ActionLink, ActionRow, Color};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sample_view() -> RenderedView {
        let mut view = RenderedView::new(Color::DEFAULT_ACCENT);
        view.push(ContentBlock::text("## Stock"));
        view.push(ContentBlock::Separator);
        view.push(ContentBlock::image("https://example.com/a.png"));
        view.push(ContentBlock::ActionRow(
            ActionRow::new(vec![ActionLink::new("Open", "https://example.com")]).unwrap(),
        ));
        view.push(ContentBlock::text("-# Updated <t:1700000000:R>"));
        view
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(
            render_plain(&sample_view()),
            format!(
                "[accent #0099ff]\n## Stock\n{RULE}\n[image] https://example.com/a.png\n[Open] https://example.com\n-# Updated 2023-11-14 22:13:20 UTC"
            )
        );
    }

    #[test]
    fn test_humanize_leaves_other_markup() {
        assert_eq!(humanize_timestamps("a <t:abc:R> b"), "a <t:abc:R> b");
        assert_eq!(humanize_timestamps("<t:0:F>"), "<t:0:F>");
        assert_eq!(humanize_timestamps("no markup"), "no markup");
        assert_eq!(humanize_timestamps("<t:0:R>"), "1970-01-01 00:00:00 UTC");
    }

    #[tokio::test]
    async fn test_create_then_replace() {
        let buffer = SharedBuffer::default();
        let presenter = ConsolePresenter::with_writer(buffer.clone());

        let handle = presenter.create(&sample_view()).await.unwrap();
        assert_eq!(handle.id(), "1");
        presenter.replace(&handle, &sample_view()).await.unwrap();

        let output = buffer.contents();
        assert!(output.contains("=== message #1 ==="));
        assert!(output.contains("=== message #1 (updated) ==="));
    }

    #[tokio::test]
    async fn test_replace_unknown_handle() {
        let presenter = ConsolePresenter::with_writer(SharedBuffer::default());

        let err = presenter
            .replace(&MessageHandle::new("7"), &sample_view())
            .await
            .unwrap_err();
        assert!(matches!(err, PresentationError::HandleExpired(_)));
    }
}

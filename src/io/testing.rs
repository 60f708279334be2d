//! In-memory I/O doubles.
//!
//! Used by the crate's own tests and by embedding hosts that capture
//! output instead of rendering it (the `--json` mode of the CLI does).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{ConsoleSink, InputError, InteractionSource};

/// A sink that collects written lines. `clear()` drops everything
/// collected so far, mirroring a screen wipe.
#[derive(Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written since construction or the last `clear`.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ConsoleSink for BufferSink {
    fn write_line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }

    fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

/// An interaction source fed from queues of scripted events. Once a queue
/// is exhausted the corresponding await resolves as `Cancelled`, which is
/// exactly the third suspension outcome the engine must handle.
#[derive(Default)]
pub struct QueuedInput {
    keys: Mutex<VecDeque<char>>,
    lines: Mutex<VecDeque<String>>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input = Self::new();
        input.push_lines(lines);
        input
    }

    pub fn push_keys<I: IntoIterator<Item = char>>(&self, keys: I) {
        self.keys.lock().unwrap().extend(keys);
    }

    pub fn push_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.lock().unwrap().extend(lines.into_iter().map(Into::into));
    }
}

#[async_trait]
impl InteractionSource for QueuedInput {
    async fn await_keypress(&self) -> Result<char, InputError> {
        self.keys.lock().unwrap().pop_front().ok_or(InputError::Cancelled)
    }

    async fn await_input_line(&self) -> Result<String, InputError> {
        self.lines.lock().unwrap().pop_front().ok_or(InputError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_collects_and_clears() {
        let sink = BufferSink::new();
        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        sink.clear();
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn test_queued_input_delivers_in_order() {
        let input = QueuedInput::new();
        input.push_keys(['a', ' ']);
        input.push_lines(["first", "second"]);

        assert_eq!(input.await_keypress().await, Ok('a'));
        assert_eq!(input.await_keypress().await, Ok(' '));
        assert_eq!(input.await_input_line().await, Ok("first".to_string()));
        assert_eq!(input.await_input_line().await, Ok("second".to_string()));
    }

    #[tokio::test]
    async fn test_queued_input_cancels_when_exhausted() {
        let input = QueuedInput::new();
        assert_eq!(input.await_keypress().await, Err(InputError::Cancelled));
        assert_eq!(input.await_input_line().await, Err(InputError::Cancelled));
    }
}

//! Host I/O Interfaces
//!
//! The core never touches presentation directly; the host supplies a
//! sink for output lines and a source for keypress/input-line events.

use async_trait::async_trait;
use thiserror::Error;

/// Interaction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The host cancelled the suspension (closed window, EOF, test
    /// harness running out of scripted events). The script run halts
    /// without finishing.
    #[error("interaction cancelled")]
    Cancelled,
}

/// Where output lines go. Supplied by the host.
pub trait ConsoleSink: Send + Sync {
    /// Print one line of text.
    fn write_line(&self, text: &str);

    /// Clear the screen.
    fn clear(&self);
}

/// Where keypresses and typed input lines come from. Supplied by the host.
///
/// Both methods suspend the whole interpreter until the host resolves
/// them; there is no way to leave an awaiting state other than delivery
/// or cancellation.
#[async_trait]
pub trait InteractionSource: Send + Sync {
    /// Suspend until one key event, returning the pressed character.
    async fn await_keypress(&self) -> Result<char, InputError>;

    /// Suspend until one submitted line of text.
    async fn await_input_line(&self) -> Result<String, InputError>;
}

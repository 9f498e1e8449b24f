use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Scoped raw-mode handle: acquiring it puts the terminal into raw mode,
/// dropping it restores the previous mode on every exit path, panics
/// included.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

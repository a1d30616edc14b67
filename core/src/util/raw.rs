//! Raw screen dumps.
//!
//! A screen buffer is persisted as its flat [`Screen::SIZE`] bytes with
//! no header, the same form the assembly side consumes. The functions
//! here read and write `io` streams; opening files, and reporting the
//! errors that come out of that, is the caller's business.

use std::io::{self, Read, Write};

use crate::render::Screen;

/// Writes the raw bytes of `screen` to `dest`.
pub fn save_raw(mut dest: impl Write, screen: &Screen) -> io::Result<()> {
    dest.write_all(screen.data())
}

/// Reads a screen buffer from `src`.
///
/// Fails with [`io::ErrorKind::UnexpectedEof`] if `src` yields fewer
/// than [`Screen::SIZE`] bytes.
pub fn load_raw(mut src: impl Read) -> io::Result<Screen> {
    let mut screen = Screen::new();
    src.read_exact(screen.data_mut())?;
    Ok(screen)
}

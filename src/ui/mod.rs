pub mod progress;
pub mod prompt;
pub mod render;

pub use progress::create_progress_bar;
pub use prompt::{LineSource, ReaderPrompt, TerminalPrompt};
pub use render::Renderer;

use colored::*;
use std::fmt::Display;
use std::io::Write;

/// --debug 플래그가 켜져 있을 때만 stderr에 출력
pub fn debug(enabled: bool, message: impl Display) {
    if enabled {
        eprintln!("{} {}", "DEBUG:".yellow(), message);
    }
}

/// 종료 직전 출력 버퍼 비우기 (실패하면 stderr에 알리고 false)
///
/// `process::exit`는 stdout 버퍼를 비우지 않습니다.
pub fn flush_output<W: Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{} Failed to flush output: {}", "[X]".red().bold(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_flush_output() {
        assert!(flush_output(&mut Vec::new()));
        assert!(!flush_output(&mut ClosedPipe));
    }
}

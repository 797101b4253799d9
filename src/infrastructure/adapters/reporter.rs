//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;
use crate::domain::view::{Flash, FlashKind};

/// 콘솔 전용 리포터 어댑터. TTY일 때만 색을 입힌다.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<12}] {}", scope, message);
    }

    fn flash(&self, flash: &Flash) {
        println!("{}", format_flash(flash, self.interactive));
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

/// 메시지 종류에 따라 색(TTY)이나 스타일 태그(비TTY)를 붙인다.
pub fn format_flash(flash: &Flash, colored: bool) -> String {
    if colored {
        let code = match flash.kind {
            FlashKind::Error => 31,
            FlashKind::Success => 32,
        };
        format!("\x1b[{code}m{}\x1b[0m", flash.text)
    } else {
        format!("[{}] {}", flash.style(), flash.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_flash_carries_style_tag() {
        assert_eq!(
            format_flash(&Flash::error("Search failed."), false),
            "[error-message] Search failed."
        );
        assert_eq!(
            format_flash(&Flash::success("Password changed."), false),
            "[success-message] Password changed."
        );
    }

    #[test]
    fn colored_flash_wraps_text() {
        let text = format_flash(&Flash::error("x"), true);
        assert!(text.starts_with("\x1b[31m"));
        assert!(text.ends_with("\x1b[0m"));
    }
}

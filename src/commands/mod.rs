pub mod batch;
pub mod check;
pub mod menu;

pub use batch::run_batch;
pub use check::run_check;
pub use menu::{run_menu, Menu};

use crate::batch::BatchSummary;
use crate::cli::Cli;
use crate::config::{Config, OutputFormat};

/// CLI 인자와 설정 파일을 합친 실행 옵션
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub show_summary: bool,
    pub progress_threshold: usize,
    pub debug: bool,
}

impl CommandContext {
    /// CLI 인자가 설정 파일보다 우선
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output_format),
            show_summary: config.show_summary,
            progress_threshold: config.progress_threshold,
            debug: cli.debug,
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_summary: true,
            progress_threshold: usize::MAX,
            debug: false,
        }
    }
}

/// 모두 유효하면 0, 하나라도 실패하면 1
pub fn exit_code(summary: &BatchSummary) -> i32 {
    if summary.all_valid() {
        0
    } else {
        1
    }
}

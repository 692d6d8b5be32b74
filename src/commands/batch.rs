use super::CommandContext;
use crate::batch::{parse_batch_input, BatchChecker, BatchSummary};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::ui::{self, create_progress_bar, Renderer};
use colored::*;
use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::Path;

/// 배치 모드 실행: 파일(또는 stdin)의 각 줄을 ISBN 후보로 검사
pub fn run_batch(file: Option<&Path>, ctx: &CommandContext) -> Result<BatchSummary> {
    let text = match file {
        Some(path) => {
            ui::debug(ctx.debug, format!("Reading batch from {}", path.display()));
            fs::read_to_string(path)?
        }
        None => {
            ui::debug(ctx.debug, "Reading batch from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let stdout = std::io::stdout();
    batch_to(&text, ctx, stdout.lock())
}

/// 배치 텍스트를 검사하여 writer에 출력
pub fn batch_to<W: Write>(text: &str, ctx: &CommandContext, out: W) -> Result<BatchSummary> {
    let items = parse_batch_input(text);
    let mut renderer = Renderer::new(out, ctx.format).with_summary(ctx.show_summary);

    if items.is_empty() && ctx.format == OutputFormat::Text {
        renderer.warn("No ISBNs found in batch input.")?;
        return Ok(BatchSummary::default());
    }

    ui::debug(ctx.debug, format!("{} batch entries", items.len()));

    let show_progress = ctx.format == OutputFormat::Text
        && items.len() >= ctx.progress_threshold
        && std::io::stderr().is_terminal();

    let checker = BatchChecker::new();
    let report = if show_progress {
        let pb = create_progress_bar(items.len() as u64);
        pb.set_message("Checking...".cyan().to_string());
        let report = checker.check_all_with(items, |_| pb.inc(1));
        pb.finish_and_clear();
        report
    } else {
        checker.check_all(items)
    };

    renderer.render_report(&report)?;

    Ok(report.summary)
}

use super::CommandContext;
use crate::batch::{BatchChecker, BatchSummary};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::ui::{self, Renderer};
use std::io::Write;

/// 인자로 받은 ISBN들을 순서대로 검사
pub fn run_check(inputs: &[String], ctx: &CommandContext) -> Result<BatchSummary> {
    let stdout = std::io::stdout();
    check_to(inputs, ctx, stdout.lock())
}

/// 검사 결과를 주어진 writer에 출력
pub fn check_to<W: Write>(inputs: &[String], ctx: &CommandContext, out: W) -> Result<BatchSummary> {
    let checker = BatchChecker::new();
    let items = inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| (idx + 1, input.clone()));

    let report = checker.check_all_with(items, |entry| {
        ui::debug(
            ctx.debug,
            format!("{:?} -> {:?}", entry.input, entry.verdict.normalized().unwrap_or("")),
        );
    });

    let mut renderer = Renderer::new(out, ctx.format).with_summary(ctx.show_summary);

    match (ctx.format, report.entries.as_slice()) {
        // 하나만 검사할 때는 줄 번호와 요약 없이 출력
        (OutputFormat::Text, [single]) => renderer.render_verdict(&single.verdict)?,
        _ => renderer.render_report(&report)?,
    }

    Ok(report.summary)
}

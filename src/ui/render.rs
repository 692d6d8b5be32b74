use crate::batch::{BatchEntry, BatchReport, BatchSummary};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::isbn::Verdict;
use colored::*;
use std::io::Write;

/// 검증 결과 출력기 (text 또는 JSON)
pub struct Renderer<W> {
    out: W,
    format: OutputFormat,
    show_summary: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            show_summary: true,
        }
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 단일 결과 출력 (대화형 메뉴, 단일 검사)
    pub fn render_verdict(&mut self, verdict: &Verdict) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(verdict)?)?;
            }
            OutputFormat::Text => {
                for line in verdict_lines(verdict) {
                    writeln!(self.out, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    /// 배치 항목 하나 출력 (줄 번호 포함)
    pub fn render_entry(&mut self, entry: &BatchEntry) -> Result<()> {
        let label = format!("[line {}]", entry.line);
        let mut lines = verdict_lines(&entry.verdict).into_iter();

        if let Some(first) = lines.next() {
            writeln!(self.out, "{} {}", label.dimmed(), first)?;
        }
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }

        if !entry.verdict.is_valid() {
            writeln!(self.out, "    {} {}", "Input:".dimmed(), entry.input.dimmed())?;
        }
        Ok(())
    }

    /// 배치 요약 출력
    pub fn render_summary(&mut self, summary: &BatchSummary) -> Result<()> {
        writeln!(self.out, "\n{} Batch check complete!", "[OK]".green().bold())?;
        writeln!(self.out, "  - Total: {}", summary.total)?;
        writeln!(self.out, "  - Valid: {}", summary.valid.to_string().green())?;
        writeln!(self.out, "  - Invalid: {}", summary.invalid.to_string().red())?;
        writeln!(
            self.out,
            "  - Format errors: {}",
            summary.format_errors.to_string().yellow()
        )?;
        writeln!(self.out, "  - Valid rate: {:.1}%", summary.valid_rate())?;
        Ok(())
    }

    /// 확인이 필요한 항목의 줄 번호 출력
    fn render_rejected(&mut self, report: &BatchReport) -> Result<()> {
        let lines: Vec<String> = report.rejected().map(|e| e.line.to_string()).collect();
        if lines.is_empty() {
            return Ok(());
        }

        self.warn(&format!(
            "{} {} need attention (line {})",
            lines.len(),
            if lines.len() == 1 { "entry" } else { "entries" },
            lines.join(", ")
        ))
    }

    /// 배치 리포트 전체 출력
    pub fn render_report(&mut self, report: &BatchReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(report)?)?;
            }
            OutputFormat::Text => {
                for entry in &report.entries {
                    self.render_entry(entry)?;
                }
                if self.show_summary {
                    self.render_summary(&report.summary)?;
                    self.render_rejected(report)?;
                }
            }
        }
        Ok(())
    }

    /// 대화형 메뉴 표시
    pub fn render_menu(&mut self, options: &[&str]) -> Result<()> {
        writeln!(self.out, "\n{}", "Options:".bold())?;
        for (idx, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, option)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn title(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text.cyan().bold())?;
        writeln!(self.out, "{}", "-".repeat(text.chars().count()))?;
        Ok(())
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{} {}", "[i]".cyan(), message)?;
        Ok(())
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{} {}", "[!]".yellow().bold(), message)?;
        Ok(())
    }
}

/// 결과를 사람이 읽는 문장으로 변환
fn verdict_lines(verdict: &Verdict) -> Vec<String> {
    match verdict {
        Verdict::Valid { normalized } => vec![format!(
            "{} {} is a valid ISBN-10",
            "[OK]".green().bold(),
            normalized.bold()
        )],
        Verdict::ChecksumInvalid {
            normalized,
            check_digit,
            corrected,
        } => vec![
            format!("{} {} is not a valid ISBN-10", "[X]".red().bold(), normalized.bold()),
            format!("    Correct check digit: {}", check_digit.to_string().green()),
            format!("    Correct ISBN-10: {}", corrected.green()),
        ],
        Verdict::FormatInvalid { reason, .. } => vec![format!(
            "{} Invalid ISBN format: {}",
            "[!]".yellow().bold(),
            reason
        )],
        Verdict::EmptyInput => vec![format!("{} No ISBN entered.", "[!]".yellow().bold())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{parse_batch_input, BatchChecker};
    use crate::isbn::IsbnValidator;

    fn render_text<F>(f: F) -> String
    where
        F: FnOnce(&mut Renderer<Vec<u8>>),
    {
        colored::control::set_override(false);
        let mut renderer = Renderer::new(Vec::new(), OutputFormat::Text);
        f(&mut renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_valid() {
        let verdict = IsbnValidator::new().check("0-306-40615-2");
        let out = render_text(|r| r.render_verdict(&verdict).unwrap());

        assert_eq!(out, "[OK] 0306406152 is a valid ISBN-10\n");
    }

    #[test]
    fn test_render_checksum_invalid() {
        let verdict = IsbnValidator::new().check("0306406153");
        let out = render_text(|r| r.render_verdict(&verdict).unwrap());

        assert!(out.contains("[X] 0306406153 is not a valid ISBN-10"));
        assert!(out.contains("Correct check digit: 2"));
        assert!(out.contains("Correct ISBN-10: 0306406152"));
    }

    #[test]
    fn test_render_format_invalid_and_empty() {
        let out = render_text(|r| {
            r.render_verdict(&IsbnValidator::new().check("12345")).unwrap();
            r.render_verdict(&Verdict::EmptyInput).unwrap();
        });

        assert!(out.contains("[!] Invalid ISBN format: expected 10 characters, found 5"));
        assert!(out.contains("[!] No ISBN entered."));
    }

    #[test]
    fn test_render_report_text() {
        let report = BatchChecker::new().check_all(parse_batch_input("0306406152\n\n0306406153\n12345"));
        let out = render_text(|r| r.render_report(&report).unwrap());

        assert!(out.contains("[line 1] [OK] 0306406152 is a valid ISBN-10"));
        assert!(out.contains("[line 3] [X] 0306406153 is not a valid ISBN-10"));
        assert!(out.contains("[line 4] [!] Invalid ISBN format"));
        assert!(out.contains("Input: 12345"));
        assert!(out.contains("- Total: 3"));
        assert!(out.contains("- Valid: 1"));
        assert!(out.contains("- Invalid: 1"));
        assert!(out.contains("- Format errors: 1"));
        assert!(out.contains("- Valid rate: 33.3%"));
        assert!(out.contains("[!] 2 entries need attention (line 3, 4)"));
    }

    #[test]
    fn test_all_valid_report_has_no_attention_line() {
        let report = BatchChecker::new().check_all(parse_batch_input("0306406152\n155404295X"));
        let out = render_text(|r| r.render_report(&report).unwrap());

        assert!(!out.contains("need attention"));
    }

    #[test]
    fn test_render_report_without_summary() {
        colored::control::set_override(false);
        let report = BatchChecker::new().check_all(parse_batch_input("0306406152"));
        let mut renderer = Renderer::new(Vec::new(), OutputFormat::Text).with_summary(false);
        renderer.render_report(&report).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(!out.contains("Batch check complete"));
        assert!(!out.contains("need attention"));
    }

    #[test]
    fn test_render_report_json() {
        let report = BatchChecker::new().check_all(parse_batch_input("0306406152\n12345"));
        let mut renderer = Renderer::new(Vec::new(), OutputFormat::Json);
        renderer.render_report(&report).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
        assert_eq!(json["summary"]["valid"], 1);
        assert_eq!(json["summary"]["format_errors"], 1);
        assert_eq!(json["entries"][0]["verdict"]["status"], "valid");
    }

    #[test]
    fn test_render_menu() {
        let out = render_text(|r| r.render_menu(&["Check", "Exit"]).unwrap());

        assert!(out.contains("Options:\n1. Check\n2. Exit\n"));
    }
}

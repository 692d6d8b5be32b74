use super::CommandContext;
use crate::batch::BatchChecker;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::isbn::IsbnValidator;
use crate::ui::{self, LineSource, ReaderPrompt, Renderer, TerminalPrompt};
use std::io::{IsTerminal, Write};

const MENU_OPTIONS: &[&str] = &["Check a single ISBN-10", "Check a batch of ISBN-10s", "Exit"];

/// 대화형 메뉴 실행
///
/// stdin이 터미널이면 dialoguer 프롬프트를, 아니면 줄 단위 입력을 사용합니다.
pub fn run_menu(ctx: &CommandContext) -> Result<()> {
    let stdout = std::io::stdout();

    if std::io::stdin().is_terminal() {
        Menu::new(TerminalPrompt::new(), stdout.lock(), ctx).run()
    } else {
        let source = ReaderPrompt::new(std::io::stdin().lock(), std::io::stdout());
        Menu::new(source, stdout.lock(), ctx).run()
    }
}

/// 단일/배치 모드를 가진 반복 메뉴
pub struct Menu<'a, S, W> {
    source: S,
    renderer: Renderer<W>,
    checker: BatchChecker,
    ctx: &'a CommandContext,
}

/// 메뉴 한 번의 선택 결과
enum Step {
    Continue,
    Exit,
}

impl<'a, S: LineSource, W: Write> Menu<'a, S, W> {
    pub fn new(source: S, out: W, ctx: &'a CommandContext) -> Self {
        // 메뉴는 항상 사람이 읽는 형식으로 출력
        let renderer = Renderer::new(out, OutputFormat::Text).with_summary(true);

        Self {
            source,
            renderer,
            checker: BatchChecker::new(),
            ctx,
        }
    }

    pub fn into_writer(self) -> W {
        self.renderer.into_inner()
    }

    /// 종료를 선택하거나 입력이 끝날 때까지 반복
    pub fn run(&mut self) -> Result<()> {
        self.renderer.title("ISBN-10 Checker and Fixer")?;

        loop {
            self.renderer.render_menu(MENU_OPTIONS)?;

            let choice = match self.source.read_line("Choose an option (1-3)")? {
                Some(choice) => choice,
                None => break,
            };

            ui::debug(self.ctx.debug, format!("menu choice {:?}", choice));

            match self.handle_choice(choice.trim())? {
                Step::Continue => continue,
                Step::Exit => break,
            }
        }

        self.renderer.info("Program terminated. Thank you!")?;
        Ok(())
    }

    fn handle_choice(&mut self, choice: &str) -> Result<Step> {
        match choice {
            "1" => self.check_single(),
            "2" => self.check_batch(),
            "3" => Ok(Step::Exit),
            _ => {
                self.renderer.warn("Invalid option. Please choose again.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn check_single(&mut self) -> Result<Step> {
        let input = match self.source.read_line("Enter ISBN-10")? {
            Some(input) => input,
            None => return Ok(Step::Exit),
        };

        let verdict = IsbnValidator::new().check(&input);
        self.renderer.render_verdict(&verdict)?;

        Ok(Step::Continue)
    }

    /// 빈 줄이 나올 때까지 입력을 모아 한 번에 검사
    fn check_batch(&mut self) -> Result<Step> {
        self.renderer
            .info("Enter one ISBN-10 per line. Submit an empty line to finish.")?;

        let mut items = Vec::new();
        let mut reached_end = false;

        loop {
            match self.source.read_line("ISBN")? {
                Some(line) if line.trim().is_empty() => break,
                Some(line) => items.push((items.len() + 1, line.trim().to_string())),
                None => {
                    reached_end = true;
                    break;
                }
            }
        }

        if items.is_empty() {
            self.renderer.warn("No ISBNs entered.")?;
        } else {
            let report = self.checker.check_all(items);
            self.renderer.render_report(&report)?;
        }

        Ok(if reached_end { Step::Exit } else { Step::Continue })
    }
}

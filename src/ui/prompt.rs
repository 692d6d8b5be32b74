use crate::error::Result;
use dialoguer::Input;
use std::io::{BufRead, ErrorKind, Write};

/// 터미널에서 Ctrl-D를 누르면 입력되는 문자
const END_OF_TRANSMISSION: &str = "\u{4}";

/// 대화형 메뉴의 입력원
pub trait LineSource {
    /// 한 줄 읽기 (입력이 끝나면 None)
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// 터미널용 입력 (dialoguer)
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        terminal_line(result)
    }
}

/// dialoguer 결과를 입력 종료(None)와 한 줄로 구분
fn terminal_line(result: dialoguer::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) if line == END_OF_TRANSMISSION => Ok(None),
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// 파이프나 테스트용 입력 - 프롬프트를 writer에 쓰고 reader에서 한 줄 읽음
pub struct ReaderPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderPrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

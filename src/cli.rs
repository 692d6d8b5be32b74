use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "isbn-checker")]
#[command(version)]
#[command(about = "Validate ISBN-10 codes and suggest the correct check digit", long_about = None)]
pub struct Cli {
    /// 검사할 ISBN-10 (하이픈, 공백 허용). 없으면 대화형 메뉴 실행
    #[arg(conflicts_with_all = ["batch", "file", "interactive"])]
    pub isbns: Vec<String>,

    /// 배치 모드: 한 줄에 하나씩 ISBN 읽기 (--file 또는 stdin)
    #[arg(short = 'b', long)]
    pub batch: bool,

    /// 배치 입력 파일 (지정하면 배치 모드)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// 대화형 메뉴 실행
    #[arg(short = 'i', long, conflicts_with_all = ["batch", "file"])]
    pub interactive: bool,

    /// 출력 형식 (미지정시 설정 파일의 output_format 사용)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 컬러 출력 끄기
    #[arg(long)]
    pub no_color: bool,

    /// 설정 파일 경로 (기본: ~/.isbn-checker/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 기본 설정 파일 생성 후 종료
    #[arg(long)]
    pub init_config: bool,

    /// 디버그 모드
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn is_batch(&self) -> bool {
        self.batch || self.file.is_some()
    }
}

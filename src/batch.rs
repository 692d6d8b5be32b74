use crate::isbn::{IsbnValidator, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 배치 항목 하나의 검증 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// 입력에서의 줄 번호 (1부터 시작)
    pub line: usize,
    /// 사용자가 입력한 원본 문자열
    pub input: String,
    /// 검증 결과
    pub verdict: Verdict,
}

/// 배치 결과 집계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub format_errors: usize,
}

impl BatchSummary {
    /// 결과 하나를 집계에 반영
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Valid { .. } => self.valid += 1,
            Verdict::ChecksumInvalid { .. } => self.invalid += 1,
            Verdict::FormatInvalid { .. } | Verdict::EmptyInput => self.format_errors += 1,
        }
    }

    /// 모든 항목이 유효한지 확인
    pub fn all_valid(&self) -> bool {
        self.valid == self.total
    }

    /// 유효 비율 (%)
    pub fn valid_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.valid as f64 / self.total as f64) * 100.0
    }
}

/// 배치 검증 리포트
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub summary: BatchSummary,
    pub checked_at: DateTime<Utc>,
}

impl BatchReport {
    /// 유효하지 않은 항목들
    pub fn rejected(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| !e.verdict.is_valid())
    }
}

/// 여러 줄 텍스트를 배치 항목으로 분리
///
/// 각 줄의 앞뒤 공백을 제거하고 빈 줄은 건너뜁니다. 줄 번호는 원본 기준입니다.
pub fn parse_batch_input(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| (line_no, line.to_string()))
        .collect()
}

/// 배치 검증기 - 입력 순서대로 하나씩 검증
#[derive(Debug, Default)]
pub struct BatchChecker {
    validator: IsbnValidator,
}

impl BatchChecker {
    pub fn new() -> Self {
        Self {
            validator: IsbnValidator::new(),
        }
    }

    /// 항목 하나 검증
    pub fn check_one(&self, line: usize, input: String) -> BatchEntry {
        let verdict = self.validator.check(&input);
        BatchEntry { line, input, verdict }
    }

    /// 모든 항목 검증
    pub fn check_all<I>(&self, items: I) -> BatchReport
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        self.check_all_with(items, |_| {})
    }

    /// 모든 항목 검증 (항목마다 콜백 호출, 진행률 표시용)
    pub fn check_all_with<I, F>(&self, items: I, mut on_entry: F) -> BatchReport
    where
        I: IntoIterator<Item = (usize, String)>,
        F: FnMut(&BatchEntry),
    {
        let (entries, summary) = items.into_iter().fold(
            (Vec::new(), BatchSummary::default()),
            |(mut entries, mut summary), (line, input)| {
                let entry = self.check_one(line, input);
                summary.record(&entry.verdict);
                on_entry(&entry);
                entries.push(entry);
                (entries, summary)
            },
        );

        BatchReport {
            entries,
            summary,
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_input() {
        let items = parse_batch_input("0-306-40615-2\n\n  155404295X  \r\n12345\n   \n");

        assert_eq!(
            items,
            vec![
                (1, "0-306-40615-2".to_string()),
                (3, "155404295X".to_string()),
                (4, "12345".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_batch() {
        assert!(parse_batch_input("").is_empty());
        assert!(parse_batch_input("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_mixed_batch_summary() {
        let checker = BatchChecker::new();
        let report = checker.check_all(parse_batch_input("0306406152\n0306406153\n12345"));

        assert_eq!(
            report.summary,
            BatchSummary {
                total: 3,
                valid: 1,
                invalid: 1,
                format_errors: 1,
            }
        );
        assert!(!report.summary.all_valid());
        assert_eq!(report.rejected().count(), 2);
    }

    #[test]
    fn test_entries_keep_input_order() {
        let checker = BatchChecker::new();
        let report = checker.check_all(vec![
            (1, "12345".to_string()),
            (2, "0306406152".to_string()),
            (5, "0306406153".to_string()),
        ]);

        let lines: Vec<usize> = report.entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 2, 5]);
        assert_eq!(report.entries[1].input, "0306406152");
        assert!(report.entries[1].verdict.is_valid());
    }

    #[test]
    fn test_empty_input_counts_as_format_error() {
        let mut summary = BatchSummary::default();
        summary.record(&Verdict::EmptyInput);

        assert_eq!(summary.format_errors, 1);
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn test_valid_rate() {
        let checker = BatchChecker::new();

        let report = checker.check_all(parse_batch_input("0306406152\n155404295X"));
        assert!(report.summary.all_valid());
        assert_eq!(report.summary.valid_rate(), 100.0);

        let report = checker.check_all(parse_batch_input("0306406152\n0306406153"));
        assert_eq!(report.summary.valid_rate(), 50.0);

        let report = checker.check_all(Vec::new());
        assert!(report.entries.is_empty());
        assert_eq!(report.summary.valid_rate(), 0.0);
    }

    #[test]
    fn test_callback_sees_every_entry() {
        let checker = BatchChecker::new();
        let mut seen = Vec::new();

        checker.check_all_with(parse_batch_input("a\nb\nc"), |entry| seen.push(entry.line));

        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_report_json() {
        let checker = BatchChecker::new();
        let report = checker.check_all(parse_batch_input("0306406153"));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summary"]["invalid"], 1);
        assert_eq!(json["entries"][0]["line"], 1);
        assert_eq!(json["entries"][0]["verdict"]["corrected"], "0306406152");
        assert!(json["checked_at"].is_string());
    }
}

use super::{checksum_valid, compute_check_digit, normalize, ISBN10_LEN};
use serde::Serialize;
use thiserror::Error;

/// 형식 검사 실패 사유
///
/// 조건은 길이 → 앞 9자리 → 체크 문자 순서로 검사하며, 처음 실패한 조건만 보고합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatError {
    #[error("expected 10 characters, found {length}")]
    WrongLength { length: usize },

    #[error("character '{found}' at position {ordinal} is not a digit", ordinal = .position + 1)]
    NonDigit { position: usize, found: char },

    #[error("check character '{found}' must be a digit or X")]
    InvalidCheckCharacter { found: char },
}

/// 정규화된 코드의 구조 검사 (첫 번째 실패 조건 반환)
pub fn check_shape(code: &str) -> Result<(), FormatError> {
    let chars: Vec<char> = code.chars().collect();

    if chars.len() != ISBN10_LEN {
        return Err(FormatError::WrongLength { length: chars.len() });
    }

    let (body, check) = chars.split_at(ISBN10_LEN - 1);

    if let Some((position, &found)) = body.iter().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(FormatError::NonDigit { position, found });
    }

    let found = check[0];
    if !(found.is_ascii_digit() || found == 'X') {
        return Err(FormatError::InvalidCheckCharacter { found });
    }

    Ok(())
}

/// 길이 10, 앞 9자리 숫자, 마지막 자리 숫자 또는 `X`이면 참
pub fn validate_shape(code: &str) -> bool {
    check_shape(code).is_ok()
}

/// 검증 결과 분류
///
/// 모든 경우가 호출자에게 반환되는 정상 결과이며, 표시 방법은 호출자가 결정합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// 입력이 비어 있음
    EmptyInput,
    /// 형식 검사 실패 (체크섬 계산 안 함)
    FormatInvalid {
        normalized: String,
        reason: FormatError,
    },
    /// 형식은 맞지만 체크섬 불일치
    ChecksumInvalid {
        normalized: String,
        check_digit: char,
        corrected: String,
    },
    /// 유효한 ISBN-10
    Valid { normalized: String },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    /// 정규화된 코드 (빈 입력이면 None)
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Verdict::EmptyInput => None,
            Verdict::FormatInvalid { normalized, .. }
            | Verdict::ChecksumInvalid { normalized, .. }
            | Verdict::Valid { normalized } => Some(normalized),
        }
    }
}

/// 정규화 → 형식 검사 → 체크섬 → 체크 문자 교정 파이프라인
#[derive(Debug, Default, Clone, Copy)]
pub struct IsbnValidator;

impl IsbnValidator {
    pub fn new() -> Self {
        Self
    }

    /// 사용자 입력 하나를 검증
    ///
    /// # Examples
    /// ```
    /// use isbn_checker::isbn::{IsbnValidator, Verdict};
    ///
    /// let verdict = IsbnValidator::new().check("0-306-40615-3");
    /// match verdict {
    ///     Verdict::ChecksumInvalid { corrected, .. } => assert_eq!(corrected, "0306406152"),
    ///     other => panic!("unexpected verdict: {:?}", other),
    /// }
    /// ```
    pub fn check(&self, raw: &str) -> Verdict {
        if raw.trim().is_empty() {
            return Verdict::EmptyInput;
        }

        let normalized = normalize(raw);

        if let Err(reason) = check_shape(&normalized) {
            return Verdict::FormatInvalid { normalized, reason };
        }

        if checksum_valid(&normalized) {
            return Verdict::Valid { normalized };
        }

        // 형식 검사를 통과했으므로 앞 9자는 ASCII 숫자
        let prefix = &normalized[..ISBN10_LEN - 1];
        let check_digit = compute_check_digit(prefix);
        let corrected = format!("{}{}", prefix, check_digit);

        Verdict::ChecksumInvalid {
            normalized,
            check_digit,
            corrected,
        }
    }
}

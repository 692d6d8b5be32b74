/// 모듈러 11 가중합 체크섬
///
/// 가중치는 첫 자리 10에서 시작해 마지막 자리 1까지 1씩 감소합니다.
const MODULUS: u32 = 11;

/// 문자 하나를 체크섬 값으로 변환 (`0`-`9` → 0-9, `X` → 10)
///
/// 위치와 무관하게 매핑합니다. `X`가 마지막 자리에만 올 수 있다는 제약은
/// 형식 검사의 몫입니다.
fn char_value(c: char) -> Option<u32> {
    match c {
        'X' => Some(10),
        _ => c.to_digit(10),
    }
}

/// 앞에서부터 10, 9, 8, ... 가중치를 곱해 더한 값
fn weighted_sum(code: &str) -> u32 {
    code.chars()
        .zip((1..=MODULUS - 1).rev())
        .map(|(c, weight)| char_value(c).unwrap_or(0) * weight)
        .sum()
}

/// 형식 검사를 통과한 ISBN-10의 체크섬이 맞는지 확인
///
/// 호출 전에 반드시 `validate_shape`가 참이어야 합니다.
///
/// # Examples
/// ```
/// use isbn_checker::isbn::checksum_valid;
///
/// assert!(checksum_valid("0306406152"));
/// assert!(!checksum_valid("0306406153"));
/// ```
pub fn checksum_valid(candidate: &str) -> bool {
    debug_assert!(super::validate_shape(candidate), "checksum on malformed code: {candidate:?}");
    weighted_sum(candidate) % MODULUS == 0
}

/// 앞 9자리 숫자로 올바른 체크 문자 계산
///
/// 입력이 정확히 9자리 숫자라고 가정하며 다시 검사하지 않습니다.
///
/// # Examples
/// ```
/// use isbn_checker::isbn::compute_check_digit;
///
/// assert_eq!(compute_check_digit("030640615"), '2');
/// assert_eq!(compute_check_digit("155404295"), 'X');
/// ```
pub fn compute_check_digit(prefix9: &str) -> char {
    debug_assert!(
        prefix9.len() == 9 && prefix9.chars().all(|c| c.is_ascii_digit()),
        "check digit prefix must be 9 digits: {prefix9:?}"
    );

    let remainder = weighted_sum(prefix9) % MODULUS;
    match (MODULUS - remainder) % MODULUS {
        10 => 'X',
        value => char::from_digit(value, 10).unwrap_or('0'),
    }
}

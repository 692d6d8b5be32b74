/// 하이픈과 공백을 제거하고 대문자로 통일
///
/// 형식 검사는 하지 않습니다. 어떤 입력이든 항상 성공합니다.
///
/// # Examples
/// ```
/// use isbn_checker::isbn::normalize;
///
/// assert_eq!(normalize("0-306-40615-2"), "0306406152");
/// assert_eq!(normalize("155 404 295x"), "155404295X");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && *c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_hyphens_and_spaces() {
        assert_eq!(normalize("0-306-40615-2"), "0306406152");
        assert_eq!(normalize(" 0 306 40615 2 "), "0306406152");
        assert_eq!(normalize("0 - 306"), "0306");
    }

    #[test]
    fn test_uppercases_check_character() {
        assert_eq!(normalize("155404295x"), "155404295X");
    }

    #[test]
    fn test_keeps_other_characters() {
        // 탭이나 다른 구분자는 제거하지 않음 (형식 검사에서 걸러짐)
        assert_eq!(normalize("030\t6406152"), "030\t6406152");
        assert_eq!(normalize("0306.406152"), "0306.406152");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("- - -"), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["0-306-40615-2", "155404295x", "abc-def", "  ", "12345678Y"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}

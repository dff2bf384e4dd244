/// 转义 LIKE 模式中的通配符
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_like_pattern("glyphosate"), "glyphosate");
        assert_eq!(escape_like_pattern("95%_TC"), "95\\%\\_TC");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 违反的约束类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Required,
    Min,
    Range,
    MaxLength,
    Format,
    OneOf,
}

/// 单个字段的校验失败信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: Constraint,
    pub expected: String,
}

/// 校验失败集合，按字段顺序收集
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        field: impl Into<String>,
        constraint: Constraint,
        expected: impl Into<String>,
    ) -> &mut Self {
        self.0.push(FieldViolation {
            field: field.into(),
            constraint,
            expected: expected.into(),
        });
        self
    }

    pub fn min(&mut self, field: &str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.add(field, Constraint::Min, format!(">= {min}"));
        }
        self
    }

    pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.add(field, Constraint::Range, format!("{min}..={max}"));
        }
        self
    }

    /// 去除首尾空白后不能为空
    pub fn required_text(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, Constraint::Required, "non-empty string");
        }
        self
    }

    /// 按字符（而非字节）计数
    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.add(field, Constraint::MaxLength, format!("<= {max} characters"));
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if validate_email(value).is_err() {
            self.add(field, Constraint::Format, "email address");
        }
        self
    }

    pub fn merge(&mut self, other: ValidationErrors) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{} must be {}", v.field, v.expected))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// 请求参数校验
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 常见弱密码
    let weak_passwords = [
        "password",
        "12345678",
        "qwerty123",
        "admin123",
        "password1",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("Agro2025Chain").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
    }

    #[test]
    fn test_email() {
        assert!(validate_email("buyer@agro.example.com").is_ok());
        assert!(validate_email("buyer@agro").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_violations_collect_in_order() {
        let mut errors = ValidationErrors::new();
        errors
            .min("page", 0, 1)
            .range("limit", 51, 1, 50)
            .required_text("message", "   ");
        let fields: Vec<&str> = errors
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(fields, vec!["page", "limit", "message"]);
        assert_eq!(errors.violations()[1].expected, "1..=50");
    }

    #[test]
    fn test_max_chars_counts_characters() {
        let mut errors = ValidationErrors::new();
        errors.max_chars("message", &"农".repeat(2000), 2000);
        assert!(errors.is_empty());
        errors.max_chars("message", &"农".repeat(2001), 2000);
        assert_eq!(errors.violations()[0].constraint, Constraint::MaxLength);
    }

    #[test]
    fn test_violation_serializes_as_array() {
        let mut errors = ValidationErrors::new();
        errors.min("page", 0, 1);
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value[0]["field"], "page");
        assert_eq!(value[0]["constraint"], "min");
        assert_eq!(value[0]["expected"], ">= 1");
    }
}

//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_argochain_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ArgoChainError {
            $($variant(String),)*
        }

        impl ArgoChainError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ArgoChainError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ArgoChainError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ArgoChainError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ArgoChainError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ArgoChainError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_argochain_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    Conflict("E012", "Resource Conflict"),
    Maintenance("E013", "Maintenance Task Error"),
}

impl ArgoChainError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ArgoChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ArgoChainError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ArgoChainError {
    fn from(err: sea_orm::DbErr) -> Self {
        ArgoChainError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ArgoChainError {
    fn from(err: std::io::Error) -> Self {
        ArgoChainError::Maintenance(err.to_string())
    }
}

impl From<serde_json::Error> for ArgoChainError {
    fn from(err: serde_json::Error) -> Self {
        ArgoChainError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ArgoChainError {
    fn from(err: chrono::ParseError) -> Self {
        ArgoChainError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArgoChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ArgoChainError::cache_connection("test").code(), "E001");
        assert_eq!(ArgoChainError::database_config("test").code(), "E003");
        assert_eq!(ArgoChainError::validation("test").code(), "E006");
        assert_eq!(ArgoChainError::authentication("test").code(), "E010");
        assert_eq!(ArgoChainError::maintenance("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ArgoChainError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            ArgoChainError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ArgoChainError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_db_err_conversion() {
        let err: ArgoChainError = sea_orm::DbErr::RecordNotFound("company 7".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("company 7"));
    }

    #[test]
    fn test_format_simple() {
        let err = ArgoChainError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}

use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const REFRESH_COOKIE: &str = "refresh_token";

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,             // 用户 ID
    pub role: String,            // 用户角色
    pub company_id: Option<i64>, // 所属企业
    pub kind: TokenKind,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

// Token 对
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// 令牌主体信息
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub user_id: i64,
    pub role: &'a str,
    pub company_id: Option<i64>,
}

pub struct JwtUtils;

impl JwtUtils {
    fn get_secret() -> &'static str {
        &AppConfig::get().jwt.secret
    }

    pub fn generate_access_token(subject: Subject<'_>) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::encode_with_secret(
            Self::get_secret(),
            subject,
            TokenKind::Access,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    pub fn generate_refresh_token(
        subject: Subject<'_>,
        token_expiry: Option<chrono::Duration>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let expiry =
            token_expiry.unwrap_or_else(|| chrono::Duration::days(config.jwt.refresh_token_expiry));
        Self::encode_with_secret(Self::get_secret(), subject, TokenKind::Refresh, expiry)
    }

    pub fn generate_token_pair(
        subject: Subject<'_>,
        refresh_token_expiry: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(subject)?,
            refresh_token: Self::generate_refresh_token(subject, refresh_token_expiry)?,
        })
    }

    pub(crate) fn encode_with_secret(
        secret: &str,
        subject: Subject<'_>,
        kind: TokenKind,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: subject.user_id.to_string(),
            role: subject.role.to_string(),
            company_id: subject.company_id,
            kind,
            exp: (now + expiry_duration).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub(crate) fn decode_with_secret(
        secret: &str,
        token: &str,
        expected: TokenKind,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;
        if claims.kind != expected {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::decode_with_secret(Self::get_secret(), token, TokenKind::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::decode_with_secret(Self::get_secret(), token, TokenKind::Refresh)
    }

    /// 创建 Refresh Token Cookie
    pub fn create_refresh_token_cookie(
        refresh_token: &str,
        max_age_days: i64,
    ) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(max_age_days))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-for-jwt";

    fn subject() -> Subject<'static> {
        Subject {
            user_id: 42,
            role: "owner",
            company_id: Some(7),
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let token = JwtUtils::encode_with_secret(
            SECRET,
            subject(),
            TokenKind::Access,
            chrono::Duration::minutes(5),
        )
        .unwrap();
        let claims = JwtUtils::decode_with_secret(SECRET, &token, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.role, "owner");
        assert_eq!(claims.company_id, Some(7));
    }

    #[test]
    fn test_token_kind_mismatch_rejected() {
        let token = JwtUtils::encode_with_secret(
            SECRET,
            subject(),
            TokenKind::Refresh,
            chrono::Duration::minutes(5),
        )
        .unwrap();
        assert!(JwtUtils::decode_with_secret(SECRET, &token, TokenKind::Access).is_err());
        assert!(JwtUtils::decode_with_secret(SECRET, &token, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JwtUtils::encode_with_secret(
            SECRET,
            subject(),
            TokenKind::Access,
            chrono::Duration::minutes(5),
        )
        .unwrap();
        assert!(JwtUtils::decode_with_secret("other", &token, TokenKind::Access).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::encode_with_secret(
            SECRET,
            subject(),
            TokenKind::Access,
            chrono::Duration::minutes(-10),
        )
        .unwrap();
        assert!(JwtUtils::decode_with_secret(SECRET, &token, TokenKind::Access).is_err());
    }
}

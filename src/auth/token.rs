use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// 令牌默认有效期（小时）
pub const TOKEN_TTL_HOURS: i64 = 24;

/// 令牌携带的声明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 登录邮箱
    pub email: String,
    /// 管理员能力标记，目前只有这一种角色
    pub admin: bool,
    /// 签发时间（Unix 秒）
    pub iat: i64,
    /// 过期时间（Unix 秒）
    pub exp: i64,
}

/// HS256 令牌的签发与校验
///
/// 无状态：令牌是否有效只取决于签名和 `exp`，服务端不保存会话，也不支持吊销。
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenKeys {
    /// 使用给定密钥创建，有效期为 [`TOKEN_TTL_HOURS`] 小时
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_ttl(secret, Duration::hours(TOKEN_TTL_HOURS))
    }

    pub fn with_ttl(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        let secret = secret.as_ref();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// 为管理员签发令牌
    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(email, Utc::now())
    }

    /// 以指定的签发时间签发令牌
    pub fn issue_at(
        &self,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            email: email.to_string(),
            admin: true,
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// 校验签名与过期时间，返回令牌中的声明
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::ErrorKind;

    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let keys = TokenKeys::new("secret");
        let token = keys.issue("admin@example.com").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.email, "admin@example.com");
        assert!(claims.admin);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = TokenKeys::new("secret");
        let token = keys
            .issue_at("admin@example.com", Utc::now() - Duration::hours(25))
            .unwrap();

        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenKeys::new("secret").issue("admin@example.com").unwrap();

        let err = TokenKeys::new("another").verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = TokenKeys::new("secret");
        let token = keys.issue("admin@example.com").unwrap();
        let forged = keys.issue("intruder@example.com").unwrap();

        // 用其他令牌的载荷替换原载荷，签名保持不变
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(keys.verify(&tampered).is_err());
        assert!(keys.verify("not-a-token").is_err());
    }
}

use subtle::ConstantTimeEq;

/// 唯一的管理员账号
///
/// 账号密码来自配置，不存放在数据库中。
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// 校验登录信息
    ///
    /// 两个字段都会以常量时间比较，调用方只能得知整体是否匹配。
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_ok = self.email.as_bytes().ct_eq(email.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (email_ok & password_ok).into()
    }
}

mod credentials;
mod guard;
mod token;

pub use self::{
    credentials::AdminCredentials,
    guard::require_admin,
    token::{Claims, TOKEN_TTL_HOURS, TokenKeys},
};

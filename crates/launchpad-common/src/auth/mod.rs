//! Authentication utilities

mod password;
mod session_token;

pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
};
pub use session_token::{generate_session_token, looks_like_session_token, SESSION_TOKEN_BYTES};

pub mod credentials;
pub mod diagnostics;
pub mod health;
pub mod home;
pub mod logs;

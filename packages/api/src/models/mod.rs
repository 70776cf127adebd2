mod requests;
mod role;
mod user;

pub use requests::{AuthResponse, LoginRequest, RegisterForm, RegisterRequest, RoleProfile};
pub use role::{normalize_role, UserRole};
pub use user::UserInfo;

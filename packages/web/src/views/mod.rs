mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::DashboardHome;

mod dashboards;
pub use dashboards::{AdminDashboard, RecruiterDashboard, StudentDashboard, UniversityDashboard};

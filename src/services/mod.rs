//! API services.
//!
//! These contain the core business logic.
//!
//! If a service directly maps to an HTTP route, it will have an `http` module
//! and will implement `Into<axum::Router>`.

pub mod auth;
pub use auth::AuthService;

mod health;
pub use health::HealthService;

pub mod users;
pub use users::UserService;

pub mod bans;
pub use bans::BanService;

pub mod vips;
pub use vips::VipService;

pub mod panel;
pub use panel::PanelClient;

pub mod servers;
pub use servers::ServerService;

pub mod stats;
pub use stats::StatsService;

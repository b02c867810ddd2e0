//! actix-web server surface: JSON API routes, the admin guard, and TLS
//! assembly. Page routes are registered by the binary through
//! `leptos_actix`.

pub mod middleware;
pub mod routes;
pub mod state;
pub mod tls;

pub use state::AppState;

//! Homestead Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Building neighborhoods from a plan and reporting on them
//! - `infrastructure/` - Configuration, plan ports and their adapters
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;

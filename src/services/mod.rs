//! Service layer for business logic.
//!
//! Separates gallery logic from UI handlers so it can be tested without a window.

pub mod navigation_service;

pub use navigation_service::{NavigationService, PageView};

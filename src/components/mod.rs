//! Reusable building blocks shared by the page sections.

pub mod button;
pub mod icons;
pub mod navbar;
pub mod section;
pub mod stars;

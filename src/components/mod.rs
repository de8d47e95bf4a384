//! Page chrome components

mod navbar;

pub use navbar::Navbar;

//! The components module contains the shared components of the app,
//! elements that are not themselves a screen.

pub mod header;

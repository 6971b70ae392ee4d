//! Dioxus desktop front end for the Folio portfolio site.
//!
//! `folio-core` owns the state machines; this crate renders them. The root
//! component owns the theme and navigation state and passes read-only
//! values down as props.

pub mod animation;
pub mod components;
pub mod theme;
pub mod views;

/// Site stylesheet embedded at compile time.
pub const SITE_CSS: &str = include_str!("../assets/site.css");

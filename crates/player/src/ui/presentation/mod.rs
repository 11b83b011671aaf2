//! Presentation layer - Dioxus UI components

pub mod components;

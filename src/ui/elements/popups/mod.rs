// src/ui/elements/popups/mod.rs
pub mod alert_popup;

pub mod content;
pub mod dioxus_gui;
pub mod lang;
pub mod prefs;
pub mod theme;
pub mod ui;

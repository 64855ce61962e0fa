/// State management module
///
/// This module handles all application state, including:
/// - The in-memory book collection (library.rs)
/// - Shared data structures (data.rs)
/// - The entry form and its validation rules (form.rs)

pub mod library;
pub mod data;
pub mod form;

//! flightquote-export
//!
//! Flight quotation PDF rendering: a fixed template laid out onto a
//! [`canvas::Canvas`], paginated by [`flow::PageFlow`] with chrome redrawn
//! on every page transition.

pub mod assets;
pub mod canvas;
pub mod chrome;
pub mod compose;
pub mod error;
pub mod flow;
pub mod info_list;
pub mod pdf;
pub mod styles;
pub mod table;

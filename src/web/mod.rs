//! HTML front end: Askama pages and form handling

pub mod handlers;

// Presentation layer: turns board data into HTML via askama templates.
// Templates live in `templates/` at the crate root and are HTML-escaped.

pub mod cards;
pub mod page;

pub use page::{render_page, render_results};

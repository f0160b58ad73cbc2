//! Utilities for laying objects out on pages.
//!
//! # Example
//!
//! ```
//! use label_grid::{Page, Pt};
//! use label_grid::layout::Margins;
//! use label_grid::pagesize;
//!
//! let page = Page::new(pagesize::A4, Some(Margins::all(Pt(72.0))));
//! assert_eq!(page.content_box.x1, Pt(72.0));
//! ```

mod margins;

pub use margins::*;

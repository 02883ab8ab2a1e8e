//! # Router
//!
//! Declarative page table for the marketplace client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Navigator::push("/business?tab=1")                                     │
//! │        │ normalize: drop query, fragment, trailing '/'                  │
//! │        ▼                                                                │
//! │  RouteTable (ordered)   first match wins                                │
//! │        ├── Target::Redirect ──► resolve again (max 4 hops)              │
//! │        ├── Target::Page ──────► RouteMatch { path, page, params }       │
//! │        └── no match ──────────► Page::NotFound                          │
//! │        ▼                                                                │
//! │  Page::render(&params) ──► PageView { title, section, params }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod navigator;
mod page;
mod pattern;
mod table;

use thiserror::Error;

pub use navigator::Navigator;
pub use page::{Page, PageView, Section};
pub use pattern::{RouteParams, RoutePattern};
pub use table::{RouteMatch, RouteTable, Target, MAX_REDIRECTS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("too many redirects resolving '{path}' (max {max})")]
    TooManyRedirects { path: String, max: usize },
}

//! In-application link dispatch
//!
//! Links using the reserved `rssowl://` scheme never leave the application.
//! A browsing surface owns a [`LinkRouter`]; when navigation targets a
//! reserved link the router extracts the handler id and hands the original
//! link to the [`LinkHandler`] registered under that id.
//!
//! ## Key Components
//!
//! - [`LinkHandler`] - Capability invoked for a reserved link
//! - [`LinkRouter`] - Per-surface handler table and dispatch
//! - [`Dispatch`] - Outcome telling the surface whether to keep navigating
//! - [`LinkParams`] - Helper for handlers reading extra link parameters
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use feedlink::dispatch::{Dispatch, LinkRouter};
//!
//! let mut router = LinkRouter::new();
//! router.register("feed", Arc::new(|id: &str, link: &str| {
//!     println!("{id} -> {link}");
//! }));
//!
//! assert_eq!(
//!     router.dispatch("rssowl://feed/123"),
//!     Dispatch::Handled { id: "feed".to_string() },
//! );
//! assert_eq!(router.dispatch("http://example.com"), Dispatch::NotReserved);
//! ```

mod handler;
mod params;
mod router;

pub use handler::{HANDLER_PROTOCOL, LinkHandler, TracingHandler, handler_id};
pub use params::{LinkParams, ParamsError};
pub use router::{Dispatch, LinkRouter};

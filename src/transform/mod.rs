//! Link transformation for reading views
//!
//! A [`LinkTransformer`] rewrites a news item's link into the URL of some
//! external reading service by substituting the percent-encoded link into a
//! URL template. Transformers are collected once at startup into an immutable
//! [`TransformerRegistry`] that callers receive by reference.
//!
//! ## Example
//!
//! ```rust
//! use feedlink::transform::{LinkTransformer, TransformerRegistry};
//!
//! let registry = TransformerRegistry::builder()
//!     .contribute(LinkTransformer::new(
//!         "reader",
//!         "Reader",
//!         "https://reader.example/view?url=[L]",
//!     ))
//!     .build();
//!
//! let transformer = registry.get("reader").unwrap();
//! assert_eq!(
//!     transformer.to_transformed_url(Some("http://a.com/p?q=1&r=2")),
//!     "https://reader.example/view?url=http%3A%2F%2Fa.com%2Fp%3Fq%3D1%26r%3D2",
//! );
//! ```

mod encode;
mod registry;
mod transformer;

pub use encode::{is_set, url_encode};
pub use registry::{RegistryError, TransformerRegistry, TransformerRegistryBuilder};
pub use transformer::LinkTransformer;

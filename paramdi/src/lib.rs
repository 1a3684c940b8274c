#![doc = include_str!("./docs/lib.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arguments;
mod error;
mod macros;
mod module;
mod registration;
mod registry;
mod resolver;
mod ty;

pub use arguments::*;
pub use error::*;
pub use module::*;
pub use registration::*;
pub use registry::*;
pub use resolver::*;
pub use ty::*;

/// Generate an [`Injectable`] implementation for a struct, or for an
/// inherent `impl` block with one associated function marked `#[di]`.
#[doc = ""]
#[doc = include_str!("./docs/attribute_macro.md")]
#[cfg_attr(docsrs, doc(cfg(feature = "paramdi-macro")))]
#[cfg(feature = "paramdi-macro")]
pub use paramdi_macro::Injectable;

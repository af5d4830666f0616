//! `stools` is a small, modular toolkit for reading the files used and
//! produced by the Stella radiation hydrodynamics code
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use stools_utils as utils;

#[cfg(feature = "eve")]
#[cfg_attr(docsrs, doc(cfg(feature = "eve")))]
#[doc(inline)]
pub use stools_eve as eve;

#[cfg(feature = "swd")]
#[cfg_attr(docsrs, doc(cfg(feature = "swd")))]
#[doc(inline)]
pub use stools_swd as swd;

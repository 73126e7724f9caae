//! `ngatools` is a modular toolkit for reading and visualising NGA restart
//! and volume data files
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ngatools_utils as utils;

#[cfg(feature = "data")]
#[cfg_attr(docsrs, doc(cfg(feature = "data")))]
#[doc(inline)]
pub use ngatools_data as data;

#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
#[doc(inline)]
pub use ngatools_plot as plot;

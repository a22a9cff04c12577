#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `nightmap-rs` batch-generates annotated expedition map images.
//!
//! Each row of a pattern table becomes one map: a category background with
//! event, boss, treasure and reward overlays, day markers, construct icons,
//! and labels drawn on top.
//!
pub use nightmap_internal::*;

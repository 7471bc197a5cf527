//! # econ_models: Peer Valuation Models (Layer 2)
//!
//! Statement-driven valuation utilities that sit beside the economy
//! simulator and share only the Layer 1 error types:
//!
//! - `dcf`: two-stage discounted cash flow (DCF-lite) equity value
//! - `scoring`: weighted five-category equity scoring rubric
//!
//! ## Usage Example
//!
//! ```rust
//! use econ_models::scoring::{total_weighted_score, StockInputs};
//!
//! let inputs = StockInputs {
//!     price: Some(100.0),
//!     shares_outstanding: Some(1_000.0),
//!     fcf_ttm: Some(6_000.0),
//!     ..StockInputs::default()
//! };
//!
//! let card = total_weighted_score(&inputs).unwrap();
//! assert!(!card.valuation.fallback);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod dcf;
pub mod scoring;

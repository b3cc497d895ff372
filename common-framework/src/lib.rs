//! Common Framework
//!
//! Source-position bookkeeping shared by the parser framework.

pub mod position;

pub use position::Position;

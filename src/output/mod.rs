//! Result reporting
//!
//! - **text**: console report (request preview, head position, totals)
//! - **json**: machine-readable report file

pub mod json;
pub mod text;

//! Portfolio module - valuation of the current holdings snapshot.

pub mod valuation;

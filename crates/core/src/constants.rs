/// Base currency for all stored amounts. The system is single-currency:
/// the column is persisted but never used in conversion logic.
pub const DEFAULT_CURRENCY: &str = "USD";

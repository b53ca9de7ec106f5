/// Statement-level parsing.
///
/// Walks the grouped lines, turning each into a statement and attaching
/// nested groups to their `while`/`if` headers.
pub mod core;

/// Expression parsing.
///
/// Implements precedence climbing over the three operator bands, the
/// two-character operator upgrades, and atoms with chained call suffixes.
pub mod expression;

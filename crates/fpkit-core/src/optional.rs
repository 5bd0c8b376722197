/// Combine two optional values.
///
/// Returns `None` if either input is absent, otherwise
/// `Some(combine(x, y))`.
pub fn chain_optional<X, Y, Z, F>(a: Option<X>, b: Option<Y>, combine: F) -> Option<Z>
where
    F: FnOnce(X, Y) -> Z,
{
    a.and_then(|x| b.map(|y| combine(x, y)))
}

/// Add two optional integers. An overflowing sum is treated as absent.
pub fn add_optionals(x: Option<i64>, y: Option<i64>) -> Option<i64> {
    chain_optional(x, y, i64::checked_add).flatten()
}

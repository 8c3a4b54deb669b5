#[macro_export]
macro_rules! Impl_to_PyErr {
    (for $($t:ty),+) => {
        $(impl From<$t> for PyErr {
            fn from(err: $t) -> Self {
                pyo3::exceptions::PyValueError::new_err(format!("{}", err))
            }
        }
        )*
    }
}

/// Returns `Err(SizeMismatch)` from the enclosing method
/// if `$values` doesn't have `$expected` items.
#[macro_export]
macro_rules! ensure_len {
    ($values:expr, $expected:expr) => {
        if $values.len() != $expected {
            return Err($crate::SizeMismatch {
                expected: $expected,
                got: $values.len(),
            });
        }
    };
}

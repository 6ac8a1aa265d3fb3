use std::fmt::Debug;

use eyre::{eyre, Result};

/// T values are float numbers
pub trait Float: ::num::Float + Debug + Default {}

impl<T: ::num::Float + Debug + Default> Float for T {}

/// Convert a grid offset (row/column index) into a float value.
pub fn offset<T: Float>(offset: usize) -> Result<T> {
    T::from(offset).ok_or_else(|| {
        eyre!(
            "Offset {} is not representable by {}",
            offset,
            std::any::type_name::<T>()
        )
    })
}

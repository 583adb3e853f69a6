use std::marker::PhantomData;

use crate::errors::FilterError;
use crate::traits::{IMUFilter, IMUSample};

/// Returns the samples untouched.
#[derive(Clone, Debug, Default)]
pub struct Passthrough<T> {
    _phantom_data: PhantomData<T>,
}

impl<T> Passthrough<T> {
    pub fn new() -> Self {
        Self {
            _phantom_data: PhantomData,
        }
    }
}

impl<T, U> IMUFilter<U> for Passthrough<T>
where
    U: IMUSample<Untimed = T>,
{
    fn filter_batch(&mut self, samples: Vec<U>) -> Result<Vec<U>, FilterError> {
        if samples.is_empty() {
            return Err(FilterError::NoSamples);
        }
        Ok(samples)
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adapters turning user key functions into the fallible form operators store.

use gatherflux_core::{IntoGatherError, Result};

pub(crate) fn lift<T, K>(key: impl Fn(&T) -> K) -> impl Fn(&T) -> Result<K> {
    move |element| Ok(key(element))
}

pub(crate) fn lift_fallible<T, K, E>(
    key: impl Fn(&T) -> core::result::Result<K, E>,
) -> impl Fn(&T) -> Result<K>
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |element| key(element).map_err(IntoGatherError::into_gather_error)
}

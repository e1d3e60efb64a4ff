// Tri-state field helper for partial updates
//
// `Option<Option<T>>` with `#[serde(default, deserialize_with = "nullable::deserialize")]`:
// missing key -> None, explicit null -> Some(None), value -> Some(Some(v)).

use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

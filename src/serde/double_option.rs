use serde::{Deserialize, Deserializer};

/// Deserializer for fields where an absent key and an explicit `null`
/// mean different things. Pair with `#[serde(default)]`: a missing key
/// stays `None`, `null` becomes `Some(None)`, a value `Some(Some(_))`.
pub fn deserialize<'de, T, D>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

use serde::{Deserialize, Deserializer};

/// Identifier that the services send either as a number or a string
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum AnyId {
    Number(i64),
    Text(String),
}

impl From<AnyId> for String {
    fn from(id: AnyId) -> Self {
        match id {
            AnyId::Number(n) => n.to_string(),
            AnyId::Text(s) => s,
        }
    }
}

pub(crate) fn id_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    AnyId::deserialize(deserializer).map(String::from)
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three-field value stored in the distributed map.
///
/// Immutable once constructed: fields are set verbatim by [`Record::new`]
/// and only exposed through read-only accessors. No validation is performed
/// on `text` content or `number` range — the codec accepts the full `i32`
/// range and arbitrary UTF-8, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    number: i32,
    text: String,
    id: Uuid,
}

impl Record {
    pub fn new(number: i32, text: impl Into<String>, id: Uuid) -> Self {
        Self {
            number,
            text: text.into(),
            id,
        }
    }

    #[inline]
    pub fn number(&self) -> i32 {
        self.number
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }
}

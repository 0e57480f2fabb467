//! Serializer registry through which the map layer reaches the codec.
//!
//! The map stores heterogeneous values; each value type registers one
//! [`Serializer`] carrying a stable type tag. On a put the registry resolves
//! the serializer by inspecting the value (highest priority wins when
//! several claim it); on a get it resolves by the tag the map stored next to
//! the bytes. Transporting the bytes and the tag is the map's job — the
//! registry owns neither storage nor networking.

use std::any::Any;
use std::sync::Arc;

use tracing::debug;

use crate::codec::RecordCodec;
use crate::error::{CodecError, Result};
use crate::record::Record;

/// Stable type tag under which [`Record`] values are registered.
pub const RECORD_TYPE_TAG: u8 = 10;

/// One value type's bridge between the map layer and its codec.
pub trait Serializer: Send + Sync {
    /// Stable tag stored by the map next to the encoded bytes.
    fn type_tag(&self) -> u8;

    /// Resolution rank when several serializers claim the same value;
    /// higher wins.
    fn priority(&self) -> i32 {
        0
    }

    /// Whether this serializer handles `value`.
    fn can_handle(&self, value: &dyn Any) -> bool;

    fn encode(&self, value: &dyn Any) -> Result<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn Any>>;
}

/// Owns the registered serializers and resolves them by tag or by value.
#[derive(Default)]
pub struct SerializerRegistry {
    serializers: Vec<Arc<dyn Serializer>>,
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `serializer`, rejecting duplicate type tags.
    pub fn register(&mut self, serializer: Arc<dyn Serializer>) -> Result<()> {
        let tag = serializer.type_tag();
        if self.serializers.iter().any(|s| s.type_tag() == tag) {
            return Err(CodecError::Configuration(format!(
                "type tag {} is already registered",
                tag
            )));
        }
        debug!(tag, priority = serializer.priority(), "registered serializer");
        self.serializers.push(serializer);
        Ok(())
    }

    /// Resolve by the tag stored next to the bytes.
    pub fn by_tag(&self, tag: u8) -> Option<&Arc<dyn Serializer>> {
        self.serializers.iter().find(|s| s.type_tag() == tag)
    }

    /// Resolve the highest-priority serializer claiming `value`.
    pub fn for_value(&self, value: &dyn Any) -> Option<&Arc<dyn Serializer>> {
        self.serializers
            .iter()
            .filter(|s| s.can_handle(value))
            .max_by_key(|s| s.priority())
    }
}

/// [`Serializer`] for [`Record`] values, delegating to a [`RecordCodec`].
pub struct RecordSerializer {
    codec: RecordCodec,
}

impl RecordSerializer {
    pub fn new(codec: RecordCodec) -> Self {
        Self { codec }
    }
}

impl Serializer for RecordSerializer {
    fn type_tag(&self) -> u8 {
        RECORD_TYPE_TAG
    }

    fn priority(&self) -> i32 {
        1000
    }

    fn can_handle(&self, value: &dyn Any) -> bool {
        value.is::<Record>()
    }

    fn encode(&self, value: &dyn Any) -> Result<Vec<u8>> {
        let record = value.downcast_ref::<Record>().ok_or_else(|| {
            CodecError::Encoding("value handed to RecordSerializer is not a Record".into())
        })?;
        self.codec.encode(record)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn Any>> {
        Ok(Box::new(self.codec.decode(bytes)?))
    }
}

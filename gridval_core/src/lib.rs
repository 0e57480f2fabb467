pub mod codec;
pub mod compress;
pub mod error;
pub mod record;
pub mod registry;
pub mod wire;

pub use codec::RecordCodec;
pub use compress::{Compression, Compressor};
pub use error::{CodecError, Result};
pub use record::Record;
pub use registry::{RecordSerializer, Serializer, SerializerRegistry, RECORD_TYPE_TAG};
pub use wire::{FIXED_PREFIX_LEN, ID_LEN, LEN_PREFIX_LEN, NUMBER_LEN};

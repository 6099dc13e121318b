pub mod model;
pub mod range;
pub mod ring;
pub mod types;

pub use model::BitModel;
pub use range::{ByteSink, ByteSource, RangeDecoder, RangeEncoder};
pub use ring::{CyclicBuffer, CyclicDeque};
pub use types::*;

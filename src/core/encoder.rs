use std::io::Write;

use serde::Serialize;

use crate::error::FormatError;

/// Turns a value into the bytes of one target format and writes them to a sink.
///
/// Implementations are stateless: one instance can be reused for any number of
/// calls. The sink belongs to the caller, encoders never flush or close it.
pub trait Encoder {
    /// Short identifier of the produced format, e.g. `"json"`.
    fn name(&self) -> &'static str;

    /// Encodes `data` and writes the result to `sink`.
    ///
    /// `data` is serialized as is: every number keeps its own type, so an
    /// `f32` is written with `f32` precision and a `u128` in full.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Encode`] when `data` has no representation in the
    /// target format, [`FormatError::Type`] when its shape does not suit the
    /// encoder and [`FormatError::Io`] when the sink fails.
    fn transform<T>(&self, data: &T, sink: &mut dyn Write) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized;
}

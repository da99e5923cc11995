use std::{collections::HashMap, io::Write};

use log::debug;
use serde::Serialize;

use crate::error::FormatError;
#[cfg(feature = "csv")]
use crate::format::csv::CsvEncoder;
#[cfg(feature = "json")]
use crate::format::json::JsonEncoder;

use super::encoder::Encoder;

/// An encoder instance bound to a registry entry.
///
/// Calling [`Encoder::transform`] on it serializes the value straight into the
/// target format and hands any error back to the caller.
#[derive(Debug, Clone)]
pub enum BoundEncoder {
    #[cfg(feature = "json")]
    Json(JsonEncoder),
    #[cfg(feature = "csv")]
    Csv(CsvEncoder),
}

impl Encoder for BoundEncoder {
    fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "json")]
            BoundEncoder::Json(ref encoder) => encoder.name(),
            #[cfg(feature = "csv")]
            BoundEncoder::Csv(ref encoder) => encoder.name(),
        }
    }

    #[allow(unused_variables)]
    fn transform<T>(&self, data: &T, sink: &mut dyn Write) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
    {
        match *self {
            #[cfg(feature = "json")]
            BoundEncoder::Json(ref encoder) => encoder.transform(data, sink),
            #[cfg(feature = "csv")]
            BoundEncoder::Csv(ref encoder) => encoder.transform(data, sink),
        }
    }
}

/// Maps a format identifier to the encoder producing that format.
///
/// Built once, read-only afterwards. Errors raised by the encoders are handed
/// back to the caller.
#[derive(Debug)]
pub struct FormatRegistry {
    encoders: HashMap<&'static str, BoundEncoder>,
}

impl FormatRegistry {
    /// Registry holding every compiled-in format with its default settings.
    pub fn build() -> FormatRegistry {
        FormatRegistryBuilder::new().build()
    }

    /// Looks up the encoder registered under `id`.
    pub fn get(&self, id: &str) -> Option<&BoundEncoder> {
        let encoder = self.encoders.get(id);
        if encoder.is_none() {
            debug!("No format registered under {:?}", id);
        }
        encoder
    }

    /// Whether a format is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.encoders.contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn formats(&self) -> Vec<&'static str> {
        let mut formats: Vec<&'static str> = self.encoders.keys().copied().collect();
        formats.sort_unstable();
        formats
    }

    /// Serializes `data` and writes it to `sink` in the format registered
    /// under `id`.
    ///
    /// Returns `None` when no such format exists, otherwise the outcome of the
    /// transform.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        id: &str,
        data: &T,
        sink: &mut dyn Write,
    ) -> Option<Result<(), FormatError>> {
        let encoder = self.get(id)?;
        Some(encoder.transform(data, sink))
    }
}

/// Configures the encoders a [`FormatRegistry`] is built with.
#[derive(Default)]
pub struct FormatRegistryBuilder {
    #[cfg(feature = "json")]
    json: JsonEncoder,
    #[cfg(feature = "csv")]
    csv: CsvEncoder,
}

impl FormatRegistryBuilder {
    /// Builder with default encoders.
    pub fn new() -> FormatRegistryBuilder {
        FormatRegistryBuilder::default()
    }

    /// Encoder bound to `"json"`.
    #[cfg(feature = "json")]
    pub fn json(mut self, encoder: JsonEncoder) -> FormatRegistryBuilder {
        self.json = encoder;
        self
    }

    /// Encoder bound to `"csv"`.
    #[cfg(feature = "csv")]
    pub fn csv(mut self, encoder: CsvEncoder) -> FormatRegistryBuilder {
        self.csv = encoder;
        self
    }

    pub fn build(self) -> FormatRegistry {
        #[allow(unused_mut)]
        let mut encoders = HashMap::new();

        #[cfg(feature = "json")]
        encoders.insert(self.json.name(), BoundEncoder::Json(self.json));
        #[cfg(feature = "csv")]
        encoders.insert(self.csv.name(), BoundEncoder::Csv(self.csv));

        let registry = FormatRegistry { encoders };
        debug!("Format registry built with {:?}", registry.formats());
        registry
    }
}

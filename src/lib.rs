#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Record Format

 Write in-memory records as **JSON** or **CSV** to any `std::io::Write` sink,
 choosing the format by name at run time.

 ## Core Concepts

- **Encoder:** transforms a value and writes the encoded bytes to a sink. There
  is one implementation per format, `JsonEncoder` and `CsvEncoder`.
- **FormatRegistry:** maps a format identifier (`"json"`, `"csv"`) to a
  transform bound to one encoder instance.
- **Record:** any type implementing `serde::Serialize` as a struct. The derive
  fixes the field list and its order, which is the order used in both formats.

 ## Features

| **Feature** | **Description**                                  |
|-------------|--------------------------------------------------|
| json        | Enables the JSON encoder and its registry entry  |
| csv         | Enables the CSV encoder and its registry entry   |
| full        | Enables all available features                   |

Both `json` and `csv` are enabled by default.

 ## Getting Started

```rust
# use serde::Serialize;
# use record_format::{core::registry::FormatRegistry, error::FormatError};
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Human {
    name: String,
    age: u32,
    location: String,
}

fn main() -> Result<(), FormatError> {
    let registry = FormatRegistry::build();
    let human = Human {
        name: "John".to_string(),
        age: 21,
        location: "NYC".to_string(),
    };

    let mut json = Vec::new();
    if let Some(result) = registry.write("json", &human, &mut json) {
        result?;
    }
    assert_eq!(json, br#"{"Name":"John","Age":21,"Location":"NYC"}"#);

    let mut csv = Vec::new();
    if let Some(result) = registry.write("csv", &[human], &mut csv) {
        result?;
    }
    assert_eq!(csv, b"John,21,NYC\n");

    assert!(registry.get("xml").is_none());
    Ok(())
}
```

 ## Errors

Every operation returns [`FormatError`]:

- `Type`: the value does not have the shape the encoder needs, e.g. CSV input
  that is not a sequence of records.
- `Encode`: the value cannot be represented in the target format.
- `Io`: the sink rejected a write. Bytes already written are not rolled back.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Encoder capability and format registry
pub mod core;

/// Error types for format operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of encoders (json and csv)
pub mod format;

use std::{fs::File, io::Cursor};

use log::info;
use record_format::{
    core::{encoder::Encoder, registry::FormatRegistry},
    error::FormatError,
};
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct Human {
    name: String,
    age: i32,
    location: String,
}

impl Human {
    fn new(name: &str, age: i32, location: &str) -> Self {
        Human {
            name: name.to_string(),
            age,
            location: location.to_string(),
        }
    }
}

fn main() -> Result<(), FormatError> {
    env_logger::init();

    let registry = FormatRegistry::build();
    let human = Human::new("John", 21, "NYC");

    let mut file = File::create("./test.txt")?;
    if let Some(json) = registry.get("json") {
        json.transform(&human, &mut file)?;
        info!("Wrote {:?} to ./test.txt", human);
    }

    let mut buffer = Cursor::new(Vec::new());
    if let Some(result) = registry.write("json", &human, &mut buffer) {
        result?;
    }
    println!("{}", String::from_utf8_lossy(buffer.get_ref()));

    let humans = vec![human, Human::new("Doe, John", 5, "LA")];
    let mut buffer = Vec::new();
    if let Some(result) = registry.write("csv", &humans, &mut buffer) {
        result?;
    }
    print!("{}", String::from_utf8_lossy(&buffer));

    Ok(())
}

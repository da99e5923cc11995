#![allow(dead_code)]

pub mod mocks;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Human {
    pub name: String,
    pub age: i32,
    pub location: String,
}

impl Human {
    pub fn new(name: &str, age: i32, location: &str) -> Self {
        Human {
            name: name.to_string(),
            age,
            location: location.to_string(),
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

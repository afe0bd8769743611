/// Builds the greeting for a given name.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Stateless arithmetic helper behind the `/calculate` endpoint.
pub struct Calculator;

impl Calculator {
    pub fn add(a: i64, b: i64) -> i64 {
        a + b
    }
}

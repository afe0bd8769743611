use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Person;

/// A simple greeting response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    pub message: String,
}

/// Query parameters for adding two numbers.
#[derive(Deserialize, IntoParams)]
pub struct CalculateParams {
    pub a: i64,
    pub b: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CalculateResult {
    pub result: i64,
}

/// Query parameters for creating a person. No validation beyond the types:
/// an empty name or a negative age is accepted as-is.
#[derive(Deserialize, IntoParams)]
pub struct CreatePersonParams {
    pub name: String,
    pub age: i32,
}

/// Wire representation of a person.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl From<Person> for PersonDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            age: p.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_dto_serializes_all_fields() {
        let dto = PersonDto {
            id: 1,
            name: "Alice".to_string(),
            age: 30,
        };

        let json_value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&dto).unwrap()).unwrap();

        assert_eq!(json_value["id"], 1);
        assert_eq!(json_value["name"], "Alice");
        assert_eq!(json_value["age"], 30);
    }

    #[test]
    fn person_dto_maps_from_domain() {
        let person = Person {
            id: 7,
            name: "Bob".to_string(),
            age: -1,
        };
        let dto = PersonDto::from(person);
        assert_eq!(dto.id, 7);
        assert_eq!(dto.age, -1);
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::domain::{Person, PersonRepository};

use super::entity::{self, Entity as PersonEntity};

impl From<entity::Model> for Person {
    fn from(row: entity::Model) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

/// sea-orm backed repository. Each call checks a connection out of the pool
/// for just that operation, so the session never outlives the request.
pub struct SeaOrmPersonRepository {
    db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn insert(&self, name: &str, age: i32) -> anyhow::Result<Person> {
        let row = entity::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_owned()),
            age: ActiveValue::Set(age),
        };

        // `insert` commits and returns the row as persisted, id included.
        let model = row.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Person>> {
        let result = PersonEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Into::into))
    }
}

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use super::entity;

/// Location of the service database. Fixed local path, not configurable.
pub const DATABASE_URL: &str = "sqlite://./test.db?mode=rwc";

pub async fn connect(url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(url).await?;
    Ok(db)
}

/// Creates the `person` table if it does not exist yet. Safe to run on every
/// startup; there is no migration mechanism beyond this.
pub async fn create_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

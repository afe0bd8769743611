use async_trait::async_trait;

/// A person record as the domain sees it, independent of the storage row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Persistence seam for `Person`. Handlers only see this trait; the sea-orm
/// implementation lives in `storage`.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Inserts a new row and returns the persisted record, including the
    /// id assigned by the database.
    async fn insert(&self, name: &str, age: i32) -> anyhow::Result<Person>;

    /// Primary-key lookup. `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Person>>;
}

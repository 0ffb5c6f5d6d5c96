//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateFields, User, UserFilter};
use crate::repository::{SortSpec, UserRepository};

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoUserRepository::new(&db);
    /// ```
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<User>("users");
        Self { collection }
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    /// Ensure the index backing the fixed listing sort exists
    pub async fn create_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder().keys(doc! { "fname": 1 }).build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Build a MongoDB filter document from UserFilter
    fn build_filter(filter: &UserFilter) -> Document {
        let mut doc = doc! {};

        if let Some(active) = filter.active {
            doc.insert("active", active);
        }

        if let Some(ref user_type) = filter.user_type {
            doc.insert("userType", user_type.to_string());
        }

        doc
    }

    /// Build the `$set` document for a partial update
    fn build_update(fields: &UpdateFields) -> Document {
        let mut set = doc! {};

        if let Some(ref first_name) = fields.first_name {
            set.insert("fname", first_name);
        }

        if let Some(ref last_name) = fields.last_name {
            set.insert("lname", last_name);
        }

        set
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    async fn insert(&self, input: CreateUser) -> UserResult<Uuid> {
        let user = User::new(input);

        self.collection.insert_one(&user).await?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user.id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self, fields))]
    async fn update_by_id(&self, id: Uuid, fields: UpdateFields) -> UserResult<u64> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        // The server rejects an empty $set, so an empty field set degenerates
        // to a pure match count
        if fields.is_empty() {
            let matched = self.collection.count_documents(filter).await?;
            return Ok(matched);
        }

        let update = doc! { "$set": Self::build_update(&fields) };
        let result = self.collection.update_one(filter, update).await?;

        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> UserResult<u64> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    #[instrument(skip(self))]
    async fn find_many(
        &self,
        filter: UserFilter,
        sort: SortSpec,
        skip: u64,
        limit: i64,
    ) -> UserResult<Vec<User>> {
        use futures::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        // The sort field is dynamic, so doc! with its literal keys won't do
        let mut sort_doc = Document::new();
        sort_doc.insert(sort.field, sort.direction.as_i32());

        // A limit of 0 means no cap, which matches the server's reading of it
        let options = mongodb::options::FindOptions::builder()
            .limit(limit)
            .skip(skip)
            .sort(sort_doc)
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users)
    }
}

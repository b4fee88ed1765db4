use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::Result;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Client, Collection};

pub struct ToyRepository {
    collection: Collection<Document>,
}

impl ToyRepository {
    pub fn new(client: &Client) -> Self {
        let db = client.database("toyTopiaDB");
        let collection = db.collection::<Document>("toys");
        ToyRepository { collection }
    }

    // No filter, no pagination; order is whatever the storage engine yields.
    pub async fn get_all_toys(&self) -> Result<Vec<Document>> {
        let mut cursor = self.collection.find(None, None).await?;
        let mut toys = Vec::new();
        while let Some(toy) = cursor.try_next().await? {
            toys.push(toy);
        }
        Ok(toys)
    }

    pub async fn find_toy_by_id(&self, id: ObjectId) -> Result<Option<Document>> {
        let filter = doc! { "_id": id };
        self.collection.find_one(filter, None).await
    }

    pub async fn add_toy(&self, new_toy: Document) -> Result<InsertOneResult> {
        self.collection.insert_one(new_toy, None).await
    }

    // $set merge: only the supplied fields are overwritten.
    pub async fn update_toy(&self, id: ObjectId, changes: Document) -> Result<UpdateResult> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": changes };
        self.collection.update_one(filter, update, None).await
    }

    pub async fn delete_toy(&self, id: ObjectId) -> Result<DeleteResult> {
        let filter = doc! { "_id": id };
        self.collection.delete_one(filter, None).await
    }
}

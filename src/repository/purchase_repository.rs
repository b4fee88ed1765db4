use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::Result;
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Client, Collection};

pub struct PurchaseRepository {
    collection: Collection<Document>,
}

impl PurchaseRepository {
    pub fn new(client: &Client) -> Self {
        let db = client.database("toyTopiaDB");
        let collection = db.collection::<Document>("purchases");
        PurchaseRepository { collection }
    }

    pub async fn add_purchase(&self, new_purchase: Document) -> Result<InsertOneResult> {
        self.collection.insert_one(new_purchase, None).await
    }

    // Absent email leaves the filter empty and matches the whole collection.
    pub async fn get_purchases(&self, email: Option<&str>) -> Result<Vec<Document>> {
        let filter = email.map(|email| doc! { "email": email });
        let mut cursor = self.collection.find(filter, None).await?;
        let mut purchases = Vec::new();
        while let Some(purchase) = cursor.try_next().await? {
            purchases.push(purchase);
        }
        Ok(purchases)
    }

    pub async fn delete_purchase(&self, id: ObjectId) -> Result<DeleteResult> {
        let filter = doc! { "_id": id };
        self.collection.delete_one(filter, None).await
    }
}

use std::env;

use mongodb::bson::doc;
use mongodb::error::Result;
use mongodb::{options::ClientOptions, Client};

pub fn mongo_uri() -> String {
    env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

/// Builds the shared client and pings the deployment so a dead database is
/// caught before the listener binds.
pub async fn setup_mongo() -> Result<Client> {
    let mut client_options = ClientOptions::parse(mongo_uri()).await?;
    client_options.app_name = Some("toytopia-backend".to_string());
    let client = Client::with_options(client_options)?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await?;
    Ok(client)
}

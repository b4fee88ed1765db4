#[macro_use]
extern crate rocket;

mod config;
mod models;
mod repository;

use std::env;

use config::mongo_config::setup_mongo;
use models::ack::{DeleteAck, InsertAck, UpdateAck};
use models::document::with_string_id;
use mongodb::bson::{oid::ObjectId, Document};
use repository::purchase_repository::PurchaseRepository;
use repository::toy_repository::ToyRepository;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket, State};

pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization",
        ));
    }
}

#[options("/<_path..>")]
fn all_options(_path: std::path::PathBuf) -> Status {
    Status::Ok
}

// Bad hex is a generic failure, not a distinct error kind.
fn parse_object_id(id: &str) -> Result<ObjectId, Status> {
    ObjectId::parse_str(id).map_err(|e| {
        eprintln!("Malformed id '{}': {:?}", id, e);
        Status::InternalServerError
    })
}

#[get("/")]
fn index() -> &'static str {
    "Toy Topia Backend is Running"
}

#[get("/toys")]
async fn get_all_toys(toy_repo: &State<ToyRepository>) -> Result<Json<Vec<Document>>, Status> {
    match toy_repo.get_all_toys().await {
        Ok(toys) => Ok(Json(toys.into_iter().map(with_string_id).collect())),
        Err(e) => {
            eprintln!("Error listing toys: {:?}", e);
            Err(Status::InternalServerError)
        }
    }
}

// Missing toy is not an error: the body is JSON null.
#[get("/toys/<id>")]
async fn get_toy(
    toy_repo: &State<ToyRepository>,
    id: &str,
) -> Result<Json<Option<Document>>, Status> {
    let oid = parse_object_id(id)?;
    match toy_repo.find_toy_by_id(oid).await {
        Ok(toy) => Ok(Json(toy.map(with_string_id))),
        Err(e) => {
            eprintln!("Error fetching toy {}: {:?}", id, e);
            Err(Status::InternalServerError)
        }
    }
}

#[post("/toys", format = "json", data = "<new_toy>")]
async fn add_toy(
    toy_repo: &State<ToyRepository>,
    new_toy: Json<Document>,
) -> Result<Json<InsertAck>, Status> {
    match toy_repo.add_toy(new_toy.into_inner()).await {
        Ok(result) => Ok(Json(InsertAck::from(result))),
        Err(e) => {
            eprintln!("Error inserting toy: {:?}", e);
            Err(Status::InternalServerError)
        }
    }
}

#[put("/toys/<id>", format = "json", data = "<changes>")]
async fn update_toy(
    toy_repo: &State<ToyRepository>,
    id: &str,
    changes: Json<Document>,
) -> Result<Json<UpdateAck>, Status> {
    let oid = parse_object_id(id)?;
    match toy_repo.update_toy(oid, changes.into_inner()).await {
        Ok(result) => Ok(Json(UpdateAck::from(result))),
        Err(e) => {
            eprintln!("Error updating toy {}: {:?}", id, e);
            Err(Status::InternalServerError)
        }
    }
}

#[delete("/toys/<id>")]
async fn delete_toy(toy_repo: &State<ToyRepository>, id: &str) -> Result<Json<DeleteAck>, Status> {
    let oid = parse_object_id(id)?;
    match toy_repo.delete_toy(oid).await {
        Ok(result) => Ok(Json(DeleteAck::from(result))),
        Err(e) => {
            eprintln!("Error deleting toy {}: {:?}", id, e);
            Err(Status::InternalServerError)
        }
    }
}

#[post("/purchases", format = "json", data = "<new_purchase>")]
async fn add_purchase(
    purchase_repo: &State<PurchaseRepository>,
    new_purchase: Json<Document>,
) -> Result<Json<InsertAck>, Status> {
    match purchase_repo.add_purchase(new_purchase.into_inner()).await {
        Ok(result) => Ok(Json(InsertAck::from(result))),
        Err(e) => {
            eprintln!("Error inserting purchase: {:?}", e);
            Err(Status::InternalServerError)
        }
    }
}

#[get("/purchases?<email>")]
async fn get_purchases(
    purchase_repo: &State<PurchaseRepository>,
    email: Option<&str>,
) -> Result<Json<Vec<Document>>, Status> {
    match purchase_repo.get_purchases(email).await {
        Ok(purchases) => Ok(Json(purchases.into_iter().map(with_string_id).collect())),
        Err(e) => {
            eprintln!("Error listing purchases: {:?}", e);
            Err(Status::InternalServerError)
        }
    }
}

#[delete("/purchases/<id>")]
async fn delete_purchase(
    purchase_repo: &State<PurchaseRepository>,
    id: &str,
) -> Result<Json<DeleteAck>, Status> {
    let oid = parse_object_id(id)?;
    match purchase_repo.delete_purchase(oid).await {
        Ok(result) => Ok(Json(DeleteAck::from(result))),
        Err(e) => {
            eprintln!("Error deleting purchase {}: {:?}", id, e);
            Err(Status::InternalServerError)
        }
    }
}

#[catch(404)]
fn not_found(req: &Request) -> String {
    format!("404: '{}' route not found", req.uri())
}

fn build_rocket(client: &mongodb::Client, figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(ToyRepository::new(client))
        .manage(PurchaseRepository::new(client))
        .attach(CORS)
        .mount(
            "/",
            routes![
                index,
                all_options,
                get_all_toys,
                get_toy,
                add_toy,
                update_toy,
                delete_toy,
                add_purchase,
                get_purchases,
                delete_purchase,
            ],
        )
        .register("/", catchers![not_found])
}

#[launch]
async fn rocket() -> _ {
    dotenvy::dotenv().ok();

    // Connect (and ping) first, bind the listener only on success.
    let client = match setup_mongo().await {
        Ok(client) => {
            println!("MongoDB Connected Successfully");
            client
        }
        Err(e) => {
            eprintln!("Database connection error: {:?}", e);
            std::process::exit(1);
        }
    };

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    build_rocket(&client, figment)
}

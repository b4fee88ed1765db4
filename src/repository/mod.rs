pub mod purchase_repository;
pub mod toy_repository;

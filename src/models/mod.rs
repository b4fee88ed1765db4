pub mod ack;
pub mod document;

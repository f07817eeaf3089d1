pub mod client;

pub use client::MedSageClient;
pub use reqwest::{multipart, Method};

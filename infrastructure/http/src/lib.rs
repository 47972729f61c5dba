pub mod cart_service;
pub mod catalog_service;
pub mod client;
mod dto;
mod response;
#[cfg(test)]
mod test_server;

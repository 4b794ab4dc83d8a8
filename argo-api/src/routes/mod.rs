pub mod api_docs;
pub mod applications;
pub mod health_check;

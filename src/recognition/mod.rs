pub mod adapter;
pub mod crop;
pub mod registry;
pub mod service;

pub use adapter::{OcrAdapter, RecognitionRequest};
pub use registry::AdapterRegistry;
pub use service::RecognitionService;

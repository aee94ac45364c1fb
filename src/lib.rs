pub mod cli;
pub mod config;
pub mod mapping_service;
pub mod models;
pub mod processing;
pub mod schema;
pub mod utils;

pub use config::MapperConfig;
pub use mapping_service::MappingService;
pub use models::{
    DocumentKind, FieldDescriptor, FieldSchema, FieldType, MappingRequest, MappingResponse, MappingResult, Target,
};
pub use utils::{MapperError, Result};

//! Application use cases. Orchestrate domain logic via ports.

pub mod publish_service;
pub mod template_service;

pub use publish_service::PublishService;
pub use template_service::TemplateService;

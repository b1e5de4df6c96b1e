mod parser;
mod resolver;

pub use parser::TemplateSpec;
pub use resolver::{Resolution, TemplateIdentifier, TemplateResolver, DEFAULT_TEMPLATE};

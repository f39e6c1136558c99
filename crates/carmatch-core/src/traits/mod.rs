mod catalog;
mod climate;
mod extractor;

pub use catalog::ICatalogStore;
pub use climate::IClimateLookup;
pub use extractor::{
    ChatMessage, ChatRole, ExtractionContext, ExtractionSchema, Fragment, IProfileExtractor,
};

//! Knowledge Provider Adapters.

mod static_knowledge;

pub use static_knowledge::{KnowledgeEntry, StaticKnowledgeBase};

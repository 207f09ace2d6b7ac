pub mod grammar;
pub mod processor;
pub mod store;
pub mod tagger;
pub mod tokenizer;
pub mod translator;

pub use grammar::*;
pub use processor::*;
pub use store::*;
pub use tagger::*;
pub use tokenizer::*;
pub use translator::*;

//! Web search adapters implementing the context retriever port.

mod google;

pub use google::GoogleSearchRetriever;

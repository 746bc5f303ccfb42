pub mod analyzer;
pub mod ingest;
pub mod prompts;

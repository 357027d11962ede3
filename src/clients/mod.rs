pub mod paraphrase_client;

pub use paraphrase_client::ParaphraseClient;

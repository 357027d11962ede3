pub mod transport;

#[cfg(test)]
pub(crate) mod scripted;

pub use transport::ParaphraseTransport;

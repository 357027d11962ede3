pub mod observer;
pub mod paraphrase_flow;

pub use observer::FlowObserver;
pub use paraphrase_flow::ParaphraseFlow;

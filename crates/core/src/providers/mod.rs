pub mod traits;

// Quote feed implementations
pub mod http;

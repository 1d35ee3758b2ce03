mod message_catalog;

pub use message_catalog::*;

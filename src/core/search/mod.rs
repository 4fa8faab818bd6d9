pub mod client;
pub mod highlight;

pub use client::{SearchClient, Transport, UreqTransport};
pub use highlight::{Highlighted, Highlighter, Segment, highlight};

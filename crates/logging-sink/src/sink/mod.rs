mod message_sink;
mod router;

pub use message_sink::MessageSink;
pub use router::{BoxedWriter, SeverityRouter, default_routes};

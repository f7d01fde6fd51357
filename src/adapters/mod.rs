// Adapters layer: concrete implementations of the domain ports (XML input, report output).

pub mod sink;
pub mod xml;

pub use sink::{ConsoleSink, NullSink, WriterSink};
pub use xml::XmlCarLoader;

mod processor;

pub use processor::BatchConverter;

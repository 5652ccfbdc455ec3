pub mod batch;
pub mod convert;

pub use batch::BatchConverter;

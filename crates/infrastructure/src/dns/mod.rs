pub mod check;
pub mod resolver;

pub use check::check;
pub use resolver::HickoryRecordResolver;

pub mod date;
pub mod de;
pub mod value;

pub use date::*;
pub use value::*;

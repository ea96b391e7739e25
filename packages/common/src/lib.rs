pub mod callback;
pub mod color;
pub mod error;
pub mod props;
pub mod result;
pub mod value;

pub use callback::*;
pub use color::*;
pub use error::*;
pub use props::*;
pub use result::*;
pub use value::*;

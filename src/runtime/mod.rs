pub mod session;
pub mod value;

pub use session::{Report, ScriptError, Session};
pub use value::Value;

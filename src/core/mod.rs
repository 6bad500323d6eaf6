pub mod arithmetic;
pub mod session;

pub use crate::domain::model::{Calculation, Operator, Outcome};
pub use crate::domain::ports::{ConfigProvider, TokenSource};
pub use crate::utils::error::Result;

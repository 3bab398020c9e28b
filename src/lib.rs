pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;
pub mod presenter;

pub use crate::core::{
    calculate,
    InputId,
    InputValues,
    ResultSet,
    ShareMathError,
};
pub use presenter::Presenter;

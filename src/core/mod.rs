pub mod calculator;
pub mod errors;
pub mod format;
pub mod inputs;
pub mod markup;
pub mod metrics;

pub use calculator::{
    calculate,
    DerivedResult,
    ResultSet,
};
pub use errors::ShareMathError;
pub use inputs::{
    parse_amount,
    InputId,
    InputValues,
};
pub use markup::{
    HtmlFragment,
    ResultsTarget,
};
pub use metrics::{
    FieldDescriptor,
    MetricKey,
    ValueKind,
    DESCRIPTORS,
};

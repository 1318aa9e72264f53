pub mod engine;
pub mod interpretation;
pub mod numerology;
pub mod pipeline;
pub mod render;
pub mod report;

pub use crate::domain::model::{NumerologyReport, Settings, Subject};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

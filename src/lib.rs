pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::numerology::{
    alphabet_position, breakdown, clean_name, compute_life_path, compute_numerology, digital_root,
    letter_value, reduce_list, split_breakdown,
};
pub use crate::core::{engine::ReportEngine, pipeline::ReportPipeline};
pub use domain::model::{
    ExportFormat, LifePath, NameNumbers, NumerologyReport, NumerologySystem, Settings, Subject,
};
pub use utils::error::{NumerologyError, Result};

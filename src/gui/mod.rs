pub mod app;
pub mod error_modal;
pub mod input_form;
pub mod results_table;
pub mod settings;

pub use app::ShareMathApp;
pub use settings::SettingsData;

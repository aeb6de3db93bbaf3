pub mod app;
pub mod output;
pub mod utils;

pub use app::App;
pub use output::OutputFormat;

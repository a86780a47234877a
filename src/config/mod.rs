//! Configuration management.
//!
//! An optional TOML file adjusts where fixtures are found, which substitutes
//! are written and how logging behaves. Without a file every value falls back
//! to its built-in default.
//!
//! # Example Configuration
//!
//! ```toml
//! [fixtures]
//! dir = "tests/fixtures"
//! html_pattern = "curriculum_*.html"
//! json_pattern = "expected_output_*.json"
//!
//! [names]
//! new_firstname = "Max"
//! new_lastname = "Mustermann"
//!
//! [substitutes]
//! email = "max.mustermann@example.com"
//! student_id = "12345678"
//! start_year = 2023
//! end_year = 2025
//! max_grade_delay_days = 14
//! seed = 42
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! Values given on the command line take precedence over the file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config};
pub use schema::{FixtureConfig, FixturesConfig, LoggingConfig, NamesConfig, SubstitutesConfig};

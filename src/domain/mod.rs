//! Domain types for the fixture anonymizer.
//!
//! The domain layer provides:
//! - **Grade rules** ([`grade`]): the substitute grade set, the failing
//!   sentinel and the markers that are never rewritten
//! - **Dates** ([`FixtureDate`], [`DateRange`]): `DD.MM.YYYY` parsing and the
//!   range substitute dates are drawn from
//! - **Error types** ([`AnonymizerError`]) and the [`Result`] alias
//!
//! ```rust
//! use fixture_anonymizer::domain::{DateRange, FixtureDate};
//!
//! # fn example() -> fixture_anonymizer::domain::Result<()> {
//! let range = DateRange::from_years(2023, 2025)?;
//! let date = FixtureDate::parse("14.03.2024")?;
//! assert!(range.contains(&date));
//! # Ok(())
//! # }
//! ```

pub mod date;
pub mod errors;
pub mod grade;
pub mod result;

pub use date::{DateRange, FixtureDate};
pub use errors::AnonymizerError;
pub use result::Result;

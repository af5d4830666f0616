//! Reader for Stella `.rho` input models
//!
//! The `.rho` files describe the initial state of a Stella run as a table of
//! zones, usually found under `<stella_root>/eve/run`. This crate turns them
//! into a [Model] with labelled, unit-aware data.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use stools_eve::{read_rho, Element, Model};
//! use uom::si::mass_density::gram_per_cubic_centimeter;
//!
//! // Read the file
//! let model: Model = read_rho("path/to/model.rho").unwrap();
//!
//! // Corrected mass fractions and derived quantities
//! let nickel = model.x().get(Element::Ni56);
//! let density = model.rho().unwrap()[0].get::<gram_per_cubic_centimeter>();
//! ```
//!
//! ## File format
//!
//! ```text
//! line 1:  column labels, e.g. "Zone mass lg(R) lg(Rho) lg(Tp) u H He ... Ni Ni"
//! line 2:  <number of zones> <time (s)> [anything else is ignored]
//! line 3+: one row of whitespace-separated values per zone
//! ```
//!
//! Header labels are normalised before use (see [normalise_header()]).
//!
//! Composition columns hold log10 mass fractions for any of the 18 tracked
//! [Element]s. These are stored as linear mass fractions, and any species not
//! in the file is filled with zeros. Every other column is a state variable,
//! kept exactly as written and looked up by its canonical name (see
//! [canonical_field()]).
//!
//! ## Derived quantities
//!
//! Radius, enclosed mass, shell mass, velocity, density, and temperature are
//! computed when first asked for and cached. All are `uom` quantities.
//!
//! Mass fractions are available as read ([Model::x_raw]) or with the iron
//! fraction corrected for the radioactive species folded into it
//! ([Model::x]), along with the grouped sums in [Group].
#![doc = include_str!("../readme.md")]

mod composition;
mod element;
mod error;
mod grid;
mod header;
mod model;
mod parsers;
mod reader;

pub mod units;

#[doc(inline)]
pub use composition::Composition;

#[doc(inline)]
pub use element::{Element, Group};

#[doc(inline)]
pub use grid::Grid;

#[doc(inline)]
pub use header::{canonical_field, normalise_header, GridInfo};

#[doc(inline)]
pub use header::{LG_R, LG_RHO, LG_TP, MASS, VELOCITY};

#[doc(inline)]
pub use model::Model;

#[doc(inline)]
pub use error::{Error, Result};

use std::path::Path;

/// Read a Stella `.rho` file into a [Model]
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use stools_eve::{read_rho, Model};
/// let model: Model = read_rho("path/to/model.rho").unwrap();
/// ```
pub fn read_rho<P: AsRef<Path>>(path: P) -> Result<Model> {
    Model::from_file(path)
}

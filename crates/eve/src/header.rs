//! Header normalisation and grid metadata for `.rho` files
//!
//! The first line of a `.rho` file is a loosely formatted list of column
//! labels. Log quantities may be written as `lg R`, `lg(R)`, or `lgR`, and units
//! are sometimes tacked on in parentheses. The second line holds the number of
//! zones and the reference time.

// crate modules
use crate::parsers;
use crate::units::{self, Time};

// external crates
use log::{trace, warn};
use serde::Serialize;

/// Canonical field name for the log10 radius column
pub const LG_R: &str = "lg_r";
/// Canonical field name for the log10 density column
pub const LG_RHO: &str = "lg_rho";
/// Canonical field name for the log10 temperature column
pub const LG_TP: &str = "lg_Tp";
/// Canonical field name for the enclosed mass column (solar masses)
pub const MASS: &str = "mass";
/// Canonical field name for the velocity column (cm/s)
pub const VELOCITY: &str = "u";

/// Known alternative spellings of the state columns
///
/// Both the compact `lgX` spelling and the normalised `lg_X` spelling map to
/// the same field.
const ALIASES: [(&str, &str); 6] = [
    ("lgR", LG_R),
    ("lg_R", LG_R),
    ("lgTp", LG_TP),
    ("lg_Tp", LG_TP),
    ("lgRho", LG_RHO),
    ("lg_Rho", LG_RHO),
];

/// Normalise the raw header line into an ordered list of column labels
///
/// Rules are applied in order:
///
/// 1. `"lg "` becomes `"lg_"`, joining the log marker to its identifier
/// 2. `"("` becomes `"_"` and `")"` is removed
/// 3. if `"Ni"` appears exactly twice, the first becomes `"Ni56"`
/// 4. split on whitespace
///
/// ```rust
/// # use stools_eve::normalise_header;
/// let labels = normalise_header("H He lg(R) lg Rho Ni Fe Ni");
/// assert_eq!(labels, ["H", "He", "lg_R", "lg_Rho", "Ni56", "Fe", "Ni"]);
/// ```
///
/// The nickel rule is positional. Stella writes the Ni56 column under the
/// same `Ni` label, and always before the stable Ni column. If the column order
/// ever changes this will silently swap the two.
pub fn normalise_header(line: &str) -> Vec<String> {
    let line = line.replace("lg ", "lg_").replace('(', "_").replace(')', "");

    let mut labels: Vec<String> = line.split_whitespace().map(String::from).collect();

    let nickel = labels.iter().filter(|l| l.as_str() == "Ni").count();
    if nickel == 2 {
        if let Some(first) = labels.iter_mut().find(|l| l.as_str() == "Ni") {
            trace!("Duplicate \"Ni\" labels, first assumed to be Ni56");
            *first = "Ni56".to_string();
        }
    } else if nickel > 2 {
        warn!("Found {nickel} \"Ni\" labels, unable to infer which is Ni56");
    }

    labels
}

/// Canonical name for a state column label
///
/// ```rust
/// # use stools_eve::canonical_field;
/// assert_eq!(canonical_field("lg_Rho"), "lg_rho");
/// assert_eq!(canonical_field("lgR"), "lg_r");
/// assert_eq!(canonical_field("mass"), "mass");
/// ```
pub fn canonical_field(label: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == label)
        .map(|(_, name)| *name)
        .unwrap_or(label)
}

/// Grid metadata from the second line of a `.rho` file
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridInfo {
    /// Number of zones declared by the file
    pub n_zones: usize,
    /// Reference time of the model (s)
    pub time: f64,
}

impl GridInfo {
    /// Parse the zone count and reference time
    ///
    /// Returns a description of the problem on failure so that the reader can
    /// attach the filename.
    ///
    /// ```rust
    /// # use stools_eve::GridInfo;
    /// let info = GridInfo::parse("2 100.0 ignored").unwrap();
    /// assert_eq!(info.n_zones, 2);
    /// assert_eq!(info.time, 100.0);
    ///
    /// assert!(GridInfo::parse("two 100.0").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, String> {
        match parsers::grid_info(line) {
            Ok((_, (n_zones, time))) => Ok(Self { n_zones, time }),
            Err(_) => Err(format!(
                "expected \"<zones:int> <time:float>\", found {:?}",
                line.trim()
            )),
        }
    }

    /// Reference time as a unit-attached quantity
    pub fn time(&self) -> Time {
        units::seconds(self.time)
    }
}

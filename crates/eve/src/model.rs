//! Module for the parsed model and its derived quantities

// crate modules
use crate::composition::Composition;
use crate::element::{Element, Group};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::header::{canonical_field, GridInfo, LG_R, LG_RHO, LG_TP, MASS, VELOCITY};
use crate::reader::Reader;
use crate::units::{self, Density, Length, Mass, Temperature, Time, Velocity};

// stools modules
use stools_utils::{f, SliceExt, ValueExt};

// standard library
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::path::Path;
use std::sync::OnceLock;

// external crates
use log::{debug, warn};
use serde::Serialize;

/// Stella input model read from a `.rho` file
///
/// The model is read-only once constructed. Composition columns are converted
/// from log10 to linear mass fractions on read, while every other column is
/// kept exactly as written and looked up by its canonical field name.
///
/// Derived quantities are computed on first access and cached, so repeated
/// calls are cheap and always return identical values.
///
/// | Method       | Quantity                                  | Unit          |
/// | ------------ | ----------------------------------------- | ------------- |
/// | [r()]        | radius, `10^lg_r`                         | cm            |
/// | [mr()]       | enclosed mass, `mass`                     | solar masses  |
/// | [dm()]       | shell mass, `4pi/3 (r_i^3 - r_i-1^3) rho` | solar masses  |
/// | [u()]        | velocity, `u`                             | cm/s          |
/// | [rho()]      | density, `10^lg_rho`                      | g/cm^3        |
/// | [t()]        | temperature, `10^lg_Tp`                   | K             |
/// | [x()]        | mass fractions, corrected `Fe`            | dimensionless |
///
/// [r()]: Model::r
/// [mr()]: Model::mr
/// [dm()]: Model::dm
/// [u()]: Model::u
/// [rho()]: Model::rho
/// [t()]: Model::t
/// [x()]: Model::x
///
/// Quantities are `uom` types, so use whatever unit is convenient:
///
/// ```rust, no_run
/// # use stools_eve::Model;
/// use uom::si::length::kilometer;
///
/// let model = Model::from_file("path/to/model.rho").unwrap();
/// let outer = model.r().unwrap().last().unwrap().get::<kilometer>();
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Path of the source file, as given
    path: String,
    /// Normalised header labels, one per column
    labels: Vec<String>,
    /// Zone count and reference time
    info: GridInfo,
    /// Raw numeric data
    grid: Grid,
    /// Linear mass fractions exactly as read
    composition: Composition,
    /// Raw state columns by canonical field name
    state: BTreeMap<String, Vec<f64>>,
    /// Lazily derived quantities
    cache: Cache,
}

/// Memoised derived quantities
#[derive(Debug, Clone, Default)]
struct Cache {
    x: OnceLock<Composition>,
    groups: [OnceLock<Vec<f64>>; 4],
    r: OnceLock<Vec<Length>>,
    mr: OnceLock<Vec<Mass>>,
    dm: OnceLock<Vec<Mass>>,
    u: OnceLock<Vec<Velocity>>,
    rho: OnceLock<Vec<Density>>,
    t: OnceLock<Vec<Temperature>>,
}

// ! ------------------------------------------------------------------------
// !                                Construction
// ! ------------------------------------------------------------------------

impl Model {
    /// Read a Stella `.rho` file
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust, no_run
    /// # use stools_eve::Model;
    /// let model = Model::from_file("path/to/model.rho").unwrap();
    /// println!("{model}");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Reader::new(path)?.read()
    }

    /// Assign every column of the grid to the composition or state data
    ///
    /// Composition symbols are converted from log10 mass fractions. Anything
    /// else goes to the state data under its canonical name.
    pub(crate) fn from_parts(path: String, labels: Vec<String>, info: GridInfo, grid: Grid) -> Self {
        let mut fractions: BTreeMap<Element, Vec<f64>> = BTreeMap::new();
        let mut state: BTreeMap<String, Vec<f64>> = BTreeMap::new();

        for (i, label) in labels.iter().enumerate() {
            let column = grid.column(i);

            let duplicate = match label.parse::<Element>() {
                Ok(element) => {
                    let linear = column.into_iter().map(|v| 10f64.powf(v)).collect();
                    fractions.insert(element, linear).is_some()
                }
                Err(_) => {
                    let field = canonical_field(label).to_string();
                    debug!("Column {i} \"{label}\" stored as \"{field}\"");
                    state.insert(field, column).is_some()
                }
            };

            if duplicate {
                warn!("Duplicate column label \"{label}\" in {path}, using the last");
            }
        }

        let missing: Vec<&str> = Element::ALL
            .iter()
            .filter(|e| !fractions.contains_key(*e))
            .map(|e| e.symbol())
            .collect();
        if !missing.is_empty() {
            debug!("Zero-filled species: {}", missing.join(" "));
        }

        let composition = Composition::from_columns(fractions, grid.n_rows());

        Self {
            path,
            labels,
            info,
            grid,
            composition,
            state,
            cache: Cache::default(),
        }
    }
}

// ! ------------------------------------------------------------------------
// !                                Metadata
// ! ------------------------------------------------------------------------

impl Model {
    /// Path of the file the model was read from
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Normalised header labels, in column order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of zones declared on the second line of the file
    pub fn n_zones(&self) -> usize {
        self.info.n_zones
    }

    /// Reference time of the model
    pub fn time(&self) -> Time {
        self.info.time()
    }

    /// Zone count and reference time as parsed
    pub fn grid_info(&self) -> GridInfo {
        self.info
    }

    /// Raw numeric grid exactly as written in the file
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Raw values of a state column
    ///
    /// Aliases are accepted, so `"lgRho"`, `"lg_Rho"`, and `"lg_rho"` are the
    /// same column.
    pub fn state(&self, field: &str) -> Result<&[f64]> {
        self.state
            .get(canonical_field(field))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingField {
                field: field.to_string(),
            })
    }

    /// Canonical names of every state column in the model
    pub fn state_fields(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }
}

// ! ------------------------------------------------------------------------
// !                                Composition
// ! ------------------------------------------------------------------------

impl Model {
    /// Mass fractions with the `Fe` column corrected for double counting
    ///
    /// `Fe = Fe_raw - Ni56 - Fe52 - Cr48`. See [x_raw()](Model::x_raw) for
    /// the table as written.
    pub fn x(&self) -> &Composition {
        self.cache
            .x
            .get_or_init(|| self.composition.with_corrected_iron())
    }

    /// Mass fractions exactly as read, with the radioactive species still
    /// folded into `Fe`
    pub fn x_raw(&self) -> &Composition {
        &self.composition
    }

    /// Zone-wise sum of the corrected mass fractions of a [Group]
    pub fn group(&self, group: Group) -> &[f64] {
        self.cache.groups[group.index()].get_or_init(|| self.x().sum(group.elements()))
    }

    /// H + He
    pub fn x_hhe(&self) -> &[f64] {
        self.group(Group::HHe)
    }

    /// C + N + O + Ne
    pub fn x_cno(&self) -> &[f64] {
        self.group(Group::CNO)
    }

    /// Na + Mg + Al + Si + S + Ar
    pub fn x_ime(&self) -> &[f64] {
        self.group(Group::IME)
    }

    /// Ca + Fe + Ni + Ni56 + Fe52 + Cr48, using the corrected Fe
    pub fn x_ige(&self) -> &[f64] {
        self.group(Group::IGE)
    }
}

// ! ------------------------------------------------------------------------
// !                            Derived quantities
// ! ------------------------------------------------------------------------

impl Model {
    /// Zone radius
    pub fn r(&self) -> Result<&[Length]> {
        let lg_r = self.state(LG_R)?;
        Ok(self
            .cache
            .r
            .get_or_init(|| lg_r.iter().map(|v| units::cm(pow10(*v))).collect()))
    }

    /// Enclosed mass
    pub fn mr(&self) -> Result<&[Mass]> {
        let mass = self.state(MASS)?;
        Ok(self
            .cache
            .mr
            .get_or_init(|| mass.iter().map(|v| units::solar_masses(*v)).collect()))
    }

    /// Mass of each zone's spherical shell
    ///
    /// Integrates uniform density between the previous radius and this one.
    /// Zone 0 integrates from the centre.
    pub fn dm(&self) -> Result<&[Mass]> {
        let lg_r = self.state(LG_R)?;
        let lg_rho = self.state(LG_RHO)?;
        Ok(self
            .cache
            .dm
            .get_or_init(|| shell_masses(lg_r, lg_rho).map(units::grams).collect()))
    }

    /// Velocity
    pub fn u(&self) -> Result<&[Velocity]> {
        let u = self.state(VELOCITY)?;
        Ok(self
            .cache
            .u
            .get_or_init(|| u.iter().map(|v| units::cm_per_s(*v)).collect()))
    }

    /// Mass density
    pub fn rho(&self) -> Result<&[Density]> {
        let lg_rho = self.state(LG_RHO)?;
        Ok(self
            .cache
            .rho
            .get_or_init(|| lg_rho.iter().map(|v| units::g_per_cm3(pow10(*v))).collect()))
    }

    /// Temperature
    pub fn t(&self) -> Result<&[Temperature]> {
        let lg_tp = self.state(LG_TP)?;
        Ok(self
            .cache
            .t
            .get_or_init(|| lg_tp.iter().map(|v| units::kelvin(pow10(*v))).collect()))
    }
}

/// Shell masses (g) from log10 radius (cm) and log10 density (g/cm3)
///
/// The inner radius of zone 0 is the centre of the star.
fn shell_masses<'a>(lg_r: &'a [f64], lg_rho: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    let radius: Vec<f64> = lg_r.iter().map(|v| pow10(*v)).collect();

    lg_rho.iter().enumerate().map(move |(i, lg_rho)| {
        let outer = radius[i];
        let inner = if i == 0 { 0.0 } else { radius[i - 1] };
        4.0 * PI / 3.0 * (outer.powi(3) - inner.powi(3)) * pow10(*lg_rho)
    })
}

#[inline]
fn pow10(v: f64) -> f64 {
    10f64.powf(v)
}

// ! ------------------------------------------------------------------------
// !                                Output
// ! ------------------------------------------------------------------------

/// Serialisable view of a [Model] in cgs units
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    path: &'a str,
    labels: &'a [String],
    n_zones: usize,
    time_s: f64,
    radius_cm: Option<Vec<f64>>,
    enclosed_mass_msun: Option<Vec<f64>>,
    shell_mass_msun: Option<Vec<f64>>,
    velocity_cm_s: Option<Vec<f64>>,
    density_g_cm3: Option<Vec<f64>>,
    temperature_k: Option<Vec<f64>>,
    composition: &'a Composition,
    groups: BTreeMap<String, &'a [f64]>,
}

impl Model {
    /// Pretty JSON snapshot of the metadata and every derived quantity
    ///
    /// Values are written in the cgs units Stella uses, with masses in solar
    /// masses. Quantities whose source column is missing are `null`.
    pub fn to_json(&self) -> Result<String> {
        use uom::si::length::centimeter;
        use uom::si::mass_density::gram_per_cubic_centimeter;
        use uom::si::thermodynamic_temperature::kelvin;
        use uom::si::velocity::centimeter_per_second;

        let snapshot = Snapshot {
            path: &self.path,
            labels: &self.labels,
            n_zones: self.info.n_zones,
            time_s: self.info.time,
            radius_cm: self
                .r()
                .ok()
                .map(|r| r.iter().map(|v| v.get::<centimeter>()).collect()),
            enclosed_mass_msun: self
                .mr()
                .ok()
                .map(|m| m.iter().map(|v| units::in_solar_masses(*v)).collect()),
            shell_mass_msun: self
                .dm()
                .ok()
                .map(|m| m.iter().map(|v| units::in_solar_masses(*v)).collect()),
            velocity_cm_s: self
                .u()
                .ok()
                .map(|u| u.iter().map(|v| v.get::<centimeter_per_second>()).collect()),
            density_g_cm3: self
                .rho()
                .ok()
                .map(|d| d.iter().map(|v| v.get::<gram_per_cubic_centimeter>()).collect()),
            temperature_k: self
                .t()
                .ok()
                .map(|t| t.iter().map(|v| v.get::<kelvin>()).collect()),
            composition: self.x(),
            groups: Group::ALL
                .iter()
                .map(|g| (g.to_string(), self.group(*g)))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Short "min - max" summary of a raw state column
    fn range_summary(&self, field: &str, transform: fn(f64) -> f64) -> String {
        let values: Vec<f64> = match self.state(field) {
            Ok(column) => column.iter().map(|v| transform(*v)).collect(),
            Err(_) => return "none".to_string(),
        };

        match values.try_range() {
            Ok((min, max)) => f!("{} - {}", min.sci(3, 2), max.sci(3, 2)),
            Err(_) => "undefined".to_string(),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Model {\n".to_string();
        s += &f!("    path: {}\n", self.path);
        s += &f!(
            "    zones: {} ({} rows x {} columns)\n",
            self.info.n_zones,
            self.grid.n_rows(),
            self.grid.n_columns()
        );
        s += &f!("    time: {} s\n", self.info.time.sci(5, 2));
        s += &f!("    radius: {} cm\n", self.range_summary(LG_R, pow10));
        s += &f!("    density: {} g/cm3\n", self.range_summary(LG_RHO, pow10));
        s += &f!("    temperature: {} K\n", self.range_summary(LG_TP, pow10));
        s += &f!("    velocity: {} cm/s\n", self.range_summary(VELOCITY, |v| v));
        s += &f!("    mass: {} Msun\n", self.range_summary(MASS, |v| v));
        s += &f!("    labels: {}\n}}", self.labels.join(" "));

        write!(f, "{}", s)
    }
}

//! Mass fraction table for the tracked species

// crate modules
use crate::element::Element;

// standard library
use std::collections::BTreeMap;

// external crates
use serde::Serialize;

/// Per-zone mass fractions for every [Element]
///
/// Every one of the 18 species always has a column of length `n_zones`.
/// Species that were not in the file are filled with zeros, which simply means
/// they are not part of the nuclear network of that model.
///
/// ```rust
/// # use stools_eve::{Composition, Element};
/// # use std::collections::BTreeMap;
/// let mut columns = BTreeMap::new();
/// columns.insert(Element::H, vec![0.7, 0.6]);
///
/// let x = Composition::from_columns(columns, 2);
/// assert_eq!(x.get(Element::H), &[0.7, 0.6]);
/// assert_eq!(x.get(Element::Cr48), &[0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    #[serde(skip)]
    n_zones: usize,
    #[serde(flatten)]
    columns: BTreeMap<Element, Vec<f64>>,
}

impl Composition {
    /// Build a table from whichever columns were found, zero-filling the rest
    ///
    /// Columns are expected to already have `n_zones` values.
    pub fn from_columns(mut columns: BTreeMap<Element, Vec<f64>>, n_zones: usize) -> Self {
        for element in Element::ALL {
            columns.entry(element).or_insert_with(|| vec![0.0; n_zones]);
        }
        Self { n_zones, columns }
    }

    /// Number of zones in every column
    pub fn n_zones(&self) -> usize {
        self.n_zones
    }

    /// Mass fractions of `element` for every zone
    pub fn get(&self, element: Element) -> &[f64] {
        // every species is inserted on construction
        self.columns
            .get(&element)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over (species, column) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Element, &[f64])> {
        self.columns.iter().map(|(e, c)| (*e, c.as_slice()))
    }

    /// Mass fractions of every species for zone `index`, or `None` past the
    /// last zone
    pub fn zone(&self, index: usize) -> Option<Vec<(Element, f64)>> {
        self.iter()
            .map(|(e, c)| c.get(index).map(|x| (e, *x)))
            .collect()
    }

    /// Zone-wise sum over a set of species
    ///
    /// ```rust
    /// # use stools_eve::{Composition, Element};
    /// # use std::collections::BTreeMap;
    /// let mut columns = BTreeMap::new();
    /// columns.insert(Element::H, vec![0.5, 0.25]);
    /// columns.insert(Element::He, vec![0.25, 0.25]);
    ///
    /// let x = Composition::from_columns(columns, 2);
    /// assert_eq!(x.sum(&[Element::H, Element::He]), vec![0.75, 0.5]);
    /// ```
    pub fn sum(&self, elements: &[Element]) -> Vec<f64> {
        let mut total = vec![0.0; self.n_zones];
        for element in elements {
            for (t, x) in total.iter_mut().zip(self.get(*element)) {
                *t += x;
            }
        }
        total
    }

    /// Copy of the table with the iron fraction corrected for double counting
    ///
    /// Stella writes the `Fe` column with the mass of the radioactive `Ni56`,
    /// `Fe52`, and `Cr48` already folded in. The corrected value is
    /// `Fe - Ni56 - Fe52 - Cr48`, zone by zone.
    pub fn with_corrected_iron(&self) -> Self {
        let mut corrected = self.clone();
        let daughters = self.sum(&Element::iron_daughters());

        if let Some(iron) = corrected.columns.get_mut(&Element::Fe) {
            for (fe, d) in iron.iter_mut().zip(daughters) {
                *fe -= d;
            }
        }

        corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Composition {
        let mut columns = BTreeMap::new();
        columns.insert(Element::Fe, vec![0.5, 1.0]);
        columns.insert(Element::Ni56, vec![0.25, 0.5]);
        columns.insert(Element::Fe52, vec![0.125, 0.25]);
        columns.insert(Element::Cr48, vec![0.0625, 0.125]);
        Composition::from_columns(columns, 2)
    }

    #[test]
    fn every_species_present() {
        let x = example();
        assert_eq!(x.iter().count(), 18);
        for (_, column) in x.iter() {
            assert_eq!(column.len(), 2);
        }
    }

    #[test]
    fn missing_species_zero_filled() {
        let x = example();
        assert_eq!(x.get(Element::He), &[0.0, 0.0]);
        assert_eq!(x.get(Element::Ni), &[0.0, 0.0]);
    }

    #[test]
    fn iron_correction() {
        let raw = example();
        let corrected = raw.with_corrected_iron();

        assert_eq!(corrected.get(Element::Fe), &[0.0625, 0.125]);
        // raw table is left intact
        assert_eq!(raw.get(Element::Fe), &[0.5, 1.0]);
        // nothing else changes
        assert_eq!(corrected.get(Element::Ni56), raw.get(Element::Ni56));
    }

    #[test]
    fn zone_view() {
        let zone = example().zone(1).unwrap();
        assert_eq!(zone.len(), 18);
        assert!(zone.contains(&(Element::Ni56, 0.5)));
    }

    #[test]
    fn zone_out_of_range() {
        assert_eq!(example().zone(2), None);
        assert_eq!(Composition::from_columns(BTreeMap::new(), 0).zone(0), None);
    }

    #[test]
    fn empty_table() {
        let x = Composition::from_columns(BTreeMap::new(), 0);
        assert!(x.sum(&Element::ALL).is_empty());
    }
}

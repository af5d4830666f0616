//! Composition species and their groupings

// standard library
use std::fmt::Display;
use std::str::FromStr;

// external crates
use serde::Serialize;

/// Closed set of species tracked in a Stella composition table
///
/// A `.rho` file lists the log10 mass fraction for some subset of these. The
/// radioactive species `Ni56`, `Fe52`, and `Cr48` are kept separate from the
/// stable elements.
///
/// ```rust
/// # use stools_eve::Element;
/// assert_eq!("Ni56".parse::<Element>(), Ok(Element::Ni56));
/// assert_eq!(Element::Fe52.symbol(), "Fe52");
/// assert!("Xe".parse::<Element>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Element {
    /// Hydrogen
    H,
    /// Helium
    He,
    /// Carbon
    C,
    /// Nitrogen
    N,
    /// Oxygen
    O,
    /// Neon
    Ne,
    /// Sodium
    Na,
    /// Magnesium
    Mg,
    /// Aluminium
    Al,
    /// Silicon
    Si,
    /// Sulphur
    S,
    /// Argon
    Ar,
    /// Calcium
    Ca,
    /// Iron, with the radioactive species folded in when read
    Fe,
    /// Stable nickel
    Ni,
    /// Radioactive nickel-56
    Ni56,
    /// Radioactive iron-52
    Fe52,
    /// Radioactive chromium-48
    Cr48,
}

impl Element {
    /// Every species in table order
    pub const ALL: [Element; 18] = [
        Element::H,
        Element::He,
        Element::C,
        Element::N,
        Element::O,
        Element::Ne,
        Element::Na,
        Element::Mg,
        Element::Al,
        Element::Si,
        Element::S,
        Element::Ar,
        Element::Ca,
        Element::Fe,
        Element::Ni,
        Element::Ni56,
        Element::Fe52,
        Element::Cr48,
    ];

    /// Symbol exactly as it appears in a normalised `.rho` header
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::S => "S",
            Element::Ar => "Ar",
            Element::Ca => "Ca",
            Element::Fe => "Fe",
            Element::Ni => "Ni",
            Element::Ni56 => "Ni56",
            Element::Fe52 => "Fe52",
            Element::Cr48 => "Cr48",
        }
    }

    /// Radioactive species whose mass is folded into the raw `Fe` column
    pub fn iron_daughters() -> [Element; 3] {
        [Element::Ni56, Element::Fe52, Element::Cr48]
    }
}

impl FromStr for Element {
    type Err = String;

    /// Case sensitive, since `S`/`Si` and `N`/`Ni` only differ by case hints
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|e| e.symbol() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Elemental groupings of the composition table
///
/// | Group | Members                                 |
/// | ----- | --------------------------------------- |
/// | HHe   | H He                                    |
/// | CNO   | C N O Ne                                |
/// | IME   | Na Mg Al Si S Ar                        |
/// | IGE   | Ca Fe Ni Ni56 Fe52 Cr48                 |
///
/// The IGE sum uses the corrected `Fe` fraction, so the radioactive species are
/// not counted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Hydrogen and helium
    HHe,
    /// Carbon, nitrogen, oxygen, and neon
    CNO,
    /// Intermediate mass elements
    IME,
    /// Iron group elements
    IGE,
}

impl Group {
    /// Every group in order of increasing mass
    pub const ALL: [Group; 4] = [Group::HHe, Group::CNO, Group::IME, Group::IGE];

    /// Species summed for this group
    pub fn elements(&self) -> &'static [Element] {
        match self {
            Group::HHe => &[Element::H, Element::He],
            Group::CNO => &[Element::C, Element::N, Element::O, Element::Ne],
            Group::IME => &[
                Element::Na,
                Element::Mg,
                Element::Al,
                Element::Si,
                Element::S,
                Element::Ar,
            ],
            Group::IGE => &[
                Element::Ca,
                Element::Fe,
                Element::Ni,
                Element::Ni56,
                Element::Fe52,
                Element::Cr48,
            ],
        }
    }

    /// Position in [Group::ALL], used for cache slots
    pub(crate) fn index(&self) -> usize {
        match self {
            Group::HHe => 0,
            Group::CNO => 1,
            Group::IME => 2,
            Group::IGE => 3,
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Group::HHe => "X_HHe",
            Group::CNO => "X_CNO",
            Group::IME => "X_IME",
            Group::IGE => "X_IGE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for element in Element::ALL {
            assert_eq!(element.symbol().parse::<Element>(), Ok(element));
        }
    }

    #[test]
    fn case_sensitive_symbols() {
        assert!("ni".parse::<Element>().is_err());
        assert!("NI56".parse::<Element>().is_err());
    }

    #[test]
    fn groups_partition_all_species() {
        let mut members: Vec<Element> = Group::ALL
            .iter()
            .flat_map(|g| g.elements().iter().copied())
            .collect();
        members.sort();
        assert_eq!(members, Element::ALL.to_vec());
    }
}

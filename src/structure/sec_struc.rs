use crate::segment::LabelCode;
use std::{fmt, num::NonZeroU8, str::FromStr};

/// DSSP secondary structure states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecStrucType {
    Helix4,
    Helix3,
    Helix5,
    PolyProline,
    Extended,
    Bridge,
    Turn,
    Bend,
    Coil,
}

/// Placeholder for residues without an assignment.
pub const UNASSIGNED: char = '.';

/// 3-10, alpha and pi helices plus isolated bridges.
pub const DEFAULT_SIGNIFICANT: [SecStrucType; 4] = [
    SecStrucType::Helix3,
    SecStrucType::Helix4,
    SecStrucType::Helix5,
    SecStrucType::Bridge,
];

impl SecStrucType {
    pub const ALL: [SecStrucType; 9] = [
        SecStrucType::Helix4,
        SecStrucType::Helix3,
        SecStrucType::Helix5,
        SecStrucType::PolyProline,
        SecStrucType::Extended,
        SecStrucType::Bridge,
        SecStrucType::Turn,
        SecStrucType::Bend,
        SecStrucType::Coil,
    ];

    pub fn code(&self) -> char {
        match self {
            SecStrucType::Helix4 => 'H',
            SecStrucType::Helix3 => 'G',
            SecStrucType::Helix5 => 'I',
            SecStrucType::PolyProline => 'P',
            SecStrucType::Extended => 'E',
            SecStrucType::Bridge => 'B',
            SecStrucType::Turn => 'T',
            SecStrucType::Bend => 'S',
            SecStrucType::Coil => '-',
        }
    }

    pub fn from_code(code: char) -> Result<Self, String> {
        SecStrucType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| format!("Unknown secondary structure code: '{}'", code))
    }
}

impl LabelCode for SecStrucType {
    fn label_code(&self) -> NonZeroU8 {
        NonZeroU8::new(self.code() as u8).expect("secondary structure codes are printable ASCII")
    }
}

impl FromStr for SecStrucType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => SecStrucType::from_code(code),
            _ => Err(format!("Expected a single secondary structure code, got: {}", s)),
        }
    }
}

impl fmt::Display for SecStrucType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An ordered list of distinct secondary structure types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecStrucSet(pub Vec<SecStrucType>);

impl SecStrucSet {
    pub fn iter(&self) -> impl Iterator<Item = SecStrucType> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SecStrucSet {
    fn default() -> Self {
        SecStrucSet(DEFAULT_SIGNIFICANT.to_vec())
    }
}

impl fmt::Display for SecStrucSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|t| write!(f, "{}", t))
    }
}

/// Parses a class list such as `GHIB` or `G,H,I,B`.
pub fn parse_sec_struc_set(s: &str) -> Result<SecStrucSet, String> {
    let mut types = Vec::new();
    for code in s.chars().filter(|c| *c != ',' && !c.is_whitespace()) {
        let sec_struc = SecStrucType::from_code(code)?;
        if !types.contains(&sec_struc) {
            types.push(sec_struc);
        }
    }
    if types.is_empty() {
        return Err("At least one secondary structure code is required".to_string());
    }
    Ok(SecStrucSet(types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_round_trip() {
        for sec_struc in SecStrucType::ALL {
            assert_eq!(SecStrucType::from_code(sec_struc.code()).unwrap(), sec_struc);
        }
    }

    #[test]
    fn label_codes_are_distinct() {
        let codes: HashSet<u8> = SecStrucType::ALL
            .iter()
            .map(|t| t.label_code().get())
            .collect();
        assert_eq!(codes.len(), SecStrucType::ALL.len());
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(SecStrucType::from_code('X').is_err());
        assert!(SecStrucType::from_code(UNASSIGNED).is_err());
        assert!("HH".parse::<SecStrucType>().is_err());
        assert_eq!("E".parse::<SecStrucType>(), Ok(SecStrucType::Extended));
    }

    #[test]
    fn parse_set_accepts_both_forms() {
        let expected = vec![
            SecStrucType::Helix3,
            SecStrucType::Helix4,
            SecStrucType::Helix5,
            SecStrucType::Bridge,
        ];
        assert_eq!(parse_sec_struc_set("GHIB").unwrap().0, expected);
        assert_eq!(parse_sec_struc_set("G,H,I,B").unwrap().0, expected);
        assert_eq!(parse_sec_struc_set("GGHIB").unwrap().0, expected);
        assert!(parse_sec_struc_set("").is_err());
        assert!(parse_sec_struc_set("GX").is_err());
    }

    #[test]
    fn default_set_prints_and_parses_back() {
        let default = SecStrucSet::default();
        assert_eq!(default.to_string(), "GHIB");
        assert_eq!(parse_sec_struc_set(&default.to_string()), Ok(default));
    }
}

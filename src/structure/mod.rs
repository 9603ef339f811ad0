mod model;
mod reader;
mod sec_struc;

pub use model::{Chain, Model, Residue, Structure};
pub use reader::{parse_structure, read_structure};
pub use sec_struc::{
    parse_sec_struc_set, SecStrucSet, SecStrucType, DEFAULT_SIGNIFICANT, UNASSIGNED,
};

use super::{
    model::{Residue, Structure},
    sec_struc::{SecStrucType, UNASSIGNED},
};
use crate::utils::{open_table_reader, Result};
use std::{io::BufRead, path::Path};

struct ResidueRecord<'a> {
    model: u32,
    chain: &'a str,
    residue: Residue,
}

pub fn read_structure(path: &Path) -> Result<Structure> {
    let reader = open_table_reader(path)?;
    let structure = parse_structure(reader)
        .map_err(|e| format!("Error reading {}: {}", path.display(), e))?;
    log::debug!(
        "Read {} models, {} chains and {} residues from {}",
        structure.models.len(),
        structure.chain_count(),
        structure.residue_count(),
        path.display()
    );
    Ok(structure)
}

pub fn parse_structure<R: BufRead>(reader: R) -> Result<Structure> {
    let mut structure = Structure::default();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error at line {}: {}", line_number + 1, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = parse_record(trimmed)
            .map_err(|e| format!("Error at line {}: {}", line_number + 1, e))?;
        structure
            .model_mut(record.model)
            .chain_mut(record.chain)
            .residues
            .push(record.residue);
    }
    if structure.models.is_empty() {
        return Err("No residues found".to_string());
    }
    Ok(structure)
}

fn parse_record(line: &str) -> Result<ResidueRecord<'_>> {
    const EXPECTED_FIELD_COUNT: usize = 5;
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (model, chain, number, name, sec_struc) = match fields[..] {
        [model, chain, number, name, sec_struc] => (model, chain, number, name, sec_struc),
        _ => {
            return Err(format!(
                "Expected {} fields in the format 'model chain number name sec_struc', found {}: {}",
                EXPECTED_FIELD_COUNT,
                fields.len(),
                line
            ))
        }
    };

    let model = model
        .parse::<u32>()
        .map_err(|_| format!("Invalid model number: {}", model))?;
    let number = number
        .parse::<i32>()
        .map_err(|_| format!("Invalid residue number: {}", number))?;
    let sec_struc = match sec_struc {
        s if s.len() == 1 && s.starts_with(UNASSIGNED) => None,
        s => Some(s.parse::<SecStrucType>()?),
    };

    Ok(ResidueRecord {
        model,
        chain,
        residue: Residue::new(number, name, sec_struc),
    })
}

use super::sec_struc::{SecStrucType, UNASSIGNED};

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub number: i32,
    pub name: String,
    pub sec_struc: Option<SecStrucType>,
}

impl Residue {
    pub fn new(number: i32, name: impl Into<String>, sec_struc: Option<SecStrucType>) -> Self {
        Self {
            number,
            name: name.into(),
            sec_struc,
        }
    }

    pub fn sec_struc_code(&self) -> char {
        self.sec_struc.map_or(UNASSIGNED, |t| t.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: String,
    pub residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// One observation of the structure, e.g. an NMR model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub number: u32,
    pub chains: Vec<Chain>,
}

impl Model {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            chains: Vec::new(),
        }
    }

    pub fn chain_mut(&mut self, id: &str) -> &mut Chain {
        let index = match self.chains.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => {
                self.chains.push(Chain::new(id));
                self.chains.len() - 1
            }
        };
        &mut self.chains[index]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub models: Vec<Model>,
}

impl Structure {
    pub fn model_mut(&mut self, number: u32) -> &mut Model {
        let index = match self.models.iter().position(|m| m.number == number) {
            Some(index) => index,
            None => {
                self.models.push(Model::new(number));
                self.models.len() - 1
            }
        };
        &mut self.models[index]
    }

    pub fn chain_count(&self) -> usize {
        self.models.iter().map(|m| m.chains.len()).sum()
    }

    pub fn residue_count(&self) -> usize {
        self.models
            .iter()
            .flat_map(|m| m.chains.iter())
            .map(|c| c.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_are_created_once() {
        let mut model = Model::new(1);
        model.chain_mut("A").residues.push(Residue::new(1, "MET", None));
        model.chain_mut("B").residues.push(Residue::new(1, "GLY", None));
        model.chain_mut("A").residues.push(Residue::new(2, "ALA", None));
        assert_eq!(model.chains.len(), 2);
        assert_eq!(model.chains[0].len(), 2);
        assert_eq!(model.chains[1].id, "B");
    }

    #[test]
    fn counts_span_models() {
        let mut structure = Structure::default();
        for number in [1, 2] {
            let chain = structure.model_mut(number).chain_mut("A");
            chain.residues.push(Residue::new(1, "MET", Some(SecStrucType::Coil)));
        }
        assert_eq!(structure.models.len(), 2);
        assert_eq!(structure.chain_count(), 2);
        assert_eq!(structure.residue_count(), 2);
        assert_eq!(structure.models[0].chains[0].residues[0].sec_struc_code(), '-');
    }
}

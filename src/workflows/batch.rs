use crate::segment::{SegmentError, Segmentation, Segmenter};
use crate::structure::{Chain, Model, Residue, SecStrucType, Structure};
use rayon::prelude::*;
use std::collections::BTreeMap;

pub type ChainResult<'a> = std::result::Result<Segmentation<'a, Residue>, SegmentError>;

/// Segmentations of every chain in one model, keyed by chain id.
pub type ChainSegments<'a> = BTreeMap<String, ChainResult<'a>>;

#[derive(Debug)]
pub struct ModelSegments<'a> {
    pub model: u32,
    pub chains: ChainSegments<'a>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub chains_ok: usize,
    pub chains_failed: usize,
    pub segments: usize,
    pub crossings: usize,
}

pub fn segment_chain<'a>(
    segmenter: &Segmenter<SecStrucType>,
    chain: &'a Chain,
) -> ChainResult<'a> {
    segmenter.segment(&chain.residues, |residue| residue.sec_struc)
}

/// Segments all chains of `model` in parallel. A failing chain only affects its own entry.
pub fn segment_model<'a>(
    segmenter: &Segmenter<SecStrucType>,
    model: &'a Model,
) -> ChainSegments<'a> {
    model
        .chains
        .par_iter()
        .map(|chain| {
            let result = segment_chain(segmenter, chain);
            match &result {
                Ok(segmentation) => log::debug!(
                    "Model {} chain {}: {} residues, {} segments, {} crossings",
                    model.number,
                    chain.id,
                    chain.len(),
                    segmentation.segments.len(),
                    segmentation.crossings
                ),
                Err(err) => log::error!("Model {} chain {}: {}", model.number, chain.id, err),
            }
            (chain.id.clone(), result)
        })
        .collect()
}

pub fn segment_structure<'a>(
    segmenter: &Segmenter<SecStrucType>,
    structure: &'a Structure,
) -> Vec<ModelSegments<'a>> {
    structure
        .models
        .par_iter()
        .map(|model| ModelSegments {
            model: model.number,
            chains: segment_model(segmenter, model),
        })
        .collect()
}

pub fn summarize_run(models: &[ModelSegments<'_>]) -> RunSummary {
    let mut summary = RunSummary::default();
    for result in models.iter().flat_map(|m| m.chains.values()) {
        match result {
            Ok(segmentation) => {
                summary.chains_ok += 1;
                summary.segments += segmentation.segments.len();
                summary.crossings += segmentation.crossings;
            }
            Err(_) => summary.chains_failed += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{LabelSet, SegmentParams};
    use crate::structure::DEFAULT_SIGNIFICANT;

    fn chain(id: &str, sec_struc: &str) -> Chain {
        let mut chain = Chain::new(id);
        for (i, code) in sec_struc.chars().enumerate() {
            let sec_struc = SecStrucType::from_code(code).ok();
            chain.residues.push(Residue::new(i as i32 + 1, "ALA", sec_struc));
        }
        chain
    }

    fn segmenter(params: SegmentParams) -> Segmenter<SecStrucType> {
        Segmenter::new(params, LabelSet::new(DEFAULT_SIGNIFICANT, true)).unwrap()
    }

    fn structure() -> Structure {
        let mut first = Model::new(1);
        first.chains.push(chain("B", "--HHH---"));
        first.chains.push(chain("A", "------------"));
        first.chains.push(chain("C", "HH"));
        let mut second = Model::new(2);
        second.chains.push(chain("A", "EEEE--------"));
        Structure {
            models: vec![first, second],
        }
    }

    #[test]
    fn failing_chain_does_not_abort_model() {
        let structure = structure();
        let models = segment_structure(&segmenter(SegmentParams::fixed(4, 0)), &structure);
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].model, 1);

        let chains = &models[0].chains;
        assert_eq!(chains.len(), 3);
        assert!(chains["C"].as_ref().unwrap_err().is_config());
        assert_eq!(chains["B"].as_ref().unwrap().crossings, 1);
        assert_eq!(chains["A"].as_ref().unwrap().segments.len(), 3);

        let summary = summarize_run(&models);
        assert_eq!(
            summary,
            RunSummary {
                chains_ok: 3,
                chains_failed: 1,
                segments: 2 + 3 + 3,
                crossings: 1,
            }
        );
    }

    #[test]
    fn segments_borrow_residues() {
        let structure = structure();
        let models = segment_structure(&segmenter(SegmentParams::fixed(4, 1)), &structure);
        let segmentation = models[1].chains["A"].as_ref().unwrap();
        let first = &segmentation.segments[0];
        assert_eq!(first.items[0].number, 1);
        assert_eq!(first.items.len(), 4);
        let residues = &structure.models[1].chains[0].residues;
        assert!(std::ptr::eq(first.items.as_ptr(), residues.as_ptr()));
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let structure = structure();
        let seg = segmenter(SegmentParams {
            target_size: 4,
            min_size: 3,
            max_size: 6,
            target_overlap: 1,
            min_overlap: 0,
            max_overlap: 2,
        });
        let models = segment_structure(&seg, &structure);
        for (model, result) in structure.models.iter().zip(models.iter()) {
            for chain in &model.chains {
                let expected = result.chains[&chain.id].clone().ok();
                assert_eq!(segment_chain(&seg, chain).ok(), expected);
            }
        }
    }
}

use std::{collections::HashSet, hash::Hash, num::NonZeroU8};

/// Code of a position that does not belong to a significant class.
pub const NOT_SIGNIFICANT: u8 = 0;
/// Code shared by every significant class when labelling is class-insensitive.
pub const SIGNIFICANT: u8 = 1;

/// A classification that can be turned into a per-class label code.
///
/// Codes must be distinct across the values of the implementing type.
pub trait LabelCode {
    fn label_code(&self) -> NonZeroU8;
}

/// The classes treated as significant and whether they are told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet<C: Eq + Hash> {
    pub significant: HashSet<C>,
    pub sensitive: bool,
}

impl<C: Eq + Hash> LabelSet<C> {
    pub fn new(significant: impl IntoIterator<Item = C>, sensitive: bool) -> Self {
        Self {
            significant: significant.into_iter().collect(),
            sensitive,
        }
    }

    pub fn code_of(&self, class: Option<&C>) -> u8
    where
        C: LabelCode,
    {
        match class {
            Some(class) if self.significant.contains(class) => {
                if self.sensitive {
                    class.label_code().get()
                } else {
                    SIGNIFICANT
                }
            }
            _ => NOT_SIGNIFICANT,
        }
    }
}

/// Maps every item to its label code.
pub fn derive_codes<T, C, F>(items: &[T], classify: F, labels: &LabelSet<C>) -> Vec<u8>
where
    C: LabelCode + Eq + Hash,
    F: Fn(&T) -> Option<C>,
{
    items
        .iter()
        .map(|item| labels.code_of(classify(item).as_ref()))
        .collect()
}

use fxhash::FxHashSet;

use crate::models::Coordinate;

///
/// One gene and the ordered list of TA insertion-site coordinates that fall
/// inside it. Coordinates are deduplicated at construction, keeping the
/// first occurrence; source tables are not guaranteed to be duplicate-free.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneSites {
    pub gene: String,
    pub sites: Vec<Coordinate>,
}

impl GeneSites {
    pub fn new(gene: impl Into<String>, sites: Vec<Coordinate>) -> Self {
        let mut seen: FxHashSet<Coordinate> = FxHashSet::default();
        let sites = sites
            .into_iter()
            .filter(|coord| seen.insert(*coord))
            .collect();

        GeneSites {
            gene: gene.into(),
            sites,
        }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_sites_are_dropped_keeping_first_occurrence() {
        let gene = GeneSites::new("MB0004", vec![100, 250, 100, 312, 250]);
        assert_eq!(gene.sites, vec![100, 250, 312]);
    }

    #[test]
    fn test_empty_site_list_is_allowed() {
        let gene = GeneSites::new("MB0047c", vec![]);
        assert!(gene.is_empty());
    }
}

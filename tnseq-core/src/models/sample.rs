use fxhash::FxHashSet;

/// 1-based genomic position of a TA insertion site.
pub type Coordinate = u64;

///
/// One sample's insertion-site table: an ordered coordinate -> read-count
/// mapping loaded from a single wig source, immutable after load.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    pub name: String,
    pub sites: Vec<(Coordinate, u32)>,
}

impl SampleTable {
    pub fn new(name: impl Into<String>, sites: Vec<(Coordinate, u32)>) -> Self {
        SampleTable {
            name: name.into(),
            sites,
        }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Copy of this table with every site in `excluded` removed, keeping the
    /// original site order. Used to drop non-permissive TA sites before the
    /// insertion matrix is built.
    pub fn without_sites(&self, excluded: &FxHashSet<Coordinate>) -> SampleTable {
        SampleTable {
            name: self.name.clone(),
            sites: self
                .sites
                .iter()
                .filter(|(coord, _)| !excluded.contains(coord))
                .copied()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_without_sites_drops_excluded_coordinates() {
        let table = SampleTable::new("s1", vec![(10, 2), (20, 0), (30, 7)]);
        let excluded: FxHashSet<Coordinate> = [20].into_iter().collect();

        let filtered = table.without_sites(&excluded);

        assert_eq!(filtered.name, "s1");
        assert_eq!(filtered.sites, vec![(10, 2), (30, 7)]);
    }

    #[test]
    fn test_without_sites_empty_exclusion_is_identity() {
        let table = SampleTable::new("s1", vec![(10, 2), (20, 0)]);
        let filtered = table.without_sites(&FxHashSet::default());

        assert_eq!(filtered, table);
    }
}

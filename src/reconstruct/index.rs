//! Sorted-edge spatial index over component bounding boxes.
//!
//! One array per box edge, each holding `(coordinate, component index)`
//! pairs. Arrays whose query looks for larger coordinates (tops, rights)
//! are sorted ascending, the other two descending, so every query is a
//! single `partition_point` returning a suffix slice. Ties on coordinate
//! order by component index, which keeps degenerate layouts reproducible.

use super::Component;

pub(crate) struct GeometryIndex {
    tops: Vec<(f64, usize)>,    // ascending
    bottoms: Vec<(f64, usize)>, // descending
    lefts: Vec<(f64, usize)>,   // descending
    rights: Vec<(f64, usize)>,  // ascending
    len: usize,
}

fn sort_ascending(pairs: &mut [(f64, usize)]) {
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
}

fn sort_descending(pairs: &mut [(f64, usize)]) {
    pairs.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
}

impl GeometryIndex {
    /// Built once, after every component (fragments, pluses, arrows) is
    /// collected; nothing is inserted afterwards.
    pub fn build(components: &[Component]) -> Self {
        let mut tops = Vec::with_capacity(components.len());
        let mut bottoms = Vec::with_capacity(components.len());
        let mut lefts = Vec::with_capacity(components.len());
        let mut rights = Vec::with_capacity(components.len());
        for (i, c) in components.iter().enumerate() {
            tops.push((c.bbox.top(), i));
            bottoms.push((c.bbox.bottom(), i));
            lefts.push((c.bbox.left(), i));
            rights.push((c.bbox.right(), i));
        }
        sort_ascending(&mut tops);
        sort_descending(&mut bottoms);
        sort_descending(&mut lefts);
        sort_ascending(&mut rights);
        Self {
            tops,
            bottoms,
            lefts,
            rights,
            len: components.len(),
        }
    }

    /// Components whose top edge is strictly above `y`.
    pub fn first_above(&self, y: f64) -> &[(f64, usize)] {
        let at = self.tops.partition_point(|&(c, _)| c <= y);
        &self.tops[at..]
    }

    /// Components whose bottom edge is strictly below `y`.
    pub fn first_below(&self, y: f64) -> &[(f64, usize)] {
        let at = self.bottoms.partition_point(|&(c, _)| c >= y);
        &self.bottoms[at..]
    }

    /// Components whose right edge is strictly right of `x`.
    pub fn first_right_of(&self, x: f64) -> &[(f64, usize)] {
        let at = self.rights.partition_point(|&(c, _)| c <= x);
        &self.rights[at..]
    }

    /// Components whose left edge is strictly left of `x`.
    pub fn first_left_of(&self, x: f64) -> &[(f64, usize)] {
        let at = self.lefts.partition_point(|&(c, _)| c >= x);
        &self.lefts[at..]
    }

    /// Components whose box straddles the horizontal line through `p`,
    /// in ascending component order.
    pub fn row_mates(&self, p: [f64; 2]) -> Vec<usize> {
        self.intersect(self.first_above(p[1]), self.first_below(p[1]))
    }

    /// Components whose box straddles the vertical line through `p`,
    /// in ascending component order.
    pub fn column_mates(&self, p: [f64; 2]) -> Vec<usize> {
        self.intersect(self.first_left_of(p[0]), self.first_right_of(p[0]))
    }

    fn intersect(&self, a: &[(f64, usize)], b: &[(f64, usize)]) -> Vec<usize> {
        let mut in_a = vec![false; self.len];
        for &(_, i) in a {
            in_a[i] = true;
        }
        let mut both: Vec<usize> = b.iter().map(|&(_, i)| i).filter(|&i| in_a[i]).collect();
        both.sort_unstable();
        both
    }
}

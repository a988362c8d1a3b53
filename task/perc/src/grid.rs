use crate::{
    error::{Error, Result},
    union_find::UnionFind,
};

////////////////////////////////////////////////////////////////////////////////

const TOP: usize = 0;

/// An `n`-by-`n` grid of sites, each either open or blocked.
///
/// Sites are addressed by 1-based `(row, col)`, row 1 being the top.
/// Two virtual sites stand for the whole top row and the whole bottom row:
/// every open site of row 1 is joined to the top one, every open site of
/// row `n` to the bottom one.
///
/// Fullness is answered by a second forest that lacks the bottom site.
/// Once the grid percolates, the two sentinels share a component in `uf`,
/// so asking it about the top would also reach every bottom-connected site.
#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    sites: Vec<bool>,
    uf: UnionFind,
    top_uf: UnionFind,
    open_sites: usize,
    percolated: bool,
}

impl Percolation {
    /// Creates a grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is zero or the grid
    /// would not be addressable.
    pub fn new(size: usize) -> Result<Self> {
        let len = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_add(2))
            .filter(|_| size > 0)
            .ok_or(Error::InvalidArgument {
                name: "grid size",
                value: size,
            })?;

        let mut sites = vec![false; len];
        sites[TOP] = true;
        sites[len - 1] = true;

        Ok(Self {
            size,
            sites,
            uf: UnionFind::new(len),
            top_uf: UnionFind::new(len - 1),
            open_sites: 0,
            percolated: false,
        })
    }

    /// Returns grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Opens site `(row, col)` and connects it to its open neighbours.
    /// Opening an already open site does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row` or `col` is not in `1..=n`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;
        if self.sites[site] {
            return Ok(());
        }

        self.sites[site] = true;
        self.open_sites += 1;

        if row == 1 {
            self.uf.union(site, TOP);
            self.top_uf.union(site, TOP);
        }
        if row == self.size {
            let bottom = self.bottom();
            self.uf.union(site, bottom);
        }

        for (r, c) in neighbours(self.size, row, col) {
            let neighbour = self.index_unchecked(r, c);
            if self.sites[neighbour] {
                self.uf.union(site, neighbour);
                self.top_uf.union(site, neighbour);
            }
        }

        if !self.percolated && self.uf.connected(TOP, self.bottom()) {
            self.percolated = true;
            log::trace!(
                "grid {0}x{0} percolates after opening ({row}, {col}), {1} sites open",
                self.size,
                self.open_sites
            );
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row` or `col` is not in `1..=n`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.sites[self.index(row, col)?])
    }

    /// Returns `true` if the site is open and connected to the top row.
    ///
    /// Only the top-only forest is consulted, so a percolating grid never
    /// makes a site full just because it touches the bottom row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row` or `col` is not in `1..=n`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        Ok(self.sites[site] && self.top_uf.connected(TOP, site))
    }

    /// Returns `true` if some chain of open sites joins the top row
    /// to the bottom row.
    pub fn percolates(&self) -> bool {
        self.percolated
    }

    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if !(1..=self.size).contains(&row) || !(1..=self.size).contains(&col) {
            return Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.index_unchecked(row, col))
    }

    fn index_unchecked(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + (col - 1) + 1
    }
}

/// Yields the in-grid 4-neighbours of `(row, col)`.
fn neighbours(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .map(move |(dr, dc)| {
            (
                row.wrapping_add(dr as usize),
                col.wrapping_add(dc as usize),
            )
        })
        .filter(move |(r, c)| (1..=size).contains(r) && (1..=size).contains(c))
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinates_map_after_top_sentinel() {
        let grid = Percolation::new(3).unwrap();
        assert_eq!(grid.index(1, 1), Ok(1));
        assert_eq!(grid.index(1, 3), Ok(3));
        assert_eq!(grid.index(2, 1), Ok(4));
        assert_eq!(grid.index(3, 3), Ok(9));
        assert_eq!(grid.bottom(), 10);
    }

    #[test]
    fn neighbours_stay_inside() {
        let mut corner = neighbours(3, 1, 1).collect::<Vec<_>>();
        corner.sort();
        assert_eq!(corner, vec![(1, 2), (2, 1)]);

        let mut center = neighbours(3, 2, 2).collect::<Vec<_>>();
        center.sort();
        assert_eq!(center, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);

        assert_eq!(neighbours(1, 1, 1).count(), 0);
    }

    #[test]
    fn single_site_grid() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.is_full(1, 1).unwrap());

        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(1, 1).unwrap());
    }

    #[test]
    fn open_counts_each_site_once() {
        let mut grid = Percolation::new(4).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(4, 1).unwrap();
        assert_eq!(grid.number_of_open_sites(), 2);
    }

    #[test]
    fn top_forest_ignores_bottom_sentinel() {
        let mut grid = Percolation::new(3).unwrap();
        for (row, col) in [(1, 1), (2, 1), (3, 1), (3, 3)] {
            grid.open(row, col).unwrap();
        }
        let isolated = grid.index(3, 3).unwrap();

        // joined through the bottom sentinel in the percolation forest only
        assert!(grid.uf.connected(TOP, isolated));
        assert!(!grid.top_uf.connected(TOP, isolated));

        grid.open(3, 2).unwrap();
        assert!(grid.top_uf.connected(TOP, isolated));
    }

    #[test]
    fn huge_size_is_rejected() {
        assert_eq!(
            Percolation::new(usize::MAX).unwrap_err(),
            Error::InvalidArgument {
                name: "grid size",
                value: usize::MAX
            }
        );
    }
}

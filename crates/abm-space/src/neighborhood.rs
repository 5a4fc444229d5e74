//! Neighborhood kinds and their offset tables.
//!
//! A neighbor of cell `c` is `c + δ` for some non-zero offset
//! `δ ∈ {-1, 0, 1}ᴺ`:
//!
//! | Kind         | Offsets kept                    | 1D | 2D | 3D |
//! |--------------|---------------------------------|----|----|----|
//! | `VonNeumann` | exactly one non-zero component  |  2 |  4 |  6 |
//! | `Moore`      | every non-zero offset           |  2 |  8 | 26 |
//!
//! In one dimension the two kinds coincide.

/// Adjacency rule for neighborhood queries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Neighborhood {
    /// Cells one unit step away along a single axis.
    #[default]
    VonNeumann,
    /// VonNeumann cells plus all diagonal combinations.
    Moore,
}

impl Neighborhood {
    /// Every offset this kind admits in `N` dimensions, in lexicographic
    /// order from `[-1, -1, …]` upward.  Never contains the zero offset.
    pub fn offsets<const N: usize>(self) -> Vec<[i32; N]> {
        let total = 3usize.pow(N as u32);
        let mut out = Vec::with_capacity(total - 1);

        for code in 0..total {
            // Decode `code` as N base-3 digits, most significant first.
            let mut delta = [0i32; N];
            let mut rest = code;
            for axis in (0..N).rev() {
                delta[axis] = (rest % 3) as i32 - 1;
                rest /= 3;
            }

            let non_zero = delta.iter().filter(|&&d| d != 0).count();
            let keep = match self {
                Neighborhood::VonNeumann => non_zero == 1,
                Neighborhood::Moore      => non_zero > 0,
            };
            if keep {
                out.push(delta);
            }
        }
        out
    }
}

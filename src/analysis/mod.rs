/// Numeric core: turn a group of replicate profiles into one curve.
///
/// ```text
///   RawProfile ─► trim ─► normalize ─► interpolate (lattice) ─┐
///   RawProfile ─► trim ─► normalize ─► interpolate (lattice) ─┼─► median ─► smooth?
///   RawProfile ─► trim ─► normalize ─► interpolate (lattice) ─┘
/// ```

pub mod aggregate;
pub mod gradient;
pub mod interpolate;
pub mod normalize;
pub mod smooth;
pub mod trim;

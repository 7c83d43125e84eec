//! Planar geometry primitives for pitch-space calculations.
//!
//! All functions operate on `(x, y)` pairs in meters and carry no knowledge
//! of the domain model. Callers are responsible for propagating `None` when
//! a coordinate is missing from the tracking data.

/// A point on the pitch plane, in meters.
pub type Point = (f64, f64);

/// Euclidean distance between two points. Always non-negative.
pub fn distance(p: Point, q: Point) -> f64 {
    (p.0 - q.0).hypot(p.1 - q.1)
}

/// Signed area test: which side of the directed edge `a -> b` does `p` lie on.
fn edge_sign(p: Point, a: Point, b: Point) -> f64 {
    (p.0 - b.0) * (a.1 - b.1) - (a.0 - b.0) * (p.1 - b.1)
}

/// Whether `pt` lies strictly inside the triangle `(v1, v2, v3)`.
///
/// Uses the sign of the 2D cross product against each edge; the point is
/// inside iff all three signs agree strictly. A point exactly on an edge (or
/// a vertex) is classified outside. Vertex orientation does not matter, and
/// the result is invariant under cyclic permutation of the vertices.
pub fn point_in_triangle(pt: Point, v1: Point, v2: Point, v3: Point) -> bool {
    let d1 = edge_sign(pt, v1, v2);
    let d2 = edge_sign(pt, v2, v3);
    let d3 = edge_sign(pt, v3, v1);

    (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
}

/// Angle at `apex` subtended by the segment `e1 -> e2`, in radians.
///
/// Law of cosines with sides a = |apex-e1|, b = |apex-e2|, c = |e1-e2|.
/// The acos argument is clamped to [-1, 1] to absorb floating-point
/// overshoot. Returns `None` when the apex coincides with either endpoint
/// (zero-length ray, angle undefined).
pub fn law_of_cosines_angle(apex: Point, e1: Point, e2: Point) -> Option<f64> {
    let a = distance(apex, e1);
    let b = distance(apex, e2);
    if a == 0.0 || b == 0.0 {
        return None;
    }
    let c = distance(e1, e2);
    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// Perpendicular distance of `point` from the infinite line through `origin`
/// and `through`.
///
/// Computed as |cross| / |line|. Returns `None` when the line is degenerate
/// (`origin == through`).
pub fn lateral_offset(origin: Point, through: Point, point: Point) -> Option<f64> {
    let line = (through.0 - origin.0, through.1 - origin.1);
    let len = line.0.hypot(line.1);
    if len == 0.0 {
        return None;
    }
    let to_point = (point.0 - origin.0, point.1 - origin.1);
    let cross = line.0 * to_point.1 - line.1 * to_point.0;
    Some(cross.abs() / len)
}

//! The escape-time evaluator.  Iterates `z ← z² + c` from the origin
//! and counts how many steps the orbit survives before its magnitude
//! passes 2.
//!
//! Nothing guards against the orbit overflowing to infinity or NaN
//! once it has escaped; with a small cap it escapes long before
//! that can matter.
use num::Complex;

/// The default iteration cap.
pub const MAXITER: usize = 32;

/// Squared escape radius.  Comparing against `|z|²` saves a square
/// root.
const ESCAPE: f64 = 4.0;

/// The number of iterations the orbit of `c`, starting at the
/// origin, survives before `|z|² > 4`, or `limit` if it never
/// escapes.  The result is always in `0..=limit`.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    escape_time_from(Complex::new(0.0, 0.0), c, limit)
}

/// As `escape_time`, but from an arbitrary starting value.  Every
/// caller starts at the origin; a Julia variant would not.
fn escape_time_from(z0: Complex<f64>, c: Complex<f64>, limit: usize) -> usize {
    let (mut zx, mut zy) = (z0.re, z0.im);
    for i in 0..limit {
        let zx2 = zx * zx;
        let zy2 = zy * zy;
        if zx2 + zy2 > ESCAPE {
            return i;
        }
        // Both halves come from the same (zx, zy).
        zy = 2.0 * zx * zy + c.im;
        zx = zx2 - zy2 + c.re;
    }
    limit
}

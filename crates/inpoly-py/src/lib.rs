//! PyO3 bindings for the `inpoly` containment testers.
//!
//! Notes
//! - Points and rings cross the boundary as lists of `(x, y)` tuples; callers
//!   holding NumPy arrays convert with `.tolist()` on their side.
//! - Ring validation errors surface as `ValueError` with the Rust message.

use inpoly::contain::{crossing_number_indices, winding_number, winding_number_indices};
use inpoly::measure::polyline_length;
use inpoly::{ClosedRing, CyclicRing, RingError};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_vecs(xy: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    xy.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

fn ring_err(err: RingError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Indices of `points` inside `ring` by crossing number.
///
/// The ring may or may not repeat its first vertex at the end.
#[pyfunction]
#[pyo3(signature = (points, ring, include_boundary = true))]
fn crossing_number_test(
    points: Vec<(f64, f64)>,
    ring: Vec<(f64, f64)>,
    include_boundary: bool,
) -> PyResult<Vec<usize>> {
    let ring = ClosedRing::close(to_vecs(ring)).map_err(ring_err)?;
    Ok(crossing_number_indices(&to_vecs(points), &ring, include_boundary))
}

/// Indices of `points` inside `ring` by nonzero winding number.
#[pyfunction]
fn winding_number_test(points: Vec<(f64, f64)>, ring: Vec<(f64, f64)>) -> PyResult<Vec<usize>> {
    let ring = CyclicRing::new(to_vecs(ring)).map_err(ring_err)?;
    Ok(winding_number_indices(&to_vecs(points), &ring))
}

/// Signed winding count of one point (negative for clockwise rings).
#[pyfunction]
fn winding_count(point: (f64, f64), ring: Vec<(f64, f64)>) -> PyResult<i32> {
    let ring = CyclicRing::new(to_vecs(ring)).map_err(ring_err)?;
    Ok(winding_number(Vector2::new(point.0, point.1), &ring))
}

/// Total and per-segment length of a polyline; `None` below two points.
#[pyfunction]
#[pyo3(name = "polyline_length", signature = (points, close = false))]
fn polyline_length_py(points: Vec<(f64, f64)>, close: bool) -> Option<(f64, Vec<f64>)> {
    polyline_length(&to_vecs(points), close).map(|len| (len.total, len.segments))
}

#[pymodule]
fn inpoly_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(crossing_number_test, m)?)?;
    m.add_function(wrap_pyfunction!(winding_number_test, m)?)?;
    m.add_function(wrap_pyfunction!(winding_count, m)?)?;
    m.add_function(wrap_pyfunction!(polyline_length_py, m)?)?;
    m.add("__version__", inpoly::VERSION)?;
    Ok(())
}

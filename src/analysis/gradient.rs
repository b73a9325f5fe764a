use crate::data::model::{GradientRecord, PlotPoint};
use crate::error::ProfileError;

/// Slope between the two selected points, `(y2 - y1) / (x2 - x1)`.
pub fn gradient_between(p1: PlotPoint, p2: PlotPoint) -> Result<f64, ProfileError> {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        return Err(ProfileError::DegenerateSelection { x: p1.x });
    }
    Ok((p2.y - p1.y) / dx)
}

pub fn gradient_record(
    distance: f64,
    points: [PlotPoint; 2],
) -> Result<GradientRecord, ProfileError> {
    let [p1, p2] = points;
    Ok(GradientRecord {
        distance,
        gradient: gradient_between(p1, p2)?,
    })
}

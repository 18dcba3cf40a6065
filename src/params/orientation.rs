use crate::foundation::{
    error::{GaborError, GaborResult},
    math::linspace,
};

/// Turn the requested orientation list into the list of images to render.
///
/// Exactly two values with `num_orientations > 2` are interpolation endpoints
/// (inclusive); any other list, or any count <= 2 (negatives included), is used
/// as given.
pub fn expand_orientations(orientations: &[f64], num_orientations: i64) -> GaborResult<Vec<f64>> {
    match orientations {
        [] => Err(GaborError::validation(
            "at least one orientation is required",
        )),
        &[start, end] if num_orientations > 2 => {
            let n = usize::try_from(num_orientations).map_err(|_| {
                GaborError::validation(format!(
                    "num_orientations {num_orientations} is too large"
                ))
            })?;
            Ok(linspace(start, end, n))
        }
        list => Ok(list.to_vec()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/orientation.rs"]
mod tests;

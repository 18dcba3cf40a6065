/// `size // 2`: the integer offset of the patch center.
pub(crate) fn half_size(size: u32) -> u32 {
    size / 2
}

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    (deg * std::f64::consts::PI) / 180.0
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

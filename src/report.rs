//! Probe-height reports and summary statistics.

use std::fmt::Write;

use crate::points::ProbePointSet;

/// Format the probe heights of the first `num_points` records, with a mean
/// and population-deviation tail.
///
/// Incomplete records report "not set" and failed measurements "probing
/// failed"; only trusted heights enter the sums, but the mean and deviation
/// still divide by `num_points`. The radicand is floored at zero: with a
/// single sample, rounding can otherwise push E[z²] − E[z]² fractionally
/// negative.
pub fn probe_height_report(points: &ProbePointSet, num_points: usize) -> String {
    let mut reply = String::from("Bed probe heights:");
    let mut sum = 0.0f32;
    let mut sum_of_squares = 0.0f32;

    for point in points.records().iter().take(num_points) {
        if !point.status.fully_probed() {
            reply.push_str(" not set");
        } else if point.status.probe_error {
            reply.push_str(" probing failed");
        } else {
            let _ = write!(reply, " {:.3}", point.z);
            sum += point.z;
            sum_of_squares += point.z * point.z;
        }
    }

    let n = num_points as f32;
    let mean = sum / n;
    let deviation = (sum_of_squares / n - mean * mean).max(0.0).sqrt();
    let _ = write!(reply, ", mean {:.3}, deviation from mean {:.3}", mean, deviation);
    reply
}

/// Raw diagnostic variant: every height is printed regardless of record
/// status, and the deviation radicand is not floored.
pub fn raw_height_report(points: &ProbePointSet, num_points: usize) -> String {
    let mut reply = String::from("Z probe offsets:");
    let mut sum = 0.0f32;
    let mut sum_of_squares = 0.0f32;

    for point in points.records().iter().take(num_points) {
        let _ = write!(reply, " {:.3}", point.z);
        sum += point.z;
        sum_of_squares += point.z * point.z;
    }

    let n = num_points as f32;
    let mean = sum / n;
    let deviation = (sum_of_squares / n - mean * mean).sqrt();
    let _ = write!(reply, ", mean {:.3}, deviation from mean {:.3}", mean, deviation);
    reply
}

//! Piecewise-linear interpolation.
//!
//! Maps an input (usually a frame number) through matching input/output
//! breakpoints. Inputs outside the breakpoint range are handled per side by
//! an [`Extrapolate`] rule. The input breakpoints are expected to be
//! non-decreasing; a zero-width segment acts as a step.

/// What to do with inputs beyond the first or last breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Per-side extrapolation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpolateOptions {
    pub left: Extrapolate,
    pub right: Extrapolate,
}

impl InterpolateOptions {
    /// Clamp on both sides.
    pub const CLAMP: InterpolateOptions = InterpolateOptions {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };

    /// Extend on the left, clamp on the right.
    pub const CLAMP_RIGHT: InterpolateOptions = InterpolateOptions {
        left: Extrapolate::Extend,
        right: Extrapolate::Clamp,
    };
}

/// Interpolate `input` through `input_range` → `output_range`.
///
/// With fewer than two breakpoints there is no slope: one breakpoint
/// yields its output, zero breakpoints yield the input.
pub fn interpolate<const N: usize>(
    input: f64,
    input_range: [f64; N],
    output_range: [f64; N],
    options: InterpolateOptions,
) -> f64 {
    if N < 2 {
        return output_range.first().copied().unwrap_or(input);
    }

    let segment = find_segment(input, &input_range);
    interpolate_segment(
        input,
        (input_range[segment], input_range[segment + 1]),
        (output_range[segment], output_range[segment + 1]),
        options,
    )
}

/// Index of the segment `[range[i], range[i + 1]]` that handles `input`.
fn find_segment(input: f64, range: &[f64]) -> usize {
    let mut i = 1;
    while i < range.len() - 1 {
        if range[i] >= input {
            break;
        }
        i += 1;
    }
    i - 1
}

fn interpolate_segment(
    input: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    options: InterpolateOptions,
) -> f64 {
    if in_max == in_min {
        return if input >= in_max { out_max } else { out_min };
    }

    let mut x = input;

    if x < in_min {
        match options.left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Extend => {}
        }
    }

    if x > in_max {
        match options.right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    let t = (x - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_linear() {
        let v = interpolate(75.0, [0.0, 150.0], [1.0, 1.15], InterpolateOptions::CLAMP_RIGHT);
        assert!((v - 1.075).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_right_holds_last_value() {
        let v = interpolate(400.0, [0.0, 150.0], [0.0, -50.0], InterpolateOptions::CLAMP_RIGHT);
        assert!((v + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_extend_left_continues_slope() {
        let v = interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], InterpolateOptions::CLAMP_RIGHT);
        assert!((v + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_identity_returns_input() {
        let options = InterpolateOptions {
            left: Extrapolate::Identity,
            right: Extrapolate::Identity,
        };
        assert_eq!(interpolate(-3.0, [0.0, 1.0], [5.0, 6.0], options), -3.0);
        assert_eq!(interpolate(7.0, [0.0, 1.0], [5.0, 6.0], options), 7.0);
    }

    #[test]
    fn test_multi_segment_envelope() {
        let range = [0.0, 9.0, 141.0, 150.0];
        let out = [0.0, 1.0, 1.0, 0.0];
        let at = |f: f64| interpolate(f, range, out, InterpolateOptions::CLAMP);
        assert_eq!(at(0.0), 0.0);
        assert!((at(4.5) - 0.5).abs() < 1e-9);
        assert_eq!(at(9.0), 1.0);
        assert_eq!(at(75.0), 1.0);
        assert_eq!(at(141.0), 1.0);
        assert!((at(145.5) - 0.5).abs() < 1e-9);
        assert_eq!(at(150.0), 0.0);
        assert_eq!(at(500.0), 0.0);
        assert_eq!(at(-20.0), 0.0);
    }

    #[test]
    fn test_zero_width_segment_is_a_step() {
        let v = interpolate(5.0, [5.0, 5.0], [0.0, 1.0], InterpolateOptions::CLAMP);
        assert_eq!(v, 1.0);
        let v = interpolate(4.0, [5.0, 5.0], [0.0, 1.0], InterpolateOptions::CLAMP);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_degenerate_ranges() {
        assert_eq!(interpolate(3.0, [], [], InterpolateOptions::default()), 3.0);
        assert_eq!(interpolate(3.0, [1.0], [9.0], InterpolateOptions::default()), 9.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clamped_output_stays_within_outputs(
                x in -1e4f64..1e4,
                a in -100.0f64..100.0,
                b in -100.0f64..100.0,
            ) {
                let v = interpolate(x, [0.0, 300.0], [a, b], InterpolateOptions::CLAMP);
                prop_assert!(v >= a.min(b) - 1e-9 && v <= a.max(b) + 1e-9);
            }

            #[test]
            fn increasing_outputs_are_monotonic(x in 0.0f64..300.0, dx in 0.0f64..50.0) {
                let f = |v| interpolate(v, [0.0, 60.0, 120.0], [0.0, 0.5, 1.0], InterpolateOptions::CLAMP);
                prop_assert!(f(x + dx) >= f(x) - 1e-12);
            }
        }
    }
}

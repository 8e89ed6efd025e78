/// Linear interpolation of `value` from `input` onto `output`, clamped at both ends.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if i1 == i0 {
        return o0;
    }
    let t = ((value - i0) / (i1 - i0)).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

/// Hero content fade and drift for a given vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub opacity: f64,
    pub offset_y: f64,
}

impl Parallax {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            opacity: map_range(scroll_y, (0.0, 400.0), (1.0, 0.0)),
            offset_y: map_range(scroll_y, (0.0, 800.0), (0.0, 240.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            self.opacity, self.offset_y
        )
    }
}

/// Style placing the pointer glow under the last known pointer position.
pub fn glow_style(x: f64, y: f64) -> String {
    format!("left: {x}px; top: {y}px;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_curves() {
        assert_eq!(
            Parallax::at(0.0),
            Parallax {
                opacity: 1.0,
                offset_y: 0.0
            }
        );
        let mid = Parallax::at(200.0);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.offset_y - 60.0).abs() < 1e-9);

        let far = Parallax::at(2000.0);
        assert_eq!(far.opacity, 0.0);
        assert_eq!(far.offset_y, 240.0);
    }

    #[test]
    fn test_negative_scroll_is_clamped() {
        // overscroll bounce on some browsers
        assert_eq!(Parallax::at(-50.0).opacity, 1.0);
    }

    #[test]
    fn test_styles() {
        assert_eq!(
            Parallax::at(400.0).style(),
            "opacity: 0.000; transform: translateY(120.0px);"
        );
        assert_eq!(glow_style(10.0, 20.5), "left: 10px; top: 20.5px;");
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(map_range(5.0, (1.0, 1.0), (3.0, 9.0)), 3.0);
    }
}

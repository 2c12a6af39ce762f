operator! {
    /// Begins a new subpath at `(x, y)` (`m`).
    MoveTo => "m" { x, y }
}

operator! {
    /// Appends a straight segment to `(x, y)` (`l`).
    LineTo => "l" { x, y }
}

operator! {
    /// Appends a cubic Bézier curve with two control points (`c`).
    CurveTo => "c" { x1, y1, x2, y2, x3, y3 }
}

operator! {
    /// Appends a closed rectangle subpath (`re`).
    Rectangle => "re" { x, y, width, height }
}

operator! {
    ClosePath => "h"
}

operator! {
    Stroke => "S"
}

operator! {
    /// Fills the path using the nonzero winding number rule (`f`).
    Fill => "f"
}

operator! {
    /// Fills, then strokes the path (`B`).
    FillStroke => "B"
}

operator! {
    /// Ends the path without painting it, usually after a clip (`n`).
    EndPath => "n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Encode, Error, Object};

    #[test]
    fn path_construction() {
        assert_eq!(MoveTo::new(10, 20).encode(), b"10 20 m\n");
        assert_eq!(CurveTo::new(0, 0, 50.5, 100, 100, 0).encode(), b"0 0 50.5 100 100 0 c\n");
        assert_eq!(Rectangle::new(0, 0, 612, 792).encode(), b"0 0 612 792 re\n");
        assert_eq!(Fill.encode(), b"f\n");
    }

    #[test]
    fn painting_operators_take_no_operands() {
        let operands = [Object::Integer(1)];
        assert!(matches!(
            Stroke::try_from(&operands[..]),
            Err(Error::OperandCount {
                operator: "S",
                expected: 0,
                found: 1
            })
        ));
        let none: [Object; 0] = [];
        assert_eq!(Stroke::try_from(&none[..]).ok(), Some(Stroke));
    }
}

operator! {
    /// Sets the nonstroking colour space to DeviceGray and the gray level (`g`).
    SetFillGray => "g" { gray }
}

operator! {
    /// Stroking counterpart of `g` (`G`).
    SetStrokeGray => "G" { gray }
}

operator! {
    /// Sets the nonstroking colour space to DeviceRGB and the colour (`rg`).
    SetFillRgb => "rg" { red, green, blue }
}

operator! {
    SetStrokeRgb => "RG" { red, green, blue }
}

operator! {
    /// Sets the nonstroking colour space to DeviceCMYK and the colour (`k`).
    SetFillCmyk => "k" { cyan, magenta, yellow, black }
}

operator! {
    SetStrokeCmyk => "K" { cyan, magenta, yellow, black }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Encode, Number, Object};

    #[test]
    fn colour_components_in_order() {
        assert_eq!(SetFillRgb::new(1, 0.5, 0).encode(), b"1 0.5 0 rg\n");
        assert_eq!(SetStrokeCmyk::new(0, 0, 0, 1).encode(), b"0 0 0 1 K\n");
        assert_eq!(SetStrokeGray::new(0.2).gray(), Number::Real(0.2));
    }

    #[test]
    fn components_accept_integers_and_reals() {
        let operands = [Object::Real(0.1), Object::Integer(0), Object::Real(0.9)];
        let operator = SetStrokeRgb::try_from(&operands[..]).ok();
        assert_eq!(operator, Some(SetStrokeRgb::new(0.1, 0, 0.9)));
    }
}

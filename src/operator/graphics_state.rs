use super::{name_operand, operation_size, single_operand, write_operation};
use crate::object::{Name, Object};
use crate::writer::Encode;
use crate::{Error, Result};

operator! {
    /// Pushes a copy of the graphics state (`q`).
    SaveState => "q"
}

operator! {
    /// Pops the graphics state saved by the matching `q` (`Q`).
    RestoreState => "Q"
}

operator! {
    /// Concatenates `[a b c d e f]` to the current transformation matrix (`cm`).
    Transform => "cm" { a, b, c, d, e, f }
}

operator! {
    SetLineWidth => "w" { width }
}

/// Applies the parameters of a named ExtGState resource (`gs`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetExtGState {
    name: Name,
}

impl SetExtGState {
    pub const KEYWORD: &'static str = "gs";

    pub fn new<N: Into<Name>>(name: N) -> Self {
        SetExtGState { name: name.into() }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl Encode for SetExtGState {
    fn size(&self) -> usize {
        operation_size(&[&self.name], Self::KEYWORD)
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_operation(buffer, &[&self.name], Self::KEYWORD)
    }
}

impl TryFrom<&[Object]> for SetExtGState {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        let name = single_operand(Self::KEYWORD, operands)?;
        name_operand(Self::KEYWORD, "dictName", name).map(SetExtGState::new)
    }
}

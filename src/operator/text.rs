use super::{check_arity, name_operand, number_operand, operation_size, write_operation};
use crate::object::{Name, Number, Object};
use crate::writer::Encode;
use crate::{Error, Result};

operator! {
    /// Begins a text object (`BT`). Resets the text matrix and text line matrix.
    BeginText => "BT"
}

operator! {
    /// Ends a text object (`ET`).
    EndText => "ET"
}

operator! {
    /// Sets the character spacing, in unscaled text space units (`Tc`).
    SetCharacterSpacing => "Tc" { char_space }
}

operator! {
    /// Sets the word spacing, in unscaled text space units (`Tw`).
    SetWordSpacing => "Tw" { word_space }
}

operator! {
    /// Sets the horizontal scaling, in percent of the normal width (`Tz`).
    SetHorizontalScaling => "Tz" { scale }
}

operator! {
    /// Sets the text leading used by `T*`, `'` and `"` (`TL`).
    SetTextLeading => "TL" { leading }
}

operator! {
    /// Sets the text rise (`Ts`).
    SetTextRise => "Ts" { rise }
}

operator! {
    /// Moves to the start of the next line, offset from the start of the current one (`Td`).
    MoveText => "Td" { tx, ty }
}

operator! {
    /// Like `Td`, and also sets the leading to `-ty` (`TD`).
    MoveTextSetLeading => "TD" { tx, ty }
}

operator! {
    /// Sets the text matrix and the text line matrix (`Tm`).
    SetTextMatrix => "Tm" { a, b, c, d, e, f }
}

operator! {
    /// Moves to the start of the next line using the current leading (`T*`).
    NextLine => "T*"
}

/// Selects a font resource and size (`Tf`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetFont {
    font: Name,
    size: Number,
}

impl SetFont {
    pub const KEYWORD: &'static str = "Tf";

    /// `font` is the key of the font in the resource dictionary, without the `/`.
    pub fn new<F: Into<Name>, S: Into<Number>>(font: F, size: S) -> Self {
        SetFont {
            font: font.into(),
            size: size.into(),
        }
    }

    pub fn font(&self) -> &Name {
        &self.font
    }

    pub fn font_size(&self) -> Number {
        self.size
    }
}

impl Encode for SetFont {
    fn size(&self) -> usize {
        operation_size(&[&self.font, &self.size], Self::KEYWORD)
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_operation(buffer, &[&self.font, &self.size], Self::KEYWORD)
    }
}

impl TryFrom<&[Object]> for SetFont {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        check_arity(Self::KEYWORD, operands, 2)?;
        Ok(SetFont {
            font: name_operand(Self::KEYWORD, "font", &operands[0])?,
            size: number_operand(Self::KEYWORD, "size", &operands[1])?,
        })
    }
}

/// How glyph outlines are painted and whether they add to the clipping path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextRenderingMode {
    #[default]
    Fill = 0,
    Stroke = 1,
    FillStroke = 2,
    Invisible = 3,
    FillClip = 4,
    StrokeClip = 5,
    FillStrokeClip = 6,
    Clip = 7,
}

impl TryFrom<i64> for TextRenderingMode {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, i64> {
        use TextRenderingMode::*;
        Ok(match value {
            0 => Fill,
            1 => Stroke,
            2 => FillStroke,
            3 => Invisible,
            4 => FillClip,
            5 => StrokeClip,
            6 => FillStrokeClip,
            7 => Clip,
            _ => return Err(value),
        })
    }
}

/// Sets the text rendering mode (`Tr`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetTextRenderingMode {
    mode: TextRenderingMode,
}

impl SetTextRenderingMode {
    pub const KEYWORD: &'static str = "Tr";

    pub fn new(mode: TextRenderingMode) -> Self {
        SetTextRenderingMode { mode }
    }

    pub fn mode(&self) -> TextRenderingMode {
        self.mode
    }

    fn operand(&self) -> Number {
        Number::Integer(self.mode as i64)
    }
}

impl Encode for SetTextRenderingMode {
    fn size(&self) -> usize {
        operation_size(&[&self.operand()], Self::KEYWORD)
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_operation(buffer, &[&self.operand()], Self::KEYWORD)
    }
}

impl TryFrom<&[Object]> for SetTextRenderingMode {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        let operand = super::single_operand(Self::KEYWORD, operands)?;
        let invalid = Error::Validation {
            operator: Self::KEYWORD,
            argument: "render",
            expected: "Integer 0 to 7",
            found: operand.kind(),
        };
        let mode = operand.as_i64().ok().and_then(|value| TextRenderingMode::try_from(value).ok());
        mode.map(SetTextRenderingMode::new).ok_or(invalid)
    }
}

use super::{check_arity, number_operand, operand, operation_size, single_operand, string_operand, write_operation};
use crate::object::{Array, Number, Object, PdfString};
use crate::writer::{write_bytes, Encode};
use crate::{Error, Result};

/// Element of a `TJ` array: glyphs to paint, or a position adjustment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextElement {
    /// Paints the glyphs of the string.
    String(PdfString),
    /// Shifts the text position by this many thousandths of a text space unit.
    /// Positive values move the next glyph left, or down in vertical writing mode.
    Number(Number),
}

impl Encode for TextElement {
    fn size(&self) -> usize {
        match self {
            TextElement::String(string) => string.size(),
            TextElement::Number(number) => number.size(),
        }
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        match self {
            TextElement::String(string) => string.write(buffer),
            TextElement::Number(number) => number.write(buffer),
        }
    }
}

impl From<PdfString> for TextElement {
    fn from(string: PdfString) -> Self {
        TextElement::String(string)
    }
}

impl From<&str> for TextElement {
    fn from(text: &str) -> Self {
        TextElement::String(text.into())
    }
}

impl From<String> for TextElement {
    fn from(text: String) -> Self {
        TextElement::String(text.into())
    }
}

impl From<Number> for TextElement {
    fn from(number: Number) -> Self {
        TextElement::Number(number)
    }
}

macro_rules! text_element_from_numbers {
	($( $Num: ty )+) => {
		$(
			impl From<$Num> for TextElement {
				fn from(number: $Num) -> Self {
					TextElement::Number(number.into())
				}
			}
		)+
	}
}

text_element_from_numbers! {
    i32 i64 f32 f64
}

impl TryFrom<&Object> for TextElement {
    type Error = Error;

    fn try_from(object: &Object) -> Result<Self> {
        match object {
            Object::String(bytes, format) => Ok(TextElement::String(PdfString::new(bytes.clone(), *format))),
            Object::Integer(value) => Ok(TextElement::Number(Number::Integer(*value))),
            Object::Real(value) => Ok(TextElement::Number(Number::from(*value))),
            _ => Err(Error::Validation {
                operator: ShowTextArray::KEYWORD,
                argument: "array",
                expected: "String, HexString, Integer, Real",
                found: object.kind(),
            }),
        }
    }
}

/// Builds the elements of a `TJ` array from mixed strings and numbers.
///
/// ```
/// use pdfops::{text_array, Encode, ShowTextArray};
///
/// let operator = ShowTextArray::new(text_array!["A", -120, "B"]);
/// assert_eq!(operator.encode(), b"[(A) -120 (B)] TJ\n");
/// ```
#[macro_export]
macro_rules! text_array {
	($( $element: expr ),* $(,)?) => {
		[$( $crate::TextElement::from($element) ),*]
	};
}

/// Shows a text string (`Tj`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowText {
    string: PdfString,
}

impl ShowText {
    pub const KEYWORD: &'static str = "Tj";

    /// Raw strings are shown as literal strings.
    pub fn new<S: Into<PdfString>>(string: S) -> Self {
        ShowText { string: string.into() }
    }

    pub fn string(&self) -> &PdfString {
        &self.string
    }
}

impl Encode for ShowText {
    fn encode(&self) -> Vec<u8> {
        let mut bytes = self.string.encode();
        bytes.extend_from_slice(b" Tj\n");
        bytes
    }

    fn size(&self) -> usize {
        self.encode().len()
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_bytes(buffer, &self.encode())
    }
}

impl TryFrom<&Object> for ShowText {
    type Error = Error;

    fn try_from(string: &Object) -> Result<Self> {
        string_operand(Self::KEYWORD, "string", string).map(ShowText::new)
    }
}

impl TryFrom<&[Object]> for ShowText {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        ShowText::try_from(single_operand(Self::KEYWORD, operands)?)
    }
}

/// Shows text strings with individual glyph positioning (`TJ`).
///
/// Each element either paints a string or adjusts the text position, in the
/// order given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowTextArray {
    array: Array<TextElement>,
}

impl ShowTextArray {
    pub const KEYWORD: &'static str = "TJ";

    const TRAILER: &'static [u8] = b" TJ\n";

    pub fn new<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextElement>,
    {
        ShowTextArray {
            array: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates untyped array elements. Fails on the first element that is
    /// neither a string nor a number.
    pub fn from_objects(elements: &[Object]) -> Result<Self> {
        let array = elements.iter().map(TextElement::try_from).collect::<Result<Array<_>>>()?;
        Ok(ShowTextArray { array })
    }

    pub fn elements(&self) -> &[TextElement] {
        self.array.as_slice()
    }
}

impl Encode for ShowTextArray {
    fn size(&self) -> usize {
        self.array.size() + Self::TRAILER.len()
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        let remaining = self.array.write(buffer);
        write_bytes(remaining, Self::TRAILER)
    }
}

impl TryFrom<&Object> for ShowTextArray {
    type Error = Error;

    fn try_from(array: &Object) -> Result<Self> {
        ShowTextArray::from_objects(operand(Self::KEYWORD, "array", array.as_array())?)
    }
}

impl TryFrom<&[Object]> for ShowTextArray {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        ShowTextArray::try_from(single_operand(Self::KEYWORD, operands)?)
    }
}

/// Moves to the next line and shows a text string (`'`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextLineShowText {
    string: PdfString,
}

impl NextLineShowText {
    pub const KEYWORD: &'static str = "'";

    pub fn new<S: Into<PdfString>>(string: S) -> Self {
        NextLineShowText { string: string.into() }
    }

    pub fn string(&self) -> &PdfString {
        &self.string
    }
}

impl Encode for NextLineShowText {
    fn size(&self) -> usize {
        operation_size(&[&self.string], Self::KEYWORD)
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_operation(buffer, &[&self.string], Self::KEYWORD)
    }
}

impl TryFrom<&[Object]> for NextLineShowText {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        let string = single_operand(Self::KEYWORD, operands)?;
        string_operand(Self::KEYWORD, "string", string).map(NextLineShowText::new)
    }
}

/// Sets word and character spacing, moves to the next line and shows a text string (`"`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextLineShowTextSpaced {
    word_space: Number,
    char_space: Number,
    string: PdfString,
}

impl NextLineShowTextSpaced {
    pub const KEYWORD: &'static str = "\"";

    pub fn new<W, C, S>(word_space: W, char_space: C, string: S) -> Self
    where
        W: Into<Number>,
        C: Into<Number>,
        S: Into<PdfString>,
    {
        NextLineShowTextSpaced {
            word_space: word_space.into(),
            char_space: char_space.into(),
            string: string.into(),
        }
    }

    pub fn word_space(&self) -> Number {
        self.word_space
    }

    pub fn char_space(&self) -> Number {
        self.char_space
    }

    pub fn string(&self) -> &PdfString {
        &self.string
    }
}

impl Encode for NextLineShowTextSpaced {
    fn size(&self) -> usize {
        operation_size(&[&self.word_space, &self.char_space, &self.string], Self::KEYWORD)
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_operation(buffer, &[&self.word_space, &self.char_space, &self.string], Self::KEYWORD)
    }
}

impl TryFrom<&[Object]> for NextLineShowTextSpaced {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        check_arity(Self::KEYWORD, operands, 3)?;
        Ok(NextLineShowTextSpaced {
            word_space: number_operand(Self::KEYWORD, "aw", &operands[0])?,
            char_space: number_operand(Self::KEYWORD, "ac", &operands[1])?,
            string: string_operand(Self::KEYWORD, "string", &operands[2])?,
        })
    }
}

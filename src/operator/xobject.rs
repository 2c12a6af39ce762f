use super::single_operand;
use crate::object::{Object, StringFormat};
use crate::writer::{write_bytes, Encode};
use crate::{Error, Result};

/// Paints the XObject registered under `name` in the current resource dictionary (`Do`).
///
/// The name is written exactly as given, without escaping or checks. Pass
/// `/Im1` to get a name operand, or use [`PaintXObject::try_from`] with an
/// [`Object::Name`], which adds the marker and escapes delimiters itself. An
/// empty name gives ` Do\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaintXObject {
    name: String,
}

impl PaintXObject {
    pub const KEYWORD: &'static str = "Do";

    pub fn new<N: Into<String>>(name: N) -> Self {
        PaintXObject { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Encode for PaintXObject {
    fn encode(&self) -> Vec<u8> {
        format!("{} Do\n", self.name).into_bytes()
    }

    fn size(&self) -> usize {
        self.encode().len()
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_bytes(buffer, &self.encode())
    }
}

impl TryFrom<&Object> for PaintXObject {
    type Error = Error;

    fn try_from(name: &Object) -> Result<Self> {
        let invalid = || Error::Validation {
            operator: Self::KEYWORD,
            argument: "name",
            expected: "Name, String",
            found: name.kind(),
        };
        match name {
            // Name escapes keep the written form ASCII.
            Object::Name(_) => Ok(PaintXObject::new(String::from_utf8_lossy(&name.encode()))),
            Object::String(bytes, StringFormat::Literal) => String::from_utf8(bytes.clone())
                .map(PaintXObject::new)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<&[Object]> for PaintXObject {
    type Error = Error;

    fn try_from(operands: &[Object]) -> Result<Self> {
        PaintXObject::try_from(single_operand(Self::KEYWORD, operands)?)
    }
}

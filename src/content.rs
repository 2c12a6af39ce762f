use std::io::Write;

use log::debug;

use crate::writer::Encode;
use crate::{Error, Object, Operator, Result};

/// One content stream instruction in untyped form: operands followed by an operator keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: String,
    pub operands: Vec<Object>,
}

impl Operation {
    pub fn new(operator: &str, operands: Vec<Object>) -> Operation {
        Operation {
            operator: operator.to_string(),
            operands,
        }
    }
}

/// Ordered operators of one content stream.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Content {
    pub operations: Vec<Operator>,
}

impl Content {
    pub fn new() -> Content {
        Content::default()
    }

    pub fn push<O: Into<Operator>>(&mut self, operator: O) -> &mut Self {
        self.operations.push(operator.into());
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Encodes the content stream into `target`.
    pub fn write_to<W: Write>(&self, target: &mut W) -> Result<()> {
        target.write_all(&self.encode())?;
        Ok(())
    }
}

impl Encode for Content {
    fn size(&self) -> usize {
        self.operations.iter().map(Encode::size).sum()
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        self.operations
            .iter()
            .fold(buffer, |remaining, operator| operator.write(remaining))
    }

    /// Sizes every operator first, then writes them all into one allocation.
    fn encode(&self) -> Vec<u8> {
        let size = self.size();
        let mut buffer = vec![0; size];
        let remaining = self.write(&mut buffer).len();
        debug_assert_eq!(remaining, 0, "size() does not match the bytes written");
        debug!("encoded content stream: {} operators, {} bytes", self.operations.len(), size);
        buffer
    }
}

impl FromIterator<Operator> for Content {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        Content {
            operations: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[Operation]> for Content {
    type Error = Error;

    /// Validates every operation; the first invalid one fails the whole stream.
    fn try_from(operations: &[Operation]) -> Result<Self> {
        operations.iter().map(Operator::try_from).collect()
    }
}

impl TryFrom<Vec<Operation>> for Content {
    type Error = Error;

    fn try_from(operations: Vec<Operation>) -> Result<Self> {
        Content::try_from(operations.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{text_array, BeginText, EndText, MoveText, PaintXObject, SetFont, ShowText, ShowTextArray};

    fn sample() -> Content {
        let mut content = Content::new();
        content
            .push(BeginText)
            .push(SetFont::new("F1", 24))
            .push(MoveText::new(100, 600))
            .push(ShowText::new("Hello"))
            .push(ShowTextArray::new(text_array!["W", 120, "orld"]))
            .push(EndText)
            .push(PaintXObject::new("/Im1"));
        content
    }

    #[test]
    fn encode_concatenates_operators() {
        let content = sample();
        let expected: &[u8] = b"BT\n/F1 24 Tf\n100 600 Td\n(Hello) Tj\n[(W) 120 (orld)] TJ\nET\n/Im1 Do\n";
        assert_eq!(content.encode(), expected);
        assert_eq!(content.size(), expected.len());
        assert_eq!(content.len(), 7);
    }

    #[test]
    fn write_to_matches_encode() {
        let content = sample();
        let mut target = Vec::new();
        content.write_to(&mut target).unwrap();
        assert_eq!(target, content.encode());
    }

    #[test]
    fn empty_content_is_empty() {
        assert!(Content::new().encode().is_empty());
        assert!(Content::new().is_empty());
    }

    #[test]
    fn operations_are_validated_into_content() {
        let operations = vec![
            Operation::new("q", vec![]),
            Operation::new("cm", vec![100.into(), 0.into(), 0.into(), 100.into(), 50.into(), 50.into()]),
            Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]),
            Operation::new("Q", vec![]),
        ];
        let content = Content::try_from(operations).unwrap();
        assert_eq!(content.encode(), b"q\n100 0 0 100 50 50 cm\n/Im1 Do\nQ\n");
    }

    #[test]
    fn first_invalid_operation_fails_the_stream() {
        let operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tj", vec![Object::Integer(1)]),
        ];
        assert!(matches!(
            Content::try_from(operations),
            Err(Error::Validation { operator: "Tj", .. })
        ));
    }
}

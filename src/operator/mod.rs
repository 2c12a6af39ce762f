//! Typed content stream operators.
//!
//! Each operator is validated when it is built and can then only be encoded.
//! The generic text form is `operand operand ... keyword\n`, with a single
//! space after every operand.

use crate::content::Operation;
use crate::object::{Name, Number, Object, PdfString};
use crate::writer::{write_bytes, Encode};
use crate::{Error, Result};

/// Declares an operator whose operands are all numbers (or that has none).
macro_rules! operator {
    (
        $(#[$meta:meta])*
        $name:ident => $keyword:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name;

        impl $name {
            pub const KEYWORD: &'static str = $keyword;
        }

        impl $crate::writer::Encode for $name {
            fn size(&self) -> usize {
                $crate::operator::operation_size(&[], Self::KEYWORD)
            }

            fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
                $crate::operator::write_operation(buffer, &[], Self::KEYWORD)
            }
        }

        impl TryFrom<&[$crate::Object]> for $name {
            type Error = $crate::Error;

            fn try_from(operands: &[$crate::Object]) -> $crate::Result<Self> {
                $crate::operator::check_arity(Self::KEYWORD, operands, 0)?;
                Ok($name)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident => $keyword:literal { $($field:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $($field: $crate::Number,)+
        }

        impl $name {
            pub const KEYWORD: &'static str = $keyword;

            pub fn new($($field: impl Into<$crate::Number>),+) -> Self {
                $name {
                    $($field: $field.into(),)+
                }
            }

            $(
                pub fn $field(&self) -> $crate::Number {
                    self.$field
                }
            )+
        }

        impl $crate::writer::Encode for $name {
            fn size(&self) -> usize {
                $crate::operator::operation_size(
                    &[$(&self.$field as &dyn $crate::writer::Encode),+],
                    Self::KEYWORD,
                )
            }

            fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
                $crate::operator::write_operation(
                    buffer,
                    &[$(&self.$field as &dyn $crate::writer::Encode),+],
                    Self::KEYWORD,
                )
            }
        }

        impl TryFrom<&[$crate::Object]> for $name {
            type Error = $crate::Error;

            fn try_from(operands: &[$crate::Object]) -> $crate::Result<Self> {
                const ARITY: usize = [$(stringify!($field)),+].len();
                let [$($field),+] = operands else {
                    return Err($crate::Error::OperandCount {
                        operator: Self::KEYWORD,
                        expected: ARITY,
                        found: operands.len(),
                    });
                };
                Ok($name {
                    $($field: $crate::operator::number_operand(Self::KEYWORD, stringify!($field), $field)?,)+
                })
            }
        }
    };
}

mod color;
mod graphics_state;
mod path;
mod text;
mod text_showing;
mod xobject;

pub use self::color::*;
pub use self::graphics_state::*;
pub use self::path::*;
pub use self::text::*;
pub use self::text_showing::*;
pub use self::xobject::*;

pub(crate) fn operation_size(operands: &[&dyn Encode], keyword: &str) -> usize {
    operands.iter().map(|operand| operand.size() + 1).sum::<usize>() + keyword.len() + 1
}

pub(crate) fn write_operation<'a>(buffer: &'a mut [u8], operands: &[&dyn Encode], keyword: &str) -> &'a mut [u8] {
    let mut buffer = buffer;
    for operand in operands {
        buffer = operand.write(buffer);
        buffer = write_bytes(buffer, b" ");
    }
    buffer = write_bytes(buffer, keyword.as_bytes());
    write_bytes(buffer, b"\n")
}

pub(crate) fn check_arity(operator: &'static str, operands: &[Object], expected: usize) -> Result<()> {
    if operands.len() != expected {
        return Err(Error::OperandCount {
            operator,
            expected,
            found: operands.len(),
        });
    }
    Ok(())
}

pub(crate) fn single_operand<'a>(operator: &'static str, operands: &'a [Object]) -> Result<&'a Object> {
    match operands {
        [operand] => Ok(operand),
        _ => Err(Error::OperandCount {
            operator,
            expected: 1,
            found: operands.len(),
        }),
    }
}

/// Reports an accessor's type mismatch as a validation error of `argument`.
pub(crate) fn operand<T>(operator: &'static str, argument: &'static str, value: Result<T>) -> Result<T> {
    value.map_err(|err| match err {
        Error::ObjectType { expected, found } => Error::Validation {
            operator,
            argument,
            expected,
            found,
        },
        err => err,
    })
}

pub(crate) fn number_operand(operator: &'static str, argument: &'static str, object: &Object) -> Result<Number> {
    operand(operator, argument, object.as_number())
}

pub(crate) fn string_operand(operator: &'static str, argument: &'static str, object: &Object) -> Result<PdfString> {
    operand(operator, argument, object.as_string())
}

pub(crate) fn name_operand(operator: &'static str, argument: &'static str, object: &Object) -> Result<Name> {
    operand(operator, argument, object.as_name().map(Name::new))
}

macro_rules! operators {
    ($($variant:ident),+ $(,)?) => {
        /// Any supported content stream operator.
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Operator {
            $($variant($variant),)+
        }

        impl Operator {
            /// Keyword that ends the operator's text form, e.g. `TJ`.
            pub fn keyword(&self) -> &'static str {
                match self {
                    $(Operator::$variant(_) => $variant::KEYWORD,)+
                }
            }
        }

        impl Encode for Operator {
            fn size(&self) -> usize {
                match self {
                    $(Operator::$variant(operator) => operator.size(),)+
                }
            }

            fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
                match self {
                    $(Operator::$variant(operator) => operator.write(buffer),)+
                }
            }

            fn encode(&self) -> Vec<u8> {
                match self {
                    $(Operator::$variant(operator) => operator.encode(),)+
                }
            }
        }

        $(
            impl From<$variant> for Operator {
                fn from(operator: $variant) -> Self {
                    Operator::$variant(operator)
                }
            }
        )+

        impl TryFrom<&Operation> for Operator {
            type Error = Error;

            /// Validates an untyped operation against the operator its keyword names.
            fn try_from(operation: &Operation) -> Result<Self> {
                let operands = operation.operands.as_slice();
                match operation.operator.as_str() {
                    $($variant::KEYWORD => $variant::try_from(operands).map(Operator::$variant),)+
                    other => Err(Error::UnknownOperator(other.to_string())),
                }
            }
        }
    };
}

operators! {
    PaintXObject,
    BeginText,
    EndText,
    SetCharacterSpacing,
    SetWordSpacing,
    SetHorizontalScaling,
    SetTextLeading,
    SetFont,
    SetTextRenderingMode,
    SetTextRise,
    MoveText,
    MoveTextSetLeading,
    SetTextMatrix,
    NextLine,
    ShowText,
    ShowTextArray,
    NextLineShowText,
    NextLineShowTextSpaced,
    SaveState,
    RestoreState,
    Transform,
    SetLineWidth,
    SetExtGState,
    SetFillGray,
    SetStrokeGray,
    SetFillRgb,
    SetStrokeRgb,
    SetFillCmyk,
    SetStrokeCmyk,
    MoveTo,
    LineTo,
    CurveTo,
    Rectangle,
    ClosePath,
    Stroke,
    Fill,
    FillStroke,
    EndPath,
}

impl TryFrom<Operation> for Operator {
    type Error = Error;

    fn try_from(operation: Operation) -> Result<Self> {
        Operator::try_from(&operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_array;

    /// Every operator must consume exactly `size()` bytes.
    fn assert_consistent(operator: &Operator) {
        let size = operator.size();
        let mut buffer = vec![0u8; size + 3];
        let remaining = operator.write(&mut buffer).len();
        assert_eq!(remaining, 3, "{:?} wrote {} bytes, size() said {}", operator, size + 3 - remaining, size);
        assert_eq!(&buffer[..size], operator.encode().as_slice());
        assert!(buffer[..size].ends_with(format!("{}\n", operator.keyword()).as_bytes()));
    }

    fn sample_operators() -> Vec<Operator> {
        vec![
            PaintXObject::new("/Im1").into(),
            BeginText.into(),
            SetFont::new("F1", 12).into(),
            SetCharacterSpacing::new(0.25).into(),
            SetWordSpacing::new(1).into(),
            SetHorizontalScaling::new(110).into(),
            SetTextLeading::new(14.5).into(),
            SetTextRenderingMode::new(TextRenderingMode::FillStroke).into(),
            SetTextRise::new(-3).into(),
            MoveText::new(72, 720).into(),
            MoveTextSetLeading::new(0, -14).into(),
            SetTextMatrix::new(1, 0, 0, 1, 72.5, 700).into(),
            NextLine.into(),
            ShowText::new("Hello (world)").into(),
            ShowTextArray::new(text_array!["A", -120, "B", 0.5]).into(),
            NextLineShowText::new(PdfString::hexadecimal(vec![0x01, 0x02])).into(),
            NextLineShowTextSpaced::new(2, 0.5, "spaced").into(),
            EndText.into(),
            SaveState.into(),
            Transform::new(0.5, 0, 0, 0.5, 10, 10).into(),
            SetLineWidth::new(2).into(),
            SetExtGState::new("GS1").into(),
            SetFillGray::new(0.5).into(),
            SetStrokeGray::new(0).into(),
            SetFillRgb::new(1, 0, 0).into(),
            SetStrokeRgb::new(0, 0.5, 1).into(),
            SetFillCmyk::new(0, 0, 0, 1).into(),
            SetStrokeCmyk::new(0.1, 0.2, 0.3, 0.4).into(),
            MoveTo::new(0, 0).into(),
            LineTo::new(100, 100).into(),
            CurveTo::new(1, 2, 3, 4, 5, 6).into(),
            Rectangle::new(10, 10, 200, 50).into(),
            ClosePath.into(),
            Stroke.into(),
            Fill.into(),
            FillStroke.into(),
            EndPath.into(),
            RestoreState.into(),
        ]
    }

    #[test]
    fn size_matches_written_bytes_for_every_operator() {
        for operator in sample_operators() {
            assert_consistent(&operator);
        }
    }

    #[test]
    fn encode_is_idempotent() {
        for operator in sample_operators() {
            assert_eq!(operator.encode(), operator.encode());
            assert_eq!(operator.size(), operator.size());
        }
    }

    #[test]
    fn numeric_operators_use_generic_form() {
        assert_eq!(SetTextMatrix::new(1, 0, 0, 1, 72.5, 700).encode(), b"1 0 0 1 72.5 700 Tm\n");
        assert_eq!(SetFillRgb::new(1, 0, 0).encode(), b"1 0 0 rg\n");
        assert_eq!(BeginText.encode(), b"BT\n");
        assert_eq!(NextLine.encode(), b"T*\n");
    }

    #[test]
    fn operations_convert_to_typed_operators() {
        let operation = Operation::new("Td", vec![72.into(), 720.5.into()]);
        let operator = Operator::try_from(&operation).ok();
        assert_eq!(operator, Some(Operator::MoveText(MoveText::new(72, 720.5))));

        let operation = Operation::new("TJ", vec![Object::Array(vec![Object::string_literal("A"), (-120).into()])]);
        let operator = Operator::try_from(operation).map(|operator| operator.encode()).ok();
        assert_eq!(operator, Some(b"[(A) -120] TJ\n".to_vec()));
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        let operation = Operation::new("Xx", vec![]);
        assert!(matches!(Operator::try_from(&operation), Err(Error::UnknownOperator(keyword)) if keyword == "Xx"));
    }

    #[test]
    fn operand_count_is_checked() {
        let operation = Operation::new("rg", vec![1.into(), 0.into()]);
        assert!(matches!(
            Operator::try_from(&operation),
            Err(Error::OperandCount {
                operator: "rg",
                expected: 3,
                found: 2
            })
        ));
        let operation = Operation::new("BT", vec![1.into()]);
        assert!(matches!(Operator::try_from(&operation), Err(Error::OperandCount { .. })));
    }

    #[test]
    fn operand_kinds_are_checked() {
        let operation = Operation::new("w", vec![Object::string_literal("thick")]);
        match Operator::try_from(&operation) {
            Err(Error::Validation {
                operator,
                argument,
                expected,
                found,
            }) => {
                assert_eq!(operator, "w");
                assert_eq!(argument, "width");
                assert_eq!(expected, "Integer, Real");
                assert_eq!(found, "String");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}

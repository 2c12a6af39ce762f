use crate::{encodings, Error, Result};
use indexmap::IndexMap;
use log::warn;
use std::fmt;

/// String objects can be written in two formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringFormat {
    #[default]
    Literal,
    Hexadecimal,
}

/// A string operand: raw bytes plus the syntax used to write them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfString {
    bytes: Vec<u8>,
    format: StringFormat,
}

/// Numeric object.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Integer(i64),
    Real(f64),
}

/// Name object, written with its leading `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name(Vec<u8>);

/// Ordered sequence of objects, written as `[a b c]`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array<T = Object>(Vec<T>);

/// Dictionary object. Keys keep their insertion order.
#[derive(Clone, Default, PartialEq)]
pub struct Dictionary(IndexMap<Vec<u8>, Object>);

/// Basic PDF object types that can appear as content stream operands.
#[derive(Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Name(Vec<u8>),
    String(Vec<u8>, StringFormat),
    Array(Vec<Object>),
    Dictionary(Dictionary),
}

impl PdfString {
    pub fn new<S: Into<Vec<u8>>>(bytes: S, format: StringFormat) -> Self {
        PdfString {
            bytes: bytes.into(),
            format,
        }
    }

    pub fn literal<S: Into<Vec<u8>>>(bytes: S) -> Self {
        Self::new(bytes, StringFormat::Literal)
    }

    pub fn hexadecimal<S: Into<Vec<u8>>>(bytes: S) -> Self {
        Self::new(bytes, StringFormat::Hexadecimal)
    }

    /// Creates a text string.
    /// If the input only contains ASCII characters, the string is written
    /// as a literal, otherwise as UTF-16BE (with byte order mark) in hex.
    pub fn text(text: &str) -> Self {
        if text.is_ascii() {
            return Self::literal(text);
        }
        Self::hexadecimal(encodings::encode_utf16_be(text))
    }

    /// Literal string holding `text` in WinAnsiEncoding, the single byte
    /// encoding of the standard 14 fonts.
    pub fn win_ansi(text: &str) -> Result<Self> {
        Ok(Self::literal(encodings::encode_win_ansi(text)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> StringFormat {
        self.format
    }

    pub fn is_hexadecimal(&self) -> bool {
        self.format == StringFormat::Hexadecimal
    }
}

impl From<&str> for PdfString {
    fn from(text: &str) -> Self {
        PdfString::literal(text)
    }
}

impl From<String> for PdfString {
    fn from(text: String) -> Self {
        PdfString::literal(text)
    }
}

impl From<Vec<u8>> for PdfString {
    fn from(bytes: Vec<u8>) -> Self {
        PdfString::literal(bytes)
    }
}

impl From<&[u8]> for PdfString {
    fn from(bytes: &[u8]) -> Self {
        PdfString::literal(bytes)
    }
}

impl Number {
    /// Real number. Values that PDF cannot express (NaN, infinities) become `0`.
    pub fn real(value: f64) -> Self {
        if !value.is_finite() {
            warn!("non-finite real {} cannot be written to a content stream, using 0", value);
            return Number::Real(0.0);
        }
        Number::Real(value)
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

macro_rules! number_from_ints {
	($( $Int: ty )+) => {
		$(
			impl From<$Int> for Number {
				fn from(number: $Int) -> Self {
					Number::Integer(i64::from(number))
				}
			}
		)+
	}
}

number_from_ints! {
    i8 i16 i32 i64
    u8 u16 u32
}

impl From<f64> for Number {
    fn from(number: f64) -> Self {
        Number::real(number)
    }
}

impl From<f32> for Number {
    fn from(number: f32) -> Self {
        Number::real(f64::from(number))
    }
}

impl Name {
    pub fn new<N: Into<Vec<u8>>>(name: N) -> Self {
        Name(name.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name(name.as_bytes().to_vec())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(name.into_bytes())
    }
}

impl<T> Array<T> {
    pub fn new(items: Vec<T>) -> Self {
        Array(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array(items)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary(IndexMap::new())
    }

    pub fn get(&self, key: &[u8]) -> Option<&Object> {
        self.0.get(key)
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Vec<u8>>,
        V: Into<Object>,
    {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Vec<u8>, Object> {
        self.0.iter()
    }
}

#[macro_export]
macro_rules! dictionary {
	() => {
		$crate::Dictionary::new()
	};
	($( $key: expr => $value: expr ),+ ,) => {
		$crate::dictionary!( $($key => $value),+ )
	};
	($( $key: expr => $value: expr ),*) => {{
		let mut dict = $crate::Dictionary::new();
		$(
			dict.set($key, $value);
		)*
		dict
	}}
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .into_iter()
            .map(|(key, value)| format!("/{} {:?}", String::from_utf8_lossy(key), value))
            .collect::<Vec<String>>();
        write!(f, "<<{}>>", entries.concat())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Vec<u8>, &'a Object);
    type IntoIter = indexmap::map::Iter<'a, Vec<u8>, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, Object)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, Object)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (k, v) in iter {
            dict.set(k, v);
        }
        dict
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<i64> for Object {
    fn from(number: i64) -> Self {
        Object::Integer(number)
    }
}

macro_rules! from_smaller_ints {
	($( $Int: ty )+) => {
		$(
			impl From<$Int> for Object {
				fn from(number: $Int) -> Self {
					Object::Integer(i64::from(number))
				}
			}
		)+
	}
}

from_smaller_ints! {
    i8 i16 i32
    u8 u16 u32
}

impl From<f64> for Object {
    fn from(number: f64) -> Self {
        Object::Real(number)
    }
}

impl From<f32> for Object {
    fn from(number: f32) -> Self {
        Object::Real(f64::from(number))
    }
}

impl From<String> for Object {
    fn from(name: String) -> Self {
        Object::Name(name.into_bytes())
    }
}

impl From<&str> for Object {
    fn from(name: &str) -> Self {
        Object::Name(name.as_bytes().to_vec())
    }
}

impl From<Vec<Object>> for Object {
    fn from(array: Vec<Object>) -> Self {
        Object::Array(array)
    }
}

impl From<Dictionary> for Object {
    fn from(dict: Dictionary) -> Self {
        Object::Dictionary(dict)
    }
}

impl From<Number> for Object {
    fn from(number: Number) -> Self {
        match number {
            Number::Integer(value) => Object::Integer(value),
            Number::Real(value) => Object::Real(value),
        }
    }
}

impl From<PdfString> for Object {
    fn from(string: PdfString) -> Self {
        Object::String(string.bytes, string.format)
    }
}

impl From<Name> for Object {
    fn from(name: Name) -> Self {
        Object::Name(name.0)
    }
}

impl Object {
    pub fn string_literal<S: Into<Vec<u8>>>(s: S) -> Self {
        Object::String(s.into(), StringFormat::Literal)
    }

    /// Name of the variant, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::Name(_) => "Name",
            Object::String(_, StringFormat::Literal) => "String",
            Object::String(_, StringFormat::Hexadecimal) => "HexString",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match *self {
            Object::Integer(value) => Ok(value),
            _ => Err(self.type_error("Integer")),
        }
    }

    /// Integers stay integers, reals go through [`Number::real`].
    pub fn as_number(&self) -> Result<Number> {
        match *self {
            Object::Integer(value) => Ok(Number::Integer(value)),
            Object::Real(value) => Ok(Number::real(value)),
            _ => Err(self.type_error("Integer, Real")),
        }
    }

    pub fn as_name(&self) -> Result<&[u8]> {
        match self {
            Object::Name(name) => Ok(name),
            _ => Err(self.type_error("Name")),
        }
    }

    /// Literal and hexadecimal strings, keeping their format.
    pub fn as_string(&self) -> Result<PdfString> {
        match self {
            Object::String(bytes, format) => Ok(PdfString::new(bytes.clone(), *format)),
            _ => Err(self.type_error("String, HexString")),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Object>> {
        match self {
            Object::Array(array) => Ok(array),
            _ => Err(self.type_error("Array")),
        }
    }

    fn type_error(&self, expected: &'static str) -> Error {
        Error::ObjectType {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null => f.write_str("null"),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::Integer(value) => write!(f, "{}", value),
            Object::Real(value) => write!(f, "{}", value),
            Object::Name(name) => write!(f, "/{}", String::from_utf8_lossy(name)),
            Object::String(text, StringFormat::Literal) => write!(f, "({})", String::from_utf8_lossy(text)),
            Object::String(text, StringFormat::Hexadecimal) => {
                f.write_str("<")?;
                for byte in text {
                    write!(f, "{:02X}", byte)?;
                }
                f.write_str(">")
            }
            Object::Array(array) => {
                let items = array.iter().map(|item| format!("{:?}", item)).collect::<Vec<String>>();
                write!(f, "[{}]", items.join(" "))
            }
            Object::Dictionary(dict) => write!(f, "{:?}", dict),
        }
    }
}

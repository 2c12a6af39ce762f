use std::fmt::{self, Write as _};

use crate::object::{Array, Dictionary, Name, Number, Object, PdfString, StringFormat};

/// Exact-size serialization into a caller-owned buffer.
///
/// `size` reports how many bytes `write` will consume. An assembler sums the
/// sizes of everything it is about to emit, allocates once, and threads the
/// remainder returned by each `write` into the next one.
pub trait Encode {
    /// Exact number of bytes [`Encode::write`] emits.
    fn size(&self) -> usize;

    /// Writes at the head of `buffer` and returns the unused tail.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than [`Encode::size`].
    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8];

    /// Canonical byte form.
    fn encode(&self) -> Vec<u8> {
        let mut buffer = vec![0; self.size()];
        let remaining = self.write(&mut buffer).len();
        debug_assert_eq!(remaining, 0, "size() does not match the bytes written");
        buffer
    }
}

/// Copies `bytes` to the head of `buffer` and returns the rest of it.
#[track_caller]
pub fn write_bytes<'a>(buffer: &'a mut [u8], bytes: &[u8]) -> &'a mut [u8] {
    if buffer.len() < bytes.len() {
        panic!(
            "content buffer too small: {} byte(s) to write but only {} remaining",
            bytes.len(),
            buffer.len()
        );
    }
    let (head, tail) = buffer.split_at_mut(bytes.len());
    head.copy_from_slice(bytes);
    tail
}

#[track_caller]
fn write_byte(buffer: &mut [u8], byte: u8) -> &mut [u8] {
    write_bytes(buffer, &[byte])
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Reals keep at most six fractional digits.
const REAL_SCALE: f64 = 1_000_000.0;

/// Counts formatted bytes without storing them.
struct CountingWrite {
    bytes_written: usize,
}

impl fmt::Write for CountingWrite {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.bytes_written += s.len();
        Ok(())
    }
}

/// Formats straight into a byte slice.
struct SliceWrite<'a> {
    remaining: &'a mut [u8],
}

impl fmt::Write for SliceWrite<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = std::mem::take(&mut self.remaining);
        self.remaining = write_bytes(remaining, s.as_bytes());
        Ok(())
    }
}

/// Rounded value whose `Display` form is the canonical real text: no
/// exponent, no trailing zeros, no negative zero.
fn canonical_real(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = if value.abs() < 1e15 {
        (value * REAL_SCALE).round() / REAL_SCALE
    } else {
        value.round()
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn real_size(value: f64) -> usize {
    let mut counter = CountingWrite { bytes_written: 0 };
    // CountingWrite never fails.
    let _ = write!(counter, "{}", canonical_real(value));
    counter.bytes_written
}

fn write_real(buffer: &mut [u8], value: f64) -> &mut [u8] {
    let mut target = SliceWrite { remaining: buffer };
    // SliceWrite panics instead of failing when the buffer runs out.
    let _ = write!(target, "{}", canonical_real(value));
    target.remaining
}

fn integer_size(value: i64) -> usize {
    itoa::Buffer::new().format(value).len()
}

fn write_integer(buffer: &mut [u8], value: i64) -> &mut [u8] {
    write_bytes(buffer, itoa::Buffer::new().format(value).as_bytes())
}

fn name_needs_escape(byte: u8) -> bool {
    // white-space and delimiter chars are encoded to # sequences
    // also encode bytes outside of the range 33 (!) to 126 (~)
    b" \t\n\r\x0C()<>[]{}/%#".contains(&byte) || !(33..=126).contains(&byte)
}

fn name_size(name: &[u8]) -> usize {
    1 + name
        .iter()
        .map(|&byte| if name_needs_escape(byte) { 3 } else { 1 })
        .sum::<usize>()
}

fn write_name<'a>(buffer: &'a mut [u8], name: &[u8]) -> &'a mut [u8] {
    let mut buffer = write_byte(buffer, b'/');
    for &byte in name {
        buffer = if name_needs_escape(byte) {
            write_bytes(
                buffer,
                &[b'#', HEX_DIGITS[usize::from(byte >> 4)], HEX_DIGITS[usize::from(byte & 0x0F)]],
            )
        } else {
            write_byte(buffer, byte)
        };
    }
    buffer
}

/// Indices of the bytes of a literal string that need a backslash.
///
/// Within a Literal string, backslash (\) and unbalanced parentheses are escaped.
/// An unescaped end-of-line marker would read back as \n, so \r is escaped too.
fn literal_escapes(text: &[u8]) -> Vec<usize> {
    let mut escapes = Vec::new();
    let mut parentheses = Vec::new();
    for (index, &byte) in text.iter().enumerate() {
        match byte {
            b'(' => parentheses.push(index),
            b')' => {
                if parentheses.pop().is_none() {
                    escapes.push(index);
                }
            }
            b'\\' | b'\r' => escapes.push(index),
            _ => continue,
        }
    }
    escapes.append(&mut parentheses);
    escapes.sort_unstable();
    escapes
}

fn string_size(text: &[u8], format: StringFormat) -> usize {
    match format {
        StringFormat::Literal => text.len() + literal_escapes(text).len() + 2,
        StringFormat::Hexadecimal => text.len() * 2 + 2,
    }
}

fn write_string<'a>(buffer: &'a mut [u8], text: &[u8], format: StringFormat) -> &'a mut [u8] {
    match format {
        StringFormat::Literal => {
            let escapes = literal_escapes(text);
            let mut buffer = write_byte(buffer, b'(');
            if escapes.is_empty() {
                buffer = write_bytes(buffer, text);
            } else {
                let mut escapes = escapes.iter().peekable();
                for (index, &byte) in text.iter().enumerate() {
                    buffer = if escapes.next_if_eq(&&index).is_some() {
                        write_bytes(buffer, &[b'\\', if byte == b'\r' { b'r' } else { byte }])
                    } else {
                        write_byte(buffer, byte)
                    };
                }
            }
            write_byte(buffer, b')')
        }
        StringFormat::Hexadecimal => {
            let mut buffer = write_byte(buffer, b'<');
            for &byte in text {
                buffer = write_bytes(
                    buffer,
                    &[HEX_DIGITS[usize::from(byte >> 4)], HEX_DIGITS[usize::from(byte & 0x0F)]],
                );
            }
            write_byte(buffer, b'>')
        }
    }
}

fn array_size<T: Encode>(items: &[T]) -> usize {
    let separators = items.len().saturating_sub(1);
    2 + separators + items.iter().map(Encode::size).sum::<usize>()
}

fn write_array<'a, T: Encode>(buffer: &'a mut [u8], items: &[T]) -> &'a mut [u8] {
    let mut buffer = write_byte(buffer, b'[');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            buffer = write_byte(buffer, b' ');
        }
        buffer = item.write(buffer);
    }
    write_byte(buffer, b']')
}

impl Encode for PdfString {
    fn size(&self) -> usize {
        string_size(self.as_bytes(), self.format())
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_string(buffer, self.as_bytes(), self.format())
    }
}

impl Encode for Number {
    fn size(&self) -> usize {
        match *self {
            Number::Integer(value) => integer_size(value),
            Number::Real(value) => real_size(value),
        }
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        match *self {
            Number::Integer(value) => write_integer(buffer, value),
            Number::Real(value) => write_real(buffer, value),
        }
    }
}

impl Encode for Name {
    fn size(&self) -> usize {
        name_size(self.as_bytes())
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_name(buffer, self.as_bytes())
    }
}

impl<T: Encode> Encode for Array<T> {
    fn size(&self) -> usize {
        array_size(self.as_slice())
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        write_array(buffer, self.as_slice())
    }
}

impl Encode for Dictionary {
    fn size(&self) -> usize {
        let separators = self.len().saturating_sub(1);
        let entries = self
            .iter()
            .map(|(key, value)| name_size(key) + 1 + value.size())
            .sum::<usize>();
        4 + separators + entries
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        let mut buffer = write_bytes(buffer, b"<<");
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                buffer = write_byte(buffer, b' ');
            }
            buffer = write_name(buffer, key);
            buffer = write_byte(buffer, b' ');
            buffer = value.write(buffer);
        }
        write_bytes(buffer, b">>")
    }
}

impl Encode for Object {
    fn size(&self) -> usize {
        match self {
            Object::Null => 4,
            Object::Boolean(true) => 4,
            Object::Boolean(false) => 5,
            Object::Integer(value) => integer_size(*value),
            Object::Real(value) => real_size(*value),
            Object::Name(name) => name_size(name),
            Object::String(text, format) => string_size(text, *format),
            Object::Array(array) => array_size(array),
            Object::Dictionary(dict) => dict.size(),
        }
    }

    fn write<'a>(&self, buffer: &'a mut [u8]) -> &'a mut [u8] {
        match self {
            Object::Null => write_bytes(buffer, b"null"),
            Object::Boolean(true) => write_bytes(buffer, b"true"),
            Object::Boolean(false) => write_bytes(buffer, b"false"),
            Object::Integer(value) => write_integer(buffer, *value),
            Object::Real(value) => write_real(buffer, *value),
            Object::Name(name) => write_name(buffer, name),
            Object::String(text, format) => write_string(buffer, text, *format),
            Object::Array(array) => write_array(buffer, array),
            Object::Dictionary(dict) => dict.write(buffer),
        }
    }
}

//! Typed PDF content stream operators.
//!
//! Operators are validated once when they are built. After that they can only
//! be encoded: [`Encode::size`] reports the exact byte length and
//! [`Encode::write`] fills the head of a caller-owned buffer, handing back the
//! unused tail for the next operator.
//!
//! ```
//! use pdfops::{text_array, Content, Encode, PaintXObject, ShowText, ShowTextArray};
//!
//! let mut content = Content::new();
//! content
//!     .push(ShowText::new("Hello"))
//!     .push(ShowTextArray::new(text_array!["A", -120, "B"]))
//!     .push(PaintXObject::new("Fx1"));
//!
//! let mut buffer = vec![0; content.size()];
//! let rest = content.write(&mut buffer);
//! assert!(rest.is_empty());
//! assert_eq!(buffer, b"(Hello) Tj\n[(A) -120 (B)] TJ\nFx1 Do\n");
//! ```

mod object;
pub use crate::object::{Array, Dictionary, Name, Number, Object, PdfString, StringFormat};

mod content;
pub use crate::content::{Content, Operation};

mod error;
pub use error::{Error, Result};

pub mod encodings;
pub mod operator;
pub use crate::operator::*;

mod writer;
pub use crate::writer::{write_bytes, Encode};

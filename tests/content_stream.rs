use pdfops::{
    text_array, BeginText, Content, Encode, EndText, Error, MoveText, Number, Object, Operation, Operator,
    PaintXObject, PdfString, SetFont, ShowText, ShowTextArray, StringFormat, TextElement,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sizes every operator, allocates once, then threads the remainder through each write.
fn assemble(operators: &[Operator]) -> Vec<u8> {
    let total = operators.iter().map(Encode::size).sum();
    let mut buffer = vec![0u8; total];
    let mut remaining = buffer.as_mut_slice();
    for operator in operators {
        let before = remaining.len();
        remaining = operator.write(remaining);
        assert_eq!(before - remaining.len(), operator.size(), "{:?}", operator);
    }
    assert!(remaining.is_empty());
    buffer
}

#[test]
fn spec_examples() {
    assert_eq!(PaintXObject::new("Fx1").encode(), b"Fx1 Do\n");
    assert_eq!(ShowText::new("Hello").encode(), b"(Hello) Tj\n");

    let tj = ShowTextArray::new(text_array!["A", -120, "B"]);
    assert_eq!(tj.encode(), b"[(A) -120 (B)] TJ\n");
    assert_eq!(tj.size(), "[(A) -120 (B)] TJ\n".len());
}

#[test]
fn invalid_arguments_fail_at_construction() {
    assert!(matches!(
        PaintXObject::try_from(&Object::Integer(42)),
        Err(Error::Validation { operator: "Do", .. })
    ));

    let elements = [
        Object::string_literal("ok"),
        Object::Dictionary(Default::default()),
        Object::Integer(3),
    ];
    assert!(matches!(
        ShowTextArray::from_objects(&elements),
        Err(Error::Validation { operator: "TJ", .. })
    ));
}

#[test]
fn heterogeneous_operators_share_one_buffer() {
    init_logger();
    let operators: Vec<Operator> = vec![
        BeginText.into(),
        SetFont::new("F1", 12).into(),
        MoveText::new(72, 712).into(),
        ShowText::new(PdfString::hexadecimal(vec![0x00, 0x41])).into(),
        ShowTextArray::new(vec![
            TextElement::from("Kerned"),
            TextElement::Number(Number::Real(-33.5)),
            TextElement::from(PdfString::new(b"(x)".to_vec(), StringFormat::Literal)),
        ])
        .into(),
        EndText.into(),
        PaintXObject::new("/Fm0").into(),
    ];
    let bytes = assemble(&operators);
    assert_eq!(
        String::from_utf8_lossy(&bytes),
        "BT\n/F1 12 Tf\n72 712 Td\n<0041> Tj\n[(Kerned) -33.5 ((x))] TJ\nET\n/Fm0 Do\n"
    );

    let content: Content = operators.into_iter().collect();
    assert_eq!(content.encode(), bytes);
}

#[test]
fn operand_kind_mismatches_are_validation_errors() {
    let bad_name = vec![Operation::new("Do", vec![Object::String(vec![0xFF], StringFormat::Literal)])];
    assert!(matches!(
        Content::try_from(bad_name),
        Err(Error::Validation {
            operator: "Do",
            argument: "name",
            ..
        })
    ));

    let not_an_array = vec![Operation::new("TJ", vec![Object::Integer(1)])];
    match Content::try_from(not_an_array) {
        Err(Error::Validation { expected, found, .. }) => {
            assert_eq!(expected, "Array");
            assert_eq!(found, "Integer");
        }
        other => panic!("unexpected result {:?}", other),
    }

    let font = vec![Operation::new("Tf", vec![Object::Boolean(true), 12.into()])];
    match Content::try_from(font) {
        Err(Error::Validation {
            operator,
            argument,
            expected,
            ..
        }) => {
            assert_eq!(operator, "Tf");
            assert_eq!(argument, "font");
            assert_eq!(expected, "Name");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn repeated_encoding_is_stable() {
    let tj = ShowTextArray::new(text_array!["a", 1.5, "b"]);
    let first = tj.encode();
    for _ in 0..3 {
        assert_eq!(tj.encode(), first);
        assert_eq!(tj.size(), first.len());
    }
}

#[test]
fn untyped_operations_round_through_validation() {
    init_logger();
    let operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F2".into(), 9.into()]),
        Operation::new(
            "TJ",
            vec![Object::Array(vec![
                Object::String(b"x".to_vec(), StringFormat::Hexadecimal),
                Object::Real(f64::NAN),
            ])],
        ),
        Operation::new("ET", vec![]),
    ];
    let content = Content::try_from(operations).unwrap();
    assert_eq!(content.encode(), b"BT\n/F2 9 Tf\n[<78> 0] TJ\nET\n");
}

#[test]
#[should_panic(expected = "content buffer too small")]
fn short_buffer_is_a_contract_violation() {
    let tj = ShowTextArray::new(text_array!["abc", 10]);
    let mut buffer = vec![0u8; tj.size() - 1];
    tj.write(&mut buffer);
}

#[cfg(feature = "serde")]
#[test]
fn content_serializes_with_serde() {
    let mut content = Content::new();
    content.push(ShowText::new("Hi")).push(MoveText::new(1, 2.5));
    let json = serde_json::to_string(&content).unwrap();
    let back: Content = serde_json::from_str(&json).unwrap();
    assert_eq!(back, content);
}

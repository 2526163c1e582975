use rstest::rstest;

use crate::{ErrorKind, Parser, ParserError, Value, parser::Context};

fn parse_err(input: &[u8]) -> ParserError {
    let mut ctx = Context::new(input, 2);
    let mut v = Value::Null;
    let err = ctx
        .parse_document(&mut v)
        .expect_err("input should have been rejected");
    assert_eq!(ctx.stack_len(), 0, "scratch stack not unwound");
    assert!(v.is_null(), "value not reset after failure: {v:?}");
    err
}

#[rstest]
#[case("", 0)]
#[case(" ", 1)]
#[case(" \t\r\n", 4)]
fn expect_value(#[case] input: &str, #[case] offset: usize) {
    let err = parse_err(input.as_bytes());
    assert_eq!((err.kind(), err.offset()), (ErrorKind::ExpectValue, offset));
}

#[rstest]
#[case("nul", 0)]
#[case("tru", 0)]
#[case("fals", 0)]
#[case("True", 0)]
#[case("NULL", 0)]
#[case("fAlse", 0)]
#[case("?", 0)]
#[case("  ?", 2)]
#[case("+0", 0)]
#[case("+1", 0)]
#[case(".123", 0)]
#[case("1.", 0)]
#[case("1.e3", 0)]
#[case("01", 0)]
#[case("-01", 0)]
#[case("0123", 0)]
#[case("1e", 0)]
#[case("1E+", 0)]
#[case("-", 0)]
#[case("INF", 0)]
#[case("inf", 0)]
#[case("NAN", 0)]
#[case("nan", 0)]
#[case("'single'", 0)]
#[case("[]", 0)]
#[case("{}", 0)]
fn invalid_value(#[case] input: &str, #[case] offset: usize) {
    let err = parse_err(input.as_bytes());
    assert_eq!((err.kind(), err.offset()), (ErrorKind::InvalidValue, offset));
}

#[rstest]
#[case("null x", 5)]
#[case("123 456", 4)]
#[case("0x0", 1)]
#[case("0x123", 1)]
#[case("1.5x", 3)]
#[case("truefalse", 4)]
#[case("nullnull", 4)]
#[case(r#""a" "b""#, 4)]
#[case("\"a\"\0", 3)]
#[case("1\n\n2", 3)]
fn root_not_singular(#[case] input: &str, #[case] offset: usize) {
    let err = parse_err(input.as_bytes());
    assert_eq!((err.kind(), err.offset()), (ErrorKind::RootNotSingular, offset));
}

#[rstest]
#[case("1e309")]
#[case("-1e309")]
#[case("1e999")]
#[case("  1e999  ")]
fn number_too_big(#[case] input: &str) {
    assert_eq!(parse_err(input.as_bytes()).kind(), ErrorKind::NumberTooBig);
}

#[rstest]
#[case(b"\"", ErrorKind::MissQuotationMark)]
#[case(b"\"ab", ErrorKind::MissQuotationMark)]
#[case(b"  \"abc", ErrorKind::MissQuotationMark)]
#[case(br#""\v""#, ErrorKind::InvalidStringEscape)]
#[case(br#""\'""#, ErrorKind::InvalidStringEscape)]
#[case(br#""\0""#, ErrorKind::InvalidStringEscape)]
#[case(br#""\x12""#, ErrorKind::InvalidStringEscape)]
#[case(b"\"\x01\"", ErrorKind::InvalidStringChar)]
#[case(b"\"\x1F\"", ErrorKind::InvalidStringChar)]
#[case(b"\"tab\there\"", ErrorKind::InvalidStringChar)]
#[case(br#""\u""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u0""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u01""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u012""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u/000""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\uG000""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u0/00""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u0G00""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u00/0""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u00G0""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u000/""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u000G""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\u 123""#, ErrorKind::InvalidUnicodeHex)]
#[case(br#""\uD800""#, ErrorKind::InvalidUnicodeSurrogate)]
#[case(br#""\uDBFF""#, ErrorKind::InvalidUnicodeSurrogate)]
#[case(br#""\ud834""#, ErrorKind::InvalidUnicodeSurrogate)]
#[case(br#""\uD800\\""#, ErrorKind::InvalidUnicodeSurrogate)]
#[case(br#""\uD800\uDBFF""#, ErrorKind::InvalidUnicodeSurrogate)]
#[case(br#""\uD800\uE000""#, ErrorKind::InvalidUnicodeSurrogate)]
#[case(br#""\uDC00""#, ErrorKind::InvalidUnicodeSurrogate)]
fn string_errors(#[case] input: &[u8], #[case] kind: ErrorKind) {
    assert_eq!(parse_err(input).kind(), kind);
}

#[rstest]
#[case("", "expected a value at 1:1")]
#[case("tru", "invalid value at 1:1")]
#[case("123 456", "root is not singular at 1:5")]
#[case("1e999", "number too big at 1:1")]
#[case("\"ab", "missing closing quotation mark at 1:4")]
#[case("\n  \"\\q\"", "invalid string escape at 2:5")]
fn error_messages(#[case] input: &str, #[case] message: &str) {
    assert_eq!(alloc::string::ToString::to_string(&parse_err(input.as_bytes())), message);
}

#[test_log::test]
fn failed_parse_into_leaves_null() {
    let parser = Parser::default();
    let mut v = Value::from("previous");
    let err = parser.parse_into(&mut v, "\"unterminated").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissQuotationMark);
    assert!(v.is_null());

    v.set_number(3.0);
    let err = parser.parse_into(&mut v, "true false").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RootNotSingular);
    assert!(v.is_null());
}

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use leptjson::{Parser, ParserOptions, Value};
use libfuzzer_sys::fuzz_target;

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r"];

/// A scalar the fuzzer knows how to render as JSON.
#[derive(Debug, Arbitrary)]
enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    fn to_json(&self) -> Option<String> {
        match self {
            Self::Null => Some("null".into()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) if n.is_finite() => serde_json::to_string(n).ok(),
            Self::Number(_) => None,
            Self::String(s) => serde_json::to_string(s).ok(),
        }
    }

    fn matches(&self, v: &Value) -> bool {
        match (self, v) {
            (Self::Null, Value::Null) => true,
            (Self::Bool(b), Value::True | Value::False) => v.as_bool() == Some(*b),
            (Self::Number(n), Value::Number(m)) => n == m,
            (Self::String(s), Value::String(_)) => v.as_bytes() == Some(s.as_bytes()),
            _ => false,
        }
    }
}

#[derive(Debug)]
struct Document {
    scalar: Scalar,
    leading: Vec<u8>,
    trailing: Vec<u8>,
    capacity: usize,
}

impl<'a> Arbitrary<'a> for Document {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut ws = || -> arbitrary::Result<Vec<u8>> {
            let n = u.int_in_range(0..=4)?;
            let mut out = Vec::new();
            for _ in 0..n {
                out.extend_from_slice(u.choose(WS_TABLE)?);
            }
            Ok(out)
        };
        let leading = ws()?;
        let trailing = ws()?;
        Ok(Self {
            scalar: Scalar::arbitrary(u)?,
            leading,
            trailing,
            capacity: u.int_in_range(0..=64)?,
        })
    }
}

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    Bytes(&'a [u8]),
    Document(Document),
}

fuzz_target!(|input: Input<'_>| {
    match input {
        // Arbitrary bytes: any result is fine as long as nothing panics and a
        // failure leaves the output null.
        Input::Bytes(bytes) => {
            let mut v = Value::from("stale");
            if Parser::default().parse_into(&mut v, bytes).is_err() {
                assert!(v.is_null());
            }
        }
        Input::Document(doc) => {
            let Some(json) = doc.scalar.to_json() else {
                return;
            };
            let mut text = doc.leading.clone();
            text.extend_from_slice(json.as_bytes());
            text.extend_from_slice(&doc.trailing);

            let parser = Parser::new(ParserOptions {
                initial_stack_capacity: doc.capacity,
            });
            let v = parser
                .parse(&text)
                .unwrap_or_else(|e| panic!("{doc:?} rejected: {e}"));
            assert!(doc.scalar.matches(&v), "{doc:?} parsed as {v:?}");
        }
    }
});

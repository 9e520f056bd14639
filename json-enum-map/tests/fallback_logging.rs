use std::io;
use std::sync::{Arc, Mutex};

use json_enum_map::{JsonEnum, MappingTable};
use json_enum_map_example::Basic;
use serde_json::{Value, json};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a debug-level subscriber and returns what it logged.
fn with_debug_log<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(move || writer.clone())
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = capture.0.lock().expect("capture lock").clone();
    let output = String::from_utf8(bytes).expect("utf-8 log output");
    (result, output)
}

#[test]
fn lenient_decode_reports_the_substitution() {
    let (decoded, output) = with_debug_log(|| {
        assert_eq!(Basic::try_from_json(&json!("Bar")), Some(Basic::Bar));
        Basic::from_json(&json!("Not a valid value"))
    });
    assert_eq!(decoded, Basic::Foo);

    let expected = "decoding as first-declared member";
    assert!(output.contains(expected), "{output}");
    assert!(output.contains("Not a valid value"), "{output}");
}

#[test]
fn lenient_encode_reports_the_substitution() {
    let table = MappingTable::build(&[(1_u8, "one")], [(1, Value::Null)]);
    let (encoded, output) = with_debug_log(|| {
        assert_eq!(table.encode(1), Value::Null);
        table.encode(2)
    });
    assert_eq!(encoded, json!("one"));

    let expected = "encoding as first-declared member";
    assert!(output.contains(expected), "{output}");
    assert!(output.contains(r#"fallback="one""#), "{output}");
    assert!(!output.contains("decoding as"), "{output}");
}

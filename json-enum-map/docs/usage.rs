use json_enum_map::{JsonEnum, MappingTable};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonEnum)]
#[json_enum(overrides(EncodeAsOtherString = "Hello, world", EncodeAsNull = null))]
enum Greeting {
    EncodeAsNull = -1,
    Foo = 0,
    Bar,
    EncodeAsOtherString,
}

// Members without an override use their declared name.
assert_eq!(serde_json::to_value(Greeting::Foo).unwrap(), json!("Foo"));
assert_eq!(Greeting::EncodeAsOtherString.to_json(), json!("Hello, world"));
assert_eq!(Greeting::EncodeAsNull.to_json(), json!(null));

// Both the override and the declared name decode.
let greeting: Greeting = serde_json::from_value(json!("Hello, world")).unwrap();
assert_eq!(greeting, Greeting::EncodeAsOtherString);
assert_eq!(
    Greeting::try_from_json(&json!("EncodeAsOtherString")),
    Some(Greeting::EncodeAsOtherString)
);

// Unknown input falls back to the first-declared member unless you ask for
// the fallible form.
assert_eq!(Greeting::from_json(&json!("nope")), Greeting::EncodeAsNull);
assert_eq!(Greeting::try_from_json(&json!("nope")), None);

// Tables can also be built by hand.
let table = MappingTable::build(&[(1_u8, "one"), (2, "two")], [(2, json!(2))]);
assert_eq!(table.encode(2), json!(2));
assert_eq!(table.decode(&json!("two")), 2);

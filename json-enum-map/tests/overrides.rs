use json_enum_map::{JsonEnum, MappingTable};
use json_enum_map_example::{Color, Overridden, Setting, Ticket, Weather};
use serde_json::{Value, json};

fn to_value(value: Overridden) -> Value {
    serde_json::to_value(value).expect("serialize")
}

#[test]
fn to_json_for_standard_values() {
    assert_eq!(to_value(Overridden::Foo), json!("Foo"));
    assert_eq!(to_value(Overridden::Bar), json!("Bar"));
}

#[test]
fn to_json_for_overridden_string_value() {
    let json = to_value(Overridden::EncodeAsOtherString);
    assert_eq!(json, json!("Hello, world"));
}

#[test]
fn to_json_for_overridden_non_string_value() {
    let null = Overridden::EncodeAsNull;
    assert!(to_value(null).is_null());
    let text = serde_json::to_string(&null).expect("serialize");
    assert_eq!(text, "null");
}

#[test]
fn from_json_for_overridden_values() {
    let input = r#""Hello, world""#;
    let value: Overridden = serde_json::from_str(input).expect("deserialize");
    assert_eq!(value, Overridden::EncodeAsOtherString);
    let value: Overridden = serde_json::from_str("null").expect("deserialize");
    assert_eq!(value, Overridden::EncodeAsNull);
}

#[test]
fn from_json_with_declared_name_when_an_override_exists() {
    assert_eq!(
        Overridden::try_from_json(&json!("EncodeAsOtherString")),
        Some(Overridden::EncodeAsOtherString)
    );
    assert_eq!(
        Overridden::try_from_json(&json!("EncodeAsNull")),
        Some(Overridden::EncodeAsNull)
    );
}

#[test]
fn overrides_lead_the_table_in_written_order() {
    let table = Overridden::mapping();
    assert_eq!(table.override_count(), 2);
    let leading: Vec<_> = table
        .overrides()
        .iter()
        .map(|entry| (entry.value, entry.representation.clone()))
        .collect();
    assert_eq!(
        leading,
        vec![
            (Overridden::EncodeAsOtherString, json!("Hello, world")),
            (Overridden::EncodeAsNull, Value::Null),
        ]
    );
    assert_eq!(table.first_declared(), Overridden::EncodeAsNull);
}

#[test]
fn every_override_encodes_and_decodes_to_its_member() {
    for entry in Overridden::mapping().overrides() {
        let encoded = entry.value.try_to_json();
        assert_eq!(encoded.as_ref(), Some(&entry.representation));
        let decoded = Overridden::try_from_json(&entry.representation);
        assert_eq!(decoded, Some(entry.value));
    }
}

#[test]
fn repeated_overrides_across_attributes_are_first_match() {
    assert_eq!(Color::Gray.to_json(), json!("gray"));
    assert_eq!(Color::from_json(&json!("gray")), Color::Gray);
    assert_eq!(Color::from_json(&json!("grey")), Color::Gray);
    assert_eq!(Color::from_json(&json!("Gray")), Color::Gray);
    assert_eq!(Color::Red.to_json(), json!("crimson"));
    assert_eq!(Color::from_json(&json!("Red")), Color::Red);
    assert_eq!(Color::Blue.to_json(), json!("Blue"));
}

#[test]
fn non_string_override_literals() {
    assert_eq!(Setting::Low.to_json(), json!(-1));
    assert_eq!(Setting::High.to_json(), json!(2.5));
    assert_eq!(Setting::On.to_json(), json!(true));
    assert_eq!(Setting::Huge.to_json(), json!(u64::MAX));
    assert_eq!(Setting::Pair.to_json(), json!(["a", 1]));
    assert_eq!(Setting::Plain.to_json(), json!("Plain"));

    assert_eq!(Setting::try_from_json(&json!(-1.0)), Some(Setting::Low));
    assert_eq!(Setting::try_from_json(&json!(2.5)), Some(Setting::High));
    assert_eq!(Setting::try_from_json(&json!(true)), Some(Setting::On));
    assert_eq!(Setting::try_from_json(&json!(false)), None);
    assert_eq!(
        Setting::try_from_json(&json!(u64::MAX)),
        Some(Setting::Huge)
    );
    assert_eq!(
        Setting::try_from_json(&json!(["a", 1.0])),
        Some(Setting::Pair)
    );
    assert_eq!(Setting::try_from_json(&json!("Low")), Some(Setting::Low));
}

#[test]
fn override_colliding_with_a_declared_name_wins() {
    let table = MappingTable::<Overridden>::for_enum([(Overridden::Bar, json!("Foo"))]);
    assert_eq!(table.decode(&json!("Foo")), Overridden::Bar);
    assert_eq!(table.encode(Overridden::Foo), json!("Foo"));
    assert_eq!(table.decode(&json!("Bar")), Overridden::Bar);
}

#[test]
fn null_override_inside_optional_field_reads_as_none() {
    let ticket = Ticket {
        id: 1,
        weather: Weather::Unknown,
        history: Vec::new(),
        forecast: Some(Weather::Unknown),
    };
    let json = serde_json::to_value(&ticket).expect("serialize");
    assert_eq!(json["weather"], Value::Null);
    assert_eq!(json["forecast"], Value::Null);

    let decoded: Ticket = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded.weather, Weather::Unknown);
    assert_eq!(decoded.forecast, None);
}

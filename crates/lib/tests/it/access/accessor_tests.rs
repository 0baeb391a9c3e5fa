use pathwise::{
    Value,
    access::{self, Accessor, Path, merge_skeleton, parse_path, shape_skeleton},
    path,
    value::{Key, Record, SymbolTable},
};

use crate::helpers::{address_type, person, symbolic_map, text_map};

#[test]
fn test_writes_keep_symbolic_representation() {
    let updated = person().with_at("country.code", "BE");
    let country = updated.at("country").and_then(Value::as_map).unwrap();
    assert!(country.contains_key(&Key::symbol("code")));
    assert!(!country.contains_key(&Key::text("code")));
    assert_eq!(updated.at("country.code"), Some(&Value::from("BE")));
}

#[test]
fn test_new_keys_use_known_symbols_only() {
    let symbols = SymbolTable::from_names(["capital"]);
    let accessor = Accessor::new(&symbols);

    let updated = accessor.deep_put(person(), "country.capital", "Amsterdam");
    let updated = accessor.deep_put(updated, "country.anthem", "Wilhelmus");

    let country = updated.at("country").and_then(Value::as_map).unwrap();
    assert!(country.contains_key(&Key::symbol("capital")));
    assert!(country.contains_key(&Key::text("anthem")));
    assert_eq!(symbols.len(), 1);
}

#[test]
fn test_deep_delete_keeps_siblings() {
    let updated = person().without("country.code");
    assert_eq!(updated.at("country.code"), None);
    assert_eq!(updated.at("country.name"), Some(&Value::from("Netherlands")));
    assert_eq!(updated.at("meta"), person().at("meta"));
}

#[test]
fn test_deep_delete_shifts_list() {
    let updated = access::deep_delete(person(), "meta.skills.0");
    assert_eq!(updated.at("meta.skills.0"), Some(&Value::from("manager")));
    assert_eq!(updated.at("meta.skills.1.type"), Some(&Value::from("hobby")));
    assert_eq!(updated.at("meta.skills.2"), None);
}

#[test]
fn test_deep_delete_with_text_path_on_symbol_keys() {
    let updated = access::deep_delete(person(), "meta.skills.2.name");
    assert_eq!(
        updated.at("meta.skills.2"),
        Some(&symbolic_map([("type", "hobby")]))
    );
}

#[test]
fn test_records_inside_maps() {
    let address = Record::new(address_type()).with("street", "Dam 1");
    let value = symbolic_map([("address", Value::from(address))]);

    assert_eq!(value.at("address.city"), Some(&Value::from("Amsterdam")));
    assert_eq!(value.at("address.zip"), None);

    let value = value.with_at("address.city", "Utrecht").with_at("address.zip", "1234");
    assert_eq!(value.at("address.city"), Some(&Value::from("Utrecht")));
    // Records only hold their own fields
    assert_eq!(value.at("address.zip"), None);

    // Deleting a record field resets it to the default
    let value = value.without("address.city").without("address.street");
    assert_eq!(value.at("address.city"), Some(&Value::from("Amsterdam")));
    assert_eq!(value.at("address.street"), Some(&Value::Null));
}

#[test]
fn test_tuples_keep_arity_on_put() {
    let value = text_map([("status", Value::tuple(["ok", "pending"]))]);
    let value = value.with_at("status.1", "done").with_at("status.2", "extra");
    assert_eq!(value.at("status"), Some(&Value::tuple(["ok", "done"])));

    let value = value.without("status.0");
    assert_eq!(value.at("status"), Some(&Value::tuple(["done"])));
}

#[test]
fn test_deep_put_through_missing_structure_stops_at_first_gap() {
    let updated = person().with_at("meta.address.city", "Vault 13");
    assert_eq!(updated.at("meta.address"), Some(&Value::Null));
    assert_eq!(updated.at("meta.address.city"), None);
}

#[test]
fn test_pre_shaped_skeleton_accepts_deep_put() {
    let path = parse_path("meta.address.lines.0");
    let mut value = person();
    merge_skeleton(&mut value, shape_skeleton(path.segments()));

    let value = value.with_at(&path, "Vault 13");
    assert_eq!(value.at("meta.address.lines.0"), Some(&Value::from("Vault 13")));
    assert_eq!(value.at("meta.skills.0"), Some(&Value::from("programmer")));
}

#[test]
fn test_deep_put_empty_path_replaces_root() {
    assert_eq!(person().with_at(Path::new(), 1), Value::Int(1));
}

#[test]
fn test_numeric_segments_never_address_map_fields() {
    let value = text_map([("2024", "leap")]);
    assert_eq!(value.at("2024"), None);

    // A field segment built directly still reaches the key
    let field = Path::new().field("2024");
    assert_eq!(value.at(&field), Some(&Value::from("leap")));
}

#[test]
fn test_index_base_shifts_positions() {
    let symbols = SymbolTable::new();
    let accessor = Accessor::new(&symbols).with_index_base(1);
    let person = person();

    assert_eq!(
        accessor.deep_get(&person, "meta.skills.3.type"),
        Some(&Value::from("hobby"))
    );
    assert_eq!(accessor.deep_get(&person, "meta.skills.0"), None);

    let picked = accessor.deep_get_many(&person, [path!["meta", "skills", 3, "name"]]);
    assert_eq!(
        picked,
        text_map([(
            "meta",
            text_map([("skills", Value::list([text_map([("name", "painting")])]))])
        )])
    );
}

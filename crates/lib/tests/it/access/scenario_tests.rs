use pathwise::{Value, access, path};

use crate::helpers::{person, symbolic_map, text_map};

#[test]
fn test_text_key_reads_symbolic_map() {
    let map = symbolic_map([("value", 20)]);
    assert_eq!(access::get(&map, "value"), Some(&Value::Int(20)));
}

#[test]
fn test_deep_get_through_list_position() {
    let person = person();
    assert_eq!(
        access::deep_get(&person, "meta.skills.2.type"),
        Some(&Value::from("hobby"))
    );
}

#[test]
fn test_deep_put_replaces_one_list_element() {
    let updated = access::deep_put(person(), path!["meta", "skills", 1], "vaultdweller");

    let skills = updated.at("meta.skills").and_then(Value::as_slice).unwrap();
    assert_eq!(skills.len(), 3);
    assert_eq!(skills[0], "programmer");
    assert_eq!(skills[1], "vaultdweller");
    assert_eq!(skills[2], symbolic_map([("type", "hobby"), ("name", "painting")]));

    // Everything outside the skills list is untouched
    assert_eq!(updated.at("country"), person().at("country"));
    assert_eq!(updated.at("name"), person().at("name"));
}

#[test]
fn test_deep_get_many_projects_sparse_tree() {
    let picked = access::deep_get_many(
        &person(),
        [path!["country", "code"], path!["meta", "skills", 2, "type"]],
    );

    let expected = text_map([
        ("country", text_map([("code", "NL")])),
        (
            "meta",
            text_map([("skills", Value::list([text_map([("type", "hobby")])]))]),
        ),
    ]);
    assert_eq!(picked, expected);
}

#[test]
fn test_deep_get_many_missing_paths_read_null() {
    let picked = person().pick(["country.code", "country.capital"]);
    assert_eq!(
        picked,
        text_map([("country", text_map([("capital", Value::Null), ("code", Value::from("NL"))]))])
    );
}

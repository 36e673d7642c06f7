use scaffold_core::naming::{candidate_identifier, is_valid_identifier, sanitize_identifier};

const INPUTS: &[&str] = &[
    "",
    " ",
    "###",
    "1",
    "123abc",
    "customer_orders",
    "Order Details",
    "class",
    "@class",
    "@id",
    "string",
    "Ünïcödé",
    "a\u{0301}b",
    "__",
    "x-y-z",
    "tbl2Items",
    "名前",
];

#[test]
fn sanitized_names_are_never_empty_or_digit_led() {
    for input in INPUTS {
        for raw in [input.to_string(), candidate_identifier(input)] {
            let name = sanitize_identifier(&raw);

            assert!(!name.is_empty(), "input: {input:?}");
            assert!(
                !name.starts_with(|c: char| c.is_ascii_digit()),
                "input: {input:?}, name: {name:?}"
            );
            assert!(
                is_valid_identifier(&name),
                "input: {input:?}, name: {name:?}"
            );
        }
    }
}

#[test]
fn sanitizing_is_idempotent() {
    for input in INPUTS {
        let once = sanitize_identifier(&candidate_identifier(input));
        assert_eq!(sanitize_identifier(&once), once, "input: {input:?}");

        let once = sanitize_identifier(input);
        assert_eq!(sanitize_identifier(&once), once, "input: {input:?}");
    }
}

#[test]
fn candidate_then_sanitize() {
    assert_eq!(sanitize_identifier(&candidate_identifier("###")), "_");
    assert_eq!(
        sanitize_identifier(&candidate_identifier("123abc")),
        "_123abc"
    );
    assert_eq!(sanitize_identifier(&candidate_identifier("class")), "Class");
    assert_eq!(sanitize_identifier("class"), "@class");
    assert_eq!(sanitize_identifier("@id"), "_id");
    assert_eq!(
        sanitize_identifier(&candidate_identifier("order_details")),
        "OrderDetails"
    );
}

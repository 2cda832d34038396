use serde::Serialize;
use tinyfmt::{args, format, format_with_options, Error, FormatOptions, Value};

#[derive(Serialize)]
struct ExampleStruct {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Value")]
    value: i32,
}

#[test]
fn test_sprintf_table() {
    let cases: Vec<(&str, Vec<Value>, &str)> = vec![
        ("Hello, %s!", args!["world"], "Hello, world!"),
        ("Value: %d", args![42], "Value: 42"),
        ("Hex: %x", args![255], "Hex: 0xff"),
        ("Binary: %b", args![7], "Binary: 0b111"),
        ("Octal: %o", args![64], "Octal: 0o100"),
        ("Float: %.2f", args![3.14159], "Float: 3.14"),
        ("Float: %.5f", args![3.14159], "Float: 3.14159"),
        ("Bool: %v", args![true], "Bool: true"),
        ("Bool: %v", args![false], "Bool: false"),
        ("Multiple: %d, %s, %v", args![42, "test", true], "Multiple: 42, test, true"),
        ("Precision: %.0f", args![123.456], "Precision: 123"),
        ("Edge case: %d", args![i64::MAX], "Edge case: 9223372036854775807"),
        ("Negative: %d", args![-123], "Negative: -123"),
        ("Escape: %%", args![], "Escape: %"),
        ("Slice: %v", args![vec![1, 2, 3]], "Slice: [1 2 3]"),
        (
            "Struct: %v",
            args![ExampleStruct {
                name: "example".to_string(),
                value: 123
            }],
            "Struct: {Name:example Value:123}",
        ),
    ];

    for (template, arguments, want) in cases {
        let got = format(template, &arguments);
        assert_eq!(got.as_deref(), Ok(want), "template {:?}", template);
    }
}

#[test]
fn test_sprintf_errors() {
    assert!(matches!(
        format("Invalid: %q", &args![42]),
        Err(Error::UnsupportedSpecifier { specifier: 'q', .. })
    ));
    assert!(matches!(
        format("Missing arg: %d %d", &args![42]),
        Err(Error::MissingArgument { directive: 'd', .. })
    ));
    assert!(matches!(
        format("%d", &args!["x"]),
        Err(Error::TypeMismatch { directive: 'd', .. })
    ));
    assert!(matches!(
        format("trailing %", &args![]),
        Err(Error::IncompleteDirective { offset: 9 })
    ));
}

#[test]
fn test_error_discards_partial_output() {
    // The first directive succeeds; the second fails and nothing is returned.
    let result = format("ok %d then %s", &args![1, 2]);
    assert_eq!(
        result,
        Err(Error::TypeMismatch {
            directive: 's',
            expected: "a string",
            found: "integer",
            offset: 11,
        })
    );
}

#[test]
fn test_unused_arguments_are_fine() {
    assert_eq!(format("", &args![1, "two", 3.0]).unwrap(), "");
    assert_eq!(format("%d", &args![1, 2, 3]).unwrap(), "1");
}

#[test]
fn test_argument_order_follows_directives() {
    assert_eq!(
        format("%s=%d (%x) %%%v", &args!["n", 10, 10, "done"]).unwrap(),
        "n=10 (0xa) %done"
    );
}

#[test]
fn test_float_argument_types() {
    assert_eq!(format("%.1f", &args![2.3f32]).unwrap(), "2.3");
    assert!(matches!(
        format("%f", &args![1u8]),
        Err(Error::TypeMismatch { found: "integer", .. })
    ));
}

#[test]
fn test_string_like_arguments() {
    assert_eq!(format("%s%s", &args!['a', String::from("bc")]).unwrap(), "abc");
    assert!(matches!(
        format("%s", &args![vec!["a"]]),
        Err(Error::TypeMismatch { found: "array", .. })
    ));
}

#[test]
fn test_wide_integers() {
    assert_eq!(
        format("%d", &args![u64::MAX]).unwrap(),
        "18446744073709551615"
    );
    assert_eq!(format("%x", &args![i128::MAX]).unwrap(), format!("0x{:x}", i128::MAX));
}

#[test]
fn test_options_do_not_affect_explicit_precision() {
    let options = FormatOptions::new().with_default_precision(4);
    assert_eq!(
        format_with_options("%f|%.0f|%v", &args![0.5, 0.75, 0.5], &options).unwrap(),
        "0.5000|1|0.5000"
    );
}

#[test]
fn test_unicode_template() {
    assert_eq!(
        format("→ %s ←, %d€", &args!["ß", 5]).unwrap(),
        "→ ß ←, 5€"
    );
    assert!(matches!(
        format("→ %", &args![]),
        Err(Error::IncompleteDirective { offset: 4 })
    ));
}

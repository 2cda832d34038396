//! Property-based tests for the formatter's core guarantees.

use proptest::prelude::*;
use tinyfmt::{args, concat, format, render, Error, Value};

proptest! {
    #[test]
    fn prop_plain_text_is_identity(text in "[^%]{0,64}") {
        prop_assert_eq!(format(&text, &[]), Ok(text.clone()));
    }

    #[test]
    fn prop_escape_consumes_no_argument(n in any::<i64>()) {
        prop_assert_eq!(format("%%%d%%", &args![n]), Ok(format!("%{}%", n)));
    }

    #[test]
    fn prop_radix_prefixes(n in any::<i64>()) {
        let sign = if n < 0 { "-" } else { "" };
        let magnitude = n.unsigned_abs();
        prop_assert_eq!(format("%d", &args![n]), Ok(n.to_string()));
        prop_assert_eq!(format("%x", &args![n]), Ok(format!("{}0x{:x}", sign, magnitude)));
        prop_assert_eq!(format("%o", &args![n]), Ok(format!("{}0o{:o}", sign, magnitude)));
        prop_assert_eq!(format("%b", &args![n]), Ok(format!("{}0b{:b}", sign, magnitude)));
    }

    #[test]
    fn prop_precision_gives_exact_fraction_digits(x in -1.0e9f64..1.0e9, p in 0usize..12) {
        let out = format(&format!("%.{}f", p), &args![x]).unwrap();
        let fraction = out.split('.').nth(1).map_or(0, str::len);
        prop_assert_eq!(fraction, p);
    }

    #[test]
    fn prop_missing_argument(count in 0usize..5) {
        let template = "%d".repeat(count + 1);
        let arguments: Vec<Value> = (0..count).map(|i| Value::from(i as i64)).collect();
        let missing = format(&template, &arguments);
        prop_assert!(
            matches!(missing, Err(Error::MissingArgument { directive: 'd', .. })),
            "expected missing argument error"
        );
    }

    #[test]
    fn prop_concat_single_scalar_is_render(n in any::<i64>(), s in ".{0,16}", b in any::<bool>()) {
        for value in [Value::from(n), Value::from(s.as_str()), Value::from(b)] {
            prop_assert_eq!(concat(std::slice::from_ref(&value)), render(&value));
        }
    }

    #[test]
    fn prop_int_array_render(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let expected = format!(
            "[{}]",
            v.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );
        prop_assert_eq!(render(&tinyfmt::to_value(&v).unwrap()), expected);
    }
}

use proptest::prelude::*;
use scaffold_fs::OverwriteChoice;

proptest! {
    #[test]
    fn test_only_known_answers_parse(s in "\\PC*") {
        let normalized = s.trim().to_ascii_lowercase();
        let known = matches!(normalized.as_str(), "s" | "skip" | "r" | "replace");

        prop_assert_eq!(OverwriteChoice::parse(&s).is_some(), known);
    }

    #[test]
    fn test_padding_does_not_change_answer(pad in "[ \\t]{0,4}", replace in any::<bool>()) {
        let answer = if replace { "r" } else { "s" };
        let padded = format!("{pad}{answer}{pad}\n");

        let expected = if replace { OverwriteChoice::Replace } else { OverwriteChoice::Skip };
        prop_assert_eq!(OverwriteChoice::parse(&padded), Some(expected));
    }
}

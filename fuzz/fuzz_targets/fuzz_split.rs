#![no_main]

use arbitrary::Arbitrary;
use lanescan::{split_sequence, try_split_sequence};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    separator: &'a [u8],
    remove_empty: bool,
    haystack: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Ok(split) = try_split_sequence(input.haystack, input.separator, input.remove_empty)
    else {
        assert!(input.separator.is_empty());
        return;
    };
    let parts: Vec<&[u8]> = split.collect();

    if input.remove_empty {
        assert!(parts.iter().all(|p| !p.is_empty()));
        let kept: Vec<&[u8]> = split_sequence(input.haystack, input.separator, false)
            .filter(|p| !p.is_empty())
            .collect();
        assert_eq!(parts, kept);
    } else {
        assert_eq!(parts.join(input.separator), input.haystack);
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_path::ParsedUriPath;

fuzz_target!(|data: &str| {
    let Ok(p1) = ParsedUriPath::parse(data) else {
        return;
    };
    if p1.authority.as_deref().is_some_and(|a| a.contains('%')) {
        return;
    }

    let s1 = p1.format();
    let p2 = ParsedUriPath::parse(&s1).unwrap();
    let s2 = p2.format();
    assert_eq!(s1, s2);

    assert_eq!(p1.root, p1.dir.get(..p1.root.len()).unwrap_or_default());
    assert_eq!(p1.base, format!("{}{}", p1.name, p1.ext));
});

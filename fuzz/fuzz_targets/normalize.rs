#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_path::{normalize, parse};

fuzz_target!(|data: &str| {
    let Ok(parsed) = parse(data) else {
        return;
    };
    // A decoded '%' in the authority is written back as is.
    if parsed.authority.as_deref().is_some_and(|a| a.contains('%')) {
        return;
    }

    let n1 = normalize(data).unwrap();
    let n2 = normalize(&n1).unwrap();

    // A drive letter right after a slash root becomes the root when reparsed.
    if parse(&n1).unwrap().root == parsed.root {
        assert_eq!(n1, n2);
    }
    assert_eq!(normalize(&n2).unwrap(), n2);
});

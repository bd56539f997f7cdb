#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_path::pct_enc::{
    self,
    encoder::{Fragment, Path, Query},
};

fuzz_target!(|data: &str| {
    for encoded in [
        pct_enc::encode::<Path>(data),
        pct_enc::encode::<Query>(data),
        pct_enc::encode::<Fragment>(data),
    ] {
        assert!(!encoded.contains(['\n', '\r', '\u{2028}', '\u{2029}']));
        assert_eq!(pct_enc::decode(&encoded).unwrap(), data);
    }
});

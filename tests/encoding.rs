use std::borrow::Cow;
use uri_path::{
    pct_enc::{
        self,
        encoder::{Fragment, Path, Query},
        table::{self, Table},
    },
    ParseErrorKind,
};

#[test]
fn tables() {
    assert!(table::UNRESERVED.is_subset(table::PATH));
    assert!(table::PATH.is_subset(table::QUERY));
    assert!(table::PATH.is_subset(table::FRAGMENT));
    assert!(!table::QUERY.is_subset(table::FRAGMENT));
    assert!(!table::FRAGMENT.is_subset(table::QUERY));

    for ch in "!$&'()*+,-./:;=@[]_~".chars() {
        assert!(table::PATH.allows(ch), "{ch:?}");
    }
    for ch in "?#%\\^`{|} \"<>".chars() {
        assert!(!table::PATH.allows(ch), "{ch:?}");
    }

    assert!(table::QUERY.allows('?'));
    assert!(table::QUERY.allows('`'));
    assert!(!table::QUERY.allows('#'));

    assert!(table::FRAGMENT.allows('#'));
    assert!(table::FRAGMENT.allows('?'));
    assert!(!table::FRAGMENT.allows('`'));

    for t in [table::PATH, table::QUERY, table::FRAGMENT] {
        assert!(!t.allows('%'));
        assert!(!t.allows('é'));
        assert!(t.allows('a') && t.allows('Z') && t.allows('0'));
    }

    const SLASH_FREE: Table = table::PATH.sub(Table::new(b"/"));
    assert!(!SLASH_FREE.allows('/'));
    assert!(SLASH_FREE.allows('.'));
    assert!(SLASH_FREE.is_subset(table::PATH));
}

#[test]
#[should_panic]
fn table_rejects_percent() {
    let _ = Table::new(b"%");
}

#[test]
fn encode() {
    assert!(matches!(pct_enc::encode::<Path>("/dir/file.ext"), Cow::Borrowed(_)));
    assert_eq!(pct_enc::encode::<Path>("read me.md"), "read%20me.md");
    assert_eq!(pct_enc::encode::<Path>("100%"), "100%25");
    assert_eq!(pct_enc::encode::<Path>("张/3"), "%E5%BC%A0/3");
    assert_eq!(pct_enc::encode::<Path>("a\\b"), "a%5Cb");
    assert_eq!(pct_enc::encode::<Path>("𝄞"), "%F0%9D%84%9E");

    assert_eq!(pct_enc::encode::<Query>("q=a b&r=`{|}`"), "q=a%20b&r=`{|}`");
    assert_eq!(pct_enc::encode::<Query>("a?b#c"), "a?b%23c");

    assert_eq!(pct_enc::encode::<Fragment>("a?b#c"), "a?b#c");
    assert_eq!(pct_enc::encode::<Fragment>("{|}`"), "{|}%60");

    let mut buf = String::from("/");
    pct_enc::encode_to::<Path>("a b", &mut buf);
    assert_eq!(buf, "/a%20b");
}

#[test]
fn decode() {
    assert!(matches!(pct_enc::decode("/dir/file"), Ok(Cow::Borrowed("/dir/file"))));
    assert_eq!(pct_enc::decode("read%20me").unwrap(), "read me");
    assert_eq!(pct_enc::decode("%2f%2F").unwrap(), "//");
    assert_eq!(pct_enc::decode("%E5%BC%A0/%E4%B8%89").unwrap(), "张/三");
    assert_eq!(pct_enc::decode("%25%32%35").unwrap(), "%25");

    let e = pct_enc::decode("a%2").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
    assert_eq!(e.index(), 1);
    assert_eq!(e.input(), "a%2");

    let e = pct_enc::decode("%G0").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
    assert_eq!(e.index(), 0);

    let e = pct_enc::decode("ok%E5%BC").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidUtf8);
    assert_eq!(e.index(), 2);

    let e = pct_enc::decode("%41%E5%BC%A0%FF").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidUtf8);
    assert_eq!(e.index(), 12);
}

#[test]
fn encode_decode() {
    for s in ["", "a b", "100%", "張三/李四?#", "\u{0}\u{7f}\u{80}", "%25"] {
        let encoded = pct_enc::encode::<Path>(s);
        assert_eq!(pct_enc::decode(&encoded).unwrap(), s);
    }
}

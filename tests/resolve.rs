use uri_path::{normalize, relative, resolve};

#[track_caller]
fn check_resolve(uris: &[&str], expected: &str) {
    assert_eq!(resolve(uris).unwrap(), expected);
}

#[track_caller]
fn check_relative(from: &str, to: &str, expected: &str) {
    assert_eq!(relative(from, to).unwrap(), expected);
}

#[test]
fn resolve_paths() {
    check_resolve(&["/foo/bar", "baz", "qux"], "/foo/bar/baz/qux");
    check_resolve(&["/foo/bar", "./baz", "../qux"], "/foo/bar/qux");
    check_resolve(&["/foo/bar", "/baz", "qux"], "/baz/qux");
    check_resolve(&["/foo/bar", "/baz", "../qux"], "/qux");
    check_resolve(&["foo", "bar"], "foo/bar");
    check_resolve(&["../foo", "../bar"], "../bar");
    check_resolve(&["foo"], "foo");
    check_resolve(&["/", "foo"], "/foo");
    check_resolve(&["foo/", "bar"], "foo/bar");
    check_resolve(&[], ".");
}

#[test]
fn resolve_drive_letters() {
    check_resolve(&["c:/foo/bar", "baz/qux", "quux"], "c:/foo/bar/baz/qux/quux");
    check_resolve(&["c:/foo/bar", "/baz", "qux"], "/baz/qux");
    check_resolve(&["c:/foo/bar", "d:/baz", "qux"], "d:/baz/qux");
    check_resolve(&["c:/foo/bar", "c:/foo/hoge/piyo"], "c:/foo/hoge/piyo");
}

#[test]
fn resolve_uris() {
    check_resolve(
        &["/foo/bar", "http://example.com/dir", "file"],
        "http://example.com/dir/file",
    );
    check_resolve(
        &["/foo/bar", "http://example.com/dir", "/file"],
        "http://example.com/file",
    );
    check_resolve(
        &["http://example.com/foo/bar", "http://example.com/foo/hoge/piyo"],
        "http://example.com/foo/hoge/piyo",
    );
    check_resolve(&["file:///", "/foo/bar"], "file:///foo/bar");
    check_resolve(&["file:///", "c:/foo/bar"], "file:///c:/foo/bar");
    check_resolve(&["file:///", "http://example.com/dir"], "http://example.com/dir");
    check_resolve(&["http://example.com/dir", "../file"], "http://example.com/file");
    check_resolve(&["http://example.com/a/b", "//example.org/c"], "http://example.org/c");
}

#[test]
fn resolve_query_and_fragment() {
    // The fragment is always taken from the last URI.
    check_resolve(&["http://a/b?x", "#f"], "http://a/b?x#f");
    check_resolve(&["http://a/b?x#f", "c"], "http://a/b/c");
    check_resolve(&["http://a/b?x#f", "?y"], "http://a/b?y");
    check_resolve(&["http://a/b?x#f", "c?y#g"], "http://a/b/c?y#g");
    check_resolve(&["http://a/b?x#f", "/c"], "http://a/c");
    check_resolve(&["http://a/b?x#f", ""], "http://a/b?x");
}

#[test]
fn resolve_error() {
    assert!(resolve(["/a", "%zz"]).is_err());
    assert!(resolve(["/a\n", "b"]).is_err());
}

#[test]
fn relative_paths() {
    check_relative("", "", "");
    check_relative("", "file", "file");
    check_relative("dir", "file", "../file");
    check_relative("/", "/file", "file");
    check_relative("/file", "/file", "");
    check_relative("/dir", "/file", "../file");
    check_relative("/dir", "/dir/file", "file");
    check_relative("/dir/", "/dir/file", "file");
    check_relative("/dir", "/dir/file/", "file");
    check_relative("/dir/", "/dir/file/", "file");
    check_relative("/dir/file", "/dir", "..");
    check_relative("/dir/file/", "/dir", "..");
    check_relative("/dir/file", "/dir/", "..");
    check_relative("/dir/file/", "/dir/", "..");
    check_relative(
        "/dir/hoge/foo/bar/file",
        "/dir/hoge/baz/qux/file",
        "../../../baz/qux/file",
    );
    check_relative("./", "./file", "file");
    check_relative("./dir", "./file", "../file");
    check_relative("/.", "/file", "file");
    check_relative("/./", "/", "");
    check_relative("c:/./dir", "c:/.", "..");
}

#[test]
fn relative_uris() {
    check_relative("c:/dir", "c:/dir/file", "file");
    check_relative(
        "http://example.com/dir",
        "http://example.com/dir/file",
        "file",
    );
    check_relative(
        "http://example.com/a/b?x",
        "http://example.com/a/c#y",
        "../c#y",
    );
}

#[test]
fn relative_across_roots() {
    check_relative("c:/dir", "d:/dir/file", "d:/dir/file");
    check_relative("c:/dir", "http://example.org/dir/file", "http://example.org/dir/file");
    check_relative(
        "http://example.com/dir",
        "http://example.org/dir/file",
        "http://example.org/dir/file",
    );
    check_relative("/dir", "dir/file", "dir/file");
    check_relative("//a/x", "//b/x", "//b/x");
    // `to` is returned as given, not normalized.
    check_relative("/a", "c:/./b/../c", "c:/./b/../c");
}

#[test]
fn relative_error() {
    assert!(relative("/a%zz", "/b").is_err());
    assert!(relative("/a", "/b\r").is_err());
}

#[test]
fn resolve_relative_inverse() {
    for (from, to) in [
        ("/dir/hoge/foo/bar/file", "/dir/hoge/baz/qux/file"),
        ("/dir/file", "/dir"),
        ("/a/b/c", "/a/x"),
        ("/a/b", "/a/b/c/d"),
        ("c:/dir", "c:/dir/file"),
        ("http://example.com/dir", "http://example.com/dir/file"),
        ("http://example.com/a/b", "http://example.com/c"),
    ] {
        let rel = relative(from, to).unwrap();
        assert_ne!(rel, to);
        assert_eq!(
            resolve([from, rel.as_str()]).unwrap(),
            normalize(to).unwrap(),
            "resolve({from:?}, {rel:?})"
        );
    }
}

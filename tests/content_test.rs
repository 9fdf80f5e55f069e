//! Integration tests for greeting and snippet loading.

use std::fs;
use std::path::Path;

use hello_world::content::{
    fill_placeholder, first_line, normalize_locale, read_greeting, ContentError, SnippetStream,
};
use hello_world::core::SimpleRng;

fn fixture() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    let i18n = root.path().join("i18n");
    let code = root.path().join("code");
    fs::create_dir(&i18n).unwrap();
    fs::create_dir(&code).unwrap();
    fs::write(i18n.join("en-us.txt"), "Hello, world!\nWelcome.\n").unwrap();
    fs::write(i18n.join("zh-cn.txt"), "你好，世界！\n").unwrap();
    fs::write(code.join("hello.rs"), "fn main() {\n\tprintln!(\"$$$\");\n}\n").unwrap();
    fs::write(code.join("hello.py"), "print(\"$$$\")\n").unwrap();
    root
}

#[test]
fn locale_normalization_examples() {
    assert_eq!(normalize_locale(Some("en_US.UTF-8")), "en-us");
    assert_eq!(normalize_locale(Some("")), "en-us");
    assert_eq!(normalize_locale(Some("FR")), "fr");
}

#[test]
fn greeting_follows_locale_then_falls_back() {
    let root = fixture();
    let i18n = root.path().join("i18n");

    let zh = read_greeting(&i18n, &normalize_locale(Some("zh_CN.UTF-8")));
    assert_eq!(zh, "你好，世界！\n");

    let fr = read_greeting(&i18n, &normalize_locale(Some("fr_FR.UTF-8")));
    assert_eq!(fr, "Hello, world!\nWelcome.\n");
}

#[test]
fn snippets_get_the_greeting_first_line() {
    let root = fixture();
    let greeting = read_greeting(&root.path().join("i18n"), "en-us");
    let stream = SnippetStream::open(&root.path().join("code"), SimpleRng::new(5)).unwrap();
    assert_eq!(stream.files().len(), 2);

    for snippet in stream.take(10) {
        assert_eq!(snippet.matches("$$$").count(), 1);
        let filled = fill_placeholder(&snippet, first_line(&greeting));
        assert!(!filled.contains("$$$"));
        assert_eq!(filled.matches("Hello, world!").count(), 1);
    }
}

#[test]
fn empty_code_directory_is_a_startup_error() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("code")).unwrap();
    let err = SnippetStream::open(&root.path().join("code"), SimpleRng::new(1)).unwrap_err();
    let ContentError::NoSnippets { dir } = err;
    assert_eq!(dir, root.path().join("code"));
}

#[test]
fn missing_code_directory_is_a_startup_error() {
    let result = SnippetStream::open(Path::new("/no/such/code/dir"), SimpleRng::new(1));
    assert!(result.is_err());
}

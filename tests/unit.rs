use colligo::{
    ColligoBuilder, ColligoError, colligo, is_hidden, relative_output_path, resolve_root,
    write_file_block,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::tempdir;

fn run(options: &colligo::ColligoOptions) -> (String, colligo::RunSummary) {
    let mut buf = Vec::new();
    let summary = colligo(options, &mut buf).unwrap();
    (String::from_utf8(buf).unwrap(), summary)
}

#[test]
fn test_is_hidden() {
    assert!(is_hidden(".git"));
    assert!(!is_hidden("file.txt"));
    assert!(!is_hidden(""));
}

#[test]
fn test_single_file_block() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello world").unwrap();
    let (out, summary) = run(&ColligoBuilder::new(dir.path()).build());
    assert_eq!(
        out,
        "\n\n# BEGIN FILE: hello.txt\n\nhello world\n\n# END FILE: hello.txt\n\n"
    );
    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.bytes_copied, 11);
}

#[test]
fn test_block_length_matches_markers_and_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");
    let content = "line one\r\nline two\n";
    fs::write(&path, content).unwrap();
    let mut out = Vec::new();
    let copied = write_file_block(&mut out, &path, "data.txt").unwrap();
    assert_eq!(copied, fs::metadata(&path).unwrap().len());
    let expected_len = colligo::output::begin_marker("data.txt").len()
        + content.len()
        + colligo::output::end_marker("data.txt").len();
    assert_eq!(out.len(), expected_len);
}

#[test]
fn test_hidden_entries_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join(".secret"), "x").unwrap();
    fs::create_dir(dir.path().join(".github")).unwrap();
    fs::write(dir.path().join(".github/token.txt"), "y").unwrap();
    let (out, summary) = run(&ColligoBuilder::new(dir.path()).build());
    assert!(out.contains("\n\n# BEGIN FILE: a.txt\n\nhello\n\n# END FILE: a.txt\n\n"));
    assert!(out.contains(
        "\n\n# BEGIN FILE: .github/token.txt\n\ny\n\n# END FILE: .github/token.txt\n\n"
    ));
    assert!(!out.contains(".secret"));
    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.hidden_skipped, 1);
}

#[test]
fn test_hidden_directory_pruned() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
    fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();
    fs::write(dir.path().join(".git/objects/ab"), "blob").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    let (out, _) = run(&ColligoBuilder::new(dir.path()).build());
    assert!(out.contains("# BEGIN FILE: main.rs"));
    assert!(!out.contains(".git"));
    assert!(!out.contains("blob"));
}

#[test]
fn test_include_hidden() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "KEY=1").unwrap();
    fs::create_dir(dir.path().join(".config")).unwrap();
    fs::write(dir.path().join(".config/app.toml"), "a = 1").unwrap();
    let options = ColligoBuilder::new(dir.path()).include_hidden(true).build();
    let (out, summary) = run(&options);
    assert!(out.contains("# BEGIN FILE: .env"));
    assert!(out.contains("# BEGIN FILE: .config/app.toml"));
    assert_eq!(summary.hidden_skipped, 0);
}

#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    let (out, summary) = run(&ColligoBuilder::new(dir.path()).build());
    assert_eq!(
        out,
        "\n\n# BEGIN FILE: empty.txt\n\n\n\n# END FILE: empty.txt\n\n"
    );
    assert_eq!(summary.bytes_copied, 0);
}

#[test]
fn test_missing_root_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = resolve_root(&missing).unwrap_err();
    assert!(matches!(err, ColligoError::RootResolution { .. }));
    let mut buf = Vec::new();
    let err = colligo(&ColligoBuilder::new(&missing).build(), &mut buf).unwrap_err();
    assert!(matches!(err, ColligoError::RootResolution { .. }));
    assert!(buf.is_empty());
}

#[test]
fn test_file_root_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("f.txt");
    fs::write(&file, "x").unwrap();
    let err = resolve_root(&file).unwrap_err();
    assert!(matches!(err, ColligoError::NotADirectory { .. }));
}

#[test]
fn test_resolve_root_cleans_path() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let messy = dir.path().join("sub").join("..").join(".").join("sub");
    let resolved = resolve_root(&messy).unwrap();
    assert!(resolved.is_absolute());
    assert_eq!(resolved, resolve_root(&dir.path().join("sub")).unwrap());
}

#[test]
fn test_relative_output_path() {
    let dir = tempdir().unwrap();
    let root = resolve_root(dir.path()).unwrap();
    let inside = root.join("out").join("combined.txt");
    assert_eq!(
        relative_output_path(&root, &inside),
        Some(PathBuf::from("out/combined.txt"))
    );
    let dotted = root.join("sub").join("..").join(".").join("combined.txt");
    assert_eq!(
        relative_output_path(&root, &dotted),
        Some(PathBuf::from("combined.txt"))
    );
    let other = tempdir().unwrap();
    let outside = resolve_root(other.path()).unwrap().join("combined.txt");
    assert_eq!(relative_output_path(&root, &outside), None);
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn test_flush_failure_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let err = colligo(&ColligoBuilder::new(dir.path()).build(), FailingSink).unwrap_err();
    assert!(matches!(err, ColligoError::Flush(_)));
}

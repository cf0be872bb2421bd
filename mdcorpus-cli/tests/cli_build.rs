use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn write_tree(root: &std::path::Path) {
    let blog = root.join("blog");
    fs::create_dir_all(blog.join("group-a")).unwrap();
    fs::create_dir_all(blog.join("-drafts")).unwrap();

    fs::write(
        root.join("mdcorpus.yml"),
        r#"
paths:
  root: "blog"
  output: "out"
group_depth: 1
content_depth: 1
"#,
    )
    .unwrap();

    fs::write(
        blog.join("group-a/post.md"),
        "---\ntitle: 你好世界\n---\nPublished body.",
    )
    .unwrap();
    fs::write(
        blog.join("group-a/draft.md"),
        "---\ntitle: Hidden\ndraft: true\n---\nDraft body.",
    )
    .unwrap();
    fs::write(blog.join("-drafts/private.md"), "Never indexed.").unwrap();
    fs::write(blog.join("group-a/notes.txt"), "Not a document.").unwrap();
}

#[test]
fn build_writes_identical_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_tree(dir.path());

    Command::cargo_bin("mdcorpus")?
        .current_dir(dir.path())
        .args(["build"])
        .assert()
        .success();

    let posts = fs::read(dir.path().join("out/posts.json"))?;
    let search = fs::read(dir.path().join("out/search.json"))?;
    assert_eq!(posts, search);

    let records: Value = serde_json::from_slice(&posts)?;
    let arr = records.as_array().expect("json array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["group"], "group-a");
    assert_eq!(arr[0]["slug"], "group-a/ni-hao-shi-jie");
    assert_eq!(arr[0]["frontmatter"]["title"], "你好世界");
    assert_eq!(arr[0]["content"], "Published body.");

    Ok(())
}

#[test]
fn build_overwrites_previous_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_tree(dir.path());
    fs::create_dir_all(dir.path().join("out"))?;
    fs::write(dir.path().join("out/posts.json"), "stale")?;

    Command::cargo_bin("mdcorpus")?
        .current_dir(dir.path())
        .args(["build"])
        .assert()
        .success();

    let records: Value = serde_json::from_slice(&fs::read(dir.path().join("out/posts.json"))?)?;
    assert_eq!(records.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[test]
fn list_prints_records_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_tree(dir.path());

    let assert = Command::cargo_bin("mdcorpus")?
        .current_dir(dir.path())
        .args(["list", "--pretty"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let arr = value.as_array().expect("json array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["slug"], "group-a/ni-hao-shi-jie");

    Ok(())
}

#[test]
fn malformed_document_fails_and_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_tree(dir.path());
    fs::write(
        dir.path().join("blog/group-a/bad.md"),
        "---\nbad yaml: [unclosed\n---\nBody.",
    )?;

    Command::cargo_bin("mdcorpus")?
        .current_dir(dir.path())
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.md"));

    assert!(!dir.path().join("out/posts.json").exists());
    assert!(!dir.path().join("out/search.json").exists());

    Ok(())
}

use pkgmeta_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("package.json"));

    io::write_atomic(&path, b"{}").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "{}");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("widget.js");
    fs::write(&file_path, "var x = 1;").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"var x = 2;").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "var x = 2;");
}

#[test]
fn test_write_text_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("widget.js"));

    io::write_text(&path, "content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("widget.js");
    fs::write(&file_path, "hello").unwrap();

    let path = NormalizedPath::new(&file_path);
    assert_eq!(io::read_text(&path).unwrap(), "hello");
}

#[test]
fn test_read_text_nonexistent_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.js"));

    let err = io::read_text(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_metadata_nonexistent_path_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nope"));

    let err = io::metadata(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_list_files_with_suffix_filters_and_sorts() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("zeta.js"), "").unwrap();
    fs::write(temp.path().join("alpha.js"), "").unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::write(temp.path().join("notes.jsx"), "").unwrap();
    fs::create_dir(temp.path().join("dir.js")).unwrap();

    let dir = NormalizedPath::new(temp.path());
    let files = io::list_files_with_suffix(&dir, ".js").unwrap();

    let names: Vec<_> = files.iter().filter_map(|f| f.file_name()).collect();
    assert_eq!(names, vec!["alpha.js", "zeta.js"]);
}

#[test]
fn test_list_files_with_suffix_empty_dir() {
    let temp = TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path());

    assert!(io::list_files_with_suffix(&dir, ".js").unwrap().is_empty());
}

#[test]
fn test_list_files_with_suffix_includes_bare_suffix_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".js"), "").unwrap();

    let dir = NormalizedPath::new(temp.path());
    let files = io::list_files_with_suffix(&dir, ".js").unwrap();

    let names: Vec<_> = files.iter().filter_map(|f| f.file_name()).collect();
    assert_eq!(names, vec![".js"]);
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("widget.js");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("inner.js"), "").unwrap();

    let result = io::write_text(&NormalizedPath::new(&target), "var x = 1;");

    assert!(result.is_err());
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[test]
    fn test_write_atomic_keeps_executable_mode() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("cli.js");
        fs::write(&file_path, "#!/usr/bin/env node\n").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o755)).unwrap();

        io::write_text(&NormalizedPath::new(&file_path), "#!/usr/bin/env node\nrun();\n").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "#!/usr/bin/env node\nrun();\n"
        );
    }

    #[test]
    fn test_write_atomic_writes_through_symlink() {
        let temp = TempDir::new().unwrap();
        let real_dir = temp.path().join("real");
        fs::create_dir(&real_dir).unwrap();
        let real_file = real_dir.join("widget.js");
        fs::write(&real_file, "var x = 1;").unwrap();
        let link = temp.path().join("widget.js");
        symlink(&real_file, &link).unwrap();

        io::write_text(&NormalizedPath::new(&link), "var x = 2;").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real_file).unwrap(), "var x = 2;");
    }

    #[test]
    fn test_list_files_with_suffix_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let real_dir = temp.path().join("real");
        let pkg_dir = temp.path().join("pkg");
        fs::create_dir(&real_dir).unwrap();
        fs::create_dir(&pkg_dir).unwrap();
        fs::write(real_dir.join("widget.js"), "").unwrap();
        symlink(real_dir.join("widget.js"), pkg_dir.join("widget.js")).unwrap();
        symlink(real_dir.join("missing.js"), pkg_dir.join("dangling.js")).unwrap();

        let files = io::list_files_with_suffix(&NormalizedPath::new(&pkg_dir), ".js").unwrap();

        let names: Vec<_> = files.iter().filter_map(|f| f.file_name()).collect();
        assert_eq!(names, vec!["widget.js"]);
    }
}

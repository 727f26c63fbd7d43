//! Checks that the `tests/unit` tree mirrors `src/` and is wired into the test crate

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module files only declare modules
    fn is_module_glue(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("lib.rs" | "main.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file below `root`, relative to it
    fn rust_files(root: &Path) -> BTreeSet<PathBuf> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.insert(path.strip_prefix(root).unwrap().to_path_buf());
                }
            }
        }
        files
    }

    /// Names declared with `mod name;` in `file`
    fn declared_modules(file: &Path) -> BTreeSet<String> {
        fs::read_to_string(file)
            .unwrap()
            .lines()
            .filter_map(|line| line.trim().strip_prefix("mod "))
            .filter_map(|rest| rest.strip_suffix(';'))
            .map(str::to_string)
            .collect()
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source file has a unit test file at the same relative path
    #[test]
    fn test_every_source_file_is_mirrored() {
        let src = rust_files(Path::new(SRC_DIR));
        let unit = rust_files(Path::new(UNIT_DIR));

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_module_glue(path) && !unit.contains(*path))
            .collect();
        assert!(
            missing.is_empty(),
            "Source files without tests/unit counterparts:\n{}",
            listing(&missing)
        );

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !is_module_glue(path) && !src.contains(*path))
            .collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            listing(&orphaned)
        );
    }

    // Tests the single unit test root declares one module per source directory
    #[test]
    fn test_unit_root_declares_every_area() {
        let areas: BTreeSet<String> = fs::read_dir(SRC_DIR)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.is_dir())
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect();

        assert!(areas.contains("codec") && areas.contains("editor"));
        assert_eq!(declared_modules(&Path::new(UNIT_DIR).join("main.rs")), areas);
    }

    // Tests each area's mod.rs pulls in every test file next to it
    #[test]
    fn test_area_modules_declare_every_file() {
        for file in rust_files(Path::new(UNIT_DIR)) {
            let Some(area) = file.parent().filter(|parent| !parent.as_os_str().is_empty())
            else {
                continue;
            };
            if is_module_glue(&file) {
                continue;
            }
            let mod_file = Path::new(UNIT_DIR).join(area).join("mod.rs");
            let stem = file.file_stem().and_then(|stem| stem.to_str()).unwrap();
            assert!(
                declared_modules(&mod_file).contains(stem),
                "{} does not declare `mod {stem};`",
                mod_file.display()
            );
        }
    }

    // Tests every unit and meta test file defines at least one test
    #[test]
    fn test_every_test_file_has_tests() {
        let mut empty = Vec::new();
        for dir in [UNIT_DIR, "tests/meta"] {
            for file in rust_files(Path::new(dir)) {
                if is_module_glue(&file) {
                    continue;
                }
                let path = Path::new(dir).join(&file);
                if !fs::read_to_string(&path).unwrap().contains("#[test]") {
                    empty.push(path);
                }
            }
        }
        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n{}",
            listing(&empty.iter().collect::<Vec<_>>())
        );
    }
}

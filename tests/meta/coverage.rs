//! Structural checks keeping `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(paths)
    }

    fn tree(dir: &str) -> BTreeSet<String> {
        let path = Path::new(dir);
        collect_relative_paths(path, path)
            .unwrap_or_else(|error| panic!("Failed to read {dir}: {error}"))
    }

    fn report(title: &str, lines: &[String]) -> String {
        format!("{title}:\n{}", lines.join("\n"))
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/solver/sat.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = tree(UNIT_DIR);
        let missing: Vec<String> = tree(SRC_DIR)
            .into_iter()
            .filter(|path| !is_exempt(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/spatial/extension.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = tree(SRC_DIR);
        let orphaned: Vec<String> = tree(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without source files", &orphaned)
        );
    }

    // Tests each unit test file and directory is declared in its parent mod.rs
    // Verified by removing `mod sat;` from tests/unit/solver/mod.rs
    #[test]
    fn test_unit_modules_are_declared() {
        let mut undeclared = Vec::new();

        for path in tree(UNIT_DIR) {
            if path.ends_with("mod.rs") {
                continue;
            }
            let relative = Path::new(&path);
            let Some(stem) = relative.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = relative.parent().unwrap_or_else(|| Path::new(""));
            let declarations = Path::new(UNIT_DIR).join(parent).join("mod.rs");
            let content = fs::read_to_string(&declarations).unwrap_or_default();

            if !content.lines().any(|line| line.trim() == format!("mod {stem};")) {
                undeclared.push(format!("  - {UNIT_DIR}/{path} in {}", declarations.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit tests that never compile", &undeclared)
        );
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs")
                || path.file_name().and_then(|name| name.to_str()) == Some("mod.rs")
            {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    // Tests every test source outside mod.rs holds at least one test
    // Verified by emptying tests/unit/io/logging.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut files_without_tests = Vec::new();
        check_test_files(Path::new("tests"), &mut files_without_tests)
            .unwrap_or_else(|error| panic!("Failed to scan tests directory: {error}"));

        assert!(
            files_without_tests.is_empty(),
            "{}",
            report("Test files without #[test] functions", &files_without_tests)
        );
    }
}

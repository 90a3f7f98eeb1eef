//! Integration tests for pyupdate
//!
//! These tests verify:
//! - Manifest excision preserves unrelated content on real files
//! - Failed excisions leave the manifest untouched
//! - Exact pinning is selective
//! - The full workflow against a scripted package manager

use pyupdate::domain::UpdatePlan;
use pyupdate::error::{AppError, ManifestError, ToolError};
use pyupdate::manifest::{
    make_versions_exact, remove_dependencies, remove_lock_file, PyprojectManifest,
};
use pyupdate::orchestrator::{Orchestrator, Stage};
use pyupdate::package_manager::{command_line, CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir(pyproject: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("pyproject.toml"), pyproject).unwrap();
    temp_dir
}

fn read_pyproject(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("pyproject.toml")).unwrap()
}

mod excision {
    use super::*;

    /// Removing one entry keeps an unrelated table byte-for-byte
    #[test]
    fn test_excision_preserves_unrelated_content() {
        let pyproject = r#"[project]
name = "test-package"
dependencies = ["pkgA>=1.0", "pkgB==2.0"]

[tool.x]
foo = "bar"
"#;
        let dir = create_test_dir(pyproject);
        let path = dir.path().join("pyproject.toml");

        remove_dependencies(&path, &["pkgA"]).unwrap();

        let content = read_pyproject(&dir);
        assert!(content.contains("[tool.x]\nfoo = \"bar\"\n"));
        assert!(content.contains("dependencies = [\"pkgB==2.0\"]\n"));
        assert!(!content.contains(",]"));
        assert!(!content.contains("\"\""));
    }

    /// Comments, key order and formatting survive a multi-line excision
    #[test]
    fn test_excision_keeps_comments_and_layout() {
        let pyproject = r#"# Top comment
[project]
name = "demo"
version = "0.1.0"
dependencies = [
    # web
    "fastapi>=0.110",
    "uvicorn[standard]>=0.29",
]

[dependency-groups]
dev = [
    "pytest>=8.0",  # tests
    "mypy",
]
"#;
        let dir = create_test_dir(pyproject);
        let path = dir.path().join("pyproject.toml");
        let names = PyprojectManifest::parse(pyproject, &path)
            .unwrap()
            .dependency_set();

        remove_dependencies(&path, &names.all_names()).unwrap();

        assert_eq!(
            read_pyproject(&dir),
            r#"# Top comment
[project]
name = "demo"
version = "0.1.0"
dependencies = [
    # web
]

[dependency-groups]
dev = [
]
"#
        );
    }

    /// A name appearing in two tables is rejected, not guessed
    #[test]
    fn test_ambiguous_dependency_is_rejected() {
        let pyproject = r#"[project]
dependencies = ["shared-lib>=1.0", "click"]

[dependency-groups]
extra = ["shared-lib>=1.0"]
"#;
        let dir = create_test_dir(pyproject);
        let path = dir.path().join("pyproject.toml");

        let err = remove_dependencies(&path, &["click", "shared-lib"]).unwrap_err();
        assert!(matches!(err, ManifestError::AmbiguousDependency { .. }));
        assert_eq!(read_pyproject(&dir), pyproject);
    }

    /// A missing name aborts without writing anything
    #[test]
    fn test_missing_dependency_leaves_file_unchanged() {
        let pyproject = "[project]\ndependencies = [\"requests>=2.0\"]\n";
        let dir = create_test_dir(pyproject);
        let path = dir.path().join("pyproject.toml");

        let err = remove_dependencies(&path, &["requests", "flask"]).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::DependencyNotFound { ref name, .. } if name == "flask"
        ));
        assert_eq!(read_pyproject(&dir), pyproject);
    }
}

mod exact_pins {
    use super::*;

    #[test]
    fn test_exactify_selected_names_only() {
        let pyproject = r#"[project]
dependencies = ["pkgA>=1.0", "pkgB>=2.0", "pkgC<=1.0"]
"#;
        let dir = create_test_dir(pyproject);
        let path = dir.path().join("pyproject.toml");

        make_versions_exact(&path, &["pkgA", "pkgC"]).unwrap();

        assert_eq!(
            read_pyproject(&dir),
            "[project]\ndependencies = [\"pkgA==1.0\", \"pkgB>=2.0\", \"pkgC<=1.0\"]\n"
        );
    }
}

mod lock_file {
    use super::*;

    #[test]
    fn test_lock_removal_is_idempotent() {
        let dir = create_test_dir("[project]\n");
        let lock = dir.path().join("uv.lock");
        fs::write(&lock, "version = 1\n").unwrap();

        assert!(remove_lock_file(&lock).unwrap());
        assert!(!lock.exists());
        assert!(!remove_lock_file(&lock).unwrap());
    }
}

mod workflow {
    use super::*;

    /// Scripted uv: records commands and writes `>=` pins on add
    #[derive(Default)]
    struct ScriptedUv {
        commands: RefCell<Vec<String>>,
        fail_dev: bool,
    }

    impl CommandRunner for ScriptedUv {
        fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ToolError> {
            self.commands.borrow_mut().push(command_line(program, args));

            let idx = args.iter().position(|a| a == "--directory").unwrap() + 1;
            let dir = Path::new(&args[idx]);
            let is_dev = args.iter().any(|a| a == "--dev");

            if is_dev && self.fail_dev {
                return Ok(CommandOutput::failure(2, "error: resolution failed"));
            }

            match args[0].as_str() {
                "add" => {
                    let key = if is_dev { "dev = [" } else { "dependencies = [" };
                    let path = dir.join("pyproject.toml");
                    let mut content = fs::read_to_string(&path).unwrap();
                    for name in &args[idx + 1..] {
                        let with_entry = format!("{}\n    \"{}>=3.1.4\",", key, name);
                        content = content.replacen(key, &with_entry, 1);
                    }
                    fs::write(&path, content).unwrap();
                }
                "sync" => fs::write(dir.join("uv.lock"), "version = 1\n").unwrap(),
                _ => {}
            }
            Ok(CommandOutput::success(""))
        }
    }

    const PYPROJECT: &str = r#"[project]
name = "service"
dependencies = ["requests>=2.0"]

[dependency-groups]
dev = ["pytest>=7.0"]
"#;

    #[test]
    fn test_full_update_with_exact_pins() {
        let dir = create_test_dir(PYPROJECT);
        fs::write(dir.path().join("uv.lock"), "old").unwrap();
        let orchestrator =
            Orchestrator::new(UpdatePlan::new(dir.path(), true), ScriptedUv::default());

        let report = orchestrator.run().unwrap();

        let commands = orchestrator.runner().commands.borrow().clone();
        let d = dir.path().display().to_string();
        assert_eq!(
            commands,
            vec![
                format!("uv add --directory {} requests", d),
                format!("uv add --dev --directory {} pytest", d),
                format!("uv sync --directory {}", d),
            ]
        );
        assert!(report.lock_removed);
        assert_eq!(report.exactified, vec!["requests", "pytest"]);

        let content = read_pyproject(&dir);
        assert!(content.contains("\"requests==3.1.4\""));
        assert!(content.contains("\"pytest==3.1.4\""));
        assert!(content.starts_with("[project]\nname = \"service\"\n"));

        // The rewritten manifest is still valid and declares both packages
        let reparsed = PyprojectManifest::parse(&content, Path::new("pyproject.toml")).unwrap();
        assert_eq!(reparsed.dependency_set().all_names(), vec!["requests", "pytest"]);
    }

    #[test]
    fn test_failure_reports_stage_and_output() {
        let dir = create_test_dir(PYPROJECT);
        let runner = ScriptedUv {
            fail_dev: true,
            ..ScriptedUv::default()
        };
        let orchestrator = Orchestrator::new(UpdatePlan::new(dir.path(), true), runner);

        let err = orchestrator.run().unwrap_err();
        assert_eq!(err.stage, Stage::DevReadded);
        assert!(err.requires_recovery());
        match &err.source {
            AppError::Tool(ToolError::Failed { code, output, .. }) => {
                assert_eq!(*code, Some(2));
                assert!(output.contains("resolution failed"));
            }
            other => panic!("unexpected error: {other}"),
        }

        // Main was re-added, dev stays excised, nothing was exactified
        let content = read_pyproject(&dir);
        assert!(content.contains("\"requests>=3.1.4\""));
        assert!(!content.contains("pytest"));
        assert!(!dir.path().join("uv.lock").exists());
    }
}

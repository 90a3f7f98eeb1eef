//! Update orchestrator for coordinating the entire update workflow
//!
//! This module provides:
//! - Workflow coordination: parse → strip → remove lock → excise → re-add → exactify → sync
//! - Stage tracking so a failure names the step that broke
//! - Fail-fast error handling with no rollback of completed steps
//!
//! A failure after the lock file has been removed leaves the project in an
//! intermediate state: declarations may be missing from pyproject.toml until
//! the user restores it (for example from version control).

use crate::domain::{DependencySet, UpdatePlan, UpdateReport};
use crate::error::{AppError, ManifestError, ToolError};
use crate::manifest::{
    locate_manifest, make_versions_exact, read_manifest, remove_dependencies, remove_lock_file,
    PyprojectManifest,
};
use crate::package_manager::{CommandRunner, SystemCommandRunner, UvUpdater};
use crate::progress::Progress;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Workflow stages, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Init,
    Parsed,
    DepsStripped,
    LockRemoved,
    ManifestMutated,
    MainReadded,
    DevReadded,
    OptionalReadded,
    Exactified,
    LockResynced,
    Done,
}

impl Stage {
    /// What the workflow does to reach this stage
    pub fn description(&self) -> &'static str {
        match self {
            Stage::Init => "starting",
            Stage::Parsed => "reading pyproject.toml",
            Stage::DepsStripped => "stripping version specifiers",
            Stage::LockRemoved => "removing uv.lock",
            Stage::ManifestMutated => "removing dependencies from pyproject.toml",
            Stage::MainReadded => "adding main dependencies",
            Stage::DevReadded => "adding dev dependencies",
            Stage::OptionalReadded => "adding optional dependencies",
            Stage::Exactified => "pinning exact versions",
            Stage::LockResynced => "syncing uv.lock",
            Stage::Done => "finishing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A failed run and the stage it failed in
#[derive(Error, Debug)]
#[error("failed while {stage}: {source}")]
pub struct UpdateError {
    /// Stage that was being entered when the failure happened
    pub stage: Stage,
    /// Underlying cause
    #[source]
    pub source: AppError,
}

impl UpdateError {
    fn at<E: Into<AppError>>(stage: Stage) -> impl FnOnce(E) -> UpdateError {
        move |e| UpdateError {
            stage,
            source: e.into(),
        }
    }

    /// Returns true if the project may have been left partially updated
    pub fn requires_recovery(&self) -> bool {
        self.stage > Stage::LockRemoved
    }
}

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator<R> {
    /// Run configuration
    plan: UpdatePlan,
    /// Package manager commands for the target directory
    updater: UvUpdater<R>,
}

impl Orchestrator<SystemCommandRunner> {
    /// Create an orchestrator that runs the real package manager
    pub fn system(plan: UpdatePlan) -> Self {
        Self::new(plan, SystemCommandRunner::new())
    }
}

impl<R: CommandRunner> Orchestrator<R> {
    /// Create an orchestrator with a custom command runner
    pub fn new(plan: UpdatePlan, runner: R) -> Self {
        let updater = UvUpdater::new(plan.program.clone(), plan.directory.clone(), runner);
        Self { plan, updater }
    }

    /// Command runner in use
    pub fn runner(&self) -> &R {
        self.updater.runner()
    }

    /// Run the update workflow
    pub fn run(&self) -> Result<UpdateReport, UpdateError> {
        self.run_with_progress(false)
    }

    /// Run the update workflow with optional progress display
    pub fn run_with_progress(&self, show_progress: bool) -> Result<UpdateReport, UpdateError> {
        let mut progress = Progress::new(show_progress);
        log::info!(
            "Updating Python packages in {}",
            self.plan.directory().display()
        );

        // Step 1: Read and parse the manifest
        let (manifest_path, manifest) = self
            .load_manifest()
            .map_err(UpdateError::at(Stage::Parsed))?;
        log::debug!(
            "Parsed {} main and {} dev dependencies from {}",
            manifest.main_dependencies().len(),
            manifest.dev_dependencies().len(),
            manifest_path.display()
        );

        // Step 2: Strip version specifiers
        let dependencies = manifest.dependency_set();
        log::trace!("Dependencies without version specifiers: {:?}", dependencies);
        let mut report = UpdateReport::new(&manifest_path);
        self.enter(Stage::DepsStripped);

        // Step 3: Remove the lock file
        report.lock_removed = remove_lock_file(&self.plan.lock_path())
            .map_err(UpdateError::at(Stage::LockRemoved))?;
        self.enter(Stage::LockRemoved);

        // Step 4: Excise every declaration that will be re-added
        report.removed_entries = remove_dependencies(&manifest_path, &dependencies.all_names())
            .map_err(UpdateError::at(Stage::ManifestMutated))?;
        self.enter(Stage::ManifestMutated);

        // Step 5: Re-add at the latest versions
        self.readd(&dependencies, &mut progress)?;

        // Step 6: Pin exact versions
        if self.plan.save_exact && !dependencies.is_empty() {
            let names = dependencies.all_names();
            make_versions_exact(&manifest_path, &names)
                .map_err(UpdateError::at(Stage::Exactified))?;
            report.exactified = names.into_iter().map(str::to_string).collect();
            log::info!("Updated pyproject.toml to save exact versions of dependencies");
            self.enter(Stage::Exactified);
        }

        // Step 7: Regenerate the lock file
        self.step(&mut progress, "Syncing uv.lock", || self.updater.sync())
            .map_err(UpdateError::at(Stage::LockResynced))?;
        self.enter(Stage::LockResynced);

        report.dependencies = dependencies;
        self.enter(Stage::Done);
        Ok(report)
    }

    fn load_manifest(&self) -> Result<(PathBuf, PyprojectManifest), ManifestError> {
        let path = self.plan.manifest_path();
        locate_manifest(&path)?;
        let content = read_manifest(&path)?;
        let manifest = PyprojectManifest::parse(&content, &path)?;
        Ok((path, manifest))
    }

    fn readd(
        &self,
        dependencies: &DependencySet,
        progress: &mut Progress,
    ) -> Result<(), UpdateError> {
        if !dependencies.main.is_empty() {
            log::info!(
                "Adding {} main dependencies back using 'uv add'",
                dependencies.main.len()
            );
            self.step(progress, "Adding main dependencies", || {
                self.updater.add_main(&dependencies.main)
            })
            .map_err(UpdateError::at(Stage::MainReadded))?;
            self.enter(Stage::MainReadded);
        }

        if !dependencies.dev.is_empty() {
            log::info!(
                "Adding {} dev dependencies back using 'uv add --dev'",
                dependencies.dev.len()
            );
            self.step(progress, "Adding dev dependencies", || {
                self.updater.add_dev(&dependencies.dev)
            })
            .map_err(UpdateError::at(Stage::DevReadded))?;
            self.enter(Stage::DevReadded);
        }

        for (group, names) in &dependencies.optional {
            log::info!(
                "Adding {} '{}' dependencies back using 'uv add --optional'",
                names.len(),
                group
            );
            let message = format!("Adding {} dependencies", group);
            self.step(progress, &message, || self.updater.add_optional(group, names))
                .map_err(UpdateError::at(Stage::OptionalReadded))?;
        }
        if !dependencies.optional.is_empty() {
            self.enter(Stage::OptionalReadded);
        }

        Ok(())
    }

    /// Run one blocking package manager command behind a spinner
    fn step(
        &self,
        progress: &mut Progress,
        message: &str,
        command: impl FnOnce() -> Result<(), ToolError>,
    ) -> Result<(), ToolError> {
        let result = progress.wrap(message, command);
        log::trace!("{} package manager steps finished", progress.completed());
        result
    }

    fn enter(&self, stage: Stage) {
        log::debug!("Reached stage {:?}", stage);
    }
}

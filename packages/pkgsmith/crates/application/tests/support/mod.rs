#![allow(dead_code)]

use anyhow::{anyhow, Result};
use application::CreateManifestService;
use async_trait::async_trait;
use domain::{
    ComposeInstaller, ComposeManifest, InspectionBundle, InstallerInspector, ManifestStore,
    Prompt, SubmissionClient, SubmissionResponse,
};
use pkgsmith_manifest::{
    Architecture, InstallerBuilder, InstallerKind, ManifestBuilder, PackageManifest,
};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use url::Url;

pub const PRIMARY_URL: &str = "https://example.com/app-x64.exe";

#[derive(Debug, Clone)]
pub enum Answer {
    Yes,
    No,
    Text(&'static str),
}

/// Replays operator answers in order and records every question asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<Answer>>,
    pub asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self, question: &str) -> Answer {
        self.asked.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for: {}", question))
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, question: &str, _default: bool) -> bool {
        match self.next(question) {
            Answer::Yes => true,
            Answer::No => false,
            other => panic!("expected yes/no for '{}', got {:?}", question, other),
        }
    }

    fn text(&self, question: &str, _default: &str) -> String {
        match self.next(question) {
            Answer::Text(text) => text.to_string(),
            other => panic!("expected text for '{}', got {:?}", question, other),
        }
    }

    fn select(&self, question: &str, _options: &[String], default: usize) -> usize {
        self.asked.lock().unwrap().push(question.to_string());
        default
    }
}

pub fn installer(url: &str, architecture: Architecture) -> InstallerBuilder {
    InstallerBuilder {
        location: Some(Url::parse(url).unwrap()),
        kind: Some(InstallerKind::Nsis),
        architecture: Some(architecture),
        ..Default::default()
    }
}

/// Inspector with canned results; any URL it doesn't know fails like an unreachable host.
pub struct FakeInspector {
    primary: Option<InspectionBundle>,
    secondaries: HashMap<String, InstallerBuilder>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeInspector {
    pub fn new() -> Self {
        let mut package = ManifestBuilder::new();
        package.name = Some("Example App".to_string());
        package.version = Some("1.0.0".to_string());

        let bundle = InspectionBundle {
            package,
            installers: vec![installer(PRIMARY_URL, Architecture::X64)],
        };

        Self {
            primary: Some(bundle),
            secondaries: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn primary_bundle(&self) -> InspectionBundle {
        self.primary.clone().unwrap_or_default()
    }

    pub fn with_primary(mut self, primary: Option<InspectionBundle>) -> Self {
        self.primary = primary;
        self
    }

    pub fn with_installer(mut self, url: &str, architecture: Architecture) -> Self {
        self.secondaries
            .insert(url.to_string(), installer(url, architecture));
        self
    }

    /// Registers a download that inspects fine but has no detected architecture.
    pub fn with_unknown_architecture(mut self, url: &str) -> Self {
        let mut installer = installer(url, Architecture::X64);
        installer.architecture = None;
        self.secondaries.insert(url.to_string(), installer);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InstallerInspector for FakeInspector {
    async fn inspect(&self, url: &Url) -> Result<InspectionBundle> {
        self.calls.lock().unwrap().push(url.to_string());
        self.primary
            .clone()
            .ok_or_else(|| anyhow!("connection refused: {}", url))
    }

    async fn inspect_installer(&self, url: &Url) -> Result<InstallerBuilder> {
        self.calls.lock().unwrap().push(url.to_string());
        self.secondaries
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| anyhow!("unrecognized installer at {}", url))
    }
}

/// Accepts installers as inspected, rejecting any that lack an architecture.
pub struct StrictInstallerComposer;

impl ComposeInstaller for StrictInstallerComposer {
    fn compose(&self, installer: &mut InstallerBuilder) -> Result<()> {
        installer.build()?;
        Ok(())
    }
}

/// Derives id from name without asking anything; records the `fresh` flag of each call.
#[derive(Default)]
pub struct DerivingManifestComposer {
    pub calls: Mutex<Vec<bool>>,
}

impl ComposeManifest for DerivingManifestComposer {
    fn compose(&self, draft: &mut ManifestBuilder, fresh: bool) -> Result<()> {
        self.calls.lock().unwrap().push(fresh);
        let name = draft.name.clone().ok_or_else(|| anyhow!("no name"))?;
        draft.id = Some(pkgsmith_manifest::package_id_from_name(&name));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingStore {
    pub fail_persist: bool,
    pub previews: Mutex<Vec<PackageManifest>>,
    pub persisted: Mutex<Vec<ManifestBuilder>>,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail_persist: true,
            ..Default::default()
        }
    }

    pub fn preview_count(&self) -> usize {
        self.previews.lock().unwrap().len()
    }

    pub fn persist_count(&self) -> usize {
        self.persisted.lock().unwrap().len()
    }
}

impl ManifestStore for RecordingStore {
    fn preview(&self, manifest: &PackageManifest) {
        self.previews.lock().unwrap().push(manifest.clone());
    }

    fn persist(&self, draft: &ManifestBuilder) -> Result<PathBuf> {
        if self.fail_persist {
            return Err(anyhow!("disk full"));
        }
        self.persisted.lock().unwrap().push(draft.clone());
        Ok(PathBuf::from("/manifests/example-app/example-app.yaml"))
    }
}

pub struct FakeSubmission {
    result: std::result::Result<String, String>,
    pub submitted: Mutex<Vec<ManifestBuilder>>,
}

impl FakeSubmission {
    pub fn accepting(message: &str) -> Self {
        Self {
            result: Ok(message.to_string()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submit_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionClient for FakeSubmission {
    async fn submit(&self, draft: &ManifestBuilder) -> Result<SubmissionResponse> {
        self.submitted.lock().unwrap().push(draft.clone());
        match &self.result {
            Ok(message) => Ok(SubmissionResponse {
                message: message.clone(),
                review_url: None,
            }),
            Err(reason) => Err(anyhow!("{}", reason)),
        }
    }
}

/// All collaborators of one run, kept around so tests can inspect them afterwards.
pub struct Harness {
    pub inspector: Arc<FakeInspector>,
    pub manifest_composer: Arc<DerivingManifestComposer>,
    pub prompt: Arc<ScriptedPrompt>,
    pub store: Arc<RecordingStore>,
    pub submission: Arc<FakeSubmission>,
}

impl Harness {
    pub fn new(
        inspector: FakeInspector,
        answers: Vec<Answer>,
        store: RecordingStore,
        submission: FakeSubmission,
    ) -> Self {
        Self {
            inspector: Arc::new(inspector),
            manifest_composer: Arc::new(DerivingManifestComposer::default()),
            prompt: Arc::new(ScriptedPrompt::new(answers)),
            store: Arc::new(store),
            submission: Arc::new(submission),
        }
    }

    pub fn service(&self) -> CreateManifestService {
        CreateManifestService::new(
            self.inspector.clone(),
            Arc::new(StrictInstallerComposer),
            self.manifest_composer.clone(),
            self.prompt.clone(),
            self.store.clone(),
            self.submission.clone(),
        )
    }
}

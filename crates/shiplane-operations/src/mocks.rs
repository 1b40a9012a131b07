use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use shiplane_config::ShiplaneConfig;
use shiplane_core::BuildConfiguration;
use shiplane_git::{CommitInfo, GitError, PushInfo, TagInfo};
use tracing_subscriber::fmt::MakeWriter;

use crate::operations::{Collaborators, LaneContext};
use crate::traits::{
    AppBuilder, AppStoreSubmission, BuildArtifact, BuildRequest, ChatMessage, ChatNotifier,
    DependencyManager, GitProvider, StoreUploader, SymbolDownload, SymbolService, ToolUpdater,
    VersionControl,
};
use crate::{OperationError, Result};

fn command_failed(command: &str, stderr: &str) -> OperationError {
    OperationError::CommandFailed {
        command: command.to_string(),
        stderr: stderr.to_string(),
    }
}

/// Configuration shared by the operation tests.
#[must_use]
pub fn test_config() -> ShiplaneConfig {
    ShiplaneConfig::new("/mock/app")
        .with_scheme("App")
        .with_slack_url("https://hooks.example/x")
        .with_apple_account("dev@example.com", "com.example.app")
        .with_google_service_info_path("GoogleService-Info.plist")
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("lock poisoned")).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with info-level events captured, returning its result and the log.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

pub struct MockDependencyManager {
    installs: Mutex<Vec<bool>>,
    failure: Option<String>,
}

impl MockDependencyManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            installs: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    #[must_use]
    pub fn failing(mut self, stderr: &str) -> Self {
        self.failure = Some(stderr.to_string());
        self
    }

    /// The `repo_update` flag of every install.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn installs(&self) -> Vec<bool> {
        self.installs.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockDependencyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyManager for MockDependencyManager {
    fn install(&self, _project_root: &Path, repo_update: bool) -> Result<()> {
        if let Some(stderr) = &self.failure {
            return Err(command_failed("pod install", stderr));
        }
        self.installs
            .lock()
            .expect("lock poisoned")
            .push(repo_update);
        Ok(())
    }
}

pub struct MockToolUpdater {
    updates: Mutex<usize>,
    failure: Option<String>,
}

impl MockToolUpdater {
    #[must_use]
    pub fn new() -> Self {
        Self {
            updates: Mutex::new(0),
            failure: None,
        }
    }

    #[must_use]
    pub fn failing(mut self, stderr: &str) -> Self {
        self.failure = Some(stderr.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn updates(&self) -> usize {
        *self.updates.lock().expect("lock poisoned")
    }
}

impl Default for MockToolUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolUpdater for MockToolUpdater {
    fn update_tools(&self, _project_root: &Path) -> Result<()> {
        *self.updates.lock().expect("lock poisoned") += 1;
        match &self.failure {
            Some(stderr) => Err(command_failed("fastlane update_fastlane", stderr)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionWrite {
    Version(String),
    Build(String),
}

struct ProjectVersion {
    version: String,
    build_number: String,
}

/// In-memory project whose reads always return the latest write.
pub struct MockVersionControl {
    state: Mutex<ProjectVersion>,
    writes: Mutex<Vec<VersionWrite>>,
    version_reads: Mutex<usize>,
    last_target: Mutex<Option<String>>,
    fail_reads: bool,
    write_failure: Option<String>,
}

impl MockVersionControl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ProjectVersion {
                version: "1.0.0".to_string(),
                build_number: "5".to_string(),
            }),
            writes: Mutex::new(Vec::new()),
            version_reads: Mutex::new(0),
            last_target: Mutex::new(None),
            fail_reads: false,
            write_failure: None,
        }
    }

    #[must_use]
    pub fn with_version(self, version: &str, build_number: &str) -> Self {
        self.set(version, build_number);
        self
    }

    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    #[must_use]
    pub fn failing_writes(mut self, stderr: &str) -> Self {
        self.write_failure = Some(stderr.to_string());
        self
    }

    /// Change the project behind the lane's back, without recording a write.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set(&self, version: &str, build_number: &str) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.version = version.to_string();
        state.build_number = build_number.to_string();
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn version(&self) -> String {
        self.state.lock().expect("lock poisoned").version.clone()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn writes(&self) -> Vec<VersionWrite> {
        self.writes.lock().expect("lock poisoned").clone()
    }

    /// Number of marketing version reads.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn version_reads(&self) -> usize {
        *self.version_reads.lock().expect("lock poisoned")
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn last_target(&self) -> Option<String> {
        self.last_target.lock().expect("lock poisoned").clone()
    }

    fn write(&self, write: VersionWrite) -> Result<()> {
        if let Some(stderr) = &self.write_failure {
            return Err(command_failed("agvtool", stderr));
        }
        {
            let mut state = self.state.lock().expect("lock poisoned");
            match &write {
                VersionWrite::Version(version) => state.version.clone_from(version),
                VersionWrite::Build(build) => state.build_number.clone_from(build),
            }
        }
        self.writes.lock().expect("lock poisoned").push(write);
        Ok(())
    }
}

impl Default for MockVersionControl {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for MockVersionControl {
    fn version_number(
        &self,
        _project_root: &Path,
        _project: &str,
        target: &str,
    ) -> Result<String> {
        *self.version_reads.lock().expect("lock poisoned") += 1;
        *self.last_target.lock().expect("lock poisoned") = Some(target.to_string());
        if self.fail_reads {
            return Err(command_failed("agvtool", "no project found"));
        }
        Ok(self.version())
    }

    fn build_number(&self, _project_root: &Path, _project: &str) -> Result<String> {
        if self.fail_reads {
            return Err(command_failed("agvtool", "no project found"));
        }
        Ok(self
            .state
            .lock()
            .expect("lock poisoned")
            .build_number
            .clone())
    }

    fn set_version_number(
        &self,
        _project_root: &Path,
        _project: &str,
        version: &str,
    ) -> Result<()> {
        self.write(VersionWrite::Version(version.to_string()))
    }

    fn set_build_number(
        &self,
        _project_root: &Path,
        _project: &str,
        build_number: &str,
    ) -> Result<()> {
        self.write(VersionWrite::Build(build_number.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBuild {
    pub scheme: String,
    pub output_directory: PathBuf,
    pub configuration: BuildConfiguration,
    pub extra_flags: Vec<String>,
}

pub struct MockAppBuilder {
    builds: Mutex<Vec<RecordedBuild>>,
    failure: Option<String>,
}

impl MockAppBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builds: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    #[must_use]
    pub fn failing(mut self, stderr: &str) -> Self {
        self.failure = Some(stderr.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn builds(&self) -> Vec<RecordedBuild> {
        self.builds.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder for MockAppBuilder {
    fn build(&self, _project_root: &Path, request: &BuildRequest<'_>) -> Result<BuildArtifact> {
        if let Some(stderr) = &self.failure {
            return Err(command_failed("fastlane run build_ios_app", stderr));
        }
        self.builds
            .lock()
            .expect("lock poisoned")
            .push(RecordedBuild {
                scheme: request.scheme.to_string(),
                output_directory: request.output_directory.to_path_buf(),
                configuration: request.configuration,
                extra_flags: request.extra_flags.iter().map(ToString::to_string).collect(),
            });
        Ok(BuildArtifact {
            path: request
                .output_directory
                .join(format!("{}.ipa", request.scheme)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadCall {
    AppStore {
        apple_id: String,
        app_identifier: String,
        submit_for_review: bool,
    },
    Testflight {
        apple_id: String,
        skip_submission: bool,
    },
}

pub struct MockStoreUploader {
    calls: Mutex<Vec<UploadCall>>,
    failure: Option<String>,
}

impl MockStoreUploader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    #[must_use]
    pub fn failing(mut self, stderr: &str) -> Self {
        self.failure = Some(stderr.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<UploadCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: UploadCall) -> Result<()> {
        if let Some(stderr) = &self.failure {
            return Err(command_failed("fastlane run upload", stderr));
        }
        self.calls.lock().expect("lock poisoned").push(call);
        Ok(())
    }
}

impl Default for MockStoreUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreUploader for MockStoreUploader {
    fn upload_to_app_store(
        &self,
        _project_root: &Path,
        submission: &AppStoreSubmission<'_>,
    ) -> Result<()> {
        self.record(UploadCall::AppStore {
            apple_id: submission.apple_id.to_string(),
            app_identifier: submission.app_identifier.to_string(),
            submit_for_review: submission.deliver.submit_for_review(),
        })
    }

    fn upload_to_testflight(
        &self,
        _project_root: &Path,
        apple_id: &str,
        skip_submission: bool,
    ) -> Result<()> {
        self.record(UploadCall::Testflight {
            apple_id: apple_id.to_string(),
            skip_submission,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    StageAll,
    Commit(String),
    Tag(String),
    Push(Vec<String>),
}

pub struct MockGitProvider {
    branch: String,
    branch_reads: Mutex<usize>,
    calls: Mutex<Vec<GitCall>>,
    fail_push: bool,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            branch: "master".to_string(),
            branch_reads: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
            fail_push: false,
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    #[must_use]
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn branch_reads(&self) -> usize {
        *self.branch_reads.lock().expect("lock poisoned")
    }

    /// Every mutating call, in order.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self, _project_root: &Path) -> Result<String> {
        *self.branch_reads.lock().expect("lock poisoned") += 1;
        Ok(self.branch.clone())
    }

    fn stage_all(&self, _project_root: &Path) -> Result<()> {
        self.record(GitCall::StageAll);
        Ok(())
    }

    fn commit(&self, _project_root: &Path, message: &str) -> Result<CommitInfo> {
        self.record(GitCall::Commit(message.to_string()));
        Ok(CommitInfo {
            sha: "abc1234".to_string(),
            message: message.to_string(),
        })
    }

    fn create_tag(&self, _project_root: &Path, tag_name: &str, _message: &str) -> Result<TagInfo> {
        self.record(GitCall::Tag(tag_name.to_string()));
        Ok(TagInfo {
            name: tag_name.to_string(),
            target_sha: "abc1234".to_string(),
        })
    }

    fn push(&self, _project_root: &Path, tags: &[&str]) -> Result<PushInfo> {
        if self.fail_push {
            return Err(GitError::PushRejected {
                refname: "refs/heads/master".to_string(),
                message: "non-fast-forward".to_string(),
            }
            .into());
        }
        let tags: Vec<String> = tags.iter().map(ToString::to_string).collect();
        self.record(GitCall::Push(tags.clone()));
        let mut refspecs = vec!["refs/heads/master:refs/heads/master".to_string()];
        refspecs.extend(tags.iter().map(|tag| format!("refs/tags/{tag}:refs/tags/{tag}")));
        Ok(PushInfo {
            remote: "origin".to_string(),
            refspecs,
        })
    }
}

pub struct MockSymbolService {
    paths: Vec<PathBuf>,
    downloads: Mutex<Vec<(Option<String>, Option<String>)>>,
    uploads: Mutex<Vec<(PathBuf, String)>>,
    cleans: Mutex<usize>,
}

impl MockSymbolService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            downloads: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            cleans: Mutex::new(0),
        }
    }

    /// Paths returned by every download.
    #[must_use]
    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// `(version, min_version)` of every download.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn downloads(&self) -> Vec<(Option<String>, Option<String>)> {
        self.downloads.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn uploads(&self) -> Vec<(PathBuf, String)> {
        self.uploads.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn cleans(&self) -> usize {
        *self.cleans.lock().expect("lock poisoned")
    }
}

impl Default for MockSymbolService {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolService for MockSymbolService {
    fn download(&self, _project_root: &Path, request: &SymbolDownload<'_>) -> Result<Vec<PathBuf>> {
        self.downloads.lock().expect("lock poisoned").push((
            request.version.map(ToString::to_string),
            request.min_version.map(ToString::to_string),
        ));
        Ok(self.paths.clone())
    }

    fn upload(
        &self,
        _project_root: &Path,
        dsym_path: &Path,
        service_info_path: &str,
    ) -> Result<()> {
        self.uploads
            .lock()
            .expect("lock poisoned")
            .push((dsym_path.to_path_buf(), service_info_path.to_string()));
        Ok(())
    }

    fn clean_build_artifacts(&self, _project_root: &Path) -> Result<()> {
        *self.cleans.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}

pub struct MockChatNotifier {
    posted: Mutex<Vec<(String, ChatMessage)>>,
    attempts: Mutex<usize>,
    failure: Option<fn() -> OperationError>,
}

impl MockChatNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            posted: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
            failure: None,
        }
    }

    #[must_use]
    pub fn failing_with(mut self, failure: fn() -> OperationError) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Delivered `(url, message)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn posted(&self) -> Vec<(String, ChatMessage)> {
        self.posted.lock().expect("lock poisoned").clone()
    }

    /// Deliveries attempted, failed ones included.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().expect("lock poisoned")
    }
}

impl Default for MockChatNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatNotifier for MockChatNotifier {
    fn post(&self, url: &str, message: &ChatMessage) -> Result<()> {
        *self.attempts.lock().expect("lock poisoned") += 1;
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        self.posted
            .lock()
            .expect("lock poisoned")
            .push((url.to_string(), message.clone()));
        Ok(())
    }
}

/// One mock per collaborator, kept reachable for assertions after the
/// context has taken its own handles.
pub struct MockCollaborators {
    pub dependency_manager: Arc<MockDependencyManager>,
    pub version_control: Arc<MockVersionControl>,
    pub app_builder: Arc<MockAppBuilder>,
    pub store_uploader: Arc<MockStoreUploader>,
    pub git_provider: Arc<MockGitProvider>,
    pub symbol_service: Arc<MockSymbolService>,
    pub chat_notifier: Arc<MockChatNotifier>,
    pub tool_updater: Arc<MockToolUpdater>,
}

impl MockCollaborators {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dependency_manager: Arc::new(MockDependencyManager::new()),
            version_control: Arc::new(MockVersionControl::new()),
            app_builder: Arc::new(MockAppBuilder::new()),
            store_uploader: Arc::new(MockStoreUploader::new()),
            git_provider: Arc::new(MockGitProvider::new()),
            symbol_service: Arc::new(MockSymbolService::new()),
            chat_notifier: Arc::new(MockChatNotifier::new()),
            tool_updater: Arc::new(MockToolUpdater::new()),
        }
    }

    #[must_use]
    pub fn with_dependency_manager(mut self, mock: MockDependencyManager) -> Self {
        self.dependency_manager = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_version_control(mut self, mock: MockVersionControl) -> Self {
        self.version_control = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_app_builder(mut self, mock: MockAppBuilder) -> Self {
        self.app_builder = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_store_uploader(mut self, mock: MockStoreUploader) -> Self {
        self.store_uploader = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_git_provider(mut self, mock: MockGitProvider) -> Self {
        self.git_provider = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_symbol_service(mut self, mock: MockSymbolService) -> Self {
        self.symbol_service = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_chat_notifier(mut self, mock: MockChatNotifier) -> Self {
        self.chat_notifier = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn with_tool_updater(mut self, mock: MockToolUpdater) -> Self {
        self.tool_updater = Arc::new(mock);
        self
    }

    #[must_use]
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            dependency_manager: self.dependency_manager.clone(),
            version_control: self.version_control.clone(),
            app_builder: self.app_builder.clone(),
            store_uploader: self.store_uploader.clone(),
            git_provider: self.git_provider.clone(),
            symbol_service: self.symbol_service.clone(),
            chat_notifier: self.chat_notifier.clone(),
            tool_updater: self.tool_updater.clone(),
        }
    }

    #[must_use]
    pub fn context(&self, config: ShiplaneConfig) -> LaneContext {
        LaneContext::new(config, self.collaborators())
    }
}

impl Default for MockCollaborators {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::Path;

use shiplane_config::DeliverSettings;

use crate::Result;

#[derive(Debug, Clone, Copy)]
pub struct AppStoreSubmission<'a> {
    pub apple_id: &'a str,
    pub app_identifier: &'a str,
    pub deliver: &'a DeliverSettings,
}

pub trait StoreUploader: Send + Sync {
    /// Upload the build and its metadata to the App Store.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload or the review submission fails.
    fn upload_to_app_store(
        &self,
        project_root: &Path,
        submission: &AppStoreSubmission<'_>,
    ) -> Result<()>;

    /// Upload the build to TestFlight. With `skip_submission` the build is
    /// only processed, not distributed to testers.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails.
    fn upload_to_testflight(
        &self,
        project_root: &Path,
        apple_id: &str,
        skip_submission: bool,
    ) -> Result<()>;
}

use shiplane_config::render_template;
use shiplane_core::UploadType;
use shiplane_lane::LaneStep;
use shiplane_version::VersionSlot;
use tracing::info;

use crate::OperationError;
use crate::operations::{DistributionData, GitPublishResult, LaneContext};

/// Commits, tags and pushes the version change.
///
/// Nothing happens unless the version or build number changed during the
/// run. The tag is only created for App Store releases.
pub struct GitPublishStep;

impl LaneStep for GitPublishStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "git"
    }

    fn description(&self) -> &'static str {
        "Git add, commit, tag, push"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let next = ctx.fetch_version(VersionSlot::Next)?;
        let current = ctx.version(VersionSlot::Current);
        let changed = ctx.is_version_changed();

        info!(
            "current version<build>: {}<{}>",
            current.version, current.build_number
        );
        info!("next version<build>: {}<{}>", next.version, next.build_number);
        info!("is version changed: {changed}");

        if !changed {
            return Ok(input);
        }

        let config = ctx.config();
        let commit_message =
            render_template(config.git_message_commit(), &next.include_build_number_text());
        let tag_message = render_template(config.git_message_tag(), &next.text());
        info!("commit message: {commit_message}");
        info!("tag message: {tag_message}");

        let git = ctx.git_provider();
        let root = ctx.project_root();
        git.stage_all(root)?;
        let commit = git.commit(root, &commit_message)?;

        let tag = if input.parameters.upload_type == Some(UploadType::Appstore) {
            Some(git.create_tag(root, &tag_message, &tag_message)?)
        } else {
            None
        };

        let tags: Vec<&str> = tag.iter().map(|tag| tag.name.as_str()).collect();
        let push = git.push(root, &tags)?;

        input.git = Some(GitPublishResult { commit, tag, push });
        Ok(input)
    }
}

mod agvtool;
mod cocoapods;
mod command;
mod fastlane;
mod git;
mod slack;

pub use agvtool::AgvtoolProvider;
pub use cocoapods::CocoaPodsProvider;
pub use fastlane::FastlaneActionRunner;
pub use git::{CI_BRANCH_VARIABLES, Git2Provider};
pub use slack::SlackWebhook;

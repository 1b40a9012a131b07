//! Integration tests for data flowing between lane steps.

use std::cell::RefCell;

use shiplane_lane::{LaneBuilder, LaneStep, StepStatus};

struct RunContext {
    branch: &'static str,
    events: RefCell<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct RunError(String);

#[derive(Debug, Clone, PartialEq)]
struct Release {
    version: String,
    build: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Artifact {
    release: Release,
    path: String,
}

struct CheckBranch;

impl LaneStep for CheckBranch {
    type Input = Release;
    type Output = Release;
    type Context = RunContext;
    type Error = RunError;

    fn name(&self) -> &'static str {
        "ready"
    }

    fn execute(&self, ctx: &RunContext, input: Release) -> Result<Release, RunError> {
        if ctx.branch != "master" {
            return Err(RunError(format!("not on master: {}", ctx.branch)));
        }
        ctx.events.borrow_mut().push("branch ok".to_string());
        Ok(input)
    }
}

struct BumpBuild;

impl LaneStep for BumpBuild {
    type Input = Release;
    type Output = Release;
    type Context = RunContext;
    type Error = RunError;

    fn name(&self) -> &'static str {
        "version"
    }

    fn execute(&self, ctx: &RunContext, input: Release) -> Result<Release, RunError> {
        ctx.events
            .borrow_mut()
            .push(format!("bump {}", input.build));
        Ok(Release {
            build: input.build + 1,
            ..input
        })
    }
}

struct Package;

impl LaneStep for Package {
    type Input = Release;
    type Output = Artifact;
    type Context = RunContext;
    type Error = RunError;

    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "package the app"
    }

    fn execute(&self, ctx: &RunContext, input: Release) -> Result<Artifact, RunError> {
        ctx.events.borrow_mut().push("package".to_string());
        let path = format!("build/App-{}-{}.ipa", input.version, input.build);
        Ok(Artifact {
            release: input,
            path,
        })
    }
}

fn release() -> Release {
    Release {
        version: "1.0.0".to_string(),
        build: 5,
    }
}

#[test]
fn output_of_each_step_feeds_the_next() -> anyhow::Result<()> {
    let ctx = RunContext {
        branch: "master",
        events: RefCell::new(Vec::new()),
    };
    let lane = LaneBuilder::new()
        .first_step(CheckBranch)
        .then(BumpBuild)
        .then(Package)
        .build();

    let artifact = lane.execute(&ctx, release())?;

    assert_eq!(artifact.release.build, 6);
    assert_eq!(artifact.path, "build/App-1.0.0-6.ipa");
    assert_eq!(
        *ctx.events.borrow(),
        vec!["branch ok", "bump 5", "package"]
    );
    Ok(())
}

#[test]
fn first_step_failure_runs_nothing_else() {
    let ctx = RunContext {
        branch: "feature/login",
        events: RefCell::new(Vec::new()),
    };
    let lane = LaneBuilder::new()
        .first_step(CheckBranch)
        .then(BumpBuild)
        .then(Package)
        .build();

    let (result, audit) = lane.execute_with_audit(&ctx, release());

    let err = result.expect_err("wrong branch must abort");
    assert_eq!(err.step(), "ready");
    assert!(ctx.events.borrow().is_empty());
    assert_eq!(audit.failed_step(), Some("ready"));
    assert_eq!(audit.records()[2].status, StepStatus::NotRun);
    assert_eq!(audit.summary(), "✗ ready\n- version\n- build");
}

#[test]
fn error_display_names_the_failed_lane() {
    let ctx = RunContext {
        branch: "develop",
        events: RefCell::new(Vec::new()),
    };
    let lane = LaneBuilder::new().first_step(CheckBranch).build();

    let err = lane.execute(&ctx, release()).expect_err("should fail");

    assert_eq!(err.to_string(), "lane 'ready' failed");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("not on master: develop"));
}

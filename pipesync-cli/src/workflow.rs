//! Sync workflow
//!
//! Runs the stages of a publish strictly in order: resolve the pipeline,
//! build the steps, publish the revision, trigger the run. Each stage is
//! awaited before the next one starts and the first failure ends the run.

use pipesync_client::FactoryApi;
use pipesync_core::domain::{PipelineDescription, RevisionId};
use pipesync_core::dto::run::RunReceipt;
use pipesync_core::{ScriptLoader, build_steps};
use tracing::info;

use crate::service::{self, Resolution, SyncError};

/// Result of a successful sync
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub pipeline: Resolution,
    pub revision_id: RevisionId,
    pub run: RunReceipt,
    pub step_count: usize,
}

/// Publishes descriptions through a remote API, loading scripts with a loader
pub struct SyncWorkflow<'a, A: ?Sized, L: ?Sized> {
    api: &'a A,
    loader: &'a L,
}

impl<'a, A, L> SyncWorkflow<'a, A, L>
where
    A: FactoryApi + ?Sized,
    L: ScriptLoader + ?Sized,
{
    pub fn new(api: &'a A, loader: &'a L) -> Self {
        Self { api, loader }
    }

    /// Publish `description` as a new revision of `pipeline_name` and run it
    ///
    /// A pipeline created during this call is not removed if a later stage
    /// fails.
    pub async fn run(
        &self,
        pipeline_name: &str,
        comment: &str,
        description: &PipelineDescription,
    ) -> Result<SyncOutcome, SyncError> {
        let pipeline = service::resolve_or_create(self.api, pipeline_name).await?;
        info!("Pipeline id = {}", pipeline.id());

        let steps = build_steps(description, self.loader)?;
        let step_count = steps.len();

        let revision_id = service::publish(self.api, pipeline.id(), steps, comment).await?;
        info!("Revision id = {}", revision_id);

        let run = service::run(self.api, pipeline.id(), &revision_id).await?;

        Ok(SyncOutcome {
            pipeline,
            revision_id,
            run,
            step_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Stage;
    use crate::service::fake::{Call, FakeApi};
    use pipesync_client::FactoryClient;
    use pipesync_core::FsScriptLoader;
    use std::path::Path;

    const TWO_TASKS: &str = r#"{"tasks": [
        {"id": "A", "type": "produce", "needs": [], "props": {"x": 5}},
        {"id": "B", "type": "consume", "needs": ["A"], "props": {"y": "{{ tasks.A.result }}"}}
    ]}"#;

    fn scripts_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_script(dir.path(), "produce", "print(5)");
        write_script(dir.path(), "consume", "print(y)");
        dir
    }

    fn write_script(dir: &Path, task_type: &str, body: &str) {
        std::fs::write(dir.join(format!("{}.py", task_type)), body).unwrap();
    }

    fn two_tasks() -> PipelineDescription {
        PipelineDescription::from_json(TWO_TASKS).unwrap()
    }

    #[tokio::test]
    async fn test_two_task_sync() {
        let dir = scripts_dir();
        let loader = FsScriptLoader::new(dir.path());
        let api = FakeApi::new();

        let outcome = SyncWorkflow::new(&api, &loader)
            .run("demo", "New Commit", &two_tasks())
            .await
            .unwrap();

        assert!(outcome.pipeline.was_created());
        assert_eq!(outcome.revision_id.as_str(), "rev-1");
        assert_eq!(outcome.step_count, 2);
        assert_eq!(
            api.stages(),
            vec![
                Stage::Search,
                Stage::CreatePipeline,
                Stage::CreateRevision,
                Stage::Run
            ]
        );

        let calls = api.calls();
        let Call::CreateRevision(pipeline_id, req) = &calls[2] else {
            panic!("expected a revision call, got {:?}", calls[2]);
        };
        assert_eq!(pipeline_id.as_str(), "created-1");
        assert_eq!(req.steps.len(), 2);
        assert!(req.steps[0].properties.env.contains("'5'"));
        assert!(req.steps[1].properties.env.contains("steps.A.result.stdout"));
        assert!(!req.steps[1].properties.env.contains("'steps.A.result.stdout'"));
        assert_eq!(req.steps[1].depends, vec!["A"]);

        let Call::Run(run_pipeline, run_revision, _) = &calls[3] else {
            panic!("expected a run call, got {:?}", calls[3]);
        };
        assert_eq!(run_pipeline.as_str(), "created-1");
        assert_eq!(run_revision.as_str(), "rev-1");
    }

    #[tokio::test]
    async fn test_empty_description_still_publishes() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FsScriptLoader::new(dir.path());
        let api = FakeApi::new().with_existing(&["p-1"]);

        let outcome = SyncWorkflow::new(&api, &loader)
            .run("demo", "c", &PipelineDescription::default())
            .await
            .unwrap();

        assert_eq!(outcome.step_count, 0);
        assert!(!outcome.pipeline.was_created());
        assert_eq!(
            api.stages(),
            vec![Stage::Search, Stage::CreateRevision, Stage::Run]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_all_later_calls() {
        let cases = [
            (Stage::Search, vec![Stage::Search]),
            (Stage::CreatePipeline, vec![Stage::Search, Stage::CreatePipeline]),
            (
                Stage::CreateRevision,
                vec![Stage::Search, Stage::CreatePipeline, Stage::CreateRevision],
            ),
            (
                Stage::Run,
                vec![
                    Stage::Search,
                    Stage::CreatePipeline,
                    Stage::CreateRevision,
                    Stage::Run,
                ],
            ),
        ];

        let dir = scripts_dir();
        let loader = FsScriptLoader::new(dir.path());

        for (failing, expected_calls) in cases {
            let api = FakeApi::new().failing_at(failing);

            let err = SyncWorkflow::new(&api, &loader)
                .run("demo", "c", &two_tasks())
                .await
                .unwrap_err();

            assert_eq!(err.stage(), failing);
            assert_eq!(api.stages(), expected_calls, "failing at {}", failing);
        }
    }

    #[tokio::test]
    async fn test_missing_script_stops_before_publish() {
        let dir = tempfile::tempdir().unwrap();
        write_script(dir.path(), "produce", "print(5)");
        let loader = FsScriptLoader::new(dir.path());
        let api = FakeApi::new();

        let err = SyncWorkflow::new(&api, &loader)
            .run("demo", "c", &two_tasks())
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Build);
        // The pipeline was already created and stays that way
        assert_eq!(api.stages(), vec![Stage::Search, Stage::CreatePipeline]);
    }

    #[tokio::test]
    async fn test_sync_over_http() {
        use mockito::{Matcher, Server};
        use serde_json::json;

        let mut server = Server::new_async().await;
        let base = "/projects/proj/pipelines";

        let search = server
            .mock("GET", base)
            .match_query(Matcher::UrlEncoded("search".into(), "demo".into()))
            .match_header("authorization", "Bearer t0k3n")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"pipelines": []}"#)
            .create_async()
            .await;
        let create = server
            .mock("POST", base)
            .match_body(Matcher::Json(json!({"name": "demo"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"_id": "p-42"}"#)
            .create_async()
            .await;
        let revision = server
            .mock("POST", "/projects/proj/pipelines/p-42/revisions")
            .match_body(Matcher::PartialJson(json!({
                "comment": "New Commit",
                "variables": [{}],
                "outputs": [],
                "layout": {"elements": []}
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"_id": "rev-7"}"#)
            .create_async()
            .await;
        let run = server
            .mock("POST", "/projects/proj/pipelines/p-42/revisions/rev-7/run")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"_id": "run-1"}"#)
            .create_async()
            .await;

        let dir = scripts_dir();
        let loader = FsScriptLoader::new(dir.path());
        let client = FactoryClient::new(server.url(), "proj", "t0k3n");

        let outcome = SyncWorkflow::new(&client, &loader)
            .run("demo", "New Commit", &two_tasks())
            .await
            .unwrap();

        assert_eq!(outcome.pipeline.id().as_str(), "p-42");
        assert_eq!(outcome.revision_id.as_str(), "rev-7");

        search.assert_async().await;
        create.assert_async().await;
        revision.assert_async().await;
        run.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_error_issues_no_further_requests() {
        use mockito::{Matcher, Server};

        let mut server = Server::new_async().await;

        let search = server
            .mock("GET", "/projects/proj/pipelines")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"pipelines": [{"_id": "p-1"}]}"#)
            .create_async()
            .await;
        let revision = server
            .mock("POST", "/projects/proj/pipelines/p-1/revisions")
            .with_status(422)
            .with_body("steps are invalid")
            .create_async()
            .await;
        let run = server
            .mock("POST", Matcher::Regex(r"/run$".to_string()))
            .expect(0)
            .create_async()
            .await;

        let dir = scripts_dir();
        let loader = FsScriptLoader::new(dir.path());
        let client = FactoryClient::new(server.url(), "proj", "t");

        let err = SyncWorkflow::new(&client, &loader)
            .run("demo", "c", &two_tasks())
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Stage::CreateRevision);
        assert_eq!(err.client_error().and_then(|e| e.status()), Some(422));

        search.assert_async().await;
        revision.assert_async().await;
        run.assert_async().await;
    }
}

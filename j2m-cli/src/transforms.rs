//! CLI-specific transforms
//!
//! The `inspect` command shows how a document moves through a rewrite pipeline, one rule at a
//! time. The pipeline is chosen by the source format: wiki input runs the wiki → Markdown rules,
//! Markdown input runs the Markdown → wiki rules.
//!
//! - `pipeline-text`: one header line per rule, followed by the text after every rule that
//!   changed it
//! - `pipeline-json`: the same steps as JSON
//!
//! Example: `j2m inspect ticket.jira pipeline-json`

use j2m_babel::{Pipeline, RuleStep, MARKDOWN_TO_WIKI, WIKI_TO_MARKDOWN};
use serde::Serialize;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["pipeline-text", "pipeline-json"];

/// Transform used when `inspect` is given none
pub const DEFAULT_TRANSFORM: &str = "pipeline-text";

#[derive(Serialize)]
struct PipelineReport<'a> {
    pipeline: &'static str,
    steps: &'a [RuleStep],
}

/// Pick the pipeline that reads `from`
pub fn pipeline_for(from: &str) -> Result<&'static Pipeline, String> {
    match from {
        "wiki" => Ok(&*WIKI_TO_MARKDOWN),
        "markdown" => Ok(&*MARKDOWN_TO_WIKI),
        other => Err(format!("No rewrite pipeline reads '{other}'")),
    }
}

/// Execute a named transform on source text in the given format
pub fn execute_transform(source: &str, from: &str, transform_name: &str) -> Result<String, String> {
    let pipeline = pipeline_for(from)?;
    let steps = pipeline.trace(source);

    match transform_name {
        "pipeline-text" => Ok(steps_to_text(&steps)),
        "pipeline-json" => {
            let report = PipelineReport {
                pipeline: pipeline.name(),
                steps: &steps,
            };
            serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn steps_to_text(steps: &[RuleStep]) -> String {
    let mut output = String::new();
    for (index, step) in steps.iter().enumerate() {
        if step.changed {
            output.push_str(&format!("== {:02} {}\n", index + 1, step.rule));
            output.push_str(&step.output);
            if !step.output.ends_with('\n') {
                output.push('\n');
            }
        } else {
            output.push_str(&format!("-- {:02} {} (no change)\n", index + 1, step.rule));
        }
    }
    output
}

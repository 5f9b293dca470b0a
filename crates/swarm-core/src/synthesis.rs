//! Combining worker results into the single text returned by a run

use crate::types::WorkerResult;

/// Turns the ordered worker results of one task into the final answer
pub trait Synthesizer: Send + Sync {
    fn synthesize(&self, task: &str, results: &[WorkerResult]) -> String;
}

/// Default synthesis: one markdown section per result, in delegation order
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatSynthesizer;

impl Synthesizer for ConcatSynthesizer {
    fn synthesize(&self, _task: &str, results: &[WorkerResult]) -> String {
        let mut output = String::from("## Results\n\n");
        for result in results {
            output.push_str(&format!("### {}\n", result.agent));
            output.push_str(result.output.trim_end());
            output.push_str("\n\n");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(agent: &str, output: &str) -> WorkerResult {
        WorkerResult {
            agent: agent.to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_single_result_layout() {
        let text = ConcatSynthesizer.synthesize("Build it", &[result("coder", "fn main() {}\n")]);
        assert_eq!(text, "## Results\n\n### coder\nfn main() {}\n\n");
    }

    #[test]
    fn test_sections_keep_delegation_order() {
        let text = ConcatSynthesizer.synthesize(
            "task",
            &[
                result("researcher", "found"),
                result("coder", "built"),
                result("reviewer", "looks fine"),
            ],
        );
        let researcher = text.find("### researcher").unwrap();
        let coder = text.find("### coder").unwrap();
        let reviewer = text.find("### reviewer").unwrap();
        assert!(researcher < coder && coder < reviewer);
    }

    #[test]
    fn test_no_results_still_has_header() {
        assert_eq!(ConcatSynthesizer.synthesize("task", &[]), "## Results\n\n");
    }
}

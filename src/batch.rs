//! Batch generation over many independent documents.

use crate::executor::{Executor, ExecutorImpl};
use safedoc_core::{EngineConfig, PipelineError, ReportGenerator};
use safedoc_idf::Document;
use safedoc_layout::LayoutOutcome;
use safedoc_traits::TextMeasurer;

/// Plans every document with the default executor.
///
/// Results come back in input order; one failing document does not affect
/// the others. A config error fails every entry.
pub fn generate_batch<M>(
    documents: &[Document],
    config: &EngineConfig,
    measurer: &M,
) -> Vec<Result<LayoutOutcome, PipelineError>>
where
    M: TextMeasurer + Sync,
{
    generate_batch_with(&ExecutorImpl::default(), documents, config, measurer)
}

pub fn generate_batch_with<E, M>(
    executor: &E,
    documents: &[Document],
    config: &EngineConfig,
    measurer: &M,
) -> Vec<Result<LayoutOutcome, PipelineError>>
where
    E: Executor,
    M: TextMeasurer + Sync,
{
    let generator = match ReportGenerator::new(config.clone()) {
        Ok(generator) => generator,
        Err(e) => {
            let message = e.to_string();
            return documents
                .iter()
                .map(|_| Err(PipelineError::Config(message.clone())))
                .collect();
        }
    };

    log::info!(
        "Planning {} documents on the {} executor ({} workers)",
        documents.len(),
        executor.name(),
        executor.parallelism()
    );
    executor.map_ordered(documents, |document| generator.plan(document, measurer))
}

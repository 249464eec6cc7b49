use anyhow::Context;
use makemodule_core::generate::{FileWriter, GenerationReporter, GenerationResult};

use super::RunOptions;

pub struct Check;

impl Check {
    /// Returns `true` when every output matches a fresh regeneration
    pub fn execute(options: &RunOptions<'_>) -> anyhow::Result<bool> {
        let generator = options.open_generator()?;
        let plan = generator
            .plan()
            .context("Failed to render makemodule fragments")?;

        let writer = FileWriter::new(true);
        let mut result = GenerationResult::default();
        for file in &plan {
            writer.check(generator.workdir(), file, &mut result)?;
        }

        let summary = GenerationReporter::check_summary(&result);
        println!("{summary}");

        Ok(result.is_up_to_date())
    }
}

use anyhow::Context;
use makemodule_core::generate::{FileWriter, GenerationReporter, GenerationResult};

use super::RunOptions;

pub struct Generate;

impl Generate {
    pub fn execute(options: &RunOptions<'_>) -> anyhow::Result<()> {
        let generator = options.open_generator()?;

        // Render everything before touching the tree
        let plan = generator
            .plan()
            .context("Failed to render makemodule fragments")?;

        let writer = FileWriter::new(options.dry_run);
        let mut result = GenerationResult::default();
        for file in &plan {
            writer.write(generator.workdir(), file, &mut result)?;
        }

        let summary = GenerationReporter::generate_summary(&result);
        println!("{summary}");

        Ok(())
    }
}

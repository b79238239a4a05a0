use std::io::Write;

use log::LevelFilter;
use wordbatcher::{
    TokenGranularity,
    TokenVocab,
    VocabBuilder,
    VocabBuilderOptions,
    vocab::io::write_rank_vocab,
};

use crate::{input_output::OutputArgs, logging::LogArgs, vocab_source::parse_granularity};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Training files; counts are pooled across all of them.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Token granularity: "word" or "char".
    #[arg(long, default_value = "word", value_parser = parse_granularity)]
    level: TokenGranularity,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Info)?;
        self.execute()
    }

    fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut builder: VocabBuilder = VocabBuilderOptions::new(self.level).init();

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            builder.update_from_path(path)?;
        }

        let vocab: TokenVocab<u32> = builder.build()?;
        log::info!("Vocabulary Size: {}", vocab.len());

        let mut writer = self.output.open_writer()?;
        write_rank_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

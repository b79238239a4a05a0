use std::io::Write;

use log::LevelFilter;
use wordbatcher::{
    BatchProducerOptions,
    CorpusOptions,
    RawCorpus,
    Split,
    TokenGranularity,
    batching::BatchWindow,
};

use super::encode::write_ids;
use crate::{
    input_output::OutputArgs,
    logging::LogArgs,
    vocab_source::{parse_granularity, parse_split},
};

/// Args for the batches command.
#[derive(clap::Args, Debug)]
pub struct BatchesArgs {
    /// Corpus directory holding the train/valid/test files.
    data_path: Option<String>,

    /// JSON corpus options file; explicit flags override its values.
    #[arg(long)]
    config: Option<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Token granularity: "word" or "char".
    #[arg(long, value_parser = parse_granularity)]
    level: Option<TokenGranularity>,

    /// Load a ``token,rank`` vocabulary instead of building one.
    #[arg(long)]
    vocab: Option<String>,

    /// Which split to batch: "train", "valid" or "test".
    #[arg(long, default_value = "train", value_parser = parse_split)]
    split: Split,

    /// Rows per window.
    #[arg(long, default_value = "20")]
    batch_size: usize,

    /// Columns per window.
    #[arg(long, default_value = "35")]
    num_steps: usize,

    /// Number of window pairs to print.
    #[arg(long, default_value = "1")]
    windows: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl BatchesArgs {
    /// Resolve the corpus options from `--config` and the flags.
    pub fn corpus_options(&self) -> Result<CorpusOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                let file = std::fs::File::open(path)?;
                serde_json::from_reader(std::io::BufReader::new(file))?
            }
            None => CorpusOptions::default(),
        };

        if let Some(data_path) = &self.data_path {
            options = options.with_data_path(data_path);
        }
        if let Some(level) = self.level {
            options = options.with_granularity(level);
        }
        if let Some(vocab) = &self.vocab {
            options = options.with_vocab_path(Some(vocab));
        }

        Ok(options)
    }

    /// Run the batches command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Info)?;
        self.execute()
    }

    fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let options = self.corpus_options()?;
        let corpus: RawCorpus<u32> = options.load()?;

        let producer = corpus.producer(
            self.split,
            BatchProducerOptions::new(self.batch_size, self.num_steps),
        )?;
        log::info!(
            "{}: {} ids; vocab size {}; epoch size {}",
            self.split,
            corpus.split(self.split).len(),
            corpus.vocab_size(),
            producer.epoch_size()
        );

        let mut writer = self.output.open_writer()?;
        for pair in producer.iter().take(self.windows) {
            writeln!(writer, "# step {} input", pair.step)?;
            write_window(&mut writer, &pair.input)?;
            writeln!(writer, "# step {} target", pair.step)?;
            write_window(&mut writer, &pair.target)?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_window(
    writer: &mut dyn Write,
    window: &BatchWindow<u32>,
) -> std::io::Result<()> {
    for row in window.iter_rows() {
        write_ids(writer, row)?;
    }
    Ok(())
}

use std::io::Write;

use log::LevelFilter;
use wordbatcher::TokenGranularity;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_source::{VocabSourceArgs, parse_granularity},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab_source: VocabSourceArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Token granularity: "word" or "char".
    #[arg(long, default_value = "word", value_parser = parse_granularity)]
    level: TokenGranularity,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Warn)?;
        self.execute()
    }

    fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab_source.load_vocab(self.level)?;
        let text = self.input.read_to_string()?;
        let ids = vocab.encode_text(&text, self.level);
        log::info!("encoded {} ids", ids.len());

        let mut writer = self.output.open_writer()?;
        write_ids(&mut writer, &ids)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write ids space-separated on a single line.
pub fn write_ids(
    writer: &mut dyn Write,
    ids: &[u32],
) -> std::io::Result<()> {
    for (idx, id) in ids.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
    }
    writeln!(writer)
}

mod batches;
mod encode;
mod vocab;

/// Subcommands for wbatcher
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from a training file.
    Vocab(vocab::VocabArgs),

    /// Encode text to ids with a built or loaded vocabulary.
    Encode(encode::EncodeArgs),

    /// Load a corpus directory and print training windows.
    Batches(batches::BatchesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Batches(cmd) => cmd.run(),
        }
    }
}

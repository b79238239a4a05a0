use wordbatcher::{
    Split,
    TokenGranularity,
    TokenVocab,
    vocab::{build_vocab_path, io::load_rank_vocab_path},
};

/// Parse a `--level` value.
pub fn parse_granularity(value: &str) -> Result<TokenGranularity, String> {
    TokenGranularity::parse(value).map_err(|e| e.to_string())
}

/// Parse a `--split` value.
pub fn parse_split(value: &str) -> Result<Split, String> {
    value
        .parse()
        .map_err(|_| format!("unknown split {value:?}; expected train, valid or test"))
}

/// Vocabulary source arg group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct VocabSourceArgs {
    /// Build the vocabulary from this training file.
    #[arg(long)]
    train: Option<String>,

    /// Load a ``token,rank`` vocabulary file.
    #[arg(long)]
    vocab: Option<String>,
}

impl VocabSourceArgs {
    /// Build or load the vocabulary.
    pub fn load_vocab(
        &self,
        granularity: TokenGranularity,
    ) -> Result<TokenVocab<u32>, Box<dyn std::error::Error>> {
        let vocab = match (&self.vocab, &self.train) {
            (Some(path), _) => {
                log::info!("loading vocab: {path}");
                load_rank_vocab_path(path)?
            }
            (None, Some(path)) => {
                log::info!("building {granularity} vocab: {path}");
                build_vocab_path(path, granularity)?
            }
            (None, None) => return Err("one of --train or --vocab is required".into()),
        };
        log::info!("vocab size: {}", vocab.len());
        Ok(vocab)
    }
}

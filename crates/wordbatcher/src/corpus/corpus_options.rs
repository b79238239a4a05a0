//! # Corpus Options

use std::path::{Path, PathBuf};

use crate::{
    corpus::{RawCorpus, Split, load_corpus},
    errors::WBResult,
    types::TokenType,
    vocab::TokenGranularity,
};

/// The default training split file name.
pub const PTB_TRAIN_FILE: &str = "ptb.train.txt";

/// The default validation split file name.
pub const PTB_VALID_FILE: &str = "ptb.valid.txt";

/// The default test split file name.
pub const PTB_TEST_FILE: &str = "ptb.test.txt";

/// Options for [`load_corpus`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CorpusOptions {
    /// The directory holding the split files.
    pub data_path: PathBuf,

    /// How text is split into tokens.
    pub granularity: TokenGranularity,

    /// The training split file name, relative to `data_path`.
    pub train_file: String,

    /// The validation split file name, relative to `data_path`.
    pub valid_file: String,

    /// The test split file name, relative to `data_path`.
    pub test_file: String,

    /// A ``token,rank`` vocabulary file to load instead of building one.
    pub vocab_path: Option<PathBuf>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("."),
            granularity: TokenGranularity::default(),
            train_file: PTB_TRAIN_FILE.to_string(),
            valid_file: PTB_VALID_FILE.to_string(),
            test_file: PTB_TEST_FILE.to_string(),
            vocab_path: None,
        }
    }
}

impl CorpusOptions {
    /// Create new options for the PTB file layout under `data_path`.
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Sets the data directory.
    pub fn with_data_path<P: AsRef<Path>>(
        self,
        data_path: P,
    ) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            ..self
        }
    }

    /// Sets the token granularity.
    pub fn with_granularity(
        self,
        granularity: TokenGranularity,
    ) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    /// Sets the file name for `split`.
    pub fn with_split_file<S: Into<String>>(
        mut self,
        split: Split,
        file: S,
    ) -> Self {
        let file = file.into();
        match split {
            Split::Train => self.train_file = file,
            Split::Valid => self.valid_file = file,
            Split::Test => self.test_file = file,
        }
        self
    }

    /// Sets (or clears) the external vocabulary file.
    pub fn with_vocab_path<P: AsRef<Path>>(
        self,
        vocab_path: Option<P>,
    ) -> Self {
        Self {
            vocab_path: vocab_path.map(|p| p.as_ref().to_path_buf()),
            ..self
        }
    }

    /// The full path of the file for `split`.
    pub fn split_path(
        &self,
        split: Split,
    ) -> PathBuf {
        let file = match split {
            Split::Train => &self.train_file,
            Split::Valid => &self.valid_file,
            Split::Test => &self.test_file,
        };
        self.data_path.join(file)
    }

    /// Load the corpus described by these options.
    pub fn load<T: TokenType>(&self) -> WBResult<RawCorpus<T>> {
        load_corpus(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorpusOptions::new("/data/ptb");

        assert_eq!(options.granularity, TokenGranularity::Word);
        assert_eq!(
            options.split_path(Split::Train),
            PathBuf::from("/data/ptb/ptb.train.txt")
        );
        assert_eq!(
            options.split_path(Split::Test),
            PathBuf::from("/data/ptb/ptb.test.txt")
        );
        assert!(options.vocab_path.is_none());
    }

    #[test]
    fn test_builders() {
        let options = CorpusOptions::default()
            .with_data_path("corpus")
            .with_granularity(TokenGranularity::Char)
            .with_split_file(Split::Valid, "dev.txt")
            .with_vocab_path(Some("vocab.csv"));

        assert_eq!(
            options.split_path(Split::Valid),
            PathBuf::from("corpus/dev.txt")
        );
        assert_eq!(options.vocab_path, Some(PathBuf::from("vocab.csv")));
    }

    #[test]
    fn test_serde_partial() {
        let options: CorpusOptions =
            serde_json::from_str(r#"{"data_path": "d", "granularity": "char"}"#).unwrap();

        assert_eq!(options.data_path, PathBuf::from("d"));
        assert_eq!(options.granularity, TokenGranularity::Char);
        assert_eq!(options.train_file, PTB_TRAIN_FILE);
    }
}

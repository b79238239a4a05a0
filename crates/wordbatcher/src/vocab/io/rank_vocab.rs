//! # Rank Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WBResult, WordbatcherError},
    types::TokenType,
    vocab::TokenVocab,
};

/// Load a [`TokenVocab`] from a rank vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN},{RANK}
/// ```
///
/// Ranks are 1-based; the loaded id is ``RANK - 1``.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_rank_vocab_path<T, P>(path: P) -> WBResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_rank_vocab(reader)
}

/// Read a [`TokenVocab`] from a rank vocab line reader.
///
/// The rank is the text after the last comma, so tokens may themselves
/// contain commas. Blank lines are skipped.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_rank_vocab<T, R>(reader: R) -> WBResult<TokenVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = TokenVocab::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.strip_suffix('\r').unwrap_or(&line);
        if s.is_empty() {
            continue;
        }

        let (token, rank) = s.rsplit_once(',').ok_or_else(|| {
            WordbatcherError::Parse(format!("line {}: expected \"token,rank\": {s:?}", idx + 1))
        })?;

        let rank: u64 = rank
            .trim()
            .parse()
            .map_err(|e: core::num::ParseIntError| {
                WordbatcherError::Parse(format!("line {}: {e}", idx + 1))
            })?;
        if rank == 0 {
            return Err(WordbatcherError::Parse(format!(
                "line {}: ranks start at 1",
                idx + 1
            )));
        }

        let id = T::from_u64(rank - 1).ok_or(WordbatcherError::TokenOutOfRange)?;
        vocab.insert(token.to_string(), id);
    }

    Ok(vocab)
}

/// Save a [`TokenVocab`] to a rank vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_rank_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &TokenVocab<T>,
    path: P,
) -> WBResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_rank_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`TokenVocab`] to a [`Write`] writer, in id order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_rank_vocab<T, W>(
    vocab: &TokenVocab<T>,
    writer: &mut W,
) -> WBResult<()>
where
    T: TokenType,
    W: Write,
{
    for (id, token) in vocab.iter() {
        let rank = id
            .to_u64()
            .and_then(|id| id.checked_add(1))
            .ok_or(WordbatcherError::TokenOutOfRange)?;
        writeln!(writer, "{token},{rank}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rank_vocab() {
        let data = "the,1\n<eos>,2\r\na,b,3\n\nof, 4\n";
        let vocab: TokenVocab<u32> = read_rank_vocab(data.as_bytes()).unwrap();

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.token_to_id("the"), Some(0));
        assert_eq!(vocab.token_to_id("<eos>"), Some(1));
        assert_eq!(vocab.token_to_id("a,b"), Some(2));
        assert_eq!(vocab.token_to_id("of"), Some(3));
    }

    #[test]
    fn test_read_rank_vocab_errors() {
        for data in ["the\n", "the,x\n", "the,0\n", "the,-1\n"] {
            let err = read_rank_vocab::<u32, _>(data.as_bytes()).unwrap_err();
            assert!(matches!(err, WordbatcherError::Parse(_)), "{data:?}: {err:?}");
        }

        let err = read_rank_vocab::<u8, _>("big,1000\n".as_bytes()).unwrap_err();
        assert!(matches!(err, WordbatcherError::TokenOutOfRange));
    }

    #[test]
    fn test_comma_token_round_trip() {
        let vocab: TokenVocab<u32> = TokenVocab::from_ordered_tokens([",", "x"]).unwrap();

        let mut buf: Vec<u8> = vec![];
        write_rank_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), ",,1\nx,2\n");

        let loaded: TokenVocab<u32> = read_rank_vocab(buf.as_slice()).unwrap();
        assert_eq!(loaded.token_to_id(","), Some(0));
        assert_eq!(&loaded, &vocab);
    }

    #[test]
    fn test_save_load_rank_vocab() {
        type T = u32;

        let vocab: TokenVocab<T> =
            TokenVocab::from_ordered_tokens(["apple", "banana", "pear,plum"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.csv");

                save_rank_vocab_path(&vocab, &path).expect("Failed to save vocab");
                assert_eq!(
                    std::fs::read_to_string(&path)?,
                    "apple,1\nbanana,2\npear,plum,3\n"
                );

                let loaded: TokenVocab<T> =
                    load_rank_vocab_path(&path).expect("Failed to load vocab");
                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }
}

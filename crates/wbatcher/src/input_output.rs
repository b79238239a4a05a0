use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

/// A file path, unless `arg` is absent or `-` (the standard stream).
fn file_target(arg: &Option<PathBuf>) -> Option<&Path> {
    arg.as_deref().filter(|p| p.as_os_str() != "-")
}

fn describe(
    arg: &Option<PathBuf>,
    stream: &'static str,
) -> String {
    match file_target(arg) {
        Some(path) => path.display().to_string(),
        None => stream.to_string(),
    }
}

/// Corpus text input; stdin when absent or `-`.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Text to encode; "-" reads stdin.
    #[clap(long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read the whole input as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String, Box<dyn std::error::Error>> {
        log::debug!("reading {}", describe(&self.input, "<stdin>"));
        let mut text = String::new();
        match file_target(&self.input) {
            Some(path) => File::open(path)?.read_to_string(&mut text)?,
            None => std::io::stdin().lock().read_to_string(&mut text)?,
        };
        Ok(text)
    }
}

/// Command output; stdout when absent or `-`.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Where to write results; "-" writes stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a buffered writer; callers must flush it.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        log::info!("writing {}", describe(&self.output, "<stdout>"));
        Ok(match file_target(&self.output) {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

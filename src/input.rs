use log::info;
use memmap::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid value {token:?} at byte {offset}")]
    Malformed { token: String, offset: usize },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> InputError + '_ {
    move |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_stdin() -> Result<Vec<u8>, InputError> {
    let mut buffer = vec![];
    io::stdin()
        .read_to_end(&mut buffer)
        .map_err(io_error(Path::new("<stdin>")))?;
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<Vec<i64>, InputError> {
    let file = File::open(path).map_err(io_error(path))?;
    let len = file.metadata().map_err(io_error(path))?.len();
    if len == 0 {
        return Ok(vec![]);
    }
    let map = unsafe { Mmap::map(&file) }.map_err(io_error(path))?;
    info!("mapped {} bytes from {}", len, path.display());
    parse(&map)
}

fn parse_token(token: &[u8], offset: usize) -> Result<i64, InputError> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| InputError::Malformed {
            token: String::from_utf8_lossy(token).into_owned(),
            offset,
        })
}

pub(crate) fn parse(bytes: &[u8]) -> Result<Vec<i64>, InputError> {
    let mut values = vec![];
    let mut offset = 0;
    for token in bytes.split(u8::is_ascii_whitespace) {
        if !token.is_empty() {
            values.push(parse_token(token, offset)?);
        }
        offset += token.len() + 1;
    }
    Ok(values)
}

pub(crate) fn load(path: Option<&Path>) -> Result<Vec<i64>, InputError> {
    match path {
        Some(path) => read_file(path),
        None => parse(&read_stdin()?),
    }
}

use sortq::OrderedQueue;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};

pub(crate) fn queue<W, T, C>(
    out: &mut W,
    queue: &OrderedQueue<T, C>,
) -> io::Result<()>
where
    W: Write,
    T: fmt::Display,
{
    for element in queue {
        writeln!(out, "{}", element)?;
    }
    out.flush()
}

pub(crate) fn top<W, T, C>(
    out: &mut W,
    queue: &OrderedQueue<T, C>,
) -> io::Result<()>
where
    W: Write,
    T: fmt::Display,
{
    if let Some(top) = queue.top() {
        writeln!(out, "{}", top)?;
    }
    out.flush()
}

pub(crate) fn error(error: &dyn Error) {
    eprintln!("sortq: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

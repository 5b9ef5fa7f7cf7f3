use crate::input::{self, InputError};
use crate::options::{Options, Order};
use crate::output::print;
use log::{info, warn};
use sortq::{Compare, Greater, Less, OrderedQueue, QueueError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("cannot erase")]
    Erase(#[from] QueueError),
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

fn drive<C: Compare<i64>, W: io::Write>(
    mut queue: OrderedQueue<i64, C>,
    values: Vec<i64>,
    options: &Options,
    out: &mut W,
) -> Result<(), Error> {
    queue.emplace_all(values);
    for popped in 0..options.pop {
        if queue.pop_back().is_none() {
            warn!("queue exhausted after {} of {} pops", popped, options.pop);
            break;
        }
    }
    for &index in &options.erase {
        queue.erase(index)?;
    }
    info!("{} values remain", queue.len());
    if options.top {
        print::top(out, &queue)?;
    } else {
        print::queue(out, &queue)?;
    }
    Ok(())
}

fn sort_into<W: io::Write>(
    values: Vec<i64>,
    options: &Options,
    out: &mut W,
) -> Result<(), Error> {
    match options.order {
        Order::Ascending => {
            drive(OrderedQueue::<i64, Less>::new(), values, options, out)
        }
        Order::Descending => {
            drive(OrderedQueue::<i64, Greater>::new(), values, options, out)
        }
    }
}

pub(crate) fn run(options: &Options) -> Result<(), Error> {
    let values = input::load(options.path.as_deref())?;
    info!("loaded {} values", values.len());
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    sort_into(values, options, &mut out)
}

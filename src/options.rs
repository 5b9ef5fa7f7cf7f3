use std::path::PathBuf;
use structopt::StructOpt;

const NAME: &str = "sortq";

const ABOUT: &str = "
sortq loads whitespace-separated integers into an always-sorted priority queue
and prints them in priority order, one per line.
Values are read from PATH, or from stdin when no path is given.
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn new(tag: &str) -> Self {
        match tag {
            "ascending" => Self::Ascending,
            "descending" => Self::Descending,
            _ => unreachable!(),
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(parse(from_os_str), help = "path to input values")]
    pub(crate) path: Option<PathBuf>,

    #[structopt(
        long,
        help = "priority order",
        possible_values = &["ascending", "descending"],
        default_value = "ascending",
        parse(from_str = Order::new)
    )]
    pub(crate) order: Order,

    #[structopt(
        long,
        help = "remove this many elements from the top",
        default_value = "0"
    )]
    pub(crate) pop: usize,

    #[structopt(
        long,
        number_of_values = 1,
        help = "erase the element at this position (repeatable)"
    )]
    pub(crate) erase: Vec<usize>,

    #[structopt(long, help = "print only the top element")]
    pub(crate) top: bool,

    #[structopt(short, long, help = "log progress on stderr")]
    pub(crate) verbose: bool,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }
}

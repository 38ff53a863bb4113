mod classifier;
mod stream;
mod tracker;

pub use classifier::{classify, split_terminator, LineKind};
pub use stream::{parse_tree, ParseOptions};
pub use tracker::{ClosedGroup, GroupStack};

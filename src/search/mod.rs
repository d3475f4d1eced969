pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{best_move, SearchParams, SearchResult, Searcher, Side};
